use prime_shamir::core::field::PrimeField;
use prime_shamir::entropy::rng::RngSource;
use prime_shamir::mpc::ShamirScheme;
use prime_shamir::{SchemeConfig, Share, SharingError};
use proptest::prelude::*;
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;

const PRIMES: [u64; 5] = [
    10_007,
    65_537,
    4_294_967_291,             // largest prime below 2^32
    2_305_843_009_213_693_951, // 2^61 - 1
    18_446_744_073_709_551_557, // largest prime below 2^64
];

fn rng(seed: u64) -> RngSource<ChaCha20Rng> {
    RngSource::new(ChaCha20Rng::seed_from_u64(seed))
}

/// Threshold, share count, prime, and a secret below the prime.
fn scheme_params() -> impl Strategy<Value = (usize, usize, u64, u64)> {
    (2usize..=6, 0usize..=4, prop::sample::select(PRIMES.to_vec()))
        .prop_flat_map(|(t, extra, p)| (Just(t), Just(t + extra), Just(p), 0..p))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn any_threshold_subset_reconstructs(
        (t, n, p, secret) in scheme_params(),
        seed in any::<u64>(),
        picks in prop::sample::subsequence((0..10usize).collect::<Vec<_>>(), 0..=10),
    ) {
        let scheme = ShamirScheme::new(SchemeConfig::new(t, n, p)).unwrap();
        let set = scheme.split(secret, &mut rng(seed)).unwrap();

        // Take t indices: the sampled ones that are in range, topped up in order.
        let mut idx: Vec<usize> = picks.into_iter().filter(|&i| i < n).collect();
        for i in 0..n {
            if idx.len() >= t {
                break;
            }
            if !idx.contains(&i) {
                idx.push(i);
            }
        }
        idx.truncate(t);

        let subset = set.subset(&idx).unwrap();
        prop_assert_eq!(scheme.combine_set(&subset), Ok(secret));
        prop_assert_eq!(scheme.combine(set.shares()), Ok(secret));
    }

    #[test]
    fn identifiers_are_nonzero_and_distinct(
        (t, n, p, secret) in scheme_params(),
        seed in any::<u64>(),
    ) {
        let scheme = ShamirScheme::new(SchemeConfig::new(t, n, p)).unwrap();
        let set = scheme.split(secret, &mut rng(seed)).unwrap();
        prop_assert_eq!(set.len(), n);

        let mut xs: Vec<u64> = set.iter().map(Share::identifier).collect();
        prop_assert!(xs.iter().all(|&x| x != 0 && x < p));
        xs.sort_unstable();
        xs.dedup();
        prop_assert_eq!(xs.len(), n);
    }

    #[test]
    fn disjoint_subsets_agree(secret in 0u64..10_007, seed in any::<u64>()) {
        let scheme = ShamirScheme::new(SchemeConfig::new(3, 6, 10_007)).unwrap();
        let set = scheme.split(secret, &mut rng(seed)).unwrap();
        let a = scheme.combine(&set.shares()[..3]).unwrap();
        let b = scheme.combine(&set.shares()[3..]).unwrap();
        prop_assert_eq!(a, secret);
        prop_assert_eq!(b, secret);
    }

    #[test]
    fn div_then_mul_is_identity(
        p in prop::sample::select(PRIMES.to_vec()),
        a in any::<u64>(),
        b in any::<u64>(),
    ) {
        let f = PrimeField::new(p).unwrap();
        let a = f.reduce(a);
        let b = f.reduce(b);
        prop_assume!(b != 0);
        let q = f.div(a, b).unwrap();
        prop_assert_eq!(f.mul(q, b), a);
    }

    #[test]
    fn too_few_shares_are_refused(
        (t, n, p, secret) in scheme_params(),
        seed in any::<u64>(),
    ) {
        let scheme = ShamirScheme::new(SchemeConfig::new(t, n, p)).unwrap();
        let set = scheme.split(secret, &mut rng(seed)).unwrap();
        prop_assert_eq!(
            scheme.combine(&set.shares()[..t - 1]),
            Err(SharingError::InsufficientShares)
        );
    }
}

#[test]
fn example_scenario_t3_n5() {
    let scheme = ShamirScheme::new(SchemeConfig::new(3, 5, 10_007)).unwrap();
    let set = scheme.split(1234, &mut rng(42)).unwrap();
    assert_eq!(set.len(), 5);

    for a in 0..5 {
        for b in (a + 1)..5 {
            for c in (b + 1)..5 {
                let subset = set.subset(&[a, b, c]).unwrap();
                assert_eq!(scheme.combine_set(&subset), Ok(1234));
            }
            let pair = set.subset(&[a, b]).unwrap();
            assert_eq!(scheme.combine_set(&pair), Err(SharingError::InsufficientShares));
        }
    }
}

#[test]
fn config_rejection() {
    for cfg in [
        SchemeConfig::new(6, 5, 10_007),
        SchemeConfig::new(1, 5, 10_007),
        SchemeConfig::new(3, 5, 10_005),
    ] {
        assert_eq!(ShamirScheme::new(cfg).unwrap_err(), SharingError::InvalidConfig);
    }
}

#[test]
fn encoded_shares_reconstruct() {
    let scheme = ShamirScheme::new(SchemeConfig::default()).unwrap();
    let secret = 9_876_543_210;
    let set = scheme.split(secret, &mut rng(7)).unwrap();

    let text: Vec<String> = set.iter().map(Share::encode).collect();
    let decoded: Vec<Share> = text[1..4].iter().map(|s| Share::decode(s).unwrap()).collect();
    assert_eq!(scheme.combine(&decoded), Ok(secret));

    // Shares handed out individually recombine without the set wrapper.
    let owned = set.into_shares();
    assert_eq!(scheme.combine(&owned[2..]), Ok(secret));
}

#[test]
fn dense_share_count_splits_and_reconstructs() {
    // n = p - 1 uses every non-zero point of the field.
    let scheme = ShamirScheme::new(SchemeConfig::new(3, 10_006, 10_007)).unwrap();
    let set = scheme.split(4321, &mut rng(99)).unwrap();
    assert_eq!(set.len(), 10_006);

    let mut xs: Vec<u64> = set.iter().map(Share::identifier).collect();
    xs.sort_unstable();
    assert!(xs.iter().copied().eq(1..10_007));
    assert_eq!(scheme.combine(&set.shares()[5_000..5_003]), Ok(4321));
}

#[test]
fn concurrent_callers_share_one_scheme() {
    let scheme = std::sync::Arc::new(ShamirScheme::new(SchemeConfig::new(3, 5, 10_007)).unwrap());
    let handles: Vec<_> = (0..4u64)
        .map(|i| {
            let scheme = scheme.clone();
            std::thread::spawn(move || {
                let secret = 1000 + i;
                let set = scheme.split(secret, &mut rng(i)).unwrap();
                scheme.combine(&set.shares()[2..]).unwrap() == secret
            })
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap());
    }
}
