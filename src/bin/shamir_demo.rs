//! Splits a random numeric password into shares and reconstructs it.
//!
//! Log output goes to stderr through `env_logger`. `RUST_LOG` overrides the
//! default `info` level (e.g. `RUST_LOG=debug` also prints the shares).

use std::process::ExitCode;

use prime_shamir::config::DemoConfig;
use prime_shamir::demo::run_demo;
use prime_shamir::entropy::os::OsSource;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut rng = OsSource::new();
    match run_demo(&DemoConfig::default(), &mut rng) {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Demo failed: {}", e);
            eprintln!("shamir-demo: {}", e);
            ExitCode::FAILURE
        }
    }
}
