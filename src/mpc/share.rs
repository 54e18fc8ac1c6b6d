//! Secret Share Definition.
//!
//! A share is a point $(x, y)$ on the polynomial used to hide the secret.
//! - $x$ (identifier): A non-zero field element unique within one split.
//! - $y$ (value): The evaluation of the polynomial at $x$.
//!
//! # Security
//! - Implements `Zeroize` and `ZeroizeOnDrop` to wipe the value from memory.
//! - `Debug` implementation redacts the actual value.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};
use super::SharingError;

/// A share of a secret.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ShareRepr", into = "ShareRepr"))]
pub struct Share {
    /// The x-coordinate, in `[1, p)`.
    /// Public information (who owns the share).
    #[zeroize(skip)]
    identifier: u64,

    /// The y-coordinate, in `[0, p)`.
    /// Highly sensitive information.
    value: u64,
}

impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Share")
            .field("identifier", &self.identifier)
            .field("value", &"***SENSITIVE***")
            .finish()
    }
}

impl Share {
    /// Creates a new share with validation.
    ///
    /// # Returns
    /// * `Err(SharingError::InvalidShare)` if `identifier` is zero, since
    ///   the polynomial at zero is the secret itself.
    pub fn new(identifier: u64, value: u64) -> Result<Self, SharingError> {
        if identifier == 0 {
            return Err(SharingError::InvalidShare);
        }
        Ok(Self { identifier, value })
    }

    /// The x-coordinate.
    pub fn identifier(&self) -> u64 {
        self.identifier
    }

    /// The y-coordinate.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Encodes the share as `"<x>-<y>"`, each 16 lowercase hex digits (big-endian).
    pub fn encode(&self) -> String {
        let value = Zeroizing::new(self.value.to_be_bytes());
        let mut out = hex::encode(self.identifier.to_be_bytes());
        out.push('-');
        out.push_str(&hex::encode(&value[..]));
        out
    }

    /// Parses the form produced by [`Share::encode`].
    ///
    /// # Failure Modes
    /// - `MalformedShare` if the text is not two 16-digit hex fields.
    /// - `InvalidShare` if the identifier is zero.
    pub fn decode(text: &str) -> Result<Self, SharingError> {
        let (x_hex, y_hex) = text.trim().split_once('-').ok_or(SharingError::MalformedShare)?;
        let identifier = decode_u64(x_hex)?;
        let value = decode_u64(y_hex)?;
        Share::new(identifier, value)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct ShareRepr {
    identifier: u64,
    value: u64,
}

#[cfg(feature = "serde")]
impl TryFrom<ShareRepr> for Share {
    type Error = SharingError;

    fn try_from(repr: ShareRepr) -> Result<Self, Self::Error> {
        Share::new(repr.identifier, repr.value)
    }
}

#[cfg(feature = "serde")]
impl From<Share> for ShareRepr {
    fn from(share: Share) -> Self {
        ShareRepr {
            identifier: share.identifier,
            value: share.value,
        }
    }
}

fn decode_u64(field: &str) -> Result<u64, SharingError> {
    let mut buf = Zeroizing::new([0u8; 8]);
    if field.len() != 16 {
        return Err(SharingError::MalformedShare);
    }
    hex::decode_to_slice(field, &mut buf[..]).map_err(|_| SharingError::MalformedShare)?;
    Ok(u64::from_be_bytes(*buf))
}

/// The output of one `split` call.
///
/// Stamped with the threshold and prime it was generated under, so a scheme
/// can refuse to combine shares from a different configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareSet {
    threshold: usize,
    prime: u64,
    shares: Vec<Share>,
}

impl ShareSet {
    pub(crate) fn new(threshold: usize, prime: u64, shares: Vec<Share>) -> Self {
        Self { threshold, prime, shares }
    }

    /// Threshold of the scheme that produced these shares.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Field prime of the scheme that produced these shares.
    pub fn prime(&self) -> u64 {
        self.prime
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    /// The shares, in the order the split produced them.
    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Share> {
        self.shares.iter()
    }

    /// A new set holding the shares at `indices`, keeping this set's stamp.
    ///
    /// # Failure Modes
    /// - `InvalidShare` if an index is out of bounds.
    /// - `DuplicateShare` if an index repeats.
    pub fn subset(&self, indices: &[usize]) -> Result<ShareSet, SharingError> {
        let mut picked: Vec<Share> = Vec::with_capacity(indices.len());
        for (pos, &i) in indices.iter().enumerate() {
            if indices[..pos].contains(&i) {
                return Err(SharingError::DuplicateShare);
            }
            let share = self.shares.get(i).ok_or(SharingError::InvalidShare)?;
            picked.push(share.clone());
        }
        Ok(ShareSet::new(self.threshold, self.prime, picked))
    }

    /// Hands the shares to the caller.
    pub fn into_shares(self) -> Vec<Share> {
        self.shares
    }
}

impl<'a> IntoIterator for &'a ShareSet {
    type Item = &'a Share;
    type IntoIter = core::slice::Iter<'a, Share>;

    fn into_iter(self) -> Self::IntoIter {
        self.shares.iter()
    }
}
