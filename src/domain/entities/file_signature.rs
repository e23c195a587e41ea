//! File signature entity
//!
//! A signature is the run of magic bytes at offset 0 that identifies a file
//! format. Signatures are raw bytes with an explicit length and may contain
//! NUL, so they are never handled as text.

use crate::core::RegistryError;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Magic bytes identifying a file format
///
/// Signatures are totally ordered longest-first, ties broken by
/// lexicographic byte order. The registry stores its entries in this order
/// and the matcher walks them in it, so a longer signature always wins over
/// one of its own prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature(Vec<u8>);

impl Signature {
    /// Creates a signature, rejecting empty byte sequences
    pub fn new(bytes: &[u8]) -> Result<Self, RegistryError> {
        if bytes.is_empty() {
            return Err(RegistryError::InvalidSignature);
        }
        Ok(Self(bytes.to_vec()))
    }

    /// Returns the raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of bytes in the signature
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a constructed signature
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks whether `data` starts with this signature
    ///
    /// Buffers shorter than the signature never match.
    pub fn matches_header(&self, data: &[u8]) -> bool {
        data.len() >= self.0.len() && data[..self.0.len()] == self.0[..]
    }
}

impl Ord for Signature {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .len()
            .cmp(&self.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Signature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

/// Short identifier of a concrete file type, such as `jpeg` or `wav`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TypeLabel(String);

impl TypeLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TypeLabel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for TypeLabel {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl fmt::Display for TypeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
