//! Signature registry service
//!
//! Maps magic bytes to type labels. Entries are kept in a `BTreeMap` keyed by
//! [`Signature`], whose ordering (longest first, then byte order) doubles as
//! the order in which the matcher tries them.

use crate::core::RegistryError;
use crate::domain::entities::{Signature, TypeLabel};
use std::collections::BTreeMap;
use std::fmt;

/// Seed table of known signatures
const SEED_SIGNATURES: &[(&[u8], &str)] = &[
    (&[0xFF, 0xD8, 0xFF], "jpeg"),
    (&[0x89, 0x50, 0x4E, 0x47], "png"),
    (&[0x47, 0x49, 0x46], "gif"),
    (b"RIFF", "wav"),
    (b"OggS", "ogg"),
    (b"ID3", "mp3"),
    (&[0x25, 0x50, 0x44, 0x46], "pdf"),
    (&[0x50, 0x4B, 0x03, 0x04], "docx"),
];

/// Registry of file signatures for file type detection
///
/// Built once, then shared read-only between analyses.
///
/// # Example
///
/// ```
/// use fsniff::domain::services::SignatureRegistry;
///
/// let registry = SignatureRegistry::with_seed_signatures().unwrap();
/// assert_eq!(registry.get(&[0xFF, 0xD8, 0xFF]).unwrap().as_str(), "jpeg");
/// assert_eq!(registry.len(), 8);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SignatureRegistry {
    entries: BTreeMap<Signature, TypeLabel>,
}

impl SignatureRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in signature table
    pub fn with_seed_signatures() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for (bytes, label) in SEED_SIGNATURES {
            registry.put(bytes, *label)?;
        }
        Ok(registry)
    }

    /// Inserts a signature, replacing the label of an existing one
    ///
    /// Returns the label that was replaced, if any.
    pub fn put(
        &mut self,
        signature: &[u8],
        label: impl Into<TypeLabel>,
    ) -> Result<Option<TypeLabel>, RegistryError> {
        let signature = Signature::new(signature)?;
        let label = label.into();
        tracing::trace!(%signature, %label, "registering signature");
        Ok(self.entries.insert(signature, label))
    }

    /// Returns the label registered for exactly `signature`
    pub fn get(&self, signature: &[u8]) -> Result<&TypeLabel, RegistryError> {
        let key = Self::lookup_key(signature)?;
        self.entries
            .get(&key)
            .ok_or_else(|| RegistryError::NotFound(key.to_string()))
    }

    /// Removes `signature` and returns its label
    pub fn remove(&mut self, signature: &[u8]) -> Result<TypeLabel, RegistryError> {
        let key = Self::lookup_key(signature)?;
        self.entries
            .remove(&key)
            .ok_or_else(|| RegistryError::NotFound(key.to_string()))
    }

    /// Whether `signature` is registered
    pub fn contains(&self, signature: &[u8]) -> bool {
        Signature::new(signature).is_ok_and(|key| self.entries.contains_key(&key))
    }

    /// Iterates entries longest signature first
    ///
    /// The order is fixed by the key ordering, so repeated iteration over the
    /// same registry always yields the same sequence.
    pub fn iter(&self) -> impl Iterator<Item = (&Signature, &TypeLabel)> {
        self.entries.iter()
    }

    /// Number of registered signatures
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lookup_key(signature: &[u8]) -> Result<Signature, RegistryError> {
        // An empty probe can never be a key.
        Signature::new(signature).map_err(|_| RegistryError::NotFound("(empty)".to_string()))
    }
}

impl<'a> IntoIterator for &'a SignatureRegistry {
    type Item = (&'a Signature, &'a TypeLabel);
    type IntoIter = std::collections::btree_map::Iter<'a, Signature, TypeLabel>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for SignatureRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (signature, label) in &self.entries {
            writeln!(f, "{} : {}", signature, label)?;
        }
        Ok(())
    }
}
