//! Infrastructure layer
//!
//! Concrete implementations of the domain repositories. This layer holds the
//! filesystem access and the image decoding dependency.

pub mod extractors;
pub mod persistence;
