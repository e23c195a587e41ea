//! Repository traits (interfaces)
//!
//! Contracts for the collaborators the core calls out to: reading a file's
//! bytes and extracting per-category metadata. The concrete adapters live in
//! the infrastructure layer.

mod extractors;
mod file_source;

pub use extractors::{FileStatReader, ImageInspector};
pub use file_source::FileSource;
