//! Domain entities
//!
//! Core business objects of file identification: signatures, labels,
//! categories and the metadata extracted per category.

mod category;
mod extraction;
mod file_signature;

pub use category::Category;
pub use extraction::{ColorSpace, Extraction, FileStats, ImageMetadata};
pub use file_signature::{Signature, TypeLabel};
