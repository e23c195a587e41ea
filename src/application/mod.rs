//! Application layer
//!
//! Use cases that orchestrate domain logic.

mod analyze_file;
pub mod dto;

pub use analyze_file::AnalyzeFileUseCase;
