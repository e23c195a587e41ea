//! Presentation layer
//!
//! Command-line parsing, the interactive prompt and report rendering.

pub mod cli;
