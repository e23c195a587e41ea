//! File access adapters

mod local_file_source;

pub use local_file_source::LocalFileSource;
