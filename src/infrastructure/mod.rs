//! Infrastructure layer for sandbox filesystem locations.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, store_file, trace_file};
