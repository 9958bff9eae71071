//! # User Interface
//!
//! Colored terminal output with clickable file links.

pub mod log;

pub use log::{debug, error, excerpt, header, info, path_link, ranked_entry, success, warn, Log};
