//! # Command Implementations
//!
//! Each submodule handles one CLI command (build, list, show, query).

pub mod build;
pub mod list;
pub mod query;
pub mod show;
