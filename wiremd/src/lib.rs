//! Library surface of the wiremd binary.
//!
//! The subcommand implementations live here so integration tests can
//! exercise them directly; `main.rs` is argument handling and glue.
pub mod build;
pub mod cli;
pub mod config;
pub mod error;
pub mod watch;
