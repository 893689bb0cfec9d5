//! flatconf - Flat key=value configuration file tool
//!
//! Reads and writes minimal `key=value` configuration files, skipping
//! comment and section lines. The store is usable as a library through
//! [`ConfigStore`] and from the command line through the `flatconf` binary.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::FlatconfError;
pub use infrastructure::ConfigStore;
