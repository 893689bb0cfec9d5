//! Infrastructure layer - External I/O and persistence

pub mod store;

pub use store::ConfigStore;
