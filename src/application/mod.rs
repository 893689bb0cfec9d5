//! Application layer - Use cases and orchestration

pub mod manage_store;

pub use manage_store::StoreService;
