//! Flat file persistence for Hardcore Revival.
//!
//! Pending revivals and altar cooldowns live in memory and are mirrored to
//! a single YAML document after every change.

pub mod flat_file_store;
pub mod schema;

pub use flat_file_store::FlatFileStore;
