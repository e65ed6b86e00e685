//! Application layer: handlers invoked for host events and admin queries.

pub mod command_handlers;
pub mod query_handlers;
