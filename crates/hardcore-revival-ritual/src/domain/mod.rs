//! Domain layer of the ritual context.

pub mod altar;
pub mod commands;
pub mod effects;
pub mod events;
pub mod recipe;
pub mod rejection;
pub mod restore;
pub mod target;
