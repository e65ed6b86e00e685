//! Shared domain abstractions for Hardcore Revival.
//!
//! This crate defines the types and seams every other crate depends on:
//! world positions, items, players, the host game-server interface, the
//! persistence trait, and the module configuration. It contains no
//! infrastructure code.

pub mod clock;
pub mod config;
pub mod error;
pub mod event;
pub mod host;
pub mod item;
pub mod player;
pub mod position;
pub mod recipe;
pub mod repository;
pub mod text;
