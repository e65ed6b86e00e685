//! Hardcore Revival plugin.
//!
//! Wires the ritual handlers to a host server: loads `config.yml` and
//! `data.yml` from the plugin's data folder, dispatches host events, and
//! answers the `hrreload` and `hrcheck` admin commands.

pub mod commands;
pub mod defaults;
pub mod error;
pub mod listeners;
pub mod plugin;
pub mod telemetry;

pub use error::PluginError;
pub use listeners::HostEvent;
pub use plugin::RevivalPlugin;
