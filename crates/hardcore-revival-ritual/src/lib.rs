//! Hardcore Revival ritual context.
//!
//! Responsible for altar validation, the revival ritual itself, revival
//! tokens dropped on death, deferred revivals applied on join, and the
//! player status query behind the admin check command.

pub mod application;
pub mod domain;
