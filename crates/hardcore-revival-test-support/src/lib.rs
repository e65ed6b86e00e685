//! Shared test mocks and utilities for the Hardcore Revival module.

mod altar;
mod clock;
mod host;
mod repository;

pub use altar::{ALTAR_WORLD, build_altar, head_for, named_head, ritual_chest_contents};
pub use clock::{FixedClock, ManualClock};
pub use host::{MemoryHost, OnlinePlayer};
pub use repository::{FailingRevivalRepository, InMemoryRevivalRepository};
