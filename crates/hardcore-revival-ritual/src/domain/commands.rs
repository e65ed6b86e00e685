//! Commands for the revival ritual.

use hardcore_revival_core::item::{ItemStack, Material};
use hardcore_revival_core::player::PlayerProfile;
use hardcore_revival_core::position::{BlockPos, Location};
use uuid::Uuid;

/// A player placed a block that may be a revival head.
#[derive(Debug, Clone)]
pub struct PlaceHead {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The player who placed the block.
    pub placer: PlayerProfile,
    /// Where the block was placed.
    pub placed_at: BlockPos,
    /// What was placed.
    pub placed_block: Material,
    /// The item the placer held, if any.
    pub item_in_hand: Option<ItemStack>,
}

/// A player died.
#[derive(Debug, Clone)]
pub struct RecordDeath {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The player who died.
    pub player: PlayerProfile,
    /// Where they died.
    pub location: Location,
}

/// A player connected; apply their pending revival if one is queued.
#[derive(Debug, Clone)]
pub struct ApplyPendingRevival {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The player who joined.
    pub player: PlayerProfile,
}
