//! The host game-server interface.
//!
//! The revival module never owns world state. Every block read, inventory
//! edit, player mutation, chat message, effect and deferred task goes
//! through [`GameHost`], which the embedding server implements.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::{ParticleSpec, SoundSpec};
use crate::item::{ItemStack, Material};
use crate::player::{GameMode, PlayerProfile, PlayerState, PotionEffect};
use crate::position::{BlockPos, Location};
use crate::recipe::ShapelessRecipe;

/// Failures reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The player is not online.
    #[error("player {0} is not online")]
    PlayerOffline(Uuid),

    /// No container exists at the given block.
    #[error("no container at {0}")]
    NoContainer(BlockPos),

    /// The slot index is outside the container.
    #[error("slot {slot} out of range at {pos}")]
    SlotOutOfRange {
        /// The container block.
        pos: BlockPos,
        /// The rejected slot index.
        slot: usize,
    },

    /// The host does not know this sound.
    #[error("unknown sound: {0}")]
    UnknownSound(String),

    /// The host does not know this particle.
    #[error("unknown particle: {0}")]
    UnknownParticle(String),

    /// The host refused a recipe.
    #[error("recipe rejected: {0}")]
    RecipeRejected(String),
}

/// Work deferred to a later server tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScheduledTask {
    /// Replace a block.
    SetBlock {
        /// Target block.
        pos: BlockPos,
        /// New block kind.
        material: Material,
    },
    /// Switch a player to spectator mode if they are still online.
    SpectateIfOnline {
        /// The player to switch.
        player_id: Uuid,
    },
    /// Play a sound.
    PlaySound {
        /// Where to play it.
        at: Location,
        /// What to play.
        sound: SoundSpec,
    },
}

/// Services the embedding game server provides to the revival module.
pub trait GameHost: Send + Sync {
    /// Returns the kind of block at `pos`.
    fn block_type(&self, pos: &BlockPos) -> Material;

    /// Replaces the block at `pos`.
    fn set_block_type(&self, pos: &BlockPos, material: Material);

    /// Returns the slots of the container at `pos`, or `None` when the block
    /// holds no inventory.
    fn container_contents(&self, pos: &BlockPos) -> Option<Vec<Option<ItemStack>>>;

    /// Overwrites one slot of the container at `pos`.
    ///
    /// # Errors
    ///
    /// Returns `HostError::NoContainer` or `HostError::SlotOutOfRange`.
    fn set_container_slot(
        &self,
        pos: &BlockPos,
        slot: usize,
        item: Option<ItemStack>,
    ) -> Result<(), HostError>;

    /// Drops an item entity at `at` with natural scatter.
    fn drop_item_naturally(&self, at: &Location, item: ItemStack);

    /// Returns the online player with this id.
    fn online_player(&self, player_id: Uuid) -> Option<PlayerState>;

    /// Looks up a player who has ever joined by name, online or not.
    fn find_profile(&self, name: &str) -> Option<PlayerProfile>;

    /// Changes an online player's game mode.
    ///
    /// # Errors
    ///
    /// Returns `HostError::PlayerOffline` if the player is not online.
    fn set_game_mode(&self, player_id: Uuid, mode: GameMode) -> Result<(), HostError>;

    /// Moves an online player.
    ///
    /// # Errors
    ///
    /// Returns `HostError::PlayerOffline` if the player is not online.
    fn teleport(&self, player_id: Uuid, to: &Location) -> Result<(), HostError>;

    /// Restores an online player's health to its maximum.
    ///
    /// # Errors
    ///
    /// Returns `HostError::PlayerOffline` if the player is not online.
    fn heal_fully(&self, player_id: Uuid) -> Result<(), HostError>;

    /// Sets an online player's food level.
    ///
    /// # Errors
    ///
    /// Returns `HostError::PlayerOffline` if the player is not online.
    fn set_food_level(&self, player_id: Uuid, level: u8) -> Result<(), HostError>;

    /// Removes every active potion effect from an online player.
    ///
    /// # Errors
    ///
    /// Returns `HostError::PlayerOffline` if the player is not online.
    fn clear_potion_effects(&self, player_id: Uuid) -> Result<(), HostError>;

    /// Applies a potion effect to an online player.
    ///
    /// # Errors
    ///
    /// Returns `HostError::PlayerOffline` if the player is not online.
    fn add_potion_effect(&self, player_id: Uuid, effect: PotionEffect) -> Result<(), HostError>;

    /// Sends a chat message to one player. Offline players are ignored.
    fn send_message(&self, player_id: Uuid, message: &str);

    /// Sends a chat message to everyone online.
    fn broadcast(&self, message: &str);

    /// Spawns a particle burst.
    ///
    /// # Errors
    ///
    /// Returns `HostError::UnknownParticle` for unrecognised particle names.
    fn spawn_particle(&self, at: &Location, particle: &ParticleSpec) -> Result<(), HostError>;

    /// Strikes lightning at `at`; `damaging == false` renders the effect
    /// only.
    fn strike_lightning(&self, at: &Location, damaging: bool);

    /// Runs `task` after `delay_ticks` server ticks.
    fn schedule(&self, delay_ticks: u64, task: ScheduledTask);

    /// Unregisters the recipe with this key. Returns whether one existed.
    fn remove_recipe(&self, key: &str) -> bool;

    /// Registers a recipe.
    ///
    /// # Errors
    ///
    /// Returns `HostError::RecipeRejected` if the key is already taken.
    fn add_recipe(&self, recipe: ShapelessRecipe) -> Result<(), HostError>;
}
