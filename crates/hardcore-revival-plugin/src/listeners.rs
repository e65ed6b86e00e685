//! Host event dispatch.

use hardcore_revival_core::item::{ItemStack, Material};
use hardcore_revival_core::player::PlayerProfile;
use hardcore_revival_core::position::{BlockPos, Location};
use hardcore_revival_ritual::application::command_handlers::{self, RitualOutcome};
use hardcore_revival_ritual::domain::commands::{ApplyPendingRevival, PlaceHead, RecordDeath};
use hardcore_revival_ritual::domain::events::RitualEvent;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::error::PluginError;
use crate::plugin::RevivalPlugin;

/// Notifications the host forwards to the plugin.
#[derive(Debug, Clone)]
pub enum HostEvent {
    /// A player placed a block.
    BlockPlaced {
        /// Who placed it.
        placer: PlayerProfile,
        /// Where it landed.
        placed_at: BlockPos,
        /// What was placed.
        placed_block: Material,
        /// The item the placer held.
        item_in_hand: Option<ItemStack>,
    },
    /// A player died.
    PlayerDied {
        /// Who died.
        player: PlayerProfile,
        /// Where.
        location: Location,
    },
    /// A player connected.
    PlayerJoined {
        /// Who joined.
        player: PlayerProfile,
    },
}

impl HostEvent {
    fn name(&self) -> &'static str {
        match self {
            Self::BlockPlaced { .. } => "block_placed",
            Self::PlayerDied { .. } => "player_died",
            Self::PlayerJoined { .. } => "player_joined",
        }
    }
}

impl RevivalPlugin {
    /// Routes a host event to its handler. Returns the domain event it
    /// produced, if any.
    ///
    /// # Errors
    ///
    /// Returns `PluginError::Domain` if the handler failed.
    #[instrument(skip_all, fields(event = event.name()))]
    pub async fn on_event(&self, event: HostEvent) -> Result<Option<RitualEvent>, PluginError> {
        let correlation_id = Uuid::new_v4();
        let config = self.config().await;
        let host = self.host.as_ref();
        let clock = self.clock.as_ref();

        let produced = match event {
            HostEvent::BlockPlaced {
                placer,
                placed_at,
                placed_block,
                item_in_hand,
            } => {
                let command = PlaceHead {
                    correlation_id,
                    placer,
                    placed_at,
                    placed_block,
                    item_in_hand,
                };
                match command_handlers::handle_head_placed(
                    &command,
                    &config,
                    clock,
                    host,
                    self.repository.as_ref(),
                )
                .await?
                {
                    RitualOutcome::Completed(event) => Some(event),
                    RitualOutcome::Ignored | RitualOutcome::Rejected(_) => None,
                }
            }
            HostEvent::PlayerDied { player, location } => {
                let command = RecordDeath {
                    correlation_id,
                    player,
                    location,
                };
                command_handlers::handle_player_died(&command, &config, clock, host)
            }
            HostEvent::PlayerJoined { player } => {
                let command = ApplyPendingRevival {
                    correlation_id,
                    player,
                };
                command_handlers::handle_player_joined(
                    &command,
                    clock,
                    host,
                    self.repository.as_ref(),
                )
                .await?
            }
        };

        if let Some(event) = &produced {
            debug!(
                correlation_id = %correlation_id,
                produced = %event.metadata.event_type,
                "event handled"
            );
        }
        Ok(produced)
    }
}
