//! Command handlers for the revival ritual.
//!
//! Each handler reacts to one host event: it reads configuration, inspects
//! and mutates the world through the `GameHost`, and records lasting state
//! in the `RevivalRepository`. Persistence failures during a ritual are
//! logged and swallowed; the ritual still completes.

use hardcore_revival_core::clock::Clock;
use hardcore_revival_core::config::RevivalConfig;
use hardcore_revival_core::error::DomainError;
use hardcore_revival_core::host::{GameHost, ScheduledTask};
use hardcore_revival_core::item::{ItemMeta, ItemStack, Material};
use hardcore_revival_core::player::{GameMode, PlayerProfile};
use hardcore_revival_core::position::AltarKey;
use hardcore_revival_core::repository::RevivalRepository;
use hardcore_revival_core::text;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::domain::altar::{consume_chest_items, validate_altar};
use crate::domain::commands::{ApplyPendingRevival, PlaceHead, RecordDeath};
use crate::domain::effects::play_revival_effects;
use crate::domain::events::{
    PendingRevivalApplied, PlayerRevived, RevivalDeferred, RevivalTokenDropped, RitualEvent,
    RitualEventKind,
};
use crate::domain::rejection::Rejection;
use crate::domain::restore::{arrival_point, restore_player};
use crate::domain::target::resolve_target;

/// Lore template of a head dropped on death.
pub const REVIVAL_TOKEN_LORE: &str = "&eRevival Token for &f{player}";

/// Ticks between a head being placed and it being cleared from the fence.
const HEAD_REMOVAL_DELAY_TICKS: u64 = 1;

/// Ticks between a death and the switch to spectator mode.
const SPECTATE_DELAY_TICKS: u64 = 1;

/// Result of a head placement.
#[derive(Debug, Clone, PartialEq)]
pub enum RitualOutcome {
    /// The placed block was not a player head.
    Ignored,
    /// The ritual was refused; the placer has been told why.
    Rejected(Rejection),
    /// The ritual succeeded.
    Completed(RitualEvent),
}

/// Handles a block placement: when a player head lands on a fence above a
/// valid altar, revives the player the head names.
///
/// Online targets must be spectating and are restored on the spot. Offline
/// targets, when allowed, are queued and restored on their next login.
///
/// # Errors
///
/// Returns `DomainError::Host` if the altar's items could not be consumed
/// after validation succeeded. The head stays in place and no effects play,
/// but a container that rejected an update part way may already have lost
/// items.
#[instrument(
    skip_all,
    fields(correlation_id = %command.correlation_id, placer = %command.placer.name)
)]
pub async fn handle_head_placed(
    command: &PlaceHead,
    config: &RevivalConfig,
    clock: &dyn Clock,
    host: &dyn GameHost,
    repo: &dyn RevivalRepository,
) -> Result<RitualOutcome, DomainError> {
    if !command.placed_block.is_player_head() {
        return Ok(RitualOutcome::Ignored);
    }
    let settings = &config.settings;
    let reject = |rejection: Rejection| -> Result<RitualOutcome, DomainError> {
        info!(reason = rejection.key(), at = %command.placed_at, "ritual rejected");
        let message = config
            .messages
            .prefixed(rejection.message(&config.messages.errors));
        host.send_message(command.placer.id, &message);
        Ok(RitualOutcome::Rejected(rejection))
    };

    let support = command.placed_at.below();
    if !host.block_type(&support).is_altar_support() {
        return reject(Rejection::NotOnFence);
    }

    let altar = match validate_altar(host, config, &support) {
        Ok(altar) => altar,
        Err(rejection) => return reject(rejection),
    };
    let altar_key = AltarKey::for_centre(&altar.centre);

    if settings.cooldown_seconds > 0 && cooling_down(config, clock, repo, &altar_key).await {
        return reject(Rejection::CooldownActive);
    }

    let Some(target) = resolve_target(host, command.item_in_hand.as_ref()) else {
        return reject(Rejection::HeadNotNamed);
    };

    let online = host.online_player(target.id);
    match &online {
        Some(state) if state.game_mode != GameMode::Spectator => {
            return reject(Rejection::PlayerNotDead);
        }
        None if !settings.enable_offline_revive => return reject(Rejection::PlayerNotDead),
        _ => {}
    }

    if settings.consume_items {
        consume_chest_items(host, &config.altar.required_items, &altar)?;
    }

    host.schedule(
        HEAD_REMOVAL_DELAY_TICKS,
        ScheduledTask::SetBlock {
            pos: command.placed_at.clone(),
            material: Material::Air,
        },
    );

    play_revival_effects(host, config, &altar.centre);

    let now = clock.now();
    if settings.cooldown_seconds > 0 {
        if let Err(e) = repo.record_use(&altar_key, now).await {
            error!(altar = %altar_key, error = %e, "failed to record altar use");
        }
    }

    let kind = if online.is_some() {
        if let Err(e) = host.teleport(target.id, &arrival_point(&altar.centre)) {
            warn!(player = %target.name, error = %e, "could not move revived player");
        }
        if let Err(e) = restore_player(host, target.id) {
            warn!(player = %target.name, error = %e, "could not restore revived player");
        }
        RitualEventKind::PlayerRevived(PlayerRevived {
            player_id: target.id,
            reviver_id: command.placer.id,
            altar: altar_key,
        })
    } else {
        if let Err(e) = repo.add_pending_revival(target.id).await {
            error!(player = %target.name, error = %e, "failed to queue pending revival");
        }
        RitualEventKind::RevivalDeferred(RevivalDeferred {
            player_id: target.id,
            reviver_id: command.placer.id,
            altar: altar_key,
        })
    };

    let announcement = text::with_player(&config.messages.success.revive, &target.name);
    host.broadcast(&config.messages.prefixed(&announcement));
    info!(target = %target.name, centre = %altar.centre, "player revived");

    Ok(RitualOutcome::Completed(RitualEvent::new(
        kind,
        command.correlation_id,
        now,
    )))
}

/// Whether the altar was used less than `cooldownSeconds` whole seconds
/// ago. A store that cannot answer does not block the ritual.
async fn cooling_down(
    config: &RevivalConfig,
    clock: &dyn Clock,
    repo: &dyn RevivalRepository,
    altar: &AltarKey,
) -> bool {
    let window = i64::try_from(config.settings.cooldown_seconds).unwrap_or(i64::MAX);
    match repo.last_used(altar).await {
        Ok(Some(last)) => clock.elapsed_since(last).num_seconds() < window,
        Ok(None) => false,
        Err(e) => {
            error!(altar = %altar, error = %e, "failed to read altar cooldown");
            false
        }
    }
}

/// Builds the head a dead player leaves behind.
#[must_use]
pub fn revival_token(player: &PlayerProfile) -> ItemStack {
    ItemStack::new(Material::PlayerHead, 1).with_meta(ItemMeta {
        lore: vec![text::colour(&text::with_player(
            REVIVAL_TOKEN_LORE,
            &player.name,
        ))],
        owner: Some(player.clone()),
        ..ItemMeta::default()
    })
}

/// Handles a player death: drops their head as a revival token and moves
/// them to spectator mode on the next tick.
///
/// Returns `None` when head drops are disabled or the world is excluded.
#[instrument(
    skip_all,
    fields(correlation_id = %command.correlation_id, player = %command.player.name)
)]
pub fn handle_player_died(
    command: &RecordDeath,
    config: &RevivalConfig,
    clock: &dyn Clock,
    host: &dyn GameHost,
) -> Option<RitualEvent> {
    let settings = &config.settings;
    if !settings.drop_head_on_death || !settings.allows_world(&command.location.world) {
        return None;
    }

    host.drop_item_naturally(&command.location, revival_token(&command.player));
    host.schedule(
        SPECTATE_DELAY_TICKS,
        ScheduledTask::SpectateIfOnline {
            player_id: command.player.id,
        },
    );
    info!("revival token dropped");

    Some(RitualEvent::new(
        RitualEventKind::RevivalTokenDropped(RevivalTokenDropped {
            player_id: command.player.id,
            location: command.location.clone(),
        }),
        command.correlation_id,
        clock.now(),
    ))
}

/// Handles a player join: applies and clears their pending revival.
///
/// The pending entry is removed before the player is restored, and only
/// the call that actually removed it restores, so a revival is applied at
/// most once. If the restore fails the entry is queued again for the next
/// login.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the store cannot be read or
/// written, or `DomainError::Host` if the player could not be restored.
#[instrument(
    skip_all,
    fields(correlation_id = %command.correlation_id, player = %command.player.name)
)]
pub async fn handle_player_joined(
    command: &ApplyPendingRevival,
    clock: &dyn Clock,
    host: &dyn GameHost,
    repo: &dyn RevivalRepository,
) -> Result<Option<RitualEvent>, DomainError> {
    let player_id: Uuid = command.player.id;
    if !repo.is_pending_revival(player_id).await? {
        return Ok(None);
    }
    if !repo.remove_pending_revival(player_id).await? {
        return Ok(None);
    }

    if let Err(e) = restore_player(host, player_id) {
        error!(error = %e, "could not restore player, revival stays pending");
        repo.add_pending_revival(player_id).await?;
        return Err(e.into());
    }
    info!("pending revival applied");

    Ok(Some(RitualEvent::new(
        RitualEventKind::PendingRevivalApplied(PendingRevivalApplied { player_id }),
        command.correlation_id,
        clock.now(),
    )))
}
