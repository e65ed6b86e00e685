//! Bringing a player back to life.

use hardcore_revival_core::host::{GameHost, HostError};
use hardcore_revival_core::player::{GameMode, PotionEffect, PotionEffectKind};
use hardcore_revival_core::position::{BlockPos, Location};
use uuid::Uuid;

/// Food level of a fully fed player.
pub const FULL_FOOD_LEVEL: u8 = 20;

/// Length of the post-revival buffs: ten seconds.
pub const REVIVAL_BUFF_TICKS: u32 = 200;

/// Buffs granted after a revival.
pub const REVIVAL_BUFFS: [PotionEffect; 2] = [
    PotionEffect {
        kind: PotionEffectKind::Regeneration,
        duration_ticks: REVIVAL_BUFF_TICKS,
        amplifier: 0,
    },
    PotionEffect {
        kind: PotionEffectKind::DamageResistance,
        duration_ticks: REVIVAL_BUFF_TICKS,
        amplifier: 0,
    },
];

/// Where a player revived at an altar reappears: just above the fence.
#[must_use]
pub fn arrival_point(centre: &BlockPos) -> Location {
    centre.to_location(0.5, 1.1, 0.5)
}

/// Restores an online player: survival mode, full health and food, every
/// potion effect cleared, then regeneration and resistance.
///
/// # Errors
///
/// Returns `HostError::PlayerOffline` if the player left.
pub fn restore_player(host: &dyn GameHost, player_id: Uuid) -> Result<(), HostError> {
    host.set_game_mode(player_id, GameMode::Survival)?;
    host.heal_fully(player_id)?;
    host.set_food_level(player_id, FULL_FOOD_LEVEL)?;
    host.clear_potion_effects(player_id)?;
    for buff in REVIVAL_BUFFS {
        host.add_potion_effect(player_id, buff)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use hardcore_revival_core::player::PlayerProfile;
    use hardcore_revival_test_support::MemoryHost;

    #[test]
    fn test_restore_player_resets_mode_vitals_and_effects() {
        // Arrange
        let host = MemoryHost::new();
        let profile = PlayerProfile::new(Uuid::new_v4(), "Steve");
        host.join(&profile, GameMode::Spectator, Location::new("world", 0.0, 80.0, 0.0));
        let poison = PotionEffect {
            kind: PotionEffectKind::Regeneration,
            duration_ticks: 9_999,
            amplifier: 3,
        };
        host.set_vitals(profile.id, 1.0, 2, vec![poison]);

        // Act
        restore_player(&host, profile.id).unwrap();

        // Assert
        let player = host.player(profile.id).unwrap();
        assert_eq!(player.state.game_mode, GameMode::Survival);
        assert!((player.health - 20.0).abs() < f64::EPSILON);
        assert_eq!(player.food_level, FULL_FOOD_LEVEL);
        assert_eq!(player.effects, REVIVAL_BUFFS.to_vec());
    }

    #[test]
    fn test_restore_offline_player_fails() {
        let host = MemoryHost::new();
        let id = Uuid::new_v4();

        assert_eq!(restore_player(&host, id), Err(HostError::PlayerOffline(id)));
    }
}
