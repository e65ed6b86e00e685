//! Query handlers for the revival ritual.

use hardcore_revival_core::error::DomainError;
use hardcore_revival_core::host::GameHost;
use hardcore_revival_core::player::{GameMode, PlayerProfile};
use hardcore_revival_core::repository::RevivalRepository;
use serde::Serialize;

/// Where a player stands in the death and revival cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeStatus {
    /// Revived while offline; restored on next login.
    Pending,
    /// Online and spectating.
    Dead,
    /// Anything else, including offline players with nothing queued.
    Alive,
}

/// Read-only view of a player's revival status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerStatusView {
    /// The player.
    pub profile: PlayerProfile,
    /// Their status.
    pub status: LifeStatus,
}

/// Looks up a player by name and reports their revival status.
///
/// A queued revival takes precedence over the player's current game mode.
///
/// # Errors
///
/// Returns `DomainError::PlayerNotFound` if the host knows no such player.
/// Returns `DomainError::Infrastructure` if the store cannot be read.
pub async fn get_player_status(
    name: &str,
    host: &dyn GameHost,
    repo: &dyn RevivalRepository,
) -> Result<PlayerStatusView, DomainError> {
    let profile = host
        .find_profile(name)
        .ok_or_else(|| DomainError::PlayerNotFound(name.to_owned()))?;

    let status = if repo.is_pending_revival(profile.id).await? {
        LifeStatus::Pending
    } else if host
        .online_player(profile.id)
        .is_some_and(|state| state.game_mode == GameMode::Spectator)
    {
        LifeStatus::Dead
    } else {
        LifeStatus::Alive
    };

    Ok(PlayerStatusView { profile, status })
}

#[cfg(test)]
mod tests {
    use hardcore_revival_core::error::DomainError;
    use hardcore_revival_core::player::{GameMode, PlayerProfile};
    use hardcore_revival_core::position::Location;
    use hardcore_revival_core::repository::RevivalRepository;
    use uuid::Uuid;

    use crate::application::query_handlers::{LifeStatus, get_player_status};
    use hardcore_revival_test_support::{
        FailingRevivalRepository, InMemoryRevivalRepository, MemoryHost,
    };

    fn spawn() -> Location {
        Location::new("world", 0.0, 64.0, 0.0)
    }

    #[tokio::test]
    async fn test_spectating_player_is_dead() {
        // Arrange
        let host = MemoryHost::new();
        let player = PlayerProfile::new(Uuid::new_v4(), "Steve");
        host.join(&player, GameMode::Spectator, spawn());

        // Act
        let view = get_player_status("steve", &host, &InMemoryRevivalRepository::new())
            .await
            .unwrap();

        // Assert
        assert_eq!(view.profile, player);
        assert_eq!(view.status, LifeStatus::Dead);
    }

    #[tokio::test]
    async fn test_pending_revival_wins_over_game_mode() {
        let host = MemoryHost::new();
        let player = PlayerProfile::new(Uuid::new_v4(), "Steve");
        host.join(&player, GameMode::Spectator, spawn());
        let repo = InMemoryRevivalRepository::new();
        repo.add_pending_revival(player.id).await.unwrap();

        let view = get_player_status("Steve", &host, &repo).await.unwrap();

        assert_eq!(view.status, LifeStatus::Pending);
    }

    #[tokio::test]
    async fn test_survival_and_offline_players_are_alive() {
        let host = MemoryHost::new();
        let online = PlayerProfile::new(Uuid::new_v4(), "Alex");
        let offline = PlayerProfile::new(Uuid::new_v4(), "Herobrine");
        host.join(&online, GameMode::Survival, spawn());
        host.remember(&offline);
        let repo = InMemoryRevivalRepository::new();

        let online_view = get_player_status("Alex", &host, &repo).await.unwrap();
        let offline_view = get_player_status("Herobrine", &host, &repo).await.unwrap();

        assert_eq!(online_view.status, LifeStatus::Alive);
        assert_eq!(offline_view.status, LifeStatus::Alive);
    }

    #[tokio::test]
    async fn test_unknown_player_is_not_found() {
        let host = MemoryHost::new();

        let result = get_player_status("Nobody", &host, &InMemoryRevivalRepository::new()).await;

        assert!(matches!(result, Err(DomainError::PlayerNotFound(ref name)) if name == "Nobody"));
    }

    #[tokio::test]
    async fn test_store_failure_is_reported() {
        let host = MemoryHost::new();
        host.remember(&PlayerProfile::new(Uuid::new_v4(), "Steve"));

        let result = get_player_status("Steve", &host, &FailingRevivalRepository).await;

        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
    }
}
