//! Shared helpers for plugin integration tests.
#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use hardcore_revival_core::clock::Clock;
use hardcore_revival_core::host::GameHost;
use hardcore_revival_core::item::{ItemStack, Material};
use hardcore_revival_core::player::{CommandSender, GameMode, PlayerProfile};
use hardcore_revival_core::position::{BlockPos, Location};
use hardcore_revival_plugin::{HostEvent, RevivalPlugin};
use hardcore_revival_test_support::{ALTAR_WORLD, ManualClock, MemoryHost};
use tempfile::TempDir;
use uuid::Uuid;

/// A plugin enabled in a temporary data folder against an in-memory host.
pub struct TestServer {
    pub dir: TempDir,
    pub host: Arc<MemoryHost>,
    pub clock: Arc<ManualClock>,
    pub plugin: RevivalPlugin,
}

impl TestServer {
    /// Enables a fresh plugin with the bundled configuration.
    pub async fn start() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let host = Arc::new(MemoryHost::new());
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
        ));
        let plugin = enable(dir.path(), &host, &clock).await;
        Self {
            dir,
            host,
            clock,
            plugin,
        }
    }

    /// Enables a plugin with `config` written to `config.yml` first.
    pub async fn start_with_config(config: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.yml"), config).unwrap();
        let host = Arc::new(MemoryHost::new());
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
        ));
        let plugin = enable(dir.path(), &host, &clock).await;
        Self {
            dir,
            host,
            clock,
            plugin,
        }
    }

    /// Disables the plugin and enables a new instance on the same folder
    /// and host, as a server restart would.
    pub async fn restart(self) -> Self {
        self.plugin.disable().await.unwrap();
        let plugin = enable(self.dir.path(), &self.host, &self.clock).await;
        Self { plugin, ..self }
    }

    /// Places `head` on the fence; returns whether a revival happened.
    pub async fn place_head(
        &self,
        placer: &PlayerProfile,
        fence: &BlockPos,
        head: ItemStack,
    ) -> bool {
        self.plugin
            .on_event(HostEvent::BlockPlaced {
                placer: placer.clone(),
                placed_at: fence.offset(0, 1, 0),
                placed_block: Material::PlayerHead,
                item_in_hand: Some(head),
            })
            .await
            .unwrap()
            .is_some()
    }
}

async fn enable(folder: &Path, host: &Arc<MemoryHost>, clock: &Arc<ManualClock>) -> RevivalPlugin {
    let host: Arc<dyn GameHost> = Arc::clone(host) as Arc<dyn GameHost>;
    let clock: Arc<dyn Clock> = Arc::clone(clock) as Arc<dyn Clock>;
    RevivalPlugin::enable(folder, host, clock).await.unwrap()
}

/// Centre block of the altar most tests build.
pub fn altar_centre() -> BlockPos {
    BlockPos::new(ALTAR_WORLD, 10, 64, -3)
}

/// Somewhere to stand.
pub fn spawn_point() -> Location {
    Location::new(ALTAR_WORLD, 0.0, 64.0, 0.0)
}

/// A new player profile.
pub fn profile(name: &str) -> PlayerProfile {
    PlayerProfile::new(Uuid::new_v4(), name)
}

/// An operator who may run admin commands.
pub fn admin(profile: &PlayerProfile) -> CommandSender {
    CommandSender::player(profile.clone()).with_permission("hardcorerevival.admin")
}

/// Connects `profile` in `mode`.
pub fn connect(host: &MemoryHost, profile: &PlayerProfile, mode: GameMode) {
    host.join(profile, mode, spawn_point());
}
