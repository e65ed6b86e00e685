//! In-memory `GameHost` recording every side effect.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Mutex, MutexGuard};

use hardcore_revival_core::config::{ParticleSpec, SoundSpec};
use hardcore_revival_core::host::{GameHost, HostError, ScheduledTask};
use hardcore_revival_core::item::{ItemStack, Material};
use hardcore_revival_core::player::{GameMode, PlayerProfile, PlayerState, PotionEffect};
use hardcore_revival_core::position::{BlockPos, Location};
use hardcore_revival_core::recipe::ShapelessRecipe;
use uuid::Uuid;

/// Default maximum health of a test player.
const MAX_HEALTH: f64 = 20.0;

/// An online player tracked by [`MemoryHost`].
#[derive(Debug, Clone, PartialEq)]
pub struct OnlinePlayer {
    /// Host-visible state.
    pub state: PlayerState,
    /// Current health.
    pub health: f64,
    /// Current food level.
    pub food_level: u8,
    /// Active potion effects.
    pub effects: Vec<PotionEffect>,
}

#[derive(Debug, Default)]
struct World {
    blocks: HashMap<BlockPos, Material>,
    containers: HashMap<BlockPos, Vec<Option<ItemStack>>>,
    online: HashMap<Uuid, OnlinePlayer>,
    profiles: BTreeMap<String, PlayerProfile>,
    messages: Vec<(Uuid, String)>,
    broadcasts: Vec<String>,
    drops: Vec<(Location, ItemStack)>,
    particles: Vec<(Location, ParticleSpec)>,
    unknown_particles: BTreeSet<String>,
    sounds: Vec<(Location, SoundSpec)>,
    lightning: Vec<(Location, bool)>,
    scheduled: Vec<(u64, ScheduledTask)>,
    recipes: BTreeMap<String, ShapelessRecipe>,
}

/// A `GameHost` backed by in-memory maps. Scheduled tasks are queued until
/// [`MemoryHost::run_scheduled_tasks`] is called.
#[derive(Debug, Default)]
pub struct MemoryHost {
    world: Mutex<World>,
}

impl MemoryHost {
    /// Creates an empty world: every block is air and nobody is online.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn world(&self) -> MutexGuard<'_, World> {
        self.world.lock().unwrap()
    }

    /// Places a block.
    pub fn set_block(&self, pos: &BlockPos, material: Material) {
        self.world().blocks.insert(pos.clone(), material);
    }

    /// Places a container block holding `slots`.
    pub fn place_container(
        &self,
        pos: &BlockPos,
        material: Material,
        slots: Vec<Option<ItemStack>>,
    ) {
        let mut world = self.world();
        world.blocks.insert(pos.clone(), material);
        world.containers.insert(pos.clone(), slots);
    }

    /// Returns the slots of the container at `pos`.
    #[must_use]
    pub fn container(&self, pos: &BlockPos) -> Option<Vec<Option<ItemStack>>> {
        self.world().containers.get(pos).cloned()
    }

    /// Connects a player at full health.
    pub fn join(&self, profile: &PlayerProfile, game_mode: GameMode, location: Location) {
        let mut world = self.world();
        world
            .profiles
            .insert(profile.name.to_lowercase(), profile.clone());
        world.online.insert(
            profile.id,
            OnlinePlayer {
                state: PlayerState {
                    profile: profile.clone(),
                    game_mode,
                    location,
                },
                health: MAX_HEALTH,
                food_level: 20,
                effects: Vec::new(),
            },
        );
    }

    /// Registers a player who has played before but is not online.
    pub fn remember(&self, profile: &PlayerProfile) {
        self.world()
            .profiles
            .insert(profile.name.to_lowercase(), profile.clone());
    }

    /// Disconnects a player; their profile stays known.
    pub fn leave(&self, player_id: Uuid) {
        self.world().online.remove(&player_id);
    }

    /// Overrides an online player's vitals.
    pub fn set_vitals(
        &self,
        player_id: Uuid,
        health: f64,
        food_level: u8,
        effects: Vec<PotionEffect>,
    ) {
        if let Some(player) = self.world().online.get_mut(&player_id) {
            player.health = health;
            player.food_level = food_level;
            player.effects = effects;
        }
    }

    /// Returns an online player.
    #[must_use]
    pub fn player(&self, player_id: Uuid) -> Option<OnlinePlayer> {
        self.world().online.get(&player_id).cloned()
    }

    /// Makes `spawn_particle` fail for this particle name.
    pub fn reject_particle(&self, kind: &str) {
        self.world().unknown_particles.insert(kind.to_owned());
    }

    /// Returns the messages sent to one player, in order.
    #[must_use]
    pub fn messages_for(&self, player_id: Uuid) -> Vec<String> {
        self.world()
            .messages
            .iter()
            .filter(|(to, _)| *to == player_id)
            .map(|(_, text)| text.clone())
            .collect()
    }

    /// Returns every broadcast, in order.
    #[must_use]
    pub fn broadcasts(&self) -> Vec<String> {
        self.world().broadcasts.clone()
    }

    /// Returns every dropped item.
    #[must_use]
    pub fn drops(&self) -> Vec<(Location, ItemStack)> {
        self.world().drops.clone()
    }

    /// Returns every spawned particle burst.
    #[must_use]
    pub fn particles(&self) -> Vec<(Location, ParticleSpec)> {
        self.world().particles.clone()
    }

    /// Returns every sound played by executed tasks.
    #[must_use]
    pub fn sounds(&self) -> Vec<(Location, SoundSpec)> {
        self.world().sounds.clone()
    }

    /// Returns every lightning strike and whether it was damaging.
    #[must_use]
    pub fn lightning(&self) -> Vec<(Location, bool)> {
        self.world().lightning.clone()
    }

    /// Returns the tasks queued and not yet run, with their delays.
    #[must_use]
    pub fn scheduled_tasks(&self) -> Vec<(u64, ScheduledTask)> {
        self.world().scheduled.clone()
    }

    /// Returns the registered recipes.
    #[must_use]
    pub fn recipes(&self) -> Vec<ShapelessRecipe> {
        self.world().recipes.values().cloned().collect()
    }

    /// Runs every queued task in delay order, as if enough ticks passed.
    pub fn run_scheduled_tasks(&self) {
        let mut tasks = std::mem::take(&mut self.world().scheduled);
        tasks.sort_by_key(|(delay, _)| *delay);
        for (_, task) in tasks {
            match task {
                ScheduledTask::SetBlock { pos, material } => self.set_block_type(&pos, material),
                ScheduledTask::SpectateIfOnline { player_id } => {
                    let _ = self.set_game_mode(player_id, GameMode::Spectator);
                }
                ScheduledTask::PlaySound { at, sound } => self.world().sounds.push((at, sound)),
            }
        }
    }

    fn with_online<T>(
        &self,
        player_id: Uuid,
        f: impl FnOnce(&mut OnlinePlayer) -> T,
    ) -> Result<T, HostError> {
        self.world()
            .online
            .get_mut(&player_id)
            .map(f)
            .ok_or(HostError::PlayerOffline(player_id))
    }
}

impl GameHost for MemoryHost {
    fn block_type(&self, pos: &BlockPos) -> Material {
        self.world()
            .blocks
            .get(pos)
            .cloned()
            .unwrap_or(Material::Air)
    }

    fn set_block_type(&self, pos: &BlockPos, material: Material) {
        let mut world = self.world();
        world.containers.remove(pos);
        world.blocks.insert(pos.clone(), material);
    }

    fn container_contents(&self, pos: &BlockPos) -> Option<Vec<Option<ItemStack>>> {
        self.container(pos)
    }

    fn set_container_slot(
        &self,
        pos: &BlockPos,
        slot: usize,
        item: Option<ItemStack>,
    ) -> Result<(), HostError> {
        let mut world = self.world();
        let slots = world
            .containers
            .get_mut(pos)
            .ok_or_else(|| HostError::NoContainer(pos.clone()))?;
        let target = slots.get_mut(slot).ok_or_else(|| HostError::SlotOutOfRange {
            pos: pos.clone(),
            slot,
        })?;
        *target = item;
        Ok(())
    }

    fn drop_item_naturally(&self, at: &Location, item: ItemStack) {
        self.world().drops.push((at.clone(), item));
    }

    fn online_player(&self, player_id: Uuid) -> Option<PlayerState> {
        self.world().online.get(&player_id).map(|p| p.state.clone())
    }

    fn find_profile(&self, name: &str) -> Option<PlayerProfile> {
        self.world().profiles.get(&name.to_lowercase()).cloned()
    }

    fn set_game_mode(&self, player_id: Uuid, mode: GameMode) -> Result<(), HostError> {
        self.with_online(player_id, |p| p.state.game_mode = mode)
    }

    fn teleport(&self, player_id: Uuid, to: &Location) -> Result<(), HostError> {
        self.with_online(player_id, |p| p.state.location = to.clone())
    }

    fn heal_fully(&self, player_id: Uuid) -> Result<(), HostError> {
        self.with_online(player_id, |p| p.health = MAX_HEALTH)
    }

    fn set_food_level(&self, player_id: Uuid, level: u8) -> Result<(), HostError> {
        self.with_online(player_id, |p| p.food_level = level)
    }

    fn clear_potion_effects(&self, player_id: Uuid) -> Result<(), HostError> {
        self.with_online(player_id, |p| p.effects.clear())
    }

    fn add_potion_effect(&self, player_id: Uuid, effect: PotionEffect) -> Result<(), HostError> {
        self.with_online(player_id, |p| p.effects.push(effect))
    }

    fn send_message(&self, player_id: Uuid, message: &str) {
        self.world().messages.push((player_id, message.to_owned()));
    }

    fn broadcast(&self, message: &str) {
        self.world().broadcasts.push(message.to_owned());
    }

    fn spawn_particle(&self, at: &Location, particle: &ParticleSpec) -> Result<(), HostError> {
        let mut world = self.world();
        if world.unknown_particles.contains(&particle.kind) {
            return Err(HostError::UnknownParticle(particle.kind.clone()));
        }
        world.particles.push((at.clone(), particle.clone()));
        Ok(())
    }

    fn strike_lightning(&self, at: &Location, damaging: bool) {
        self.world().lightning.push((at.clone(), damaging));
    }

    fn schedule(&self, delay_ticks: u64, task: ScheduledTask) {
        self.world().scheduled.push((delay_ticks, task));
    }

    fn remove_recipe(&self, key: &str) -> bool {
        self.world().recipes.remove(key).is_some()
    }

    fn add_recipe(&self, recipe: ShapelessRecipe) -> Result<(), HostError> {
        let mut world = self.world();
        if world.recipes.contains_key(&recipe.key) {
            return Err(HostError::RecipeRejected(recipe.key));
        }
        world.recipes.insert(recipe.key.clone(), recipe);
        Ok(())
    }
}
