//! Module configuration, read from `config.yml`.
//!
//! Every key is optional: missing keys fall back to the defaults below,
//! which mirror the bundled default file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::item::Material;
use crate::text;

/// Errors raised while reading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid YAML or has values of the wrong type.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Root of the configuration document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevivalConfig {
    /// Ritual behaviour switches.
    pub settings: Settings,
    /// Block and item kinds making up the altar.
    pub altar: AltarSettings,
    /// Blank head recipe options.
    pub recipe: RecipeSettings,
    /// Sounds played on a successful revival, in order.
    pub sounds: Vec<SoundSpec>,
    /// Particles spawned on a successful revival.
    pub particles: Vec<ParticleSpec>,
    /// Player-facing messages.
    pub messages: Messages,
}

impl RevivalConfig {
    /// Parses a configuration document. An empty document yields the
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the document is malformed.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(source)?)
    }
}

impl Default for RevivalConfig {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            altar: AltarSettings::default(),
            recipe: RecipeSettings::default(),
            sounds: vec![
                SoundSpec::new("ENTITY_WITHER_SPAWN", 0.8, 1.2, 0),
                SoundSpec::new("ITEM_TOTEM_USE", 1.0, 1.0, 20),
                SoundSpec::new("ENTITY_PLAYER_LEVELUP", 1.0, 0.8, 10),
            ],
            particles: vec![
                ParticleSpec {
                    kind: "TOTEM_OF_UNDYING".to_owned(),
                    count: 120,
                    offset_x: 0.6,
                    offset_y: 1.0,
                    offset_z: 0.6,
                },
                ParticleSpec {
                    kind: "SOUL_FIRE_FLAME".to_owned(),
                    count: 40,
                    offset_x: 0.8,
                    offset_y: 0.4,
                    offset_z: 0.8,
                },
            ],
            messages: Messages::default(),
        }
    }
}

/// Ritual behaviour switches (`settings.*`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Seconds an altar stays unusable after a revival; `0` disables the
    /// cooldown.
    pub cooldown_seconds: u64,
    /// Whether the gold platform and all four chests are mandatory.
    pub require_exact_structure: bool,
    /// Whether offline players may be revived on their next login.
    pub enable_offline_revive: bool,
    /// Whether the ritual consumes one of each required item per chest.
    pub consume_items: bool,
    /// Whether dying players drop their head as a revival token.
    pub drop_head_on_death: bool,
    /// Whether the ritual lightning is visual only.
    pub lightning_no_damage: bool,
    /// Worlds allowed to host rituals. When non-empty it overrides the
    /// blacklist.
    pub world_whitelist: Vec<String>,
    /// Worlds where rituals are refused.
    pub world_blacklist: Vec<String>,
    /// Lowest allowed altar platform height.
    pub y_min: i32,
    /// Highest allowed altar platform height.
    pub y_max: i32,
}

impl Settings {
    /// Applies the world whitelist, or the blacklist when no whitelist is
    /// configured.
    #[must_use]
    pub fn allows_world(&self, world: &str) -> bool {
        if self.world_whitelist.is_empty() {
            !self.world_blacklist.iter().any(|w| w == world)
        } else {
            self.world_whitelist.iter().any(|w| w == world)
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cooldown_seconds: 0,
            require_exact_structure: true,
            enable_offline_revive: true,
            consume_items: true,
            drop_head_on_death: true,
            lightning_no_damage: true,
            world_whitelist: Vec::new(),
            world_blacklist: Vec::new(),
            y_min: 0,
            y_max: 320,
        }
    }
}

/// Block and item kinds making up the altar (`altar.*`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AltarSettings {
    /// Block the 3x3 platform must be made of.
    pub platform_block: Material,
    /// Block kind of the four corner containers.
    pub container_block: Material,
    /// Items every container must hold at least one of.
    pub required_items: Vec<Material>,
}

impl Default for AltarSettings {
    fn default() -> Self {
        Self {
            platform_block: Material::GoldBlock,
            container_block: Material::Chest,
            required_items: vec![Material::TotemOfUndying, Material::WitherRose],
        }
    }
}

/// Blank head recipe options (`recipe.*`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecipeSettings {
    /// Display name of the crafted head, colour codes allowed.
    pub output_name: String,
}

impl Default for RecipeSettings {
    fn default() -> Self {
        Self {
            output_name: "Blank Revival Head".to_owned(),
        }
    }
}

/// One configured sound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SoundSpec {
    /// Host sound name.
    pub sound: String,
    /// Playback volume.
    pub volume: f32,
    /// Playback pitch.
    pub pitch: f32,
    /// Ticks to wait after the previous sound.
    pub delay: u64,
}

impl SoundSpec {
    /// Creates a sound entry.
    #[must_use]
    pub fn new(sound: impl Into<String>, volume: f32, pitch: f32, delay: u64) -> Self {
        Self {
            sound: sound.into(),
            volume,
            pitch,
            delay,
        }
    }
}

impl Default for SoundSpec {
    fn default() -> Self {
        Self::new(String::new(), 1.0, 1.0, 0)
    }
}

/// One configured particle burst.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParticleSpec {
    /// Host particle name.
    #[serde(rename = "type")]
    pub kind: String,
    /// Number of particles.
    pub count: u32,
    /// Spread along x.
    pub offset_x: f64,
    /// Spread along y.
    pub offset_y: f64,
    /// Spread along z.
    pub offset_z: f64,
}

impl Default for ParticleSpec {
    fn default() -> Self {
        Self {
            kind: String::new(),
            count: 1,
            offset_x: 0.0,
            offset_y: 0.0,
            offset_z: 0.0,
        }
    }
}

/// Player-facing messages (`messages.*`). Colour codes use `&`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Messages {
    /// Prepended to every ritual message.
    pub prefix: String,
    /// Success broadcasts.
    pub success: SuccessMessages,
    /// Rejection and command error messages.
    pub errors: ErrorMessages,
    /// Admin command replies.
    pub command: CommandMessages,
}

impl Messages {
    /// Returns `message` with the prefix prepended and colour codes
    /// translated.
    #[must_use]
    pub fn prefixed(&self, message: &str) -> String {
        text::colour(&format!("{}{message}", self.prefix))
    }

    /// Returns `message` with colour codes translated and no prefix.
    #[must_use]
    pub fn raw(&self, message: &str) -> String {
        text::colour(message)
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            prefix: "&8[&4Hardcore&cRevival&8] &r".to_owned(),
            success: SuccessMessages::default(),
            errors: ErrorMessages::default(),
            command: CommandMessages::default(),
        }
    }
}

/// `messages.success.*`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SuccessMessages {
    /// Broadcast after a revival; `{player}` is the revived player.
    pub revive: String,
}

impl Default for SuccessMessages {
    fn default() -> Self {
        Self {
            revive: "&a{player} has been brought back from the dead!".to_owned(),
        }
    }
}

/// `messages.errors.*`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ErrorMessages {
    /// `errors.notOnFence`
    pub not_on_fence: String,
    /// `errors.structureInvalid`
    pub structure_invalid: String,
    /// `errors.chestMissingItems`
    pub chest_missing_items: String,
    /// `errors.worldNotAllowed`
    pub world_not_allowed: String,
    /// `errors.cooldownActive`
    pub cooldown_active: String,
    /// `errors.headNotNamed`
    pub head_not_named: String,
    /// `errors.playerNotDead`
    pub player_not_dead: String,
    /// `errors.unknownPlayer`, also used by `hrcheck`.
    pub unknown_player: String,
    /// `errors.noPermission`
    pub no_permission: String,
}

impl Default for ErrorMessages {
    fn default() -> Self {
        Self {
            not_on_fence: "&cThe head must be placed on a fence at the centre of the altar."
                .to_owned(),
            structure_invalid: "&cThe altar structure is invalid.".to_owned(),
            chest_missing_items:
                "&cEach altar chest needs a Totem of Undying and a Wither Rose.".to_owned(),
            world_not_allowed: "&cRevival rituals are not allowed in this world.".to_owned(),
            cooldown_active: "&cThis altar is still recovering. Try again later.".to_owned(),
            head_not_named: "&cThis head is not bound to a known player.".to_owned(),
            player_not_dead: "&cThat player is not dead.".to_owned(),
            unknown_player: "&cUnknown player.".to_owned(),
            no_permission: "&cYou do not have permission to run this command.".to_owned(),
        }
    }
}

/// `messages.command.*`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommandMessages {
    /// `command.reload`, sent after a successful `hrreload`.
    pub reload: String,
    /// `command.checkPending`
    pub check_pending: String,
    /// `command.checkDead`
    pub check_dead: String,
    /// `command.checkAlive`
    pub check_alive: String,
}

impl Default for CommandMessages {
    fn default() -> Self {
        Self {
            reload: "&aHardcoreRevival configuration reloaded.".to_owned(),
            check_pending: "&e{player} will be revived on their next login.".to_owned(),
            check_dead: "&c{player} is dead.".to_owned(),
            check_alive: "&a{player} is alive.".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_yields_defaults() {
        let config = RevivalConfig::from_yaml_str("  \n").unwrap();

        assert_eq!(config, RevivalConfig::default());
    }

    #[test]
    fn test_partial_document_keeps_defaults_for_missing_keys() {
        let source = r"
settings:
  cooldownSeconds: 600
  worldBlacklist: [world_the_end]
altar:
  platformBlock: DIAMOND_BLOCK
sounds:
  - sound: ENTITY_WITHER_SPAWN
    delay: 10
";

        let config = RevivalConfig::from_yaml_str(source).unwrap();

        assert_eq!(config.settings.cooldown_seconds, 600);
        assert!(config.settings.require_exact_structure);
        assert_eq!(config.settings.y_max, 320);
        assert_eq!(
            config.altar.platform_block,
            Material::Other("DIAMOND_BLOCK".to_owned())
        );
        assert_eq!(config.altar.container_block, Material::Chest);
        assert_eq!(
            config.sounds,
            vec![SoundSpec::new("ENTITY_WITHER_SPAWN", 1.0, 1.0, 10)]
        );
        assert_eq!(config.messages, Messages::default());
    }

    #[test]
    fn test_wrongly_typed_value_is_a_parse_error() {
        let result = RevivalConfig::from_yaml_str("settings:\n  cooldownSeconds: soon\n");

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_whitelist_overrides_blacklist() {
        let settings = Settings {
            world_whitelist: vec!["world".to_owned()],
            world_blacklist: vec!["world".to_owned()],
            ..Settings::default()
        };

        assert!(settings.allows_world("world"));
        assert!(!settings.allows_world("world_nether"));
    }

    #[test]
    fn test_blacklist_applies_without_whitelist() {
        let settings = Settings {
            world_blacklist: vec!["world_the_end".to_owned()],
            ..Settings::default()
        };

        assert!(settings.allows_world("world"));
        assert!(!settings.allows_world("world_the_end"));
    }

    #[test]
    fn test_prefixed_translates_colour_codes() {
        let messages = Messages {
            prefix: "&8[HR] ".to_owned(),
            ..Messages::default()
        };

        assert_eq!(messages.prefixed("&cNo."), "\u{a7}8[HR] \u{a7}cNo.");
        assert_eq!(messages.raw("&aYes"), "\u{a7}aYes");
    }
}
