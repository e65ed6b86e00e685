//! Block and item kinds, item stacks and their metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::player::PlayerProfile;

/// A block or item kind, named the way the host names materials
/// (`GOLD_BLOCK`, `PLAYER_HEAD`, ...).
///
/// Kinds this module reasons about have dedicated variants; everything else
/// round-trips through `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Material {
    Air,
    GoldBlock,
    Chest,
    PlayerHead,
    PlayerWallHead,
    SkeletonSkull,
    TotemOfUndying,
    WitherRose,
    Potion,
    OakFence,
    SpruceFence,
    BirchFence,
    JungleFence,
    AcaciaFence,
    DarkOakFence,
    MangroveFence,
    CherryFence,
    BambooFence,
    CrimsonFence,
    WarpedFence,
    NetherBrickFence,
    /// Any material without a dedicated variant.
    Other(String),
}

impl Material {
    /// Returns the host name of this material.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Air => "AIR",
            Self::GoldBlock => "GOLD_BLOCK",
            Self::Chest => "CHEST",
            Self::PlayerHead => "PLAYER_HEAD",
            Self::PlayerWallHead => "PLAYER_WALL_HEAD",
            Self::SkeletonSkull => "SKELETON_SKULL",
            Self::TotemOfUndying => "TOTEM_OF_UNDYING",
            Self::WitherRose => "WITHER_ROSE",
            Self::Potion => "POTION",
            Self::OakFence => "OAK_FENCE",
            Self::SpruceFence => "SPRUCE_FENCE",
            Self::BirchFence => "BIRCH_FENCE",
            Self::JungleFence => "JUNGLE_FENCE",
            Self::AcaciaFence => "ACACIA_FENCE",
            Self::DarkOakFence => "DARK_OAK_FENCE",
            Self::MangroveFence => "MANGROVE_FENCE",
            Self::CherryFence => "CHERRY_FENCE",
            Self::BambooFence => "BAMBOO_FENCE",
            Self::CrimsonFence => "CRIMSON_FENCE",
            Self::WarpedFence => "WARPED_FENCE",
            Self::NetherBrickFence => "NETHER_BRICK_FENCE",
            Self::Other(name) => name,
        }
    }

    /// Returns `true` for both standing and wall-mounted player heads.
    #[must_use]
    pub fn is_player_head(&self) -> bool {
        matches!(self, Self::PlayerHead | Self::PlayerWallHead)
    }

    /// Returns `true` for fences that may carry an altar head: every
    /// `*_FENCE` except the nether brick one.
    #[must_use]
    pub fn is_altar_support(&self) -> bool {
        *self != Self::NetherBrickFence && self.name().ends_with("_FENCE")
    }
}

impl FromStr for Material {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        let material = match normalized.as_str() {
            "AIR" => Self::Air,
            "GOLD_BLOCK" => Self::GoldBlock,
            "CHEST" => Self::Chest,
            "PLAYER_HEAD" => Self::PlayerHead,
            "PLAYER_WALL_HEAD" => Self::PlayerWallHead,
            "SKELETON_SKULL" => Self::SkeletonSkull,
            "TOTEM_OF_UNDYING" => Self::TotemOfUndying,
            "WITHER_ROSE" => Self::WitherRose,
            "POTION" => Self::Potion,
            "OAK_FENCE" => Self::OakFence,
            "SPRUCE_FENCE" => Self::SpruceFence,
            "BIRCH_FENCE" => Self::BirchFence,
            "JUNGLE_FENCE" => Self::JungleFence,
            "ACACIA_FENCE" => Self::AcaciaFence,
            "DARK_OAK_FENCE" => Self::DarkOakFence,
            "MANGROVE_FENCE" => Self::MangroveFence,
            "CHERRY_FENCE" => Self::CherryFence,
            "BAMBOO_FENCE" => Self::BambooFence,
            "CRIMSON_FENCE" => Self::CrimsonFence,
            "WARPED_FENCE" => Self::WarpedFence,
            "NETHER_BRICK_FENCE" => Self::NetherBrickFence,
            _ => Self::Other(normalized),
        };
        Ok(material)
    }
}

impl From<String> for Material {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(material) => material,
            Err(never) => match never {},
        }
    }
}

impl From<Material> for String {
    fn from(value: Material) -> Self {
        value.name().to_owned()
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Base potion kinds a potion item can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PotionType {
    InstantHeal,
    Regeneration,
    Water,
}

/// Base potion data attached to potion items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PotionData {
    /// The potion kind.
    pub kind: PotionType,
    /// Whether the duration is extended.
    pub extended: bool,
    /// Whether the potion is the level II variant.
    pub upgraded: bool,
}

/// Optional metadata carried by an item stack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemMeta {
    /// Custom display name, possibly containing colour codes.
    pub display_name: Option<String>,
    /// Lore lines shown under the name.
    pub lore: Vec<String>,
    /// Owning player profile (player heads only).
    pub owner: Option<PlayerProfile>,
    /// Base potion data (potions only).
    pub potion: Option<PotionData>,
}

/// A stack of items of a single material.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemStack {
    /// The item kind.
    pub material: Material,
    /// Number of units in the stack.
    pub amount: u32,
    /// Attached metadata.
    pub meta: ItemMeta,
}

impl ItemStack {
    /// Creates a stack without metadata.
    #[must_use]
    pub fn new(material: Material, amount: u32) -> Self {
        Self {
            material,
            amount,
            meta: ItemMeta::default(),
        }
    }

    /// Replaces the stack's metadata.
    #[must_use]
    pub fn with_meta(mut self, meta: ItemMeta) -> Self {
        self.meta = meta;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_material_is_case_insensitive() {
        assert_eq!("gold_block".parse::<Material>().unwrap(), Material::GoldBlock);
        assert_eq!(
            " Totem_Of_Undying ".parse::<Material>().unwrap(),
            Material::TotemOfUndying
        );
    }

    #[test]
    fn test_unknown_material_keeps_normalized_name() {
        let material: Material = "pale_oak_fence".parse().unwrap();

        assert_eq!(material, Material::Other("PALE_OAK_FENCE".to_owned()));
        assert_eq!(material.name(), "PALE_OAK_FENCE");
    }

    #[test]
    fn test_altar_support_accepts_every_fence_but_nether_brick() {
        assert!(Material::OakFence.is_altar_support());
        assert!(Material::WarpedFence.is_altar_support());
        assert!(Material::Other("PALE_OAK_FENCE".to_owned()).is_altar_support());
        assert!(!Material::NetherBrickFence.is_altar_support());
        assert!(!Material::Other("OAK_FENCE_GATE".to_owned()).is_altar_support());
        assert!(!Material::GoldBlock.is_altar_support());
    }

    #[test]
    fn test_material_deserializes_from_yaml_name() {
        let materials: Vec<Material> =
            serde_yaml::from_str("[CHEST, WITHER_ROSE, diamond_block]").unwrap();

        assert_eq!(
            materials,
            vec![
                Material::Chest,
                Material::WitherRose,
                Material::Other("DIAMOND_BLOCK".to_owned())
            ]
        );
    }
}
