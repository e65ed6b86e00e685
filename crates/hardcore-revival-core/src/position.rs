//! World coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer coordinate of a single block in a named world.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockPos {
    /// Name of the world the block lives in.
    pub world: String,
    /// East/west axis.
    pub x: i32,
    /// Vertical axis.
    pub y: i32,
    /// North/south axis.
    pub z: i32,
}

impl BlockPos {
    /// Creates a block position.
    #[must_use]
    pub fn new(world: impl Into<String>, x: i32, y: i32, z: i32) -> Self {
        Self {
            world: world.into(),
            x,
            y,
            z,
        }
    }

    /// Returns the position shifted by the given block offsets.
    #[must_use]
    pub fn offset(&self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            world: self.world.clone(),
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    /// Returns the block directly underneath.
    #[must_use]
    pub fn below(&self) -> Self {
        self.offset(0, -1, 0)
    }

    /// Returns a precise location at the block's minimum corner shifted by
    /// the given fractional offsets.
    #[must_use]
    pub fn to_location(&self, dx: f64, dy: f64, dz: f64) -> Location {
        Location {
            world: self.world.clone(),
            x: f64::from(self.x) + dx,
            y: f64::from(self.y) + dy,
            z: f64::from(self.z) + dz,
        }
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {}, {})", self.world, self.x, self.y, self.z)
    }
}

/// Precise position in a named world, used for teleports, drops and effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Name of the world.
    pub world: String,
    /// East/west axis.
    pub x: f64,
    /// Vertical axis.
    pub y: f64,
    /// North/south axis.
    pub z: f64,
}

impl Location {
    /// Creates a location.
    #[must_use]
    pub fn new(world: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            world: world.into(),
            x,
            y,
            z,
        }
    }
}

/// Persistent key identifying an altar by its centre block, formatted as
/// `world:x:y:z`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AltarKey(String);

impl AltarKey {
    /// Builds the key for an altar centred on `centre`.
    #[must_use]
    pub fn for_centre(centre: &BlockPos) -> Self {
        Self(format!(
            "{}:{}:{}:{}",
            centre.world, centre.x, centre.y, centre.z
        ))
    }

    /// Wraps an already serialised key, as read back from storage.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the serialised key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AltarKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_altar_key_uses_colon_separated_block_coordinates() {
        let centre = BlockPos::new("world_nether", -12, 64, 7);

        assert_eq!(AltarKey::for_centre(&centre).as_str(), "world_nether:-12:64:7");
    }

    #[test]
    fn test_to_location_adds_fractional_offsets() {
        let pos = BlockPos::new("world", 10, 64, -3);

        let location = pos.to_location(0.5, 1.5, 0.5);

        assert_eq!(location, Location::new("world", 10.5, 65.5, -2.5));
    }
}
