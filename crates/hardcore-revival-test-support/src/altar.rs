//! Altar fixtures.

use hardcore_revival_core::item::{ItemMeta, ItemStack, Material};
use hardcore_revival_core::player::PlayerProfile;
use hardcore_revival_core::position::BlockPos;

use crate::host::MemoryHost;

/// World the fixtures build in.
pub const ALTAR_WORLD: &str = "world";

/// Slots of a chest ready for one ritual: one totem, two wither roses, and
/// empty slots up to a single chest's 27.
#[must_use]
pub fn ritual_chest_contents() -> Vec<Option<ItemStack>> {
    let mut slots = vec![None; 27];
    slots[3] = Some(ItemStack::new(Material::TotemOfUndying, 1));
    slots[8] = Some(ItemStack::new(Material::WitherRose, 2));
    slots
}

/// Builds a complete default altar around `centre`: a 3x3 gold platform at
/// the centre's height, an oak fence on the centre block, and a stocked
/// chest on each corner. Returns the fence position, where a head goes on
/// top.
pub fn build_altar(host: &MemoryHost, centre: &BlockPos) -> BlockPos {
    for dx in -1..=1 {
        for dz in -1..=1 {
            host.set_block(&centre.offset(dx, 0, dz), Material::GoldBlock);
        }
    }
    for (dx, dz) in [(-1, -1), (-1, 1), (1, -1), (1, 1)] {
        host.place_container(
            &centre.offset(dx, 1, dz),
            Material::Chest,
            ritual_chest_contents(),
        );
    }
    let fence = centre.offset(0, 1, 0);
    host.set_block(&fence, Material::OakFence);
    fence
}

/// A player head bound to `profile`, as dropped on death.
#[must_use]
pub fn head_for(profile: &PlayerProfile) -> ItemStack {
    ItemStack::new(Material::PlayerHead, 1).with_meta(ItemMeta {
        owner: Some(profile.clone()),
        ..ItemMeta::default()
    })
}

/// A blank head renamed to `display_name`.
#[must_use]
pub fn named_head(display_name: &str) -> ItemStack {
    ItemStack::new(Material::PlayerHead, 1).with_meta(ItemMeta {
        display_name: Some(display_name.to_owned()),
        ..ItemMeta::default()
    })
}
