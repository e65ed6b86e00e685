//! Altar structure validation and ritual item consumption.
//!
//! An altar is a 3x3 platform of the configured block, a fence on the
//! centre block carrying the placed head, and a container on each of the
//! four platform corners, one level up:
//!
//! ```text
//!   y+1:  C . C        C = container, F = fence
//!         . F .
//!         C . C
//!   y  :  G G G        G = platform block
//!         G G G
//!         G G G
//! ```

use hardcore_revival_core::config::RevivalConfig;
use hardcore_revival_core::host::{GameHost, HostError};
use hardcore_revival_core::item::{ItemStack, Material};
use hardcore_revival_core::position::BlockPos;

use super::rejection::Rejection;

/// Corner offsets `(dx, dz)` of the four containers.
pub const CONTAINER_CORNERS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Number of containers an exact altar must have.
pub const REQUIRED_CONTAINERS: usize = CONTAINER_CORNERS.len();

/// A validated altar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AltarDescriptor {
    /// Centre block of the platform, directly under the fence.
    pub centre: BlockPos,
    /// Positions of the containers taking part in the ritual.
    pub containers: Vec<BlockPos>,
}

/// Validates the altar beneath `support`, the fence block carrying the head.
///
/// Checks run in a fixed order and stop at the first failure: world
/// restrictions, platform height, the platform pattern, the corner
/// containers, then container contents. With `requireExactStructure`
/// disabled the platform is not inspected and non-container corners are
/// skipped, but the contents of every container found are still checked.
///
/// # Errors
///
/// Returns the first [`Rejection`] encountered.
pub fn validate_altar(
    host: &dyn GameHost,
    config: &RevivalConfig,
    support: &BlockPos,
) -> Result<AltarDescriptor, Rejection> {
    let settings = &config.settings;
    let altar = &config.altar;

    if !settings.allows_world(&support.world) {
        return Err(Rejection::WorldNotAllowed);
    }

    let centre = support.below();
    if centre.y < settings.y_min || centre.y > settings.y_max {
        return Err(Rejection::StructureInvalid);
    }

    let exact = settings.require_exact_structure;
    if exact {
        for dx in -1..=1 {
            for dz in -1..=1 {
                if host.block_type(&centre.offset(dx, 0, dz)) != altar.platform_block {
                    return Err(Rejection::StructureInvalid);
                }
            }
        }
    }

    let mut containers = Vec::with_capacity(REQUIRED_CONTAINERS);
    let mut contents = Vec::with_capacity(REQUIRED_CONTAINERS);
    for (dx, dz) in CONTAINER_CORNERS {
        let pos = centre.offset(dx, 1, dz);
        if host.block_type(&pos) != altar.container_block {
            if exact {
                return Err(Rejection::StructureInvalid);
            }
            continue;
        }
        if let Some(slots) = host.container_contents(&pos) {
            containers.push(pos);
            contents.push(slots);
        }
    }

    if exact && containers.len() != REQUIRED_CONTAINERS {
        return Err(Rejection::StructureInvalid);
    }

    let stocked = contents
        .iter()
        .all(|slots| altar.required_items.iter().all(|m| holds(slots, m)));
    if !stocked {
        return Err(Rejection::ChestMissingItems);
    }

    Ok(AltarDescriptor { centre, containers })
}

fn holds(slots: &[Option<ItemStack>], material: &Material) -> bool {
    slots
        .iter()
        .flatten()
        .any(|item| item.material == *material && item.amount > 0)
}

/// Removes one unit of each required item from every container of the
/// altar. Call only after a successful validation.
///
/// Every container is read before any is modified, so a missing container
/// leaves all of them untouched.
///
/// # Errors
///
/// Returns the host error if a container vanished or rejected the update.
pub fn consume_chest_items(
    host: &dyn GameHost,
    required: &[Material],
    altar: &AltarDescriptor,
) -> Result<(), HostError> {
    let mut inventories = Vec::with_capacity(altar.containers.len());
    for pos in &altar.containers {
        let slots = host
            .container_contents(pos)
            .ok_or_else(|| HostError::NoContainer(pos.clone()))?;
        inventories.push((pos, slots));
    }
    for (pos, mut slots) in inventories {
        for material in required {
            if let Some(slot) = take_one(&mut slots, material) {
                host.set_container_slot(pos, slot, slots[slot].clone())?;
            }
        }
    }
    Ok(())
}

/// Takes one unit from the first non-empty stack of `material` and returns
/// its slot.
fn take_one(slots: &mut [Option<ItemStack>], material: &Material) -> Option<usize> {
    let slot = slots.iter().position(|item| {
        item.as_ref()
            .is_some_and(|stack| stack.material == *material && stack.amount > 0)
    })?;
    slots[slot] = slots[slot]
        .take()
        .filter(|stack| stack.amount > 1)
        .map(|mut stack| {
            stack.amount -= 1;
            stack
        });
    Some(slot)
}
