//! Resolving which player a revival token names.

use hardcore_revival_core::host::GameHost;
use hardcore_revival_core::item::ItemStack;
use hardcore_revival_core::player::PlayerProfile;
use hardcore_revival_core::text;

/// Resolves the player a head stands for.
///
/// A head dropped on death carries its owner's profile. A crafted blank
/// head has no owner and is instead renamed in an anvil; its display name,
/// stripped of colour codes and trimmed, is looked up through the host.
#[must_use]
pub fn resolve_target(host: &dyn GameHost, item: Option<&ItemStack>) -> Option<PlayerProfile> {
    let item = item.filter(|item| item.material.is_player_head())?;

    if let Some(owner) = item.meta.owner.as_ref().filter(|o| !o.name.is_empty()) {
        return Some(owner.clone());
    }

    let name = text::strip_colour(item.meta.display_name.as_deref()?);
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    host.find_profile(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    use hardcore_revival_core::item::{ItemMeta, Material};
    use hardcore_revival_test_support::{MemoryHost, head_for, named_head};
    use uuid::Uuid;

    #[test]
    fn test_owned_head_resolves_to_owner_without_lookup() {
        let host = MemoryHost::new();
        let owner = PlayerProfile::new(Uuid::new_v4(), "Notch");

        assert_eq!(resolve_target(&host, Some(&head_for(&owner))), Some(owner));
    }

    #[test]
    fn test_renamed_head_resolves_through_host_lookup() {
        let host = MemoryHost::new();
        let known = PlayerProfile::new(Uuid::new_v4(), "Alex");
        host.remember(&known);

        let resolved = resolve_target(&host, Some(&named_head("\u{a7}b  Alex \u{a7}r")));

        assert_eq!(resolved, Some(known));
    }

    #[test]
    fn test_owner_without_name_falls_back_to_display_name() {
        let host = MemoryHost::new();
        let known = PlayerProfile::new(Uuid::new_v4(), "Alex");
        host.remember(&known);
        let mut head = named_head("Alex");
        head.meta.owner = Some(PlayerProfile::new(Uuid::new_v4(), ""));

        assert_eq!(resolve_target(&host, Some(&head)), Some(known));
    }

    #[test]
    fn test_unknown_or_blank_names_do_not_resolve() {
        let host = MemoryHost::new();

        assert_eq!(resolve_target(&host, Some(&named_head("Nobody"))), None);
        assert_eq!(resolve_target(&host, Some(&named_head("  \u{a7}c "))), None);
        assert_eq!(
            resolve_target(&host, Some(&ItemStack::new(Material::PlayerHead, 1))),
            None
        );
        assert_eq!(resolve_target(&host, None), None);
    }

    #[test]
    fn test_items_other_than_heads_do_not_resolve() {
        let host = MemoryHost::new();
        let owner = PlayerProfile::new(Uuid::new_v4(), "Notch");
        let skull = ItemStack::new(Material::SkeletonSkull, 1).with_meta(ItemMeta {
            owner: Some(owner),
            ..ItemMeta::default()
        });

        assert_eq!(resolve_target(&host, Some(&skull)), None);
    }
}
