//! The blank revival head recipe.

use hardcore_revival_core::config::RecipeSettings;
use hardcore_revival_core::host::{GameHost, HostError};
use hardcore_revival_core::item::{ItemMeta, ItemStack, Material, PotionData, PotionType};
use hardcore_revival_core::recipe::{RecipeChoice, ShapelessRecipe};
use hardcore_revival_core::text;

/// Key of the blank head recipe.
pub const BLANK_HEAD_RECIPE_KEY: &str = "hardcorerevival:blank_head";

/// Lore on a blank head, telling players how to bind it.
pub const BLANK_HEAD_LORE: &str = "&7Rename in an anvil to the player's name";

/// Builds the shapeless recipe turning a skeleton skull and an Instant
/// Health II potion into an ownerless player head.
#[must_use]
pub fn blank_head_recipe(settings: &RecipeSettings) -> ShapelessRecipe {
    let output = ItemStack::new(Material::PlayerHead, 1).with_meta(ItemMeta {
        display_name: Some(text::colour(&settings.output_name)),
        lore: vec![text::colour(BLANK_HEAD_LORE)],
        ..ItemMeta::default()
    });
    let potion = ItemStack::new(Material::Potion, 1).with_meta(ItemMeta {
        potion: Some(PotionData {
            kind: PotionType::InstantHeal,
            extended: false,
            upgraded: true,
        }),
        ..ItemMeta::default()
    });

    ShapelessRecipe {
        key: BLANK_HEAD_RECIPE_KEY.to_owned(),
        output,
        ingredients: vec![
            RecipeChoice::Material(Material::SkeletonSkull),
            RecipeChoice::Exact(potion),
        ],
    }
}

/// Registers the blank head recipe, replacing a previous registration.
///
/// # Errors
///
/// Returns the host error if the recipe is refused.
pub fn register_blank_head_recipe(
    host: &dyn GameHost,
    settings: &RecipeSettings,
) -> Result<(), HostError> {
    host.remove_recipe(BLANK_HEAD_RECIPE_KEY);
    host.add_recipe(blank_head_recipe(settings))
}
