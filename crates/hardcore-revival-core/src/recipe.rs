//! Crafting recipe definitions handed to the host.

use serde::{Deserialize, Serialize};

use crate::item::{ItemStack, Material};

/// One ingredient slot of a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecipeChoice {
    /// Any item of the given material.
    Material(Material),
    /// Only items equal to this stack, metadata included.
    Exact(ItemStack),
}

/// A recipe whose ingredients may sit in any grid slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapelessRecipe {
    /// Namespaced recipe key, e.g. `hardcorerevival:blank_head`.
    pub key: String,
    /// The crafted item.
    pub output: ItemStack,
    /// Ingredients, one entry per required item.
    pub ingredients: Vec<RecipeChoice>,
}
