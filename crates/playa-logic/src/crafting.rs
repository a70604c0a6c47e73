//! Auto-crafting against the recipe catalog.
//!
//! One auto-craft pass walks the catalog in declaration order. Every recipe
//! whose ingredients are held at that moment fires exactly once: all its
//! ingredients are removed, one result is added, and a notification goes to
//! the sink. Consumption is immediate, so an earlier recipe can starve a
//! later one that shares an ingredient. A recipe starved this way is not
//! retried until the next pass.

use log::{debug, info};

use crate::inventory::Inventory;
use crate::items::ItemType;
use crate::notify::{Notification, NotificationSink};
use crate::position::WorldPosition;
use crate::recipes::{CraftingRecipe, RecipeCatalog};

/// Category attached to crafting notifications.
pub const CRAFT_CATEGORY: &str = "crafting";
/// How long a crafting notification stays on screen.
pub const CRAFT_DISPLAY_MS: u32 = 3000;

/// Whether `inventory` holds every ingredient of `recipe` in full.
pub fn can_craft(inventory: &Inventory, recipe: &CraftingRecipe) -> bool {
    recipe
        .ingredients
        .iter()
        .all(|ing| inventory.quantity_of(ing.item) >= ing.quantity)
}

/// Notification emitted when `recipe` fires at `position`.
pub fn craft_notification(recipe: &CraftingRecipe, position: WorldPosition) -> Notification {
    Notification {
        message: format!("Crafted {}! {}", recipe.result, recipe.description),
        category: CRAFT_CATEGORY.to_string(),
        display_duration_ms: CRAFT_DISPLAY_MS,
        position,
    }
}

/// Resolves recipes from a catalog against a borrowed inventory.
#[derive(Debug, Clone, Copy)]
pub struct CraftingResolver<'a> {
    catalog: &'a RecipeCatalog,
}

impl<'a> CraftingResolver<'a> {
    pub fn new(catalog: &'a RecipeCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a RecipeCatalog {
        self.catalog
    }

    /// Recipes craftable right now, without touching the inventory.
    pub fn available_recipes(&self, inventory: &Inventory) -> Vec<&'a CraftingRecipe> {
        self.catalog
            .iter()
            .filter(|recipe| can_craft(inventory, recipe))
            .collect()
    }

    /// Run one auto-craft pass and return the crafted items in firing order.
    pub fn auto_craft_all(
        &self,
        inventory: &mut Inventory,
        position: WorldPosition,
        sink: &mut dyn NotificationSink,
    ) -> Vec<ItemType> {
        let mut crafted = Vec::new();

        for recipe in self.catalog {
            if !can_craft(inventory, recipe) {
                continue;
            }
            for ing in &recipe.ingredients {
                // Guarded by can_craft; ingredient items are distinct per recipe.
                inventory.remove(ing.item, ing.quantity);
            }
            inventory.add(recipe.result, 1);
            debug!("crafted {} via recipe `{}`", recipe.result, recipe.id);

            sink.notify(craft_notification(recipe, position));
            crafted.push(recipe.result);
        }

        if !crafted.is_empty() {
            info!(
                "auto-craft pass produced {} item(s) at ({:.0}, {:.0})",
                crafted.len(),
                position.x,
                position.y
            );
        }
        crafted
    }
}
