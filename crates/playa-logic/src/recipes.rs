//! Immutable recipe catalog.
//!
//! Recipes are declared once and never mutated. Declaration order matters:
//! the auto-craft pass walks the catalog front to back, so an earlier recipe
//! gets first claim on any ingredient it shares with a later one.
//!
//! The built-in table is exposed process-wide through
//! [`RecipeCatalog::standard`]. Custom catalogs go through
//! [`RecipeCatalog::new`], which rejects malformed tables.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::items::ItemType;

/// One required input of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub item: ItemType,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CraftingRecipe {
    pub id: String,
    pub result: ItemType,
    /// Required inputs, in declaration order.
    pub ingredients: Vec<Ingredient>,
    pub description: String,
}

impl CraftingRecipe {
    pub fn new(
        id: &str,
        result: ItemType,
        ingredients: &[(ItemType, u32)],
        description: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            result,
            ingredients: ingredients
                .iter()
                .map(|&(item, quantity)| Ingredient { item, quantity })
                .collect(),
            description: description.to_string(),
        }
    }

    fn check(&self) -> Result<(), CatalogError> {
        if self.ingredients.is_empty() {
            return Err(CatalogError::NoIngredients(self.id.clone()));
        }
        let mut seen = HashSet::new();
        for ingredient in &self.ingredients {
            if ingredient.quantity == 0 {
                return Err(CatalogError::ZeroQuantity {
                    recipe: self.id.clone(),
                    item: ingredient.item,
                });
            }
            if ingredient.item == self.result {
                return Err(CatalogError::SelfConsuming {
                    recipe: self.id.clone(),
                    item: ingredient.item,
                });
            }
            if !seen.insert(ingredient.item) {
                return Err(CatalogError::RepeatedIngredient {
                    recipe: self.id.clone(),
                    item: ingredient.item,
                });
            }
        }
        Ok(())
    }
}

/// Ordered, read-only set of recipes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeCatalog {
    recipes: Vec<CraftingRecipe>,
}

impl RecipeCatalog {
    /// Build a catalog, keeping the given order.
    pub fn new(recipes: Vec<CraftingRecipe>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        for recipe in &recipes {
            if !ids.insert(recipe.id.as_str()) {
                return Err(CatalogError::DuplicateId(recipe.id.clone()));
            }
            recipe.check()?;
        }
        Ok(Self { recipes })
    }

    /// The built-in catalog, constructed on first use.
    pub fn standard() -> &'static RecipeCatalog {
        static STANDARD: OnceLock<RecipeCatalog> = OnceLock::new();
        STANDARD.get_or_init(|| RecipeCatalog {
            recipes: standard_recipes(),
        })
    }

    pub fn get(&self, id: &str) -> Option<&CraftingRecipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Recipes in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, CraftingRecipe> {
        self.recipes.iter()
    }

    /// Recipes that produce `result`.
    pub fn recipes_for(&self, result: ItemType) -> impl Iterator<Item = &CraftingRecipe> + '_ {
        self.recipes.iter().filter(move |r| r.result == result)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl<'a> IntoIterator for &'a RecipeCatalog {
    type Item = &'a CraftingRecipe;
    type IntoIter = std::slice::Iter<'a, CraftingRecipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}

/// The built-in recipe table, in resolution order.
pub fn standard_recipes() -> Vec<CraftingRecipe> {
    use ItemType::*;

    vec![
        CraftingRecipe::new(
            "totem",
            Totem,
            &[(LightBulb, 2), (Glitter, 1), (Rope, 1)],
            "A glowing totem your campmates can find you by.",
        ),
        CraftingRecipe::new(
            "costume",
            Costume,
            &[(Fabric, 2), (Glitter, 1)],
            "A sparkling outfit. Strangers smile at you.",
        ),
        CraftingRecipe::new(
            "lantern",
            Lantern,
            &[(LightBulb, 1), (Battery, 1), (WaterBottle, 1)],
            "A water-bottle lantern to light the way home.",
        ),
        CraftingRecipe::new(
            "shade_structure",
            ShadeStructure,
            &[(Wood, 3), (Rope, 2), (Fabric, 2)],
            "Shade from the afternoon sun.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_is_valid() {
        let catalog = RecipeCatalog::new(standard_recipes()).unwrap();
        assert_eq!(&catalog, RecipeCatalog::standard());
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_standard_order() {
        let ids: Vec<&str> = RecipeCatalog::standard()
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, ["totem", "costume", "lantern", "shade_structure"]);
    }

    #[test]
    fn test_lookup() {
        let catalog = RecipeCatalog::standard();
        let totem = catalog.get("totem").unwrap();
        assert_eq!(totem.result, ItemType::Totem);
        assert_eq!(totem.ingredients[0].quantity, 2);
        assert!(catalog.get("spaceship").is_none());
        assert_eq!(catalog.recipes_for(ItemType::Lantern).count(), 1);
        assert_eq!(catalog.recipes_for(ItemType::Rope).count(), 0);
    }

    #[test]
    fn test_results_are_crafted_items() {
        for recipe in RecipeCatalog::standard() {
            assert!(recipe.result.is_crafted(), "{}", recipe.id);
            assert!(recipe.ingredients.iter().all(|i| !i.item.is_crafted()));
        }
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let a = CraftingRecipe::new("x", ItemType::Totem, &[(ItemType::Rope, 1)], "");
        let b = CraftingRecipe::new("x", ItemType::Lantern, &[(ItemType::Wood, 1)], "");
        assert_eq!(
            RecipeCatalog::new(vec![a, b]),
            Err(CatalogError::DuplicateId("x".to_string()))
        );
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let r = CraftingRecipe::new("x", ItemType::Totem, &[(ItemType::Rope, 0)], "");
        assert!(matches!(
            RecipeCatalog::new(vec![r]),
            Err(CatalogError::ZeroQuantity { .. })
        ));
    }

    #[test]
    fn test_empty_ingredients_rejected() {
        let r = CraftingRecipe::new("x", ItemType::Totem, &[], "");
        assert_eq!(
            RecipeCatalog::new(vec![r]),
            Err(CatalogError::NoIngredients("x".to_string()))
        );
    }

    #[test]
    fn test_self_consuming_rejected() {
        let r = CraftingRecipe::new(
            "loop",
            ItemType::Rope,
            &[(ItemType::Rope, 1), (ItemType::Wood, 1)],
            "",
        );
        assert!(matches!(
            RecipeCatalog::new(vec![r]),
            Err(CatalogError::SelfConsuming { item: ItemType::Rope, .. })
        ));
    }

    #[test]
    fn test_repeated_ingredient_rejected() {
        let r = CraftingRecipe::new(
            "x",
            ItemType::Totem,
            &[(ItemType::Rope, 1), (ItemType::Rope, 2)],
            "",
        );
        assert!(matches!(
            RecipeCatalog::new(vec![r]),
            Err(CatalogError::RepeatedIngredient { .. })
        ));
    }
}
