//! Pure player-state logic for Playa.
//!
//! This crate contains the need/mood model and the auto-crafting resolver,
//! independent of any renderer, input layer or UI. Functions take plain data
//! and return results, so the game loop, the headless harness and the tests
//! all drive the exact same code.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | `DecayConfig` rate constants and JSON loading |
//! | [`crafting`] | Auto-craft pass over the recipe catalog |
//! | [`effects`] | Per-frame stat deltas (energy, mood, thirst, hunger, karma, bathroom) |
//! | [`error`] | Error types for the fallible edges (config, catalog, item names) |
//! | [`inventory`] | Item-type → quantity multiset |
//! | [`items`] | The closed set of item types |
//! | [`notify`] | Notification events and the sink trait |
//! | [`position`] | World-space position and distance |
//! | [`recipes`] | Immutable recipe catalog |
//! | [`stats`] | Player stat snapshot and delta bundle |

pub mod config;
pub mod crafting;
pub mod effects;
pub mod error;
pub mod inventory;
pub mod items;
pub mod notify;
pub mod position;
pub mod recipes;
pub mod stats;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::config::DecayConfig;
    pub use crate::crafting::{can_craft, CraftingResolver};
    pub use crate::effects::compute_frame_effects;
    pub use crate::inventory::Inventory;
    pub use crate::items::ItemType;
    pub use crate::notify::{Notification, NotificationSink};
    pub use crate::position::WorldPosition;
    pub use crate::recipes::{CraftingRecipe, Ingredient, RecipeCatalog};
    pub use crate::stats::{PlayerStats, StatDeltas};
}
