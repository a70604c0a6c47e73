//! Error types for the fallible edges of the logic crate.
//!
//! The simulation functions themselves are total; only loading configuration,
//! building a recipe catalog and parsing item names can fail.

use crate::items::ItemType;

/// Errors produced while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed into the expected record.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A rate constant was negative.
    #[error("rate `{field}` must be non-negative, got {value}")]
    NegativeRate {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// A value was NaN or infinite.
    #[error("`{field}` must be finite, got {value}")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// A session-level setting was out of its allowed range.
    #[error("invalid setting `{field}`: {reason}")]
    InvalidSetting {
        /// Name of the offending field.
        field: &'static str,
        /// Why it was rejected.
        reason: &'static str,
    },
}

/// Errors produced while building a [`RecipeCatalog`](crate::recipes::RecipeCatalog).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate recipe id `{0}`")]
    DuplicateId(String),

    #[error("recipe `{0}` has no ingredients")]
    NoIngredients(String),

    #[error("recipe `{recipe}` requires zero {item}")]
    ZeroQuantity { recipe: String, item: ItemType },

    #[error("recipe `{recipe}` lists {item} more than once")]
    RepeatedIngredient { recipe: String, item: ItemType },

    #[error("recipe `{recipe}` consumes its own result {item}")]
    SelfConsuming { recipe: String, item: ItemType },
}

/// An item name outside the closed item set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown item `{0}`")]
pub struct UnknownItem(pub String);
