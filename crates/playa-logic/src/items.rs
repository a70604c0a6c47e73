//! The closed set of item types a player can carry.
//!
//! Raw materials are picked up during play; crafted artifacts only ever
//! appear as the result of a recipe. Every item has a stable display name
//! that doubles as its serialized form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownItem;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ItemType {
    #[serde(rename = "Light Bulb")]
    LightBulb,
    Glitter,
    Rope,
    Fabric,
    Wood,
    Battery,
    #[serde(rename = "Water Bottle")]
    WaterBottle,
    Totem,
    Costume,
    Lantern,
    #[serde(rename = "Shade Structure")]
    ShadeStructure,
}

impl ItemType {
    /// All item types in declaration order.
    pub const ALL: [ItemType; 11] = [
        ItemType::LightBulb,
        ItemType::Glitter,
        ItemType::Rope,
        ItemType::Fabric,
        ItemType::Wood,
        ItemType::Battery,
        ItemType::WaterBottle,
        ItemType::Totem,
        ItemType::Costume,
        ItemType::Lantern,
        ItemType::ShadeStructure,
    ];

    /// Human-readable name, as shown in notifications.
    pub fn name(self) -> &'static str {
        match self {
            ItemType::LightBulb => "Light Bulb",
            ItemType::Glitter => "Glitter",
            ItemType::Rope => "Rope",
            ItemType::Fabric => "Fabric",
            ItemType::Wood => "Wood",
            ItemType::Battery => "Battery",
            ItemType::WaterBottle => "Water Bottle",
            ItemType::Totem => "Totem",
            ItemType::Costume => "Costume",
            ItemType::Lantern => "Lantern",
            ItemType::ShadeStructure => "Shade Structure",
        }
    }

    /// Whether this item can only be obtained by crafting.
    pub fn is_crafted(self) -> bool {
        matches!(
            self,
            ItemType::Totem | ItemType::Costume | ItemType::Lantern | ItemType::ShadeStructure
        )
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ItemType {
    type Err = UnknownItem;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemType::ALL
            .iter()
            .copied()
            .find(|item| item.name() == s)
            .ok_or_else(|| UnknownItem(s.to_string()))
    }
}
