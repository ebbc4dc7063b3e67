//! Non-equipment items.

use strum::EnumIter;

use super::gear::ObjectId;
use super::rarity::Rarity;

/// Item category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Usable in combat; restores hp or mana.
    Consumable,
    /// No mechanical effect, kept for its sale value.
    Collectible,
    /// Everything else.
    Trinket,
}

impl ItemKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Consumable => "consumable",
            ItemKind::Collectible => "collectible",
            ItemKind::Trinket => "trinket",
        }
    }
}

impl core::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resource a consumable restores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RestoreKind {
    Hp,
    Mana,
}

/// Restoration carried by a consumable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Restore {
    pub kind: RestoreKind,
    pub amount: i32,
}

/// A carried item.
///
/// Only consumables carry a [`Restore`]; drinking one restores that much of
/// the matching resource, capped at the maximum.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: ObjectId,
    pub name: String,
    pub kind: ItemKind,
    pub rarity: Rarity,
    pub level: u32,
    pub restore: Option<Restore>,
    /// Sale value in coins.
    pub value: i64,
}
