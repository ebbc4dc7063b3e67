//! Player-allocated bonus attribute points.
//!
//! Levelling grants stat points that the player distributes across four
//! attributes. They feed the derived-stat formulas in [`super::derived`] and
//! are independent of equipment bonuses.

use strum::EnumIter;

/// The four allocatable attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attribute {
    Strength,
    Intellect,
    Agility,
    Luck,
}

impl Attribute {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Attribute::Strength => "Str",
            Attribute::Intellect => "Int",
            Attribute::Agility => "Agi",
            Attribute::Luck => "Luc",
        }
    }
}

impl core::fmt::Display for Attribute {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Distributed bonus point totals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BonusPoints {
    pub strength: i32,
    pub intellect: i32,
    pub agility: i32,
    pub luck: i32,
}

impl BonusPoints {
    pub const fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Intellect => self.intellect,
            Attribute::Agility => self.agility,
            Attribute::Luck => self.luck,
        }
    }

    pub fn add(&mut self, attribute: Attribute, amount: i32) {
        match attribute {
            Attribute::Strength => self.strength += amount,
            Attribute::Intellect => self.intellect += amount,
            Attribute::Agility => self.agility += amount,
            Attribute::Luck => self.luck += amount,
        }
    }
}
