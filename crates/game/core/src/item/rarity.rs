//! Rarity tiers.
//!
//! Ordered quality classes controlling stat magnitude and sub-stat count.
//! The generation weights themselves live with the generator; the tier
//! ordering and its scaling data are part of the item model.

use strum::EnumIter;

/// Ordered rarity tier: common < uncommon < rare < epic < legendary < mythic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Mythic,
}

impl Rarity {
    /// Zero-based tier index, used by coin-value formulas.
    pub const fn index(&self) -> u32 {
        match self {
            Rarity::Common => 0,
            Rarity::Uncommon => 1,
            Rarity::Rare => 2,
            Rarity::Epic => 3,
            Rarity::Legendary => 4,
            Rarity::Mythic => 5,
        }
    }

    /// Stat magnitude multiplier, monotonically increasing with tier.
    pub const fn multiplier(&self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Uncommon => 1.2,
            Rarity::Rare => 1.5,
            Rarity::Epic => 2.0,
            Rarity::Legendary => 2.5,
            Rarity::Mythic => 3.0,
        }
    }

    /// Inclusive range of sub-stat lines rolled on an item of this tier.
    pub const fn sub_stat_range(&self) -> (u32, u32) {
        match self {
            Rarity::Common => (0, 1),
            Rarity::Uncommon => (0, 2),
            Rarity::Rare => (1, 3),
            Rarity::Epic => (2, 4),
            Rarity::Legendary => (2, 5),
            Rarity::Mythic => (5, 5),
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
            Rarity::Mythic => "mythic",
        }
    }
}

impl core::fmt::Display for Rarity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn tiers_are_ordered() {
        assert!(Rarity::Common < Rarity::Uncommon);
        assert!(Rarity::Epic < Rarity::Legendary);
        assert!(Rarity::Legendary < Rarity::Mythic);
    }

    #[test]
    fn multiplier_is_monotonic() {
        let mut last = 0.0;
        for rarity in Rarity::iter() {
            assert!(rarity.multiplier() > last);
            last = rarity.multiplier();
        }
    }
}
