//! Equipment pieces and their stat lines.

use strum::EnumIter;

use super::rarity::Rarity;
use crate::stats::StatKind;

/// Unique identifier for any generated object (equipment, item, skill,
/// tracked effect).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectId(pub u64);

impl core::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{:016x}", self.0)
    }
}

/// Equipment slot. Doubles as the equipment piece's type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipSlot {
    Weapon,
    Helmet,
    Armor,
    Gloves,
    Boots,
    Ring,
    Necklace,
}

impl EquipSlot {
    pub const fn as_str(&self) -> &'static str {
        match self {
            EquipSlot::Weapon => "weapon",
            EquipSlot::Helmet => "helmet",
            EquipSlot::Armor => "armor",
            EquipSlot::Gloves => "gloves",
            EquipSlot::Boots => "boots",
            EquipSlot::Ring => "ring",
            EquipSlot::Necklace => "necklace",
        }
    }
}

impl core::fmt::Display for EquipSlot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One stat bonus carried by an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatLine {
    pub kind: StatKind,
    pub value: i32,
}

impl StatLine {
    pub const fn new(kind: StatKind, value: i32) -> Self {
        Self { kind, value }
    }
}

/// An item's guaranteed main stat plus randomized sub-stats.
///
/// Invariant: no stat kind appears twice across main + subs. The generator
/// guarantees this on creation; equip/unequip relies on it so reversal is a
/// plain subtraction.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GearStats {
    pub main: Option<StatLine>,
    pub subs: Vec<StatLine>,
}

impl GearStats {
    /// Total bonus this item grants for one stat kind.
    pub fn bonus(&self, kind: StatKind) -> i32 {
        let main = self
            .main
            .filter(|line| line.kind == kind)
            .map_or(0, |line| line.value);
        let subs: i32 = self
            .subs
            .iter()
            .filter(|line| line.kind == kind)
            .map(|line| line.value)
            .sum();
        main + subs
    }

    /// Iterate every stat line, main first.
    pub fn lines(&self) -> impl Iterator<Item = &StatLine> {
        self.main.iter().chain(self.subs.iter())
    }
}

/// A piece of equipment.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    pub id: ObjectId,
    pub name: String,
    pub slot: EquipSlot,
    pub rarity: Rarity,
    pub level: u32,
    pub stats: GearStats,
    /// Sale value in coins.
    pub value: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bonus_sums_main_and_subs() {
        let gear = GearStats {
            main: Some(StatLine::new(StatKind::Attack, 10)),
            subs: vec![
                StatLine::new(StatKind::Speed, 3),
                StatLine::new(StatKind::Defense, 4),
            ],
        };
        assert_eq!(gear.bonus(StatKind::Attack), 10);
        assert_eq!(gear.bonus(StatKind::Speed), 3);
        assert_eq!(gear.bonus(StatKind::MaxHp), 0);
        assert_eq!(gear.lines().count(), 3);
    }
}
