//! Random item generation.

use game_core::{GameRng, Item, ItemKind, ObjectId, Rarity, Restore, RestoreKind};
use strum::IntoEnumIterator;

use crate::equipment::weighted_rarity;

/// Constraints for item generation. Unset fields are rolled.
#[derive(Clone, Copy, Debug, Default)]
pub struct ItemParams {
    pub level: Option<u32>,
    pub kind: Option<ItemKind>,
    pub rarity: Option<Rarity>,
}

impl ItemParams {
    pub fn at_level(level: u32) -> Self {
        Self {
            level: Some(level),
            ..Self::default()
        }
    }
}

/// Generate a random item.
///
/// Consumables restore hp or mana, scaled by level and rarity; other kinds
/// are valuables with no mechanical effect.
pub fn generate_item(rng: &mut GameRng, params: &ItemParams) -> Item {
    let level = params
        .level
        .unwrap_or_else(|| rng.between(1, 50) as u32)
        .max(1);
    let kind = params.kind.unwrap_or_else(|| {
        let kinds: Vec<ItemKind> = ItemKind::iter().collect();
        *rng.choose(&kinds).unwrap_or(&ItemKind::Trinket)
    });
    let rarity = params.rarity.unwrap_or_else(|| weighted_rarity(rng));

    let restore = (kind == ItemKind::Consumable).then(|| {
        let (restore_kind, factor) = if rng.percent(50) {
            (RestoreKind::Hp, 5.0)
        } else {
            (RestoreKind::Mana, 2.0)
        };
        Restore {
            kind: restore_kind,
            amount: (rng.unit() * rarity.multiplier() + factor * level as f64).ceil() as i32,
        }
    });

    Item {
        id: ObjectId(rng.next_id()),
        name: format!("{rarity} {kind}"),
        kind,
        rarity,
        level,
        restore,
        value: level as i64 * 50 * (rarity.index() as i64 + 1),
    }
}
