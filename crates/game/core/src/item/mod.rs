//! Items: equipment and carried goods.

pub mod consumable;
pub mod gear;
pub mod rarity;

pub use consumable::{Item, ItemKind, Restore, RestoreKind};
pub use gear::{EquipSlot, Equipment, GearStats, ObjectId, StatLine};
pub use rarity::Rarity;
