use std::fmt;

use super::properties::{ConsumableStats, ItemKind, WeaponStats};

/// Catalog-assigned identity of an item
///
/// Ids are handed out by [`RegistryBuilder`](super::RegistryBuilder) only,
/// one per catalog entry, and never collide across item kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u16);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Item categories, used for filtering menus and sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Consumable,
    Weapon,
    Key,
    Misc,
}

impl Category {
    /// Numeric value of the category (declaration order, starting at 0)
    pub fn value(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            Category::Consumable => "Consumable",
            Category::Weapon => "Weapon",
            Category::Key => "Key",
            Category::Misc => "Misc",
        };
        f.write_str(label)
    }
}

/// A single item instance
///
/// The canonical copy lives in an [`ItemTable`](super::ItemTable);
/// everything else (inventories, the equipped weapon) holds clones.
/// Fields are read through accessors so that nothing outside the crate
/// can rewrite an item after the catalog built it.
///
/// Items only come from the catalog. They can't be read back from
/// serialized data:
///
/// ```compile_fail
/// let item: bones::item::Item = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) id: ItemId,
    pub(crate) buy_price: u16,
    pub(crate) sell_price: u16,
    pub(crate) kind: ItemKind,
}

impl Item {
    /// Creates a weapon
    pub(crate) fn weapon(
        name: impl Into<String>,
        description: impl Into<String>,
        id: ItemId,
        stats: WeaponStats,
        buy_price: u16,
        sell_price: u16,
    ) -> Self {
        Item {
            name: name.into(),
            description: description.into(),
            id,
            buy_price,
            sell_price,
            kind: ItemKind::Weapon(stats),
        }
    }

    /// Creates a consumable
    pub(crate) fn consumable(
        name: impl Into<String>,
        description: impl Into<String>,
        id: ItemId,
        stats: ConsumableStats,
        buy_price: u16,
        sell_price: u16,
    ) -> Self {
        Item {
            name: name.into(),
            description: description.into(),
            id,
            buy_price,
            sell_price,
            kind: ItemKind::Consumable(stats),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn buy_price(&self) -> u16 {
        self.buy_price
    }

    pub fn sell_price(&self) -> u16 {
        self.sell_price
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    /// Category is derived from the payload, so the two can't disagree
    pub fn category(&self) -> Category {
        match self.kind {
            ItemKind::Weapon(_) => Category::Weapon,
            ItemKind::Consumable(_) => Category::Consumable,
        }
    }

    /// Returns the weapon stats if this item is a weapon
    pub fn as_weapon(&self) -> Option<&WeaponStats> {
        match &self.kind {
            ItemKind::Weapon(stats) => Some(stats),
            _ => None,
        }
    }

    /// Returns the restore amounts if this item is a consumable
    pub fn as_consumable(&self) -> Option<&ConsumableStats> {
        match &self.kind {
            ItemKind::Consumable(stats) => Some(stats),
            _ => None,
        }
    }

    /// Returns true if both items have the same catalog identity
    pub fn is_same_item(&self, other: &Item) -> bool {
        self.id == other.id
    }
}
