/// Variant-specific payload of an item
///
/// Every item shares the same header (name, prices, id); this enum
/// carries what only one kind of item has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    /// Equippable weapon
    Weapon(WeaponStats),

    /// Potion-like item that restores health and/or mana
    Consumable(ConsumableStats),
}

/// Combat stats for weapons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WeaponStats {
    pub damage: u16,
    pub critical_chance: u16,
    pub spell_damage: u16,
    pub accuracy: u16,
}

/// Restore amounts for consumables
///
/// The item only stores the magnitudes. Applying them to a character is
/// the job of whoever consumes the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConsumableStats {
    pub health_restore: u16,
    pub mana_restore: u16,
}

impl WeaponStats {
    pub fn new(damage: u16, critical_chance: u16, spell_damage: u16, accuracy: u16) -> Self {
        WeaponStats {
            damage,
            critical_chance,
            spell_damage,
            accuracy,
        }
    }
}

impl ConsumableStats {
    pub fn new(health_restore: u16, mana_restore: u16) -> Self {
        ConsumableStats {
            health_restore,
            mana_restore,
        }
    }
}
