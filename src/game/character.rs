use crate::config::GameConfig;
use crate::inventory::Inventory;
use crate::item::{Item, ItemRegistry, WeaponStats};
use super::error::GameError;
use super::workshop::Workshop;

/// Base attributes, raised by workshop augments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attributes {
    pub strength: u32,
    pub defense: u32,
    pub intelligence: u32,
    pub speed: u32,
}

impl Default for Attributes {
    fn default() -> Self {
        Attributes {
            strength: 1,
            defense: 1,
            intelligence: 1,
            speed: 1,
        }
    }
}

/// Weapon proficiency multipliers, raised by workshop body mods
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proficiencies {
    pub sword: f32,
    pub bow: f32,
    pub staff: f32,
    pub unarmed: f32,
}

impl Default for Proficiencies {
    fn default() -> Self {
        Proficiencies {
            sword: 1.0,
            bow: 1.0,
            staff: 1.0,
            unarmed: 1.0,
        }
    }
}

/// The player character
///
/// The equipped weapon is its own clone rather than a reference into
/// the inventory, so selling or discarding the inventory copy never
/// leaves it dangling.
#[derive(Debug, Clone)]
pub struct Character {
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub mana: u32,
    pub max_mana: u32,
    pub dust: u32,
    pub attributes: Attributes,
    pub proficiencies: Proficiencies,
    pub inventory: Inventory,
    pub equipped: Option<Item>,
    pub workshop: Workshop,
}

impl Character {
    /// Creates a character with the configured starting kit
    ///
    /// Fails if the config names an item the catalog doesn't have.
    pub fn new(
        name: impl Into<String>,
        config: &GameConfig,
        registry: &ItemRegistry,
    ) -> Result<Self, GameError> {
        let mut inventory = Inventory::new();

        let weapon = registry.weapons().generate(&config.starting_weapon)?;
        inventory.add_item(weapon.clone());

        for starting in &config.starting_items {
            let item = registry.find(&starting.name)?;
            if inventory.room_for(&item) < starting.quantity {
                return Err(GameError::StackFull(starting.name.clone()));
            }
            inventory.add_items(std::iter::repeat_n(item, usize::from(starting.quantity)));
        }

        Ok(Character {
            name: name.into(),
            health: config.max_health,
            max_health: config.max_health,
            mana: config.max_mana,
            max_mana: config.max_mana,
            dust: config.starting_dust,
            attributes: Attributes::default(),
            proficiencies: Proficiencies::default(),
            inventory,
            equipped: Some(weapon),
            workshop: Workshop::new(),
        })
    }

    /// Stats of the equipped weapon, if any
    pub fn weapon_stats(&self) -> Option<&WeaponStats> {
        self.equipped.as_ref().and_then(Item::as_weapon)
    }

    /// Deducts dust, or fails without touching the purse
    pub fn spend_dust(&mut self, amount: u32) -> Result<(), GameError> {
        if amount > self.dust {
            return Err(GameError::InsufficientDust {
                needed: amount,
                available: self.dust,
            });
        }

        self.dust -= amount;
        Ok(())
    }

    pub fn earn_dust(&mut self, amount: u32) {
        self.dust = self.dust.saturating_add(amount);
    }

    /// Restores health and mana (capped at the maxima)
    ///
    /// Returns how much of each was actually gained. Vitals already over
    /// their maxima are capped first, which counts as no gain.
    pub fn restore(&mut self, health: u32, mana: u32) -> (u32, u32) {
        self.clamp_vitals();
        let (old_health, old_mana) = (self.health, self.mana);

        self.health = self.health.saturating_add(health);
        self.mana = self.mana.saturating_add(mana);
        self.clamp_vitals();

        (self.health - old_health, self.mana - old_mana)
    }

    /// Caps current health and mana at their maxima
    pub fn clamp_vitals(&mut self) {
        self.health = self.health.min(self.max_health);
        self.mana = self.mana.min(self.max_mana);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StartingItem;

    fn registry() -> ItemRegistry {
        ItemRegistry::create_default().unwrap()
    }

    #[test]
    fn test_new_character_starting_kit() {
        let registry = registry();
        let character = Character::new("Ash", &GameConfig::default(), &registry).unwrap();

        assert_eq!(character.dust, 15);
        assert_eq!(character.health, 100);
        assert_eq!(character.equipped.as_ref().unwrap().name(), "Stick");
        assert_eq!(character.weapon_stats().unwrap().damage, 1);

        let inventory = character.inventory.get_all();
        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory[0].item().name(), "Stick");
        assert_eq!(inventory[1].item().name(), "Normal Health Potion");
        assert_eq!(inventory[1].stack(), 2);
    }

    #[test]
    fn test_unknown_starting_item_fails() {
        let registry = registry();
        let config = GameConfig {
            starting_items: vec![StartingItem {
                name: "Elixir of Nothing".to_string(),
                quantity: 1,
            }],
            ..GameConfig::default()
        };

        let err = Character::new("Ash", &config, &registry).unwrap_err();
        assert!(matches!(err, GameError::Catalog(_)));
    }

    #[test]
    fn test_starting_items_must_fit_their_stack() {
        let registry = registry();
        let potion = |quantity| StartingItem {
            name: "Normal Health Potion".to_string(),
            quantity,
        };
        let config = GameConfig {
            starting_items: vec![potion(u16::MAX), potion(1)],
            ..GameConfig::default()
        };

        assert_eq!(
            Character::new("Ash", &config, &registry).unwrap_err(),
            GameError::StackFull("Normal Health Potion".to_string())
        );
    }

    #[test]
    fn test_starting_weapon_must_be_a_weapon() {
        let registry = registry();
        let config = GameConfig {
            starting_weapon: "Full Restore".to_string(),
            ..GameConfig::default()
        };

        assert!(Character::new("Ash", &config, &registry).is_err());
    }

    #[test]
    fn test_spend_dust() {
        let registry = registry();
        let mut character = Character::new("Ash", &GameConfig::default(), &registry).unwrap();

        assert_eq!(
            character.spend_dust(20),
            Err(GameError::InsufficientDust {
                needed: 20,
                available: 15,
            })
        );
        assert_eq!(character.dust, 15);

        character.spend_dust(15).unwrap();
        assert_eq!(character.dust, 0);
    }

    #[test]
    fn test_restore_caps_at_max() {
        let registry = registry();
        let mut character = Character::new("Ash", &GameConfig::default(), &registry).unwrap();
        character.health = 90;
        character.mana = 10;

        let gained = character.restore(25, 15);

        assert_eq!(gained, (10, 15));
        assert_eq!(character.health, 100);
        assert_eq!(character.mana, 25);
    }

    #[test]
    fn test_restore_when_over_max() {
        let registry = registry();
        let mut character = Character::new("Ash", &GameConfig::default(), &registry).unwrap();
        character.max_health = 80;
        character.max_mana = 20;

        assert_eq!(character.restore(0, 0), (0, 0));
        assert_eq!(character.health, 80);
        assert_eq!(character.mana, 20);

        assert_eq!(character.restore(10, 10), (0, 0));
        assert_eq!(character.health, 80);
    }
}
