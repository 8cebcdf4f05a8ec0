use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use super::definition::{Category, Item, ItemId};
use super::error::CatalogError;
use super::properties::{ConsumableStats, WeaponStats};

/// Read-only table of canonical items of one kind
///
/// Entries are looked up by name. [`generate`](ItemTable::generate) always
/// hands back a clone, so nothing a caller does to its copy can reach the
/// canonical definition.
#[derive(Debug, Clone)]
pub struct ItemTable {
    category: Category,
    entries: Vec<Item>,
    by_name: HashMap<String, usize>,
}

impl ItemTable {
    fn new(category: Category) -> Self {
        ItemTable {
            category,
            entries: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    fn insert(&mut self, item: Item) {
        self.by_name.insert(item.name.clone(), self.entries.len());
        self.entries.push(item);
    }

    /// Creates an owned copy of the named entry
    ///
    /// Fails if nothing with that name was registered.
    pub fn generate(&self, name: &str) -> Result<Item, CatalogError> {
        self.get(name).cloned().ok_or_else(|| CatalogError::NotFound {
            category: self.category,
            name: name.to_string(),
        })
    }

    /// Peeks at the canonical entry without copying it
    pub fn get(&self, name: &str) -> Option<&Item> {
        self.by_name.get(name).map(|&index| &self.entries[index])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Entries in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.entries.iter()
    }

    /// Entry names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|item| item.name())
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds the item tables with one shared id counter
///
/// Every registration, whatever its kind, takes the next id, so ids are
/// unique across tables and stable for a fixed registration order.
#[derive(Debug)]
pub struct RegistryBuilder {
    // u32 so the counter can step past u16::MAX and report exhaustion
    next_id: u32,
    weapons: ItemTable,
    consumables: ItemTable,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        RegistryBuilder {
            next_id: 0,
            weapons: ItemTable::new(Category::Weapon),
            consumables: ItemTable::new(Category::Consumable),
        }
    }

    fn claim_id(&mut self, name: &str) -> Result<ItemId, CatalogError> {
        let id = u16::try_from(self.next_id)
            .map_err(|_| CatalogError::IdSpaceExhausted(name.to_string()))?;
        self.next_id += 1;
        Ok(ItemId(id))
    }

    /// Registers a weapon and returns its assigned id
    pub fn register_weapon(
        &mut self,
        name: &str,
        description: &str,
        stats: WeaponStats,
        buy_price: u16,
        sell_price: u16,
    ) -> Result<ItemId, CatalogError> {
        if self.weapons.contains(name) {
            return Err(CatalogError::DuplicateName {
                category: Category::Weapon,
                name: name.to_string(),
            });
        }

        let id = self.claim_id(name)?;
        self.weapons
            .insert(Item::weapon(name, description, id, stats, buy_price, sell_price));
        Ok(id)
    }

    /// Registers a consumable and returns its assigned id
    pub fn register_consumable(
        &mut self,
        name: &str,
        description: &str,
        stats: ConsumableStats,
        buy_price: u16,
        sell_price: u16,
    ) -> Result<ItemId, CatalogError> {
        if self.consumables.contains(name) {
            return Err(CatalogError::DuplicateName {
                category: Category::Consumable,
                name: name.to_string(),
            });
        }

        let id = self.claim_id(name)?;
        self.consumables
            .insert(Item::consumable(name, description, id, stats, buy_price, sell_price));
        Ok(id)
    }

    /// Freezes the tables
    pub fn build(self) -> ItemRegistry {
        log::debug!(
            "Item registry built: {} weapons, {} consumables, {} ids assigned",
            self.weapons.len(),
            self.consumables.len(),
            self.next_id
        );

        ItemRegistry {
            weapons: self.weapons,
            consumables: self.consumables,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Central registry of all item definitions
///
/// This is the single source of truth for what items exist in the game.
/// It is immutable once built and can be shared freely.
#[derive(Debug, Clone)]
pub struct ItemRegistry {
    weapons: ItemTable,
    consumables: ItemTable,
}

impl ItemRegistry {
    /// Creates a registry with all built-in game items
    pub fn create_default() -> Result<Self, CatalogError> {
        Self::from_definition(&CatalogDefinition::builtin())
    }

    /// Builds a registry from a catalog definition
    ///
    /// Weapons are registered first, then consumables, each in list order.
    pub fn from_definition(definition: &CatalogDefinition) -> Result<Self, CatalogError> {
        let mut builder = RegistryBuilder::new();

        for weapon in &definition.weapons {
            builder.register_weapon(
                &weapon.name,
                &weapon.description,
                WeaponStats::new(
                    weapon.damage,
                    weapon.critical_chance,
                    weapon.spell_damage,
                    weapon.accuracy,
                ),
                weapon.buy_price,
                weapon.sell_price,
            )?;
        }

        for consumable in &definition.consumables {
            builder.register_consumable(
                &consumable.name,
                &consumable.description,
                ConsumableStats::new(consumable.health_restore, consumable.mana_restore),
                consumable.buy_price,
                consumable.sell_price,
            )?;
        }

        Ok(builder.build())
    }

    /// Loads a catalog definition from a JSON file and builds the registry
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| CatalogError::Definition(format!("{}: {}", path.display(), e)))?;
        let definition: CatalogDefinition = serde_json::from_str(&json)
            .map_err(|e| CatalogError::Definition(format!("{}: {}", path.display(), e)))?;

        Self::from_definition(&definition)
    }

    pub fn weapons(&self) -> &ItemTable {
        &self.weapons
    }

    pub fn consumables(&self) -> &ItemTable {
        &self.consumables
    }

    /// Returns the table holding items of this category, if there is one
    pub fn table(&self, category: Category) -> Option<&ItemTable> {
        match category {
            Category::Weapon => Some(&self.weapons),
            Category::Consumable => Some(&self.consumables),
            Category::Key | Category::Misc => None,
        }
    }

    /// Peeks at an entry of any kind (weapons are searched first)
    pub fn get(&self, name: &str) -> Option<&Item> {
        self.weapons.get(name).or_else(|| self.consumables.get(name))
    }

    /// Generates an item of any kind by name
    pub fn find(&self, name: &str) -> Result<Item, CatalogError> {
        self.get(name)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownItem(name.to_string()))
    }

    /// Reverse lookup from id to catalog name
    pub fn name_of(&self, id: ItemId) -> Option<&str> {
        self.weapons
            .iter()
            .chain(self.consumables.iter())
            .find(|item| item.id() == id)
            .map(|item| item.name())
    }

    /// Total number of registered items
    pub fn len(&self) -> usize {
        self.weapons.len() + self.consumables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// On-disk form of the catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDefinition {
    #[serde(default)]
    pub weapons: Vec<WeaponDefinition>,
    #[serde(default)]
    pub consumables: Vec<ConsumableDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub damage: u16,
    #[serde(default)]
    pub critical_chance: u16,
    #[serde(default)]
    pub spell_damage: u16,
    #[serde(default)]
    pub accuracy: u16,
    #[serde(default)]
    pub buy_price: u16,
    #[serde(default)]
    pub sell_price: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumableDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub health_restore: u16,
    #[serde(default)]
    pub mana_restore: u16,
    #[serde(default)]
    pub buy_price: u16,
    #[serde(default)]
    pub sell_price: u16,
}

// ======================================================================
// Built-in Items
// ======================================================================

/// (name, description, damage, crit, spell damage, accuracy, buy, sell)
type WeaponRow = (&'static str, &'static str, u16, u16, u16, u16, u16, u16);

/// (name, description, health, mana, buy, sell)
type ConsumableRow = (&'static str, &'static str, u16, u16, u16, u16);

const BUILTIN_WEAPONS: &[WeaponRow] = &[
    ("Stick", "Useless, cannot gain any proficiency bonuses.", 1, 0, 1, 100, 0, 0),
    ("Modal Soul", "Wait!", 9999, 100, 9999, 100, 9999, 9999),
    // Bows
    ("Wooden Bow", "A starter weapon for most hunters in training.", 3, 5, 0, 50, 10, 7),
    ("Reinforced Bow", "A more unique and composed wooden bow.", 7, 10, 0, 60, 30, 20),
    (
        "Iron Bow",
        "Forged in some unholy Audi'je's home, this bow is made from regurgitated iron.",
        15,
        15,
        0,
        70,
        60,
        50,
    ),
    (
        "Tactical Compound Bow",
        "A bow with a 16x optical scope, strap, and a better string.",
        35,
        20,
        0,
        100,
        100,
        80,
    ),
    (
        "Meteor Bow",
        "Forged from a passing meteor, nicknamed MB-132. Incredibly Rare",
        50,
        25,
        0,
        75,
        250,
        200,
    ),
    (
        "Star Bow",
        "This bow has an unkown origin, it's only main feature is the distinct glow the arrows make when fired. The bow seems to possess a special power... The power of light.",
        100,
        50,
        0,
        75,
        1000,
        750,
    ),
    // Blades
    (
        "Copper Shortsword",
        "A flimsy blade, made from the cheapest material on the planet.",
        5,
        1,
        0,
        90,
        15,
        10,
    ),
    ("Iron Blade", "A less flimsy blade, made from less-cheap materials.", 9, 2, 0, 90, 30, 20),
    (
        "Steel Blade",
        "A blade made out of a semi-usable material. Not the best, or worst.",
        20,
        3,
        0,
        95,
        75,
        50,
    ),
    (
        "Obsidian Longsword",
        "A dangerous weapon, a major step-up from the previous blades.",
        50,
        4,
        0,
        80,
        150,
        100,
    ),
    (
        "Core Lightblade",
        "The sword forged inside the planet's core. Has a obsidian blade with magma flowing around it.",
        100,
        4,
        0,
        95,
        500,
        400,
    ),
    (
        "The Singularity Blade",
        "Cuts with astronomical force, created from a god of the past. The blade is complicated and overdone in features, filling a part of the blade with a moral of rebirth.",
        200,
        3,
        0,
        95,
        1500,
        1250,
    ),
    // Staves and wands
    (
        "Wooden Staff",
        "A wooden stick with some message in an unknown language cut in on the side.",
        1,
        0,
        15,
        100,
        5,
        3,
    ),
    (
        "Infused Staff",
        "Covered in markings and scratches, it seems to emanate power.",
        2,
        1,
        25,
        100,
        10,
        5,
    ),
    (
        "Cut Wand",
        "A small wand, it can be aimed to cast certain, more powerful spells.",
        2,
        1,
        55,
        100,
        50,
        25,
    ),
    (
        "Nuja Wand",
        "A wand passed down through the ages. Holds a rhythmic power.",
        4,
        1,
        120,
        100,
        100,
        75,
    ),
    (
        "F.I.L.O.",
        "F.I.L.O is a staff made as a tribute to a human who died in an accident. Just you holding it brings back depressed memories.",
        5,
        1,
        200,
        100,
        150,
        100,
    ),
    (
        "Staff of Mythos",
        "This staff holds the power from the great eldritch monsters. It was found by a human when he destroyed the eldritch beings on his planet. Holds the souls of all the eldritch monsters.",
        10,
        1,
        350,
        100,
        1000,
        750,
    ),
    // Gloves and wristbands
    (
        "Leather Gloves",
        "Torn up, burnt, and dipped in acid. These leather gloves are well-worn.",
        7,
        0,
        0,
        99,
        5,
        3,
    ),
    ("Red Rubber Gloves", "Somebody used these one time.", 15, 0, 0, 99, 30, 20),
    (
        "Brass Knuckles",
        "Packs a punch, and a pierce. The brass knuckles are light and powerful.",
        40,
        0,
        0,
        99,
        60,
        50,
    ),
    (
        "Power Glove",
        "Confused with the techinical masterpiece often. The powerglove explodes on impact.",
        75,
        0,
        0,
        99,
        150,
        125,
    ),
    (
        "Torched Wristband",
        "Although not connected to the fists, the Torched Wristband infuses the hand with strong power, also producing an explosion in the process.",
        150,
        0,
        0,
        99,
        750,
        500,
    ),
    (
        "Hell-Forged Wristband",
        "Infuses the user with a large amount of strength so powerful, it could destroy a building in one hit. The Hell-Forged wristband was used by a head executioner to keep control of his troops.",
        300,
        0,
        0,
        99,
        1750,
        1400,
    ),
];

const BUILTIN_CONSUMABLES: &[ConsumableRow] = &[
    ("Test Consumable", "For testing.", 20, 8, 10, 5),
    ("Normal Health Potion", "Heals 25 HP", 25, 0, 15, 3),
    ("Greater Health Potion", "Heals 100 HP", 100, 0, 45, 20),
    ("Super Health Potion", "Heals 500 HP", 500, 0, 100, 50),
    ("Full Health Potion", "Heals 9999 HP", 9999, 0, 300, 150),
    ("Normal Mana Potion", "Restores 15 MP", 0, 15, 10, 5),
    ("Greater Mana Potion", "Restores 45 MP", 0, 45, 45, 20),
    ("Super Mana Potion", "Restores 100 MP", 0, 100, 100, 50),
    ("Full Mana Potion", "Restores 9999 MP", 0, 9999, 300, 150),
    ("Full Restore", "Restores 9999 MP and 9999 HP", 9999, 9999, 500, 250),
];

impl CatalogDefinition {
    /// The items that ship with the game
    pub fn builtin() -> Self {
        let weapons = BUILTIN_WEAPONS
            .iter()
            .map(|&(name, description, damage, crit, spell, accuracy, buy, sell)| {
                WeaponDefinition {
                    name: name.to_string(),
                    description: description.to_string(),
                    damage,
                    critical_chance: crit,
                    spell_damage: spell,
                    accuracy,
                    buy_price: buy,
                    sell_price: sell,
                }
            })
            .collect();

        let consumables = BUILTIN_CONSUMABLES
            .iter()
            .map(|&(name, description, health, mana, buy, sell)| ConsumableDefinition {
                name: name.to_string(),
                description: description.to_string(),
                health_restore: health,
                mana_restore: mana,
                buy_price: buy,
                sell_price: sell,
            })
            .collect();

        CatalogDefinition {
            weapons,
            consumables,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io::Write;

    fn registry() -> ItemRegistry {
        ItemRegistry::create_default().unwrap()
    }

    #[test]
    fn test_builtin_ids_are_fixed() {
        let registry = registry();

        assert_eq!(registry.weapons().get("Stick").unwrap().id(), ItemId(0));
        assert_eq!(registry.weapons().get("Modal Soul").unwrap().id(), ItemId(1));
        assert_eq!(registry.weapons().get("Copper Shortsword").unwrap().id(), ItemId(8));
        assert_eq!(registry.weapons().get("Hell-Forged Wristband").unwrap().id(), ItemId(25));
        assert_eq!(registry.consumables().get("Test Consumable").unwrap().id(), ItemId(26));
        assert_eq!(registry.consumables().get("Normal Health Potion").unwrap().id(), ItemId(27));
        assert_eq!(registry.consumables().get("Full Restore").unwrap().id(), ItemId(35));
    }

    #[test]
    fn test_ids_unique_across_tables() {
        let registry = registry();
        let ids: HashSet<ItemId> = registry
            .weapons()
            .iter()
            .chain(registry.consumables().iter())
            .map(|item| item.id())
            .collect();

        assert_eq!(ids.len(), registry.len());
        assert_eq!(registry.len(), 36);
    }

    #[test]
    fn test_stick_definition() {
        let stick = registry().weapons().generate("Stick").unwrap();
        let stats = stick.as_weapon().unwrap();

        assert_eq!(stick.buy_price(), 0);
        assert_eq!(stick.sell_price(), 0);
        assert_eq!(stats.damage, 1);
        assert_eq!(stats.critical_chance, 0);
        assert_eq!(stats.spell_damage, 1);
        assert_eq!(stats.accuracy, 100);
    }

    #[test]
    fn test_builtin_descriptions() {
        let registry = registry();

        assert_eq!(
            registry.weapons().get("Staff of Mythos").unwrap().description(),
            "This staff holds the power from the great eldritch monsters. \
             It was found by a human when he destroyed the eldritch beings on his planet. \
             Holds the souls of all the eldritch monsters."
        );
        assert_eq!(
            registry.weapons().get("Power Glove").unwrap().description(),
            "Confused with the techinical masterpiece often. The powerglove explodes on impact."
        );
        assert!(
            registry
                .weapons()
                .iter()
                .all(|item| !item.description().contains('\n'))
        );
    }

    #[test]
    fn test_generate_unknown_name_fails() {
        let registry = registry();
        let err = registry.weapons().generate("Excalibur").unwrap_err();

        assert_eq!(
            err,
            CatalogError::NotFound {
                category: Category::Weapon,
                name: "Excalibur".to_string(),
            }
        );

        // Consumables live in their own table
        assert!(registry.weapons().generate("Normal Health Potion").is_err());
    }

    #[test]
    fn test_generate_returns_independent_copies() {
        let registry = registry();
        let mut first = registry.weapons().generate("Stick").unwrap();
        let second = registry.weapons().generate("Stick").unwrap();

        first.name = "Bent Stick".to_string();
        first.buy_price = 500;

        assert_eq!(second.name(), "Stick");
        assert_eq!(second.buy_price(), 0);
        assert_eq!(registry.weapons().get("Stick").unwrap().name(), "Stick");
        assert_eq!(registry.weapons().get("Stick").unwrap().buy_price(), 0);
    }

    #[test]
    fn test_builder_shares_counter_between_tables() {
        let mut builder = RegistryBuilder::new();
        let a = builder
            .register_consumable("Tonic", "", ConsumableStats::new(5, 0), 1, 1)
            .unwrap();
        let b = builder
            .register_weapon("Club", "", WeaponStats::new(2, 0, 0, 90), 3, 1)
            .unwrap();
        let c = builder
            .register_consumable("Ether", "", ConsumableStats::new(0, 5), 1, 1)
            .unwrap();

        assert_eq!((a, b, c), (ItemId(0), ItemId(1), ItemId(2)));

        let registry = builder.build();
        assert_eq!(registry.name_of(ItemId(1)), Some("Club"));
        assert_eq!(registry.name_of(ItemId(9)), None);
    }

    #[test]
    fn test_independent_builders_dont_interfere() {
        let mut left = RegistryBuilder::new();
        let mut right = RegistryBuilder::new();

        left.register_weapon("Club", "", WeaponStats::default(), 0, 0).unwrap();
        let id = right.register_weapon("Spear", "", WeaponStats::default(), 0, 0).unwrap();

        assert_eq!(id, ItemId(0));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut builder = RegistryBuilder::new();
        builder.register_weapon("Club", "", WeaponStats::default(), 0, 0).unwrap();

        let err = builder
            .register_weapon("Club", "again", WeaponStats::default(), 0, 0)
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName { .. }));

        // Same name in the other table is a different entry
        assert!(builder
            .register_consumable("Club", "", ConsumableStats::default(), 0, 0)
            .is_ok());
    }

    #[test]
    fn test_id_space_exhaustion() {
        let mut builder = RegistryBuilder::new();
        builder.next_id = u16::MAX as u32;

        let last = builder
            .register_weapon("Last", "", WeaponStats::default(), 0, 0)
            .unwrap();
        assert_eq!(last, ItemId(u16::MAX));

        let err = builder
            .register_weapon("One Too Many", "", WeaponStats::default(), 0, 0)
            .unwrap_err();
        assert_eq!(err, CatalogError::IdSpaceExhausted("One Too Many".to_string()));
    }

    #[test]
    fn test_find_searches_both_tables() {
        let registry = registry();

        assert_eq!(registry.find("Iron Bow").unwrap().category(), Category::Weapon);
        assert_eq!(
            registry.find("Full Restore").unwrap().category(),
            Category::Consumable
        );
        let err = registry.find("Dust").unwrap_err();
        assert_eq!(err, CatalogError::UnknownItem("Dust".to_string()));
        assert_eq!(err.to_string(), "no item named 'Dust' in the catalog");
        assert!(registry.table(Category::Key).is_none());
    }

    #[test]
    fn test_names_in_registration_order() {
        let registry = registry();
        let names: Vec<&str> = registry.consumables().names().take(3).collect();

        assert_eq!(
            names,
            vec!["Test Consumable", "Normal Health Potion", "Greater Health Potion"]
        );
    }

    #[test]
    fn test_load_from_file() {
        let json = r#"{
            "weapons": [
                {
                    "name": "Rusty Dagger",
                    "damage": 4,
                    "accuracy": 85,
                    "buy_price": 12,
                    "sell_price": 6
                }
            ],
            "consumables": [
                { "name": "Bread", "description": "Stale.", "health_restore": 10 }
            ]
        }"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let registry = ItemRegistry::load_from_file(file.path()).unwrap();
        let dagger = registry.weapons().generate("Rusty Dagger").unwrap();
        let bread = registry.consumables().generate("Bread").unwrap();

        assert_eq!(dagger.id(), ItemId(0));
        assert_eq!(dagger.as_weapon().unwrap().accuracy, 85);
        assert_eq!(bread.id(), ItemId(1));
        assert_eq!(bread.as_consumable().unwrap().health_restore, 10);
        assert_eq!(bread.description(), "Stale.");
    }

    #[test]
    fn test_load_from_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ weapons: nope").unwrap();

        let err = ItemRegistry::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Definition(_)));
    }
}
