use crate::item::{CatalogError, Category, ItemRegistry};
use super::character::Character;
use super::error::GameError;

/// A line on a shop's price list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub name: String,
    pub price: u16,
    pub category: Category,
}

/// A completed purchase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Purchase {
    pub name: String,
    pub quantity: u16,
    pub total: u32,
}

/// A completed sale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sale {
    pub name: String,
    pub price: u16,
}

/// A black-market stall selling a fixed list of catalog items
#[derive(Debug, Clone)]
pub struct Shop {
    pub name: String,
    pub greeting: String,
    stock: Vec<String>,
}

impl Shop {
    pub fn new(
        name: impl Into<String>,
        greeting: impl Into<String>,
        stock: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Shop {
            name: name.into(),
            greeting: greeting.into(),
            stock: stock.into_iter().map(Into::into).collect(),
        }
    }

    /// The stalls of the underground market
    pub fn black_market() -> Vec<Shop> {
        vec![
            Shop::new(
                "Warrior's Supply",
                "Two Bren'kibs polishing their spears show you around the store.",
                [
                    "Copper Shortsword",
                    "Iron Blade",
                    "Steel Blade",
                    "Obsidian Longsword",
                    "Core Lightblade",
                    "The Singularity Blade",
                ],
            ),
            Shop::new(
                "Hunter's Edge",
                "A Kenku behind the counter throws a dagger at you, barely missing. He laughs and lets you look at his wares.",
                [
                    "Wooden Bow",
                    "Reinforced Bow",
                    "Iron Bow",
                    "Tactical Compound Bow",
                    "Meteor Bow",
                    "Star Bow",
                ],
            ),
            Shop::new(
                "The Magic's Gathering",
                "'W-we have D&D sessions on Thursdays...' He hands you a flyer. 'I-I also sell things...'",
                [
                    "Wooden Staff",
                    "Infused Staff",
                    "Cut Wand",
                    "Nuja Wand",
                    "F.I.L.O.",
                    "Staff of Mythos",
                ],
            ),
            Shop::new(
                "Rocket Wrestling",
                "Two skeleton samurai jump down from nowhere, power gloves primed. They smile and show you around.",
                [
                    "Leather Gloves",
                    "Red Rubber Gloves",
                    "Brass Knuckles",
                    "Power Glove",
                    "Torched Wristband",
                    "Hell-Forged Wristband",
                ],
            ),
            Shop::new(
                "Mike's Friendly Store",
                "'Welcome to the store. SIR.'",
                [
                    "Normal Health Potion",
                    "Greater Health Potion",
                    "Super Health Potion",
                    "Full Health Potion",
                    "Normal Mana Potion",
                    "Greater Mana Potion",
                    "Super Mana Potion",
                    "Full Mana Potion",
                ],
            ),
        ]
    }

    pub fn stock(&self) -> &[String] {
        &self.stock
    }

    /// Price list in stock order
    ///
    /// Fails if the shop stocks something the catalog doesn't know.
    pub fn listings(&self, registry: &ItemRegistry) -> Result<Vec<Listing>, CatalogError> {
        self.stock
            .iter()
            .map(|name| -> Result<Listing, CatalogError> {
                let item = registry.find(name)?;
                Ok(Listing {
                    name: item.name().to_string(),
                    price: item.buy_price(),
                    category: item.category(),
                })
            })
            .collect()
    }

    /// Buys `quantity` of the `choice`-th stock entry
    ///
    /// Dust is only taken once the whole order is affordable and fits on
    /// the item's stack; the items are then added one at a time so they
    /// stack normally.
    pub fn buy(
        &self,
        character: &mut Character,
        registry: &ItemRegistry,
        choice: usize,
        quantity: u16,
    ) -> Result<Purchase, GameError> {
        let name = self.stock.get(choice).ok_or(GameError::InvalidChoice(choice))?;
        if quantity == 0 {
            return Err(GameError::InvalidChoice(0));
        }

        let item = registry.find(name)?;
        if character.inventory.room_for(&item) < quantity {
            return Err(GameError::StackFull(name.clone()));
        }

        let total = u32::from(item.buy_price())
            .checked_mul(u32::from(quantity))
            .ok_or(GameError::PriceOverflow)?;

        character.spend_dust(total)?;
        character
            .inventory
            .add_items(std::iter::repeat_n(item, usize::from(quantity)));

        log::info!(
            "{} buys {} x{} for {} dust at {}",
            character.name,
            name,
            quantity,
            total,
            self.name
        );
        Ok(Purchase {
            name: name.clone(),
            quantity,
            total,
        })
    }
}

/// Sells one item from inventory `index` for its sell price
pub fn sell(character: &mut Character, index: usize) -> Result<Sale, GameError> {
    let item = character
        .inventory
        .take_item(index)
        .ok_or(GameError::InvalidChoice(index))?;

    character.earn_dust(u32::from(item.sell_price()));
    log::info!("{} sells {} for {} dust", character.name, item.name(), item.sell_price());

    Ok(Sale {
        name: item.name().to_string(),
        price: item.sell_price(),
    })
}
