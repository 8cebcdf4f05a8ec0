//! Console front end
//!
//! Every screen prints a numbered menu and reads one number per line.
//! Anything that isn't a listed number prints "Invalid choice." and
//! shows the menu again; end of input ends the session.

use std::io::{self, BufRead, Write};

use crate::game::menus::{self, consumable_choices, weapon_choices};
use crate::game::shop::{self, Shop};
use crate::game::workshop::{self, Augment, BodyMod};
use crate::game::{Character, GameError};
use crate::item::ItemRegistry;

/// One line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Number(usize),
    Invalid,
    Closed,
}

/// Asks for the character's name
///
/// Falls back to "Wanderer" on an empty line or closed input.
pub fn ask_name<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<String> {
    writeln!(output, "What is your name?")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let name = line.trim();

    Ok(if name.is_empty() {
        "Wanderer".to_string()
    } else {
        name.to_string()
    })
}

pub struct Console<'a, R, W> {
    registry: &'a ItemRegistry,
    shops: Vec<Shop>,
    character: Character,
    input: R,
    output: W,
    closed: bool,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(registry: &'a ItemRegistry, character: Character, input: R, output: W) -> Self {
        Console {
            registry,
            shops: Shop::black_market(),
            character,
            input,
            output,
            closed: false,
        }
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    /// Consumes the console, returning the final character state
    pub fn into_character(self) -> Character {
        self.character
    }

    /// Runs the home menu until the player quits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        while !self.closed {
            writeln!(self.output, "\n-*- Home -*-")?;
            writeln!(self.output, "1) Inventory\n2) Black Market\n3) Sell\n4) Workshop\n0) Quit")?;
            writeln!(
                self.output,
                "\n-*- Quick Stats -*-\nHP: {}/{}        MP: {}/{}\nDust: {}",
                self.character.health,
                self.character.max_health,
                self.character.mana,
                self.character.max_mana,
                self.character.dust
            )?;

            match self.read_input()? {
                Input::Number(0) | Input::Closed => break,
                Input::Number(1) => self.inventory_menu()?,
                Input::Number(2) => self.black_market()?,
                Input::Number(3) => self.sell_menu()?,
                Input::Number(4) => self.workshop_menu()?,
                _ => self.invalid()?,
            }
        }

        writeln!(self.output, "Farewell, {}.", self.character.name)?;
        self.output.flush()
    }

    fn read_input(&mut self) -> io::Result<Input> {
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.closed = true;
            return Ok(Input::Closed);
        }

        Ok(match line.trim().parse::<usize>() {
            Ok(number) => Input::Number(number),
            Err(_) => Input::Invalid,
        })
    }

    fn invalid(&mut self) -> io::Result<()> {
        writeln!(self.output, "Invalid choice.")
    }

    /// Prints the outcome of a failed action
    fn report(&mut self, error: &GameError) -> io::Result<()> {
        match error {
            GameError::InsufficientDust { .. } => {
                writeln!(self.output, "You do not have enough dust.")
            }
            GameError::AlreadyCrafted(_) => writeln!(self.output, "You already created that."),
            GameError::StackFull(_) => writeln!(self.output, "You can't carry that many."),
            GameError::InvalidChoice(_) => self.invalid(),
            other => {
                log::warn!("Action failed: {}", other);
                writeln!(self.output, "That didn't work: {}", other)
            }
        }
    }

    // ======================================================================
    // Inventory
    // ======================================================================

    fn inventory_menu(&mut self) -> io::Result<()> {
        loop {
            let c = &self.character;
            writeln!(self.output, "\n-*- Stats -*-\n\nName: {}", c.name)?;
            writeln!(
                self.output,
                "Max Health: {}\nMax Mana: {}\nCurrent HP: {}\nCurrent MP: {}",
                c.max_health, c.max_mana, c.health, c.mana
            )?;
            writeln!(
                self.output,
                "\nStrength: {}\nDefense: {}\nIntelligence: {}\nSpeed: {}",
                c.attributes.strength,
                c.attributes.defense,
                c.attributes.intelligence,
                c.attributes.speed
            )?;
            writeln!(self.output, "\n0) Exit\n1) Weapons\n2) Consumables")?;

            match self.read_input()? {
                Input::Number(0) | Input::Closed => return Ok(()),
                Input::Number(1) => self.weapon_menu()?,
                Input::Number(2) => self.consumable_menu()?,
                _ => self.invalid()?,
            }
        }
    }

    fn weapon_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n-*- Weapons -*-")?;
        match &self.character.equipped {
            Some(weapon) => {
                writeln!(
                    self.output,
                    "Current Weapon: {}\nDescription: {}",
                    weapon.name(),
                    weapon.description()
                )?;
                if let Some(stats) = weapon.as_weapon() {
                    writeln!(
                        self.output,
                        "Damage: {}\nCrit Bonus: {}\nSpell Damage: {}\nAccuracy: {}",
                        stats.damage, stats.critical_chance, stats.spell_damage, stats.accuracy
                    )?;
                }
            }
            None => writeln!(self.output, "Current Weapon: None")?,
        }

        writeln!(self.output, "\n0) Exit")?;
        for (position, index) in weapon_choices(&self.character.inventory).into_iter().enumerate() {
            if let Some(item) = self.character.inventory.inspect_item(index) {
                writeln!(self.output, "{}) {}", position + 1, item.name())?;
            }
        }

        match self.read_input()? {
            Input::Number(0) | Input::Closed => Ok(()),
            Input::Number(choice) => match menus::equip(&mut self.character, choice - 1) {
                Ok(()) => {
                    let name = self
                        .character
                        .equipped
                        .as_ref()
                        .map(|item| item.name().to_string())
                        .unwrap_or_default();
                    writeln!(self.output, "You equip the {}.", name)
                }
                Err(e) => self.report(&e),
            },
            Input::Invalid => self.invalid(),
        }
    }

    fn consumable_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n-*- Consumables -*-\n0) Exit")?;
        for (position, index) in consumable_choices(&self.character.inventory)
            .into_iter()
            .enumerate()
        {
            if let Some(slot) = self.character.inventory.inspect_slot(index) {
                writeln!(
                    self.output,
                    "{}) {} x{}",
                    position + 1,
                    slot.item().name(),
                    slot.stack()
                )?;
            }
        }

        match self.read_input()? {
            Input::Number(0) | Input::Closed => Ok(()),
            Input::Number(choice) => match menus::use_consumable(&mut self.character, choice - 1) {
                Ok(restored) => writeln!(
                    self.output,
                    "You drink the {} and restore {} HP and {} MP!",
                    restored.name, restored.health, restored.mana
                ),
                Err(e) => self.report(&e),
            },
            Input::Invalid => self.invalid(),
        }
    }

    // ======================================================================
    // Black market
    // ======================================================================

    fn black_market(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\nYou look at the shops available.\n")?;
            for (position, shop) in self.shops.iter().enumerate() {
                writeln!(self.output, "{}) {}", position + 1, shop.name)?;
            }
            writeln!(self.output, "0) Exit\n\nDust Available: {}", self.character.dust)?;

            match self.read_input()? {
                Input::Number(0) | Input::Closed => return Ok(()),
                Input::Number(choice) if choice <= self.shops.len() => self.shop_menu(choice - 1)?,
                _ => self.invalid()?,
            }
        }
    }

    fn shop_menu(&mut self, shop_index: usize) -> io::Result<()> {
        let shop = self.shops[shop_index].clone();
        let listings = match shop.listings(self.registry) {
            Ok(listings) => listings,
            Err(e) => return self.report(&GameError::from(e)),
        };

        writeln!(self.output, "\n-*- {} -*-\n{}\n", shop.name, shop.greeting)?;
        for (position, listing) in listings.iter().enumerate() {
            writeln!(self.output, "{}) {} - {} Dust", position + 1, listing.name, listing.price)?;
        }
        writeln!(self.output, "0) Exit")?;

        let choice = match self.read_input()? {
            Input::Number(0) | Input::Closed => return Ok(()),
            Input::Number(choice) if choice <= listings.len() => choice - 1,
            _ => return self.invalid(),
        };

        writeln!(
            self.output,
            "How many would you like to buy? ({} Each)",
            listings[choice].price
        )?;
        let quantity = match self.read_input()? {
            Input::Closed => return Ok(()),
            Input::Number(quantity) => match u16::try_from(quantity) {
                Ok(quantity) => quantity,
                Err(_) => return self.invalid(),
            },
            Input::Invalid => return self.invalid(),
        };

        match shop.buy(&mut self.character, self.registry, choice, quantity) {
            Ok(purchase) => writeln!(
                self.output,
                "You buy {} {} for {} dust.",
                purchase.quantity, purchase.name, purchase.total
            ),
            Err(e) => self.report(&e),
        }
    }

    fn sell_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n-*- Sell -*-\n0) Exit")?;
        for (position, slot) in self.character.inventory.get_all().iter().enumerate() {
            writeln!(
                self.output,
                "{}) {} x{} - {} Dust",
                position + 1,
                slot.item().name(),
                slot.stack(),
                slot.item().sell_price()
            )?;
        }

        match self.read_input()? {
            Input::Number(0) | Input::Closed => Ok(()),
            Input::Number(choice) => match shop::sell(&mut self.character, choice - 1) {
                Ok(sale) => {
                    writeln!(self.output, "You sell the {} for {} dust.", sale.name, sale.price)
                }
                Err(e) => self.report(&e),
            },
            Input::Invalid => self.invalid(),
        }
    }

    // ======================================================================
    // Workshop
    // ======================================================================

    fn workshop_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nYou look at your current blueprints.")?;
        writeln!(self.output, "\n-*- One Time Creations -*-")?;
        for (position, body_mod) in BodyMod::ALL.into_iter().enumerate() {
            if self.character.workshop.is_crafted(body_mod) {
                writeln!(self.output, "{}) {} - CREATED", position + 1, body_mod)?;
            } else {
                writeln!(
                    self.output,
                    "{}) {} - ({} Prof +{}) - {} Dust",
                    position + 1,
                    body_mod,
                    body_mod.proficiency(),
                    workshop::PROFICIENCY_BONUS,
                    workshop::BODY_MOD_COST
                )?;
            }
        }

        writeln!(self.output, "\n-*- Multiple Creations -*-")?;
        let offset = BodyMod::ALL.len();
        for (position, augment) in Augment::ALL.into_iter().enumerate() {
            writeln!(
                self.output,
                "{}) {} - ({} +{}) - {} Dust",
                offset + position + 1,
                augment,
                augment.attribute(),
                workshop::AUGMENT_BONUS,
                self.character.workshop.price_of(augment)
            )?;
        }
        writeln!(self.output, "0) Exit")?;

        let result = match self.read_input()? {
            Input::Number(0) | Input::Closed => return Ok(()),
            Input::Number(choice @ 1..=4) => {
                let body_mod = BodyMod::ALL[choice - 1];
                workshop::craft_mod(&mut self.character, body_mod)
                    .map(|()| format!("You create the {}.", body_mod))
            }
            Input::Number(choice @ 5..=8) => {
                let augment = Augment::ALL[choice - 5];
                workshop::build_augment(&mut self.character, augment)
                    .map(|()| format!("You create the {}.", augment))
            }
            _ => return self.invalid(),
        };

        match result {
            Ok(message) => writeln!(self.output, "{}", message),
            Err(e) => self.report(&e),
        }
    }
}
