//! Workshop body modifications
//!
//! One-time body mods raise a weapon proficiency and can each be made
//! once. Augments raise an attribute and can be built repeatedly, but
//! each build doubles that augment's price.

use std::fmt;

use super::character::Character;
use super::error::GameError;

pub const BODY_MOD_COST: u32 = 50;
pub const PROFICIENCY_BONUS: f32 = 0.25;
pub const AUGMENT_BASE_PRICE: u32 = 15;
pub const AUGMENT_BONUS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyMod {
    DustGrip,
    DustString,
    CastingSerum,
    KnuckleDust,
}

impl BodyMod {
    pub const ALL: [BodyMod; 4] = [
        BodyMod::DustGrip,
        BodyMod::DustString,
        BodyMod::CastingSerum,
        BodyMod::KnuckleDust,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BodyMod::DustGrip => "Dust Grip",
            BodyMod::DustString => "Dust String",
            BodyMod::CastingSerum => "Casting Serum",
            BodyMod::KnuckleDust => "Knuckle Dust",
        }
    }

    /// Which proficiency the mod improves
    pub fn proficiency(self) -> &'static str {
        match self {
            BodyMod::DustGrip => "Sword",
            BodyMod::DustString => "Bow",
            BodyMod::CastingSerum => "Staff",
            BodyMod::KnuckleDust => "Unarmed",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for BodyMod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Augment {
    RotatingMotor,
    TractionRopes,
    DustBrainAugment,
    DustArmor,
}

impl Augment {
    pub const ALL: [Augment; 4] = [
        Augment::RotatingMotor,
        Augment::TractionRopes,
        Augment::DustBrainAugment,
        Augment::DustArmor,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Augment::RotatingMotor => "Rotating Motor",
            Augment::TractionRopes => "Traction Ropes",
            Augment::DustBrainAugment => "Dust Brain Augment",
            Augment::DustArmor => "Dust Armor",
        }
    }

    /// Which attribute the augment improves
    pub fn attribute(self) -> &'static str {
        match self {
            Augment::RotatingMotor => "Str",
            Augment::TractionRopes => "Spd",
            Augment::DustBrainAugment => "Itl",
            Augment::DustArmor => "Def",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Augment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-character workshop progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workshop {
    crafted: [bool; 4],
    augment_prices: [u32; 4],
}

impl Workshop {
    pub fn new() -> Self {
        Workshop {
            crafted: [false; 4],
            augment_prices: [AUGMENT_BASE_PRICE; 4],
        }
    }

    pub fn is_crafted(&self, body_mod: BodyMod) -> bool {
        self.crafted[body_mod.index()]
    }

    /// Current price of the next build of `augment`
    pub fn price_of(&self, augment: Augment) -> u32 {
        self.augment_prices[augment.index()]
    }
}

impl Default for Workshop {
    fn default() -> Self {
        Self::new()
    }
}

/// Crafts a one-time body mod
pub fn craft_mod(character: &mut Character, body_mod: BodyMod) -> Result<(), GameError> {
    if character.workshop.is_crafted(body_mod) {
        return Err(GameError::AlreadyCrafted(body_mod.name().to_string()));
    }

    character.spend_dust(BODY_MOD_COST)?;
    character.workshop.crafted[body_mod.index()] = true;

    let proficiency = match body_mod {
        BodyMod::DustGrip => &mut character.proficiencies.sword,
        BodyMod::DustString => &mut character.proficiencies.bow,
        BodyMod::CastingSerum => &mut character.proficiencies.staff,
        BodyMod::KnuckleDust => &mut character.proficiencies.unarmed,
    };
    *proficiency += PROFICIENCY_BONUS;

    log::info!("{} crafts {}", character.name, body_mod);
    Ok(())
}

/// Builds a repeatable augment; its next build costs twice as much
pub fn build_augment(character: &mut Character, augment: Augment) -> Result<(), GameError> {
    let price = character.workshop.price_of(augment);
    character.spend_dust(price)?;
    character.workshop.augment_prices[augment.index()] = price.saturating_mul(2);

    let attribute = match augment {
        Augment::RotatingMotor => &mut character.attributes.strength,
        Augment::TractionRopes => &mut character.attributes.speed,
        Augment::DustBrainAugment => &mut character.attributes.intelligence,
        Augment::DustArmor => &mut character.attributes.defense,
    };
    *attribute = attribute.saturating_add(AUGMENT_BONUS);

    log::info!("{} builds {} for {} dust", character.name, augment, price);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::item::ItemRegistry;

    fn character_with_dust(dust: u32) -> Character {
        let registry = ItemRegistry::create_default().unwrap();
        let mut character = Character::new("Ash", &GameConfig::default(), &registry).unwrap();
        character.dust = dust;
        character
    }

    #[test]
    fn test_craft_mod_once() {
        let mut character = character_with_dust(120);

        craft_mod(&mut character, BodyMod::DustString).unwrap();

        assert_eq!(character.dust, 70);
        assert_eq!(character.proficiencies.bow, 1.25);
        assert_eq!(character.proficiencies.sword, 1.0);
        assert!(character.workshop.is_crafted(BodyMod::DustString));

        assert_eq!(
            craft_mod(&mut character, BodyMod::DustString),
            Err(GameError::AlreadyCrafted("Dust String".to_string()))
        );
        assert_eq!(character.dust, 70);
    }

    #[test]
    fn test_craft_mod_needs_dust() {
        let mut character = character_with_dust(49);

        assert!(matches!(
            craft_mod(&mut character, BodyMod::DustGrip),
            Err(GameError::InsufficientDust { needed: 50, .. })
        ));
        assert!(!character.workshop.is_crafted(BodyMod::DustGrip));
    }

    #[test]
    fn test_augment_price_doubles() {
        let mut character = character_with_dust(100);

        build_augment(&mut character, Augment::DustArmor).unwrap();
        build_augment(&mut character, Augment::DustArmor).unwrap();

        assert_eq!(character.dust, 100 - 15 - 30);
        assert_eq!(character.attributes.defense, 11);
        assert_eq!(character.workshop.price_of(Augment::DustArmor), 60);
        assert_eq!(character.workshop.price_of(Augment::RotatingMotor), 15);
    }

    #[test]
    fn test_augment_price_saturates() {
        let mut character = character_with_dust(u32::MAX);
        character.workshop.augment_prices[Augment::TractionRopes.index()] = u32::MAX / 2 + 1;

        build_augment(&mut character, Augment::TractionRopes).unwrap();

        assert_eq!(character.workshop.price_of(Augment::TractionRopes), u32::MAX);
    }
}
