//! Equip and consumable menus
//!
//! Menus show a filtered list (only weapons, only consumables) and the
//! player picks from it by position. These helpers translate that
//! position back to an inventory index before touching the inventory.

use crate::inventory::Inventory;
use crate::item::Category;
use super::character::Character;
use super::error::GameError;

/// Result of drinking a consumable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restored {
    pub name: String,
    pub health: u32,
    pub mana: u32,
}

/// Inventory indices of weapon slots, in inventory order
pub fn weapon_choices(inventory: &Inventory) -> Vec<usize> {
    inventory
        .iter_category(Category::Weapon)
        .map(|(index, _)| index)
        .collect()
}

/// Inventory indices of consumable slots, in inventory order
pub fn consumable_choices(inventory: &Inventory) -> Vec<usize> {
    inventory
        .iter_category(Category::Consumable)
        .map(|(index, _)| index)
        .collect()
}

fn resolve(choices: &[usize], choice: usize) -> Result<usize, GameError> {
    choices
        .get(choice)
        .copied()
        .ok_or(GameError::InvalidChoice(choice))
}

/// Equips the `choice`-th weapon of the weapon list
pub fn equip(character: &mut Character, choice: usize) -> Result<(), GameError> {
    let index = resolve(&weapon_choices(&character.inventory), choice)?;
    equip_slot(character, index)
}

/// Equips the weapon at inventory `index`
pub fn equip_slot(character: &mut Character, index: usize) -> Result<(), GameError> {
    let item = character
        .inventory
        .inspect_item(index)
        .ok_or(GameError::InvalidChoice(index))?;

    if item.as_weapon().is_none() {
        return Err(GameError::NotAWeapon(item.name().to_string()));
    }

    log::info!("{} equips {}", character.name, item.name());
    character.equipped = Some(item.clone());
    Ok(())
}

/// Uses the `choice`-th consumable of the consumable list
pub fn use_consumable(character: &mut Character, choice: usize) -> Result<Restored, GameError> {
    let index = resolve(&consumable_choices(&character.inventory), choice)?;
    consume_slot(character, index)
}

/// Uses one consumable from inventory `index`
pub fn consume_slot(character: &mut Character, index: usize) -> Result<Restored, GameError> {
    let item = character
        .inventory
        .inspect_item(index)
        .ok_or(GameError::InvalidChoice(index))?;

    let Some(&stats) = item.as_consumable() else {
        return Err(GameError::NotAConsumable(item.name().to_string()));
    };
    let name = item.name().to_string();

    let (health, mana) = character.restore(
        u32::from(stats.health_restore),
        u32::from(stats.mana_restore),
    );
    character.inventory.delete_item(index);

    Ok(Restored { name, health, mana })
}

/// Throws away the whole slot at inventory `index`
pub fn discard(character: &mut Character, index: usize) -> Result<(), GameError> {
    let name = character
        .inventory
        .inspect_item(index)
        .map(|item| item.name().to_string())
        .ok_or(GameError::InvalidChoice(index))?;

    character.inventory.delete_slot(index);
    log::info!("{} discards {}", character.name, name);
    Ok(())
}
