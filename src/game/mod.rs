// Game module - gameplay built on top of the item and inventory core
//
// This module contains:
// - character.rs: the player character and its starting kit
// - menus.rs: equip/consume/discard helpers behind the inventory menus
// - shop.rs: black-market stalls, buying and selling
// - workshop.rs: body mods and augments paid for with dust
// - error.rs: gameplay errors

pub mod character;
pub mod error;
pub mod menus;
pub mod shop;
pub mod workshop;

// Re-export types for convenience
pub use character::{Attributes, Character, Proficiencies};
pub use error::GameError;
pub use shop::Shop;
pub use workshop::{Augment, BodyMod, Workshop};
