//! Bones: item catalog, inventory and the home-base menus of a text RPG

pub mod config;
pub mod console;
pub mod game;
pub mod inventory;
pub mod item;
