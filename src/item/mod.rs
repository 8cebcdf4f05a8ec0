// Item system module
//
// This module provides the core item system for Bones, including:
// - Item definitions (shared header + weapon/consumable payloads)
// - Item tables that own the canonical definitions
// - Catalog errors for lookups and registration

pub mod definition;
pub mod error;
pub mod properties;
pub mod registry;

// Re-export main types for convenient access
pub use definition::{Category, Item, ItemId};
pub use error::CatalogError;
pub use properties::{ConsumableStats, ItemKind, WeaponStats};
pub use registry::{
    CatalogDefinition, ConsumableDefinition, ItemRegistry, ItemTable, RegistryBuilder,
    WeaponDefinition,
};
