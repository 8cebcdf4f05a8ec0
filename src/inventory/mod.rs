// Inventory system module
//
// This module provides inventory management for Bones, including:
// - Item slots (one owned item + stack count)
// - The ordered inventory container with stacking and index-based access

pub mod inventory;
pub mod slot;

// Re-export main types
pub use inventory::Inventory;
pub use slot::ItemSlot;
