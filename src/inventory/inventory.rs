use crate::item::{Category, Item, ItemId};
use super::slot::ItemSlot;

/// Initial slot capacity (typical inventories stay around this size)
const RESERVED_SLOTS: usize = 20;

/// Ordered, growable collection of item slots
///
/// Slots are addressed by their position. Positions shift whenever a
/// slot is removed, so an index is only meaningful until the next
/// mutating call. Every indexed operation is bounds-checked: an index
/// past the end returns `None` or does nothing, since indices usually
/// come straight from menu input.
#[derive(Debug, Clone)]
pub struct Inventory {
    slots: Vec<ItemSlot>,
}

impl Inventory {
    /// Creates an empty inventory
    pub fn new() -> Self {
        Inventory {
            slots: Vec::with_capacity(RESERVED_SLOTS),
        }
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the inventory has no items
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Adds an item to the inventory
    ///
    /// If a slot already holds the same catalog item its stack grows
    /// by one and `item` is dropped; otherwise a new slot is appended.
    /// Returns false if that stack was full and the item was not stored.
    pub fn add_item(&mut self, item: Item) -> bool {
        if let Some(slot) = self
            .slots
            .iter_mut()
            .find(|slot| slot.item().is_same_item(&item))
        {
            if !slot.increment_stack() {
                log::warn!("Stack of {} is full, item not stored", item.name());
                return false;
            }
            log::debug!("Stacked {} (now x{})", item.name(), slot.stack());
            return true;
        }

        log::debug!("New slot {} for {}", self.slots.len(), item.name());
        self.slots.push(ItemSlot::new(item));
        true
    }

    /// Adds each item in order, returning how many were stored
    pub fn add_items(&mut self, items: impl IntoIterator<Item = Item>) -> usize {
        items
            .into_iter()
            .map(|item| self.add_item(item))
            .filter(|&stored| stored)
            .count()
    }

    /// How many more copies of `item` can be stored
    pub fn room_for(&self, item: &Item) -> u16 {
        self.position_of(item.id())
            .and_then(|index| self.slots.get(index))
            .map_or(u16::MAX, ItemSlot::room)
    }

    /// Borrows the item at `index`
    pub fn inspect_item(&self, index: usize) -> Option<&Item> {
        self.slots.get(index).map(ItemSlot::item)
    }

    /// Borrows the slot at `index`
    pub fn inspect_slot(&self, index: usize) -> Option<&ItemSlot> {
        self.slots.get(index)
    }

    /// Removes a single item from the slot at `index`
    ///
    /// The slot is removed once its stack runs out.
    pub fn delete_item(&mut self, index: usize) {
        let Some(slot) = self.slots.get_mut(index) else {
            return;
        };

        slot.decrement_stack();
        if slot.is_empty() {
            self.remove_slot(index);
        }
    }

    /// Removes the whole slot at `index`, regardless of its stack
    pub fn delete_slot(&mut self, index: usize) {
        if index < self.slots.len() {
            self.remove_slot(index);
        }
    }

    /// Takes one item out of the slot at `index`
    ///
    /// The caller gets its own copy. If more remain, the slot stays with
    /// one fewer; if it was the last, the slot is removed.
    pub fn take_item(&mut self, index: usize) -> Option<Item> {
        let slot = self.slots.get_mut(index)?;

        if slot.stack() > 1 {
            slot.decrement_stack();
            Some(slot.item().clone())
        } else {
            Some(self.remove_slot(index).into_item())
        }
    }

    /// All slots in order (read-only)
    pub fn get_all(&self) -> &[ItemSlot] {
        &self.slots
    }

    /// Total quantity held of one catalog item
    pub fn count_of(&self, id: ItemId) -> u32 {
        self.position_of(id)
            .and_then(|index| self.slots.get(index))
            .map(|slot| u32::from(slot.stack()))
            .unwrap_or(0)
    }

    /// Index of the slot holding this catalog item
    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.slots.iter().position(|slot| slot.item().id() == id)
    }

    /// Slots of one category, paired with their inventory index
    pub fn iter_category(&self, category: Category) -> impl Iterator<Item = (usize, &ItemSlot)> {
        self.slots
            .iter()
            .enumerate()
            .filter(move |(_, slot)| slot.item().category() == category)
    }

    /// Clears all items from the inventory
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    fn remove_slot(&mut self, index: usize) -> ItemSlot {
        let slot = self.slots.remove(index);
        log::debug!("Removed slot {} ({})", index, slot.item().name());
        slot
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}
