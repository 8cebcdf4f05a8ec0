use crate::item::Item;

/// One inventory entry: an owned item plus how many are stacked
///
/// A slot never holds zero items while it sits in an inventory; the
/// inventory removes it as soon as the stack runs out.
#[derive(Debug, Clone)]
pub struct ItemSlot {
    item: Item,
    stack: u16,
}

impl ItemSlot {
    /// Creates a slot holding a single item
    pub fn new(item: Item) -> Self {
        ItemSlot { item, stack: 1 }
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn stack(&self) -> u16 {
        self.stack
    }

    /// Adds one to the stack
    ///
    /// Returns false and leaves the stack alone if it is already full.
    pub fn increment_stack(&mut self) -> bool {
        match self.stack.checked_add(1) {
            Some(stack) => {
                self.stack = stack;
                true
            }
            None => false,
        }
    }

    /// How many more items this stack can take
    pub fn room(&self) -> u16 {
        u16::MAX - self.stack
    }

    /// Removes one from the stack
    ///
    /// # Panics
    /// If the stack is already empty. Callers are expected to check
    /// before decrementing, as [`Inventory`](super::Inventory) does.
    pub fn decrement_stack(&mut self) {
        assert!(self.stack > 0, "decremented an empty stack of '{}'", self.item.name());
        self.stack -= 1;
    }

    /// Returns true if the stack has run out
    pub fn is_empty(&self) -> bool {
        self.stack == 0
    }

    /// Consumes the slot, keeping only its item
    pub fn into_item(self) -> Item {
        self.item
    }

    /// Swaps the held item, returning the previous one
    pub fn replace(&mut self, item: Item) -> Item {
        std::mem::replace(&mut self.item, item)
    }

    /// Returns true if both slots hold the same catalog item
    pub fn is_same_item(&self, other: &ItemSlot) -> bool {
        self.item.is_same_item(&other.item)
    }
}

// Slots compare by item identity only, which is what stacking needs
impl PartialEq for ItemSlot {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_item(other)
    }
}

impl Eq for ItemSlot {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemRegistry;

    fn slot(name: &str) -> ItemSlot {
        let registry = ItemRegistry::create_default().unwrap();
        ItemSlot::new(registry.find(name).unwrap())
    }

    #[test]
    fn test_new_slot_has_one_item() {
        let slot = slot("Stick");

        assert_eq!(slot.stack(), 1);
        assert_eq!(slot.item().name(), "Stick");
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut slot = slot("Normal Health Potion");
        slot.increment_stack();
        slot.increment_stack();
        assert_eq!(slot.stack(), 3);

        slot.decrement_stack();
        assert_eq!(slot.stack(), 2);
        assert!(!slot.is_empty());
    }

    #[test]
    #[should_panic(expected = "decremented an empty stack")]
    fn test_decrement_empty_stack_panics() {
        let mut slot = slot("Stick");
        slot.decrement_stack();
        slot.decrement_stack();
    }

    #[test]
    fn test_increment_full_stack() {
        let mut slot = slot("Stick");
        slot.stack = u16::MAX - 1;
        assert_eq!(slot.room(), 1);

        assert!(slot.increment_stack());
        assert_eq!(slot.room(), 0);

        assert!(!slot.increment_stack());
        assert_eq!(slot.stack(), u16::MAX);
    }

    #[test]
    fn test_replace_returns_previous_item() {
        let registry = ItemRegistry::create_default().unwrap();
        let mut slot = ItemSlot::new(registry.find("Stick").unwrap());

        let old = slot.replace(registry.find("Iron Blade").unwrap());

        assert_eq!(old.name(), "Stick");
        assert_eq!(slot.item().name(), "Iron Blade");
    }

    #[test]
    fn test_equality_is_item_identity() {
        let mut a = slot("Wooden Bow");
        let b = slot("Wooden Bow");
        a.increment_stack();

        // Stack counts don't matter
        assert_eq!(a, b);
        assert_ne!(a, slot("Iron Bow"));
    }
}
