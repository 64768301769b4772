//! Messages flowing into and out of the item bar.
//!
//! `GiveItem` and `ClearSlot` are the interface game logic uses to change
//! bar contents. `SlotChanged` and `SelectionChanged` are emitted for every
//! applied model operation, in call order, for the view and any other
//! observer.

use bevy::prelude::*;

use crate::item::ItemKind;

/// Request from game logic to place an item in a specific slot.
/// Replaces whatever the slot currently holds.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GiveItem {
    pub slot: usize,
    pub item: ItemKind,
    pub count: u32,
}

/// Request from game logic to empty a specific slot.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearSlot {
    pub slot: usize,
}

/// Notification that a slot's contents changed.
/// `item == None` means the slot was cleared.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotChanged {
    pub index: usize,
    pub item: Option<ItemKind>,
    pub count: u32,
}

/// Notification that the selected slot moved.
/// Emitted even when `previous == current`, so observers see every call.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChanged {
    pub previous: usize,
    pub current: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn give_item_carries_slot_item_and_count() {
        let msg = GiveItem {
            slot: 2,
            item: ItemKind::Seed,
            count: 3,
        };
        assert_eq!(msg.slot, 2);
        assert_eq!(msg.item, ItemKind::Seed);
        assert_eq!(msg.count, 3);
    }

    #[test]
    fn slot_changed_none_means_cleared() {
        let msg = SlotChanged {
            index: 4,
            item: None,
            count: 0,
        };
        assert!(msg.item.is_none());
        assert_eq!(msg.count, 0);
    }

    #[test]
    fn selection_changed_allows_same_index() {
        let msg = SelectionChanged {
            previous: 1,
            current: 1,
        };
        assert_eq!(msg.previous, msg.current);
    }
}
