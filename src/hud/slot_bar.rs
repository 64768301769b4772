//! The item bar model: slot contents and the selected slot.
//!
//! Holds semantic state only. Visuals belong entirely to the view systems;
//! the model never touches entities or assets. Mutating operations return
//! the matching notification payload so the calling system can forward it
//! as a message without the model knowing about the message bus.

use bevy::prelude::*;
use thiserror::Error;

use crate::hud::events::{SelectionChanged, SlotChanged};
use crate::item::ItemKind;

/// Number of slots in the item bar.
pub const SLOT_COUNT: usize = 8;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SlotBarError {
    /// A parameter that can never be valid, such as a zero slot count.
    #[error("invalid slot bar config: {0}")]
    InvalidConfig(&'static str),
    /// Slot index outside `[0, slot_count)`. Indices are never clamped.
    #[error("slot index {index} out of range for {slot_count} slots")]
    OutOfRange { index: usize, slot_count: usize },
}

/// One inventory position in the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    index: usize,
    item: Option<ItemKind>,
    count: u32,
}

impl Slot {
    fn empty(index: usize) -> Self {
        Self {
            index,
            item: None,
            count: 0,
        }
    }

    /// Position of this slot in the bar. Fixed at construction.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The occupying item, or `None` for an empty slot.
    pub fn item(&self) -> Option<ItemKind> {
        self.item
    }

    /// Quantity in the slot. Zero when empty, at least one when occupied.
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.item.is_none()
    }
}

/// Authoritative slot and selection state for the item bar.
///
/// The slot count is fixed at construction and exactly one slot is selected
/// at all times, starting at index 0.
#[derive(Resource, Debug)]
pub struct SlotBar {
    slots: Vec<Slot>,
    selected: usize,
}

impl Default for SlotBar {
    fn default() -> Self {
        Self {
            slots: (0..SLOT_COUNT).map(Slot::empty).collect(),
            selected: 0,
        }
    }
}

impl SlotBar {
    /// Creates a bar of `slot_count` empty slots with slot 0 selected.
    pub fn new(slot_count: usize) -> Result<Self, SlotBarError> {
        if slot_count == 0 {
            return Err(SlotBarError::InvalidConfig("slot count must be at least 1"));
        }
        Ok(Self {
            slots: (0..slot_count).map(Slot::empty).collect(),
            selected: 0,
        })
    }

    fn check_index(&self, index: usize) -> Result<(), SlotBarError> {
        if index < self.slots.len() {
            Ok(())
        } else {
            Err(SlotBarError::OutOfRange {
                index,
                slot_count: self.slots.len(),
            })
        }
    }

    /// Places `item` in slot `index`, replacing any current occupant.
    /// There is no stacking here; callers that want to stack read the slot
    /// first and pass an increased count.
    pub fn set_item(
        &mut self,
        index: usize,
        item: ItemKind,
        count: u32,
    ) -> Result<SlotChanged, SlotBarError> {
        self.check_index(index)?;
        if count == 0 {
            return Err(SlotBarError::InvalidConfig("item count must be at least 1"));
        }
        let slot = &mut self.slots[index];
        slot.item = Some(item);
        slot.count = count;
        Ok(SlotChanged {
            index,
            item: Some(item),
            count,
        })
    }

    /// Empties slot `index`.
    pub fn clear_item(&mut self, index: usize) -> Result<SlotChanged, SlotBarError> {
        self.check_index(index)?;
        let slot = &mut self.slots[index];
        slot.item = None;
        slot.count = 0;
        Ok(SlotChanged {
            index,
            item: None,
            count: 0,
        })
    }

    /// Moves the selection to slot `index`. Selecting the already selected
    /// slot still reports a notification, so observers see every call.
    pub fn select(&mut self, index: usize) -> Result<SelectionChanged, SlotBarError> {
        self.check_index(index)?;
        let previous = self.selected;
        self.selected = index;
        Ok(SelectionChanged {
            previous,
            current: index,
        })
    }

    /// Read-only view of slot `index`.
    pub fn slot(&self, index: usize) -> Result<&Slot, SlotBarError> {
        self.check_index(index)?;
        Ok(&self.slots[index])
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Iterate over all slots in bar order.
    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    /// First slot holding `item`, if any.
    pub fn find_item(&self, item: ItemKind) -> Option<usize> {
        self.slots.iter().position(|s| s.item == Some(item))
    }

    /// First empty slot, if any.
    pub fn find_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(|s| s.is_empty())
    }
}
