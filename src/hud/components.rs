//! View-only marker components for the item bar.
//!
//! These exist so the sync systems can find and update slot visuals. The
//! model in [`crate::hud::slot_bar`] never references any of them.

use bevy::prelude::*;

/// Root of the item bar. Every slot visual is a child of this entity and
/// tearing down the HUD despawns the whole tree through it.
#[derive(Component)]
pub struct ItemBarRoot;

/// Background square of one slot. Tinted by the selection system.
#[derive(Component)]
pub struct SlotBackground {
    /// Index of the slot this background belongs to
    pub index: usize,
}

/// "1".."9" label above a slot.
#[derive(Component)]
pub struct SlotNumberLabel {
    pub index: usize,
}

/// Item visual inside a slot: an icon sprite, or an abbreviation label for
/// items without a texture. Exists only while the slot is occupied.
#[derive(Component)]
pub struct SlotIcon {
    pub index: usize,
}

/// Count label in a slot's lower right corner. Exists only while occupied.
#[derive(Component)]
pub struct SlotCountLabel {
    pub index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_component<T: Component>() {}

    #[test]
    fn markers_are_components() {
        assert_component::<ItemBarRoot>();
        assert_component::<SlotBackground>();
        assert_component::<SlotNumberLabel>();
        assert_component::<SlotIcon>();
        assert_component::<SlotCountLabel>();
    }

    #[test]
    fn indexed_markers_store_their_slot() {
        assert_eq!(SlotBackground { index: 3 }.index, 3);
        assert_eq!(SlotNumberLabel { index: 1 }.index, 1);
        assert_eq!(SlotIcon { index: 7 }.index, 7);
        assert_eq!(SlotCountLabel { index: 0 }.index, 0);
    }
}
