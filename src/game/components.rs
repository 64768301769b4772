use bevy::prelude::*;

use crate::item::ItemKind;

/// The player character.
#[derive(Component)]
pub struct Player;

/// An item lying in the world, collected by walking over it.
#[derive(Component)]
pub struct Pickup {
    pub item: ItemKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pickup_carries_its_item_kind() {
        let pickup = Pickup {
            item: ItemKind::Berry,
        };
        assert_eq!(pickup.item, ItemKind::Berry);
    }
}
