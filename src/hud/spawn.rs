//! Spawning logic for item bar visuals.
//!
//! Builds the bar root with one background square and number label per
//! slot, and the per-item visuals (icon or abbreviation, plus count label)
//! for occupied slots. Item visuals are also spawned and despawned at
//! runtime by the sync system in [`crate::hud::systems`].

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

use crate::hud::components::{ItemBarRoot, SlotBackground, SlotCountLabel, SlotIcon, SlotNumberLabel};
use crate::hud::layout::{
    slot_x, COUNT_LABEL_OFFSET, ICON_SIZE, NUMBER_LABEL_OFFSET, SLOT_SIZE,
};
use crate::hud::slot_bar::SlotBar;
use crate::item::ItemKind;

/// Fill of an unselected slot background.
pub const SLOT_BACKGROUND: Color = Color::srgba(0.08, 0.08, 0.1, 0.55);

/// Fill of the selected slot background, a soft green highlight.
pub const SLOT_BACKGROUND_SELECTED: Color = Color::srgba(0.533, 1.0, 0.533, 0.55);

/// Tint applied to the selected slot's icon sprite.
pub const ICON_TINT_SELECTED: Color = Color::srgb(0.533, 1.0, 0.533);

/// Font size for the "1".."9" labels above the slots.
pub const NUMBER_FONT_SIZE: f32 = 14.0;

/// Font size for the count label in a slot's corner.
pub const COUNT_FONT_SIZE: f32 = 12.0;

/// Font size for the abbreviation shown when an item has no icon texture.
pub const ABBREVIATION_FONT_SIZE: f32 = 16.0;

/// Background fill for the current selection state of a slot.
pub fn slot_background_color(selected: bool) -> Color {
    if selected {
        SLOT_BACKGROUND_SELECTED
    } else {
        SLOT_BACKGROUND
    }
}

/// Icon sprite tint for the current selection state of a slot.
pub fn icon_tint(selected: bool) -> Color {
    if selected {
        ICON_TINT_SELECTED
    } else {
        Color::WHITE
    }
}

/// Text color of an abbreviation label for the current selection state.
/// Unselected labels keep the item's own color.
pub fn abbreviation_tint(item: ItemKind, selected: bool) -> Color {
    if selected {
        ICON_TINT_SELECTED
    } else {
        item.pickup_color()
    }
}

/// Spawns the whole item bar at `anchor` and returns the root entity.
///
/// Backgrounds and number labels exist for every slot; item visuals are
/// created only for slots that are already occupied in `bar`.
pub fn spawn_item_bar(
    commands: &mut Commands,
    bar: &SlotBar,
    asset_server: &AssetServer,
    anchor: Vec3,
) -> Entity {
    let slot_count = bar.slot_count();
    let selected = bar.selected_index();

    commands
        .spawn((
            ItemBarRoot,
            Transform::from_translation(anchor),
            Visibility::default(),
        ))
        .with_children(|parent| {
            for slot in bar.iter() {
                let index = slot.index();
                let x = slot_x(index, slot_count);

                // Slot background square
                parent.spawn((
                    Sprite {
                        color: slot_background_color(index == selected),
                        custom_size: Some(Vec2::splat(SLOT_SIZE)),
                        ..default()
                    },
                    Transform::from_xyz(x, 0.0, 0.1),
                    SlotBackground { index },
                ));

                // Slot number label above the square
                parent.spawn((
                    Text2d::new(format!("{}", index + 1)),
                    TextFont {
                        font_size: NUMBER_FONT_SIZE,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                    Transform::from_xyz(x, NUMBER_LABEL_OFFSET, 0.2),
                    SlotNumberLabel { index },
                ));

                if let Some(item) = slot.item() {
                    spawn_slot_item(
                        parent,
                        index,
                        slot_count,
                        item,
                        slot.count(),
                        index == selected,
                        asset_server,
                    );
                }
            }
        })
        .id()
}

/// Spawns the item visuals for one occupied slot: the icon (sprite or
/// abbreviation label) and the count label.
pub fn spawn_slot_item(
    parent: &mut ChildSpawnerCommands,
    index: usize,
    slot_count: usize,
    item: ItemKind,
    count: u32,
    selected: bool,
    asset_server: &AssetServer,
) {
    let x = slot_x(index, slot_count);

    match item.icon_path() {
        Some(path) => {
            parent.spawn((
                Sprite {
                    image: asset_server.load(path),
                    custom_size: Some(Vec2::splat(ICON_SIZE)),
                    color: icon_tint(selected),
                    ..default()
                },
                Transform::from_xyz(x, 0.0, 0.3),
                SlotIcon { index },
            ));
        }
        None => {
            // No texture for this item, degrade to its abbreviation
            parent.spawn((
                Text2d::new(item.abbreviation()),
                TextFont {
                    font_size: ABBREVIATION_FONT_SIZE,
                    ..default()
                },
                TextColor(abbreviation_tint(item, selected)),
                Transform::from_xyz(x, 0.0, 0.3),
                SlotIcon { index },
            ));
        }
    }

    parent.spawn((
        Text2d::new(format!("{count}")),
        TextFont {
            font_size: COUNT_FONT_SIZE,
            ..default()
        },
        TextColor(Color::WHITE),
        Transform::from_xyz(x + COUNT_LABEL_OFFSET, -COUNT_LABEL_OFFSET, 0.4),
        SlotCountLabel { index },
    ));
}
