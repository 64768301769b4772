//! Systems driving the item bar.
//!
//! Input binding (digit keys select a slot), applying `GiveItem` /
//! `ClearSlot` requests to the model, keeping slot visuals in step with the
//! model, selection highlighting, and viewport repositioning. Malformed
//! requests from game logic are logged and dropped here; they never reach
//! the render side of the frame.

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::hud::components::{ItemBarRoot, SlotBackground, SlotCountLabel, SlotIcon};
use crate::hud::events::{ClearSlot, GiveItem, SelectionChanged, SlotChanged};
use crate::hud::layout::{bar_anchor, FALLBACK_VIEWPORT_HEIGHT};
use crate::hud::slot_bar::SlotBar;
use crate::hud::spawn::{
    abbreviation_tint, icon_tint, slot_background_color, spawn_item_bar, spawn_slot_item,
};

/// Ordinal keys bound to the slots, in slot order. Slots past the ninth
/// have no key and are only reachable programmatically.
pub const SLOT_KEYS: [KeyCode; 9] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

/// Spawns the item bar when gameplay starts, anchored to the current
/// window size (or a fallback when no window exists yet).
pub fn setup_item_bar(
    mut commands: Commands,
    bar: Res<SlotBar>,
    asset_server: Res<AssetServer>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let height = windows
        .single()
        .map(|window| window.height())
        .unwrap_or(FALLBACK_VIEWPORT_HEIGHT);
    spawn_item_bar(&mut commands, &bar, &asset_server, bar_anchor(height));
}

/// Despawns the bar and every slot visual under it when gameplay ends.
/// Update systems are state gated, so nothing runs against the bar after
/// this.
pub fn teardown_item_bar(mut commands: Commands, bars: Query<Entity, With<ItemBarRoot>>) {
    for entity in &bars {
        commands.entity(entity).despawn();
    }
}

/// Selects slot `k - 1` when digit key `k` is pressed.
pub fn select_slot_from_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut bar: ResMut<SlotBar>,
    mut selection_changed: MessageWriter<SelectionChanged>,
) {
    let reachable = bar.slot_count().min(SLOT_KEYS.len());
    for (index, key) in SLOT_KEYS[..reachable].iter().enumerate() {
        if keyboard.just_pressed(*key) {
            match bar.select(index) {
                Ok(change) => {
                    selection_changed.write(change);
                }
                Err(err) => warn!("ignoring slot key {}: {err}", index + 1),
            }
        }
    }
}

/// Applies `GiveItem` requests to the model and forwards the resulting
/// notifications. A malformed request is logged and dropped.
pub fn apply_item_grants(
    mut grants: MessageReader<GiveItem>,
    mut bar: ResMut<SlotBar>,
    mut slot_changed: MessageWriter<SlotChanged>,
) {
    for grant in grants.read() {
        match bar.set_item(grant.slot, grant.item, grant.count) {
            Ok(change) => {
                slot_changed.write(change);
            }
            Err(err) => warn!(
                "dropping grant of {} x{}: {err}",
                grant.item.display_name(),
                grant.count
            ),
        }
    }
}

/// Applies `ClearSlot` requests to the model and forwards the resulting
/// notifications. A malformed request is logged and dropped.
pub fn apply_slot_clears(
    mut clears: MessageReader<ClearSlot>,
    mut bar: ResMut<SlotBar>,
    mut slot_changed: MessageWriter<SlotChanged>,
) {
    for clear in clears.read() {
        match bar.clear_item(clear.slot) {
            Ok(change) => {
                slot_changed.write(change);
            }
            Err(err) => warn!("dropping clear request: {err}"),
        }
    }
}

/// Rebuilds the item visuals of every slot named in a `SlotChanged`
/// notification this frame.
///
/// Old icon and count entities for a changed slot are despawned before new
/// ones are created, so repeated updates never duplicate visuals and a
/// cleared slot keeps nothing on screen. Contents come from the live model,
/// not from the notification payload.
pub fn sync_slot_visuals(
    mut changes: MessageReader<SlotChanged>,
    mut commands: Commands,
    bar: Res<SlotBar>,
    asset_server: Res<AssetServer>,
    roots: Query<Entity, With<ItemBarRoot>>,
    icons: Query<(Entity, &SlotIcon)>,
    counts: Query<(Entity, &SlotCountLabel)>,
) {
    if changes.is_empty() {
        return;
    }
    let mut indices: Vec<usize> = changes.read().map(|change| change.index).collect();
    indices.sort_unstable();
    indices.dedup();

    let Ok(root) = roots.single() else {
        return;
    };

    for &index in &indices {
        for (entity, icon) in &icons {
            if icon.index == index {
                commands.entity(entity).despawn();
            }
        }
        for (entity, label) in &counts {
            if label.index == index {
                commands.entity(entity).despawn();
            }
        }

        let Ok(slot) = bar.slot(index) else {
            continue;
        };
        if let Some(item) = slot.item() {
            let selected = bar.selected_index() == index;
            let slot_count = bar.slot_count();
            let count = slot.count();
            commands.entity(root).with_children(|parent| {
                spawn_slot_item(parent, index, slot_count, item, count, selected, &asset_server);
            });
        }
    }
}

/// Re-tints every slot background and icon after the selection moved.
/// Icons are sprites for textured items and abbreviation labels for the
/// rest; both get the highlight. Reads the live selection so exactly one
/// slot is highlighted no matter how many selection notifications arrived
/// this frame.
pub fn apply_selection_highlight(
    mut changes: MessageReader<SelectionChanged>,
    bar: Res<SlotBar>,
    mut backgrounds: Query<(&SlotBackground, &mut Sprite), Without<SlotIcon>>,
    mut icons: Query<(&SlotIcon, &mut Sprite), Without<SlotBackground>>,
    mut labels: Query<(&SlotIcon, &mut TextColor)>,
) {
    if changes.is_empty() {
        return;
    }
    changes.clear();

    let selected = bar.selected_index();
    for (background, mut sprite) in &mut backgrounds {
        sprite.color = slot_background_color(background.index == selected);
    }
    for (icon, mut sprite) in &mut icons {
        sprite.color = icon_tint(icon.index == selected);
    }
    for (icon, mut color) in &mut labels {
        let Ok(slot) = bar.slot(icon.index) else {
            continue;
        };
        if let Some(item) = slot.item() {
            color.0 = abbreviation_tint(item, icon.index == selected);
        }
    }
}

/// Moves the bar root back to its anchor whenever the window is resized.
/// Only the view moves; the model is untouched.
pub fn reposition_item_bar(
    mut resizes: MessageReader<WindowResized>,
    mut bars: Query<&mut Transform, With<ItemBarRoot>>,
) {
    // Only the most recent size matters
    let Some(resize) = resizes.read().last() else {
        return;
    };
    for mut transform in &mut bars {
        transform.translation = bar_anchor(resize.height);
    }
}
