//! Plugin wiring for the item bar.
//!
//! The bar exists only during gameplay: it is spawned on entering
//! `GameState::InGame`, torn down on leaving it, and every Update system is
//! gated on that state so no input or resize handling outlives the bar.

use bevy::prelude::*;

use crate::hud::events::{ClearSlot, GiveItem, SelectionChanged, SlotChanged};
use crate::hud::slot_bar::SlotBar;
use crate::hud::systems::{
    apply_item_grants, apply_selection_highlight, apply_slot_clears, reposition_item_bar,
    select_slot_from_keys, setup_item_bar, sync_slot_visuals, teardown_item_bar,
};
use crate::states::GameState;

pub fn plugin(app: &mut App) {
    app.init_resource::<SlotBar>()
        .add_message::<GiveItem>()
        .add_message::<ClearSlot>()
        .add_message::<SlotChanged>()
        .add_message::<SelectionChanged>()
        .add_systems(OnEnter(GameState::InGame), setup_item_bar)
        .add_systems(OnExit(GameState::InGame), teardown_item_bar)
        .add_systems(
            Update,
            (
                // Input and model updates first, then the view reacts,
                // all within the same frame
                select_slot_from_keys,
                apply_item_grants,
                apply_slot_clears,
                sync_slot_visuals,
                apply_selection_highlight,
                reposition_item_bar,
            )
                .chain()
                .run_if(in_state(GameState::InGame)),
        );
}
