use bevy::prelude::*;

use crate::menu::systems::*;
use crate::states::GameState;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::Menu), setup_menu)
        .add_systems(
            Update,
            menu_button_interactions.run_if(in_state(GameState::Menu)),
        )
        .add_systems(OnExit(GameState::Menu), cleanup_menu);
}
