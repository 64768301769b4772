use bevy::prelude::*;
use seedling::{game::plugin as game_plugin, hud::plugin as hud_plugin, menu::plugin as menu_plugin, states::GameState};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .init_state::<GameState>()
        .add_plugins((menu_plugin, game_plugin, hud_plugin))
        .run();
}
