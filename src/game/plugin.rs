use bevy::prelude::*;

use crate::game::resources::StartingItems;
use crate::game::systems::*;
use crate::states::GameState;

pub fn plugin(app: &mut App) {
    app.init_resource::<StartingItems>()
        .add_systems(OnEnter(GameState::InGame), setup_game)
        .add_systems(
            Update,
            (
                player_movement,
                grant_starting_items,
                collect_pickups,
                drop_selected_item,
            )
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(OnExit(GameState::InGame), cleanup_game);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::components::{Pickup, Player};
    use crate::hud::events::{ClearSlot, GiveItem, SelectionChanged, SlotChanged};
    use crate::hud::slot_bar::SlotBar;

    fn setup_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(bevy::prelude::TaskPoolPlugin::default());
        app.add_plugins(bevy::state::app::StatesPlugin);
        // A hand-managed clock: TimePlugin would rebuild the generic Time
        // from the real clock each frame and discard manual advances
        app.init_resource::<Time>();
        app.init_state::<GameState>();
        app.init_resource::<ButtonInput<KeyCode>>();
        app.init_resource::<SlotBar>();
        app.add_message::<GiveItem>();
        app.add_message::<ClearSlot>();
        app.add_message::<SlotChanged>();
        app.add_message::<SelectionChanged>();
        app.add_plugins(plugin);
        app
    }

    fn enter_game(app: &mut App) {
        app.world_mut()
            .resource_mut::<NextState<GameState>>()
            .set(GameState::InGame);
        app.update();
    }

    #[test]
    fn entering_the_game_spawns_the_world() {
        let mut app = setup_test_app();
        enter_game(&mut app);

        assert_eq!(
            app.world_mut()
                .query::<&Player>()
                .iter(app.world())
                .count(),
            1
        );
        assert!(
            app.world_mut().query::<&Pickup>().iter(app.world()).count() > 0
        );
    }

    #[test]
    fn nothing_spawns_while_in_the_menu() {
        let mut app = setup_test_app();
        app.update();

        assert_eq!(
            app.world_mut()
                .query::<&Player>()
                .iter(app.world())
                .count(),
            0
        );
    }

    #[test]
    fn leaving_the_game_despawns_the_world() {
        let mut app = setup_test_app();
        enter_game(&mut app);

        app.world_mut()
            .resource_mut::<NextState<GameState>>()
            .set(GameState::Menu);
        app.update();

        assert_eq!(
            app.world_mut()
                .query::<&Player>()
                .iter(app.world())
                .count(),
            0
        );
        assert_eq!(
            app.world_mut().query::<&Pickup>().iter(app.world()).count(),
            0
        );
    }

    #[test]
    fn starting_items_arrive_after_the_grace_period() {
        let mut app = setup_test_app();
        enter_game(&mut app);

        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(std::time::Duration::from_millis(600));
        app.update();

        let grants = app.world().resource::<Messages<GiveItem>>();
        assert_eq!(grants.len(), 2);
    }
}
