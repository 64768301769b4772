use bevy::prelude::*;

#[derive(Clone, Copy, Default, Eq, PartialEq, Debug, Hash, States)]
pub enum GameState {
    #[default]
    Menu,
    InGame,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_state_default_is_menu() {
        assert_eq!(GameState::default(), GameState::Menu);
    }

    #[test]
    fn game_state_variants_are_distinct() {
        assert_ne!(GameState::Menu, GameState::InGame);
    }

    #[test]
    fn game_state_derives_clone() {
        let state = GameState::InGame;
        let cloned = state.clone();
        assert_eq!(state, cloned);
    }
}
