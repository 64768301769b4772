use bevy::prelude::*;

/// One-shot grant of the starter items shortly after the game begins,
/// so the bar is not empty on the first frame the player sees.
#[derive(Resource)]
pub struct StartingItems {
    pub timer: Timer,
    pub granted: bool,
}

impl Default for StartingItems {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(0.5, TimerMode::Once),
            granted: false,
        }
    }
}
