use bevy::prelude::*;

/// Root node of the menu screen, despawned on exit.
#[derive(Component)]
pub struct MenuRoot;

#[derive(Component)]
pub struct MenuButton;

#[derive(Component)]
pub struct StartGameButton;

#[derive(Component)]
pub struct ExitGameButton;
