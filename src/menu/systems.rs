//! The start menu screen shown before gameplay.

use bevy::prelude::*;

use crate::menu::components::*;
use crate::states::GameState;

const START_BUTTON_COLOR: Color = Color::srgb(0.25, 0.55, 0.3);
const EXIT_BUTTON_COLOR: Color = Color::srgb(0.55, 0.25, 0.25);
const BUTTON_HOVER_COLOR: Color = Color::srgb(0.4, 0.4, 0.4);

pub fn setup_menu(mut commands: Commands, camera_query: Query<Entity, With<Camera2d>>) {
    // The camera serves the whole app; spawn it once here
    if camera_query.is_empty() {
        commands.spawn(Camera2d);
    }

    commands
        .spawn((
            MenuRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgb(0.07, 0.12, 0.08)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Seedling"),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));

            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    margin: UiRect::top(Val::Px(40.0)),
                    ..default()
                })
                .with_children(|menu| {
                    spawn_menu_button(menu, "Start", START_BUTTON_COLOR, StartGameButton);
                    spawn_menu_button(menu, "Exit", EXIT_BUTTON_COLOR, ExitGameButton);
                });
        });
}

fn spawn_menu_button(
    parent: &mut bevy::ecs::hierarchy::ChildSpawnerCommands,
    label: &str,
    color: Color,
    marker: impl Component,
) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(180.0),
                height: Val::Px(48.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                margin: UiRect::bottom(Val::Px(16.0)),
                ..default()
            },
            BackgroundColor(color),
            MenuButton,
            marker,
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(label),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

#[allow(clippy::type_complexity)]
pub fn menu_button_interactions(
    mut interaction_query: Query<
        (
            &Interaction,
            &mut BackgroundColor,
            Option<&StartGameButton>,
            Option<&ExitGameButton>,
        ),
        (Changed<Interaction>, With<MenuButton>),
    >,
    mut next_state: ResMut<NextState<GameState>>,
    mut app_exit: MessageWriter<AppExit>,
) {
    for (interaction, mut background_color, start_button, exit_button) in &mut interaction_query {
        match *interaction {
            Interaction::Pressed => {
                if start_button.is_some() {
                    next_state.set(GameState::InGame);
                } else if exit_button.is_some() {
                    app_exit.write(AppExit::Success);
                }
            }
            Interaction::Hovered => {
                *background_color = BackgroundColor(BUTTON_HOVER_COLOR);
            }
            Interaction::None => {
                if start_button.is_some() {
                    *background_color = BackgroundColor(START_BUTTON_COLOR);
                } else if exit_button.is_some() {
                    *background_color = BackgroundColor(EXIT_BUTTON_COLOR);
                }
            }
        }
    }
}

pub fn cleanup_menu(mut commands: Commands, menu_query: Query<Entity, With<MenuRoot>>) {
    for entity in &menu_query {
        commands.entity(entity).despawn();
    }
}
