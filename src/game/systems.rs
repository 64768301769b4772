use bevy::prelude::*;
use rand::Rng;

use crate::game::components::*;
use crate::game::resources::StartingItems;
use crate::hud::events::{ClearSlot, GiveItem};
use crate::hud::slot_bar::SlotBar;
use crate::item::ItemKind;

pub const PLAYER_SPEED: f32 = 200.0;
pub const PICKUP_RADIUS: f32 = 24.0;

const PICKUP_SIZE: f32 = 12.0;
const SCATTERED_PICKUPS: usize = 12;

pub fn setup_game(mut commands: Commands) {
    commands.spawn((
        Player,
        Sprite {
            color: Color::srgb(0.3, 0.8, 0.3),
            custom_size: Some(Vec2::new(20.0, 20.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 1.0),
    ));

    let mut rng = rand::thread_rng();
    let kinds = [
        ItemKind::Coin,
        ItemKind::Seed,
        ItemKind::Berry,
        ItemKind::Stone,
    ];
    for i in 0..SCATTERED_PICKUPS {
        let item = kinds[i % kinds.len()];
        let x = rng.gen_range(-350.0..350.0);
        let y = rng.gen_range(-200.0..200.0);
        commands.spawn((
            Pickup { item },
            Sprite {
                color: item.pickup_color(),
                custom_size: Some(Vec2::new(PICKUP_SIZE, PICKUP_SIZE)),
                ..default()
            },
            Transform::from_xyz(x, y, 0.5),
        ));
    }

    commands.insert_resource(StartingItems::default());
}

pub fn player_movement(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut player_query: Query<&mut Transform, With<Player>>,
) {
    let Ok(mut transform) = player_query.single_mut() else {
        return;
    };

    let mut direction = Vec2::ZERO;
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        direction.y += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        direction.y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        direction.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        direction.x += 1.0;
    }

    if direction != Vec2::ZERO {
        let movement = direction.normalize() * PLAYER_SPEED * time.delta_secs();
        transform.translation.x += movement.x;
        transform.translation.y += movement.y;
    }
}

/// Gives the player a coin and a seed shortly after the run starts.
pub fn grant_starting_items(
    time: Res<Time>,
    mut starting: ResMut<StartingItems>,
    mut grants: MessageWriter<GiveItem>,
) {
    if starting.granted {
        return;
    }

    starting.timer.tick(time.delta());
    if starting.timer.is_finished() {
        grants.write(GiveItem {
            slot: 0,
            item: ItemKind::Coin,
            count: 1,
        });
        grants.write(GiveItem {
            slot: 1,
            item: ItemKind::Seed,
            count: 1,
        });
        starting.granted = true;
    }
}

/// Walking over a pickup stacks it onto an existing slot of the same kind,
/// or drops it into the first empty slot. A full bar leaves pickups in place.
pub fn collect_pickups(
    mut commands: Commands,
    bar: Res<SlotBar>,
    mut grants: MessageWriter<GiveItem>,
    player_query: Query<&Transform, With<Player>>,
    pickup_query: Query<(Entity, &Transform, &Pickup)>,
) {
    let Ok(player_transform) = player_query.single() else {
        return;
    };

    // One pickup per frame keeps the counts written below consistent with
    // the bar state this system read.
    for (entity, transform, pickup) in &pickup_query {
        let distance = player_transform
            .translation
            .truncate()
            .distance(transform.translation.truncate());
        if distance >= PICKUP_RADIUS {
            continue;
        }

        let grant = if let Some(index) = bar.find_item(pickup.item) {
            let count = bar.slot(index).map(|slot| slot.count()).unwrap_or(0);
            Some(GiveItem {
                slot: index,
                item: pickup.item,
                count: count + 1,
            })
        } else {
            bar.find_empty_slot().map(|index| GiveItem {
                slot: index,
                item: pickup.item,
                count: 1,
            })
        };

        match grant {
            Some(grant) => {
                grants.write(grant);
                commands.entity(entity).despawn();
            }
            None => {
                debug!(
                    "item bar full, leaving {} on the ground",
                    pickup.item.display_name()
                );
            }
        }
        break;
    }
}

/// Q empties the currently selected slot.
pub fn drop_selected_item(
    keyboard: Res<ButtonInput<KeyCode>>,
    bar: Res<SlotBar>,
    mut clears: MessageWriter<ClearSlot>,
) {
    if !keyboard.just_pressed(KeyCode::KeyQ) {
        return;
    }

    let selected = bar.selected_index();
    match bar.slot(selected) {
        Ok(slot) if slot.item().is_some() => {
            clears.write(ClearSlot { slot: selected });
        }
        _ => {}
    }
}

pub fn cleanup_game(
    mut commands: Commands,
    player_query: Query<Entity, With<Player>>,
    pickup_query: Query<Entity, With<Pickup>>,
) {
    for entity in player_query.iter().chain(pickup_query.iter()) {
        commands.entity(entity).despawn();
    }
}
