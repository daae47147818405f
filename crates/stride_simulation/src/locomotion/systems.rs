//! Locomotion systems (ECS адаптеры над controller.rs)
//!
//! Update (render frame):
//! - `sample_player_input` - PlayerInputEvent → LocomotionState
//! - `update_move_direction` - оси + camera basis → move_direction
//!
//! FixedUpdate (physics tick), строго по порядку:
//! - `apply_jump_system` → `rotate_toward_movement_system` → `move_body_system`

use bevy::prelude::*;

use super::controller;
use super::events::JumpPerformed;
use super::ground::GroundSensor;
use crate::components::{AnimationParams, CameraLink, LocomotionConfig, LocomotionState, PhysicsBody, Player};
use crate::input::{FrameInput, PlayerInputEvent};
use crate::shared::CameraBasis;

/// Player input → LocomotionState (один раз за render frame)
///
/// # Архитектура
/// - Читает: PlayerInputEvent (все события кадра сводятся в FrameInput)
/// - Пишет: LocomotionState игрока, roll trigger в AnimationParams (если есть)
/// - Query: With<Player>
pub fn sample_player_input(
    mut input_events: EventReader<PlayerInputEvent>,
    mut players: Query<(&mut LocomotionState, Option<&mut AnimationParams>), With<Player>>,
) {
    let frame = FrameInput::from_events(input_events.read());

    // Guard: нет player entity
    let Ok((mut state, animation)) = players.single_mut() else {
        return;
    };

    controller::sample_input(&mut state, &frame);

    if frame.fire_pressed {
        if let Some(mut animation) = animation {
            animation.trigger_roll();
        }
    }
}

/// move_direction из осей и камеры (один раз за render frame, после sample)
///
/// CameraLink на despawned камеру → world оси (не ошибка).
pub fn update_move_direction(
    mut controllers: Query<(&mut LocomotionState, Option<&CameraLink>)>,
    cameras: Query<&Transform>,
) {
    for (mut state, link) in controllers.iter_mut() {
        let camera = link
            .and_then(|link| cameras.get(link.camera).ok())
            .map(CameraBasis::from_transform);

        state.move_direction =
            controller::compute_move_direction(state.horizontal_input, state.vertical_input, camera);
    }
}

/// Прыжок: latch + ground probe → импульс
pub fn apply_jump_system(
    mut controllers: Query<(Entity, &LocomotionConfig, &mut LocomotionState, &mut PhysicsBody, &Transform)>,
    ground: GroundSensor,
    mut jump_events: EventWriter<JumpPerformed>,
    mut warned_no_ground: Local<bool>,
) {
    for (entity, config, mut state, mut body, transform) in controllers.iter_mut() {
        if !state.jump_requested {
            continue;
        }

        if !ground.has_backend() && !*warned_no_ground {
            *warned_no_ground = true;
            crate::log_warning("Ground probe: нет ни Rapier context, ни FlatGround - jump latch не сработает");
        }

        let grounded = controller::is_grounded(&ground, entity, transform.translation, config);

        if controller::apply_jump(&mut state, &mut body, grounded, config) {
            jump_events.write(JumpPerformed {
                entity,
                velocity_y: body.velocity.y,
            });
        }
    }
}

/// Поворот тела к move_direction (slerp, dt из fixed clock)
pub fn rotate_toward_movement_system(
    mut controllers: Query<(&LocomotionConfig, &LocomotionState, &mut Transform)>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (config, state, mut transform) in controllers.iter_mut() {
        controller::rotate_toward_movement(&mut transform.rotation, state.move_direction, delta, config);
    }
}

/// Горизонтальная velocity (Y не трогаем) + ground_speed
pub fn move_body_system(mut controllers: Query<(&LocomotionConfig, &mut LocomotionState, &mut PhysicsBody)>) {
    for (config, mut state, mut body) in controllers.iter_mut() {
        controller::move_body(&mut state, &mut body, config);
    }
}

/// Debug лог прыжков
pub fn log_jumps(mut jump_events: EventReader<JumpPerformed>) {
    for event in jump_events.read() {
        crate::log(&format!(
            "Jump: entity {:?}, velocity.y = {:.2}",
            event.entity, event.velocity_y
        ));
    }
}
