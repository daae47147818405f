//! Third-person locomotion
//!
//! Input → camera-relative направление → поворот тела + горизонтальная
//! velocity; прыжок только с опорой под ногами (ground probe).
//!
//! Вертикальная velocity принадлежит физике (gravity/jump integration):
//! горизонтальная логика её только сохраняет.

use bevy::prelude::*;
use bevy_rapier3d::plugin::PhysicsSet;

use crate::input::PlayerInputEvent;

pub mod controller;
pub mod events;
pub mod ground;
pub mod systems;

#[cfg(test)]
mod controller_tests;

pub use controller::{
    apply_jump, compute_move_direction, facing_rotation, is_grounded, move_body, rotate_toward_movement,
    sample_input,
};
pub use events::JumpPerformed;
pub use ground::{FlatGround, GroundProbe, GroundSensor};
pub use systems::*;

/// Фазы locomotion pipeline
///
/// - `Input` (Update): sample + move_direction
/// - `Control` (FixedUpdate): jump → rotate → move
/// - `Integrate` (FixedUpdate): headless body integration (см. physics)
/// - `React` (FixedUpdate): всё, что читает результат тика (animation, hits)
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocomotionSet {
    Input,
    Control,
    Integrate,
    React,
}

/// Plugin для locomotion контроллера
///
/// Input в Update (раз в render frame), управление телом в FixedUpdate.
pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PlayerInputEvent>().add_event::<JumpPerformed>();

        app.add_systems(
            Update,
            (systems::sample_player_input, systems::update_move_direction)
                .chain()
                .in_set(LocomotionSet::Input),
        );

        // Rapier подключается через `in_fixed_schedule()`: его SyncBackend в том же
        // FixedUpdate, kinematic тела забирают Transform уже после integrate
        app.configure_sets(
            FixedUpdate,
            (LocomotionSet::Control, LocomotionSet::Integrate, LocomotionSet::React)
                .chain()
                .before(PhysicsSet::SyncBackend),
        );

        app.add_systems(
            FixedUpdate,
            (
                systems::apply_jump_system,
                systems::rotate_toward_movement_system,
                systems::move_body_system,
            )
                .chain() // jump → rotate → move, порядок важен для Y канала
                .in_set(LocomotionSet::Control),
        );

        app.add_systems(FixedUpdate, systems::log_jumps.in_set(LocomotionSet::React));
    }
}
