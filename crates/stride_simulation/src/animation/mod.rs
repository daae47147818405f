//! Animation bridge
//!
//! Переносит состояние locomotion в AnimationParams (speed, grounded).
//! Roll trigger ставит sample_player_input, hit trigger - реакция на попадание.
//! Обратно в locomotion ничего не пишет.

use bevy::prelude::*;

use crate::components::{AnimationParams, LocomotionConfig, LocomotionState};
use crate::locomotion::{controller, GroundSensor, LocomotionSet};

/// Система: speed + свежий ground probe → AnimationParams
///
/// Entity без AnimationParams просто не попадают в query.
pub fn update_animation_params(
    mut query: Query<(Entity, &LocomotionConfig, &LocomotionState, &Transform, &mut AnimationParams)>,
    ground: GroundSensor,
) {
    for (entity, config, state, transform, mut params) in query.iter_mut() {
        params.speed = state.ground_speed();
        params.grounded = controller::is_grounded(&ground, entity, transform.translation, config);
    }
}

pub struct AnimationBridgePlugin;

impl Plugin for AnimationBridgePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, update_animation_params.in_set(LocomotionSet::React));
    }
}
