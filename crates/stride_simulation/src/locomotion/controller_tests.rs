//! Tests for locomotion controller logic.

use bevy::prelude::*;

use super::controller::*;
use super::ground::{FlatGround, GroundProbe};
use crate::components::{LocomotionConfig, LocomotionState, PhysicsBody};
use crate::input::FrameInput;
use crate::shared::CameraBasis;

/// Probe с фиксированным ответом (без физики)
struct FixedProbe(Option<f32>);

impl GroundProbe for FixedProbe {
    fn cast_down(&self, _body: Entity, _origin: Vec3, max_distance: f32) -> Option<f32> {
        self.0.filter(|distance| *distance <= max_distance)
    }
}

fn moving_state(direction: Vec3, run_held: bool) -> LocomotionState {
    LocomotionState {
        move_direction: direction,
        run_held,
        ..default()
    }
}

// ---------------------------------------------------------------------------
// sample_input
// ---------------------------------------------------------------------------

#[test]
fn test_sample_input_sets_axes_and_latch() {
    let mut state = LocomotionState::default();
    let input = FrameInput {
        horizontal: -0.5,
        vertical: 1.0,
        run: true,
        jump_pressed: true,
        fire_pressed: false,
    };

    sample_input(&mut state, &input);

    assert_eq!(state.horizontal_input, -0.5);
    assert_eq!(state.vertical_input, 1.0);
    assert!(state.run_held);
    assert!(state.jump_requested);
}

#[test]
fn test_sample_input_never_clears_latch() {
    let mut state = LocomotionState {
        jump_requested: true,
        ..default()
    };

    // Кадр без нажатия - latch остаётся
    sample_input(&mut state, &FrameInput::default());
    assert!(state.jump_requested);
}

// ---------------------------------------------------------------------------
// compute_move_direction
// ---------------------------------------------------------------------------

#[test]
fn test_zero_input_gives_zero_direction() {
    let direction = compute_move_direction(0.0, 0.0, None);
    assert_eq!(direction, Vec3::ZERO);
    assert!(!direction.is_nan());

    let camera = CameraBasis::from_transform(&Transform::IDENTITY);
    let direction = compute_move_direction(0.0, 0.0, Some(camera));
    assert_eq!(direction, Vec3::ZERO);
}

#[test]
fn test_nonzero_input_is_unit_length() {
    let inputs = [
        (1.0, 0.0),
        (0.0, -1.0),
        (0.3, 0.4),
        (-1.0, 1.0),
        (0.01, 0.0),
        (-0.2, -0.9),
    ];
    let camera = CameraBasis::from_transform(
        &Transform::from_xyz(4.0, 3.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    );

    for (h, v) in inputs {
        let world = compute_move_direction(h, v, None);
        assert!((world.length() - 1.0).abs() < 1e-5, "h={}, v={}: {:?}", h, v, world);

        let relative = compute_move_direction(h, v, Some(camera));
        assert!((relative.length() - 1.0).abs() < 1e-5, "h={}, v={}: {:?}", h, v, relative);
        assert_eq!(relative.y, 0.0);
    }
}

#[test]
fn test_forward_without_camera_is_world_z() {
    let direction = compute_move_direction(0.0, 1.0, None);
    assert_eq!(direction, Vec3::new(0.0, 0.0, 1.0));
}

#[test]
fn test_camera_relative_forward() {
    // Камера смотрит вдоль +X (и немного вниз) → "вперёд" = +X
    let camera_transform = Transform::from_xyz(-5.0, 3.0, 0.0).looking_at(Vec3::ZERO, Vec3::Y);
    let camera = CameraBasis::from_transform(&camera_transform);

    let forward = compute_move_direction(0.0, 1.0, Some(camera));
    assert!((forward - Vec3::X).length() < 1e-5, "forward = {:?}", forward);

    // Right камеры, смотрящей вдоль +X, = +Z
    let right = compute_move_direction(1.0, 0.0, Some(camera));
    assert!((right - Vec3::Z).length() < 1e-5, "right = {:?}", right);
}

#[test]
fn test_degenerate_camera_forward_contributes_zero() {
    // Камера смотрит строго вниз: forward после flatten = 0
    let camera = CameraBasis {
        forward: Vec3::NEG_Y,
        right: Vec3::X,
    };

    let only_forward = compute_move_direction(0.0, 1.0, Some(camera));
    assert_eq!(only_forward, Vec3::ZERO);

    // Right ось всё ещё работает
    let mixed = compute_move_direction(1.0, 1.0, Some(camera));
    assert!((mixed - Vec3::X).length() < 1e-6);
    assert!(!mixed.is_nan());
}

// ---------------------------------------------------------------------------
// apply_jump
// ---------------------------------------------------------------------------

#[test]
fn test_jump_airborne_keeps_latch_and_velocity() {
    let config = LocomotionConfig::default();
    let mut state = LocomotionState {
        jump_requested: true,
        ..default()
    };
    let mut body = PhysicsBody {
        velocity: Vec3::new(1.0, -3.0, 2.0),
        ..default()
    };

    assert!(!apply_jump(&mut state, &mut body, false, &config));
    assert!(state.jump_requested);
    assert_eq!(body.velocity.y, -3.0);
}

#[test]
fn test_buffered_jump_fires_once_when_grounded() {
    let config = LocomotionConfig::default();
    let mut state = LocomotionState {
        jump_requested: true,
        ..default()
    };
    let mut body = PhysicsBody::default();

    // Несколько тиков в воздухе
    for _ in 0..5 {
        assert!(!apply_jump(&mut state, &mut body, false, &config));
    }
    assert!(state.jump_requested);

    // Приземлились → импульс
    assert!(apply_jump(&mut state, &mut body, true, &config));
    assert!(!state.jump_requested);
    assert!((body.velocity.y - config.jump_impulse / body.mass).abs() < 1e-5);

    // Второго импульса без нового нажатия нет
    let velocity_after = body.velocity.y;
    assert!(!apply_jump(&mut state, &mut body, true, &config));
    assert_eq!(body.velocity.y, velocity_after);
}

#[test]
fn test_grounded_without_request_is_noop() {
    let config = LocomotionConfig::default();
    let mut state = LocomotionState::default();
    let mut body = PhysicsBody::default();

    assert!(!apply_jump(&mut state, &mut body, true, &config));
    assert_eq!(body.velocity, Vec3::ZERO);
}

// ---------------------------------------------------------------------------
// rotate_toward_movement
// ---------------------------------------------------------------------------

#[test]
fn test_rotation_dead_zone() {
    let config = LocomotionConfig::default();
    let initial = Quat::from_rotation_y(0.7);
    let mut rotation = initial;

    // |dir|² = 0.005 < 0.01
    let direction = Vec3::new(0.005_f32.sqrt(), 0.0, 0.0);
    assert!((direction.length_squared() - 0.005).abs() < 1e-6);

    rotate_toward_movement(&mut rotation, direction, 1.0 / 60.0, &config);
    assert_eq!(rotation, initial);
}

#[test]
fn test_rotation_converges_to_direction() {
    let config = LocomotionConfig::default();
    let mut rotation = Quat::IDENTITY;
    let direction = Vec3::X;

    for _ in 0..120 {
        rotate_toward_movement(&mut rotation, direction, 1.0 / 60.0, &config);
    }

    // +Z тела смотрит вдоль direction
    let facing = rotation * Vec3::Z;
    assert!((facing - direction).length() < 1e-3, "facing = {:?}", facing);
}

#[test]
fn test_rotation_step_is_partial() {
    let config = LocomotionConfig::default();
    let mut rotation = Quat::IDENTITY;

    rotate_toward_movement(&mut rotation, Vec3::X, 1.0 / 60.0, &config);

    let angle = rotation.angle_between(Quat::IDENTITY);
    assert!(angle > 0.0);
    assert!(angle < std::f32::consts::FRAC_PI_2);
}

#[test]
fn test_facing_rotation_backward() {
    // Разворот на 180° - вокруг Y, без кувырка
    let rotation = facing_rotation(Vec3::NEG_Z);
    let facing = rotation * Vec3::Z;
    let up = rotation * Vec3::Y;

    assert!((facing - Vec3::NEG_Z).length() < 1e-5);
    assert!((up - Vec3::Y).length() < 1e-5);
}

// ---------------------------------------------------------------------------
// move_body
// ---------------------------------------------------------------------------

#[test]
fn test_walk_forward_scenario() {
    // h=0, v=1, без камеры, walk 5 → velocity (0, y, 5)
    let config = LocomotionConfig {
        walk_speed: 5.0,
        ..default()
    };
    let mut state = LocomotionState::default();
    sample_input(
        &mut state,
        &FrameInput {
            vertical: 1.0,
            ..default()
        },
    );
    state.move_direction = compute_move_direction(state.horizontal_input, state.vertical_input, None);
    assert_eq!(state.move_direction, Vec3::new(0.0, 0.0, 1.0));

    let mut body = PhysicsBody {
        velocity: Vec3::new(0.0, -1.25, 0.0),
        ..default()
    };
    move_body(&mut state, &mut body, &config);

    assert_eq!(body.velocity, Vec3::new(0.0, -1.25, 5.0));
    assert_eq!(state.ground_speed(), 5.0);
}

#[test]
fn test_vertical_velocity_bit_identical() {
    let config = LocomotionConfig::default();
    let values = [0.0_f32, -0.0, 1.0e-30, -9.81, 4.999_999, f32::MIN_POSITIVE];

    for y in values {
        let mut state = moving_state(Vec3::new(0.6, 0.0, 0.8), true);
        let mut body = PhysicsBody {
            velocity: Vec3::new(3.0, y, -7.0),
            ..default()
        };

        move_body(&mut state, &mut body, &config);
        assert_eq!(body.velocity.y.to_bits(), y.to_bits());
    }
}

#[test]
fn test_ground_speed_selection() {
    let config = LocomotionConfig::default();
    let mut body = PhysicsBody::default();

    let mut idle = moving_state(Vec3::ZERO, true);
    move_body(&mut idle, &mut body, &config);
    assert_eq!(idle.ground_speed(), 0.0);
    assert_eq!(body.velocity.x, 0.0);
    assert_eq!(body.velocity.z, 0.0);

    let mut running = moving_state(Vec3::X, true);
    move_body(&mut running, &mut body, &config);
    assert_eq!(running.ground_speed(), config.run_speed);

    let mut walking = moving_state(Vec3::X, false);
    move_body(&mut walking, &mut body, &config);
    assert_eq!(walking.ground_speed(), config.walk_speed);
}

#[test]
fn test_speed_multiplier_scales_velocity_not_ground_speed() {
    let config = LocomotionConfig {
        speed_multiplier: 0.5,
        ..default()
    };
    let mut state = moving_state(Vec3::Z, false);
    let mut body = PhysicsBody::default();

    move_body(&mut state, &mut body, &config);
    assert_eq!(body.velocity.z, config.walk_speed * 0.5);
    assert_eq!(state.ground_speed(), config.walk_speed);
}

// ---------------------------------------------------------------------------
// is_grounded
// ---------------------------------------------------------------------------

#[test]
fn test_is_grounded_uses_probe_distance() {
    let config = LocomotionConfig::default();

    assert!(is_grounded(&FixedProbe(Some(0.15)), Entity::PLACEHOLDER, Vec3::ZERO, &config));
    assert!(!is_grounded(&FixedProbe(Some(0.25)), Entity::PLACEHOLDER, Vec3::ZERO, &config));
    assert!(!is_grounded(&FixedProbe(None), Entity::PLACEHOLDER, Vec3::ZERO, &config));
}

#[test]
fn test_is_grounded_on_flat_ground() {
    let config = LocomotionConfig::default();
    let ground = FlatGround { height: 0.0 };

    // Стоим на земле: probe origin 0.1 над ней
    assert!(is_grounded(&ground, Entity::PLACEHOLDER, Vec3::ZERO, &config));
    // Чуть выше - в пределах probe
    assert!(is_grounded(&ground, Entity::PLACEHOLDER, Vec3::Y * 0.05, &config));
    // Высоко в воздухе
    assert!(!is_grounded(&ground, Entity::PLACEHOLDER, Vec3::Y * 1.0, &config));
}
