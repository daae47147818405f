//! Locomotion контроллер - чистая логика без ECS
//!
//! Все входы передаются явно (включая `dt`), поэтому каждую операцию
//! можно гонять в тестах без App. Bevy системы в `systems.rs` только
//! достают компоненты и зовут эти функции.
//!
//! Порядок на physics tick: `apply_jump` → `rotate_toward_movement` → `move_body`.
//! Y-компонента velocity горизонтальной логикой только читается и пишется обратно.

use bevy::prelude::*;

use super::ground::GroundProbe;
use crate::components::{LocomotionConfig, LocomotionState, PhysicsBody};
use crate::input::FrameInput;
use crate::shared::CameraBasis;

/// Render frame: записывает оси/run, ставит jump latch на edge
///
/// Latch НЕ сбрасывается здесь - только `apply_jump` после импульса.
pub fn sample_input(state: &mut LocomotionState, input: &FrameInput) {
    state.horizontal_input = input.horizontal;
    state.vertical_input = input.vertical;
    state.run_held = input.run;

    if input.jump_pressed {
        state.jump_requested = true;
    }
}

/// Render frame: направление движения в world space (unit или zero)
///
/// Без камеры: (h, 0, v). С камерой: forward/right проецируются на XZ;
/// вырожденная ось (камера смотрит строго вниз/вверх) даёт ноль, а не NaN.
pub fn compute_move_direction(horizontal: f32, vertical: f32, camera: Option<CameraBasis>) -> Vec3 {
    let raw = match camera {
        None => Vec3::new(horizontal, 0.0, vertical),
        Some(basis) => {
            let forward = flatten(basis.forward);
            let right = flatten(basis.right);
            forward * vertical + right * horizontal
        }
    };

    raw.normalize_or_zero()
}

/// Проекция на горизонтальную плоскость + normalize (zero если вырождено)
fn flatten(axis: Vec3) -> Vec3 {
    Vec3::new(axis.x, 0.0, axis.z).normalize_or_zero()
}

/// Physics tick: прыжок, если запрошен и есть опора
///
/// Возвращает true если импульс применён. Без опоры запрос остаётся
/// в latch до первого тика с grounded == true (таймаута нет).
pub fn apply_jump(
    state: &mut LocomotionState,
    body: &mut PhysicsBody,
    grounded: bool,
    config: &LocomotionConfig,
) -> bool {
    if !(state.jump_requested && grounded) {
        return false;
    }

    body.apply_impulse(Vec3::Y * config.jump_impulse);
    state.jump_requested = false;
    true
}

/// Yaw rotation, у которой +Z смотрит вдоль `direction` (up = world Y)
pub fn facing_rotation(direction: Vec3) -> Quat {
    Quat::from_rotation_y(direction.x.atan2(direction.z))
}

/// Physics tick: плавный поворот тела к направлению движения
///
/// Ниже dead zone (`|dir|² <= rotation_dead_zone_sq`) поворот не трогаем -
/// тело остаётся смотреть туда, куда смотрело (без snap back).
pub fn rotate_toward_movement(
    rotation: &mut Quat,
    move_direction: Vec3,
    dt: f32,
    config: &LocomotionConfig,
) {
    if move_direction.length_squared() <= config.rotation_dead_zone_sq {
        return;
    }

    let target = facing_rotation(move_direction);
    let t = (config.rotation_speed * dt).clamp(0.0, 1.0);
    *rotation = rotation.slerp(target, t).normalize();
}

/// Physics tick: горизонтальная velocity + ground_speed
///
/// velocity.y читается и пишется обратно без изменений
/// (gravity/jump integration принадлежит физике).
pub fn move_body(state: &mut LocomotionState, body: &mut PhysicsBody, config: &LocomotionConfig) {
    let speed = config.selected_speed(state.run_held);

    state.set_ground_speed(if state.is_moving() { speed } else { 0.0 });

    let horizontal = state.move_direction * speed * config.speed_multiplier;
    let vertical = body.velocity.y;

    body.velocity = Vec3::new(horizontal.x, vertical, horizontal.z);
}

/// Точка старта ground probe: чуть выше origin тела
pub fn probe_origin(body_origin: Vec3, config: &LocomotionConfig) -> Vec3 {
    body_origin + Vec3::Y * config.ground_probe_offset
}

/// Query: есть ли опора под телом (без кэша, каждый вызов - новый probe)
pub fn is_grounded(
    probe: &impl GroundProbe,
    body: Entity,
    body_origin: Vec3,
    config: &LocomotionConfig,
) -> bool {
    probe
        .cast_down(body, probe_origin(body_origin, config), config.ground_probe_distance)
        .is_some()
}
