//! Locomotion компоненты: настройки контроллера и его per-frame состояние

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Настройки locomotion контроллера
///
/// Значения по умолчанию подобраны под персонажа ~1.8m (capsule, origin в ногах).
/// Serde - чтобы хост мог хранить пресеты (walk/run профили) вне кода.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct LocomotionConfig {
    /// Скорость шага (m/s)
    pub walk_speed: f32,
    /// Скорость бега (m/s), пока зажат run
    pub run_speed: f32,
    /// Общий множитель горизонтальной скорости (баффы/дебаффы)
    pub speed_multiplier: f32,
    /// Скорость поворота к направлению движения (доля slerp в секунду)
    pub rotation_speed: f32,
    /// Импульс прыжка (N·s), Δv = impulse / mass
    pub jump_impulse: f32,
    /// Насколько выше origin стартует ground probe (m)
    pub ground_probe_offset: f32,
    /// Максимальная длина ground probe вниз (m)
    pub ground_probe_distance: f32,
    /// Dead zone поворота: |direction|² ниже порога → не поворачиваем
    pub rotation_dead_zone_sq: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            walk_speed: 5.0,
            run_speed: 8.0,
            speed_multiplier: 1.0,
            rotation_speed: 10.0,
            jump_impulse: 350.0, // 70kg → 5 m/s
            ground_probe_offset: 0.1,
            ground_probe_distance: 0.2,
            rotation_dead_zone_sq: 0.01,
        }
    }
}

impl LocomotionConfig {
    /// Скорость для текущего режима (walk/run), без multiplier
    pub fn selected_speed(&self, run_held: bool) -> f32 {
        if run_held {
            self.run_speed
        } else {
            self.walk_speed
        }
    }
}

/// Состояние locomotion контроллера
///
/// Владелец - только контроллер. Input часть пишется раз в render frame,
/// `ground_speed` - раз в physics tick.
///
/// Инварианты:
/// - `move_direction` либо unit-length, либо `Vec3::ZERO`
/// - `jump_requested` даёт максимум один импульс на одно нажатие
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct LocomotionState {
    /// [-1, 1], strafe
    pub horizontal_input: f32,
    /// [-1, 1], forward/back
    pub vertical_input: f32,
    /// Run modifier (hold)
    pub run_held: bool,
    /// Latch: ставится на rising edge jump, снимается только после импульса
    pub jump_requested: bool,
    /// Направление движения в world space (unit или zero)
    pub move_direction: Vec3,
    pub(crate) ground_speed: f32,
}

impl LocomotionState {
    /// Текущая горизонтальная скорость (для animation bridge)
    pub fn ground_speed(&self) -> f32 {
        self.ground_speed
    }

    pub(crate) fn set_ground_speed(&mut self, speed: f32) {
        self.ground_speed = speed;
    }

    pub fn is_moving(&self) -> bool {
        self.move_direction != Vec3::ZERO
    }
}

/// Слабая ссылка на камеру, относительно которой считается движение
///
/// Если entity камеры пропал (или у него нет Transform) - движение
/// в world осях, без ошибок.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct CameraLink {
    pub camera: Entity,
}
