//! Физическое тело персонажа (velocity + mass)
//!
//! Позиция/поворот - обычный bevy `Transform`. Velocity держим сами:
//! locomotion пишет горизонталь, интегратор (или хост) - вертикаль.

use bevy::prelude::*;

/// Линейная скорость и масса тела
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PhysicsBody {
    /// m/s, world space
    pub velocity: Vec3,
    /// kg
    pub mass: f32,
}

impl Default for PhysicsBody {
    fn default() -> Self {
        Self {
            velocity: Vec3::ZERO,
            mass: 70.0,
        }
    }
}

impl PhysicsBody {
    /// Мгновенное изменение скорости: Δv = impulse / mass
    pub fn apply_impulse(&mut self, impulse: Vec3) {
        if self.mass > 0.0 {
            self.velocity += impulse / self.mass;
        }
    }
}

/// Настройки headless интегратора (замена host physics solver)
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct KinematicBodyConfig {
    /// m/s², отрицательная = вниз
    pub gravity: f32,
    /// Откуда (выше origin) ищем поверхность после интеграции.
    /// Должно покрывать проникновение за один тик на максимальной скорости падения.
    pub contact_probe_height: f32,
    /// Зазор, внутри которого тело считается стоящим на поверхности
    pub contact_tolerance: f32,
}

impl Default for KinematicBodyConfig {
    fn default() -> Self {
        Self {
            gravity: -9.81,        // Earth gravity
            contact_probe_height: 0.5,
            contact_tolerance: 0.01,
        }
    }
}
