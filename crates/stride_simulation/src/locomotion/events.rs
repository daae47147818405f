//! Locomotion events

use bevy::prelude::*;

/// Event: прыжок состоялся (импульс применён)
///
/// Генерируется: apply_jump_system, один раз на нажатие
/// Обрабатывается: логгер, хост (звук/VFX)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct JumpPerformed {
    pub entity: Entity,
    /// Вертикальная скорость сразу после импульса
    pub velocity_y: f32,
}
