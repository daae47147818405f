//! Player control marker component
//!
//! Отмечает entity которым управляет игрок через input.

use bevy::prelude::Component;

/// Marker component для player-controlled entity
///
/// Input systems используют `With<Player>` filter: PlayerInputEvent
/// попадает только в LocomotionState игрока.
///
/// # Single-player
/// В single-player режиме только один entity имеет этот компонент.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;
