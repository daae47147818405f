//! Combat компоненты: hit trigger, враги, реакция на попадание

use bevy::prelude::*;
use std::collections::HashSet;

/// Длительность реакции на попадание (секунды)
pub const HIT_REACTION_DURATION: f32 = 0.5;

/// Marker: entity - враг (цель для HitTrigger)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Enemy;

/// Trigger volume (сфера) на атакующем
///
/// Срабатывает на ENTER: враг, который уже внутри, повторно не бьётся,
/// пока не выйдет и не войдёт снова.
#[derive(Component, Debug, Clone, Default)]
pub struct HitTrigger {
    /// Радиус сферы (m)
    pub radius: f32,
    /// Смещение центра в local space атакующего (поворачивается вместе с ним)
    pub offset: Vec3,
    /// Кто был внутри на прошлом тике
    pub(crate) overlapping: HashSet<Entity>,
}

impl HitTrigger {
    pub fn new(radius: f32, offset: Vec3) -> Self {
        Self {
            radius,
            offset,
            overlapping: HashSet::new(),
        }
    }

    pub fn is_overlapping(&self, target: Entity) -> bool {
        self.overlapping.contains(&target)
    }
}

/// Реакция врага на попадание (таймер анимации "hit")
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct HitReaction {
    /// Осталось секунд (0 = не реагирует)
    pub remaining: f32,
    /// Сколько раз по нему попали
    pub hits_taken: u32,
}

impl HitReaction {
    pub fn trigger(&mut self) {
        self.remaining = HIT_REACTION_DURATION;
        self.hits_taken = self.hits_taken.saturating_add(1);
    }

    pub fn tick(&mut self, delta: f32) {
        if self.remaining > 0.0 {
            self.remaining = (self.remaining - delta).max(0.0);
        }
    }

    pub fn is_reacting(&self) -> bool {
        self.remaining > 0.0
    }
}
