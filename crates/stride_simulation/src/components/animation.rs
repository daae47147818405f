//! Параметры анимации, которые хост отдаёт в свой animation graph

use bevy::prelude::*;

/// Animation parameters (speed / grounded / triggers)
///
/// Пишется только animation bridge системами. Triggers (`roll`, `hit`)
/// живут до тех пор, пока хост их не заберёт через `take_*`.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct AnimationParams {
    /// Горизонтальная скорость (= LocomotionState::ground_speed)
    pub speed: f32,
    /// Результат ground probe на последнем тике
    pub grounded: bool,
    roll: bool,
    hit: bool,
}

impl AnimationParams {
    pub fn trigger_roll(&mut self) {
        self.roll = true;
    }

    pub fn trigger_hit(&mut self) {
        self.hit = true;
    }

    /// Забирает roll trigger (true максимум один раз на trigger_roll)
    pub fn take_roll(&mut self) -> bool {
        std::mem::take(&mut self.roll)
    }

    pub fn take_hit(&mut self) -> bool {
        std::mem::take(&mut self.hit)
    }

    pub fn roll_pending(&self) -> bool {
        self.roll
    }

    pub fn hit_pending(&self) -> bool {
        self.hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triggers_consumed_once() {
        let mut params = AnimationParams::default();
        params.trigger_roll();
        assert!(params.roll_pending());
        assert!(params.take_roll());
        assert!(!params.take_roll());
        assert!(!params.take_hit());
    }
}
