//! Scripted input source для headless прогонов
//!
//! Бот "держит" случайный input несколько кадров подряд (как живой игрок),
//! edge для jump/fire считает сам: событие только на переходе released → pressed.
//! Все случайности - из DeterministicRng, поэтому один seed = один прогон.

use bevy::prelude::*;
use rand::Rng;

use super::events::PlayerInputEvent;
use crate::locomotion::LocomotionSet;
use crate::DeterministicRng;

/// Направления, из которых бот выбирает (8 сторон + стоять)
const AXES: [Vec2; 9] = [
    Vec2::ZERO,
    Vec2::new(0.0, 1.0),
    Vec2::new(0.0, -1.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(-1.0, 0.0),
    Vec2::new(0.707, 0.707),
    Vec2::new(-0.707, 0.707),
    Vec2::new(0.707, -0.707),
    Vec2::new(-0.707, -0.707),
];

/// Состояние бота (что сейчас "зажато")
#[derive(Resource, Debug, Clone)]
pub struct ScriptedInput {
    pub axes: Vec2,
    pub run_held: bool,
    pub jump_held: bool,
    pub fire_held: bool,
    /// Сколько кадров ещё держим текущий сегмент
    pub frames_left: u32,
    prev_jump_held: bool,
    prev_fire_held: bool,
}

impl Default for ScriptedInput {
    fn default() -> Self {
        Self {
            axes: Vec2::ZERO,
            run_held: false,
            jump_held: false,
            fire_held: false,
            frames_left: 0,
            prev_jump_held: false,
            prev_fire_held: false,
        }
    }
}

impl ScriptedInput {
    /// Выбирает новый сегмент поведения
    fn reroll(&mut self, rng: &mut impl Rng) {
        self.axes = AXES[rng.gen_range(0..AXES.len())];
        self.run_held = rng.gen_bool(0.3);
        self.jump_held = rng.gen_bool(0.2);
        self.fire_held = rng.gen_bool(0.1);
        self.frames_left = rng.gen_range(20..90);
    }

    /// Один render frame: продвигает сценарий и возвращает событие с edges
    pub fn step(&mut self, rng: &mut impl Rng) -> PlayerInputEvent {
        if self.frames_left == 0 {
            self.reroll(rng);
        }
        self.frames_left = self.frames_left.saturating_sub(1);

        // Кнопки отпускаем на последнем кадре сегмента, чтобы следующий
        // сегмент мог дать новое нажатие
        let jump_held = self.jump_held && self.frames_left > 0;
        let fire_held = self.fire_held && self.frames_left > 0;

        let event = PlayerInputEvent {
            move_axes: self.axes,
            run: self.run_held,
            jump: jump_held && !self.prev_jump_held,
            fire: fire_held && !self.prev_fire_held,
        };

        self.prev_jump_held = jump_held;
        self.prev_fire_held = fire_held;

        event
    }
}

/// Система: бот пишет PlayerInputEvent каждый render frame
pub fn emit_scripted_input(
    mut script: ResMut<ScriptedInput>,
    mut rng: ResMut<DeterministicRng>,
    mut input_events: EventWriter<PlayerInputEvent>,
) {
    let event = script.step(&mut rng.rng);
    input_events.write(event);
}

/// Подключает бота как input source (до LocomotionSet::Input)
pub struct ScriptedInputPlugin;

impl Plugin for ScriptedInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScriptedInput>()
            .add_systems(Update, emit_scripted_input.before(LocomotionSet::Input));
    }
}
