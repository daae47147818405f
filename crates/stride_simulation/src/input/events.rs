//! Player input events
//!
//! Генерируются input source (хост: клавиатура/геймпад, headless: ScriptedInput)
//! и сводятся в один `FrameInput` на render frame.

use bevy::prelude::*;

/// Player input event - один или несколько за frame
///
/// # Fields
/// - `move_axes`: x = horizontal (-1 left → +1 right), y = vertical (-1 back → +1 forward)
/// - `run`: run modifier (hold)
/// - `jump`: just_pressed (edge, не hold!)
/// - `fire`: just_pressed (edge), запускает roll trigger
#[derive(Event, Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerInputEvent {
    pub move_axes: Vec2,
    pub run: bool,
    pub jump: bool,
    pub fire: bool,
}

/// Input одного render frame (после сведения всех событий)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub horizontal: f32,
    pub vertical: f32,
    pub run: bool,
    pub jump_pressed: bool,
    pub fire_pressed: bool,
}

impl FrameInput {
    /// Axes/run - из последнего события; edges - если хоть одно событие их несло.
    /// Нет событий → нулевые оси, кнопки отпущены.
    pub fn from_events<'a>(events: impl IntoIterator<Item = &'a PlayerInputEvent>) -> Self {
        let mut frame = FrameInput::default();

        for event in events {
            frame.horizontal = sanitize_axis(event.move_axes.x);
            frame.vertical = sanitize_axis(event.move_axes.y);
            frame.run = event.run;
            frame.jump_pressed |= event.jump;
            frame.fire_pressed |= event.fire;
        }

        frame
    }
}

/// Clamp в [-1, 1], NaN → 0
fn sanitize_axis(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_events_means_no_input() {
        let none: [PlayerInputEvent; 0] = [];
        let frame = FrameInput::from_events(&none);
        assert_eq!(frame, FrameInput::default());
    }

    #[test]
    fn test_last_axes_win_edges_accumulate() {
        let events = [
            PlayerInputEvent {
                move_axes: Vec2::new(1.0, 0.0),
                jump: true,
                ..default()
            },
            PlayerInputEvent {
                move_axes: Vec2::new(0.0, 1.0),
                run: true,
                ..default()
            },
        ];

        let frame = FrameInput::from_events(&events);
        assert_eq!(frame.horizontal, 0.0);
        assert_eq!(frame.vertical, 1.0);
        assert!(frame.run);
        assert!(frame.jump_pressed);
        assert!(!frame.fire_pressed);
    }

    #[test]
    fn test_axes_sanitized() {
        let events = [PlayerInputEvent {
            move_axes: Vec2::new(f32::NAN, 3.0),
            ..default()
        }];

        let frame = FrameInput::from_events(&events);
        assert_eq!(frame.horizontal, 0.0);
        assert_eq!(frame.vertical, 1.0);
    }
}
