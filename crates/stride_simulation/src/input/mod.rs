//! Player input module
//!
//! # Архитектура
//!
//! ```text
//! Input source (хост или ScriptedInput)
//!     ↓
//! PlayerInputEvent (ECS event) - events.rs
//!     ↓
//! FrameInput (сведение за render frame)
//!     ↓
//! locomotion::sample_player_input → LocomotionState
//! ```

pub mod events;
pub mod scripted;

pub use events::*;
pub use scripted::*;
