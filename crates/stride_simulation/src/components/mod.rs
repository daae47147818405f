//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - player: player control marker (Player)
//! - locomotion: настройки и состояние контроллера (LocomotionConfig, LocomotionState, CameraLink)
//! - body: физическое тело (PhysicsBody, KinematicBodyConfig)
//! - animation: параметры для animation graph (AnimationParams)
//! - combat: hit trigger, враги, реакция (HitTrigger, Enemy, HitReaction)

pub mod animation;
pub mod body;
pub mod combat;
pub mod locomotion;
pub mod player;

// Re-exports для удобного импорта
pub use animation::*;
pub use body::*;
pub use combat::*;
pub use locomotion::*;
pub use player::*;
