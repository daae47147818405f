//! Shared domain - cross-cutting типы
//!
//! - Camera (CameraBasis, OrbitCamera)
//! - Collision groups (actors/environment/triggers)

pub mod camera;
pub mod collision;

pub use camera::*;
pub use collision::*;
