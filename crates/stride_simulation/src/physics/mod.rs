//! Physics module
//!
//! Headless интегратор тела + spawn helpers (Rapier коллайдеры) + демо сцена.

pub mod integrator;
pub mod scene;

// Re-export основных типов
pub use integrator::{
    ground_contact, spawn_enemy, spawn_ground_slab, spawn_player_character, KinematicBodyPlugin,
};
pub use scene::{spawn_demo_scene, DemoScene, PLAYER_HIT_RADIUS};
