//! Демо сцена: земля, игрок с orbit камерой и hit trigger, несколько врагов

use bevy::prelude::*;

use super::integrator::{spawn_enemy, spawn_ground_slab, spawn_player_character};
use crate::components::{CameraLink, HitTrigger};
use crate::shared::OrbitCamera;

/// Радиус hit trigger игрока (m)
pub const PLAYER_HIT_RADIUS: f32 = 1.0;

/// Entity демо сцены
#[derive(Debug, Clone)]
pub struct DemoScene {
    pub player: Entity,
    pub camera: Entity,
    pub ground: Entity,
    pub enemies: Vec<Entity>,
}

/// Spawn демо сцены (плита земли на y=0, враги по кругу)
pub fn spawn_demo_scene(commands: &mut Commands, enemy_count: usize) -> DemoScene {
    let ground = spawn_ground_slab(commands, 0.0, 50.0);

    let player = spawn_player_character(commands, Vec3::ZERO);

    let orbit = OrbitCamera::new(player);
    let camera = commands.spawn((orbit, orbit.pose(Vec3::ZERO))).id();

    commands.entity(player).insert((
        CameraLink { camera },
        // Trigger чуть впереди игрока (+Z тела)
        HitTrigger::new(PLAYER_HIT_RADIUS, Vec3::new(0.0, 0.0, 0.8)),
    ));

    let enemies = (0..enemy_count)
        .map(|i| {
            let angle = i as f32 / enemy_count.max(1) as f32 * std::f32::consts::TAU;
            let position = Vec3::new(angle.cos() * 6.0, 0.0, angle.sin() * 6.0);
            spawn_enemy(commands, position)
        })
        .collect();

    DemoScene {
        player,
        camera,
        ground,
        enemies,
    }
}
