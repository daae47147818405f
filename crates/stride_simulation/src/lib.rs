//! STRIDE Simulation Core
//!
//! Third-person character controller на Bevy 0.16 ECS:
//! - locomotion: input → camera-relative движение, поворот, прыжок с ground probe
//! - animation: мост locomotion → AnimationParams
//! - combat: hit trigger → реакция врага → Scoreboard
//! - physics: headless интегратор тела (хост со своим solver'ом его не подключает)
//!
//! Render frame = `Update`, physics tick = `FixedUpdate` (60Hz).
//! `dt` передаётся в controller функции явно.

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

// Публичные модули
pub mod animation;
pub mod combat;
pub mod components;
pub mod input;
pub mod locomotion;
pub mod logger;
pub mod physics;
pub mod shared;

// Re-export базовых типов для удобства
pub use animation::AnimationBridgePlugin;
pub use combat::{CombatPlugin, GotHit, ScoreChanged, ScorePlugin, ScoreText, Scoreboard, ENEMY_HIT_SCORE};
pub use components::*;
pub use input::{FrameInput, PlayerInputEvent, ScriptedInput, ScriptedInputPlugin};
pub use locomotion::{FlatGround, GroundProbe, JumpPerformed, LocomotionPlugin, LocomotionSet};
pub use logger::{init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger, LogLevel, LogPrinter};
pub use physics::{
    spawn_demo_scene, spawn_enemy, spawn_ground_slab, spawn_player_character, DemoScene, KinematicBodyPlugin,
};
pub use shared::{CameraBasis, OrbitCamera};

/// Частота physics tick
pub const FIXED_HZ: f64 = 60.0;

/// Длительность одного physics tick (и одного кадра headless clock)
pub fn fixed_timestep() -> Duration {
    Duration::from_secs_f64(1.0 / FIXED_HZ)
}

/// Главный plugin симуляции (объединяет все подсистемы)
///
/// Headless интегратор (KinematicBodyPlugin) сюда не входит: хост с
/// собственной физикой добавляет только SimulationPlugin.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(FIXED_HZ));

        // Seed мог поставить create_headless_app - не перетираем
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        app.add_plugins((LocomotionPlugin, AnimationBridgePlugin, CombatPlugin))
            .add_systems(Update, shared::update_orbit_camera.after(LocomotionSet::Input));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Frame clock ручной: каждый `app.update()` = ровно один fixed tick
/// (кроме самого первого, где Time ещё инициализируется).
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(FIXED_HZ))
        .insert_resource(TimeUpdateStrategy::ManualDuration(fixed_timestep()));

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
