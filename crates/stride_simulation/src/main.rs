//! Headless симуляция STRIDE
//!
//! Гоняет демо сцену с ботом вместо игрока: render frame = `app.update()`,
//! physics tick = FixedUpdate, clock ручной (1/60 sec на кадр).
//!
//! Usage: `stride_simulation [seed] [frames]`

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use stride_simulation::{
    create_headless_app, log_info, spawn_demo_scene, FlatGround, KinematicBodyPlugin, LocomotionState, Scoreboard,
    ScriptedInputPlugin, SimulationPlugin,
};

fn main() {
    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(42);
    let frames: u32 = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(1000);

    let mut app = create_headless_app(seed);
    log_info(&format!("Starting STRIDE headless simulation (seed: {}, frames: {})", seed, frames));

    app.add_plugins((
        bevy::transform::TransformPlugin,
        // Rapier step в том же FixedUpdate, после LocomotionSet
        RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule(),
        SimulationPlugin,
        KinematicBodyPlugin,
        ScriptedInputPlugin,
    ))
    .insert_resource(FlatGround { height: 0.0 });

    let scene = spawn_demo_scene(&mut app.world_mut().commands(), 6);
    app.world_mut().flush();

    for frame in 0..frames {
        app.update();

        if frame % 100 == 0 {
            let world = app.world();
            let Some(transform) = world.get::<Transform>(scene.player) else {
                continue;
            };
            let Some(state) = world.get::<LocomotionState>(scene.player) else {
                continue;
            };
            let score = world.resource::<Scoreboard>().total();

            log_info(&format!(
                "Frame {}: position {:.2?}, ground speed {:.1}, score {}",
                frame,
                transform.translation,
                state.ground_speed(),
                score
            ));
        }
    }

    log_info(&format!(
        "Simulation complete! Final score: {}",
        app.world().resource::<Scoreboard>().total()
    ));
}
