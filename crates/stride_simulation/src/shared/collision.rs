//! Collision groups - centralised для всего проекта
//!
//! - GROUP_2: Actors (player, enemies)
//! - GROUP_3: Environment (ground, walls, obstacles)

use bevy_rapier3d::prelude::{CollisionGroups, Group};

pub const GROUP_ACTORS: Group = Group::GROUP_2;
pub const GROUP_ENVIRONMENT: Group = Group::GROUP_3;

/// Actors коллайдят с actors + environment
pub fn actor_groups() -> CollisionGroups {
    CollisionGroups::new(GROUP_ACTORS, GROUP_ACTORS | GROUP_ENVIRONMENT)
}

/// Environment коллайдит с actors + environment
pub fn environment_groups() -> CollisionGroups {
    CollisionGroups::new(GROUP_ENVIRONMENT, GROUP_ACTORS | GROUP_ENVIRONMENT)
}

/// Маска для ground probe: опора = environment + другие actors (можно стоять на враге)
pub fn ground_probe_mask() -> Group {
    GROUP_ACTORS | GROUP_ENVIRONMENT
}
