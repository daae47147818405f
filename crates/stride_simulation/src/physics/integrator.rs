//! Headless интегратор тела (замена host physics solver)
//!
//! Архитектура:
//! - Rapier для коллизий/raycast (RigidBody::KinematicPositionBased)
//! - Velocity интегрируем сами: gravity → position → ground contact
//! - Locomotion пишет только горизонталь, Y канал целиком здесь
//!
//! Детерминизм: fixed timestep (60Hz), без зависимости от wall clock.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::components::{KinematicBodyConfig, PhysicsBody};
use crate::locomotion::{GroundProbe, GroundSensor};

/// Система: gravity → velocity.y
///
/// Гравитация применяется всегда; на земле её съедает resolve_ground_contact.
pub fn apply_gravity(mut query: Query<(&KinematicBodyConfig, &mut PhysicsBody)>, time: Res<Time<Fixed>>) {
    let delta = time.delta_secs();

    for (config, mut body) in query.iter_mut() {
        body.velocity.y += config.gravity * delta;
    }
}

/// Система: position += velocity * dt
pub fn integrate_velocity_to_transform(
    mut query: Query<(&PhysicsBody, &mut Transform), With<KinematicBodyConfig>>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (body, mut transform) in query.iter_mut() {
        transform.translation += body.velocity * delta;
    }
}

/// Контакт с опорой после интеграции
///
/// Возвращает новую высоту, если тело движется вниз (или стоит) и
/// оказалось на/под поверхностью. `None` - контакта нет.
pub fn ground_contact(
    probe: &impl GroundProbe,
    entity: Entity,
    position: Vec3,
    velocity_y: f32,
    config: &KinematicBodyConfig,
) -> Option<f32> {
    if velocity_y > 0.0 {
        return None;
    }

    let origin = position + Vec3::Y * config.contact_probe_height;
    let max_distance = config.contact_probe_height + config.contact_tolerance;
    let distance = probe.cast_down(entity, origin, max_distance)?;
    let surface = origin.y - distance;

    (position.y <= surface + config.contact_tolerance).then_some(surface)
}

/// Система: snap на поверхность + гасим падение
pub fn resolve_ground_contact(
    mut query: Query<(Entity, &KinematicBodyConfig, &mut PhysicsBody, &mut Transform)>,
    ground: GroundSensor,
) {
    for (entity, config, mut body, mut transform) in query.iter_mut() {
        let Some(surface) = ground_contact(&ground, entity, transform.translation, body.velocity.y, config) else {
            continue;
        };

        transform.translation.y = surface;
        body.velocity.y = 0.0;
    }
}

/// Plugin headless интегратора
///
/// Регистрирует системы в `LocomotionSet::Integrate` (после control).
/// Хост со своим solver'ом этот plugin просто не добавляет.
pub struct KinematicBodyPlugin;

impl Plugin for KinematicBodyPlugin {
    fn build(&self, app: &mut App) {
        use crate::locomotion::LocomotionSet;

        app.add_systems(
            FixedUpdate,
            (apply_gravity, integrate_velocity_to_transform, resolve_ground_contact)
                .chain() // Последовательное выполнение
                .in_set(LocomotionSet::Integrate),
        );
    }
}

/// Высота capsule персонажа (m): origin в ногах, collider смещён вверх
const CAPSULE_HALF_HEIGHT: f32 = 0.5;
const CAPSULE_RADIUS: f32 = 0.4;

/// Spawn helper для тела с kinematic физикой
///
/// Создает entity с:
/// - Transform (origin = ноги)
/// - PhysicsBody + KinematicBodyConfig
/// - Rapier: RigidBody + child Collider (capsule, центр на высоте 0.9m)
fn spawn_kinematic_body(commands: &mut Commands, position: Vec3, groups: CollisionGroups) -> Entity {
    let body = commands
        .spawn((
            Transform::from_translation(position),
            PhysicsBody::default(),
            KinematicBodyConfig::default(),
            RigidBody::KinematicPositionBased,
        ))
        .id();

    commands.entity(body).with_children(|parent| {
        parent.spawn((
            Transform::from_xyz(0.0, CAPSULE_HALF_HEIGHT + CAPSULE_RADIUS, 0.0),
            Collider::capsule_y(CAPSULE_HALF_HEIGHT, CAPSULE_RADIUS),
            groups,
        ));
    });

    body
}

/// Spawn игрока: тело + locomotion + animation params
pub fn spawn_player_character(commands: &mut Commands, position: Vec3) -> Entity {
    use crate::components::{AnimationParams, LocomotionConfig, LocomotionState, Player};

    let entity = spawn_kinematic_body(commands, position, crate::shared::actor_groups());

    commands.entity(entity).insert((
        Player,
        LocomotionConfig::default(),
        LocomotionState::default(),
        AnimationParams::default(),
    ));

    entity
}

/// Spawn врага: тело + Enemy tag + реакция на попадания
pub fn spawn_enemy(commands: &mut Commands, position: Vec3) -> Entity {
    use crate::components::{AnimationParams, Enemy, HitReaction};

    let entity = spawn_kinematic_body(commands, position, crate::shared::actor_groups());

    commands
        .entity(entity)
        .insert((Enemy, HitReaction::default(), AnimationParams::default()));

    entity
}

/// Spawn статичной плиты земли (верхняя грань на `top_height`)
pub fn spawn_ground_slab(commands: &mut Commands, top_height: f32, half_extent: f32) -> Entity {
    const HALF_THICKNESS: f32 = 0.5;

    commands
        .spawn((
            Transform::from_xyz(0.0, top_height - HALF_THICKNESS, 0.0),
            RigidBody::Fixed,
            Collider::cuboid(half_extent, HALF_THICKNESS, half_extent),
            crate::shared::environment_groups(),
        ))
        .id()
}
