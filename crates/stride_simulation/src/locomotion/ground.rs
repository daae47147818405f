//! Ground probe - луч вниз от тела
//!
//! Backends:
//! - Rapier query pipeline (`ReadRapierContext`), если в App есть RapierPhysicsPlugin
//! - `FlatGround` resource - аналитическая плоскость для headless прогонов
//!
//! Если оба есть - берём ближайшее попадание.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::shared::ground_probe_mask;

/// Луч строго вниз от `origin` длиной `max_distance`
///
/// Возвращает расстояние до первой опоры (само тело не учитывается).
pub trait GroundProbe {
    fn cast_down(&self, body: Entity, origin: Vec3, max_distance: f32) -> Option<f32>;
}

/// Бесконечная горизонтальная плоскость на высоте `height`
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct FlatGround {
    pub height: f32,
}

impl GroundProbe for FlatGround {
    fn cast_down(&self, _body: Entity, origin: Vec3, max_distance: f32) -> Option<f32> {
        let distance = origin.y - self.height;
        (distance >= 0.0 && distance <= max_distance).then_some(distance)
    }
}

impl GroundProbe for RapierContext<'_> {
    fn cast_down(&self, body: Entity, origin: Vec3, max_distance: f32) -> Option<f32> {
        let filter = QueryFilter::default()
            .exclude_rigid_body(body)
            .exclude_sensors()
            .groups(CollisionGroups::new(Group::ALL, ground_probe_mask()));

        self.cast_ray(origin, Vec3::NEG_Y, max_distance, true, filter)
            .map(|(_, distance)| distance)
    }
}

/// SystemParam: все доступные ground backends одним probe
#[derive(SystemParam)]
pub struct GroundSensor<'w, 's> {
    rapier: ReadRapierContext<'w, 's>,
    flat: Option<Res<'w, FlatGround>>,
}

impl GroundSensor<'_, '_> {
    /// Есть ли вообще чем проверять землю
    pub fn has_backend(&self) -> bool {
        self.flat.is_some() || self.rapier.single().is_ok()
    }
}

impl GroundProbe for GroundSensor<'_, '_> {
    fn cast_down(&self, body: Entity, origin: Vec3, max_distance: f32) -> Option<f32> {
        let flat_hit = self
            .flat
            .as_ref()
            .and_then(|flat| flat.cast_down(body, origin, max_distance));

        let rapier_hit = self
            .rapier
            .single()
            .ok()
            .and_then(|context| context.cast_down(body, origin, max_distance));

        match (flat_hit, rapier_hit) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (hit, None) | (None, hit) => hit,
        }
    }
}
