//! Camera pose: basis для camera-relative движения + orbit камера
//!
//! Locomotion читает только `CameraBasis` (forward/right в world space).
//! `OrbitCamera` - простейший pose provider, который держит камеру
//! вокруг target entity (third-person).

use bevy::prelude::*;

/// Forward/right оси камеры в world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    pub forward: Vec3,
    pub right: Vec3,
}

impl CameraBasis {
    /// Bevy convention: forward = -Z local, right = +X local
    pub fn from_transform(transform: &Transform) -> Self {
        Self {
            forward: *transform.forward(),
            right: *transform.right(),
        }
    }
}

/// Third-person orbit камера вокруг target entity
#[derive(Component, Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub target: Entity,
    pub distance: f32,
    /// Horizontal rotation (radians)
    pub yaw: f32,
    /// Vertical rotation (radians), clamp против gimbal lock
    pub pitch: f32,
    /// Точка прицеливания над origin target (уровень головы)
    pub focus_height: f32,
}

impl OrbitCamera {
    pub fn new(target: Entity) -> Self {
        Self {
            target,
            distance: 6.0,
            yaw: 0.0,
            pitch: std::f32::consts::FRAC_PI_8,
            focus_height: 1.5,
        }
    }

    /// Pose камеры для данной позиции target
    pub fn pose(&self, target_position: Vec3) -> Transform {
        let pitch = self.pitch.clamp(
            -std::f32::consts::FRAC_PI_2 + 0.1,
            std::f32::consts::FRAC_PI_2 - 0.1,
        );

        let x = self.distance * pitch.cos() * self.yaw.sin();
        let y = self.distance * pitch.sin();
        let z = self.distance * pitch.cos() * self.yaw.cos();

        let focus = target_position + Vec3::Y * self.focus_height;

        Transform::from_translation(focus + Vec3::new(x, y, z)).looking_at(focus, Vec3::Y)
    }
}

/// Система: камера следует за target (Update, после движения)
pub fn update_orbit_camera(
    mut cameras: Query<(&OrbitCamera, &mut Transform)>,
    targets: Query<&Transform, Without<OrbitCamera>>,
) {
    for (camera, mut transform) in cameras.iter_mut() {
        let Ok(target) = targets.get(camera.target) else {
            continue;
        };

        *transform = camera.pose(target.translation);
    }
}
