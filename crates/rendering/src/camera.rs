//! Camera systems: rig application and orbit/zoom interaction.
//!
//! The flight controller owns the rig; this module writes the rig onto the
//! `Camera3d` transform each frame and lets the user orbit and zoom around
//! the current look-at point while no flight is underway.

use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use galaxy::flight::{CameraFlight, CameraRig};

const ZOOM_SPEED: f32 = 0.15;
const MIN_DISTANCE: f32 = 2.0;
const MAX_DISTANCE: f32 = 400.0;
const ORBIT_SENSITIVITY: f32 = 0.005;
const MIN_PITCH: f32 = -80.0 * std::f32::consts::PI / 180.0;
const MAX_PITCH: f32 = 80.0 * std::f32::consts::PI / 180.0;

/// Tracks right-button drag state for orbiting.
#[derive(Resource, Default)]
pub struct OrbitDrag {
    pub dragging: bool,
    pub last_pos: Vec2,
}

pub fn setup_camera(rig: Res<CameraRig>, mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(rig.position).looking_at(rig.target, Vec3::Y),
    ));
}

/// System: apply the rig pose to the camera transform each frame.
pub fn apply_camera_rig(rig: Res<CameraRig>, mut query: Query<&mut Transform, With<Camera3d>>) {
    if !rig.is_changed() {
        return;
    }
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    *transform = Transform::from_translation(rig.position).looking_at(rig.target, Vec3::Y);
}

/// Right-mouse drag: orbit the viewpoint around the current look-at point.
///
/// Yaw and pitch are recovered from the live rig offset on every frame, so
/// orbiting composes with whatever pose the last flight wrote instead of
/// holding stale angles. Disabled while a flight is underway.
pub fn camera_orbit_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    flight: Res<CameraFlight>,
    mut drag: ResMut<OrbitDrag>,
    mut rig: ResMut<CameraRig>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Right) {
        if let Some(pos) = window.cursor_position() {
            drag.dragging = true;
            drag.last_pos = pos;
        }
    }
    if buttons.just_released(MouseButton::Right) {
        drag.dragging = false;
    }
    if !drag.dragging {
        return;
    }
    let Some(pos) = window.cursor_position() else {
        return;
    };
    let delta = pos - drag.last_pos;
    // Keep the anchor fresh even while a flight owns the rig, so the camera
    // does not jump when the flight settles mid-drag.
    drag.last_pos = pos;
    if flight.is_en_route() || delta == Vec2::ZERO {
        return;
    }

    let offset = rig.position - rig.target;
    let distance = offset.length().max(MIN_DISTANCE);
    let mut yaw = offset.x.atan2(offset.z);
    let mut pitch = (offset.y / distance).asin();
    yaw -= delta.x * ORBIT_SENSITIVITY;
    pitch = (pitch + delta.y * ORBIT_SENSITIVITY).clamp(MIN_PITCH, MAX_PITCH);
    rig.position = rig.target + spherical_offset(yaw, pitch, distance);
}

/// Scroll wheel: move the viewpoint along the view axis, clamped.
pub fn camera_zoom(
    mut scroll_evts: EventReader<MouseWheel>,
    flight: Res<CameraFlight>,
    mut rig: ResMut<CameraRig>,
) {
    if flight.is_en_route() {
        scroll_evts.clear();
        return;
    }
    for evt in scroll_evts.read() {
        let dy = match evt.unit {
            MouseScrollUnit::Line => evt.y,
            MouseScrollUnit::Pixel => evt.y / 100.0,
        };
        let factor = 1.0 - dy * ZOOM_SPEED;
        let offset = rig.position - rig.target;
        let distance = (offset.length() * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
        rig.position = rig.target + offset.normalize_or(Vec3::Z) * distance;
    }
}

/// Spherical to cartesian offset from the look-at point.
fn spherical_offset(yaw: f32, pitch: f32, distance: f32) -> Vec3 {
    Vec3::new(
        distance * pitch.cos() * yaw.sin(),
        distance * pitch.sin(),
        distance * pitch.cos() * yaw.cos(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spherical_offset_preserves_distance() {
        for (yaw, pitch) in [(0.0, 0.0), (1.2, 0.7), (-2.4, -1.1)] {
            let offset = spherical_offset(yaw, pitch, 25.0);
            assert!((offset.length() - 25.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_spherical_offset_zero_angles_points_along_z() {
        let offset = spherical_offset(0.0, 0.0, 10.0);
        assert!((offset - Vec3::new(0.0, 0.0, 10.0)).length() < 1e-5);
    }
}
