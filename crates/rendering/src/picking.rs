//! Pointer picking: resolve a left click to the planet under the cursor.
//!
//! Casts a ray through the cursor on a fresh left click and intersects it
//! with the planet spheres analytically; the nearest hit becomes a focus
//! request. Clicks that are part of an orbit drag are suppressed.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use galaxy::catalog::PlanetId;
use galaxy::flight::FocusPlanet;

use crate::camera::OrbitDrag;
use crate::egui_input_guard::egui_wants_pointer;
use crate::planets::{PlanetMarker, PLANET_RADIUS};

pub fn pick_planet(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    drag: Res<OrbitDrag>,
    mut contexts: EguiContexts,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    planets: Query<(&PlanetMarker, &GlobalTransform), Without<Camera3d>>,
    mut focus: EventWriter<FocusPlanet>,
) {
    if !buttons.just_pressed(MouseButton::Left) || drag.dragging {
        return;
    }
    if egui_wants_pointer(&mut contexts) {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, cam_transform)) = cameras.get_single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(cam_transform, cursor) else {
        return;
    };

    let mut nearest: Option<(f32, PlanetId)> = None;
    for (marker, transform) in &planets {
        if let Some(t) = ray_sphere(&ray, transform.translation(), PLANET_RADIUS) {
            if nearest.is_none_or(|(best, _)| t < best) {
                nearest = Some((t, marker.id));
            }
        }
    }
    if let Some((_, id)) = nearest {
        focus.send(FocusPlanet { planet: id });
    }
}

/// Distance along `ray` to its first intersection with a sphere, if any.
fn ray_sphere(ray: &Ray3d, center: Vec3, radius: f32) -> Option<f32> {
    let to_center = center - ray.origin;
    let along = to_center.dot(*ray.direction);
    let closest_sq = to_center.length_squared() - along * along;
    let radius_sq = radius * radius;
    if closest_sq > radius_sq {
        return None;
    }
    let half_chord = (radius_sq - closest_sq).sqrt();
    // Prefer the entry point; fall back to the exit when the origin is
    // inside the sphere.
    let entry = along - half_chord;
    let t = if entry >= 0.0 { entry } else { along + half_chord };
    (t >= 0.0).then_some(t)
}
