//! Scene binding for the holomap galaxy chart.
//!
//! Applies the domain crate's camera rig to the Bevy camera, renders the
//! planet spheres, lighting, and chart grid, and resolves pointer clicks
//! into focus requests. No domain rules live here.

use bevy::prelude::*;

pub mod camera;
pub mod egui_input_guard;
pub mod grid_overlay;
pub mod picking;
pub mod planets;

use camera::OrbitDrag;
use galaxy::flight::FlightSet;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitDrag>()
            .add_systems(
                Startup,
                (camera::setup_camera, planets::setup_scene, planets::spawn_planets),
            )
            .add_systems(
                Update,
                (
                    picking::pick_planet.before(FlightSet),
                    camera::camera_orbit_drag.before(FlightSet),
                    camera::camera_zoom.before(FlightSet),
                    camera::apply_camera_rig.after(FlightSet),
                    grid_overlay::draw_grid,
                ),
            );
    }
}
