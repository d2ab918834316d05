//! Domain core of the holomap galaxy chart.
//!
//! Grid-label coordinate mapping, the static planet catalog, and the camera
//! flight state machine. Nothing here touches the scene graph: the rendering
//! crate consumes [`flight::CameraRig`] snapshots and the UI crate consumes
//! [`flight::FlightArrived`] events.

use bevy::prelude::*;

pub mod catalog;
pub mod config;
pub mod flight;
pub mod grid;

use catalog::PlanetCatalog;
use flight::{
    advance_flight, begin_flight, CameraFlight, CameraRig, FlightArrived, FlightConfig, FlightSet,
    FocusPlanet,
};
use grid::GridConfig;

pub struct GalaxyPlugin;

impl Plugin for GalaxyPlugin {
    fn build(&self, app: &mut App) {
        let grid = GridConfig::default();
        // No degraded mode without the built-in catalog; fail at startup.
        let catalog = PlanetCatalog::from_json(catalog::PLANETS_JSON, &grid)
            .unwrap_or_else(|err| panic!("built-in planet catalog failed to load: {err}"));
        info!("planet catalog loaded: {} planets", catalog.len());

        app.insert_resource(grid)
            .insert_resource(catalog)
            .init_resource::<CameraRig>()
            .init_resource::<CameraFlight>()
            .init_resource::<FlightConfig>()
            .add_event::<FocusPlanet>()
            .add_event::<FlightArrived>()
            .add_systems(Update, (begin_flight, advance_flight).chain().in_set(FlightSet));
    }
}
