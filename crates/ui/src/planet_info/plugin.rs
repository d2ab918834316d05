//! Plugin registration for the planet info panel.

use bevy::prelude::*;

use galaxy::flight::FlightSet;

use super::resources::{PanelVisible, SelectedPlanet};
use super::systems::{planet_info_panel_ui, reveal_on_arrival, track_focus};

pub struct PlanetInfoPlugin;

impl Plugin for PlanetInfoPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectedPlanet>()
            .init_resource::<PanelVisible>()
            .add_systems(
                Update,
                (track_focus, reveal_on_arrival, planet_info_panel_ui)
                    .chain()
                    .after(FlightSet),
            );
    }
}
