//! Systems tracking focus/arrival events and rendering the panel.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use galaxy::catalog::PlanetCatalog;
use galaxy::flight::{FlightArrived, FocusPlanet};

use super::resources::{PanelVisible, SelectedPlanet};

/// Record new focus requests and hide the panel while the flight runs.
pub fn track_focus(
    mut requests: EventReader<FocusPlanet>,
    mut selected: ResMut<SelectedPlanet>,
    mut visible: ResMut<PanelVisible>,
) {
    for request in requests.read() {
        selected.0 = Some(request.planet);
        visible.0 = false;
    }
}

/// Reveal the panel when the flight settles on the selected planet.
///
/// An arrival for anything other than the current selection is stale and
/// leaves the panel hidden.
pub fn reveal_on_arrival(
    mut arrivals: EventReader<FlightArrived>,
    selected: Res<SelectedPlanet>,
    mut visible: ResMut<PanelVisible>,
) {
    for arrival in arrivals.read() {
        if selected.0 == Some(arrival.planet) {
            visible.0 = true;
        }
    }
}

/// Render the detail panel for the selected planet.
pub fn planet_info_panel_ui(
    mut contexts: EguiContexts,
    catalog: Res<PlanetCatalog>,
    mut selected: ResMut<SelectedPlanet>,
    mut visible: ResMut<PanelVisible>,
) {
    if !visible.0 {
        return;
    }
    let Some(id) = selected.0 else {
        return;
    };
    let Ok(planet) = catalog.planet(id) else {
        // The selection points at an id the catalog no longer resolves.
        selected.0 = None;
        visible.0 = false;
        return;
    };

    let mut close_clicked = false;
    egui::Window::new(planet.name.clone())
        .id(egui::Id::new("planet-info"))
        .anchor(egui::Align2::RIGHT_TOP, [-16.0, 16.0])
        .resizable(false)
        .collapsible(false)
        .show(contexts.ctx_mut(), |ui| {
            ui.set_max_width(280.0);
            ui.label(&planet.description);
            ui.separator();
            ui.label(format!("Coordinates: {}", planet.grid_label));
            ui.hyperlink_to("See more", &planet.link);
            ui.separator();
            if ui.button("Close").clicked() {
                close_clicked = true;
            }
        });

    if close_clicked {
        visible.0 = false;
        selected.0 = None;
    }
}
