//! Tests for panel focus/arrival bookkeeping.

use bevy::prelude::*;

use galaxy::catalog::PlanetId;
use galaxy::flight::{FlightArrived, FocusPlanet};

use super::resources::{PanelVisible, SelectedPlanet};
use super::systems::{reveal_on_arrival, track_focus};

fn panel_app() -> App {
    let mut app = App::new();
    app.add_event::<FocusPlanet>()
        .add_event::<FlightArrived>()
        .init_resource::<SelectedPlanet>()
        .init_resource::<PanelVisible>()
        .add_systems(Update, (track_focus, reveal_on_arrival).chain());
    app
}

fn selected(app: &App) -> Option<PlanetId> {
    app.world().resource::<SelectedPlanet>().0
}

fn visible(app: &App) -> bool {
    app.world().resource::<PanelVisible>().0
}

#[test]
fn test_focus_records_selection_and_hides_panel() {
    let mut app = panel_app();
    app.world_mut().resource_mut::<PanelVisible>().0 = true;

    app.world_mut().send_event(FocusPlanet { planet: PlanetId(2) });
    app.update();

    assert_eq!(selected(&app), Some(PlanetId(2)));
    assert!(!visible(&app));
}

#[test]
fn test_arrival_for_selection_reveals_panel() {
    let mut app = panel_app();
    app.world_mut().send_event(FocusPlanet { planet: PlanetId(2) });
    app.update();

    app.world_mut().send_event(FlightArrived { planet: PlanetId(2) });
    app.update();

    assert!(visible(&app));
}

#[test]
fn test_stale_arrival_leaves_panel_hidden() {
    let mut app = panel_app();
    app.world_mut().send_event(FocusPlanet { planet: PlanetId(2) });
    app.update();
    app.world_mut().send_event(FocusPlanet { planet: PlanetId(5) });
    app.update();

    // Arrival for the superseded planet must not reveal anything.
    app.world_mut().send_event(FlightArrived { planet: PlanetId(2) });
    app.update();
    assert!(!visible(&app));
    assert_eq!(selected(&app), Some(PlanetId(5)));

    app.world_mut().send_event(FlightArrived { planet: PlanetId(5) });
    app.update();
    assert!(visible(&app));
}

#[test]
fn test_arrival_without_selection_is_ignored() {
    let mut app = panel_app();
    app.world_mut().send_event(FlightArrived { planet: PlanetId(1) });
    app.update();
    assert!(!visible(&app));
    assert_eq!(selected(&app), None);
}

#[test]
fn test_refocus_same_planet_hides_until_rearrival() {
    let mut app = panel_app();
    app.world_mut().send_event(FocusPlanet { planet: PlanetId(3) });
    app.update();
    app.world_mut().send_event(FlightArrived { planet: PlanetId(3) });
    app.update();
    assert!(visible(&app));

    // Clicking the same planet again starts a new flight; the panel hides
    // until that flight settles.
    app.world_mut().send_event(FocusPlanet { planet: PlanetId(3) });
    app.update();
    assert!(!visible(&app));
}
