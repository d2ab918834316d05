//! Resources for panel selection and visibility.

use bevy::prelude::*;

use galaxy::catalog::PlanetId;

/// The planet the user last asked to focus, if any.
#[derive(Resource, Default, Debug, PartialEq, Eq)]
pub struct SelectedPlanet(pub Option<PlanetId>);

/// Whether the detail panel is currently shown.
#[derive(Resource, Default, Debug, PartialEq, Eq)]
pub struct PanelVisible(pub bool);
