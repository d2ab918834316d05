//! Holomap UI: the planet detail panel.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod planet_info;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_plugins(planet_info::PlanetInfoPlugin);
    }
}
