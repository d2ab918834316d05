//! Planet detail panel.
//!
//! When a planet is focused the panel hides immediately, so stale details
//! are never shown mid-flight; once the camera settles on that planet the
//! panel is revealed with its name, description, grid coordinates, and
//! archive link.

mod plugin;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use plugin::PlanetInfoPlugin;
pub use resources::{PanelVisible, SelectedPlanet};
pub use systems::{planet_info_panel_ui, reveal_on_arrival, track_focus};
