//! Chart-wide constants.

use bevy::prelude::*;

/// Side length of the square chart, in scene units.
pub const GRID_SIZE: f32 = 200.0;

/// Number of grid lines along each chart axis (21 lines, 20 cells).
pub const GRID_DIVISIONS: u32 = 21;

/// Camera viewpoint before any planet has been focused.
pub const INITIAL_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 0.0, 10.0);

/// Initial look-at point: the chart center.
pub const INITIAL_CAMERA_TARGET: Vec3 = Vec3::ZERO;
