//! Chart grid drawn with gizmo lines.
//!
//! Uses the same `GridConfig` the coordinate mapper uses, so the visual grid
//! and the label mapping can never drift apart.

use bevy::prelude::*;

use galaxy::grid::GridConfig;

const GRID_COLOR: Color = Color::srgba(0.3, 0.5, 0.6, 0.35);

/// System: draw the chart's line grid on the XY plane.
pub fn draw_grid(grid: Res<GridConfig>, mut gizmos: Gizmos) {
    let half = grid.size / 2.0;
    let step = grid.square_size();
    for i in 0..grid.divisions {
        let t = -half + i as f32 * step;
        gizmos.line(
            Vec3::new(-half, t, 0.0),
            Vec3::new(half, t, 0.0),
            GRID_COLOR,
        );
        gizmos.line(
            Vec3::new(t, -half, 0.0),
            Vec3::new(t, half, 0.0),
            GRID_COLOR,
        );
    }
}
