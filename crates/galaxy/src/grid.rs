//! Grid-label coordinate mapping.
//!
//! The chart is a closed 21x21 layout addressed by labels like "R-16":
//! columns A-U left to right, rows 1-21 top to bottom. [`GridConfig::map`]
//! converts a label into a position on the chart plane. Labels outside the
//! layout are errors, never clamped or defaulted.

use bevy::prelude::*;

use crate::config::{GRID_DIVISIONS, GRID_SIZE};

/// The 21 valid column letters, left to right.
const GRID_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTU";

/// Number of columns/rows in the closed label layout.
pub const GRID_EXTENT: u32 = 21;

/// Errors from grid-label mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The label does not address a cell of the closed 21x21 layout.
    InvalidLabel(String),
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::InvalidLabel(label) => write!(f, "invalid grid label: {label:?}"),
        }
    }
}

impl std::error::Error for GridError {}

/// Geometry of the square chart grid.
///
/// `divisions` counts grid lines, so the cell edge is `size / (divisions - 1)`.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Side length of the grid in scene units.
    pub size: f32,
    /// Number of grid lines along each axis. Invariant: at least 2.
    pub divisions: u32,
}

impl GridConfig {
    pub fn new(size: f32, divisions: u32) -> Self {
        assert!(divisions >= 2, "grid needs at least two divisions");
        Self { size, divisions }
    }

    /// Cell edge length in scene units.
    pub fn square_size(&self) -> f32 {
        self.size / (self.divisions - 1) as f32
    }

    /// Map a grid label onto the chart plane.
    ///
    /// Columns run A-U left to right, rows 1-21 top to bottom (row numbers
    /// increase downward, printed-map style), with the layout centered on
    /// the origin. The result is always planar (`z == 0`); elevation comes
    /// from a planet's offset, never from the chart.
    pub fn map(&self, label: &str) -> Result<Vec3, GridError> {
        let (col_index, row_index) =
            parse_label(label).ok_or_else(|| GridError::InvalidLabel(label.to_string()))?;
        let square = self.square_size();
        let center = (self.divisions - 1) as f32 / 2.0;
        let x = (col_index as f32 - center) * square;
        let y = -(row_index as f32 - center) * square;
        Ok(Vec3::new(x, y, 0.0))
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(GRID_SIZE, GRID_DIVISIONS)
    }
}

/// Parse a label into zero-based (column, row) indices.
///
/// Accepts exactly one column letter (lower case normalized), a dash, and a
/// row number 1-21 without leading zeros.
fn parse_label(label: &str) -> Option<(u32, u32)> {
    let (col, row) = label.split_once('-')?;

    let mut letters = col.chars();
    let letter = letters.next()?.to_ascii_uppercase();
    if letters.next().is_some() {
        return None;
    }
    let col_index = GRID_LETTERS.find(letter)? as u32;

    if row.is_empty() || row.len() > 2 || row.starts_with('0') {
        return None;
    }
    if !row.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let row_number: u32 = row.parse().ok()?;
    if !(1..=GRID_EXTENT).contains(&row_number) {
        return None;
    }

    Some((col_index, row_number - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_grid() -> GridConfig {
        GridConfig::new(200.0, 21)
    }

    #[test]
    fn test_worked_example_r16() {
        // Column R = index 17, row 16 = index 15, square = 200/20 = 10.
        let pos = default_grid().map("R-16").unwrap();
        assert_eq!(pos, Vec3::new(70.0, -50.0, 0.0));
    }

    #[test]
    fn test_center_label_maps_to_origin() {
        assert_eq!(default_grid().map("K-11").unwrap(), Vec3::ZERO);
        // The center cell stays on the origin for any symmetric config.
        assert_eq!(GridConfig::new(42.0, 21).map("K-11").unwrap(), Vec3::ZERO);
        assert_eq!(GridConfig::new(1.0, 21).map("K-11").unwrap(), Vec3::ZERO);
    }

    #[test]
    fn test_output_is_planar_for_every_valid_label() {
        let grid = default_grid();
        for col in GRID_LETTERS.chars() {
            for row in 1..=GRID_EXTENT {
                let label = format!("{col}-{row}");
                let pos = grid.map(&label).unwrap();
                assert_eq!(pos.z, 0.0, "label {label} left the chart plane");
            }
        }
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let grid = default_grid();
        assert_eq!(grid.map("C-7").unwrap(), grid.map("C-7").unwrap());
    }

    #[test]
    fn test_row_axis_is_inverted() {
        let grid = default_grid();
        for row in 1..GRID_EXTENT {
            let upper = grid.map(&format!("D-{row}")).unwrap();
            let lower = grid.map(&format!("D-{}", row + 1)).unwrap();
            assert!(lower.y < upper.y, "row {} should sit below row {row}", row + 1);
        }
    }

    #[test]
    fn test_lower_case_column_normalized() {
        let grid = default_grid();
        assert_eq!(grid.map("r-16").unwrap(), grid.map("R-16").unwrap());
        assert_eq!(grid.map("a-1").unwrap(), grid.map("A-1").unwrap());
    }

    #[test]
    fn test_invalid_labels_rejected() {
        let grid = default_grid();
        let labels = [
            "Z-5", "V-1", "A-22", "A-0", "A-01", "AA-3", "R16", "R-", "-16", "", "K-11 ", "K_11",
            "K-111",
        ];
        for label in labels {
            assert_eq!(
                grid.map(label),
                Err(GridError::InvalidLabel(label.to_string())),
                "label {label:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_even_division_count_centers_on_half_cell() {
        // divisions = 4: center index 1.5, square = 10.
        let grid = GridConfig::new(30.0, 4);
        assert_eq!(grid.map("A-1").unwrap(), Vec3::new(-15.0, 15.0, 0.0));
        assert_eq!(grid.map("B-2").unwrap(), Vec3::new(-5.0, 5.0, 0.0));
    }

    #[test]
    #[should_panic(expected = "at least two divisions")]
    fn test_single_division_rejected() {
        let _ = GridConfig::new(10.0, 1);
    }
}
