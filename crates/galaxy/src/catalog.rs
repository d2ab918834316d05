//! Static planet catalog.
//!
//! The chart's planets come from a JSON catalog embedded at compile time:
//! display name, grid coordinate, a short description, an archive link, and
//! an optional fine-position offset. The catalog is parsed once at startup
//! and every planet's scene position is derived and cached during the load,
//! so per-frame consumers never re-derive it.

use bevy::prelude::*;
use serde::Deserialize;

use crate::grid::{GridConfig, GridError};

/// Embedded catalog source.
pub const PLANETS_JSON: &str = include_str!("../data/planets.json");

/// Stable identifier for a planet: its index in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlanetId(pub usize);

/// Raw catalog record as it appears in the JSON source.
///
/// Unknown keys are rejected so a misspelled `offset` fails the load instead
/// of silently resolving to the zero vector. An *absent* `offset` is the
/// zero vector.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlanetRecord {
    name: String,
    coord: String,
    description: String,
    link: String,
    #[serde(default)]
    offset: Option<[f32; 3]>,
}

/// A planet ready for placement: position derived once and cached.
#[derive(Debug, Clone)]
pub struct Planet {
    pub id: PlanetId,
    pub name: String,
    pub grid_label: String,
    pub description: String,
    pub link: String,
    /// `map(grid_label) + offset`, cached for the planet's lifetime.
    pub position: Vec3,
}

/// Errors from catalog loading and lookup.
#[derive(Debug)]
pub enum CatalogError {
    /// The catalog source is not valid JSON for the expected records.
    Parse(serde_json::Error),
    /// A record's grid coordinate does not address the chart.
    InvalidLabel { name: String, source: GridError },
    /// A request named a planet the catalog does not hold.
    UnknownPlanet(PlanetId),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Parse(err) => write!(f, "malformed planet catalog: {err}"),
            CatalogError::InvalidLabel { name, source } => {
                write!(f, "planet {name:?}: {source}")
            }
            CatalogError::UnknownPlanet(id) => write!(f, "no planet with id {}", id.0),
        }
    }
}

impl std::error::Error for CatalogError {}

/// All planets, loaded once at startup and immutable thereafter.
#[derive(Resource, Debug)]
pub struct PlanetCatalog {
    planets: Vec<Planet>,
}

impl PlanetCatalog {
    /// Parse catalog JSON and derive every planet's cached position.
    ///
    /// A record with a malformed `coord` fails the whole load, naming the
    /// record: data-entry errors surface at startup rather than placing a
    /// planet at a plausible-looking wrong spot.
    pub fn from_json(json: &str, grid: &GridConfig) -> Result<Self, CatalogError> {
        let records: Vec<PlanetRecord> = serde_json::from_str(json).map_err(CatalogError::Parse)?;

        let mut planets = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            let base = grid
                .map(&record.coord)
                .map_err(|source| CatalogError::InvalidLabel {
                    name: record.name.clone(),
                    source,
                })?;
            let offset = record.offset.map_or(Vec3::ZERO, Vec3::from_array);
            planets.push(Planet {
                id: PlanetId(index),
                name: record.name,
                grid_label: record.coord,
                description: record.description,
                link: record.link,
                position: base + offset,
            });
        }
        Ok(Self { planets })
    }

    /// Look up a planet by id, failing fast on an id the catalog does not
    /// hold — never a default placement that could pass for the origin cell.
    pub fn planet(&self, id: PlanetId) -> Result<&Planet, CatalogError> {
        self.planets.get(id.0).ok_or(CatalogError::UnknownPlanet(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Planet> {
        self.planets.iter()
    }

    pub fn len(&self) -> usize {
        self.planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> GridConfig {
        GridConfig::default()
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = PlanetCatalog::from_json(PLANETS_JSON, &grid()).unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_builtin_tatooine_sits_on_its_cell() {
        let catalog = PlanetCatalog::from_json(PLANETS_JSON, &grid()).unwrap();
        let tatooine = catalog
            .iter()
            .find(|p| p.name == "Tatooine")
            .expect("catalog has Tatooine");
        assert_eq!(tatooine.grid_label, "R-16");
        assert_eq!(tatooine.position, Vec3::new(70.0, -50.0, 0.0));
    }

    #[test]
    fn test_missing_offset_defaults_to_zero() {
        let json = r#"[{"name": "Lone", "coord": "K-11", "description": "d", "link": "l"}]"#;
        let catalog = PlanetCatalog::from_json(json, &grid()).unwrap();
        assert_eq!(catalog.planet(PlanetId(0)).unwrap().position, Vec3::ZERO);
    }

    #[test]
    fn test_offset_composes_with_mapped_position() {
        let json = r#"[
            {"name": "A", "coord": "K-11", "description": "d", "link": "l", "offset": [1.0, 2.0, 3.0]},
            {"name": "B", "coord": "R-16", "description": "d", "link": "l", "offset": [0.0, 0.0, 5.0]}
        ]"#;
        let catalog = PlanetCatalog::from_json(json, &grid()).unwrap();
        assert_eq!(catalog.planet(PlanetId(0)).unwrap().position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(catalog.planet(PlanetId(1)).unwrap().position, Vec3::new(70.0, -50.0, 5.0));
    }

    #[test]
    fn test_malformed_coord_fails_load_naming_the_record() {
        let json = r#"[
            {"name": "Fine", "coord": "A-1", "description": "d", "link": "l"},
            {"name": "Bad", "coord": "Z-99", "description": "d", "link": "l"}
        ]"#;
        match PlanetCatalog::from_json(json, &grid()) {
            Err(CatalogError::InvalidLabel { name, source }) => {
                assert_eq!(name, "Bad");
                assert_eq!(source, GridError::InvalidLabel("Z-99".to_string()));
            }
            other => panic!("expected InvalidLabel, got {other:?}"),
        }
    }

    #[test]
    fn test_misspelled_offset_key_fails_load() {
        let json =
            r#"[{"name": "Typo", "coord": "K-11", "description": "d", "link": "l", "offsest": [1.0, 0.0, 0.0]}]"#;
        assert!(matches!(
            PlanetCatalog::from_json(json, &grid()),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_unknown_planet_lookup_fails() {
        let catalog = PlanetCatalog::from_json(PLANETS_JSON, &grid()).unwrap();
        let missing = PlanetId(catalog.len());
        assert!(matches!(
            catalog.planet(missing),
            Err(CatalogError::UnknownPlanet(id)) if id == missing
        ));
    }
}
