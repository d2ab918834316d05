//! Planet meshes and scene lighting.

use bevy::prelude::*;

use galaxy::catalog::{PlanetCatalog, PlanetId};

/// Visual radius of a planet sphere, in scene units.
pub const PLANET_RADIUS: f32 = 1.0;

/// Tags a rendered planet with its catalog id.
#[derive(Component, Debug, Clone, Copy)]
pub struct PlanetMarker {
    pub id: PlanetId,
}

/// Ambient fill plus a single point light above the chart.
pub fn setup_scene(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 150.0,
    });
    commands.spawn((
        PointLight {
            intensity: 2_000_000.0,
            range: 600.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 10.0),
    ));
}

/// Spawn one sphere per catalog planet at its cached position.
pub fn spawn_planets(
    catalog: Res<PlanetCatalog>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut commands: Commands,
) {
    let mesh = meshes.add(Sphere::new(PLANET_RADIUS));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.35, 0.75, 0.9),
        emissive: LinearRgba::rgb(0.05, 0.3, 0.5),
        ..default()
    });

    for planet in catalog.iter() {
        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(planet.position),
            PlanetMarker { id: planet.id },
        ));
    }
}
