//! Camera flight controller.
//!
//! Owns the camera rig (viewpoint + look-at) and flies it toward a focused
//! planet with an exponential approach: each tick closes a fixed fraction of
//! the remaining distance, and once the viewpoint is inside the arrival
//! epsilon the rig snaps exactly onto the goal and a single arrival event
//! fires. A new focus request replaces any flight already underway. The
//! per-frame tick is the only timing source, and it only ever checks the
//! current goal, so a replaced goal can never produce a stale arrival.

use bevy::prelude::*;

use crate::catalog::{PlanetCatalog, PlanetId};
use crate::config::{INITIAL_CAMERA_POSITION, INITIAL_CAMERA_TARGET};

/// Camera pose pair: the viewpoint and the point it looks at.
///
/// Mutated each tick by the flight controller (and by orbit/zoom input while
/// idle); the rendering layer reads it as a per-frame snapshot.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub position: Vec3,
    pub target: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            position: INITIAL_CAMERA_POSITION,
            target: INITIAL_CAMERA_TARGET,
        }
    }
}

/// Tunables for the flight controller.
#[derive(Resource, Debug, Clone, Copy)]
pub struct FlightConfig {
    /// Fraction of the remaining distance closed per tick.
    pub damping: f32,
    /// Distance below which the flight completes.
    pub arrival_epsilon: f32,
    /// From the focused planet's position to the destination viewpoint.
    pub viewpoint_offset: Vec3,
    /// From the focused planet's position to the destination look-at point.
    pub look_at_offset: Vec3,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            damping: 0.05,
            arrival_epsilon: 0.1,
            viewpoint_offset: Vec3::new(0.0, 0.0, 10.0),
            look_at_offset: Vec3::ZERO,
        }
    }
}

/// Event: the user asked to focus a planet. Written by the picking layer.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusPlanet {
    pub planet: PlanetId,
}

/// Event: a flight settled on its goal. Read by the UI layer.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightArrived {
    pub planet: PlanetId,
}

/// Label for the flight systems so downstream crates can order against the
/// tick (the renderer applies the rig after it, the UI reads arrivals after
/// it).
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlightSet;

/// Flight state machine: at most one goal in flight.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub enum CameraFlight {
    /// No active flight; the rig holds its last pose.
    #[default]
    Idle,
    /// Interpolating toward a goal.
    EnRoute {
        planet: PlanetId,
        /// Destination viewpoint for the rig position.
        destination: Vec3,
        /// Destination look-at point for the rig target.
        look_at: Vec3,
    },
}

impl CameraFlight {
    /// Begin (or redirect) a flight toward a planet at `position`.
    ///
    /// A request issued mid-flight replaces the goal outright; requests are
    /// never queued, and arrival detection restarts from the new remaining
    /// distance. Re-issuing the current goal before a tick stores identical
    /// state, so it behaves exactly like issuing it once.
    pub fn request(&mut self, planet: PlanetId, position: Vec3, config: &FlightConfig) {
        *self = CameraFlight::EnRoute {
            planet,
            destination: position + config.viewpoint_offset,
            look_at: position + config.look_at_offset,
        };
    }

    /// Advance one frame; returns the focused planet on the tick the flight
    /// settles.
    ///
    /// The frame delta is deliberately not a parameter: the approach closes
    /// a fixed fraction of the remaining distance per tick, so the motion
    /// converges on any frame cadence. A flight that somehow never crosses
    /// the epsilon simply keeps converging; there is no timeout.
    pub fn tick(&mut self, rig: &mut CameraRig, config: &FlightConfig) -> Option<PlanetId> {
        let CameraFlight::EnRoute {
            planet,
            destination,
            look_at,
        } = *self
        else {
            return None;
        };

        rig.position += (destination - rig.position) * config.damping;
        rig.target += (look_at - rig.target) * config.damping;

        if rig.position.distance(destination) < config.arrival_epsilon {
            // Snap away the residual float error before reporting arrival.
            rig.position = destination;
            rig.target = look_at;
            *self = CameraFlight::Idle;
            return Some(planet);
        }
        None
    }

    pub fn is_en_route(&self) -> bool {
        matches!(self, CameraFlight::EnRoute { .. })
    }

    /// Planet currently being flown to, if any.
    pub fn goal(&self) -> Option<PlanetId> {
        match self {
            CameraFlight::Idle => None,
            CameraFlight::EnRoute { planet, .. } => Some(*planet),
        }
    }
}

/// Drain focus requests into the flight controller.
///
/// An unknown id is a wiring bug upstream; it is reported and dropped rather
/// than flying to a default pose that could pass for the origin cell.
pub fn begin_flight(
    mut requests: EventReader<FocusPlanet>,
    catalog: Res<PlanetCatalog>,
    config: Res<FlightConfig>,
    mut flight: ResMut<CameraFlight>,
) {
    for request in requests.read() {
        match catalog.planet(request.planet) {
            Ok(planet) => flight.request(planet.id, planet.position, &config),
            Err(err) => error!("focus request dropped: {err}"),
        }
    }
}

/// Advance the flight once per frame and publish the arrival, if any.
pub fn advance_flight(
    config: Res<FlightConfig>,
    mut flight: ResMut<CameraFlight>,
    mut rig: ResMut<CameraRig>,
    mut arrivals: EventWriter<FlightArrived>,
) {
    // Skip the resource writes entirely while idle.
    if !flight.is_en_route() {
        return;
    }
    if let Some(planet) = flight.tick(&mut rig, &config) {
        arrivals.send(FlightArrived { planet });
    }
}
