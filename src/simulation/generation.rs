use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::Rng;

use crate::config::EngineConfig;
use crate::models::constants::{ObjectType, STATION_LAYER};
use crate::models::position::{Position2, Position3};
use crate::models::region::{Bounds2, Region};

use super::actor::Actor;

/// Actors and gates are scattered within ±this on both axes.
pub const WORLD_HALF_EXTENT: f64 = 2000.0;

const GATE_NAMES: [&str; 6] = ["sol", "vega", "altair", "deneb", "rigel", "sirius"];

/// Half-width of the approach zone around each gate.
const APPROACH_HALF_WIDTH: f64 = 150.0;

/// A jump gate: a fixed station-layer destination for ships.
#[derive(Debug, Clone, PartialEq)]
pub struct Gate {
    pub id: u32,
    pub name: &'static str,
    pub position: Position3,
}

fn random_point(rng: &mut StdRng, half_extent: f64) -> Position2 {
    Position2 {
        x: rng.gen_range(-half_extent..half_extent),
        y: rng.gen_range(-half_extent..half_extent),
    }
}

/// One gate per name, scattered across the world.
pub fn generate_gates(rng: &mut StdRng) -> Vec<Gate> {
    GATE_NAMES
        .iter()
        .copied()
        .enumerate()
        .map(|(i, name)| {
            let p = random_point(rng, WORLD_HALF_EXTENT);
            Gate {
                id: i as u32,
                name,
                position: Position3::new(p.x, p.y, STATION_LAYER),
            }
        })
        .collect()
}

/// Ships with random positions, headings and movement profiles.
pub fn generate_actors(rng: &mut StdRng, count: usize, config: &EngineConfig) -> Vec<Actor> {
    let profiles: Vec<(&String, _)> = config.profiles.iter().collect();

    (0..count)
        .map(|i| {
            let kind = if rng.gen_bool(0.25) {
                ObjectType::Ship
            } else {
                ObjectType::NpcShip
            };
            let (name, profile) = profiles[rng.gen_range(0..profiles.len())];
            let mut actor = Actor::new(
                i as u32,
                kind,
                name.clone(),
                random_point(rng, WORLD_HALF_EXTENT),
                *profile,
            );
            actor.heading = rng.gen_range(-PI..PI);
            actor
        })
        .collect()
}

/// Named zones: the inner system, a ship-lane corridor restricted to the
/// ship layer, and an approach zone around every gate.
pub fn generate_regions(gates: &[Gate]) -> Vec<Region> {
    let mut regions = vec![
        Region::new(
            "inner-system",
            Bounds2::from_corners(Position2::new(-1000.0, -1000.0), Position2::new(1000.0, 1000.0)),
        ),
        Region::new(
            "trade-lane",
            Bounds2::from_corners(
                Position2::new(-WORLD_HALF_EXTENT, -100.0),
                Position2::new(WORLD_HALF_EXTENT, 100.0),
            ),
        )
        .on_layer(ObjectType::NpcShip.layer()),
    ];

    for gate in gates {
        let (x, y) = (gate.position.x, gate.position.y);
        regions.push(Region::new(
            format!("approach-{}", gate.name),
            Bounds2::from_corners(
                Position2::new(x - APPROACH_HALF_WIDTH, y - APPROACH_HALF_WIDTH),
                Position2::new(x + APPROACH_HALF_WIDTH, y + APPROACH_HALF_WIDTH),
            ),
        ));
    }
    regions
}
