//! Fleet simulation
//!
//! Owns a seeded set of ships and gates and drives them tick by tick: every
//! ship flies gate to gate, the actor grid tracks where they are, and gate
//! traffic is counted with radius queries instead of scanning every ship.
//! Same seed and same settings give the same run.

pub mod actor;
pub mod generation;

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::models::errors::SpatialResult;
use crate::models::position::{to_2d, Position3};
use crate::services::coordinate_cache::CoordinateCache;
use crate::services::recorder::MovementRecorder;
use crate::services::regions::RegionManager;
use crate::services::spatial_grid::SpatialGrid;

use actor::{Actor, ActorId, TickOutcome};
use generation::{generate_actors, generate_gates, generate_regions, Gate};

/// Expired cache entries are swept every this many ticks.
const CACHE_SWEEP_INTERVAL: u64 = 120;

/// What happened during one call to [`Simulation::step`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    pub tick: u64,
    pub moving: usize,
    pub idle: usize,
    pub arrived: Vec<ActorId>,
    pub skipped: Vec<ActorId>,
    /// Ships within the trigger radius of each gate, by gate id
    pub gate_traffic: Vec<(u32, usize)>,
}

/// Totals over the whole run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationSummary {
    pub ticks: u64,
    pub arrivals: u64,
    pub skipped_updates: u64,
    pub peak_gate_traffic: usize,
    /// Actor-ticks spent inside each region
    pub region_visits: BTreeMap<String, u64>,
}

pub struct Simulation {
    config: EngineConfig,
    actors: Vec<Actor>,
    gates: Vec<Gate>,
    actor_grid: SpatialGrid,
    regions: RegionManager,
    cache: CoordinateCache,
    recorder: Option<MovementRecorder>,
    rng: StdRng,
    tick: u64,
    summary: SimulationSummary,
}

impl Simulation {
    /// Build a world of `actor_count` ships from `seed`, each already heading
    /// for a gate.
    pub fn new(seed: u64, config: EngineConfig, actor_count: usize) -> SpatialResult<Self> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);

        let gates = generate_gates(&mut rng);
        let actors = generate_actors(&mut rng, actor_count, &config);

        let mut regions = RegionManager::new();
        for region in generate_regions(&gates) {
            regions.add_region(region);
        }

        let mut actor_grid = SpatialGrid::new(config.grid_cell_size)?;
        for actor in &actors {
            actor_grid.insert(actor.position);
        }

        let cache = CoordinateCache::new(config.cache_max_age());
        let mut sim = Simulation {
            config,
            actors,
            gates,
            actor_grid,
            regions,
            cache,
            recorder: None,
            rng,
            tick: 0,
            summary: SimulationSummary::default(),
        };

        for i in 0..sim.actors.len() {
            sim.send_to_random_gate(i);
        }

        info!(
            seed,
            actors = sim.actors.len(),
            gates = sim.gates.len(),
            regions = sim.regions.len(),
            "simulation initialised"
        );
        Ok(sim)
    }

    /// Start tracing movement events. Events from earlier ticks are not
    /// reconstructed.
    pub fn enable_recording(&mut self) {
        let mut recorder = MovementRecorder::new();
        recorder.set_tick(self.tick);
        self.recorder = Some(recorder);
    }

    pub fn recorder(&self) -> Option<&MovementRecorder> {
        self.recorder.as_ref()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.iter().find(|a| a.id == id)
    }

    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.iter_mut().find(|a| a.id == id)
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    pub fn regions(&self) -> &RegionManager {
        &self.regions
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn summary(&self) -> &SimulationSummary {
        &self.summary
    }

    /// Actor positions within `radius` of `center`, from the actor grid.
    pub fn ships_near(&self, center: Position3, radius: f64) -> Vec<Position3> {
        self.actor_grid.find_in_radius(center, radius)
    }

    /// Last position recorded for `id`, if it is still fresh in the cache.
    pub fn last_known_position(&mut self, id: ActorId) -> Option<Position3> {
        let kind = self.actor(id)?.kind.name().to_string();
        self.cache.get(&id.to_string(), &kind)
    }

    /// Pick a gate other than the one the actor is sitting on.
    fn send_to_random_gate(&mut self, index: usize) {
        if self.gates.is_empty() {
            return;
        }
        let current = self.actors[index].position;
        let candidates: Vec<usize> = (0..self.gates.len())
            .filter(|&g| {
                let gate = self.gates[g].position;
                gate.x != current.x || gate.y != current.y
            })
            .collect();
        if candidates.is_empty() {
            return;
        }

        let gate = &self.gates[candidates[self.rng.gen_range(0..candidates.len())]];
        let target = to_2d(gate.position);
        self.actors[index].command_move(target, self.recorder.as_mut());
    }

    /// Advance every actor by `delta_time` seconds.
    ///
    /// An actor that fails validation is skipped for this tick; the rest
    /// still update.
    pub fn step(&mut self, delta_time: f64) -> StepReport {
        self.tick += 1;
        if let Some(recorder) = self.recorder.as_mut() {
            recorder.set_tick(self.tick);
        }

        let mut report = StepReport {
            tick: self.tick,
            ..Default::default()
        };

        for i in 0..self.actors.len() {
            let before = self.actors[i].position;
            let outcome = self.actors[i].tick(delta_time, self.recorder.as_mut());
            let actor = &self.actors[i];

            match outcome {
                TickOutcome::Skipped(_) => {
                    report.skipped.push(actor.id);
                    continue;
                }
                TickOutcome::Arrived => report.arrived.push(actor.id),
                TickOutcome::Moving => report.moving += 1,
                TickOutcome::Idle => report.idle += 1,
            }

            let after = actor.position;
            if after != before {
                self.actor_grid.remove(before);
                self.actor_grid.insert(after);
            }
            self.cache.set(&actor.id.to_string(), actor.kind.name(), after);

            for region in self.regions.get_regions_at(after) {
                *self
                    .summary
                    .region_visits
                    .entry(region.id.clone())
                    .or_insert(0) += 1;
            }
        }

        for &id in &report.arrived {
            if let Some(index) = self.actors.iter().position(|a| a.id == id) {
                debug!(actor = id, tick = self.tick, "arrived at gate, retargeting");
                self.send_to_random_gate(index);
            }
        }

        let radius = self.config.gate_trigger_radius;
        report.gate_traffic = self
            .gates
            .iter()
            .map(|gate| (gate.id, self.actor_grid.find_in_radius(gate.position, radius).len()))
            .collect();

        if self.tick % CACHE_SWEEP_INTERVAL == 0 {
            let evicted = self.cache.cleanup();
            if evicted > 0 {
                debug!(evicted, "swept expired coordinates");
            }
        }

        self.summary.ticks = self.tick;
        self.summary.arrivals += report.arrived.len() as u64;
        self.summary.skipped_updates += report.skipped.len() as u64;
        let busiest = report.gate_traffic.iter().map(|&(_, n)| n).max().unwrap_or(0);
        self.summary.peak_gate_traffic = self.summary.peak_gate_traffic.max(busiest);

        report
    }

    /// Run `ticks` fixed steps and return the accumulated summary.
    pub fn run(&mut self, ticks: u64, delta_time: f64) -> &SimulationSummary {
        for _ in 0..ticks {
            self.step(delta_time);
        }
        info!(
            ticks = self.summary.ticks,
            arrivals = self.summary.arrivals,
            skipped = self.summary.skipped_updates,
            "simulation run complete"
        );
        &self.summary
    }
}
