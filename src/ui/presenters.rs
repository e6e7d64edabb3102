use crate::io::OutputWriter;
use crate::simulation::actor::Actor;
use crate::simulation::generation::Gate;
use crate::simulation::{SimulationSummary, StepReport};

use super::render_adapter::RenderAxis;

pub struct SimulationPresenter;

impl SimulationPresenter {
    pub fn show_header(seed: u64, actors: usize, gates: &[Gate], output: &mut dyn OutputWriter) {
        output.writeln(&format!("SEED {}  SHIPS {}  GATES {}", seed, actors, gates.len()));
        for gate in gates {
            output.writeln(&format!(
                "  GATE {:<8} AT {:>9.1},{:>9.1}",
                gate.name, gate.position.x, gate.position.y
            ));
        }
        output.writeln("");
    }

    /// One line per tick that had arrivals or skipped actors.
    pub fn show_step(report: &StepReport, output: &mut dyn OutputWriter) {
        if report.arrived.is_empty() && report.skipped.is_empty() {
            return;
        }
        output.writeln(&format!(
            "TICK {:>6}  MOVING {:>4}  ARRIVED {:?}  SKIPPED {:?}",
            report.tick, report.moving, report.arrived, report.skipped
        ));
    }

    /// Actor positions with headings as a north-up compass would draw them.
    pub fn show_actors(actors: &[Actor], output: &mut dyn OutputWriter) {
        output.writeln(&format!(
            "{:<6}{:<10}{:<11}{:>20}{:>9}",
            "ID", "KIND", "PROFILE", "POSITION", "BEARING"
        ));
        for actor in actors {
            let bearing = RenderAxis::NorthUp
                .to_render_heading(actor.heading)
                .to_degrees()
                .rem_euclid(360.0);
            output.writeln(&format!(
                "{:<6}{:<10}{:<11}{:>9.1},{:>9.1}{:>9.0}",
                actor.id,
                actor.kind.name(),
                actor.profile,
                actor.position.x,
                actor.position.y,
                bearing
            ));
        }
    }

    pub fn show_summary(summary: &SimulationSummary, output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln(&format!("TICKS RUN          {}", summary.ticks));
        output.writeln(&format!("GATE ARRIVALS      {}", summary.arrivals));
        output.writeln(&format!("SKIPPED UPDATES    {}", summary.skipped_updates));
        output.writeln(&format!("PEAK GATE TRAFFIC  {}", summary.peak_gate_traffic));
        if !summary.region_visits.is_empty() {
            output.writeln("REGION OCCUPANCY (ACTOR-TICKS)");
            for (region, visits) in &summary.region_visits {
                output.writeln(&format!("  {:<18}{}", region, visits));
            }
        }
    }
}
