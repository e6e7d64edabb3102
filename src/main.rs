use std::process;

use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use spacenav::cli::args::{self, Args};
use spacenav::io::TerminalIO;
use spacenav::ui::presenters::SimulationPresenter;
use spacenav::{EngineConfig, Simulation, SpatialResult};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> SpatialResult<()> {
    let config = match &args.config {
        Some(path) => {
            debug!(path = %path.display(), "loading engine config");
            EngineConfig::load(path)?
        }
        None => EngineConfig::default(),
    };

    let mut sim = Simulation::new(args.seed, config, args.actors)?;
    let mut out = TerminalIO;

    println!("*** SPACE NAVIGATION ***");
    println!();
    SimulationPresenter::show_header(args.seed, sim.actors().len(), sim.gates(), &mut out);

    for _ in 0..args.ticks {
        let report = sim.step(args.dt);
        SimulationPresenter::show_step(&report, &mut out);
    }

    SimulationPresenter::show_actors(sim.actors(), &mut out);
    SimulationPresenter::show_summary(sim.summary(), &mut out);
    Ok(())
}

fn main() {
    let args = match args::parse() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!();
            eprintln!("{}", args::usage());
            process::exit(1);
        }
    };

    if args.help {
        println!("{}", args::usage());
        return;
    }

    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
