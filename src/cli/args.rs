use std::path::PathBuf;

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_ACTORS: usize = 24;
pub const DEFAULT_TICKS: u64 = 600;
pub const DEFAULT_DT: f64 = 1.0 / 60.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub seed: u64,
    pub actors: usize,
    pub ticks: u64,
    /// Seconds per tick
    pub dt: f64,
    pub config: Option<PathBuf>,
    pub verbose: bool,
    pub help: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            actors: DEFAULT_ACTORS,
            ticks: DEFAULT_TICKS,
            dt: DEFAULT_DT,
            config: None,
            verbose: false,
            help: false,
        }
    }
}

pub fn usage() -> String {
    [
        "Usage: spacenav [OPTIONS]",
        "",
        "Options:",
        "  -s, --seed <INT>      Seed for the random number generator (default 42)",
        "  -n, --actors <INT>    Number of ships to simulate (default 24)",
        "  -t, --ticks <INT>     Number of ticks to run (default 600)",
        "      --dt <SECONDS>    Seconds per tick (default 1/60)",
        "  -c, --config <PATH>   Engine configuration JSON file",
        "  -v, --verbose         Debug logging",
        "  -h, --help            Print help",
    ]
    .join("\n")
}

fn value_for<I: Iterator<Item = String>>(flag: &str, iter: &mut I) -> Result<String, String> {
    iter.next().ok_or_else(|| format!("{} requires a value", flag))
}

fn number<T: std::str::FromStr>(flag: &str, raw: &str) -> Result<T, String> {
    raw.parse::<T>()
        .map_err(|_| format!("{} expects a number, got '{}'", flag, raw))
}

/// Parse arguments, not including the program name.
pub fn parse_from<I, S>(args: I) -> Result<Args, String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut parsed = Args::default();
    let mut iter = args.into_iter().map(Into::into);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" | "-s" => parsed.seed = number(&arg, &value_for(&arg, &mut iter)?)?,
            "--actors" | "-n" => parsed.actors = number(&arg, &value_for(&arg, &mut iter)?)?,
            "--ticks" | "-t" => parsed.ticks = number(&arg, &value_for(&arg, &mut iter)?)?,
            "--dt" => {
                let dt: f64 = number(&arg, &value_for(&arg, &mut iter)?)?;
                if !dt.is_finite() || dt <= 0.0 {
                    return Err(format!("--dt must be a positive number of seconds, got {}", dt));
                }
                parsed.dt = dt;
            }
            "--config" | "-c" => parsed.config = Some(PathBuf::from(value_for(&arg, &mut iter)?)),
            "--verbose" | "-v" => parsed.verbose = true,
            "--help" | "-h" => parsed.help = true,
            other => return Err(format!("unknown argument: {}", other)),
        }
    }

    Ok(parsed)
}

pub fn parse() -> Result<Args, String> {
    parse_from(std::env::args().skip(1))
}
