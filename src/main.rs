use clap::Parser;
use std::process::ExitCode;
use thiserror::Error;

mod error;
mod histogram;
mod rand;
mod viewer;

use error::LcgError;
use histogram::Histogram;
use rand::Lcg;

const DEFAULT_BIN_EDGES: [i64; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Width of the longest bar in the text histogram
const BAR_WIDTH: usize = 40;

/// Generate pseudo-random integers with a linear congruential generator
/// and show how they are distributed
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Multiplier (a)
    #[arg(short = 'a', long, default_value_t = 5, allow_negative_numbers = true)]
    multiplier: i64,

    /// Increment (c)
    #[arg(short = 'c', long, default_value_t = 1, allow_negative_numbers = true)]
    increment: i64,

    /// Modulus (M), values are generated in 0..M
    #[arg(short = 'm', long, default_value_t = 16, allow_negative_numbers = true)]
    modulus: i64,

    /// Number of values to generate
    #[arg(short = 'n', long, default_value_t = 10, allow_negative_numbers = true)]
    count: i64,

    /// Seed (x0), not part of the output
    #[arg(short = 's', long, default_value_t = 3, allow_negative_numbers = true)]
    seed: i64,

    /// Comma separated histogram bin edges
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = DEFAULT_BIN_EDGES,
        allow_hyphen_values = true
    )]
    bins: Vec<i64>,

    /// Use one histogram bin per value in 0..M instead of --bins
    #[arg(long, default_value_t = false, conflicts_with = "bins")]
    full_range: bool,

    /// Report tail and cycle length of the sequence
    #[arg(short, long, default_value_t = false)]
    period: bool,

    /// Steps the --period search may take before giving up
    #[arg(long, default_value_t = 1 << 24)]
    period_limit: u64,

    /// Open a window with the histogram
    #[arg(short, long, default_value_t = false)]
    gui: bool,
}

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Lcg(#[from] LcgError),

    #[error("histogram window failed: {0}")]
    Viewer(#[from] eframe::Error),
}

/// Text printed for a run: the sequence, the optional period line and the
/// histogram.
fn report(cli: &Cli, values: &[i64], histogram: &Histogram) -> Result<String, LcgError> {
    let mut lines = vec![format!("{values:?}")];

    if cli.period {
        let lcg = Lcg::new(cli.multiplier, cli.increment, cli.modulus, cli.seed)?;
        lines.push(match lcg.period(cli.period_limit) {
            Some(period) => format!("period: {} (tail {})", period.length, period.tail),
            None => format!("period: > {} steps", cli.period_limit),
        });
    }

    lines.push(histogram.render_text(BAR_WIDTH));
    Ok(lines.join("\n"))
}

fn run(cli: Cli) -> Result<(), RunError> {
    let values = rand::generate(cli.multiplier, cli.increment, cli.modulus, cli.count, cli.seed)?;

    let edges = if cli.full_range {
        Histogram::uniform_edges(cli.modulus)?
    } else {
        cli.bins.clone()
    };
    let histogram = Histogram::from_values(&values, &edges)?;
    println!("{}", report(&cli, &values, &histogram)?);

    if cli.gui {
        let title = format!(
            "a  = {}\nc  = {}\nM  = {}\nn  = {}\nx0 = {}",
            cli.multiplier, cli.increment, cli.modulus, cli.count, cli.seed
        );
        viewer::show(viewer::HistogramApp::new(title, values, histogram))?;
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    log::debug!("{cli:?}");

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
