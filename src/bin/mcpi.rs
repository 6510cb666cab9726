//! mcpi CLI - Monte Carlo estimation of π.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mcpi::config::SimulationConfig;
use mcpi::consts::{DEFAULT_CONFIDENCE_LEVEL, DEFAULT_RADIUS, PI};
use mcpi::render::{RasterRenderer, Renderer};
use mcpi::simulation::Simulation;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "mcpi")]
#[command(version)]
#[command(about = "Estimate π by scattering points over a square")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Seed for the random number generator (OS entropy if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one simulation and report the estimate
    Estimate {
        /// Number of points to draw
        #[arg(short = 'n', long = "samples", default_value = "100000")]
        n: usize,

        /// Radius of the inscribed circle
        #[arg(short, long, default_value_t = DEFAULT_RADIUS)]
        radius: f64,

        /// Confidence level for the reported interval
        #[arg(short, long, default_value_t = DEFAULT_CONFIDENCE_LEVEL)]
        confidence: f64,

        /// Write a picture of the points to this PNG file
        #[arg(short, long)]
        plot: Option<PathBuf>,

        /// Picture width and height in pixels
        #[arg(long, default_value = "600")]
        size: u32,
    },

    /// Sweep sample sizes and report theoretical confidence intervals
    Converge {
        /// Comma-separated sample sizes
        #[arg(
            long,
            value_delimiter = ',',
            default_value = "100,1000,10000,100000"
        )]
        sizes: Vec<usize>,

        /// Confidence level for the intervals
        #[arg(short, long, default_value_t = DEFAULT_CONFIDENCE_LEVEL)]
        confidence: f64,
    },
}

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set subscriber")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    let base = SimulationConfig {
        seed: cli.seed,
        ..SimulationConfig::default()
    };

    match cli.command {
        Commands::Estimate {
            n,
            radius,
            confidence,
            plot,
            size,
        } => {
            let config = base
                .with_radius(radius)
                .with_confidence_level(confidence);
            let mut sim = Simulation::from_config(&config)
                .context("Invalid simulation settings")?;

            let run = sim.run(n).context("Simulation failed")?;
            let est = run.estimate();
            let (lower, upper) =
                est.confidence_interval(config.confidence_level)?;

            println!("Total samples:        {}", est.n_samples());
            println!("Points inside circle: {}", est.n_inside());
            println!("π estimate:           {:.6}", est.pi_estimate());
            println!("Absolute error:       {:.6}", est.abs_error());
            println!("Standard error:       {:.6}", est.std_error());
            println!(
                "{:.0}% interval:        [{:.6}, {:.6}]",
                config.confidence_level * 100.0,
                lower,
                upper
            );
            println!("π:                    {:.6}", PI);

            if let Some(path) = plot {
                let renderer = RasterRenderer::new(size, size)?;
                renderer.render(run.samples()).save(&path).with_context(
                    || format!("Failed to save plot to {:?}", path),
                )?;
                info!("Plot written to {:?}", path);
            }
        }

        Commands::Converge { sizes, confidence } => {
            let config = base.with_confidence_level(confidence);
            let mut sim = Simulation::from_config(&config)
                .context("Invalid simulation settings")?;
            let report = sim
                .analyze_convergence(&sizes, config.confidence_level)
                .context("Convergence analysis failed")?;

            println!(
                "{:.0}% intervals, z = {:.6}",
                report.confidence_level() * 100.0,
                report.z_score()
            );
            println!(
                "{:>12} {:>10} {:>10} {:>10} {:>10}",
                "n", "estimate", "lower", "upper", "width"
            );
            for pt in report.iter() {
                println!(
                    "{:>12} {:>10.6} {:>10.6} {:>10.6} {:>10.6}",
                    pt.n_samples(),
                    pt.estimate(),
                    pt.lower_bound(),
                    pt.upper_bound(),
                    pt.ci_width()
                );
            }
        }
    }

    Ok(())
}
