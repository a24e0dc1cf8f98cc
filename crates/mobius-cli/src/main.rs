//! mobius: Command-line interface for Möbius strip measurement.
//!
//! Computes the surface mesh, estimated surface area, and estimated
//! boundary edge length of a Möbius strip from its radius, width, and
//! resolution. Parameters not given as flags are prompted for on stdin,
//! in the order R, then w, then n.
//!
//! # Logging
//!
//! Set the `RUST_LOG` environment variable to control log output:
//! - `RUST_LOG=mobius_geom=debug` - Per-operation results
//! - `RUST_LOG=mobius_geom::timing=debug` - Performance timing
//! - `RUST_LOG=debug` - All debug output
//!
//! # Example
//!
//! ```bash
//! # Fully scripted
//! mobius --radius 1.0 --width 0.3 --resolution 300
//!
//! # Interactive, with JSON output
//! mobius --format json
//! ```

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use miette::Diagnostic;
use serde::Serialize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use mobius_geom::MobiusStrip;

mod output;

/// mobius - measure a Möbius strip surface.
///
/// Generates the strip's parametric point mesh and reports the numerical
/// surface-area and edge-length estimates.
#[derive(Parser)]
#[command(name = "mobius")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Centerline radius R
    #[arg(long, short = 'r')]
    radius: Option<f64>,

    /// Strip width w (non-negative)
    #[arg(long, short = 'w')]
    width: Option<f64>,

    /// Samples per axis n (at least 2)
    #[arg(long, short = 'n')]
    resolution: Option<usize>,

    /// Output format for results
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Suppress all non-error output
    #[arg(long, short)]
    quiet: bool,

    /// Increase output verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for scripting
    Json,
}

/// Result record for one measured strip.
#[derive(Serialize)]
struct StripReport {
    radius: f64,
    width: f64,
    resolution: usize,
    grid_points: usize,
    grid_cells: usize,
    surface_area: f64,
    edge_length: f64,
}

/// Initialize the tracing subscriber based on verbosity level.
fn init_tracing(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    // RUST_LOG wins; otherwise map -v flags to a filter.
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "mobius_geom=info",
            2 => "mobius_geom=debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

/// Read one value from stdin, failing on non-numeric input.
fn prompt<T>(label: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    print!("{label}: ");
    std::io::stdout().flush().context("failed to flush prompt")?;

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("failed to read input")?;
    let trimmed = line.trim();
    trimmed
        .parse::<T>()
        .with_context(|| format!("invalid numeric input {trimmed:?}"))
}

/// Collect the three parameters, prompting for any not given as flags.
fn collect_parameters(cli: &Cli) -> Result<(f64, f64, usize)> {
    let radius = match cli.radius {
        Some(r) => r,
        None => prompt("Enter the radius (R) of the strip")?,
    };
    let width = match cli.width {
        Some(w) => w,
        None => prompt("Enter the width (w) of the strip")?,
    };
    let resolution = match cli.resolution {
        Some(n) => n,
        None => prompt("Enter the resolution (n) of the strip")?,
    };
    Ok((radius, width, resolution))
}

fn run(cli: &Cli) -> Result<()> {
    let (radius, width, resolution) = collect_parameters(cli)?;
    let strip = MobiusStrip::new(radius, width, resolution)?;
    let m = strip.measure();

    let report = StripReport {
        radius,
        width,
        resolution,
        grid_points: m.grid_points,
        grid_cells: m.grid_cells,
        surface_area: m.surface_area,
        edge_length: m.edge_length,
    };

    match cli.format {
        OutputFormat::Json => {
            output::print(&report, cli.format, cli.quiet);
        }
        OutputFormat::Text => {
            if !cli.quiet {
                println!("{}", "Möbius Strip Measurements".bold().underline());
                println!("  {}: {:.4}", "Radius".cyan(), report.radius);
                println!("  {}: {:.4}", "Width".cyan(), report.width);
                println!(
                    "  {}: {} x {} points ({} cells)",
                    "Grid".cyan(),
                    report.resolution,
                    report.resolution,
                    report.grid_cells
                );
                println!("  {}: {:.4}", "Surface area".cyan(), report.surface_area);
                println!("  {}: {:.4}", "Edge length".cyan(), report.edge_length);
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    // Install miette's panic hook for better error display in development
    #[cfg(debug_assertions)]
    miette::set_panic_hook();

    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let result = run(&cli);

    if let Err(e) = &result {
        if !cli.quiet {
            // Check if the error is a miette Diagnostic for enhanced display
            if let Some(geom_err) = e.downcast_ref::<mobius_geom::GeomError>() {
                eprintln!("{}: {}", "Error".red().bold(), geom_err);
                if let Some(code) = geom_err.code() {
                    eprintln!("  {}: {}", "Code".cyan(), code);
                }
                if let Some(help) = geom_err.help() {
                    eprintln!("  {}: {}", "Suggestion".green(), help);
                }
            } else {
                // Fall back to standard error display
                eprintln!("{}: {}", "Error".red().bold(), e);
                for cause in e.chain().skip(1) {
                    eprintln!("  {}: {}", "Caused by".yellow(), cause);
                }
            }
        }
        std::process::exit(1);
    }

    Ok(())
}
