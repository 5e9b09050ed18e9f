// SPDX-License-Identifier: MIT
//
// hue-rotor: rotate a catalog of color themes in hue order.
//
// This is the host binary that wires the crates together:
//
//   rotor-theme  → shipped catalog, hue ordering, style registry
//   rotor-engine → sequencer, ticker, driver loop
//
// The host supplies the one thing the engine cannot: a surface to draw
// on. Here that is the terminal, one swatch line per applied theme.
//
//   catalog → Sequencer::new (order) → Rotor::run → advance → apply
//                                                      │
//                                     TerminalSurface ◀┘ → stdout
//
// Logs go to stderr so they never interleave with the swatch lines.

mod swatch;

use std::error::Error as _;
use std::io::{self, Write};
use std::process;
use std::time::Duration;

use clap::Parser;
use rotor_engine::{Rotor, RotationConfig, RotorError, Sequencer};
use rotor_theme::{
    Theme, ThemeError, builtin_catalog, max_step, refine_two_opt, sort_by_color_similarity,
    tour_length,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::swatch::{NAME_COLUMNS, TerminalSurface, pad_to};

// ─── CLI ────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "hue-rotor", version)]
#[command(about = "Rotate color themes so each step is a small hue change")]
struct Cli {
    /// Milliseconds between theme changes.
    #[arg(long, value_name = "MS", default_value_t = 3000)]
    period_ms: u64,

    /// Milliseconds each change is animated over (must not exceed the period).
    #[arg(long, value_name = "MS", default_value_t = 2000)]
    transition_ms: u64,

    /// Stop after this many theme changes.
    #[arg(long, value_name = "N")]
    ticks: Option<u64>,

    /// Tighten the greedy order with a 2-opt pass.
    #[arg(long)]
    refine: bool,

    /// Seed for particle colors.
    #[arg(long, default_value_t = 42)]
    seed: u32,

    /// Particles drawn per swatch line.
    #[arg(long, value_name = "N", default_value_t = 12)]
    particles: usize,

    /// Print the ordered cycle and exit.
    #[arg(long)]
    list: bool,

    /// Log each advance.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    const fn config(&self) -> RotationConfig {
        RotationConfig {
            period: Duration::from_millis(self.period_ms),
            transition: Duration::from_millis(self.transition_ms),
            refine: self.refine,
        }
    }
}

// ─── Errors ─────────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("builtin catalog is invalid")]
    Catalog(#[from] ThemeError),

    #[error(transparent)]
    Rotor(#[from] RotorError),

    #[error("cannot write to stdout")]
    Io(#[from] io::Error),
}

// ─── Logging ────────────────────────────────────────────────────────────────

/// Default filter when `RUST_LOG` is unset.
const fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "hue_rotor=debug,rotor_engine=debug,rotor_theme=debug"
    } else {
        "hue_rotor=info,rotor_engine=info"
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

// ─── Commands ───────────────────────────────────────────────────────────────

/// Print the cycle: position, name, primary, hue, and the step to the
/// next theme (the last row's step wraps to the first).
fn list(cycle: &[Theme], out: &mut impl Write) -> io::Result<()> {
    for (i, theme) in cycle.iter().enumerate() {
        let next = &cycle[(i + 1) % cycle.len()];
        let step = rotor_color::hue_distance(theme.hue(), next.hue());
        writeln!(
            out,
            "{:>2}  {}  {}  {:5.1}°  → {:5.1}°",
            i + 1,
            pad_to(theme.name(), NAME_COLUMNS),
            theme.primary(),
            theme.hue(),
            step,
        )?;
    }
    writeln!(
        out,
        "tour {:.1}°, largest step {:.1}°",
        tour_length(cycle),
        max_step(cycle)
    )
}

/// Order the catalog the same way the sequencer will.
fn ordered(catalog: &[Theme], refine: bool) -> Vec<Theme> {
    let mut cycle = sort_by_color_similarity(catalog);
    if refine {
        refine_two_opt(&mut cycle);
    }
    cycle
}

fn run<W: Write>(cli: &Cli, mut out: W) -> Result<(), AppError> {
    let config = cli.config();
    let catalog = builtin_catalog()?;

    // Listing never starts the clock, so timing is not checked here.
    if cli.list {
        list(&ordered(&catalog, config.refine), &mut out)?;
        return Ok(());
    }

    let rotor = Rotor::new(config)?;
    let surface = TerminalSurface::new(out, cli.seed, cli.particles);
    let mut seq = Sequencer::new(&catalog, surface, &config);

    let rotor = match cli.ticks {
        Some(n) => rotor.with_tick_limit(n),
        None => rotor,
    };
    let exit = rotor.run(&mut seq)?;
    info!(?exit, cursor = seq.cursor(), "done");
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli, io::stdout()) {
        eprintln!("hue-rotor: {e}");
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
