//! Planar two-link arm IK command line.
//!
//! Provides two modes of operation:
//! - `solve`: Compute both elbow configurations for a target point and print
//!   the joint angles in degrees, with ground-collision filtering
//! - `info`: Print workspace crate versions
//!
//! Inputs are centimeters (converted to meters before solving); link lengths
//! default to the last-used values persisted in a TOML settings file.

mod settings;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::debug;

use planarm_core::units::{cm_to_m, m_to_cm};
use planarm_core::{validate_target, ElbowMode, InputError, LinkLengths, SelectionOutcome};
use planarm_ik::{select, solve, validate_candidate};

use crate::settings::{ArmSettings, FileSettingsStore, SettingsError, SettingsStore};

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Planar two-link arm inverse kinematics.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve IK for a target point and print both elbow configurations.
    Solve {
        /// Target x coordinate, in centimeters.
        #[arg(short, long, allow_hyphen_values = true)]
        x: f64,

        /// Target y coordinate, in centimeters (must be >= 0).
        #[arg(short, long, allow_hyphen_values = true)]
        y: f64,

        /// First link length in centimeters (default: last-used value).
        #[arg(long)]
        l1: Option<f64>,

        /// Second link length in centimeters (default: last-used value).
        #[arg(long)]
        l2: Option<f64>,

        /// Previously selected elbow branch, preserved when still valid.
        #[arg(short, long, value_enum)]
        elbow: Option<ElbowArg>,

        /// Settings file for last-used link lengths.
        #[arg(short, long, default_value = "planarm-settings.toml")]
        settings: PathBuf,
    },

    /// Print crate information.
    Info,
}

/// CLI spelling of the elbow branch.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ElbowArg {
    Up,
    Down,
}

impl From<ElbowArg> for ElbowMode {
    fn from(arg: ElbowArg) -> Self {
        match arg {
            ElbowArg::Up => Self::Up,
            ElbowArg::Down => Self::Down,
        }
    }
}

/// App-level failures: bad input or settings I/O.
#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("settings: {0}")]
    Settings(#[from] SettingsError),
}

// ---------------------------------------------------------------------------
// Mode implementations
// ---------------------------------------------------------------------------

fn run_solve(
    x_cm: f64,
    y_cm: f64,
    l1_arg: Option<f64>,
    l2_arg: Option<f64>,
    elbow: Option<ElbowMode>,
    settings_path: PathBuf,
) -> Result<ExitCode, AppError> {
    let store = FileSettingsStore::new(settings_path);
    let saved = store.load()?;
    debug!(l1_cm = saved.l1_cm, l2_cm = saved.l2_cm, "loaded settings");

    let l1_cm = l1_arg.unwrap_or(saved.l1_cm);
    let l2_cm = l2_arg.unwrap_or(saved.l2_cm);

    let links = LinkLengths::new(cm_to_m(l1_cm), cm_to_m(l2_cm))?;
    let target = validate_target(cm_to_m(x_cm), cm_to_m(y_cm))?;

    // Inputs are good: remember the link lengths for next time, like the
    // original form did on every calculate.
    store.save(&ArmSettings { l1_cm, l2_cm })?;
    debug!(path = %store.path().display(), "saved settings");

    println!("target: ({x_cm:.2}, {y_cm:.2}) cm    links: l1 = {l1_cm:.2} cm, l2 = {l2_cm:.2} cm");

    let result = solve(target, &links);
    let outcome = select(&result, &links, elbow);

    if !result.is_reachable() {
        println!("target unreachable (outside the arm's range)");
        return Ok(ExitCode::FAILURE);
    }

    for mode in [ElbowMode::Up, ElbowMode::Down] {
        // Re-derive the ground check per branch so invalid candidates are
        // still shown, just marked.
        let angles = match result.candidate(mode) {
            Some(angles) => angles,
            None => continue,
        };
        let config = validate_candidate(angles, &links);
        let (t1, t2) = config.angles.to_degrees();
        let marker = if config.is_ground_valid {
            "ok"
        } else {
            "below ground"
        };
        println!(
            "{:<11}  theta1 = {t1:8.2} deg  theta2 = {t2:8.2} deg  first joint y = {:6.2} cm  [{marker}]",
            mode.to_string(),
            m_to_cm(config.first_joint_height)
        );
    }

    match outcome {
        SelectionOutcome::NoValidConfiguration => {
            println!("no valid configuration: all solutions are below ground");
            Ok(ExitCode::FAILURE)
        }
        outcome => {
            // selected_mode is Some for both remaining states.
            if let Some(mode) = outcome.selected_mode() {
                println!("selected: {mode}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_info() -> ExitCode {
    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    ExitCode::SUCCESS
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Solve {
            x,
            y,
            l1,
            l2,
            elbow,
            settings,
        } => run_solve(x, y, l1, l2, elbow.map(ElbowMode::from), settings),
        Commands::Info => Ok(run_info()),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
