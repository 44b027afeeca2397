//! tabfn - tabulated function demonstration driver
//!
//! Prints comparison tables for analytic functions against their tabulated
//! counterparts and exercises every codec with an on-disk round-trip. Pure
//! orchestration: all table semantics live in the library crates.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

use std::f64::consts::PI;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tabfn_codec::{binary, snapshot, text};
use tabfn_core::{tabulate, ArrayTabulated, Function, LinkedTabulated, TabulatedFunction};
use tabfn_functions::basic::{Cos, Exp, Log, Sin};
use tabfn_functions::ops::{composition, power, sum};

const STEP: f64 = 0.1;

#[derive(Parser)]
#[command(name = "tabfn")]
#[command(about = "Tabulated function demo - comparison tables and codec round-trips")]
#[command(version)]
struct Cli {
    /// Directory the scenario writes its files into
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("tabfn={log_level},tabfn_core={log_level},tabfn_codec={log_level}").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    run_scenario(&cli.data_dir)
}

fn run_scenario(data_dir: &Path) -> Result<()> {
    info!(data_dir = %data_dir.display(), "running the demonstration scenario");
    fs::create_dir_all(data_dir)
        .with_context(|| format!("creating data directory {}", data_dir.display()))?;

    println!("=== Analytic sin(x) ===");
    print_function_values(&Sin, 0.0, PI);
    println!("=== Analytic cos(x) ===");
    print_function_values(&Cos, 0.0, PI);

    let tabulated_sin = tabulate(&Sin, 0.0, PI, 10)?;
    let tabulated_cos = tabulate(&Cos, 0.0, PI, 10)?;
    println!("=== sin(x): analytic vs tabulated (10 points) ===");
    compare_functions(&Sin, &tabulated_sin, 0.0, PI);
    println!("=== cos(x): analytic vs tabulated (10 points) ===");
    compare_functions(&Cos, &tabulated_cos, 0.0, PI);

    let sum_squares_10 = sum(power(tabulated_sin, 2.0), power(tabulated_cos, 2.0));
    println!("=== sin^2(x) + cos^2(x) from the 10-point tabulation ===");
    print_function_values(&sum_squares_10, 0.0, PI);

    let sum_squares_25 = sum(
        power(tabulate(&Sin, 0.0, PI, 25)?, 2.0),
        power(tabulate(&Cos, 0.0, PI, 25)?, 2.0),
    );
    println!("=== sin^2(x) + cos^2(x) from the 25-point tabulation ===");
    print_function_values(&sum_squares_25, 0.0, PI);

    text_round_trip(data_dir)?;
    binary_round_trip(data_dir)?;
    snapshot_round_trips(data_dir)?;
    Ok(())
}

/// Tabulate exp over [0, 10], write the text form, read it back, and show
/// both tables at integer arguments.
fn text_round_trip(data_dir: &Path) -> Result<()> {
    let tabulated_exp = tabulate(&Exp, 0.0, 10.0, 11)?;
    let path = data_dir.join("exp_tabulated.txt");

    let mut writer = BufWriter::new(
        File::create(&path).with_context(|| format!("creating {}", path.display()))?,
    );
    text::write(&tabulated_exp, &mut writer)?;
    writer
        .into_inner()
        .map_err(|e| e.into_error())
        .with_context(|| format!("flushing {}", path.display()))?;

    let mut reader = BufReader::new(
        File::open(&path).with_context(|| format!("opening {}", path.display()))?,
    );
    let exp_from_text: ArrayTabulated = text::read(&mut reader)?;

    println!("=== exp(x) text round-trip ===");
    compare_at_integer_points(&tabulated_exp, &exp_from_text, 0.0);
    Ok(())
}

/// Tabulate the natural log over (0, 10], write the binary form, read it
/// back, and show both tables at integer arguments.
fn binary_round_trip(data_dir: &Path) -> Result<()> {
    // ln is undefined at 0, so the interval starts at the smallest
    // positive double instead.
    let log_left = f64::from_bits(1);
    let tabulated_log = tabulate(&Log::natural(), log_left, 10.0, 11)?;
    let path = data_dir.join("ln_tabulated.bin");

    let mut writer = BufWriter::new(
        File::create(&path).with_context(|| format!("creating {}", path.display()))?,
    );
    binary::write(&tabulated_log, &mut writer)?;
    writer
        .into_inner()
        .map_err(|e| e.into_error())
        .with_context(|| format!("flushing {}", path.display()))?;

    let mut reader = BufReader::new(
        File::open(&path).with_context(|| format!("opening {}", path.display()))?,
    );
    let log_from_binary: ArrayTabulated = binary::read(&mut reader)?;

    println!("=== ln(x) binary round-trip (x=0 replaced by the smallest double) ===");
    compare_at_integer_points(&tabulated_log, &log_from_binary, log_left);
    Ok(())
}

/// Tabulate ln(exp(x)) over [0, 10] and snapshot it twice: once from the
/// array backend and once from the linked backend.
fn snapshot_round_trips(data_dir: &Path) -> Result<()> {
    let ln_of_exp = composition(Log::natural(), Exp);
    let tabulated = tabulate(&ln_of_exp, 0.0, 10.0, 11)?;

    let path = data_dir.join("ln_exp_snapshot.bin");
    let mut file =
        File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    snapshot::write(&tabulated, &mut file)?;
    let mut file = File::open(&path).with_context(|| format!("opening {}", path.display()))?;
    let restored: ArrayTabulated = snapshot::read(&mut file)?;
    println!("=== ln(exp(x)) snapshot round-trip (array backend) ===");
    compare_at_integer_points(&tabulated, &restored, 0.0);

    let linked = LinkedTabulated::from_points(tabulated.to_points())?;
    let path = data_dir.join("ln_exp_linked.bin");
    let mut file =
        File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    snapshot::write(&linked, &mut file)?;
    let mut file = File::open(&path).with_context(|| format!("opening {}", path.display()))?;
    let restored: LinkedTabulated = snapshot::read(&mut file)?;
    println!("=== ln(exp(x)) snapshot round-trip (linked backend) ===");
    compare_at_integer_points(&linked, &restored, 0.0);
    Ok(())
}

fn print_function_values<F: Function>(function: &F, left: f64, right: f64) {
    let mut x = left;
    while x <= right + 1e-9 {
        println!("x={x:.2} -> {:.6}", function.value(x));
        x += STEP;
    }
}

fn compare_functions<F: Function, G: Function>(reference: &F, table: &G, left: f64, right: f64) {
    let mut x = left;
    while x <= right + 1e-9 {
        println!(
            "x={x:.2} -> analytic={:.6}; tabulated={:.6}",
            reference.value(x),
            table.value(x)
        );
        x += STEP;
    }
}

fn compare_at_integer_points<F: Function, G: Function>(expected: &F, actual: &G, first: f64) {
    for i in 0..=10 {
        let x = if i == 0 { first } else { f64::from(i) };
        let label = if i == 0 && first != 0.0 {
            // the substituted left bound, marked so it is not read as 0
            format!("{first:.3e}*")
        } else {
            i.to_string()
        };
        println!(
            "x={label} -> expected={:.6}; actual={:.6}",
            expected.value(x),
            actual.value(x)
        );
    }
}
