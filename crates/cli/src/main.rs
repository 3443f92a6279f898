//! Command-line front end for the pattern generator.
//!
//! Thin collaborator only: argument/prompt handling and reporting. All shape
//! logic lives in `omino`; malformed user input is handled here and never
//! reaches the core.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::fmt::SubscriberBuilder;

use omino::grid::Shape;
use omino::pattern::{generate_with, SymmetryCfg};

#[derive(Parser)]
#[command(name = "omino")]
#[command(about = "Enumerate unique connected lattice patterns")]
struct Cmd {
    /// Count rotated variants as distinct patterns
    #[arg(long, global = true)]
    no_rotations: bool,

    /// Count mirrored variants as distinct patterns
    #[arg(long, global = true)]
    no_mirrors: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Report how many unique patterns exist for a point count
    Count { points: Option<i64> },
    /// Print every unique pattern
    List {
        points: Option<i64>,
        /// Print coordinate pairs instead of text grids
        #[arg(long)]
        coords: bool,
    },
    /// Print a JSON report on stdout
    Report { points: Option<i64> },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = SymmetryCfg {
        rotations: !cmd.no_rotations,
        mirrors: !cmd.no_mirrors,
    };
    match cmd.action {
        Action::Count { points } => count(resolve_points(points)?, cfg),
        Action::List { points, coords } => list(resolve_points(points)?, cfg, coords),
        Action::Report { points } => report(resolve_points(points)?, cfg),
    }
}

/// Take the point count from the arguments, or prompt for one.
fn resolve_points(arg: Option<i64>) -> Result<i64> {
    match arg {
        Some(n) if n < 0 => bail!("point count must be non-negative, got {n}"),
        Some(n) => Ok(n),
        None => prompt_points(),
    }
}

/// Prompt on stdin until a non-negative integer arrives. Malformed lines
/// re-prompt; they never propagate into the generator.
fn prompt_points() -> Result<i64> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("How many points should this shape have? ");
        io::stdout().flush().context("flushing prompt")?;
        let Some(line) = lines.next() else {
            bail!("stdin closed before a point count was given");
        };
        match parse_points(&line.context("reading stdin")?) {
            Ok(n) => return Ok(n),
            Err(msg) => println!("{msg}\n"),
        }
    }
}

fn parse_points(input: &str) -> Result<i64, String> {
    let n: i64 = input
        .trim()
        .parse()
        .map_err(|_| String::from("Please enter an integer"))?;
    if n < 0 {
        return Err(String::from("Number must be non-negative"));
    }
    Ok(n)
}

fn count(points: i64, cfg: SymmetryCfg) -> Result<()> {
    let shapes = generate_with(points, cfg).context("generating patterns")?;
    tracing::info!(points, count = shapes.len(), "generated");
    println!("There are {} unique patterns", shapes.len());
    Ok(())
}

fn list(points: i64, cfg: SymmetryCfg, coords: bool) -> Result<()> {
    let shapes = generate_with(points, cfg).context("generating patterns")?;
    for (i, shape) in shapes.iter().enumerate() {
        if coords {
            println!("{shape}");
        } else {
            if i > 0 {
                println!();
            }
            print!("{}", shape.grid_string().context("rendering pattern")?);
        }
    }
    println!("There are {} unique patterns", shapes.len());
    Ok(())
}

#[derive(Serialize)]
struct Report {
    version: &'static str,
    params: ReportParams,
    count: usize,
    shapes: Vec<Vec<[i32; 2]>>,
}

#[derive(Serialize)]
struct ReportParams {
    points: i64,
    rotations: bool,
    mirrors: bool,
}

fn report(points: i64, cfg: SymmetryCfg) -> Result<()> {
    let shapes = generate_with(points, cfg).context("generating patterns")?;
    let doc = Report {
        version: omino::VERSION,
        params: ReportParams {
            points,
            rotations: cfg.rotations,
            mirrors: cfg.mirrors,
        },
        count: shapes.len(),
        shapes: shapes.iter().map(shape_pairs).collect(),
    };
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn shape_pairs(shape: &Shape) -> Vec<[i32; 2]> {
    shape.sorted_points().iter().map(|p| [p.x, p.y]).collect()
}
