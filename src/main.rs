//! Edge Polarity Sim - Entry point
//!
//! Runs the polarity scenario on a honeycomb tissue and prints tissue totals.
//!
//! CLI Usage:
//!   cargo run                                  # 6x6 honeycomb, parameters from data/parameters
//!   cargo run -- --cols 4 --rows 4 -t 20.0     # Custom tissue and duration
//!   cargo run -- --csv exports                 # Also write a CSV time series

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use edge_polarity_sim::{
    config::Parameters,
    coupling::EdgeSignalingSolver,
    export::CsvExporter,
    geometry::{EdgeTopology, VertexTissue},
    state::SignalingMetrics,
};

/// Command line options
#[derive(Debug)]
struct Options {
    cols: usize,
    rows: usize,
    end_time: Option<f64>,
    dt: Option<f64>,
    csv_dir: Option<PathBuf>,
    params_dir: Option<PathBuf>,
    seed: u64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            cols: 6,
            rows: 6,
            end_time: None,
            dt: None,
            csv_dir: None,
            params_dir: None,
            seed: 0,
        }
    }
}

fn next_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .with_context(|| format!("{flag} expects a value"))
}

/// Parse CLI arguments
fn parse_args() -> Result<Options> {
    let args: Vec<String> = std::env::args().collect();
    let mut options = Options::default();

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--cols" => options.cols = next_value(&args, &mut i, flag)?.parse()?,
            "--rows" => options.rows = next_value(&args, &mut i, flag)?.parse()?,
            "-t" | "--end-time" => options.end_time = Some(next_value(&args, &mut i, flag)?.parse()?),
            "--dt" => options.dt = Some(next_value(&args, &mut i, flag)?.parse()?),
            "--csv" => options.csv_dir = Some(PathBuf::from(next_value(&args, &mut i, flag)?)),
            "-p" | "--params" => options.params_dir = Some(PathBuf::from(next_value(&args, &mut i, flag)?)),
            "--seed" => options.seed = next_value(&args, &mut i, flag)?.parse()?,
            "--help" | "-h" => {
                println!("Edge Polarity Sim");
                println!();
                println!("Usage: edge_polarity_sim [OPTIONS]");
                println!();
                println!("Options:");
                println!("  --cols N            Honeycomb columns (default: 6)");
                println!("  --rows N            Honeycomb rows (default: 6)");
                println!("  -t, --end-time T    Simulated duration (default: from parameters)");
                println!("  --dt DT             Outer time step (default: from parameters)");
                println!("  --csv DIR           Write a CSV time series into DIR");
                println!("  -p, --params DIR    Parameter directory (default: data/parameters)");
                println!("  --seed N            Seed for initial condition noise (default: 0)");
                println!("  --help, -h          Show this help");
                std::process::exit(0);
            }
            other => bail!("unknown argument {other:?}, see --help"),
        }
        i += 1;
    }

    if options.cols == 0 || options.rows == 0 {
        bail!("tissue needs at least one row and one column");
    }
    Ok(options)
}

fn main() -> Result<()> {
    env_logger::init();

    let options = parse_args()?;

    let mut params = match &options.params_dir {
        Some(dir) => Parameters::load_from_dir(dir),
        None => Parameters::load_or_default(),
    };
    if let Some(end_time) = options.end_time {
        params.simulation.end_time = end_time;
    }
    if let Some(dt) = options.dt {
        if !(dt.is_finite() && dt > 0.0) {
            bail!("--dt must be positive, got {dt}");
        }
        params.simulation.dt = dt;
    }

    log::info!("Edge Polarity Sim starting...");
    let tissue = VertexTissue::honeycomb(options.cols, options.rows);
    let mut solver = EdgeSignalingSolver::from_parameters(tissue, &params, options.seed);

    println!("=== Edge Polarity Sim ===\n");
    println!("Tissue: {}x{} honeycomb", options.cols, options.rows);
    println!("Mesh vertices: {}", solver.tissue.num_vertices());
    println!("Cell perimeter: {:.3}", solver.tissue.perimeter(0));
    println!(
        "dt = {}, end time = {}, D = {}",
        params.simulation.dt, params.simulation.end_time, params.diffusion.unbound_protein_diffusion_coefficient
    );
    println!();

    let mut exporter = match &options.csv_dir {
        Some(dir) => Some(CsvExporter::new(dir)?),
        None => None,
    };

    let sampling = params.simulation.sampling_timestep_multiple.max(1);
    let mut export_error = None;
    let start = Instant::now();

    SignalingMetrics::print_row_header();
    solver.run_sampled(params.simulation.end_time, sampling, |metrics| {
        metrics.print_row();
        if let Some(exporter) = exporter.as_mut() {
            if let Err(e) = exporter.record(metrics) {
                export_error.get_or_insert(e);
            }
        }
    });
    if let Some(e) = export_error {
        return Err(e.context("failed to write CSV time series"));
    }

    let elapsed = start.elapsed();
    let final_metrics = solver.metrics();
    println!();
    println!("Completed {} steps in {:.2?}", final_metrics.steps_elapsed, elapsed);
    println!("Total A (all forms): {:.6}", final_metrics.total_a_all_forms());

    if let Some(exporter) = exporter {
        let path = exporter.finish()?;
        println!("Time series written to {}", path.display());
    }

    Ok(())
}
