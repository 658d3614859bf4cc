//! Compress a signal with the swinging door algorithm and report the ratio.

use clap::Parser;
use rand::Rng;
use std::f64::consts::PI;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use swingdoor::{Compressor, CompressorConfig, Point};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sdt")]
#[command(about = "Compress a time series with swinging door trending")]
#[command(after_help = "CSV FORMAT:\n  \
    Input lines contain: time,value\n  \
    - Lines starting with # are comments\n  \
    - Empty lines are skipped\n  \
    - First line 'time,value' is treated as header and skipped\n  \
    - Times must be strictly increasing\n\n\
CONFIG FILE:\n  \
    TOML with comp_dev (required), comp_max and comp_min (optional).\n  \
    Command line flags override values from the file.")]
struct Args {
    /// Input CSV file with time,value pairs (default: synthetic sine over [0, 2π])
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Number of synthetic samples
    #[arg(short, long, default_value = "100")]
    samples: usize,

    /// Amplitude of uniform noise added to the synthetic signal
    #[arg(long, default_value = "0")]
    noise: f64,

    /// TOML file with compressor settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Half-width of the deviation band (default: 0.05)
    #[arg(long)]
    comp_dev: Option<f64>,

    /// Maximum time without an archived point
    #[arg(long)]
    comp_max: Option<f64>,

    /// Minimum time after an archived point before a new one is considered
    #[arg(long)]
    comp_min: Option<f64>,

    /// Write archived points to this CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// More log output (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

const DEFAULT_COMP_DEV: f64 = 0.05;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

/// Merge the optional config file with command line overrides
fn load_config(args: &Args) -> Result<CompressorConfig, String> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
            toml::from_str(&text).map_err(|e| format!("Invalid config {}: {e}", path.display()))?
        }
        None => CompressorConfig::new(DEFAULT_COMP_DEV),
    };
    if let Some(comp_dev) = args.comp_dev {
        config.comp_dev = comp_dev;
    }
    if let Some(comp_max) = args.comp_max {
        config.comp_max = comp_max;
    }
    if let Some(comp_min) = args.comp_min {
        config.comp_min = comp_min;
    }
    Ok(config)
}

/// Read time,value pairs from a CSV file
fn read_csv(path: &Path) -> Result<Vec<Point>, String> {
    let file = File::open(path).map_err(|e| format!("Failed to open CSV: {e}"))?;
    let reader = BufReader::new(file);
    let mut points = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|e| format!("Failed to read line {}: {}", line_num + 1, e))?;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if trimmed.to_lowercase().starts_with("time") {
            continue;
        }

        let parts: Vec<&str> = trimmed.split(',').collect();
        if parts.len() < 2 {
            return Err(format!("Line {}: expected 'time,value', got '{}'", line_num + 1, trimmed));
        }

        let time: f64 = parts[0]
            .trim()
            .parse()
            .map_err(|e| format!("Line {}: invalid time '{}': {}", line_num + 1, parts[0], e))?;
        let value: f64 = parts[1]
            .trim()
            .parse()
            .map_err(|e| format!("Line {}: invalid value '{}': {}", line_num + 1, parts[1], e))?;

        points.push(Point::new(time, value));
    }

    Ok(points)
}

/// `samples` points of sin(t) over [0, 2π] with optional uniform noise
fn generate_sine(samples: usize, noise: f64) -> Vec<Point> {
    let mut rng = rand::rng();
    let last = samples.saturating_sub(1).max(1) as f64;

    (0..samples)
        .map(|i| {
            let t = 2.0 * PI * (i as f64 / last);
            let jitter = if noise > 0.0 { rng.random_range(-noise..=noise) } else { 0.0 };
            Point::new(t, t.sin() + jitter)
        })
        .collect()
}

fn write_csv(path: &Path, points: &[Point]) -> Result<(), String> {
    let file = File::create(path).map_err(|e| format!("Failed to create {}: {e}", path.display()))?;
    let mut out = BufWriter::new(file);
    writeln!(out, "time,value").map_err(|e| format!("Failed to write: {e}"))?;
    for point in points {
        writeln!(out, "{},{}", point.time, point.value).map_err(|e| format!("Failed to write: {e}"))?;
    }
    out.flush().map_err(|e| format!("Failed to write: {e}"))
}

fn run(args: &Args) -> Result<(), String> {
    if !(args.noise.is_finite() && args.noise >= 0.0) {
        return Err(format!("Invalid noise amplitude {}: must be finite and non-negative", args.noise));
    }
    let config = load_config(args)?;
    let mut compressor = Compressor::new(config).map_err(|e| format!("Invalid configuration: {e}"))?;

    let points = match &args.csv {
        Some(path) => {
            let points = read_csv(path)?;
            info!(count = points.len(), path = %path.display(), "read input");
            points
        }
        None => {
            debug!(samples = args.samples, noise = args.noise, "generating sine");
            generate_sine(args.samples, args.noise)
        }
    };

    compressor.compress_all(&points).map_err(|e| format!("Compression failed: {e}"))?;

    let archive = compressor.archive();
    println!("Input points:    {}", compressor.tested_count());
    println!("Archived points: {}", archive.len());
    if let Some(ratio) = compressor.compression_ratio() {
        println!("Compression:     x{ratio:.2}");
    }

    if let Some(output) = &args.output {
        write_csv(output, archive.points())?;
        println!("Output: {}", output.display());
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
