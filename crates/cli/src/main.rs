//! # streamwatch-cli
//!
//! Command-line interface for the streamwatch anomaly detection library.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use anomaly::{
    create_alert, ForestConfig, ForestEnsembleDetector, MemorySink, ScoredPoint, StreamMonitor,
    WindowConfig, WindowStatDetector,
};
use stream::{SyntheticConfig, SyntheticStream};

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "streamwatch")]
#[command(about = "Streaming anomaly detection CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a synthetic seasonal stream
    Simulate {
        /// Number of values to generate
        #[arg(short, long, default_value = "1000")]
        len: usize,

        /// Seasonal period in stream positions
        #[arg(long, default_value = "100")]
        period: f64,

        /// Standard deviation of the Gaussian noise
        #[arg(long, default_value = "1.0")]
        noise: f64,

        /// Per-value spike probability
        #[arg(long, default_value = "0.02")]
        spike_probability: f64,

        /// Generator seed for reproducible streams
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output file for the generated samples (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Detect anomalies in a stream
    Detect {
        /// Input file (CSV or JSON); a synthetic stream is generated when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Detection method (zscore, forest)
        #[arg(short, long, default_value = "zscore")]
        method: String,

        /// Trailing baseline window size for zscore
        #[arg(short, long, default_value = "100")]
        window: usize,

        /// Z-score cutoff in standard deviations
        #[arg(short, long, default_value = "3.0")]
        threshold: f64,

        /// Ensemble width for forest
        #[arg(long, default_value = "40")]
        trees: usize,

        /// Retained-point bound per tree
        #[arg(long, default_value = "256")]
        capacity: usize,

        /// Score cutoff for flagging forest outcomes
        #[arg(long, default_value = "5.0")]
        score_threshold: f64,

        /// Stream length when generating synthetic input
        #[arg(short, long, default_value = "1000")]
        len: usize,

        /// Seed for synthetic input and forest randomness
        #[arg(long)]
        seed: Option<u64>,

        /// Column name or index for time series values in file input
        #[arg(short, long)]
        column: Option<String>,

        /// Output file for the JSON report
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Load time series data from a CSV file
fn load_csv_data(path: &PathBuf, column: Option<&str>) -> CliResult<Vec<f64>> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let headers = reader
        .headers()
        .map_err(|e| format!("Failed to read headers: {}", e))?
        .clone();

    let col_idx = if let Some(col) = column {
        if let Ok(idx) = col.parse::<usize>() {
            idx
        } else {
            headers
                .iter()
                .position(|h| h == col)
                .ok_or_else(|| format!("Column '{}' not found", col))?
        }
    } else {
        0
    };

    let mut data = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| format!("Failed to read record: {}", e))?;
        if let Some(value) = record.get(col_idx) {
            if let Ok(num) = value.trim().parse::<f64>() {
                data.push(num);
            }
        }
    }

    if data.is_empty() {
        return Err("No numeric data found in the specified column".to_string());
    }

    Ok(data)
}

/// Load time series data from a JSON file
fn load_json_data(path: &PathBuf, column: Option<&str>) -> CliResult<Vec<f64>> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let reader = BufReader::new(file);
    let json: serde_json::Value =
        serde_json::from_reader(reader).map_err(|e| format!("Failed to parse JSON: {}", e))?;

    // Handle array of numbers
    if let Some(arr) = json.as_array() {
        if arr.iter().all(|v| v.is_number()) {
            return Ok(arr.iter().filter_map(|v| v.as_f64()).collect());
        }

        // Handle array of objects, preferring the requested column
        if let Some(col) = column {
            let data: Vec<f64> = arr
                .iter()
                .filter_map(|obj| obj.get(col).and_then(|v| v.as_f64()))
                .collect();
            if !data.is_empty() {
                return Ok(data);
            }
        }

        for key in &["value", "values", "data", "y"] {
            let data: Vec<f64> = arr
                .iter()
                .filter_map(|obj| obj.get(*key).and_then(|v| v.as_f64()))
                .collect();
            if !data.is_empty() {
                return Ok(data);
            }
        }
    }

    // Handle object with data array
    if let Some(obj) = json.as_object() {
        for key in &["data", "values", "series", "y"] {
            if let Some(arr) = obj.get(*key).and_then(|v| v.as_array()) {
                let data: Vec<f64> = arr.iter().filter_map(|v| v.as_f64()).collect();
                if !data.is_empty() {
                    return Ok(data);
                }
            }
        }
    }

    Err("Could not extract numeric data from JSON".to_string())
}

/// Load data from file (auto-detect format)
fn load_data(path: &PathBuf, column: Option<&str>) -> CliResult<Vec<f64>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => load_csv_data(path, column),
        "json" => load_json_data(path, column),
        _ => load_csv_data(path, column).or_else(|_| load_json_data(path, column)),
    }
}

/// Run stream simulation command
fn run_simulate(
    len: usize,
    period: f64,
    noise: f64,
    spike_probability: f64,
    seed: Option<u64>,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let mut config = SyntheticConfig::new(len);
    config.seasonal_period = period;
    config.noise_level = noise;
    config.spike_probability = spike_probability;
    config.seed = seed;

    let samples = SyntheticStream::new(config)
        .map_err(|e| e.to_string())?
        .samples();
    log::info!("generated {} samples", samples.len());

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for sample in &samples {
        min = min.min(sample.value);
        max = max.max(sample.value);
        sum += sample.value;
    }

    println!("Generated {} values", samples.len());
    println!("  min:  {:.4}", min);
    println!("  max:  {:.4}", max);
    println!("  mean: {:.4}", sum / samples.len() as f64);

    if let Some(path) = output {
        let mut file =
            File::create(&path).map_err(|e| format!("Failed to create output: {}", e))?;
        serde_json::to_writer_pretty(&mut file, &samples)
            .map_err(|e| format!("Failed to write JSON: {}", e))?;
        println!("Samples written to {:?}", path);
    }

    Ok(())
}

/// Resolve the input values for detection: file contents or a fresh
/// synthetic stream.
fn resolve_input(
    input: Option<&PathBuf>,
    column: Option<&str>,
    len: usize,
    seed: Option<u64>,
) -> CliResult<Vec<f64>> {
    match input {
        Some(path) => {
            let data = load_data(path, column)?;
            println!(
                "Loaded {} data points from {:?}",
                data.len(),
                path.file_name().unwrap_or_default()
            );
            Ok(data)
        }
        None => {
            let mut config = SyntheticConfig::new(len);
            config.seed = seed;
            let values = SyntheticStream::new(config)
                .map_err(|e| e.to_string())?
                .generate();
            println!("Generated a synthetic stream of {} points", values.len());
            Ok(values)
        }
    }
}

/// Run anomaly detection command
#[allow(clippy::too_many_arguments)]
fn run_detect(
    input: Option<PathBuf>,
    method: String,
    window: usize,
    threshold: f64,
    trees: usize,
    capacity: usize,
    score_threshold: f64,
    len: usize,
    seed: Option<u64>,
    column: Option<String>,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let values = resolve_input(input.as_ref(), column.as_deref(), len, seed)?;

    let (points, parameters) = match method.to_lowercase().as_str() {
        "zscore" | "z-score" => {
            let config = WindowConfig::new(window, threshold);
            let detector = WindowStatDetector::from_config(&config).map_err(|e| e.to_string())?;
            let parameters = serde_json::json!({
                "window_size": config.window_size,
                "threshold": config.threshold,
            });
            (run_monitor(detector, &values)?, parameters)
        }
        "forest" => {
            let mut config = ForestConfig::new(trees, capacity);
            config.seed = seed;
            let detector = ForestEnsembleDetector::new(&config).map_err(|e| e.to_string())?;
            let parameters = serde_json::json!({
                "num_trees": config.num_trees,
                "tree_capacity": config.tree_capacity,
                "score_threshold": score_threshold,
            });
            (run_monitor(detector, &values)?, parameters)
        }
        _ => return Err(format!("Unknown method: {}. Use 'zscore' or 'forest'", method)),
    };

    let flagged: Vec<&ScoredPoint> = points
        .iter()
        .filter(|p| p.outcome.is_anomalous(score_threshold))
        .collect();

    println!("Detection method: {}", method);
    println!("Anomalies found: {}", flagged.len());

    if !flagged.is_empty() {
        println!("\nAnomaly details:");
        for point in &flagged {
            if let Some(alert) = create_alert(point, score_threshold) {
                println!("  [{:?}] {}", alert.severity, alert.message);
            }
        }
    }

    let json = serde_json::json!({
        "method": method,
        "parameters": parameters,
        "total_points": points.len(),
        "anomaly_count": flagged.len(),
        "anomaly_indices": flagged.iter().map(|p| p.index).collect::<Vec<_>>(),
        "anomalies": flagged.iter().map(|p| {
            serde_json::json!({
                "index": p.index,
                "value": p.value,
                "outcome": p.outcome,
            })
        }).collect::<Vec<_>>()
    });

    if let Some(path) = output {
        let mut file =
            File::create(&path).map_err(|e| format!("Failed to create output: {}", e))?;
        serde_json::to_writer_pretty(&mut file, &json)
            .map_err(|e| format!("Failed to write JSON: {}", e))?;
        println!("\nResults written to {:?}", path);
    }

    Ok(())
}

/// Drive a scorer over the full value sequence, collecting every point.
fn run_monitor<S: anomaly::StreamScorer>(scorer: S, values: &[f64]) -> CliResult<Vec<ScoredPoint>> {
    let mut monitor = StreamMonitor::new(scorer);
    let mut sink = MemorySink::new();
    monitor
        .run(values.iter().copied(), &mut sink)
        .map_err(|e| e.to_string())?;
    Ok(sink.into_points())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            len,
            period,
            noise,
            spike_probability,
            seed,
            output,
        } => run_simulate(len, period, noise, spike_probability, seed, output),
        Commands::Detect {
            input,
            method,
            window,
            threshold,
            trees,
            capacity,
            score_threshold,
            len,
            seed,
            column,
            output,
        } => run_detect(
            input,
            method,
            window,
            threshold,
            trees,
            capacity,
            score_threshold,
            len,
            seed,
            column,
            output,
        ),
    };

    if let Err(message) = result {
        eprintln!("Error: {}", message);
        std::process::exit(1);
    }
}
