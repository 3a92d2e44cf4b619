//! Basic example demonstrating streaming anomaly detection
//!
//! Run with: cargo run --example basic -p streamwatch-anomaly

use anomaly::{
    create_alert, Decision, ForestConfig, ForestEnsembleDetector, MemorySink, StreamMonitor,
    WindowStatDetector,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== streamwatch-anomaly Basic Examples ===\n");

    // A calm baseline with two injected spikes.
    let mut values: Vec<f64> = (0..40).map(|i| 10.0 + 0.2 * (i % 5) as f64).collect();
    values[20] = 60.0;
    values[33] = -35.0;

    // 1. Window-statistics detector
    println!("1. WindowStatDetector (window_size=10, threshold=3.0)");
    let mut detector = WindowStatDetector::new(10, 3.0)?;
    let flagged: Vec<usize> = values
        .iter()
        .enumerate()
        .filter(|(_, &v)| detector.observe(v) == Decision::Anomaly)
        .map(|(i, _)| i)
        .collect();
    println!("   Flagged positions: {:?}\n", flagged);

    // 2. Forest ensemble driven through the monitor
    println!("2. ForestEnsembleDetector (num_trees=10, tree_capacity=16)");
    let config = ForestConfig::new(10, 16).with_seed(42);
    let mut monitor = StreamMonitor::new(ForestEnsembleDetector::new(&config)?);
    let mut sink = MemorySink::new();
    monitor.run(values.iter().copied(), &mut sink)?;

    for point in sink.points() {
        if let Some(alert) = create_alert(point, 5.0) {
            println!("   [{:?}] {}", alert.severity, alert.message);
        }
    }

    println!("\n=== Examples Complete ===");
    Ok(())
}
