//! Basic example demonstrating synthetic stream generation
//!
//! Run with: cargo run --example basic -p streamwatch-stream

use stream::{SyntheticConfig, SyntheticStream};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== streamwatch-stream Basic Example ===\n");

    let config = SyntheticConfig::new(20).with_seed(42);
    let samples = SyntheticStream::new(config)?.samples();

    println!("Generated {} samples:", samples.len());
    for sample in &samples {
        println!("  {:>4}  {:>10.4}", sample.index, sample.value);
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
