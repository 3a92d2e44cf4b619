//! Integration tests for streamwatch-stream

use stream::{StreamSource, SyntheticConfig, SyntheticStream};

#[test]
fn test_stream_is_finite_and_ordered() {
    let mut stream = SyntheticStream::new(SyntheticConfig::new(100).with_seed(5)).unwrap();
    let mut count = 0;
    while stream.next_value().is_some() {
        count += 1;
    }
    assert_eq!(count, 100);
}

#[test]
fn test_seeded_streams_are_reproducible() {
    let config = SyntheticConfig::new(500).with_seed(2024);
    let first = SyntheticStream::new(config.clone()).unwrap().generate();
    let second = SyntheticStream::new(config).unwrap().generate();
    assert_eq!(first, second);
}

#[test]
fn test_seasonal_component_stays_within_envelope() {
    // With noise and spikes disabled the stream is the pure trend plus
    // seasonal component, bounded by the amplitude around the trend line.
    let config = SyntheticConfig::new(400).with_seed(1).without_noise();
    let values = SyntheticStream::new(config).unwrap().generate();
    for (i, value) in values.iter().enumerate() {
        let trend = 10.0 + 0.005 * i as f64;
        assert!(
            (value - trend).abs() <= 5.0 + 1e-9,
            "position {} outside seasonal envelope: {}",
            i,
            value
        );
    }
}

#[test]
fn test_spikes_raise_values_above_envelope() {
    // Force a spike on every value; each draw adds at least spike_min.
    let mut config = SyntheticConfig::new(200).with_seed(9).without_noise();
    config.spike_probability = 1.0;
    let values = SyntheticStream::new(config).unwrap().generate();
    for (i, value) in values.iter().enumerate() {
        let trend = 10.0 + 0.005 * i as f64;
        assert!(
            value - trend >= 20.0 - 5.0,
            "position {} missing spike: {}",
            i,
            value
        );
    }
}

#[test]
fn test_source_name() {
    let stream = SyntheticStream::new(SyntheticConfig::new(1)).unwrap();
    assert_eq!(stream.name(), "synthetic");
}

#[test]
fn test_invalid_configuration_is_rejected() {
    let mut config = SyntheticConfig::new(10);
    config.spike_probability = -0.1;
    assert!(SyntheticStream::new(config).is_err());
}
