//! Stream source trait definition.

/// Ordered producer of real-valued stream samples.
///
/// Values are consumed strictly once, in arrival order; a single forward
/// pass suffices. Implementations own any randomness they use.
pub trait StreamSource: Send + Sync {
    /// Stream source name.
    fn name(&self) -> &str;

    /// Produce the next value, or `None` once the stream is exhausted.
    fn next_value(&mut self) -> Option<f64>;
}
