//! Progress reporting for batch runs

/// Observer for fractional batch progress.
///
/// The exporter reports `(rows done) / (rows total)` after each row, so
/// values run from just above 0.0 to exactly 1.0. Purely observational:
/// implementations cannot fail and cannot apply backpressure.
pub trait ProgressSink {
    /// Called after each rendered row with the completed fraction
    fn report(&mut self, fraction: f64);
}

/// Sink that discards all progress updates
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn report(&mut self, _fraction: f64) {}
}
