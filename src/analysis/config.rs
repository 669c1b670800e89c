use std::time::Duration;

/// Simulated processing latencies for the mock analysis pipeline.
///
/// No real work happens inside the delay window; it only paces the demo so
/// the UI has an "analyzing" phase to render.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Delay before a single-image analysis completes.
    pub single_delay: Duration,

    /// Per-item delay inside a batch run.
    pub batch_item_delay: Duration,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            single_delay: Duration::from_millis(3000),
            batch_item_delay: Duration::from_millis(2000),
        }
    }
}
