use crate::error::{NetfuseError, Result};

/// Configuration for a [`NetworkFuser`](crate::NetworkFuser).
///
/// Held for the fuser's lifetime; there is no mutable process-wide state.
#[derive(Debug, Clone)]
pub struct FuserConfig {
    /// Minimum similarity score, exclusive, for two nodes to be treated as
    /// the same entity. Default: 0.95.
    pub threshold: f64,

    /// Evaluate the all-pairs similarity scan across a rayon thread pool.
    /// Analog insertion is idempotent and commutative, so the resulting
    /// analog set is identical to the sequential scan. Default: false.
    pub parallel: bool,

    /// Log a progress line every N source nodes during the fuse scan.
    /// 0 disables progress logging. Default: 0.
    pub progress_every: usize,
}

impl Default for FuserConfig {
    fn default() -> Self {
        Self {
            threshold: 0.95,
            parallel: false,
            progress_every: 0,
        }
    }
}

impl FuserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_progress_every(mut self, every: usize) -> Self {
        self.progress_every = every;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() {
            return Err(NetfuseError::InvalidInput(format!(
                "threshold must be finite, got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}
