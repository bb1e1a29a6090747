//! Analyzer configuration.

/// What a batch of top-level forms returns when one of them fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchPolicy {
    /// Stop at the first failing form and report only its error.
    #[default]
    Atomic,
    /// Analyze every form and report every error; the batch still fails as a whole.
    Collect,
}

/// Analyzer configuration
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Failure policy for multi-form batches
    pub batch: BatchPolicy,
    /// Maximum datum nesting the analyzer descends into before giving up
    pub max_depth: usize,
}

/// Default for [`ParseOptions::max_depth`].
///
/// Each level is a handful of analyzer frames; this stays well inside a 2 MiB thread stack in unoptimized builds.
pub const DEFAULT_MAX_DEPTH: usize = 128;

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            batch: BatchPolicy::Atomic,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the batch failure policy
    pub fn with_batch(mut self, batch: BatchPolicy) -> Self {
        self.batch = batch;
        self
    }

    /// Set the maximum nesting depth
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert_eq!(options.batch, BatchPolicy::Atomic);
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_builder_methods() {
        let options = ParseOptions::new().with_batch(BatchPolicy::Collect).with_max_depth(8);
        assert_eq!(options.batch, BatchPolicy::Collect);
        assert_eq!(options.max_depth, 8);
    }
}
