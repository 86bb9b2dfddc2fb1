//! Tabu Search configuration.

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_sequencing::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iter(500)
///     .with_tabu_size(10)
///     .with_neighbor_size(50);
/// assert_eq!(config.max_iter, 500);
/// assert_eq!(config.tabu_size, 10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Maximum number of iterations.
    pub max_iter: usize,
    /// How many recently committed sequences are forbidden.
    pub tabu_size: usize,
    /// Random swap neighbors sampled per iteration.
    pub neighbor_size: usize,
    /// Whether to score neighbors in parallel using rayon.
    pub parallel: bool,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iter: 100,
            tabu_size: 20,
            neighbor_size: 30,
            parallel: true,
        }
    }
}

impl TabuConfig {
    /// Sets the maximum number of iterations.
    pub fn with_max_iter(mut self, n: usize) -> Self {
        self.max_iter = n;
        self
    }

    /// Sets the tabu memory capacity.
    pub fn with_tabu_size(mut self, size: usize) -> Self {
        self.tabu_size = size;
        self
    }

    /// Sets the number of neighbors sampled per iteration.
    pub fn with_neighbor_size(mut self, size: usize) -> Self {
        self.neighbor_size = size;
        self
    }

    /// Enables or disables parallel neighbor evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.neighbor_size == 0 {
            return Err("neighbor_size must be at least 1".into());
        }
        if self.tabu_size == 0 {
            return Err("tabu_size must be at least 1".into());
        }
        Ok(())
    }
}
