//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the generational loop.

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_sequencing::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 30);
/// assert_eq!(config.generations, 30);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_sequencing::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(100)
///     .with_generations(200)
///     .with_mutation_rate(0.05)
///     .with_tournament_size(4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population.
    ///
    /// Must be even: offspring are produced two per parent pair.
    pub population_size: usize,

    /// Number of generations to run. There is no convergence-based early
    /// stop; zero returns the best of the initial population.
    pub generations: usize,

    /// Per-position probability of a swap mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Entrants per tournament.
    ///
    /// - k=2: light pressure (good for diversity)
    /// - k=3: moderate pressure (default)
    /// - k>5: strong pressure (risk of premature convergence)
    pub tournament_size: usize,

    /// Whether to evaluate individuals in parallel using rayon.
    ///
    /// Evaluation draws no randomness, so this never changes the result.
    pub parallel: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 30,
            generations: 30,
            mutation_rate: 0.2,
            tournament_size: 3,
            parallel: true,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the per-position mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Preset for quick answers on small batches.
    ///
    /// - Population: 30, Generations: 50
    pub fn fast() -> Self {
        Self {
            population_size: 30,
            generations: 50,
            ..Self::default()
        }
    }

    /// Preset balancing quality and run time.
    ///
    /// - Population: 60, Generations: 150, Mutation: 0.1
    pub fn balanced() -> Self {
        Self {
            population_size: 60,
            generations: 150,
            mutation_rate: 0.1,
            ..Self::default()
        }
    }

    /// Preset for large batches where quality matters more than latency.
    ///
    /// - Population: 120, Generations: 400, Mutation: 0.05
    pub fn quality() -> Self {
        Self {
            population_size: 120,
            generations: 400,
            mutation_rate: 0.05,
            ..Self::default()
        }
    }

    /// Selects a preset from the number of orders to sequence.
    ///
    /// - `order_count < 50` → [`fast()`](Self::fast)
    /// - `50 ≤ order_count < 200` → [`balanced()`](Self::balanced)
    /// - `order_count ≥ 200` → [`quality()`](Self::quality)
    pub fn auto_select(order_count: usize) -> Self {
        if order_count < 50 {
            Self::fast()
        } else if order_count < 200 {
            Self::balanced()
        } else {
            Self::quality()
        }
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.population_size % 2 != 0 {
            return Err("population_size must be even".into());
        }
        if self.tournament_size == 0 {
            return Err("tournament_size must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err("mutation_rate must be within [0, 1]".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 30);
        assert_eq!(config.generations, 30);
        assert!((config.mutation_rate - 0.2).abs() < 1e-10);
        assert_eq!(config.tournament_size, 3);
        assert!(config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(200)
            .with_generations(1000)
            .with_mutation_rate(0.05)
            .with_tournament_size(5)
            .with_parallel(false);

        assert_eq!(config.population_size, 200);
        assert_eq!(config.generations, 1000);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert_eq!(config.tournament_size, 5);
        assert!(!config.parallel);
    }

    #[test]
    fn test_validate_population_too_small() {
        assert!(GaConfig::default().with_population_size(0).validate().is_err());
    }

    #[test]
    fn test_validate_odd_population() {
        let err = GaConfig::default()
            .with_population_size(11)
            .validate()
            .unwrap_err();
        assert!(err.contains("even"), "unexpected message: {err}");
    }

    #[test]
    fn test_validate_zero_generations_ok() {
        assert!(GaConfig::default().with_generations(0).validate().is_ok());
    }

    #[test]
    fn test_validate_zero_tournament() {
        assert!(GaConfig::default().with_tournament_size(0).validate().is_err());
    }

    #[test]
    fn test_validate_nan_mutation_rate() {
        let config = GaConfig {
            mutation_rate: f64::NAN,
            ..GaConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_clamp_mutation_rate() {
        let config = GaConfig::default().with_mutation_rate(2.0);
        assert!((config.mutation_rate - 1.0).abs() < 1e-10);
        let config = GaConfig::default().with_mutation_rate(-0.5);
        assert!(config.mutation_rate.abs() < 1e-10);
    }

    // ---- Presets ----

    #[test]
    fn test_presets_valid() {
        for config in [GaConfig::fast(), GaConfig::balanced(), GaConfig::quality()] {
            assert!(config.validate().is_ok(), "{config:?}");
        }
    }

    #[test]
    fn test_auto_select_boundaries() {
        assert_eq!(GaConfig::auto_select(49), GaConfig::fast());
        assert_eq!(GaConfig::auto_select(50), GaConfig::balanced());
        assert_eq!(GaConfig::auto_select(199), GaConfig::balanced());
        assert_eq!(GaConfig::auto_select(200), GaConfig::quality());
    }

    #[test]
    fn test_preset_chainable() {
        let config = GaConfig::fast().with_population_size(76);
        assert_eq!(config.population_size, 76);
        assert_eq!(config.generations, 50);
    }
}
