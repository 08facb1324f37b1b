use crate::layout::ConfigError;
use crate::query::ResolutionStrategy;
use crate::shape::Size;

/// Options of the overlap removal.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use deoverlap::layout::RemovalOptions;
/// use deoverlap::shape::Size;
///
/// let options = RemovalOptions::default()
///     .with_default_size(Size::new(20.0, 10.0, 1.0))
///     .with_seed(42);
///
/// assert!(!options.active);
/// assert!(options.validate().is_ok());
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RemovalOptions {
    /// Size of the bodies that do not declare one, or that only declare some dimensions.
    pub default_size: Size,
    /// If `true`, run one pass per simulation step. Otherwise, run passes right away
    /// until no overlap is left.
    pub active: bool,
    /// How overlapping pairs are pushed apart.
    pub strategy: ResolutionStrategy,
    /// Upper bound on the number of passes run while waiting for convergence.
    pub max_passes: usize,
    /// Seed of the random directions used for coincident bodies. Taken from the
    /// operating system's entropy if `None`.
    pub seed: Option<u64>,
}

impl Default for RemovalOptions {
    fn default() -> Self {
        Self {
            default_size: Size::default(),
            active: false,
            strategy: ResolutionStrategy::Planar,
            max_passes: Self::DEFAULT_MAX_PASSES,
            seed: None,
        }
    }
}

impl RemovalOptions {
    /// Default value of [`RemovalOptions::max_passes`].
    pub const DEFAULT_MAX_PASSES: usize = 500;

    /// Sets the size used for bodies that do not declare one.
    pub fn with_default_size(mut self, default_size: Size) -> Self {
        self.default_size = default_size;
        self
    }

    /// Selects the stepped (`true`) or the blocking (`false`) mode.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Sets the resolution strategy.
    pub fn with_strategy(mut self, strategy: ResolutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the maximum number of passes run while waiting for convergence.
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Makes the random directions reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that these options can be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some((dimension, value)) = self.default_size.first_invalid_dimension() {
            return Err(ConfigError::InvalidDefaultSize { dimension, value });
        }

        if self.max_passes == 0 {
            return Err(ConfigError::ZeroPassLimit);
        }

        Ok(())
    }
}
