//! Baseline construction configuration.

/// Configuration for [`BaselineRunner`](super::BaselineRunner).
///
/// # Examples
///
/// ```
/// use u_route::baseline::BaselineConfig;
///
/// let config = BaselineConfig::default().with_max_passes(50);
/// assert!(config.two_opt);
/// assert_eq!(config.max_passes, 50);
/// ```
#[derive(Debug, Clone)]
pub struct BaselineConfig {
    /// Whether to refine the nearest-neighbor route with 2-opt.
    pub two_opt: bool,

    /// Cap on full 2-opt passes. 0 = run until convergence.
    ///
    /// 2-opt is O(n²) per pass and may need many passes on large
    /// candidate sets; a cap bounds latency at the cost of quality.
    pub max_passes: usize,
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            two_opt: true,
            max_passes: 0,
        }
    }
}

impl BaselineConfig {
    pub fn with_two_opt(mut self, enabled: bool) -> Self {
        self.two_opt = enabled;
        self
    }

    pub fn with_max_passes(mut self, n: usize) -> Self {
        self.max_passes = n;
        self
    }
}
