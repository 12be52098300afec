pub const DEFAULT_MAX_DISTANCE_KM: f64 = 3.0;
pub const DEFAULT_MAX_RESULTS: u32 = 1;

/// Search radius and result cap for the `nearest` endpoints.
///
/// ```
/// use airly_client::NearestOptions;
///
/// let options = NearestOptions::default().max_distance(5.0).max_results(3);
/// assert_eq!(options.max_distance_km, 5.0);
/// assert_eq!(options.max_results, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestOptions {
    /// Search radius around the point, in kilometers.
    pub max_distance_km: f64,
    /// Upper bound on returned installations. Only `installations/nearest` sends it.
    pub max_results: u32,
}

impl Default for NearestOptions {
    fn default() -> Self {
        Self {
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl NearestOptions {
    pub fn max_distance(mut self, km: f64) -> Self {
        self.max_distance_km = km;
        self
    }

    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }
}
