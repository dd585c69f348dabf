pub const DEFAULT_PUZZLE: &str = "square-root";
pub const PROGRESS_LOG_INTERVAL: usize = 10_000;
// Distinct configurations of the 4x5 square root puzzle fit comfortably.
pub const SEEN_CAPACITY_HINT: usize = 32_768;
pub const DEFAULT_MAX_CONFIGURATIONS: Option<usize> = None;
