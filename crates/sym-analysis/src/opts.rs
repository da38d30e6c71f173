use serde::{Deserialize, Serialize};

/// Safety bounds for the structural analysis algorithms.
///
/// Every randomised or iterative routine is bounded by one of these
/// values; exhausting a bound raises a typed `Limit` error instead of
/// looping silently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOpts {
    /// Maximum number of derived-series steps. The series of a solvable
    /// group has length at most log2 of the order, so the default covers
    /// every group whose order fits in far more than 64 bits.
    pub derived_depth: usize,
    /// Maximum number of lower-central-series steps.
    pub central_depth: usize,
    /// Random draws per Sylow restart epoch before the search is
    /// considered stagnant.
    pub sylow_trials: usize,
    /// Restart epochs before the Sylow search fails with a limit error.
    pub sylow_restarts: usize,
    /// Random elements probed by the simplicity heuristic after the
    /// generator closures are exhausted.
    pub simplicity_samples: usize,
    /// Largest admissible quotient index; enumeration past this bound is
    /// rejected.
    pub max_quotient_index: usize,
}

impl Default for AnalysisOpts {
    fn default() -> Self {
        Self {
            derived_depth: 96,
            central_depth: 96,
            sylow_trials: 64,
            sylow_restarts: 8,
            simplicity_samples: 8,
            max_quotient_index: 4096,
        }
    }
}
