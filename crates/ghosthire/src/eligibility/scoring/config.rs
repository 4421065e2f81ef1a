use serde::{Deserialize, Serialize};

/// Weights for the privacy score.
///
/// All bonuses must be non-negative for the score to stay monotonic in what the
/// applicant withholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub baseline: f64,
    pub points_per_skill: f64,
    pub max_counted_skills: usize,
    pub coarse_location_bonus: f64,
    pub coarse_location_max_chars: usize,
    pub salary_bonus_max: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            baseline: 75.0,
            points_per_skill: 3.0,
            max_counted_skills: 5,
            coarse_location_bonus: 10.0,
            coarse_location_max_chars: 3,
            salary_bonus_max: 10.0,
        }
    }
}
