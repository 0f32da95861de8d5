use serde::{Deserialize, Serialize};

/// Charging dials applied on top of the tariff schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentConfig {
    /// Ceiling on what a single day can cost a vehicle.
    pub daily_cap: u32,
    /// How long a charge window stays open after the pass that anchored it.
    pub window_minutes: i64,
    /// Calendar month (1-12) in which the toll is suspended.
    pub toll_free_month: u32,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            daily_cap: 60,
            window_minutes: 60,
            toll_free_month: 7,
        }
    }
}
