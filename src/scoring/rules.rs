//! Point awards.

use serde::{Deserialize, Serialize};

/// Points awarded for citizen activity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    /// Base points per report
    pub report_points: u32,
    /// Extra points for an emergency report
    pub emergency_bonus: u32,
    /// Points to the reporter when their issue is resolved
    pub resolution_bonus: u32,
}

impl ScoringRules {
    /// Points for submitting a report.
    pub fn points_for_report(&self, is_emergency: bool) -> u32 {
        if is_emergency {
            self.report_points + self.emergency_bonus
        } else {
            self.report_points
        }
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            report_points: 3,
            emergency_bonus: 5,
            resolution_bonus: 10,
        }
    }
}
