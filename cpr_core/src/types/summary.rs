use serde::{Deserialize, Serialize};

use super::result::CheckResult;
use super::status::ResultStatus;

/// Per-status counters over a set of check results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSummary {
    /// Count of policies whose requirements were met
    pub pass: u64,

    /// Count of policies whose requirements were not met
    pub fail: u64,

    /// Count of non-scored policies whose requirements were not met
    pub warn: u64,

    /// Count of policies that could not be evaluated
    pub error: u64,

    /// Count of policies that were not selected for evaluation
    pub skip: u64,
}

impl ReportSummary {
    /// Fold a result set into per-status totals.
    ///
    /// A pure fold over the input: results without a recognized status
    /// count nowhere, and the input is left untouched.
    pub fn from_results(results: &[CheckResult]) -> Self {
        let mut summary = Self::default();
        for result in results {
            if let Some(status) = result.result {
                summary.increment(status);
            }
        }
        summary
    }

    /// Bump the counter for one outcome
    pub fn increment(&mut self, status: ResultStatus) {
        match status {
            ResultStatus::Pass => self.pass += 1,
            ResultStatus::Fail => self.fail += 1,
            ResultStatus::Warn => self.warn += 1,
            ResultStatus::Error => self.error += 1,
            ResultStatus::Skip => self.skip += 1,
        }
    }

    /// Total number of counted results
    pub fn total(&self) -> u64 {
        self.pass + self.fail + self.warn + self.error + self.skip
    }

    /// Generic map rendering for consumers that take loosely typed payloads
    pub fn to_map(&self) -> Result<serde_json::Map<String, serde_json::Value>, serde_json::Error> {
        serde_json::from_value(serde_json::to_value(self)?)
    }
}
