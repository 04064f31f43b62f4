use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Outcome of a single policy rule evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    /// The policy requirements are met
    Pass,

    /// The policy requirements are not met
    Fail,

    /// The policy requirements are not met and the policy is not scored
    Warn,

    /// The policy could not be evaluated
    Error,

    /// The policy was not selected based on user inputs or applicability
    Skip,
}

impl ResultStatus {
    /// Canonical lowercase label
    pub fn label(&self) -> &'static str {
        match self {
            ResultStatus::Pass => "pass",
            ResultStatus::Fail => "fail",
            ResultStatus::Warn => "warn",
            ResultStatus::Error => "error",
            ResultStatus::Skip => "skip",
        }
    }

    /// Parse a canonical label; anything else is no status at all
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "pass" => Some(ResultStatus::Pass),
            "fail" => Some(ResultStatus::Fail),
            "warn" => Some(ResultStatus::Warn),
            "error" => Some(ResultStatus::Error),
            "skip" => Some(ResultStatus::Skip),
            _ => None,
        }
    }
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Criticality classification supplied by the evaluating engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Info,
}

impl Severity {
    /// Canonical lowercase label
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::Info => "info",
        }
    }

    /// Parse a canonical label; anything else means unclassified
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "critical" => Some(Severity::Critical),
            "high" => Some(Severity::High),
            "medium" => Some(Severity::Medium),
            "low" => Some(Severity::Low),
            "info" => Some(Severity::Info),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Decode an optional status; unknown labels degrade to absent, never an error
pub(crate) fn lenient_status<'de, D>(deserializer: D) -> Result<Option<ResultStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let label = Option::<String>::deserialize(deserializer)?;
    Ok(label.as_deref().and_then(ResultStatus::from_label))
}

/// Decode an optional severity; unknown labels degrade to absent, never an error
pub(crate) fn lenient_severity<'de, D>(deserializer: D) -> Result<Option<Severity>, D::Error>
where
    D: Deserializer<'de>,
{
    let label = Option::<String>::deserialize(deserializer)?;
    Ok(label.as_deref().and_then(Severity::from_label))
}
