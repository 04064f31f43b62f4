use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::status::Severity;

const DEFAULT_LABEL: &str = "";
const DEBUG_LABEL: &str = "debug";
const INFO_LABEL: &str = "info";
const WARNING_LABEL: &str = "warning";
const CRITICAL_LABEL: &str = "critical";
const ERROR_LABEL: &str = "error";

/// Internal result weighting, ordered from least to most urgent.
///
/// The ordering is the declaration order: `Default < Debug < Info <
/// Warning < Critical < Error`. Serialization renders the canonical
/// lowercase label only, never the ordinal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    /// No information available
    #[default]
    Default,

    /// Results without any criticality classification
    Debug,

    /// Low urgency findings
    Info,

    /// Findings an operator should look at
    Warning,

    /// Critical findings
    Critical,

    /// Findings that demand immediate attention
    Error,
}

impl Priority {
    /// Canonical lowercase label; `Default` renders as the empty string
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Default => DEFAULT_LABEL,
            Priority::Debug => DEBUG_LABEL,
            Priority::Info => INFO_LABEL,
            Priority::Warning => WARNING_LABEL,
            Priority::Critical => CRITICAL_LABEL,
            Priority::Error => ERROR_LABEL,
        }
    }

    /// Map a canonical label back to its priority.
    ///
    /// Unknown or empty input maps to `Default`; no label is ever an error.
    pub fn from_label(label: &str) -> Self {
        match label {
            DEBUG_LABEL => Priority::Debug,
            INFO_LABEL => Priority::Info,
            WARNING_LABEL => Priority::Warning,
            CRITICAL_LABEL => Priority::Critical,
            ERROR_LABEL => Priority::Error,
            _ => Priority::Default,
        }
    }

    /// Derive a priority from the supplied severity.
    ///
    /// High severity escalates to the `Error` tier to bias operator
    /// attention toward actionable failures.
    pub fn from_severity(severity: Option<Severity>) -> Self {
        match severity {
            Some(Severity::Critical) => Priority::Critical,
            Some(Severity::High) => Priority::Error,
            Some(Severity::Medium) => Priority::Warning,
            Some(Severity::Low) => Priority::Info,
            Some(Severity::Info) => Priority::Info,
            None => Priority::Debug,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Priority {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(Priority::from_label(&label))
    }
}
