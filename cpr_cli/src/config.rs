//! Priority mapping configuration.
//!
//! Lets operators pin policies to a fixed priority and give unclassified
//! results a fallback other than `debug`:
//!
//! ```toml
//! default_priority = "warning"
//!
//! [policies]
//! "require-pod-probes" = "critical"
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use cpr_core::{CheckResult, Priority};
use serde::Deserialize;

use crate::error::CliError;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Fallback priority label for results without any classification
    pub default_priority: Option<String>,

    /// Per-policy priority overrides, keyed by policy name
    pub policies: HashMap<String, String>,
}

impl CliConfig {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let raw = fs::read_to_string(path).map_err(|source| CliError::read_failed(path, source))?;
        let config: CliConfig = toml::from_str(&raw)?;
        config.validate()?;

        log::debug!(
            "loaded priority config with {} policy overrides",
            config.policies.len()
        );

        Ok(config)
    }

    /// Reject labels the core would silently map to `Default`
    fn validate(&self) -> Result<(), CliError> {
        for (policy, label) in &self.policies {
            parse_priority_label(label, policy)?;
        }

        if let Some(label) = &self.default_priority {
            parse_priority_label(label, "default_priority")?;
        }

        Ok(())
    }

    /// Resolve the display priority for one result.
    ///
    /// A per-policy override wins over everything; otherwise the result's
    /// own effective priority is used, with `default_priority` replacing
    /// the `debug` tier assigned to unclassified results.
    pub fn resolve(&self, result: &CheckResult) -> Priority {
        if let Some(label) = self.policies.get(&result.policy) {
            return Priority::from_label(label);
        }

        let derived = result.effective_priority();
        if derived == Priority::Debug {
            if let Some(label) = &self.default_priority {
                return Priority::from_label(label);
            }
        }

        derived
    }
}

/// Parse a priority label strictly: anything the core maps to `Default`
/// is rejected here, since a config carrying it is a mistake.
pub fn parse_priority_label(label: &str, scope: &str) -> Result<Priority, CliError> {
    let priority = Priority::from_label(label);
    if priority == Priority::Default && !label.is_empty() {
        return Err(CliError::UnknownPriority {
            label: label.to_string(),
            scope: scope.to_string(),
        });
    }

    Ok(priority)
}
