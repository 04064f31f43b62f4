//! Report document loading.
//!
//! Accepts the three JSON layouts produced by collectors: a namespaced
//! report object, a cluster report object, or a bare array of results.

use std::fs;
use std::path::Path;

use cpr_core::{CheckResult, ClusterReport, NamespacedReport, Report, ReportSummary};
use serde_json::Value;

use crate::error::CliError;

/// Parsed report document in one of the accepted layouts
#[derive(Debug)]
pub enum ReportDocument {
    Namespaced(NamespacedReport),
    Cluster(ClusterReport),
    Results(Vec<CheckResult>),
}

impl ReportDocument {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let raw = fs::read_to_string(path).map_err(|source| CliError::read_failed(path, source))?;
        Self::parse(&raw)
    }

    /// A JSON array is a bare result list; an object is a namespaced
    /// report when it carries a non-empty namespace, a cluster report
    /// otherwise.
    pub fn parse(raw: &str) -> Result<Self, CliError> {
        let value: Value = serde_json::from_str(raw)?;

        match value {
            Value::Array(_) => Ok(Self::Results(serde_json::from_value(value)?)),
            Value::Object(ref object) => {
                let namespaced = object
                    .get("namespace")
                    .and_then(Value::as_str)
                    .is_some_and(|namespace| !namespace.is_empty());

                if namespaced {
                    Ok(Self::Namespaced(serde_json::from_value(value)?))
                } else {
                    Ok(Self::Cluster(serde_json::from_value(value)?))
                }
            }
            _ => Err(CliError::layout("expected an object or an array of results")),
        }
    }

    pub fn results(&self) -> &[CheckResult] {
        match self {
            Self::Namespaced(report) => report.results(),
            Self::Cluster(report) => report.results(),
            Self::Results(results) => results,
        }
    }

    pub fn summary(&self) -> ReportSummary {
        match self {
            Self::Namespaced(report) => report.summary(),
            Self::Cluster(report) => report.summary(),
            Self::Results(results) => ReportSummary::from_results(results),
        }
    }

    /// Short human description for log lines and headers
    pub fn describe(&self) -> String {
        match self {
            Self::Namespaced(report) => {
                format!("namespaced report '{}/{}'", report.namespace, report.name)
            }
            Self::Cluster(report) => format!("cluster report '{}'", report.name),
            Self::Results(results) => format!("result list ({} results)", results.len()),
        }
    }
}
