use serde::{Deserialize, Serialize};

use crate::fingerprint::Fnv1a;
use crate::types::{CheckResult, ObjectReference};

use super::traits::Report;

/// Report bound to a single namespace.
///
/// The container identity is derived from its namespace and name through
/// the same fingerprint hasher the results use, so repeated observations
/// of the same report coordinates resolve to the same identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NamespacedReport {
    /// Container name
    pub name: String,

    /// Namespace the report belongs to
    pub namespace: String,

    /// Engine that manages this report; empty when mixed or unknown
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source: String,

    /// Scope object the results apply to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<ObjectReference>,

    /// Recorded results
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<CheckResult>,
}

impl NamespacedReport {
    /// Empty report at the given coordinates
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            ..Self::default()
        }
    }

    /// Attach results
    pub fn with_results(mut self, results: Vec<CheckResult>) -> Self {
        self.results = results;
        self
    }

    /// Set the managing engine
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }
}

impl Report for NamespacedReport {
    fn id(&self) -> String {
        Fnv1a::new()
            .write_str(&self.namespace)
            .write_str(&self.name)
            .finish()
            .to_string()
    }

    fn scope(&self) -> Option<&ObjectReference> {
        self.scope.as_ref()
    }

    fn results(&self) -> &[CheckResult] {
        &self.results
    }

    fn source(&self) -> String {
        if !self.source.is_empty() {
            return self.source.clone();
        }

        // Fall back to the engine of the first recorded result
        self.results
            .first()
            .and_then(|result| result.source.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ResultStatus, Severity};

    fn report_with_results() -> NamespacedReport {
        let failing = CheckResult {
            source: Some("kyverno".to_string()),
            policy: "require-limits".to_string(),
            resources: vec![ObjectReference::new("Pod", "api-0").with_namespace("prod")],
            result: Some(ResultStatus::Fail),
            severity: Some(Severity::High),
            ..CheckResult::default()
        };
        let passing = CheckResult {
            source: Some("kyverno".to_string()),
            policy: "require-labels".to_string(),
            resources: vec![ObjectReference::new("Deployment", "api").with_namespace("prod")],
            result: Some(ResultStatus::Pass),
            severity: Some(Severity::High),
            ..CheckResult::default()
        };

        NamespacedReport::new("prod", "cpr-prod").with_results(vec![failing, passing])
    }

    #[test]
    fn test_identity_is_deterministic() {
        let report = report_with_results();
        assert_eq!(report.id(), NamespacedReport::new("prod", "cpr-prod").id());
        assert_ne!(report.id(), NamespacedReport::new("dev", "cpr-prod").id());
    }

    #[test]
    fn test_summary_matches_aggregation_of_own_results() {
        let report = report_with_results();
        let summary = report.summary();

        assert_eq!(summary.pass, 1);
        assert_eq!(summary.fail, 1);
        assert_eq!(summary.total(), 2);
    }

    #[test]
    fn test_kinds_and_severities_are_deduplicated() {
        let report = report_with_results();

        assert_eq!(report.kinds(), vec!["Deployment", "Pod"]);
        assert_eq!(report.severities(), vec![Severity::High]);
    }

    #[test]
    fn test_source_falls_back_to_first_result() {
        let report = report_with_results();
        assert_eq!(report.source(), "kyverno");

        let tagged = report_with_results().with_source("falco");
        assert_eq!(tagged.source(), "falco");

        let empty = NamespacedReport::new("prod", "empty");
        assert_eq!(empty.source(), "");
    }

    #[test]
    fn test_scope_defaults_to_none() {
        let report = report_with_results();
        assert!(report.scope().is_none());
    }
}
