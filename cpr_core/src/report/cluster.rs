use serde::{Deserialize, Serialize};

use crate::fingerprint::Fnv1a;
use crate::types::{CheckResult, ObjectReference};

use super::traits::Report;

/// Cluster-scoped report, not bound to any namespace.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClusterReport {
    /// Container name
    pub name: String,

    /// Engine that manages this report; empty when mixed or unknown
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source: String,

    /// Scope object the results apply to; usually absent for
    /// cluster-scoped reports
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<ObjectReference>,

    /// Recorded results
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<CheckResult>,
}

impl ClusterReport {
    /// Empty report with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
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

impl Report for ClusterReport {
    fn id(&self) -> String {
        Fnv1a::new().write_str(&self.name).finish().to_string()
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

    fn cluster_report() -> ClusterReport {
        let results = vec![
            CheckResult {
                source: Some("kube-bench".to_string()),
                policy: "api-server-anonymous-auth".to_string(),
                resources: vec![ObjectReference::new("Node", "master-0")],
                result: Some(ResultStatus::Fail),
                severity: Some(Severity::Critical),
                ..CheckResult::default()
            },
            CheckResult {
                source: Some("kube-bench".to_string()),
                policy: "etcd-cert-auth".to_string(),
                resources: vec![ObjectReference::new("Node", "master-0")],
                result: Some(ResultStatus::Pass),
                severity: Some(Severity::Low),
                ..CheckResult::default()
            },
        ];

        ClusterReport::new("cis-benchmark").with_results(results)
    }

    #[test]
    fn test_contract_through_trait_object() {
        let report = cluster_report();
        let abstract_report: &dyn Report = &report;

        assert!(!abstract_report.id().is_empty());
        assert!(abstract_report.scope().is_none());
        assert_eq!(abstract_report.results().len(), 2);
        assert_eq!(abstract_report.source(), "kube-bench");
        assert_eq!(abstract_report.summary().total(), 2);
        assert_eq!(abstract_report.kinds(), vec!["Node"]);
        assert_eq!(
            abstract_report.severities(),
            vec![Severity::Critical, Severity::Low]
        );
    }

    #[test]
    fn test_identity_is_deterministic() {
        assert_eq!(
            ClusterReport::new("cis-benchmark").id(),
            cluster_report().id()
        );
    }

    #[test]
    fn test_explicit_scope_is_exposed() {
        let mut report = cluster_report();
        report.scope = Some(ObjectReference::new("Namespace", "kube-system"));

        assert_eq!(report.scope().unwrap().name, "kube-system");
    }

    #[test]
    fn test_round_trip() {
        let report = cluster_report();
        let json = serde_json::to_string(&report).unwrap();
        let parsed: ClusterReport = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.name, report.name);
        assert_eq!(parsed.results.len(), report.results.len());
        assert_eq!(parsed.summary(), report.summary());
    }
}
