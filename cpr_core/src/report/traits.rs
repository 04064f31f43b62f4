use std::collections::BTreeSet;

use crate::types::{CheckResult, ObjectReference, ReportSummary, Severity};

/// Capability contract every report container must satisfy.
///
/// The provided methods derive the summary and the observed kind and
/// severity sets from [`Report::results`], which keeps them consistent
/// with the aggregation contract for any implementor that does not
/// override them.
pub trait Report {
    /// Stable identity of the container
    fn id(&self) -> String;

    /// Scope object this report applies to; `None` means cluster wide
    fn scope(&self) -> Option<&ObjectReference>;

    /// All results recorded in this report
    fn results(&self) -> &[CheckResult];

    /// Identifier of the engine that produced the results
    fn source(&self) -> String;

    /// Per-status totals over the recorded results
    fn summary(&self) -> ReportSummary {
        ReportSummary::from_results(self.results())
    }

    /// Distinct resource kinds observed across results, duplicates collapsed
    fn kinds(&self) -> Vec<String> {
        let kinds: BTreeSet<String> = self
            .results()
            .iter()
            .flat_map(|result| result.resources.iter())
            .filter(|resource| !resource.kind.is_empty())
            .map(|resource| resource.kind.clone())
            .collect();

        kinds.into_iter().collect()
    }

    /// Distinct severities observed across results, duplicates collapsed
    fn severities(&self) -> Vec<Severity> {
        let severities: BTreeSet<Severity> = self
            .results()
            .iter()
            .filter_map(|result| result.severity)
            .collect();

        severities.into_iter().collect()
    }
}
