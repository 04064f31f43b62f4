//! # CPR Core - Cluster Policy Report Types

pub mod fingerprint;
pub mod report;
pub mod types;

// Convenience re-exports
pub use report::{ClusterReport, NamespacedReport, Report};
pub use types::{
    CheckResult, ObjectReference, Priority, ReportSummary, ResourceSelector, ResultStatus,
    SelectorOperator, SelectorRequirement, Severity, RESULT_ID_KEY,
};

pub mod prelude {
    pub use crate::fingerprint::Fnv1a;
    pub use crate::report::{ClusterReport, NamespacedReport, Report};
    pub use crate::types::{
        CheckResult, ObjectReference, Priority, ReportSummary, ResourceSelector, ResultStatus,
        Severity, RESULT_ID_KEY,
    };
}
