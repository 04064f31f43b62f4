//! # Report Result Types
//!
//! Core data structures for policy evaluation results: the outcome and
//! severity vocabulary, the internal priority weighting, the per-result
//! record with its memoized fingerprint, and the per-status summary.
//!
//! ## Core Types
//! - [`CheckResult`] - Record of one policy rule evaluation
//! - [`Priority`] - Internal ordered urgency classification
//! - [`ReportSummary`] - Per-status counters over a result set
//! - [`ObjectReference`] / [`ResourceSelector`] - Evaluated object references

pub mod priority;
pub mod resource;
pub mod result;
pub mod status;
pub mod summary;

// Re-export all public types for convenient access
pub use priority::Priority;
pub use resource::{ObjectReference, ResourceSelector, SelectorOperator, SelectorRequirement};
pub use result::{CheckResult, RESULT_ID_KEY};
pub use status::{ResultStatus, Severity};
pub use summary::ReportSummary;
