//! # Report Containers
//!
//! The capability contract every report container exposes to consumers
//! (API and storage layers live elsewhere), plus the two concrete
//! variants: namespace-bound and cluster-scoped reports. The variants are
//! structurally distinct types satisfying the same contract, not a
//! hierarchy.

pub mod cluster;
pub mod namespaced;
pub mod traits;

// Re-export all public types for convenient access
pub use cluster::ClusterReport;
pub use namespaced::NamespacedReport;
pub use traits::Report;
