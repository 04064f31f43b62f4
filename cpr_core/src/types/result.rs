use std::collections::HashMap;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::fingerprint::Fnv1a;

use super::priority::Priority;
use super::resource::{ObjectReference, ResourceSelector};
use super::status::{self, ResultStatus, Severity};

/// Reserved property key carrying a pre-computed identity supplied upstream
pub const RESULT_ID_KEY: &str = "resultID";

/// Record of one policy rule evaluation against zero or more cluster objects.
///
/// Results are immutable once produced, except for the identity cell which
/// is filled lazily on the first call to [`CheckResult::id`]. Neither the
/// identity nor the internal priority is part of the wire shape; upstream
/// collectors that want to assert their own identity scheme carry it in
/// `properties` under [`RESULT_ID_KEY`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckResult {
    /// Identifier of the policy engine that produced this result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Name or identifier of the policy
    pub policy: String,

    /// Name or identifier of the rule within the policy
    #[serde(skip_serializing_if = "String::is_empty")]
    pub rule: String,

    /// Checked cluster objects; the first entry is the primary subject
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<ObjectReference>,

    /// Label selector for checked objects, used instead of explicit
    /// references. With neither, the result applies to the report scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_selector: Option<ResourceSelector>,

    /// Human readable explanation of the outcome
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,

    /// Evaluation outcome; unknown labels decode to absent
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "status::lenient_status"
    )]
    pub result: Option<ResultStatus>,

    /// Whether this result counts toward a pass/fail score
    #[serde(skip_serializing_if = "is_false")]
    pub scored: bool,

    /// Additional free-form information for the policy rule
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub properties: HashMap<String, String>,

    /// Time the result was recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    /// Policy category
    #[serde(skip_serializing_if = "String::is_empty")]
    pub category: String,

    /// Criticality classification; unknown labels decode to absent
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "status::lenient_severity"
    )]
    pub severity: Option<Severity>,

    /// Internal weighting, never serialized
    #[serde(skip)]
    pub priority: Priority,

    /// Memoized content fingerprint, filled on first access
    #[serde(skip)]
    pub(crate) id: OnceLock<String>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl CheckResult {
    /// Result for the given policy with everything else at its zero value
    pub fn new(policy: impl Into<String>) -> Self {
        Self {
            policy: policy.into(),
            ..Self::default()
        }
    }

    /// Primary subject of this result, when explicit references are attached
    pub fn resource(&self) -> Option<&ObjectReference> {
        self.resources.first()
    }

    /// Whether any explicit object reference is attached
    pub fn has_resource(&self) -> bool {
        !self.resources.is_empty()
    }

    /// Stable content-derived identity, computed once and cached.
    ///
    /// An identity supplied upstream under [`RESULT_ID_KEY`] takes
    /// precedence over the hash. Without one, the identity is the decimal
    /// rendering of an FNV-1a hash over the primary resource name and uid,
    /// policy, rule, outcome, category and message, in that order.
    /// Timestamps, severity and other properties are deliberately excluded
    /// so that re-evaluating the same check on the same object reproduces
    /// the same identity.
    pub fn id(&self) -> &str {
        self.id.get_or_init(|| self.compute_id())
    }

    fn compute_id(&self) -> String {
        if let Some(supplied) = self.properties.get(RESULT_ID_KEY) {
            #[cfg(feature = "logging")]
            log::debug!(
                "adopting upstream identity '{}' for policy '{}'",
                supplied,
                self.policy
            );

            return supplied.clone();
        }

        let (name, uid) = match self.resource() {
            Some(resource) => (resource.name.as_str(), resource.uid.as_str()),
            None => ("", ""),
        };

        let hash = Fnv1a::new()
            .write_str(name)
            .write_str(uid)
            .write_str(&self.policy)
            .write_str(&self.rule)
            .write_str(self.result.map(|status| status.label()).unwrap_or(""))
            .write_str(&self.category)
            .write_str(&self.message)
            .finish();

        #[cfg(feature = "logging")]
        log::trace!("computed fingerprint {} for policy '{}'", hash, self.policy);

        hash.to_string()
    }

    /// Effective weighting: an explicitly assigned priority wins, severity
    /// drives the rest
    pub fn effective_priority(&self) -> Priority {
        if self.priority != Priority::Default {
            self.priority
        } else {
            Priority::from_severity(self.severity)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> CheckResult {
        CheckResult {
            source: Some("kyverno".to_string()),
            policy: "require-labels".to_string(),
            rule: "autogen-require-labels".to_string(),
            resources: vec![ObjectReference::new("Deployment", "api-server")
                .with_namespace("prod")
                .with_uid("5c8d-11aa")],
            message: "label 'team' is required".to_string(),
            result: Some(ResultStatus::Fail),
            scored: true,
            category: "Best Practices".to_string(),
            severity: Some(Severity::High),
            ..CheckResult::default()
        }
    }

    #[test]
    fn test_identity_is_deterministic() {
        let first = sample_result();
        let mut second = sample_result();

        // Differing timestamp, severity and free-form properties must not
        // change the identity.
        second.timestamp = Some(Utc::now());
        second.severity = Some(Severity::Low);
        second
            .properties
            .insert("engine-version".to_string(), "1.12".to_string());

        assert_eq!(first.id(), second.id());
        assert!(!first.id().is_empty());
    }

    #[test]
    fn test_identity_differs_on_key_fields() {
        let base = sample_result();

        let mut other_rule = sample_result();
        other_rule.rule = "another-rule".to_string();
        assert_ne!(base.id(), other_rule.id());

        let mut other_outcome = sample_result();
        other_outcome.result = Some(ResultStatus::Pass);
        assert_ne!(base.id(), other_outcome.id());

        let mut other_subject = sample_result();
        other_subject.resources[0].uid = "ffff-0000".to_string();
        assert_ne!(base.id(), other_subject.id());
    }

    #[test]
    fn test_supplied_identity_takes_precedence() {
        let mut result = sample_result();
        result
            .properties
            .insert(RESULT_ID_KEY.to_string(), "upstream-42".to_string());

        assert_eq!(result.id(), "upstream-42");
    }

    #[test]
    fn test_identity_is_memoized() {
        let mut result = sample_result();
        let first = result.id().to_string();

        // Mutating key fields after the first access must not change the
        // cached identity.
        result.message = "something else entirely".to_string();
        result.policy = "other-policy".to_string();

        assert_eq!(result.id(), first);
    }

    #[test]
    fn test_identity_without_resources() {
        let no_subject = CheckResult {
            policy: "cluster-wide-check".to_string(),
            result: Some(ResultStatus::Warn),
            ..CheckResult::default()
        };
        let again = no_subject.clone();

        assert!(!no_subject.id().is_empty());
        assert_eq!(no_subject.id(), again.id());
    }

    #[test]
    fn test_effective_priority() {
        let mut result = sample_result();
        assert_eq!(result.effective_priority(), Priority::Error);

        result.priority = Priority::Warning;
        assert_eq!(result.effective_priority(), Priority::Warning);

        let unclassified = CheckResult::new("no-severity");
        assert_eq!(unclassified.effective_priority(), Priority::Debug);
    }

    #[test]
    fn test_primary_resource_accessors() {
        let result = sample_result();
        assert!(result.has_resource());
        assert_eq!(result.resource().unwrap().name, "api-server");

        let bare = CheckResult::new("no-subject");
        assert!(!bare.has_resource());
        assert!(bare.resource().is_none());
    }

    #[test]
    fn test_wire_shape_excludes_identity_and_priority() {
        let mut result = sample_result();
        result.priority = Priority::Critical;
        let _ = result.id();

        let value = serde_json::to_value(&result).unwrap();
        let object = value.as_object().unwrap();

        assert!(object.get("id").is_none());
        assert!(object.get("priority").is_none());
        assert_eq!(object["policy"], "require-labels");
        assert_eq!(object["result"], "fail");
        assert_eq!(object["severity"], "high");
        assert_eq!(object["resources"][0]["kind"], "Deployment");
    }

    #[test]
    fn test_wire_shape_omits_zero_values() {
        let bare = CheckResult::new("only-policy");
        let value = serde_json::to_value(&bare).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 1, "only the policy field should remain");
        assert_eq!(object["policy"], "only-policy");
    }

    #[test]
    fn test_lenient_decoding_of_unknown_labels() {
        let raw = r#"{
            "policy": "require-labels",
            "result": "unknown-status",
            "severity": "catastrophic"
        }"#;

        let parsed: CheckResult = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.result, None);
        assert_eq!(parsed.severity, None);
        assert_eq!(parsed.policy, "require-labels");
    }

    #[test]
    fn test_round_trip_preserves_content() {
        let result = sample_result();
        let json = serde_json::to_string(&result).unwrap();
        let parsed: CheckResult = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.policy, result.policy);
        assert_eq!(parsed.result, result.result);
        assert_eq!(parsed.resources, result.resources);
        assert_eq!(parsed.id(), result.id());
    }
}
