use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Reference to an evaluated cluster object.
///
/// All fields follow zero-value semantics: an empty string means the field
/// was not supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectReference {
    /// API group and version of the referenced object
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_version: String,

    /// Kind of the referenced object
    #[serde(skip_serializing_if = "String::is_empty")]
    pub kind: String,

    /// Namespace of the referenced object, empty for cluster-scoped kinds
    #[serde(skip_serializing_if = "String::is_empty")]
    pub namespace: String,

    /// Name of the referenced object
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Unique identifier assigned by the cluster
    #[serde(skip_serializing_if = "String::is_empty")]
    pub uid: String,
}

impl ObjectReference {
    /// Create a reference from kind and name
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set the unique identifier
    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = uid.into();
        self
    }
}

/// Label-based matcher applied instead of explicit object references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceSelector {
    /// Labels the matched objects must carry, all of them
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub match_labels: HashMap<String, String>,

    /// Expression requirements, all of which must hold
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub match_expressions: Vec<SelectorRequirement>,
}

impl ResourceSelector {
    /// Whether the given label set satisfies this selector
    pub fn matches(&self, labels: &HashMap<String, String>) -> bool {
        for (key, value) in &self.match_labels {
            if labels.get(key) != Some(value) {
                return false;
            }
        }

        self.match_expressions
            .iter()
            .all(|requirement| requirement.matches(labels))
    }
}

/// One expression requirement of a [`ResourceSelector`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectorRequirement {
    /// Label key the requirement applies to
    pub key: String,

    /// How the key relates to the values
    pub operator: SelectorOperator,

    /// Candidate values; empty for existence checks
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

impl SelectorRequirement {
    fn matches(&self, labels: &HashMap<String, String>) -> bool {
        let value = labels.get(&self.key);
        match self.operator {
            SelectorOperator::In => {
                value.is_some_and(|value| self.values.iter().any(|candidate| candidate == value))
            }
            SelectorOperator::NotIn => {
                !value.is_some_and(|value| self.values.iter().any(|candidate| candidate == value))
            }
            SelectorOperator::Exists => value.is_some(),
            SelectorOperator::DoesNotExist => value.is_none(),
        }
    }
}

/// Relation between a selector key and its values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectorOperator {
    #[default]
    In,
    NotIn,
    Exists,
    DoesNotExist,
}
