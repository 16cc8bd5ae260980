//! Fluent ConfigMap construction
//!
//! Builds ConfigMap values in memory, mostly for fixtures. Nothing here
//! touches a cluster or validates its input.

use k8s_openapi::api::core::v1::ConfigMap;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use std::collections::BTreeMap;

/// Start a new ConfigMap builder
pub fn builder() -> ConfigMapBuilder {
    ConfigMapBuilder::new()
}

#[derive(Debug, Clone, Default)]
pub struct ConfigMapBuilder {
    name: String,
    namespace: String,
    data: BTreeMap<String, String>,
    labels: BTreeMap<String, String>,
}

impl ConfigMapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn set_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set one field; a later call with the same key replaces the value
    pub fn set_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Set several fields at once, same overwrite rule as `set_field`
    pub fn set_data(mut self, data: BTreeMap<String, String>) -> Self {
        self.data.extend(data);
        self
    }

    pub fn set_labels(mut self, labels: BTreeMap<String, String>) -> Self {
        self.labels.extend(labels);
        self
    }

    pub fn build(&self) -> ConfigMap {
        ConfigMap {
            metadata: ObjectMeta {
                name: Some(self.name.clone()),
                namespace: Some(self.namespace.clone()),
                labels: if self.labels.is_empty() {
                    None
                } else {
                    Some(self.labels.clone())
                },
                ..Default::default()
            },
            data: Some(self.data.clone()),
            binary_data: None,
            immutable: None,
        }
    }
}
