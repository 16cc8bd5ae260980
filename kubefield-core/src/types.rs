//! Kubernetes types for kubefield

use k8s_openapi::api::core::v1::ConfigMap;

/// Namespace and name addressing a single namespaced resource
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NamespacedName {
    pub namespace: String,
    pub name: String,
}

impl NamespacedName {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Identity of a ConfigMap, with missing metadata read as empty strings
    pub fn from_configmap(configmap: &ConfigMap) -> Self {
        Self {
            namespace: configmap.metadata.namespace.clone().unwrap_or_default(),
            name: configmap.metadata.name.clone().unwrap_or_default(),
        }
    }
}

impl std::fmt::Display for NamespacedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}
