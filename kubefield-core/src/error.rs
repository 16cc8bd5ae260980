//! Kubernetes error types
//!
//! `K8sError` is what accessors report. `FieldError` is what the field
//! operations return on top of it.

use crate::types::NamespacedName;
use thiserror::Error;

/// Kubernetes-specific errors
#[derive(Debug, Error)]
pub enum K8sError {
    /// Kubernetes resource not found
    #[error("Resource not found: {kind}/{name} in namespace {namespace}")]
    ResourceNotFound {
        kind: String,
        name: String,
        namespace: String,
    },

    /// Error from kube-rs client
    #[cfg(feature = "kubernetes")]
    #[error("Kubernetes API error: {0}")]
    KubeError(#[source] kube::Error),

    /// Invalid kubeconfig
    #[error("Invalid kubeconfig: {0}")]
    InvalidKubeconfig(String),

    /// Resource conflict, e.g. a write against a stale resourceVersion
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal system error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl K8sError {
    /// Not-found error for a ConfigMap identity
    pub fn not_found(key: &NamespacedName) -> Self {
        K8sError::ResourceNotFound {
            kind: "ConfigMap".to_string(),
            name: key.name.clone(),
            namespace: key.namespace.clone(),
        }
    }

    /// Whether this error means the requested resource does not exist.
    ///
    /// Covers both the in-process `ResourceNotFound` variant and API server
    /// responses carrying a 404 status or a `NotFound` reason.
    pub fn is_not_found(&self) -> bool {
        match self {
            K8sError::ResourceNotFound { .. } => true,
            #[cfg(feature = "kubernetes")]
            K8sError::KubeError(kube::Error::Api(response)) => {
                response.code == 404 || response.reason == "NotFound"
            }
            _ => false,
        }
    }
}

#[cfg(feature = "kubernetes")]
impl From<kube::Error> for K8sError {
    fn from(err: kube::Error) -> Self {
        match err {
            kube::Error::Api(response) if response.code == 409 => {
                K8sError::Conflict(response.message)
            }
            other => K8sError::KubeError(other),
        }
    }
}

/// Result type alias for Kubernetes operations
pub type K8sResult<T> = std::result::Result<T, K8sError>;

/// Errors returned by the ConfigMap field operations
#[derive(Debug, Error)]
pub enum FieldError {
    /// The accessor has no ConfigMap for the identity
    #[error("ConfigMap {key} not found")]
    NotFound {
        key: NamespacedName,
        #[source]
        source: K8sError,
    },

    /// The ConfigMap exists but has no such field
    #[error("field '{field}' not present in ConfigMap {key}")]
    FieldMissing { key: NamespacedName, field: String },

    /// Any other accessor failure, passed through as-is
    #[error(transparent)]
    Accessor(K8sError),
}

impl FieldError {
    /// Classify an accessor failure for `key`
    pub(crate) fn from_accessor(key: &NamespacedName, err: K8sError) -> Self {
        if err.is_not_found() {
            FieldError::NotFound {
                key: key.clone(),
                source: err,
            }
        } else {
            FieldError::Accessor(err)
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FieldError::NotFound { .. })
    }

    pub fn is_field_missing(&self) -> bool {
        matches!(self, FieldError::FieldMissing { .. })
    }
}

/// Result type alias for field operations
pub type FieldResult<T> = std::result::Result<T, FieldError>;
