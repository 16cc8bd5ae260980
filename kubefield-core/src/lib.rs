//! kubefield core library
//!
//! Field-level reads and writes on Kubernetes ConfigMaps:
//! - ConfigMap builder for fixtures
//! - `Getter` / `GetUpdater` accessor traits
//! - `read_key`, `read_data` and `update_field` operations
//! - In-memory and kube-rs backed accessors

pub mod config;
pub mod configmap;
pub mod error;
pub mod types;

#[cfg(feature = "kubernetes")]
pub mod client;

#[cfg(feature = "kubernetes")]
pub use client::K8sClient;
pub use configmap::{
    builder, read_data, read_key, update_field, ConfigMapBuilder, GetUpdater, Getter,
    InMemoryConfigMaps,
};
pub use error::{FieldError, FieldResult, K8sError, K8sResult};
pub use types::NamespacedName;

pub use k8s_openapi::api::core::v1::ConfigMap;
