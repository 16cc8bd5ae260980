//! ConfigMap accessor capabilities
//!
//! `Getter` fetches a ConfigMap, `GetUpdater` additionally persists one.
//! Implementations own transport, retries and timeouts.

use crate::error::K8sResult;
use crate::types::NamespacedName;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::ConfigMap;
use std::sync::Arc;

/// Fetch a ConfigMap by identity
#[async_trait]
pub trait Getter: Send + Sync {
    /// Returns the stored ConfigMap, or an error whose `is_not_found()` is
    /// true when no ConfigMap matches `key`.
    async fn get_configmap(&self, key: &NamespacedName) -> K8sResult<ConfigMap>;
}

/// Fetch and persist ConfigMaps
#[async_trait]
pub trait GetUpdater: Getter {
    /// Replace the stored ConfigMap with the same identity, in full.
    async fn update_configmap(&self, configmap: ConfigMap) -> K8sResult<()>;
}

#[async_trait]
impl<T: Getter + ?Sized> Getter for &T {
    async fn get_configmap(&self, key: &NamespacedName) -> K8sResult<ConfigMap> {
        (**self).get_configmap(key).await
    }
}

#[async_trait]
impl<T: GetUpdater + ?Sized> GetUpdater for &T {
    async fn update_configmap(&self, configmap: ConfigMap) -> K8sResult<()> {
        (**self).update_configmap(configmap).await
    }
}

#[async_trait]
impl<T: Getter + ?Sized> Getter for Arc<T> {
    async fn get_configmap(&self, key: &NamespacedName) -> K8sResult<ConfigMap> {
        (**self).get_configmap(key).await
    }
}

#[async_trait]
impl<T: GetUpdater + ?Sized> GetUpdater for Arc<T> {
    async fn update_configmap(&self, configmap: ConfigMap) -> K8sResult<()> {
        (**self).update_configmap(configmap).await
    }
}
