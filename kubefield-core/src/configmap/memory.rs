//! In-memory ConfigMap store
//!
//! A `GetUpdater` backed by a map, for tests and for running controllers
//! without a cluster.

use super::accessor::{GetUpdater, Getter};
use crate::error::{K8sError, K8sResult};
use crate::types::NamespacedName;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::ConfigMap;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct InMemoryConfigMaps {
    configmaps: RwLock<BTreeMap<NamespacedName, ConfigMap>>,
    updates: AtomicUsize,
}

impl InMemoryConfigMaps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a ConfigMap under its metadata identity, replacing any previous one
    pub async fn insert(&self, configmap: ConfigMap) {
        let key = NamespacedName::from_configmap(&configmap);
        self.configmaps.write().await.insert(key, configmap);
    }

    pub async fn remove(&self, key: &NamespacedName) -> Option<ConfigMap> {
        self.configmaps.write().await.remove(key)
    }

    pub async fn len(&self) -> usize {
        self.configmaps.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.configmaps.read().await.is_empty()
    }

    /// Number of successful `update_configmap` calls
    pub fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Getter for InMemoryConfigMaps {
    async fn get_configmap(&self, key: &NamespacedName) -> K8sResult<ConfigMap> {
        self.configmaps
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| K8sError::not_found(key))
    }
}

#[async_trait]
impl GetUpdater for InMemoryConfigMaps {
    async fn update_configmap(&self, configmap: ConfigMap) -> K8sResult<()> {
        let key = NamespacedName::from_configmap(&configmap);
        let mut configmaps = self.configmaps.write().await;

        // Replace semantics: the ConfigMap has to exist already
        let stored = configmaps
            .get_mut(&key)
            .ok_or_else(|| K8sError::not_found(&key))?;
        *stored = configmap;

        self.updates.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
