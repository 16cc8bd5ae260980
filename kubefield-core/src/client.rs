//! Kubernetes client wrapper
//!
//! Wraps the kube-rs Client and exposes it as a ConfigMap accessor.

use crate::configmap::{GetUpdater, Getter};
use crate::error::{K8sError, K8sResult};
use crate::types::NamespacedName;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::ConfigMap;
use kube::api::{Api, PostParams};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use std::path::Path;

/// Wrapper around kube-rs Client
#[derive(Clone)]
pub struct K8sClient {
    inner: Client,
    api_server: String,
}

impl K8sClient {
    /// Create client from kubeconfig YAML with optional context
    pub async fn from_kubeconfig(kubeconfig_yaml: &str, context: Option<&str>) -> K8sResult<Self> {
        let kubeconfig = Kubeconfig::from_yaml(kubeconfig_yaml).map_err(|e| {
            K8sError::InvalidKubeconfig(format!("Failed to parse kubeconfig: {}", e))
        })?;

        Self::from_parsed(kubeconfig, context).await
    }

    /// Create client from a kubeconfig file with optional context
    pub async fn from_kubeconfig_path(path: &Path, context: Option<&str>) -> K8sResult<Self> {
        let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
            K8sError::InvalidKubeconfig(format!(
                "Failed to read kubeconfig {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_parsed(kubeconfig, context).await
    }

    /// Create client for a named context of the default kubeconfig
    ///
    /// Every file listed in `KUBECONFIG` is merged, falling back to
    /// `~/.kube/config`, so the context may live in any of them.
    pub async fn from_context(context: &str) -> K8sResult<Self> {
        let config = Self::context_config(context).await?;
        Self::from_config(config)
    }

    async fn context_config(context: &str) -> K8sResult<Config> {
        Config::from_kubeconfig(&KubeConfigOptions {
            context: Some(context.to_string()),
            ..Default::default()
        })
        .await
        .map_err(|e| {
            K8sError::InvalidKubeconfig(format!("Failed to load context '{}': {}", context, e))
        })
    }

    /// Create client from the environment: `KUBECONFIG`, `~/.kube/config`,
    /// or the in-cluster service account
    pub async fn infer() -> K8sResult<Self> {
        let config = Config::infer().await.map_err(|e| {
            K8sError::InvalidKubeconfig(format!("Failed to infer config: {}", e))
        })?;

        Self::from_config(config)
    }

    async fn from_parsed(kubeconfig: Kubeconfig, context: Option<&str>) -> K8sResult<Self> {
        let config = Config::from_custom_kubeconfig(
            kubeconfig,
            &KubeConfigOptions {
                context: context.map(String::from),
                ..Default::default()
            },
        )
        .await
        .map_err(|e| K8sError::InvalidKubeconfig(format!("Failed to create config: {}", e)))?;

        Self::from_config(config)
    }

    fn from_config(config: Config) -> K8sResult<Self> {
        let api_server = config.cluster_url.to_string();

        let client = Client::try_from(config)
            .map_err(|e| K8sError::InvalidKubeconfig(format!("Failed to create client: {}", e)))?;

        Ok(Self {
            inner: client,
            api_server,
        })
    }

    /// Get API server URL
    pub fn api_server(&self) -> &str {
        &self.api_server
    }

    fn configmaps(&self, namespace: &str) -> Api<ConfigMap> {
        Api::namespaced(self.inner.clone(), namespace)
    }
}

#[async_trait]
impl Getter for K8sClient {
    async fn get_configmap(&self, key: &NamespacedName) -> K8sResult<ConfigMap> {
        tracing::debug!("GET configmap {} from {}", key, self.api_server);

        self.configmaps(&key.namespace)
            .get(&key.name)
            .await
            .map_err(|e| {
                tracing::warn!("Failed to get configmap {}: {}", key, e);
                K8sError::from(e)
            })
    }
}

/// Full replace through the API server. The ConfigMap keeps whatever
/// `resourceVersion` it was fetched with, so a stale write comes back as a
/// 409 conflict rather than being retried.
#[async_trait]
impl GetUpdater for K8sClient {
    async fn update_configmap(&self, configmap: ConfigMap) -> K8sResult<()> {
        let (Some(namespace), Some(name)) = (
            configmap.metadata.namespace.clone(),
            configmap.metadata.name.clone(),
        ) else {
            return Err(K8sError::Internal(
                "ConfigMap is missing name or namespace".to_string(),
            ));
        };

        tracing::debug!("PUT configmap {}/{} to {}", namespace, name, self.api_server);

        self.configmaps(&namespace)
            .replace(&name, &PostParams::default(), &configmap)
            .await
            .map_err(|e| {
                tracing::warn!("Failed to replace configmap {}/{}: {}", namespace, name, e);
                K8sError::from(e)
            })?;

        Ok(())
    }
}

impl std::fmt::Debug for K8sClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("K8sClient")
            .field("api_server", &self.api_server)
            .finish()
    }
}
