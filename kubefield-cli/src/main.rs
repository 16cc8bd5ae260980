//! kubefield CLI
//!
//! Read and update single fields of Kubernetes ConfigMaps

mod commands;
mod logging;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kubefield_core::config::KubefieldConfig;
use kubefield_core::K8sClient;
use output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Namespace of the ConfigMap (defaults to the configured namespace)
    #[arg(short, long, global = true)]
    namespace: Option<String>,

    /// Kubeconfig context to use
    #[arg(long, global = true)]
    context: Option<String>,

    /// Path to a kubeconfig file
    #[arg(long, global = true)]
    kubeconfig: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print one field of a ConfigMap
    Get {
        /// ConfigMap name
        configmap: String,
        /// Field name
        field: String,
    },
    /// Print all fields of a ConfigMap
    Data {
        /// ConfigMap name
        configmap: String,
    },
    /// Set one field of a ConfigMap, keeping the others
    Set {
        /// ConfigMap name
        configmap: String,
        /// Field name
        field: String,
        /// New value
        value: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = KubefieldConfig::load().context("Failed to load configuration")?;
    if let Some(path) = cli.kubeconfig {
        config.cluster.kubeconfig = Some(path);
    }
    if let Some(context) = cli.context {
        config.cluster.context = Some(context);
    }
    config.validate()?;

    let _log_guard = logging::init(&config.logging)?;

    let context = config.cluster.context.as_deref();
    let client = match (&config.cluster.kubeconfig, context) {
        (Some(path), _) => K8sClient::from_kubeconfig_path(path, context).await?,
        (None, Some(context)) => K8sClient::from_context(context).await?,
        (None, None) => K8sClient::infer().await?,
    };
    tracing::debug!("Using API server {}", client.api_server());

    let namespace = cli
        .namespace
        .unwrap_or_else(|| config.cluster.default_namespace.clone());

    commands::configmap::handle_configmap_command(cli.command, &client, &namespace, cli.output)
        .await
}
