// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation from ambient or explicit kubeconfig

use crate::config::Config;
use crate::error::{FlinkJobError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Create a Kubernetes client for the cluster running the Flink operator
#[instrument(skip(config))]
pub async fn create_client(config: &Config) -> Result<Client> {
    let options = KubeConfigOptions {
        context: config.context.clone(),
        ..Default::default()
    };

    let client_config = match &config.kubeconfig {
        Some(path) => load_kubeconfig_file(path, &options).await?,
        None if config.context.is_some() => {
            debug!("Loading default kubeconfig with context {:?}", config.context);
            KConfig::from_kubeconfig(&options).await.map_err(|e| {
                FlinkJobError::KubeconfigError(format!("Failed to load kubeconfig: {}", e))
            })?
        }
        None => KConfig::infer()
            .await
            .map_err(|e| FlinkJobError::KubeconfigError(format!("Failed to infer config: {}", e)))?,
    };

    info!("Using Kubernetes API server {}", client_config.cluster_url);

    Client::try_from(client_config)
        .map_err(|e| FlinkJobError::KubeconfigError(format!("Failed to create client: {}", e)))
}

/// Build a client config from a kubeconfig file on disk
async fn load_kubeconfig_file(path: &Path, options: &KubeConfigOptions) -> Result<KConfig> {
    debug!("Reading kubeconfig from {}", path.display());

    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        FlinkJobError::KubeconfigError(format!(
            "Failed to read kubeconfig {}: {}",
            path.display(),
            e
        ))
    })?;

    let kubeconfig = parse_kubeconfig(&raw)?;

    KConfig::from_custom_kubeconfig(kubeconfig, options)
        .await
        .map_err(|e| FlinkJobError::KubeconfigError(format!("Failed to create config: {}", e)))
}

fn parse_kubeconfig(raw: &str) -> Result<Kubeconfig> {
    serde_yaml::from_str(raw)
        .map_err(|e| FlinkJobError::KubeconfigError(format!("Failed to parse kubeconfig: {}", e)))
}
