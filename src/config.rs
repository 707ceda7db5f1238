// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::DEFAULT_NAMESPACE;
use anyhow::{bail, Result};
use std::env;
use std::path::PathBuf;

/// Client configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace holding the FlinkSessionJob resources
    pub namespace: String,
    /// Explicit kubeconfig file, otherwise the config is inferred
    pub kubeconfig: Option<PathBuf>,
    pub context: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            namespace: DEFAULT_NAMESPACE.to_string(),
            kubeconfig: None,
            context: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let namespace = lookup("FLINK_NAMESPACE").unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());
        if namespace.trim().is_empty() {
            bail!("FLINK_NAMESPACE environment variable is set but empty");
        }

        let kubeconfig = lookup("FLINK_KUBECONFIG")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        let context = lookup("FLINK_KUBE_CONTEXT").filter(|c| !c.is_empty());

        Ok(Config {
            namespace,
            kubeconfig,
            context,
        })
    }
}
