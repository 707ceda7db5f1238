// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlinkJobError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to create Kubernetes client: {0}")]
    KubeconfigError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Update conflict: {0}")]
    Conflict(String),

    #[error("Access denied: {0}")]
    Forbidden(String),

    #[error("Missing field '{path}'")]
    MissingField { path: String },

    #[error("Malformed field '{path}': expected {expected}, found {found}")]
    MalformedField {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl FlinkJobError {
    /// Classify an API error by its HTTP status, `target` names what was being accessed
    pub fn from_kube(err: kube::Error, target: &str) -> Self {
        match err {
            kube::Error::Api(resp) => match resp.code {
                404 => FlinkJobError::NotFound(format!("{}: {}", target, resp.message)),
                409 => FlinkJobError::Conflict(format!("{}: {}", target, resp.message)),
                401 | 403 => FlinkJobError::Forbidden(format!("{}: {}", target, resp.message)),
                _ => FlinkJobError::KubeError(kube::Error::Api(resp)),
            },
            other => FlinkJobError::KubeError(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, FlinkJobError>;
