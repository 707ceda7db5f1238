// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Desired state changes on session jobs

use crate::constants::{paths, FIELD_MANAGER};
use crate::error::{FlinkJobError, Result};
use crate::kubernetes::session_job_api;
use crate::types::fields::set_nested_string;
use kube::{
    api::{Patch, PatchParams, PostParams},
    Client,
};
use serde_json::json;
use tracing::{error, info, instrument};

/// Set `spec.job.state` by replacing the whole resource.
///
/// The read resourceVersion is written back, so a concurrent modification
/// between read and write surfaces as [`FlinkJobError::Conflict`]. Nothing is retried.
#[instrument(skip(client))]
pub async fn update_flink_session_job(
    client: &Client,
    namespace: &str,
    name: &str,
    state: &str,
) -> Result<()> {
    let jobs = session_job_api(client, namespace);
    let target = format!("{}/{}", namespace, name);

    let mut job = jobs.get(name).await.map_err(|e| {
        let err = FlinkJobError::from_kube(e, &target);
        error!("Error getting FlinkSessionJob {}: {}", target, err);
        err
    })?;

    set_nested_string(&mut job.data, paths::DESIRED_STATE, state)
        .inspect_err(|e| error!("Cannot set desired state on FlinkSessionJob {}: {}", target, e))?;

    let pp = PostParams {
        field_manager: Some(FIELD_MANAGER.to_string()),
        ..Default::default()
    };
    jobs.replace(name, &pp, &job).await.map_err(|e| {
        let err = FlinkJobError::from_kube(e, &target);
        error!("Error updating FlinkSessionJob {}: {}", target, err);
        err
    })?;

    info!("Set desired state of FlinkSessionJob {} to {}", target, state);
    Ok(())
}

/// Set `spec.job.state` with a JSON merge patch, leaving the rest of the resource untouched
#[instrument(skip(client))]
pub async fn patch_flink_session_job_state(
    client: &Client,
    namespace: &str,
    name: &str,
    state: &str,
) -> Result<()> {
    let jobs = session_job_api(client, namespace);
    let target = format!("{}/{}", namespace, name);

    let patch = json!({ "spec": { "job": { "state": state } } });
    let pp = PatchParams {
        field_manager: Some(FIELD_MANAGER.to_string()),
        ..Default::default()
    };

    jobs.patch(name, &pp, &Patch::Merge(&patch)).await.map_err(|e| {
        let err = FlinkJobError::from_kube(e, &target);
        error!("Error patching FlinkSessionJob {}: {}", target, err);
        err
    })?;

    info!("Patched desired state of FlinkSessionJob {} to {}", target, state);
    Ok(())
}
