// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Session job listing

use crate::error::{FlinkJobError, Result};
use crate::kubernetes::session_job_api;
use crate::types::JobRecord;
use kube::{api::ListParams, Client};
use tracing::{debug, error, instrument};

/// List all session jobs in `namespace`.
///
/// Fails as a whole if any job document is malformed.
#[instrument(skip(client))]
pub async fn list_flink_jobs(client: &Client, namespace: &str) -> Result<Vec<JobRecord>> {
    let jobs = session_job_api(client, namespace);

    let job_list = jobs.list(&ListParams::default()).await.map_err(|e| {
        let err = FlinkJobError::from_kube(e, &format!("flinksessionjobs in {}", namespace));
        error!("Failed to list FlinkSessionJobs in {}: {}", namespace, err);
        err
    })?;

    let records = job_list
        .items
        .iter()
        .map(JobRecord::from_object)
        .collect::<Result<Vec<_>>>()
        .inspect_err(|e| error!("Failed to read FlinkSessionJob in {}: {}", namespace, e))?;

    debug!("Found {} FlinkSessionJobs in {}", records.len(), namespace);
    Ok(records)
}
