// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::paths;
use crate::error::Result;
use crate::types::fields::nested_string;
use kube::api::DynamicObject;
use serde::{Deserialize, Serialize};

/// Flat view of a FlinkSessionJob
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    /// Flink job id, empty until the job has been submitted
    pub id: String,
    pub name: String,
    /// Lifecycle state reported by the Flink operator
    pub status: String,
    pub start_time: String,
}

impl JobRecord {
    /// Project a session job document. Absent fields become empty strings.
    pub fn from_object(obj: &DynamicObject) -> Result<Self> {
        Ok(JobRecord {
            id: nested_string(&obj.data, paths::JOB_ID)?,
            name: obj.metadata.name.clone().unwrap_or_default(),
            status: nested_string(&obj.data, paths::LIFECYCLE_STATE)?,
            start_time: nested_string(&obj.data, paths::START_TIME)?,
        })
    }
}
