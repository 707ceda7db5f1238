// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Coordinates of the Flink operator's session job custom resource
pub mod resource {
    pub const GROUP: &str = "flink.apache.org";
    pub const VERSION: &str = "v1beta1";
    pub const KIND: &str = "FlinkSessionJob";
    pub const PLURAL: &str = "flinksessionjobs";
}

/// Namespace the Flink operator deploys session jobs into
pub const DEFAULT_NAMESPACE: &str = "flink-operator";

/// Field manager recorded on writes
pub const FIELD_MANAGER: &str = "flink-jobs";

/// Document paths read from and written to session jobs
pub mod paths {
    pub const LIFECYCLE_STATE: &[&str] = &["status", "lifecycleState"];
    pub const JOB_ID: &[&str] = &["status", "jobStatus", "jobId"];
    pub const START_TIME: &[&str] = &["status", "jobStatus", "startTime"];
    /// Desired job state, consumed by the Flink operator
    pub const DESIRED_STATE: &[&str] = &["spec", "job", "state"];
}
