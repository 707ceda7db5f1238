// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod config;
pub mod constants;
pub mod error;
pub mod jobs;
pub mod kubernetes;
pub mod types;


pub use error::{FlinkJobError, Result};
pub use jobs::{list_flink_jobs, patch_flink_session_job_state, update_flink_session_job};
pub use types::JobRecord;
