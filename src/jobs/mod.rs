// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Operations on FlinkSessionJob resources.

pub mod list;
pub mod update;

pub use list::list_flink_jobs;
pub use update::{patch_flink_session_job_state, update_flink_session_job};
