// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client construction and the dynamic session job API.

pub mod client;
pub mod resource;

pub use client::create_client;
pub use resource::{session_job_api, session_job_resource};
