// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Dynamic API handle for FlinkSessionJob resources

use crate::constants::resource::{GROUP, KIND, PLURAL, VERSION};
use kube::api::{Api, ApiResource, DynamicObject};
use kube::core::GroupVersionKind;
use kube::Client;

/// Type information for the FlinkSessionJob custom resource
pub fn session_job_resource() -> ApiResource {
    let gvk = GroupVersionKind::gvk(GROUP, VERSION, KIND);
    ApiResource::from_gvk_with_plural(&gvk, PLURAL)
}

/// Schemaless API for session jobs in `namespace`
pub fn session_job_api(client: &Client, namespace: &str) -> Api<DynamicObject> {
    Api::namespaced_with(client.clone(), namespace, &session_job_resource())
}
