// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resource documents and the records projected from them.

pub mod fields;
pub mod job;

pub use job::JobRecord;
