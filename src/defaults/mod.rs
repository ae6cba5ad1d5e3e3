// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Compiled-in default descriptors for the two bootstrapped resources.
//!
//! Every call builds a fresh value; nothing is cached or shared between calls.

mod cluster_policy;
mod nfd;

pub use cluster_policy::cluster_policy;
pub use nfd::nfd_instance;

use k8s_openapi::api::core::v1::EnvVar;

fn env(vars: &[(&str, &str)]) -> Vec<EnvVar> {
    vars.iter()
        .map(|(name, value)| EnvVar {
            name: name.to_string(),
            value: Some(value.to_string()),
            ..Default::default()
        })
        .collect()
}
