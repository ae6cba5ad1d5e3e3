// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Custom resource kinds submitted by the bootstrap.

pub mod cluster_policy;
pub mod nfd;

pub use cluster_policy::{ClusterPolicy, ClusterPolicySpec};
pub use nfd::{NodeFeatureDiscovery, NodeFeatureDiscoverySpec};
