// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Node Feature Discovery instance identity
pub mod nfd {
    pub const NAME: &str = "nfd-instance";
    /// Namespace the NFD instance object lives in
    pub const NAMESPACE: &str = "redhat-gpu-operator";
    /// Namespace the NFD worker operand is deployed to
    pub const OPERAND_NAMESPACE: &str = "openshift-nfd";
}

/// GPU operator ClusterPolicy identity
pub mod cluster_policy {
    pub const NAME: &str = "gpu-cluster-policy";
    pub const MIG_STRATEGY: &str = "single";
    pub const PRIORITY_CLASS: &str = "system-node-critical";
    pub const DEFAULT_RUNTIME: &str = "crio";
    pub const DCGM_HOST_PORT: i32 = 5555;
    /// Toleration applied to every GPU operand daemonset
    pub const GPU_TOLERATION_KEY: &str = "nvidia.com/gpu";
}
