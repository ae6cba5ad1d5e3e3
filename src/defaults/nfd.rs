// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::nfd::{NAME, NAMESPACE, OPERAND_NAMESPACE};
use crate::types::nfd::{ConfigMap, NodeFeatureDiscovery, NodeFeatureDiscoverySpec, OperandSpec};

const OPERAND_IMAGE: &str = "registry.redhat.io/openshift4/ose-node-feature-discovery@sha256:a3ed882e2d6e227d1d746fcefa8e129fec8bd1843d8dbece9888986474af7da6";

const WORKER_CONFIG: &str = include_str!("nfd-worker.conf");
const CUSTOM_CONFIG: &str = include_str!("nfd-custom.conf");

/// The NFD instance the GPU operator depends on for node labelling.
pub fn nfd_instance() -> NodeFeatureDiscovery {
    let mut nfd = NodeFeatureDiscovery::new(
        NAME,
        NodeFeatureDiscoverySpec {
            operand: OperandSpec {
                namespace: OPERAND_NAMESPACE.to_string(),
                image: OPERAND_IMAGE.to_string(),
                image_pull_policy: Some("Always".to_string()),
                service_port: None,
            },
            instance: String::new(),
            worker_config: Some(ConfigMap {
                config_data: WORKER_CONFIG.to_string(),
            }),
            custom_config: ConfigMap {
                config_data: CUSTOM_CONFIG.to_string(),
            },
        },
    );
    nfd.metadata.namespace = Some(NAMESPACE.to_string());
    nfd
}
