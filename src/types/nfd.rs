// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// Node Feature Discovery instance, reconciled by the NFD operator.
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[kube(
    group = "nfd.openshift.io",
    version = "v1",
    kind = "NodeFeatureDiscovery",
    plural = "nodefeaturediscoveries",
    derive = "PartialEq"
)]
#[kube(namespaced)]
#[serde(rename_all = "camelCase")]
pub struct NodeFeatureDiscoverySpec {
    pub operand: OperandSpec,
    pub instance: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_config: Option<ConfigMap>,
    #[serde(default)]
    pub custom_config: ConfigMap,
}

/// The NFD worker workload managed by the operator.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OperandSpec {
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_pull_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_port: Option<i32>,
}

/// Raw configuration text handed to the NFD operator. Never parsed here.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigMap {
    #[serde(default)]
    pub config_data: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use kube::Resource;

    #[test]
    fn test_resource_identity() {
        assert_eq!(NodeFeatureDiscovery::group(&()), "nfd.openshift.io");
        assert_eq!(NodeFeatureDiscovery::version(&()), "v1");
        assert_eq!(NodeFeatureDiscovery::kind(&()), "NodeFeatureDiscovery");
        assert_eq!(NodeFeatureDiscovery::plural(&()), "nodefeaturediscoveries");
    }

    #[test]
    fn test_serializes_camel_case_and_skips_empty_options() {
        let nfd = NodeFeatureDiscovery::new(
            "nfd",
            NodeFeatureDiscoverySpec {
                operand: OperandSpec {
                    namespace: "openshift-nfd".to_string(),
                    image: "nfd:latest".to_string(),
                    image_pull_policy: Some("Always".to_string()),
                    service_port: None,
                },
                instance: String::new(),
                worker_config: None,
                custom_config: ConfigMap {
                    config_data: "core: {}\n".to_string(),
                },
            },
        );

        let value = serde_json::to_value(&nfd).unwrap();
        assert_eq!(value["apiVersion"], "nfd.openshift.io/v1");
        assert_eq!(value["kind"], "NodeFeatureDiscovery");
        assert_eq!(value["spec"]["operand"]["imagePullPolicy"], "Always");
        assert_eq!(value["spec"]["customConfig"]["configData"], "core: {}\n");
        assert_eq!(value["spec"]["instance"], "");
        assert!(value["spec"].get("workerConfig").is_none());
        assert!(value["spec"]["operand"].get("servicePort").is_none());
    }
}
