// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use super::env;
use crate::constants::cluster_policy::{
    DCGM_HOST_PORT, DEFAULT_RUNTIME, GPU_TOLERATION_KEY, MIG_STRATEGY, NAME, PRIORITY_CLASS,
};
use crate::types::cluster_policy::*;
use k8s_openapi::api::core::v1::Toleration;

const NVIDIA: &str = "nvcr.io/nvidia";
const NVIDIA_K8S: &str = "nvcr.io/nvidia/k8s";
const NVIDIA_CLOUD_NATIVE: &str = "nvcr.io/nvidia/cloud-native";

const VALIDATOR_DIGEST: &str =
    "sha256:1cce434a1722288bacab5eaa5c194ca2bdbad55679ba871a2814556853339585";

/// The GPU operator ClusterPolicy with every operand pinned to a digest.
pub fn cluster_policy() -> ClusterPolicy {
    ClusterPolicy::new(
        NAME,
        ClusterPolicySpec {
            operator: OperatorSpec {
                default_runtime: DEFAULT_RUNTIME.to_string(),
                runtime_class: None,
                init_container: ImageSpec::new(
                    NVIDIA,
                    "cuda",
                    "sha256:15674e5c45c97994bc92387bad03a0d52d7c1e983709c471c4fecc8e806dbdce",
                ),
            },
            daemonsets: DaemonsetsSpec {
                tolerations: vec![Toleration {
                    key: Some(GPU_TOLERATION_KEY.to_string()),
                    operator: Some("Exists".to_string()),
                    effect: Some("NoSchedule".to_string()),
                    ..Default::default()
                }],
                priority_class_name: Some(PRIORITY_CLASS.to_string()),
            },
            driver: DriverSpec {
                enabled: Some(true),
                rdma: Some(GpuDirectRdmaSpec {
                    enabled: Some(true),
                    use_host_mofed: None,
                }),
                image: ImageSpec::new(
                    NVIDIA,
                    "driver",
                    "sha256:a62de5e843a41c65cf837e7db5f5b675d03fa2de05e981a859b114336cf183e3",
                ),
                manager: DriverManagerSpec {
                    image: ImageSpec::new(
                        NVIDIA_CLOUD_NATIVE,
                        "k8s-driver-manager",
                        "sha256:907ab0fc008bb90149ed059ac3a8ed3d19ae010d52c58c0ddbafce45df468d5b",
                    ),
                    env: env(&[
                        ("DRAIN_USE_FORCE", "false"),
                        ("DRAIN_POD_SELECTOR_LABEL", ""),
                        ("DRAIN_TIMEOUT_SECONDS", "0s"),
                        ("DRAIN_DELETE_EMPTYDIR_DATA", "false"),
                    ]),
                },
            },
            toolkit: ToolkitSpec {
                enabled: Some(true),
                image: ImageSpec::new(
                    NVIDIA_K8S,
                    "container-toolkit",
                    "sha256:8f9517b4c83b8730c40134df385088be41519b585176c66727ff6f181ae5e703",
                ),
            },
            device_plugin: DevicePluginSpec {
                image: ImageSpec::new(
                    NVIDIA,
                    "k8s-device-plugin",
                    "sha256:85def0197f388e5e336b1ab0dbec350816c40108a58af946baa1315f4c96ee05",
                ),
                env: env(&[
                    ("PASS_DEVICE_SPECS", "true"),
                    ("FAIL_ON_INIT_ERROR", "true"),
                    ("DEVICE_LIST_STRATEGY", "envvar"),
                    ("DEVICE_ID_STRATEGY", "uuid"),
                    ("NVIDIA_VISIBLE_DEVICES", "all"),
                    ("NVIDIA_DRIVER_CAPABILITIES", "all"),
                ]),
            },
            dcgm_exporter: DcgmExporterSpec {
                image: ImageSpec::new(
                    NVIDIA_K8S,
                    "dcgm-exporter",
                    "sha256:e37404194fa2bc2275827411049422b93d1493991fb925957f170b4b842846ff",
                ),
                env: env(&[
                    ("DCGM_EXPORTER_LISTEN", ":9400"),
                    ("DCGM_EXPORTER_KUBERNETES", "true"),
                    (
                        "DCGM_EXPORTER_COLLECTORS",
                        "/etc/dcgm-exporter/dcp-metrics-included.csv",
                    ),
                ]),
            },
            dcgm: DcgmSpec {
                enabled: Some(true),
                image: ImageSpec::new(
                    NVIDIA_CLOUD_NATIVE,
                    "dcgm",
                    "sha256:28f334d6d5ca6e5cad2cf05a255989834128c952e3c181e6861bd033476d4b2c",
                ),
                host_port: Some(DCGM_HOST_PORT),
            },
            node_status_exporter: NodeStatusExporterSpec {
                enabled: Some(true),
                image: ImageSpec::new(NVIDIA_CLOUD_NATIVE, "gpu-operator-validator", VALIDATOR_DIGEST),
            },
            gfd: GpuFeatureDiscoverySpec {
                image: ImageSpec::new(
                    NVIDIA,
                    "gpu-feature-discovery",
                    "sha256:bfc39d23568458dfd50c0c5323b6d42bdcd038c420fb2a2becd513a3ed3be27f",
                ),
                env: env(&[("GFD_SLEEP_INTERVAL", "60s"), ("FAIL_ON_INIT_ERROR", "true")]),
            },
            mig: MigSpec {
                strategy: Some(MIG_STRATEGY.to_string()),
            },
            mig_manager: MigManagerSpec {
                enabled: Some(true),
                image: ImageSpec::new(
                    NVIDIA_CLOUD_NATIVE,
                    "k8s-mig-manager",
                    "sha256:77b8e58a54c222bee3cc56b2305d4cebfa60722c122858f94301e611f87d7fec",
                ),
                env: env(&[("WITH_REBOOT", "false")]),
            },
            validator: ValidatorSpec {
                image: ImageSpec::new(NVIDIA_CLOUD_NATIVE, "gpu-operator-validator", VALIDATOR_DIGEST),
                env: env(&[("WITH_WORKLOAD", "true")]),
            },
        },
    )
}
