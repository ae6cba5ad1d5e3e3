// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation

use crate::error::{InitError, Result};
use kube::{Client, Config as KConfig};
use tracing::{debug, info};

/// Create a client for the cluster this process runs against.
///
/// The connection is inferred from `KUBECONFIG`, the default kubeconfig or the in-cluster
/// service account, in that order. Timeouts come from that configuration.
pub async fn connect() -> Result<Client> {
    let config = KConfig::infer()
        .await
        .map_err(|e| InitError::Connection(format!("Failed to infer config: {}", e)))?;

    debug!("Inferred cluster config for {}", config.cluster_url);

    let client = Client::try_from(config)
        .map_err(|e| InitError::Connection(format!("Failed to create client: {}", e)))?;

    info!("Kubernetes client ready");
    Ok(client)
}
