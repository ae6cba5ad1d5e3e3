// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Bootstrap sequencer - creates the NFD instance, then the GPU ClusterPolicy.

use crate::defaults;
use crate::error::{CreateError, InitError, Result, Target};
use crate::scheme::TypeScheme;
use kube::api::PostParams;
use kube::core::DynamicObject;
use kube::{Client, Resource, ResourceExt};
use serde::Serialize;
use std::process::ExitCode;
use tracing::{info, instrument};

/// Progress of a bootstrap run. `Done` is reached once the ClusterPolicy is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    SchemeReady,
    NfdSubmitted,
    Done,
    Failed(Target),
}

pub struct Bootstrap {
    client: Client,
    scheme: TypeScheme,
    phase: Phase,
}

impl Bootstrap {
    pub fn new(client: Client, scheme: TypeScheme) -> Self {
        Self {
            client,
            scheme,
            phase: Phase::SchemeReady,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Create both resources in order, stopping at the first failure.
    ///
    /// Nothing is rolled back: if the ClusterPolicy fails, the NFD instance stays.
    pub async fn run(&mut self) -> Result<()> {
        info!("Creating NodeFeatureDiscovery instance");
        let nfd = defaults::nfd_instance();
        self.submit(Target::NfdInstance, &nfd).await?;
        self.phase = Phase::NfdSubmitted;

        info!("Creating GPU ClusterPolicy");
        let policy = defaults::cluster_policy();
        self.submit(Target::ClusterPolicy, &policy).await?;
        self.phase = Phase::Done;
        Ok(())
    }

    #[instrument(skip(self, obj), fields(name = %obj.name_any()))]
    async fn submit<K>(&mut self, target: Target, obj: &K) -> Result<()>
    where
        K: Resource<DynamicType = ()> + Serialize,
    {
        match self.create(obj).await {
            Ok(created) => {
                info!("Created {} {}", K::kind(&()), created.name_any());
                Ok(())
            }
            Err(source) => {
                self.phase = Phase::Failed(target);
                Err(InitError::Creation { target, source })
            }
        }
    }

    async fn create<K>(&self, obj: &K) -> std::result::Result<DynamicObject, CreateError>
    where
        K: Resource<DynamicType = ()> + Serialize,
    {
        let encoded = self.scheme.encode(obj)?;
        let api = self.scheme.api(self.client.clone(), &encoded)?;
        Ok(api.create(&PostParams::default(), &encoded).await?)
    }
}

/// Outcome of a whole process run, as logged and turned into an exit status.
#[derive(Debug)]
pub struct Report {
    pub success: bool,
    pub message: String,
    /// Extra warning when the cluster already holds a bootstrapped resource
    pub hint: Option<String>,
}

impl Report {
    pub fn exit_code(&self) -> ExitCode {
        if self.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Map the result of a run to its exit status and the log line naming the failing stage.
pub fn report(result: &anyhow::Result<()>) -> Report {
    let err = match result {
        Ok(()) => {
            return Report {
                success: true,
                message: "Bootstrap complete".to_string(),
                hint: None,
            }
        }
        Err(err) => err,
    };

    let Some(init) = err.downcast_ref::<InitError>() else {
        return Report {
            success: false,
            message: format!("Bootstrap failed: {:#}", err),
            hint: None,
        };
    };

    let (stage, cause) = match init {
        InitError::Registration { .. } => ("type registration".to_string(), init.to_string()),
        InitError::Connection(reason) => ("cluster connection".to_string(), reason.clone()),
        InitError::Creation { target, source } => (target.to_string(), source.to_string()),
    };

    let hint = init
        .target()
        .filter(|_| init.is_already_exists())
        .map(|target| format!("{} already exists, the cluster looks bootstrapped already", target));

    Report {
        success: false,
        message: format!("Bootstrap failed at {}: {}", stage, cause),
        hint,
    }
}
