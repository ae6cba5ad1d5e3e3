// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Type scheme mapping (group, version, kind) to the API endpoints the client encodes against.

use crate::error::{CreateError, InitError, Result};
use crate::types::{ClusterPolicy, NodeFeatureDiscovery};
use k8s_openapi::api::apps::v1::{DaemonSet, Deployment};
use k8s_openapi::api::core::v1::{ConfigMap, Namespace, Pod, Secret, Service, ServiceAccount};
use k8s_openapi::{ClusterResourceScope, NamespaceResourceScope};
use kube::core::{ApiResource, DynamicObject, GroupVersionKind};
use kube::{Api, Client, Resource, ResourceExt};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Whether a resource scope places objects inside a namespace.
pub trait ScopeKind {
    const NAMESPACED: bool;
}

impl ScopeKind for NamespaceResourceScope {
    const NAMESPACED: bool = true;
}

impl ScopeKind for ClusterResourceScope {
    const NAMESPACED: bool = false;
}

#[derive(Debug, Clone)]
pub struct RegisteredKind {
    pub resource: ApiResource,
    pub namespaced: bool,
}

impl RegisteredKind {
    fn same_as(&self, other: &RegisteredKind) -> bool {
        self.namespaced == other.namespaced
            && self.resource.api_version == other.resource.api_version
            && self.resource.plural == other.resource.plural
    }
}

/// Registry of the kinds a bootstrap client may encode.
///
/// Built once by [`build_scheme`] and only read afterwards.
#[derive(Debug, Default, Clone)]
pub struct TypeScheme {
    kinds: HashMap<GroupVersionKind, RegisteredKind>,
}

/// Register built-in kinds, then the add-on custom resources.
pub fn build_scheme() -> Result<TypeScheme> {
    let mut scheme = TypeScheme::new();

    scheme.register::<Namespace>()?;
    scheme.register::<Pod>()?;
    scheme.register::<ConfigMap>()?;
    scheme.register::<Secret>()?;
    scheme.register::<Service>()?;
    scheme.register::<ServiceAccount>()?;
    scheme.register::<Deployment>()?;
    scheme.register::<DaemonSet>()?;

    scheme.register::<NodeFeatureDiscovery>()?;
    scheme.register::<ClusterPolicy>()?;

    debug!("Type scheme ready with {} kinds", scheme.len());
    Ok(scheme)
}

fn gvk_of<K: Resource<DynamicType = ()>>() -> GroupVersionKind {
    GroupVersionKind::gvk(&K::group(&()), &K::version(&()), &K::kind(&()))
}

fn display_gvk(gvk: &GroupVersionKind) -> String {
    if gvk.group.is_empty() {
        format!("{}/{}", gvk.version, gvk.kind)
    } else {
        format!("{}/{}/{}", gvk.group, gvk.version, gvk.kind)
    }
}

impl TypeScheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `K` to the scheme.
    ///
    /// Registering the same kind twice is a no-op. A second registration of the same
    /// group/version/kind with a different plural or scope is rejected.
    pub fn register<K>(&mut self) -> Result<()>
    where
        K: Resource<DynamicType = ()>,
        K::Scope: ScopeKind,
    {
        let gvk = gvk_of::<K>();
        let name = display_gvk(&gvk);

        if gvk.kind.is_empty() || gvk.version.is_empty() {
            return Err(InitError::Registration {
                kind: name,
                reason: "kind and version must not be empty".to_string(),
            });
        }

        let entry = RegisteredKind {
            resource: ApiResource::erase::<K>(&()),
            namespaced: <K::Scope as ScopeKind>::NAMESPACED,
        };

        match self.kinds.get(&gvk) {
            Some(existing) if existing.same_as(&entry) => Ok(()),
            Some(existing) => Err(InitError::Registration {
                kind: name,
                reason: format!(
                    "already registered as {} (namespaced: {})",
                    existing.resource.plural, existing.namespaced
                ),
            }),
            None => {
                debug!("Registered {} as {}", name, entry.resource.plural);
                self.kinds.insert(gvk, entry);
                Ok(())
            }
        }
    }

    fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_registered<K: Resource<DynamicType = ()>>(&self) -> bool {
        self.kinds.contains_key(&gvk_of::<K>())
    }

    pub fn lookup(&self, gvk: &GroupVersionKind) -> Option<&RegisteredKind> {
        self.kinds.get(gvk)
    }

    /// Encode a typed object into its wire form. Fails for kinds not in the scheme.
    pub fn encode<K>(&self, obj: &K) -> std::result::Result<DynamicObject, CreateError>
    where
        K: Resource<DynamicType = ()> + Serialize,
    {
        let gvk = gvk_of::<K>();
        if !self.kinds.contains_key(&gvk) {
            return Err(CreateError::Unregistered(display_gvk(&gvk)));
        }

        Ok(serde_json::from_value(serde_json::to_value(obj)?)?)
    }

    /// Decode a wire object back into `K`, checking its type header against the scheme.
    pub fn decode<K>(&self, obj: &DynamicObject) -> std::result::Result<K, CreateError>
    where
        K: Resource<DynamicType = ()> + DeserializeOwned,
    {
        let expected = gvk_of::<K>();
        let found = self.kind_of(obj)?;
        if found != expected {
            return Err(CreateError::KindMismatch {
                expected: display_gvk(&expected),
                found: display_gvk(&found),
            });
        }

        Ok(serde_json::from_value(serde_json::to_value(obj)?)?)
    }

    /// Endpoint for creating `obj`, namespaced or cluster-wide per its registered scope.
    pub fn api(
        &self,
        client: Client,
        obj: &DynamicObject,
    ) -> std::result::Result<Api<DynamicObject>, CreateError> {
        let gvk = self.kind_of(obj)?;
        let registered = self
            .kinds
            .get(&gvk)
            .ok_or_else(|| CreateError::Unregistered(display_gvk(&gvk)))?;

        if !registered.namespaced {
            return Ok(Api::all_with(client, &registered.resource));
        }

        match obj.namespace() {
            Some(namespace) => Ok(Api::namespaced_with(client, &namespace, &registered.resource)),
            None => Err(CreateError::MissingNamespace(format!(
                "{} {}",
                display_gvk(&gvk),
                obj.name_any()
            ))),
        }
    }

    /// Registered kind of a wire object, read from its apiVersion/kind header.
    fn kind_of(&self, obj: &DynamicObject) -> std::result::Result<GroupVersionKind, CreateError> {
        let Some(types) = obj.types.as_ref() else {
            return Err(CreateError::Unregistered(format!(
                "<untyped object {}>",
                obj.name_any()
            )));
        };

        let (group, version) = types
            .api_version
            .split_once('/')
            .unwrap_or(("", types.api_version.as_str()));
        let gvk = GroupVersionKind::gvk(group, version, &types.kind);

        if self.kinds.contains_key(&gvk) {
            Ok(gvk)
        } else {
            Err(CreateError::Unregistered(display_gvk(&gvk)))
        }
    }
}
