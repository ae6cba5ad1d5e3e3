// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::fmt;
use thiserror::Error;

/// The resources submitted by the bootstrap, in submission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    NfdInstance,
    ClusterPolicy,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::NfdInstance => write!(f, "nfd-instance"),
            Target::ClusterPolicy => write!(f, "cluster-policy"),
        }
    }
}

#[derive(Error, Debug)]
pub enum InitError {
    #[error("Failed to register {kind} in type scheme: {reason}")]
    Registration { kind: String, reason: String },

    #[error("Cluster connection failed: {0}")]
    Connection(String),

    #[error("Failed to create {target}: {source}")]
    Creation {
        target: Target,
        #[source]
        source: CreateError,
    },
}

/// Cause of a failed create call.
#[derive(Error, Debug)]
pub enum CreateError {
    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    #[error("Kind {0} is not registered in the type scheme")]
    Unregistered(String),

    #[error("Failed to encode object: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Namespaced object {0} has no namespace")]
    MissingNamespace(String),

    #[error("Object of kind {found} cannot be decoded as {expected}")]
    KindMismatch { expected: String, found: String },
}

impl CreateError {
    /// True when the API server rejected the create because the object already exists.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, CreateError::Kube(kube::Error::Api(err)) if err.code == 409)
    }
}

impl InitError {
    /// The resource whose creation failed, if any.
    pub fn target(&self) -> Option<Target> {
        match self {
            InitError::Creation { target, .. } => Some(*target),
            _ => None,
        }
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, InitError::Creation { source, .. } if source.is_already_exists())
    }
}

pub type Result<T> = std::result::Result<T, InitError>;

#[cfg(test)]
mod tests {
    use super::*;
    use kube::error::ErrorResponse;

    fn api_error(code: u16, reason: &str) -> CreateError {
        CreateError::Kube(kube::Error::Api(ErrorResponse {
            status: "Failure".to_string(),
            message: "boom".to_string(),
            reason: reason.to_string(),
            code,
        }))
    }

    #[test]
    fn test_target_display() {
        assert_eq!(Target::NfdInstance.to_string(), "nfd-instance");
        assert_eq!(Target::ClusterPolicy.to_string(), "cluster-policy");
    }

    #[test]
    fn test_is_already_exists() {
        assert!(api_error(409, "AlreadyExists").is_already_exists());
        assert!(!api_error(422, "Invalid").is_already_exists());
        assert!(!CreateError::Unregistered("nvidia.com/v1/ClusterPolicy".to_string())
            .is_already_exists());
    }

    #[test]
    fn test_creation_error_names_target() {
        let err = InitError::Creation {
            target: Target::ClusterPolicy,
            source: CreateError::MissingNamespace("foo".to_string()),
        };

        assert_eq!(err.target(), Some(Target::ClusterPolicy));
        assert!(!err.is_already_exists());
        assert!(err.to_string().starts_with("Failed to create cluster-policy:"));
    }
}
