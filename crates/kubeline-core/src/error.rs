use std::fmt;
use std::path::PathBuf;

/// Failure to turn the on-disk kubeconfig into an effective context.
/// Aborts the whole render tick; the caller logs it and emits no segments.
#[derive(Debug)]
pub enum ConfigError {
    NotFound(PathBuf),
    Invalid(String),
    NoCurrentContext,
    UnknownContext(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "No kubeconfig found at {}", path.display()),
            Self::Invalid(msg) => write!(f, "Invalid kubeconfig: {msg}"),
            Self::NoCurrentContext => write!(f, "Kubeconfig has no current context"),
            Self::UnknownContext(name) => write!(f, "Current context {name:?} not present in kubeconfig"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<kube::config::KubeconfigError> for ConfigError {
    fn from(err: kube::config::KubeconfigError) -> Self {
        Self::Invalid(err.to_string())
    }
}

/// Failure of the api-server liveness query. Caught at the probe boundary
/// and recorded as a dead transition, never propagated further.
#[derive(Debug)]
pub enum ProbeError {
    ClientConfig(String),
    Request(String),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClientConfig(msg) => write!(f, "Could not build api-server client: {msg}"),
            Self::Request(msg) => write!(f, "Api-server check failed: {msg}"),
        }
    }
}

impl std::error::Error for ProbeError {}
