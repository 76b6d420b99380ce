use std::time::{Duration, Instant};

use k8s_openapi::apimachinery::pkg::version::Info;
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};

use crate::error::ProbeError;

/// Last-known api-server liveness, carried across render ticks.
///
/// Two states, alive and dead, starting dead until a check succeeds. The
/// check timestamp is stamped on the monotonic clock *before* any network
/// traffic, so a dead endpoint is queried at most once per interval rather
/// than on every tick.
#[derive(Debug)]
pub struct ApiServerLiveness {
    last_check: Option<Instant>,
    alive: bool,
}

impl ApiServerLiveness {
    pub fn new() -> Self {
        Self { last_check: None, alive: false }
    }

    /// Returns whether a check is due, stamping `now` as the last check time
    /// when it is. The stamp advances even if the caller's query later
    /// fails; a never-checked state is always due.
    pub fn begin_check(&mut self, now: Instant, interval: Duration) -> bool {
        let due = match self.last_check {
            None => true,
            Some(at) => now.duration_since(at) > interval,
        };
        if due {
            self.last_check = Some(now);
        }
        due
    }

    pub fn record(&mut self, alive: bool) {
        self.alive = alive;
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }
}

impl Default for ApiServerLiveness {
    fn default() -> Self {
        Self::new()
    }
}

/// One version query against the control plane selected by `context`.
///
/// Builds a client configuration from the merged kubeconfig pinned to that
/// context and asks the api server for its version info. No timeout beyond
/// whatever the client transport defaults to; the response payload is the
/// caller's to log and discard.
pub async fn query_server_version(kubeconfig: Kubeconfig, context: &str) -> Result<Info, ProbeError> {
    let opts = KubeConfigOptions { context: Some(context.to_string()), ..Default::default() };
    let config = Config::from_custom_kubeconfig(kubeconfig, &opts)
        .await
        .map_err(|e| ProbeError::ClientConfig(e.to_string()))?;
    let client = Client::try_from(config).map_err(|e| ProbeError::ClientConfig(e.to_string()))?;

    client.apiserver_version().await.map_err(|e| ProbeError::Request(e.to_string()))
}
