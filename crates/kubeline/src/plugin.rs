use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::Instant;

use kube::config::Kubeconfig;
use kubeline_config::SegmentOptions;
use kubeline_core::probe::{self, ApiServerLiveness};
use kubeline_core::{context, ClusterContext, ConfigError};
use kubeline_segments::{build_segments, Segment};

use crate::sink::SegmentSink;

/// Per-call context bag from the host renderer.
#[derive(Debug, Clone, Default)]
pub struct RenderInfo {
    pub environ: HashMap<String, String>,
}

impl RenderInfo {
    /// Snapshot of the process environment, for hosts that do not carry
    /// their own.
    pub fn from_env() -> Self {
        Self { environ: std::env::vars().collect() }
    }
}

/// The kubernetes status-line segment.
///
/// One instance lives for the process and the host calls [`render`] once
/// per tick. The only state surviving between ticks is the liveness cache,
/// behind a mutex so a host that renders from several threads stays sound.
/// The mutex is never held across an await.
///
/// [`render`]: KubernetesSegment::render
pub struct KubernetesSegment {
    liveness: Mutex<ApiServerLiveness>,
}

impl KubernetesSegment {
    pub fn new() -> Self {
        Self { liveness: Mutex::new(ApiServerLiveness::new()) }
    }

    /// Resolve the effective kubeconfig context and render it as segments.
    ///
    /// Returns `None` when resolution fails: the error goes to the sink and
    /// the segment disappears for this tick. A failing api-server probe only
    /// flips the cached liveness flag and never suppresses output.
    pub async fn render(
        &self,
        sink: &dyn SegmentSink,
        info: &RenderInfo,
        options: &SegmentOptions,
    ) -> Option<Vec<Segment>> {
        sink.debug("Rendering kubernetes segment");

        let (kubeconfig, ctx) = match resolve(info) {
            Ok(resolved) => resolved,
            Err(e) => {
                sink.error(&e.to_string());
                return None;
            }
        };

        if options.api_server_check {
            self.check_api_server(sink, kubeconfig, &ctx.name, options).await;
        }

        Some(build_segments(&ctx.name, &ctx.namespace, options))
    }

    /// Last-known probe result. Never consulted when rendering; exposed for
    /// hosts that extend the segment with their own liveness styling.
    pub fn api_server_alive(&self) -> bool {
        self.lock_liveness().is_alive()
    }

    /// Time-gated liveness check: at most one version query per configured
    /// interval, with the check time stamped before the query so a failing
    /// endpoint is not retried on every tick.
    async fn check_api_server(
        &self,
        sink: &dyn SegmentSink,
        kubeconfig: Kubeconfig,
        context: &str,
        options: &SegmentOptions,
    ) {
        let (due, alive) = {
            let mut liveness = self.lock_liveness();
            let due = liveness.begin_check(Instant::now(), options.check_interval());
            (due, liveness.is_alive())
        };

        if !due {
            if !alive {
                sink.debug("Assuming kube-apiserver is still dead");
            }
            return;
        }

        match probe::query_server_version(kubeconfig, context).await {
            Ok(version) => {
                sink.debug(&format!("kube-apiserver answered: {version:?}"));
                self.lock_liveness().record(true);
            }
            Err(e) => {
                sink.error(&e.to_string());
                self.lock_liveness().record(false);
            }
        }
    }

    fn lock_liveness(&self) -> MutexGuard<'_, ApiServerLiveness> {
        match self.liveness.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for KubernetesSegment {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve(info: &RenderInfo) -> Result<(Kubeconfig, ClusterContext), ConfigError> {
    let kubeconfig = context::load_kubeconfig(&info.environ)?;
    let ctx = context::resolve_context(&kubeconfig)?;
    Ok((kubeconfig, ctx))
}
