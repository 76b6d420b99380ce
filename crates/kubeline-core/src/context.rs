use std::collections::HashMap;
use std::path::PathBuf;

use kube::config::Kubeconfig;

use crate::error::ConfigError;

/// The effective (context, namespace) pair selected by the merged kubeconfig.
///
/// Re-derived from disk on every render tick; the file can change between
/// ticks and nothing here is cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterContext {
    pub name: String,
    pub namespace: String,
}

/// Candidate kubeconfig locations, in merge order: `KUBECONFIG` from the
/// host-supplied environment is a PATH-style list and overrides everything,
/// otherwise the single default `$HOME/.kube/config`.
pub fn kubeconfig_paths(environ: &HashMap<String, String>) -> Vec<PathBuf> {
    if let Some(list) = environ.get("KUBECONFIG") {
        let candidates: Vec<PathBuf> = std::env::split_paths(list).filter(|p| !p.as_os_str().is_empty()).collect();
        if !candidates.is_empty() {
            return candidates;
        }
    }

    let home = environ
        .get("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("/root"));
    vec![home.join(".kube").join("config")]
}

/// Read every candidate file that exists and fold them into one effective
/// kubeconfig. Merge semantics belong entirely to [`Kubeconfig::merge`]:
/// earlier files win on conflicting scalars, lists are concatenated.
pub fn load_kubeconfig(environ: &HashMap<String, String>) -> Result<Kubeconfig, ConfigError> {
    let candidates = kubeconfig_paths(environ);
    let mut merged: Option<Kubeconfig> = None;

    for path in &candidates {
        if !path.exists() {
            continue;
        }

        tracing::debug!("Reading kubeconfig from {}", path.display());
        let config = Kubeconfig::read_from(path)?;
        merged = Some(match merged {
            Some(previous) => previous.merge(config)?,
            None => config,
        });
    }

    merged.ok_or_else(|| ConfigError::NotFound(candidates.into_iter().next().unwrap_or_default()))
}

/// Extract the context object named by the merged config's current-context
/// pointer. A context entry without a namespace resolves to `"default"`.
pub fn resolve_context(kubeconfig: &Kubeconfig) -> Result<ClusterContext, ConfigError> {
    let name = kubeconfig
        .current_context
        .clone()
        .filter(|n| !n.is_empty())
        .ok_or(ConfigError::NoCurrentContext)?;

    let entry = kubeconfig
        .contexts
        .iter()
        .find(|c| c.name == name)
        .ok_or_else(|| ConfigError::UnknownContext(name.clone()))?;

    let namespace = entry
        .context
        .as_ref()
        .and_then(|c| c.namespace.clone())
        .unwrap_or_else(|| "default".to_string());

    Ok(ClusterContext { name, namespace })
}
