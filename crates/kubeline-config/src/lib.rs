use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Per-call display options for the kubernetes segment.
///
/// Hosts that carry their own segment configuration hand the recognized keys
/// in as a table ([`SegmentOptions::from_json`]); hosts that forward nothing
/// can let [`SegmentOptions::load`] pick up a standalone config file. Unknown
/// keys are ignored, missing keys take the documented defaults, and both
/// snake_case and kebab-case spellings parse.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SegmentOptions {
    #[serde(alias = "show-kube-logo")]
    pub show_kube_logo: bool,
    #[serde(alias = "show-cluster")]
    pub show_cluster: bool,
    #[serde(alias = "show-namespace")]
    pub show_namespace: bool,
    #[serde(alias = "show-default-namespace")]
    pub show_default_namespace: bool,
    #[serde(alias = "api-server-check")]
    pub api_server_check: bool,
    #[serde(alias = "api-server-check-interval")]
    pub api_server_check_interval: u64,
    pub alerts: Vec<String>,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            show_kube_logo: true,
            show_cluster: true,
            show_namespace: true,
            show_default_namespace: false,
            api_server_check: false,
            api_server_check_interval: 15,
            alerts: Vec::new(),
        }
    }
}

impl SegmentOptions {
    pub fn load() -> Self {
        if let Some(path) = Self::user_config_path() {
            if path.exists() {
                match std::fs::read_to_string(&path) {
                    Ok(contents) => match toml::from_str::<SegmentOptions>(&contents) {
                        Ok(options) => return options,
                        Err(e) => eprintln!("Warning: invalid config at {}: {e}", path.display()),
                    },
                    Err(e) => eprintln!("Warning: could not read {}: {e}", path.display()),
                }
            }
        }

        Self::default()
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Options out of a host-supplied bag of segment arguments.
    pub fn from_json(value: serde_json::Value) -> anyhow::Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.api_server_check_interval)
    }

    /// Whether the context, the namespace, or the `context:namespace`
    /// compound key appears in the alert list. Exact string match, no
    /// wildcards.
    pub fn is_alert(&self, context: &str, namespace: &str) -> bool {
        if self.alerts.is_empty() {
            return false;
        }
        let compound = format!("{context}:{namespace}");
        self.alerts.iter().any(|a| a == context || a == namespace || *a == compound)
    }

    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("kubeline").join("config.toml"))
    }
}

#[cfg(test)]
mod tests;
