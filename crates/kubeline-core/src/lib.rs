pub mod context;
pub mod error;
pub mod probe;

pub use context::{kubeconfig_paths, load_kubeconfig, resolve_context, ClusterContext};
pub use error::{ConfigError, ProbeError};
pub use probe::ApiServerLiveness;
