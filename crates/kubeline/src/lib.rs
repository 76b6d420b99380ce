pub mod plugin;
pub mod sink;

pub use kubeline_config::SegmentOptions;
pub use kubeline_core::{ClusterContext, ConfigError, ProbeError};
pub use kubeline_segments::{build_segments, highlight, Segment, KUBERNETES_LOGO};
pub use plugin::{KubernetesSegment, RenderInfo};
pub use sink::{SegmentSink, TracingSink};
