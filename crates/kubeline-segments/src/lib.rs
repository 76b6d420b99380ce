use kubeline_config::SegmentOptions;
use serde::Serialize;

/// Highlight groups the host theme is expected to define.
pub mod highlight {
    pub const CLUSTER: &str = "kubernetes_cluster";
    pub const CLUSTER_ALERT: &str = "kubernetes_cluster:alert";
    pub const NAMESPACE: &str = "kubernetes_namespace";
    pub const NAMESPACE_ALERT: &str = "kubernetes_namespace:alert";
    pub const DIVIDER: &str = "kubernetes:divider";
}

/// U+2388 HELM SYMBOL with a trailing space, rendered ahead of the text it
/// introduces.
pub const KUBERNETES_LOGO: &str = "\u{2388} ";

/// One styled unit of status-line output, handed to the host renderer as-is
/// and never retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub contents: String,
    pub highlight_groups: Vec<String>,
    pub divider_highlight_group: String,
}

impl Segment {
    fn logo(group: &str) -> Self {
        Self::text(KUBERNETES_LOGO, group)
    }

    fn text(contents: &str, group: &str) -> Self {
        Self {
            contents: contents.to_string(),
            highlight_groups: vec![group.to_string()],
            divider_highlight_group: highlight::DIVIDER.to_string(),
        }
    }
}

/// Map the resolved context and namespace to an ordered segment list.
///
/// Cluster segments strictly precede namespace segments. Each group carries
/// its alert highlight when its own name, or the `context:namespace`
/// compound key, appears in the alert list. The logo attaches to the first
/// group that renders; a `"default"` namespace is suppressed unless asked
/// for, and when nothing renders the logo disappears with it — the glyph is
/// a connector for the text that follows, never shown standalone.
pub fn build_segments(context: &str, namespace: &str, options: &SegmentOptions) -> Vec<Segment> {
    let compound = format!("{context}:{namespace}");
    let hit = |name: &str| options.alerts.iter().any(|a| a == name || *a == compound);

    let mut segments = Vec::new();

    if options.show_cluster {
        let group = if hit(context) { highlight::CLUSTER_ALERT } else { highlight::CLUSTER };
        if options.show_kube_logo {
            segments.push(Segment::logo(group));
        }
        segments.push(Segment::text(context, group));
    }

    if options.show_namespace && (namespace != "default" || options.show_default_namespace) {
        let group = if hit(namespace) { highlight::NAMESPACE_ALERT } else { highlight::NAMESPACE };
        if !options.show_cluster && options.show_kube_logo {
            segments.push(Segment::logo(group));
        }
        segments.push(Segment::text(namespace, group));
    }

    segments
}
