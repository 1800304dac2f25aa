use std::fmt;

/// Visibility scope an addon lookup runs in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum AddonScope {
    #[default]
    ClusterWide,
    Namespaced(String),
}

impl AddonScope {
    pub fn from_namespace(namespace: Option<&str>) -> Self {
        match namespace {
            Some(ns) if !ns.is_empty() => AddonScope::Namespaced(ns.to_string()),
            _ => AddonScope::ClusterWide,
        }
    }

    pub fn namespace(&self) -> Option<&str> {
        match self {
            AddonScope::ClusterWide => None,
            AddonScope::Namespaced(ns) => Some(ns),
        }
    }
}

impl fmt::Display for AddonScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddonScope::ClusterWide => f.write_str("cluster-wide"),
            AddonScope::Namespaced(ns) => write!(f, "namespace:{}", ns),
        }
    }
}
