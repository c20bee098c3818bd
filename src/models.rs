//! Core data types shared by the loader, the API client and the reconciler.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A rewrite as declared in the configuration document (desired state).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RewriteSpec {
    /// Domain name to rewrite (e.g. `nas.home.example.com`)
    pub name: String,
    /// Target of the rewrite: an IP address or another domain name
    pub content: String,
}

impl RewriteSpec {
    /// Creates a new desired rewrite.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

impl fmt::Display for RewriteSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.name, self.content)
    }
}

/// A rewrite as reported by the remote service (observed state).
///
/// `id` is assigned by NextDNS and is the only handle usable for deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteRewrite {
    /// Server-assigned identifier
    pub id: String,
    /// Domain name being rewritten
    pub name: String,
    /// Rewrite target
    pub content: String,
    /// Record type inferred by NextDNS (`A`, `AAAA`, `CNAME`). Informational only.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,
}

impl fmt::Display for RemoteRewrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} (ID: {}, type: {})",
            self.name,
            self.content,
            self.id,
            self.record_type.as_deref().unwrap_or("unknown")
        )
    }
}

/// A NextDNS profile, resolved once per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Short profile identifier used in API paths
    pub id: String,
    /// Human-readable profile name
    pub name: String,
}
