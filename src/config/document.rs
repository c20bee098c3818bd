//! Rewrite configuration document.
//!
//! Parses the YAML file that declares the target profile and the desired rewrites:
//!
//! ```yaml
//! profile_name: Home
//! rewrites:
//!   - name: nas.home.example.com
//!     content: 192.168.1.10
//!   - name: media.home.example.com
//!     content: nas.home.example.com
//! ```

use std::collections::HashSet;
use std::path::Path;

use log::warn;
use serde::Deserialize;

use crate::error_handling::ConfigError;
use crate::models::RewriteSpec;

/// Document shape as written on disk. Required fields are checked after parsing
/// so that a missing field reports `ConfigError::MissingField`.
#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    profile_name: Option<String>,
    #[serde(default)]
    rewrites: Option<Vec<RewriteSpec>>,
}

/// Validated rewrite configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteConfig {
    /// Name of the NextDNS profile the rewrites belong to
    pub profile_name: String,
    /// Desired rewrites, in document order
    pub rewrites: Vec<RewriteSpec>,
}

impl RewriteConfig {
    /// Reads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file does not exist,
    /// `ConfigError::Read` for other I/O failures, and the errors of
    /// [`RewriteConfig::from_yaml_str`] for invalid content.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::Read {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        Self::from_yaml_str(&content)
    }

    /// Parses and validates a configuration document.
    ///
    /// Names and contents are trimmed. An empty or absent `rewrites` list is
    /// accepted; the run then performs no rewrite calls.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: RawDocument = serde_yaml::from_str(content)?;

        let profile_name = raw
            .profile_name
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .ok_or(ConfigError::MissingField("profile_name"))?;

        let rewrites = raw
            .rewrites
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, rewrite)| validate_rewrite(index, rewrite))
            .collect::<Result<Vec<_>, _>>()?;

        warn_on_duplicate_names(&rewrites);

        Ok(Self {
            profile_name,
            rewrites,
        })
    }
}

fn validate_rewrite(index: usize, rewrite: RewriteSpec) -> Result<RewriteSpec, ConfigError> {
    let name = rewrite.name.trim();
    let content = rewrite.content.trim();
    if name.is_empty() {
        return Err(ConfigError::InvalidRewrite {
            index,
            reason: "name is empty".to_string(),
        });
    }
    if content.is_empty() {
        return Err(ConfigError::InvalidRewrite {
            index,
            reason: format!("content for {} is empty", name),
        });
    }
    Ok(RewriteSpec::new(name, content))
}

/// Duplicate names are allowed; the last entry wins on the remote side.
fn warn_on_duplicate_names(rewrites: &[RewriteSpec]) {
    let mut seen = HashSet::new();
    for rewrite in rewrites {
        if !seen.insert(rewrite.name.as_str()) {
            warn!(
                "Rewrite {} is declared more than once; later entries replace earlier ones",
                rewrite.name
            );
        }
    }
}
