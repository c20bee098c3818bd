//! Remote collaborators: profile resolution and the rewrite repository.
//!
//! The reconciler only depends on the traits below; `NextDnsClient` is the
//! HTTP implementation used by the binary.

mod client;
mod wire;

use async_trait::async_trait;

use crate::error_handling::ApiError;
use crate::models::{Profile, RemoteRewrite, RewriteSpec};

pub use client::NextDnsClient;

/// Resolves a profile name to its identifier.
#[async_trait]
pub trait ProfileResolver: Send + Sync {
    /// Returns the first profile whose name equals `name`, or `None`.
    async fn resolve_profile(&self, name: &str) -> Result<Option<Profile>, ApiError>;
}

/// List/create/delete access to the rewrites of one profile.
///
/// There is no update operation; changing a rewrite means deleting it and
/// creating it again.
#[async_trait]
pub trait RewriteRepository: Send + Sync {
    /// Lists every rewrite currently configured on the profile.
    async fn list_rewrites(&self, profile_id: &str) -> Result<Vec<RemoteRewrite>, ApiError>;

    /// Creates a rewrite and returns it with its service-assigned id.
    async fn create_rewrite(
        &self,
        profile_id: &str,
        spec: &RewriteSpec,
    ) -> Result<RemoteRewrite, ApiError>;

    /// Deletes a rewrite by id.
    async fn delete_rewrite(&self, profile_id: &str, rewrite_id: &str) -> Result<(), ApiError>;
}
