//! HTTP implementation of the NextDNS collaborators.

use async_trait::async_trait;
use log::debug;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

use super::wire::{check_empty_success, decode_data, error_from_status, CreateRewriteBody};
use super::{ProfileResolver, RewriteRepository};
use crate::error_handling::ApiError;
use crate::models::{Profile, RemoteRewrite, RewriteSpec};

/// NextDNS REST API client.
///
/// The API key is carried as a default header on the wrapped `reqwest::Client`
/// (see [`crate::initialization::init_client`]).
#[derive(Debug, Clone)]
pub struct NextDnsClient {
    http: reqwest::Client,
    base_url: String,
}

impl NextDnsClient {
    /// Wraps an HTTP client for the API rooted at `base_url`.
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);
        self.http.request(method, url)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        resource: &str,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        if !(200..300).contains(&status) {
            return Err(error_from_status(status, &body, resource));
        }
        decode_data(status, &body)
    }

    /// Lists all profiles visible to the API key.
    pub async fn list_profiles(&self) -> Result<Vec<Profile>, ApiError> {
        self.fetch(self.request(Method::GET, "/profiles"), "profiles")
            .await
    }
}

#[async_trait]
impl ProfileResolver for NextDnsClient {
    async fn resolve_profile(&self, name: &str) -> Result<Option<Profile>, ApiError> {
        let profiles = self.list_profiles().await?;
        debug!("Account has {} profile(s)", profiles.len());
        Ok(profiles.into_iter().find(|p| p.name == name))
    }
}

#[async_trait]
impl RewriteRepository for NextDnsClient {
    async fn list_rewrites(&self, profile_id: &str) -> Result<Vec<RemoteRewrite>, ApiError> {
        let path = format!("/profiles/{}/rewrites", profile_id);
        self.fetch(self.request(Method::GET, &path), "rewrites")
            .await
    }

    async fn create_rewrite(
        &self,
        profile_id: &str,
        spec: &RewriteSpec,
    ) -> Result<RemoteRewrite, ApiError> {
        let path = format!("/profiles/{}/rewrites", profile_id);
        let body = CreateRewriteBody {
            name: &spec.name,
            content: &spec.content,
        };
        self.fetch(self.request(Method::POST, &path).json(&body), "rewrites")
            .await
    }

    async fn delete_rewrite(&self, profile_id: &str, rewrite_id: &str) -> Result<(), ApiError> {
        let path = format!("/profiles/{}/rewrites/{}", profile_id, rewrite_id);
        let response = self.request(Method::DELETE, &path).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        if !(200..300).contains(&status) {
            return Err(error_from_status(
                status,
                &body,
                &format!("rewrite {}", rewrite_id),
            ));
        }
        check_empty_success(status, &body)
    }
}
