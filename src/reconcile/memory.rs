//! In-memory NextDNS double for tests.
//!
//! Records every call and hands out sequential ids (`id1`, `id2`, ...).
//! Individual creates and deletes can be made to fail by rewrite name or id.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{ProfileResolver, RewriteRepository};
use crate::error_handling::ApiError;
use crate::models::{Profile, RemoteRewrite, RewriteSpec};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    ResolveProfile(String),
    List(String),
    Create { name: String, content: String },
    Delete(String),
}

#[derive(Default)]
struct Inner {
    rewrites: Vec<RemoteRewrite>,
    calls: Vec<Call>,
    next_id: usize,
    failing_creates: HashSet<String>,
    failing_deletes: HashSet<String>,
}

pub(crate) struct InMemoryNextDns {
    profiles: HashMap<String, Profile>,
    inner: Mutex<Inner>,
}

impl InMemoryNextDns {
    pub fn new(profile: Profile) -> Self {
        let mut profiles = HashMap::new();
        profiles.insert(profile.name.clone(), profile);
        Self {
            profiles,
            inner: Mutex::new(Inner::default()),
        }
    }

    pub fn with_rewrite(self, id: &str, name: &str, content: &str) -> Self {
        self.inner.lock().unwrap().rewrites.push(RemoteRewrite {
            id: id.to_string(),
            name: name.to_string(),
            content: content.to_string(),
            record_type: None,
        });
        self
    }

    pub fn fail_create_for(self, name: &str) -> Self {
        self.inner
            .lock()
            .unwrap()
            .failing_creates
            .insert(name.to_string());
        self
    }

    pub fn fail_delete_for(self, id: &str) -> Self {
        self.inner
            .lock()
            .unwrap()
            .failing_deletes
            .insert(id.to_string());
        self
    }

    pub fn rewrites(&self) -> Vec<RemoteRewrite> {
        self.inner.lock().unwrap().rewrites.clone()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().unwrap().calls.clone()
    }

    /// Only the mutating calls, in order.
    pub fn mutations(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Create { .. } | Call::Delete(_)))
            .collect()
    }

    /// Observable `(name, content)` pairs, sorted.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<_> = self
            .rewrites()
            .into_iter()
            .map(|r| (r.name, r.content))
            .collect();
        pairs.sort();
        pairs
    }
}

#[async_trait]
impl ProfileResolver for InMemoryNextDns {
    async fn resolve_profile(&self, name: &str) -> Result<Option<Profile>, ApiError> {
        self.inner
            .lock()
            .unwrap()
            .calls
            .push(Call::ResolveProfile(name.to_string()));
        Ok(self.profiles.get(name).cloned())
    }
}

#[async_trait]
impl RewriteRepository for InMemoryNextDns {
    async fn list_rewrites(&self, profile_id: &str) -> Result<Vec<RemoteRewrite>, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(Call::List(profile_id.to_string()));
        Ok(inner.rewrites.clone())
    }

    async fn create_rewrite(
        &self,
        _profile_id: &str,
        spec: &RewriteSpec,
    ) -> Result<RemoteRewrite, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(Call::Create {
            name: spec.name.clone(),
            content: spec.content.clone(),
        });
        if inner.failing_creates.contains(&spec.name) {
            return Err(ApiError::Rejected {
                status: 400,
                detail: "invalid: content".to_string(),
            });
        }
        inner.next_id += 1;
        let created = RemoteRewrite {
            id: format!("id{}", inner.next_id),
            name: spec.name.clone(),
            content: spec.content.clone(),
            record_type: None,
        };
        inner.rewrites.push(created.clone());
        Ok(created)
    }

    async fn delete_rewrite(&self, _profile_id: &str, rewrite_id: &str) -> Result<(), ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(Call::Delete(rewrite_id.to_string()));
        if inner.failing_deletes.contains(rewrite_id) {
            return Err(ApiError::Rejected {
                status: 500,
                detail: "internal error".to_string(),
            });
        }
        let before = inner.rewrites.len();
        inner.rewrites.retain(|r| r.id != rewrite_id);
        if inner.rewrites.len() == before {
            return Err(ApiError::NotFound(format!("rewrite {}", rewrite_id)));
        }
        Ok(())
    }
}
