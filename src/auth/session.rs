use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::auth::Identity;

/// In-process session map: cookie value -> identity. Shared across requests
/// behind an RwLock; entries live until logout or process exit.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, Identity>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an identity and return its new session id.
    pub async fn create(&self, identity: Identity) -> String {
        let sid = Uuid::new_v4().to_string();
        self.inner.write().await.insert(sid.clone(), identity);
        sid
    }

    pub async fn get(&self, sid: &str) -> Option<Identity> {
        self.inner.read().await.get(sid).cloned()
    }

    pub async fn remove(&self, sid: &str) -> Option<Identity> {
        self.inner.write().await.remove(sid)
    }
}

/// Outstanding OAuth `state` parameters issued by the login redirect. Values
/// are one-shot: consuming one removes it, so a replayed callback fails.
#[derive(Clone, Default)]
pub struct LoginStates {
    inner: Arc<RwLock<HashSet<String>>>,
}

impl LoginStates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh state value for an authorize redirect.
    pub async fn issue(&self) -> String {
        let state = Uuid::new_v4().to_string();
        self.inner.write().await.insert(state.clone());
        state
    }

    /// Consume a state echoed back by the provider. Returns false when the
    /// value was never issued or was already used.
    pub async fn consume(&self, state: &str) -> bool {
        self.inner.write().await.remove(state)
    }
}
