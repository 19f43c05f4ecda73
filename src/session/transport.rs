// SPDX-License-Identifier: MIT

//! The session persistence boundary
//!
//! A transport persists one JSON object per (session, namespace) pair for
//! the lifetime of a browser session. The store treats it as an opaque
//! key-value mechanism; cookie handling, cache eviction and expiry all live
//! on the other side of this trait.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::TransportError;

/// Identifier for one browser session, extracted from the request by the
/// caller and passed explicitly into every store operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-session persistence of namespace payloads.
///
/// Implementations may buffer writes until `commit`; the store surfaces
/// `commit` so request handlers can flush before the response is sent.
/// Write-through transports keep the default no-op.
#[async_trait]
pub trait SessionTransport: Send + Sync {
    /// Read the payload stored under `namespace`, or `None` if never written.
    async fn read(
        &self,
        session: &SessionId,
        namespace: &str,
    ) -> Result<Option<Map<String, Value>>, TransportError>;

    /// Replace the payload stored under `namespace`.
    async fn write(
        &self,
        session: &SessionId,
        namespace: &str,
        payload: Map<String, Value>,
    ) -> Result<(), TransportError>;

    /// Remove `namespace` entirely. Removing an absent namespace is a no-op.
    async fn remove(&self, session: &SessionId, namespace: &str) -> Result<(), TransportError>;

    /// Flush buffered writes for `session`.
    async fn commit(&self, _session: &SessionId) -> Result<(), TransportError> {
        Ok(())
    }
}

/// In-memory transport for tests and single-process deployments
#[derive(Clone)]
pub struct MemoryTransport {
    namespaces: Arc<RwLock<HashMap<(SessionId, String), Map<String, Value>>>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self {
            namespaces: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MemoryTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionTransport for MemoryTransport {
    async fn read(
        &self,
        session: &SessionId,
        namespace: &str,
    ) -> Result<Option<Map<String, Value>>, TransportError> {
        let namespaces = self.namespaces.read().await;
        Ok(namespaces
            .get(&(session.clone(), namespace.to_string()))
            .cloned())
    }

    async fn write(
        &self,
        session: &SessionId,
        namespace: &str,
        payload: Map<String, Value>,
    ) -> Result<(), TransportError> {
        let mut namespaces = self.namespaces.write().await;
        namespaces.insert((session.clone(), namespace.to_string()), payload);
        Ok(())
    }

    async fn remove(&self, session: &SessionId, namespace: &str) -> Result<(), TransportError> {
        let mut namespaces = self.namespaces.write().await;
        namespaces.remove(&(session.clone(), namespace.to_string()));
        Ok(())
    }
}
