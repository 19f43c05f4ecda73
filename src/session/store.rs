// SPDX-License-Identifier: MIT

//! Merge-on-write access to namespaced session state
//!
//! `set` is a full read-modify-write against the namespace: sibling keys set
//! by earlier calls survive every later `set`. That read-modify-write is not
//! atomic across the transport boundary. Two concurrent requests from the
//! same browser session mutating the same namespace race at namespace
//! granularity: the later writer's stale read can drop the earlier writer's
//! key (last-write-wins). This is an accepted consistency boundary under the
//! single-tab usage this service assumes, not something the store corrects.

use serde_json::{Map, Value};
use std::sync::Arc;

use crate::error::SessionError;
use crate::session::transport::{SessionId, SessionTransport};
use crate::session::workflows::{Workflow, WorkflowPayload};

/// Namespaced, merge-on-write view over a session transport
#[derive(Clone)]
pub struct SessionStore {
    transport: Arc<dyn SessionTransport>,
}

impl SessionStore {
    pub fn new(transport: Arc<dyn SessionTransport>) -> Self {
        Self { transport }
    }

    /// Read one key from a namespace.
    ///
    /// Total: a missing namespace, a missing key and a failed transport read
    /// all yield `None`. Absence is a normal result, not an error.
    pub async fn get(&self, session: &SessionId, namespace: &str, key: &str) -> Option<Value> {
        let mut payload = self.read_or_empty(session, namespace).await;
        payload.remove(key)
    }

    /// Read a namespace's full payload, empty when absent or unreadable.
    pub async fn get_namespace(
        &self,
        session: &SessionId,
        namespace: &str,
    ) -> Map<String, Value> {
        self.read_or_empty(session, namespace).await
    }

    /// Overwrite one key, preserving every sibling key in the namespace.
    ///
    /// Returns the committed value. A failed transport write propagates;
    /// persistence must not silently not happen.
    pub async fn set(
        &self,
        session: &SessionId,
        namespace: &str,
        key: &str,
        value: Value,
    ) -> Result<Value, SessionError> {
        let mut payload = self.read_or_empty(session, namespace).await;
        payload.insert(key.to_string(), value.clone());
        self.transport.write(session, namespace, payload).await?;
        log::debug!("session {}: set {}.{}", session, namespace, key);
        Ok(value)
    }

    /// Remove the whole namespace. Clearing an absent namespace is a no-op.
    pub async fn clear(&self, session: &SessionId, namespace: &str) -> Result<(), SessionError> {
        self.transport.remove(session, namespace).await?;
        log::debug!("session {}: cleared namespace {}", session, namespace);
        Ok(())
    }

    /// Like `get`, but absence is fatal to the caller's operation.
    pub async fn require(
        &self,
        session: &SessionId,
        namespace: &str,
        key: &str,
    ) -> Result<Value, SessionError> {
        self.get(session, namespace, key)
            .await
            .ok_or_else(|| SessionError::required_state_missing(namespace, key))
    }

    /// Flush buffered transport writes for `session`.
    ///
    /// Handlers using a buffering transport call this before the response is
    /// sent; for write-through transports it is a no-op.
    pub async fn commit(&self, session: &SessionId) -> Result<(), SessionError> {
        self.transport.commit(session).await?;
        Ok(())
    }

    /// Load a workflow's payload as its typed struct.
    ///
    /// Absent or unreadable state yields the default payload, so callers get
    /// a fully-constructed value with every field at its absent state rather
    /// than a partially-built object.
    pub async fn load<T: WorkflowPayload>(&self, session: &SessionId, workflow: Workflow) -> T {
        let payload = self.read_or_empty(session, workflow.namespace()).await;
        match serde_json::from_value(Value::Object(payload)) {
            Ok(typed) => typed,
            Err(err) => {
                log::warn!(
                    "session {}: namespace '{}' did not parse as {}, treating as empty: {}",
                    session,
                    workflow.namespace(),
                    std::any::type_name::<T>(),
                    err
                );
                T::default()
            }
        }
    }

    /// Persist a typed workflow payload over its namespace.
    ///
    /// Unknown keys carried in the payload's flattened extra map are written
    /// back, so state set by other code paths merges forward.
    pub async fn save<T: WorkflowPayload>(
        &self,
        session: &SessionId,
        workflow: Workflow,
        payload: &T,
    ) -> Result<(), SessionError> {
        let value = serde_json::to_value(payload)?;
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(SessionError::other(format!(
                    "workflow payload must serialize to an object, got {}",
                    other
                )))
            }
        };
        self.transport
            .write(session, workflow.namespace(), map)
            .await?;
        log::debug!(
            "session {}: saved {} payload",
            session,
            workflow.namespace()
        );
        Ok(())
    }

    async fn read_or_empty(&self, session: &SessionId, namespace: &str) -> Map<String, Value> {
        match self.transport.read(session, namespace).await {
            Ok(Some(payload)) => payload,
            Ok(None) => Map::new(),
            Err(err) => {
                log::warn!(
                    "session {}: treating namespace '{}' as empty after transport read failure: {}",
                    session,
                    namespace,
                    err
                );
                Map::new()
            }
        }
    }
}
