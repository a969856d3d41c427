//! Client-side event stream bridge.
//!
//! [`StreamBridge`] owns exactly one SSE connection for the lifetime of
//! a subscription: `Idle → Connecting → Open → (Receiving)* → Closed`,
//! with `Closed` terminal per instance. Changing the workspace scope
//! goes through [`StreamBridge::reconnect`], which consumes (and
//! thereby closes) the old instance before opening the new one — at
//! most one active connection ever exists per logical subscription.
//!
//! Handlers live in a [`HandlerCell`] that is replaced synchronously by
//! [`StreamBridge::set_handlers`] and read at dispatch time, so callers
//! can swap callbacks as often as they like without reconnect churn.
//!
//! There is no automatic retry: transport errors are logged and the
//! connection ends; re-establishment is the caller's concern.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use bytes::Bytes;
use futures_util::{Stream, StreamExt};
use tokio::task::AbortHandle;

use super::decode::SseDecoder;
use super::message::StreamMessage;
use crate::domain::WorkspaceId;

/// Callback invoked with the payload of a matching stream message.
pub type Handler = Box<dyn Fn(serde_json::Value) + Send + Sync>;

/// Mapping from message type to handler callback.
///
/// Supplied wholesale per subscription; the last registration for a
/// given type wins.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Handler>,
}

impl HandlerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `message_type`, replacing any previous
    /// registration for that type.
    #[must_use]
    pub fn on(
        mut self,
        message_type: impl Into<String>,
        handler: impl Fn(serde_json::Value) + Send + Sync + 'static,
    ) -> Self {
        self.handlers.insert(message_type.into(), Box::new(handler));
        self
    }

    /// Returns the number of registered message types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` if no handlers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    fn get(&self, message_type: &str) -> Option<&Handler> {
        self.handlers.get(message_type)
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("types", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Single-slot shared cell holding the latest [`HandlerRegistry`].
///
/// Replaced synchronously on every handler-set change and read at
/// dispatch time, decoupled from the connection's own lifecycle.
#[derive(Debug, Clone, Default)]
pub struct HandlerCell {
    inner: Arc<RwLock<HandlerRegistry>>,
}

impl HandlerCell {
    /// Creates a cell holding `registry`.
    #[must_use]
    pub fn new(registry: HandlerRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Swaps in a new registry. Takes effect for the next dispatched
    /// message; never touches the connection.
    pub fn replace(&self, registry: HandlerRegistry) {
        match self.inner.write() {
            Ok(mut guard) => *guard = registry,
            Err(e) => tracing::error!(error = %e, "handler cell lock poisoned"),
        }
    }

    /// Dispatches `message` to the handler registered for its type.
    ///
    /// Unknown message types are silently ignored.
    pub fn dispatch(&self, message: &StreamMessage) {
        let guard = match self.inner.read() {
            Ok(guard) => guard,
            Err(e) => {
                tracing::error!(error = %e, "handler cell lock poisoned");
                return;
            }
        };
        match guard.get(&message.message_type) {
            Some(handler) => handler(message.payload.clone()),
            None => {
                tracing::trace!(message_type = %message.message_type, "no handler registered");
            }
        }
    }
}

/// Builds the stream endpoint URL for an optional workspace scope.
///
/// The `workspaceId` query parameter is present only when a scope is
/// given.
#[must_use]
pub fn endpoint_url(base_url: &str, workspace_id: Option<WorkspaceId>) -> String {
    let base = base_url.trim_end_matches('/');
    match workspace_id {
        Some(id) => format!("{base}/events/stream?workspaceId={id}"),
        None => format!("{base}/events/stream"),
    }
}

/// A live subscription to the server's event stream.
///
/// Owns the connection task; dropping the bridge (or calling
/// [`close`](Self::close)) aborts the task and detaches the listener
/// deterministically. One instance maps to exactly one connection.
#[derive(Debug)]
pub struct StreamBridge {
    client: reqwest::Client,
    base_url: String,
    workspace_id: Option<WorkspaceId>,
    handlers: HandlerCell,
    closed: Arc<AtomicBool>,
    task: AbortHandle,
}

impl StreamBridge {
    /// Opens a subscription to `base_url`'s event stream, optionally
    /// scoped to `workspace_id`, dispatching messages to `handlers`.
    ///
    /// Connection failures are logged; the bridge does not retry.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    #[must_use]
    pub fn connect(
        client: reqwest::Client,
        base_url: impl Into<String>,
        workspace_id: Option<WorkspaceId>,
        handlers: HandlerRegistry,
    ) -> Self {
        Self::connect_with_cell(
            client,
            base_url.into(),
            workspace_id,
            HandlerCell::new(handlers),
        )
    }

    fn connect_with_cell(
        client: reqwest::Client,
        base_url: String,
        workspace_id: Option<WorkspaceId>,
        handlers: HandlerCell,
    ) -> Self {
        let url = endpoint_url(&base_url, workspace_id);
        let task_client = client.clone();
        let task_handlers = handlers.clone();
        let task = tokio::spawn(async move {
            run_connection(task_client, url, task_handlers).await;
        })
        .abort_handle();

        Self {
            client,
            base_url,
            workspace_id,
            handlers,
            closed: Arc::new(AtomicBool::new(false)),
            task,
        }
    }

    /// Replaces the handler set for all future dispatches.
    ///
    /// The connection stays open; only the registry cell is swapped.
    pub fn set_handlers(&self, handlers: HandlerRegistry) {
        self.handlers.replace(handlers);
    }

    /// Returns the workspace scope of this subscription.
    #[must_use]
    pub const fn workspace_id(&self) -> Option<WorkspaceId> {
        self.workspace_id
    }

    /// Returns `true` once the bridge has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Closes the subscription, aborting the connection task.
    ///
    /// Idempotent: returns `true` only for the call that actually
    /// performed the close.
    pub fn close(&self) -> bool {
        if self.closed.swap(true, Ordering::SeqCst) {
            return false;
        }
        self.task.abort();
        tracing::debug!(workspace = ?self.workspace_id, "event stream bridge closed");
        true
    }

    /// Changes the workspace scope: closes this subscription and opens
    /// a brand-new one to the updated URL, carrying the handler cell
    /// over so registered callbacks keep working.
    ///
    /// Consuming `self` guarantees the prior connection is closed
    /// before the caller can observe the new one.
    #[must_use]
    pub fn reconnect(self, workspace_id: Option<WorkspaceId>) -> Self {
        let client = self.client.clone();
        let base_url = self.base_url.clone();
        let handlers = self.handlers.clone();
        self.close();
        drop(self);
        Self::connect_with_cell(client, base_url, workspace_id, handlers)
    }
}

impl Drop for StreamBridge {
    fn drop(&mut self) {
        self.close();
    }
}

/// Opens the SSE request and pumps its body until the transport ends.
async fn run_connection(client: reqwest::Client, url: String, handlers: HandlerCell) {
    tracing::debug!(url = %url, "opening event stream");

    let response = match client
        .get(&url)
        .header(reqwest::header::ACCEPT, "text/event-stream")
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
    {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(error = %e, url = %url, "event stream connection failed");
            return;
        }
    };

    pump(response.bytes_stream(), &handlers).await;
}

/// Decodes transport chunks into stream messages and dispatches each
/// through the handler cell, in delivery order.
///
/// Transport errors end the pump (logged, no retry). Malformed
/// messages are logged and dropped without affecting the connection.
async fn pump<S, E>(stream: S, handlers: &HandlerCell)
where
    S: Stream<Item = Result<Bytes, E>>,
    E: fmt::Display,
{
    let mut decoder = SseDecoder::new();
    tokio::pin!(stream);

    while let Some(chunk) = stream.next().await {
        match chunk {
            Ok(bytes) => {
                for data in decoder.push(&bytes) {
                    dispatch_data(&data, handlers);
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "event stream transport error");
                return;
            }
        }
    }

    tracing::debug!("event stream ended");
}

/// Parses one SSE `data` payload and dispatches it.
fn dispatch_data(data: &str, handlers: &HandlerCell) {
    match serde_json::from_str::<StreamMessage>(data) {
        Ok(message) => handlers.dispatch(&message),
        Err(e) => tracing::warn!(error = %e, "discarding malformed stream message"),
    }
}
