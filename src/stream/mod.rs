//! Server-Sent Events layer: wire envelope, SSE endpoint, incremental
//! decoder, and the client-side stream bridge.
//!
//! The SSE endpoint at `/events/stream` pushes [`StreamMessage`]
//! envelopes to web clients, optionally scoped to a single workspace
//! via the `workspaceId` query parameter. [`StreamBridge`] is the
//! consuming half: one connection per subscription, dispatching
//! inbound messages to a [`HandlerRegistry`] by message type.

pub mod bridge;
pub mod decode;
pub mod handler;
pub mod message;

pub use bridge::{HandlerCell, HandlerRegistry, StreamBridge, endpoint_url};
pub use decode::SseDecoder;
pub use message::StreamMessage;
