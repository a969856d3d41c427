//! # rota-gateway
//!
//! REST API and Server-Sent Events gateway for a workforce-scheduling
//! system (shift scheduling, workspace/team management).
//!
//! The live-update path is the heart of this crate: backend state
//! changes are published on an in-process [`domain::EventBus`] and
//! streamed to web clients over SSE, scoped optionally to a workspace.
//! The client half ([`stream::StreamBridge`]) maintains a single
//! long-lived connection per subscription and dispatches inbound
//! messages to caller-supplied handlers by message type.
//!
//! The CRUD surface (users, roles, memberships) is a deliberate
//! placeholder: every route answers `501 { "error": "Not implemented" }`
//! until the backing services exist.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP, SSE)
//!     │
//!     ├── REST Handlers (api/)          — stub CRUD, health, catalog
//!     ├── SSE Endpoint (stream/handler) — /events/stream
//!     │
//!     ├── EventBus (domain/)            — broadcast of ScheduleEvents
//!     │
//!     └── StreamBridge (stream/bridge)  — client-side subscription
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod stream;
