//! Data Transfer Objects for REST request serialization.
//!
//! Request bodies are parsed (and therefore shape-validated) even on
//! stub endpoints, so the placeholder contract already rejects
//! malformed JSON the way the final implementation will.

pub mod membership_dto;
pub mod role_dto;
pub mod user_dto;

pub use membership_dto::*;
pub use role_dto::*;
pub use user_dto::*;
