//! JSON documents shaped like the JobZee backend's responses.
//!
//! Fixtures are plain `serde_json::Value`s so tests decode them through the same
//! code paths the client uses for live responses.
//!
//! - `user` - user documents for both roles
//! - `job` - job documents with fixed or ranged salaries
//! - `application` - application documents with resume and party references
//! - `envelope` - the `{ success, ... }` wrappers around the documents

pub mod application;
pub mod envelope;
pub mod job;
pub mod user;
