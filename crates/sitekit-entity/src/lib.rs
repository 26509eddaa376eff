//! # sitekit-entity
//!
//! Domain entity models for Sitekit. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.
//!
//! Structured JSON columns (`metadata`, `features`, `technologies`, …)
//! are typed values here; (de)serialization to the underlying JSONB
//! column happens inside the sqlx adapter, never in handlers.

pub(crate) fn default_true() -> bool {
    true
}

pub mod blog;
pub mod content;
pub mod course;
pub mod project;
pub mod registration;
pub mod session;
pub mod submission;
pub mod team;
pub mod user;
