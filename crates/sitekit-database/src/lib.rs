//! # sitekit-database
//!
//! PostgreSQL persistence for Sitekit: pool construction, migration
//! runner, and one repository per entity. Repositories hold a cloned
//! `PgPool` handle; the pool itself is constructed once at startup and
//! passed down explicitly.

pub mod connection;
pub mod migration;
pub mod repositories;
