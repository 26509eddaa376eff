//! Token-scheme session entities.

pub mod model;

pub use model::{AuthSession, CreateAuthSession};
