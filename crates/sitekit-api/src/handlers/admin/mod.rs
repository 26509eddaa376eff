//! Admin-only handlers that are not entity CRUD.

pub mod revalidate;
pub mod users;
