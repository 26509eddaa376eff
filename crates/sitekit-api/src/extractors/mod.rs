//! Custom Axum extractors.

pub mod pagination;
pub mod session;

pub use pagination::PaginationParams;
pub use session::{AdminUser, CurrentUser};
