//! Blog domain entities.

pub mod model;

pub use model::{BlogPost, CreateBlogPost, UpdateBlogPost};
