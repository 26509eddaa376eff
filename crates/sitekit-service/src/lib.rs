//! # sitekit-service
//!
//! Domain services for Sitekit. Each service wires its repositories to
//! the read-through cache and the tag invalidation bus: public reads are
//! served from cache when possible, and every successful mutation
//! invalidates the affected tags before returning.

pub mod account;
pub mod blog;
pub mod catalog;
pub mod content;
pub mod portfolio;
pub mod registration;
pub mod submission;
pub mod team;
pub mod upload;
pub mod user;

pub use account::AccountService;
pub use blog::BlogService;
pub use catalog::CatalogService;
pub use content::ContentService;
pub use portfolio::PortfolioService;
pub use registration::RegistrationService;
pub use submission::SubmissionService;
pub use team::TeamService;
pub use upload::UploadStore;
pub use user::UserService;
