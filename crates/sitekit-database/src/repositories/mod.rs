//! Entity repositories.
//!
//! One repository struct per table. Each holds a cloned `PgPool` and maps
//! driver errors into [`sitekit_core::AppError`], translating known
//! constraint violations into `Conflict`/`Validation` kinds.

pub mod blog;
pub mod content_card;
pub mod content_list;
pub mod course;
pub mod project;
pub mod registration;
pub mod schedule;
pub mod session;
pub mod submission;
pub mod team;
pub mod user;

pub use blog::BlogPostRepository;
pub use content_card::ContentCardRepository;
pub use content_list::ContentListRepository;
pub use course::CourseRepository;
pub use project::ProjectRepository;
pub use registration::RegistrationRepository;
pub use schedule::ScheduleRepository;
pub use session::AuthSessionRepository;
pub use submission::SubmissionRepository;
pub use team::TeamMemberRepository;
pub use user::UserRepository;
