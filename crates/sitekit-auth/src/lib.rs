//! # sitekit-auth
//!
//! Authentication and authorization for Sitekit.
//!
//! ## Modules
//!
//! - `password` — Argon2id password hashing and policy enforcement
//! - `session` — the two cookie session schemes (legacy id-cookie and
//!   DB-backed token) unified behind [`session::SessionResolver`]
//! - `gate` — the authorization gate used by every privileged handler

pub mod gate;
pub mod password;
pub mod session;

pub use password::{PasswordHasher, PasswordValidator};
pub use session::{
    LegacySessionManager, SessionResolver, SessionResolverDispatch, SessionScheme, SessionUser,
    TokenSessionManager,
};
