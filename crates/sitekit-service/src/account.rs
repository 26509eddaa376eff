//! Account self-service: signup and credential checks.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use sitekit_auth::password::{PasswordHasher, PasswordValidator};
use sitekit_core::error::AppError;
use sitekit_core::result::AppResult;
use sitekit_database::repositories::user::UserRepository;
use sitekit_entity::user::model::CreateUser;
use sitekit_entity::user::{User, UserRole};

/// Handles signup and credential verification.
#[derive(Debug, Clone)]
pub struct AccountService {
    users: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        users: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            users,
            hasher,
            validator,
        }
    }

    /// Registers a new account. Signups always get the `user` role;
    /// admins are provisioned separately.
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        display_name: Option<String>,
    ) -> AppResult<User> {
        if !email.contains('@') || !email.contains('.') {
            return Err(AppError::validation("Invalid email format"));
        }
        self.validator.validate(password)?;

        let password_hash = self.hasher.hash_password(password)?;
        let user = self
            .users
            .create(&CreateUser {
                email: email.to_string(),
                password_hash,
                display_name,
                role: UserRole::User,
            })
            .await?;

        info!(user_id = %user.id, "Account created");
        Ok(user)
    }

    /// Verifies credentials and returns the matching user.
    ///
    /// Unknown emails and wrong passwords produce the same error so the
    /// response does not reveal which half failed.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<User> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::unauthenticated("Invalid email or password"))?;

        let valid = self.hasher.verify_password(password, &user.password_hash)?;
        if !valid {
            return Err(AppError::unauthenticated("Invalid email or password"));
        }

        let _ = self.users.update_last_login(user.id, Utc::now()).await;
        Ok(user)
    }
}
