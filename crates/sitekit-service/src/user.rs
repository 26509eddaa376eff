//! Admin user management: provisioning, role changes, password resets.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use sitekit_auth::password::{PasswordHasher, PasswordValidator};
use sitekit_core::error::AppError;
use sitekit_core::result::AppResult;
use sitekit_core::types::pagination::{PageRequest, PageResponse};
use sitekit_database::repositories::user::UserRepository;
use sitekit_entity::user::model::CreateUser;
use sitekit_entity::user::{User, UserRole};

/// Handles admin-side user management.
#[derive(Debug, Clone)]
pub struct UserService {
    users: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
}

impl UserService {
    /// Creates a new user service.
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

    /// Lists users (admin view).
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<User>> {
        self.users.list(page).await
    }

    /// Provisions an account with an explicit role.
    pub async fn provision(
        &self,
        email: &str,
        password: &str,
        display_name: Option<String>,
        role: UserRole,
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
                role,
            })
            .await?;

        info!(user_id = %user.id, role = %role, "User provisioned");
        Ok(user)
    }

    /// Changes a user's role.
    pub async fn change_role(&self, id: Uuid, role: UserRole) -> AppResult<User> {
        let user = self
            .users
            .update_role(id, role)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        info!(user_id = %id, role = %role, "Role changed");
        Ok(user)
    }

    /// Resets a user's password.
    pub async fn reset_password(&self, id: Uuid, new_password: &str) -> AppResult<()> {
        self.validator.validate(new_password)?;

        if self.users.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found("User not found"));
        }

        let hash = self.hasher.hash_password(new_password)?;
        self.users.update_password(id, &hash).await?;

        info!(user_id = %id, "Password reset");
        Ok(())
    }
}
