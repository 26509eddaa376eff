//! Password policy enforcement for new passwords.

use sitekit_core::config::auth::AuthConfig;
use sitekit_core::error::AppError;

/// Validates password strength against configured policies.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length as usize,
        }
    }

    /// Validates a password against all configured policies.
    ///
    /// Returns `Ok(())` if the password meets all requirements,
    /// or an error describing the first violation found.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.len() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        // Entropy check via zxcvbn
        let estimate = zxcvbn::zxcvbn(password, &[]);
        if estimate.score() < zxcvbn::Score::Three {
            return Err(AppError::validation(
                "Password is too weak. Please use a longer or less predictable password.",
            ));
        }

        Ok(())
    }

    /// Validates that a new password differs from the old one.
    pub fn validate_not_same(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        if old_password == new_password {
            return Err(AppError::validation(
                "New password must be different from the current password",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> PasswordValidator {
        PasswordValidator::new(&AuthConfig::default())
    }

    #[test]
    fn test_rejects_short_passwords() {
        assert!(validator().validate("abc").is_err());
    }

    #[test]
    fn test_rejects_predictable_passwords() {
        assert!(validator().validate("password1").is_err());
    }

    #[test]
    fn test_accepts_strong_passwords() {
        assert!(validator().validate("mellow-gravel-onyx-42").is_ok());
    }

    #[test]
    fn test_rejects_unchanged_password() {
        assert!(validator().validate_not_same("same", "same").is_err());
        assert!(validator().validate_not_same("old", "new").is_ok());
    }
}
