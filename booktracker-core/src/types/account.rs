//! Account form payloads

use serde::Serialize;
use std::fmt;
use validator::{Validate, ValidationError};

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Credentials posted by the login form
#[derive(Clone, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(custom = "not_blank")]
    pub username: String,

    #[validate(custom = "not_blank")]
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Fields posted by the registration form
#[derive(Clone, Serialize, Validate)]
pub struct RegisterRequest {
    #[validate(custom = "not_blank")]
    pub username: String,

    #[validate(email)]
    pub email: String,

    #[validate(custom = "not_blank")]
    pub password: String,
}

impl RegisterRequest {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

// Passwords never reach logs.
impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_validation() {
        assert!(LoginRequest::new("alice", "secret").validate().is_ok());
        assert!(LoginRequest::new("  ", "secret").validate().is_err());
        assert!(LoginRequest::new("alice", "").validate().is_err());
    }

    #[test]
    fn test_register_validation() {
        assert!(RegisterRequest::new("bob", "bob@example.com", "pw")
            .validate()
            .is_ok());
        let errors = RegisterRequest::new("bob", "not-an-email", "pw")
            .validate()
            .unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let debug = format!("{:?}", LoginRequest::new("alice", "hunter2"));
        assert!(debug.contains("alice"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(RegisterRequest::new("bob", "b@x.io", "pw")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"username": "bob", "email": "b@x.io", "password": "pw"})
        );
    }
}
