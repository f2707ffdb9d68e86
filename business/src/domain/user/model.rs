use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::domain::errors::ValidationError;

/// A shop account. The password never leaves this module in clear text;
/// only its SHA-256 digest is stored.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_digest: String,
    pub is_admin: bool,
}

pub struct NewUserProps {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub is_admin: bool,
}

impl User {
    pub fn new(props: NewUserProps) -> Result<Self, ValidationError> {
        if props.first_name.trim().is_empty() {
            return Err(ValidationError::UserFirstNameEmpty);
        }
        if props.email.trim().is_empty() {
            return Err(ValidationError::UserEmailEmpty);
        }
        if props.password.is_empty() {
            return Err(ValidationError::UserPasswordEmpty);
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            first_name: props.first_name,
            last_name: props.last_name,
            email: props.email,
            password_digest: password_digest(&props.password),
            is_admin: props.is_admin,
        })
    }
}

/// Lowercase hex SHA-256 of the raw password.
pub fn password_digest(raw: &str) -> String {
    format!("{:x}", Sha256::digest(raw.as_bytes()))
}
