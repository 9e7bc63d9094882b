use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use crate::error::ErrorMessage;

const MAX_PASSWORD_LENGTH: usize = 64;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PasswordError {
    #[error("{}", ErrorMessage::EmptyPassword)]
    Empty,
    #[error("{}", ErrorMessage::ExceededMaxPasswordLength(MAX_PASSWORD_LENGTH))]
    TooLong,
    #[error("{}", ErrorMessage::HashingError)]
    Hashing,
    #[error("{}", ErrorMessage::InvalidHashFormat)]
    InvalidHashFormat,
}

pub fn hash(password: impl Into<String>) -> Result<String, PasswordError> {
    let password = password.into();
    if password.is_empty() {
        return Err(PasswordError::Empty);
    }
    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(PasswordError::TooLong);
    }
    let salt = SaltString::generate(&mut OsRng);
    let hashed = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| PasswordError::Hashing)?
        .to_string();
    Ok(hashed)
}

pub fn compare(password: &str, hashed_password: &str) -> Result<bool, PasswordError> {
    if password.is_empty() {
        return Err(PasswordError::Empty);
    }
    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(PasswordError::TooLong);
    }
    let parsed_hash = PasswordHash::new(hashed_password)
        .map_err(|_| PasswordError::InvalidHashFormat)?;
    let matches = Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok();
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_compare_accepts_matching_password() {
        let hashed = hash("correct horse").unwrap();
        assert!(compare("correct horse", &hashed).unwrap());
        assert!(!compare("wrong horse", &hashed).unwrap());
    }

    #[test]
    fn empty_password_is_rejected() {
        assert_eq!(hash(""), Err(PasswordError::Empty));
    }

    #[test]
    fn over_long_password_is_rejected() {
        let long = "a".repeat(MAX_PASSWORD_LENGTH + 1);
        assert_eq!(hash(long), Err(PasswordError::TooLong));
    }

    #[test]
    fn garbage_hash_is_an_error() {
        assert_eq!(compare("password", "not-a-phc-string"), Err(PasswordError::InvalidHashFormat));
    }
}
