use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct SignUpRequest {
    #[validate(length(
        min = 4,
        max = 50,
        message = "Name must be between 4 and 50 characters"
    ))]
    pub name: String,
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Email is invalid")
    )]
    pub email: String,
    #[validate(
        length(min = 6, message = "Password must be at least 6 characters")
    )]
    pub password: String,
    #[validate(
        length(min = 1, message = "Password Confirm is required"),
        must_match(other = "password", message="Password Confirm is not match")
    )]
    pub password_confirm: String,
}

#[derive(Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Email is invalid")
    )]
    pub email: String,
    #[validate(
        length(min = 6, message = "Password must be at least 6 characters")
    )]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_password_confirm_fails_validation() {
        let body = SignUpRequest {
            name: "Reader One".to_string(),
            email: "reader@example.com".to_string(),
            password: "secret-pass".to_string(),
            password_confirm: "other-pass".to_string(),
        };
        assert!(body.validate().is_err());
    }

    #[test]
    fn well_formed_sign_up_passes_validation() {
        let body = SignUpRequest {
            name: "Reader One".to_string(),
            email: "reader@example.com".to_string(),
            password: "secret-pass".to_string(),
            password_confirm: "secret-pass".to_string(),
        };
        assert!(body.validate().is_ok());
    }

    #[test]
    fn invalid_email_fails_validation() {
        let body = SignInRequest {
            email: "not-an-email".to_string(),
            password: "secret-pass".to_string(),
        };
        assert!(body.validate().is_err());
    }
}
