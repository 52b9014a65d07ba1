use super::{ValidationErrors, min_chars};
use serde::Serialize;

pub const USERNAME_MIN_CHARS: usize = 2;
pub const PASSWORD_MIN_CHARS: usize = 8;

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// What gets echoed back after a successful submission.
#[derive(Debug, Serialize)]
pub struct SubmittedLogin {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<SubmittedLogin, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        min_chars(
            &mut errors,
            "username",
            &self.username,
            USERNAME_MIN_CHARS,
            "Username must be at least 2 characters.",
        );
        min_chars(
            &mut errors,
            "password",
            &self.password,
            PASSWORD_MIN_CHARS,
            "Password must be at least 8 characters.",
        );

        errors.into_result(SubmittedLogin {
            username: self.username.clone(),
            password: "*".repeat(self.password.chars().count()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_login_masks_password() {
        let form = LoginForm {
            username: "maria".into(),
            password: "s3cret-pass".into(),
        };
        let echoed = form.validate().unwrap();
        assert_eq!(echoed.username, "maria");
        assert_eq!(echoed.password, "***********");
    }

    #[test]
    fn both_fields_checked() {
        let form = LoginForm {
            username: "m".into(),
            password: "short".into(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.for_field("username"),
            Some("Username must be at least 2 characters.")
        );
        assert_eq!(
            errors.for_field("password"),
            Some("Password must be at least 8 characters.")
        );
    }

    #[test]
    fn eight_character_password_is_enough() {
        let form = LoginForm {
            username: "mo".into(),
            password: "12345678".into(),
        };
        assert!(form.validate().is_ok());
    }
}
