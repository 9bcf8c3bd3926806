#[cfg(test)]
mod tests {
    use crate::error::AuthError;
    use crate::validation::{is_valid_email, validate_login, validate_signup, SignupForm};

    fn message(err: AuthError) -> String {
        match err {
            AuthError::Validation(message) => message,
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    fn form() -> SignupForm {
        SignupForm {
            full_name: "  Jane Doe ".to_string(),
            email: " jane@box.fit ".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        }
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("jane@box.fit"));
        assert!(is_valid_email("jane.doe+wod@mail.box.fit"));
        assert!(!is_valid_email("jane@box"));
        assert!(!is_valid_email("jane box@fit.io"));
        assert!(!is_valid_email("@box.fit"));
        assert!(!is_valid_email("jane@@box.fit"));
    }

    #[test]
    fn test_login_trims_email_only() {
        let credentials = validate_login("  jane@box.fit ", " pass ").unwrap();
        assert_eq!(credentials.email, "jane@box.fit");
        assert_eq!(credentials.password, " pass ");
    }

    #[test]
    fn test_login_requires_both_fields() {
        assert_eq!(
            message(validate_login("", "secret").unwrap_err()),
            "Please enter both email and password"
        );
        assert_eq!(
            message(validate_login("jane@box.fit", "   ").unwrap_err()),
            "Please enter both email and password"
        );
    }

    #[test]
    fn test_login_rejects_malformed_email() {
        assert_eq!(
            message(validate_login("jane", "secret").unwrap_err()),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_signup_success_trims_name_and_email() {
        let request = validate_signup(&form()).unwrap();
        assert_eq!(request.full_name, "Jane Doe");
        assert_eq!(request.email, "jane@box.fit");
        assert_eq!(request.password, "secret1");
    }

    #[test]
    fn test_signup_messages_in_order() {
        let cases: Vec<(SignupForm, &str)> = vec![
            (
                SignupForm {
                    full_name: " ".to_string(),
                    email: String::new(),
                    ..form()
                },
                "Please enter your full name",
            ),
            (
                SignupForm {
                    email: String::new(),
                    ..form()
                },
                "Please enter your email",
            ),
            (
                SignupForm {
                    email: "jane@box".to_string(),
                    ..form()
                },
                "Please enter a valid email address",
            ),
            (
                SignupForm {
                    password: "  ".to_string(),
                    ..form()
                },
                "Please enter a password",
            ),
            (
                SignupForm {
                    password: "12345".to_string(),
                    confirm_password: "12345".to_string(),
                    ..form()
                },
                "Password must be at least 6 characters long",
            ),
            (
                SignupForm {
                    confirm_password: "secret2".to_string(),
                    ..form()
                },
                "Passwords do not match",
            ),
        ];

        for (input, expected) in cases {
            assert_eq!(message(validate_signup(&input).unwrap_err()), expected);
        }
    }
}
