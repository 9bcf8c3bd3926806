#[cfg(test)]
mod tests {
    use crate::commands::{Command, CommandError};
    use commune_calendar::CalendarDate;

    #[test]
    fn test_blank_line_is_no_command() {
        assert_eq!(Command::parse("   "), Ok(None));
    }

    #[test]
    fn test_parse_login_and_signup() {
        assert_eq!(
            Command::parse("login jane@box.fit secret1"),
            Ok(Some(Command::Login {
                email: "jane@box.fit".to_string(),
                password: "secret1".to_string(),
            }))
        );
        assert_eq!(
            Command::parse("signup sam@box.fit pw1234 pw1234 Sam  Lee"),
            Ok(Some(Command::Signup {
                full_name: "Sam Lee".to_string(),
                email: "sam@box.fit".to_string(),
                password: "pw1234".to_string(),
                confirm_password: "pw1234".to_string(),
            }))
        );
        assert!(matches!(
            Command::parse("login jane@box.fit"),
            Err(CommandError::Usage(_))
        ));
    }

    #[test]
    fn test_parse_navigation() {
        assert_eq!(Command::parse("NEXT"), Ok(Some(Command::Next)));
        assert_eq!(Command::parse("prev"), Ok(Some(Command::Prev)));
        assert_eq!(
            Command::parse("swipe -60 -0.2"),
            Ok(Some(Command::Swipe { dx: -60.0, vx: -0.2 }))
        );
        assert_eq!(Command::parse("select 6"), Ok(Some(Command::Select(6))));
        assert!(Command::parse("select 7").is_err());
        assert!(Command::parse("swipe left fast").is_err());
    }

    #[test]
    fn test_parse_picker() {
        assert_eq!(Command::parse("picker"), Ok(Some(Command::Picker)));
        assert_eq!(Command::parse("month+"), Ok(Some(Command::PickerNext)));
        assert_eq!(
            Command::parse("pick 2024-05-22"),
            Ok(Some(Command::Pick(
                CalendarDate::from_ymd(2024, 5, 22).unwrap()
            )))
        );
        assert_eq!(
            Command::parse("pick 22.05.2024"),
            Err(CommandError::Usage("pick <YYYY-MM-DD>"))
        );
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            Command::parse("dance now"),
            Err(CommandError::Unknown("dance".to_string()))
        );
    }
}
