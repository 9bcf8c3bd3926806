// --- File: crates/services/commune_app/src/commands.rs ---
//! One line of terminal input, parsed.

use commune_calendar::CalendarDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for a list.")]
    Unknown(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Login { email: String, password: String },
    Signup {
        full_name: String,
        email: String,
        password: String,
        confirm_password: String,
    },
    Logout,
    Next,
    Prev,
    /// Simulated drag: horizontal displacement and release velocity.
    Swipe { dx: f64, vx: f64 },
    /// Day of the visible week, 0 for Sunday through 6 for Saturday.
    Select(u32),
    Picker,
    PickerNext,
    PickerPrev,
    Pick(CalendarDate),
    Done,
    Profile,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  login <email> <password>          sign in
  signup <email> <password> <confirm> <full name...>
  logout                            sign out
  next | prev                       move one week
  swipe <dx> <vx>                   drag the week strip (px, px/ms)
  select <0-6>                      pick a day in the visible week
  picker                            open the month picker
  month+ | month-                   page the month picker
  pick <YYYY-MM-DD>                 choose a day in the picker
  done                              close the picker
  profile                           show the signed-in profile
  quit                              exit";

impl Command {
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match (head.to_lowercase().as_str(), args.as_slice()) {
            ("login", [email, password]) => Command::Login {
                email: email.to_string(),
                password: password.to_string(),
            },
            ("login", _) => return Err(CommandError::Usage("login <email> <password>")),
            ("signup", [email, password, confirm, name @ ..]) => Command::Signup {
                full_name: name.join(" "),
                email: email.to_string(),
                password: password.to_string(),
                confirm_password: confirm.to_string(),
            },
            ("signup", _) => {
                return Err(CommandError::Usage(
                    "signup <email> <password> <confirm> <full name...>",
                ))
            }
            ("logout", []) => Command::Logout,
            ("next", []) => Command::Next,
            ("prev", []) => Command::Prev,
            ("swipe", [dx, vx]) => match (dx.parse(), vx.parse()) {
                (Ok(dx), Ok(vx)) => Command::Swipe { dx, vx },
                _ => return Err(CommandError::Usage("swipe <dx> <vx>")),
            },
            ("swipe", _) => return Err(CommandError::Usage("swipe <dx> <vx>")),
            ("select", [index]) => match index.parse::<u32>() {
                Ok(index) if index < 7 => Command::Select(index),
                _ => return Err(CommandError::Usage("select <0-6>")),
            },
            ("select", _) => return Err(CommandError::Usage("select <0-6>")),
            ("picker", []) => Command::Picker,
            ("month+", []) => Command::PickerNext,
            ("month-", []) => Command::PickerPrev,
            ("pick", [key]) => match CalendarDate::parse_iso(key) {
                Ok(date) => Command::Pick(date),
                Err(_) => return Err(CommandError::Usage("pick <YYYY-MM-DD>")),
            },
            ("pick", _) => return Err(CommandError::Usage("pick <YYYY-MM-DD>")),
            ("done", []) => Command::Done,
            ("profile", []) => Command::Profile,
            ("help", _) | ("?", _) => Command::Help,
            ("quit", _) | ("exit", _) => Command::Quit,
            _ => return Err(CommandError::Unknown(head.to_string())),
        };
        Ok(Some(command))
    }
}
