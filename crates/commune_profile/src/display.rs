// --- File: crates/commune_profile/src/display.rs ---
//! Name, email and initials shown on the profile screen.

use commune_common::models::{AuthUser, UserProfile};

const FALLBACK_NAME: &str = "User";

/// Profile header values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSummary {
    pub display_name: String,
    pub email: String,
    pub initials: String,
}

impl ProfileSummary {
    pub fn new(profile: Option<&UserProfile>, user: Option<&AuthUser>) -> Self {
        let display_name = display_name(profile, user);
        Self {
            initials: initials(&display_name),
            email: display_email(profile, user),
            display_name,
        }
    }
}

/// The profile's full name, else the session email's local part with each
/// dot-separated piece capitalized ("jane.doe@x" -> "Jane Doe"), else "User".
pub fn display_name(profile: Option<&UserProfile>, user: Option<&AuthUser>) -> String {
    if let Some(name) = profile.map(|p| p.full_name.trim()).filter(|n| !n.is_empty()) {
        return name.to_string();
    }

    let local_part = user
        .and_then(|u| u.email.as_deref())
        .and_then(|email| email.split('@').next())
        .unwrap_or_default();

    let name = local_part
        .split('.')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    if name.trim().is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        name
    }
}

/// Profile email, else the session email, else empty.
pub fn display_email(profile: Option<&UserProfile>, user: Option<&AuthUser>) -> String {
    profile
        .map(|p| p.email.as_str())
        .filter(|email| !email.is_empty())
        .or_else(|| user.and_then(|u| u.email.as_deref()))
        .unwrap_or_default()
        .to_string()
}

/// Upper-cased first letters of the first two space-separated words.
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
