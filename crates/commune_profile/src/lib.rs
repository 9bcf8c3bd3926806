// --- File: crates/commune_profile/src/lib.rs ---
// Declare modules within this crate
pub mod client;
pub mod display;
pub mod error;

pub use client::ProfileClient;
pub use display::{display_email, display_name, initials, ProfileSummary};
pub use error::ProfileError;
