// --- File: crates/services/commune_app/src/lib.rs ---
pub mod app_state;
pub mod commands;
#[cfg(test)]
mod commands_test;
pub mod render;
pub mod service_factory;
pub mod shell;

pub use app_state::AppState;
pub use commands::{Command, CommandError};
pub use service_factory::CommuneServiceFactory;
pub use shell::{execute, start, ShellOutput};
