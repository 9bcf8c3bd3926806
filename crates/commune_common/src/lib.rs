// --- File: crates/commune_common/src/lib.rs ---

pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Shared data structures
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{external_service_error, CommuneError, Context};

// Re-export HTTP utilities for easier access
pub use http::{
    check_status,
    client::{create_client, get_with_bearer},
    join_url, StatusFailure,
};

// Re-export logging utilities for easier access
pub use logging::{init_from_config, log_result};
