//! Server Module
//!
//! Configuration, application state, and startup assembly.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports and documentation
//! ├── config.rs - Environment configuration (strict on required vars)
//! ├── state.rs  - AppState and FromRef sub-state extraction
//! └── init.rs   - Pool, migrations, stores, services, router assembly
//! ```

/// Environment configuration
pub mod config;

/// Application state
pub mod state;

/// Startup assembly
pub mod init;

pub use config::{Config, ConfigError};
pub use init::{create_app, StartupError};
pub use state::AppState;
