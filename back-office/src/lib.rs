//! Back-office server - zone management for the shop catalog
//!
//! # Module layout
//!
//! ```text
//! back-office/src/
//! ├── core/          # config, state, server lifecycle errors
//! ├── api/           # HTTP routes and handlers
//! ├── middleware/    # request logging
//! ├── zones/         # zone commands, queries and handlers
//! ├── db/            # SQLite pool and repositories
//! └── utils/         # logger, field validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod utils;
pub mod zones;

pub use core::{Config, Server, ServerState};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use utils::logger::{init_logger, init_logger_with_file};
pub use zones::{AddZoneCommand, AddZoneHandler, CommandHandler, ZoneError, ZoneId};

/// Load `.env`, create the work dir and start logging
///
/// Must run before anything logs.
pub fn setup_environment() -> anyhow::Result<Config> {
    // Missing .env is fine
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)?;

    init_logger_with_file(
        Some(&config.log_level),
        Some(config.log_json),
        Some(log_dir.as_path()),
    );

    Ok(config)
}
