//! Seating Server - table capacity and guest seating for events
//!
//! # Overview
//!
//! - **Seating engine** (`seating`): capacity checks, assignment, greedy
//!   auto-assign and circle auto-arrange
//! - **Store** (`db`): record access behind the `SeatingStore` trait
//! - **HTTP API** (`api`): admin routes plus the rate limited guest portal
//!
//! # Module layout
//!
//! ```text
//! seating-server/src/
//! ├── core/          # config, state, server, errors
//! ├── seating/       # seating engine and allocator
//! ├── db/            # store trait and in-memory store
//! ├── api/           # HTTP routes and handlers
//! ├── middleware/    # request logging, rate limiting
//! └── utils/         # logger, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod seating;
pub mod utils;

pub use core::{Config, Server, ServerState};
pub use seating::{SeatingEngine, SeatingError};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and initialize logging from the environment
pub fn setup_environment() -> Config {
    if let Err(e) = dotenv::dotenv()
        && !e.not_found()
    {
        eprintln!("Failed to read .env: {e}");
    }

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}

pub fn print_banner() {
    println!(
        r#"
   _____            __  _
  / ___/___  ____ _/ /_(_)___  ____ _
  \__ \/ _ \/ __ `/ __/ / __ \/ __ `/
 ___/ /  __/ /_/ / /_/ / / / / /_/ /
/____/\___/\__,_/\__/_/_/ /_/\__, /
                            /____/
    "#
    );
}
