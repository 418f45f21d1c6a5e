//! Silver Spoon server
//!
//! Backend for the Silver Spoon restaurant site: the menu and table
//! reservations over a JSON API, backed by MongoDB, plus the compiled
//! front-end bundle.
//!
//! # Module layout
//!
//! ```text
//! spoon-server/src/
//! ├── core/     # config, state, server, startup errors
//! ├── db/       # MongoDB documents, repositories, in-memory store
//! ├── seed/     # boot-time menu catalog
//! ├── api/      # HTTP routes and handlers
//! └── utils/    # logging, input validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod seed;
pub mod utils;

pub use self::core::{Config, Server, ServerError, ServerState};
pub use db::{MemoryStore, MongoStore, Store};
pub use seed::{SeedOutcome, seed_menu};
pub use utils::{AppError, AppResult};

pub use utils::logger::{init_logger, init_logger_with_file};
