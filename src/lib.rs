pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod presentation;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{ApiClient, BankingApi, PoolingApi, RouteApi};
pub use app::session::{BankingSession, PoolingSession, RoutesSession};
pub use config::ClientConfig;
pub use utils::error::{ConsoleError, Result};
