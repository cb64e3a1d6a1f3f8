pub mod config;
pub mod core;
pub mod domain;
pub mod http;
pub mod utils;

pub use self::config::{CliConfig, TomlConfig};
pub use self::core::store::InMemoryStore;
pub use self::domain::model::{Item, Receipt, ScoreRecord};
pub use self::domain::ports::{ConfigProvider, ReceiptStore};
pub use self::http::{build_router, AppState};
pub use self::utils::error::{Result, ServiceError};
