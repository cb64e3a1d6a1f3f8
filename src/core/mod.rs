pub mod scoring;
pub mod store;

pub use crate::domain::model::{Item, Receipt, ScoreRecord};
pub use crate::domain::ports::{ConfigProvider, ReceiptStore};
pub use crate::utils::error::Result;
