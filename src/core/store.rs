use crate::core::{scoring, Receipt, ReceiptStore, Result, ScoreRecord};
use crate::utils::error::ServiceError;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Process-lifetime receipt storage. Records are created on submission and
/// never mutated or evicted.
#[derive(Default)]
pub struct InMemoryStore {
    records: RwLock<HashMap<String, ScoreRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ReceiptStore for InMemoryStore {
    async fn submit(&self, receipt: Receipt) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        let points = scoring::score(&receipt);

        let mut records = self.records.write().await;
        records.insert(id.clone(), ScoreRecord { receipt, points });

        Ok(id)
    }

    async fn get_points(&self, id: &str) -> Result<i64> {
        let records = self.records.read().await;
        records
            .get(id)
            .map(|record| record.points)
            .ok_or(ServiceError::ReceiptNotFound)
    }
}
