use crate::domain::model::Receipt;
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ReceiptStore: Send + Sync {
    async fn submit(&self, receipt: Receipt) -> Result<String>;
    async fn get_points(&self, id: &str) -> Result<i64>;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> &str;
    fn port(&self) -> u16;

    fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_address(), self.port())
    }
}
