use crate::utils::error::Result;
use async_trait::async_trait;

/// 底層 HTTP 傳輸介面。逾時、連線池、憑證刷新都屬於實作方，不屬於綁定層。
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path_and_query: &str) -> Result<Vec<u8>>;
    async fn post(&self, path: &str, body: Vec<u8>, content_type: &str) -> Result<Vec<u8>>;
}
