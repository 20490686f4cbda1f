use crate::domain::ports::Transport;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// 開放平台 API 的預設網關。
pub const DEFAULT_BASE_URL: &str = "https://api.weixin.qq.com";

/// reqwest 實作的傳輸層。非 2xx 狀態一律視為傳輸錯誤。
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    client: Client,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            client: Client::new(),
        }
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: normalize_base_url(base_url),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn normalize_base_url(base_url: impl Into<String>) -> String {
    base_url.into().trim_end_matches('/').to_string()
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path_and_query: &str) -> Result<Vec<u8>> {
        let url = format!("{}{}", self.base_url, path_and_query);
        // 查詢字串可能帶 secret，日誌只記路徑
        let path = path_and_query.split('?').next().unwrap_or(path_and_query);

        tracing::debug!("Making API request to: {}{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;
        tracing::debug!("API response status: {}", response.status());

        let bytes = response.error_for_status()?.bytes().await?;
        Ok(bytes.to_vec())
    }

    async fn post(&self, path: &str, body: Vec<u8>, content_type: &str) -> Result<Vec<u8>> {
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!("Making API request to: {}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .header("Content-Type", content_type)
            .body(body)
            .send()
            .await?;
        tracing::debug!("API response status: {}", response.status());

        let bytes = response.error_for_status()?.bytes().await?;
        Ok(bytes.to_vec())
    }
}
