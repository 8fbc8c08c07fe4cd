use async_trait::async_trait;
use inspector_core::format::truncate;
use inspector_core::{
    Comparison, ComparisonId, ComparisonService, InspectorError, NewComparison, Result,
};
use serde::de::DeserializeOwned;

const COMPARISONS_PATH: &str = "/api/comparisons/";

/// `ComparisonService` over HTTP, rooted at a single configured base URL
#[derive(Debug, Clone)]
pub struct HttpComparisonClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpComparisonClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn comparisons_url(&self) -> String {
        format!("{}{}", self.base_url, COMPARISONS_PATH)
    }

    fn comparison_url(&self, id: ComparisonId) -> String {
        format!("{}{}{}", self.base_url, COMPARISONS_PATH, id)
    }

    /// Check the service answers at all
    pub async fn ping(&self) -> Result<()> {
        let resp = self
            .client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .map_err(transport)?;
        check_status(&resp)?;
        Ok(())
    }
}

#[async_trait]
impl ComparisonService for HttpComparisonClient {
    async fn create(&self, request: &NewComparison) -> Result<Comparison> {
        let url = self.comparisons_url();
        tracing::debug!("POST {}", url);
        let resp = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }

    async fn list(&self) -> Result<Vec<Comparison>> {
        let url = self.comparisons_url();
        tracing::debug!("GET {}", url);
        let resp = self.client.get(&url).send().await.map_err(transport)?;
        read_json(resp).await
    }

    async fn get(&self, id: ComparisonId) -> Result<Comparison> {
        let url = self.comparison_url(id);
        tracing::debug!("GET {}", url);
        let resp = self.client.get(&url).send().await.map_err(transport)?;
        read_json(resp).await
    }
}

fn transport(e: reqwest::Error) -> InspectorError {
    InspectorError::Transport(e.to_string())
}

fn check_status(resp: &reqwest::Response) -> Result<()> {
    let status = resp.status();
    if status.is_success() {
        return Ok(());
    }
    Err(InspectorError::from_status(
        status.as_u16(),
        status.canonical_reason().unwrap_or_default(),
    ))
}

async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
    check_status(&resp)?;
    let body = resp.text().await.map_err(transport)?;
    serde_json::from_str(&body).map_err(|e| {
        InspectorError::Decode(format!("{} - Body: {}", e, truncate(&body, 500)))
    })
}
