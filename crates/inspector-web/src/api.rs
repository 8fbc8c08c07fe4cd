use gloo_net::http::{Request, Response};
use inspector_core::config::DEFAULT_API_BASE;
use inspector_core::{Comparison, InspectorError, NewComparison, Result};
use serde::de::DeserializeOwned;

/// Comparison service base URL, fixed at build time
pub const API_BASE: &str = match option_env!("INSPECTOR_API_BASE") {
    Some(base) => base,
    None => DEFAULT_API_BASE,
};

pub fn comparisons_url(base: &str) -> String {
    format!("{}/api/comparisons/", base.trim_end_matches('/'))
}

pub async fn create_comparison(request: NewComparison) -> Result<Comparison> {
    let resp = Request::post(&comparisons_url(API_BASE))
        .json(&request)
        .map_err(|e| InspectorError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| InspectorError::Transport(e.to_string()))?;
    read_json(resp).await
}

pub async fn fetch_comparisons() -> Result<Vec<Comparison>> {
    let resp = Request::get(&comparisons_url(API_BASE))
        .send()
        .await
        .map_err(|e| InspectorError::Transport(e.to_string()))?;
    read_json(resp).await
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T> {
    if !resp.ok() {
        return Err(InspectorError::from_status(resp.status(), &resp.status_text()));
    }
    resp.json()
        .await
        .map_err(|e| InspectorError::Decode(e.to_string()))
}
