use std::time::Instant;

use serde::de::DeserializeOwned;
use tracing::log;

use crate::{LogResult, CONFIG};

pub fn get_fixture_url(fixture_id: u32) -> String {
    format!("{}/fixtures?id={}", CONFIG.football_url, fixture_id)
}

pub fn get_fixtures_by_date_url(date: &str) -> String {
    format!("{}/fixtures?date={}", CONFIG.football_url, date)
}

/// api-sports authenticates via request headers, not the url.
pub async fn get_call<T: DeserializeOwned>(url: &str) -> Option<T> {
    let before = Instant::now();
    let host = reqwest::Url::parse(url).ok()
        .and_then(|e| e.host_str().map(|h| h.to_string()))
        .unwrap_or_default();
    let rsp = reqwest::Client::new()
        .get(url)
        .header("x-rapidapi-key", CONFIG.football_api_key.as_str())
        .header("x-rapidapi-host", host)
        .send()
        .await
        .ok_log("[REST] Call failed")?;
    let body = rsp.text().await.ok_log("[REST] Read body failed")?;
    if CONFIG.save_raw_response {
        _ = std::fs::write("api_football_response.json", &body).ok_log("[REST] Save raw response failed");
    }
    let res = serde_json::from_str(&body).ok_log("[REST] Parse failed");
    log::info!("[REST] Call {url} {:.2?}", before.elapsed());
    res
}
