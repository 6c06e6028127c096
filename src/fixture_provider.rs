use anyhow::{Context, Result};
use tracing::log;

use crate::models_external::fixture::FixturesRsp;
use crate::{rest_client, LogResult, CONFIG};

/// Where fixture data comes from: the live api-football REST API, or a saved
/// response file on disk (develop mode). Chosen once at startup, so the rest
/// of the code never branches on the mode.
#[derive(Clone, Debug)]
pub enum FixtureProvider {
    Rest,
    File(String),
}

impl FixtureProvider {
    pub fn from_config() -> FixtureProvider {
        if CONFIG.develop_mode {
            log::info!("[PROVIDER] Develop mode, fixtures served from {}", CONFIG.mock_fixture_path);
            FixtureProvider::File(CONFIG.mock_fixture_path.clone())
        } else {
            FixtureProvider::Rest
        }
    }

    pub async fn fetch(&self, url: &str) -> Option<FixturesRsp> {
        match self {
            FixtureProvider::Rest => rest_client::get_call(url).await,
            FixtureProvider::File(path) => FixtureProvider::read_file(path).ok_log("[PROVIDER] Mock fixture failed"),
        }
    }

    fn read_file(path: &str) -> Result<FixturesRsp> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("unable to read mock fixture {path}"))?;
        serde_json::from_str(&data).with_context(|| format!("invalid mock fixture {path}"))
    }
}
