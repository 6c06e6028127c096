use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    pub port: u16,

    pub football_url: String,
    pub football_api_key: String,

    pub match_id: u32,
    pub polla_id: String,

    #[serde(default = "default_db_path")]
    pub db_path: String,

    #[serde(default = "default_false")]
    pub develop_mode: bool,

    #[serde(default = "default_mock_fixture_path")]
    pub mock_fixture_path: String,

    #[serde(default = "default_false")]
    pub save_raw_response: bool,

    #[serde(default = "default_results_cache_s")]
    pub results_cache_s: u64,

    #[serde(default = "default_info_cache_s")]
    pub info_cache_s: u64,
}

fn default_db_path() -> String {
    "./db".to_string()
}

fn default_mock_fixture_path() -> String {
    "./ejemplo_api_football.json".to_string()
}

fn default_false() -> bool {
    false
}

fn default_results_cache_s() -> u64 {
    60 * 5
}

fn default_info_cache_s() -> u64 {
    60 * 60 * 24
}

pub fn get_config() -> Config {
    let path = std::env::var("CONFIG_PATH").ok()
        .unwrap_or_else(|| "./deployment/config.json".to_string());
    let data = fs::read_to_string(path.clone())
        .expect("Unable to read file");
    let mut result: Config = serde_json::from_str(&data)
        .unwrap_or_else(|_| panic!("{}", &format!("Could not parse JSON at {path}!")));
    if let Ok(db_path) = std::env::var("DB_PATH") {
        result.db_path = db_path;
        println!("[CONFIG] DB_PATH {}", result.db_path);
    }
    if let Ok(api_key) = std::env::var("FOOTBALL_API_KEY") {
        result.football_api_key = api_key;
    }
    if let Ok(match_id) = std::env::var("MATCH_ID") {
        result.match_id = match_id.parse()
            .unwrap_or_else(|_| panic!("{}", &format!("MATCH_ID must be a number, got {match_id}")));
    }
    if let Ok(polla_id) = std::env::var("ID_POLLA") {
        result.polla_id = polla_id;
    }
    if let Ok(develop_mode) = std::env::var("DEVELOP_MODE") {
        result.develop_mode = develop_mode.eq_ignore_ascii_case("true");
    }
    if let Ok(save_json) = std::env::var("SAVE_JSON") {
        result.save_raw_response = save_json.eq_ignore_ascii_case("true");
    }
    println!("[CONFIG] {:?}", result);
    result
}
