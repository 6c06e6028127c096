use std::process::{Child, Command};

use assert_cmd::prelude::CommandCargoExt;
use polla_server_rs::config_handler::Config;
use polla_server_rs::models_api::participant::{CreateParticipant, UpdateParticipant};
use reqwest::Response;

pub const TEST_POLLA: &str = "polla_test";

pub struct PollaServer {
    port: u16,
    child_process: Option<Child>,
}

impl Drop for PollaServer {
    fn drop(&mut self) {
        if self.child_process.is_some() {
            self.child_process.as_mut().unwrap().kill()
                .expect("Should kill");
        }
    }
}

impl PollaServer {
    pub fn new(port: u16) -> PollaServer {
        PollaServer { port, child_process: None }
    }

    pub fn start(&mut self, path: &str, football_url: &str, match_id: u32) {
        let config = Config {
            port: self.port,
            football_url: football_url.to_string(),
            football_api_key: "API_KEY".to_string(),
            match_id,
            polla_id: TEST_POLLA.to_string(),
            db_path: format!("{}/db", path),
            // no caching, the tests mutate the mock fixture between calls
            results_cache_s: 0,
            info_cache_s: 0,
            ..Default::default()
        };

        let config_str = serde_json::to_string(&config).unwrap();
        let config_path = format!("{path}/config.json");
        std::fs::write(config_path.clone(), config_str).unwrap();
        let child_process = Command::cargo_bin("polla-server-rs")
            .unwrap()
            .env("CONFIG_PATH", config_path)
            .spawn()
            .expect("should start");

        self.child_process = Some(child_process);
    }

    pub async fn wait_until_ready(&self) {
        let mut nr_loops = 0;
        loop {
            if reqwest::get(format!("http://localhost:{}/", self.port)).await.is_ok() {
                return;
            }
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
            nr_loops += 1;
            if nr_loops > 100 {
                panic!("server never became ready");
            }
        }
    }

    pub async fn get_resultados(&self) -> Result<Response, Box<dyn std::error::Error>> {
        Ok(reqwest::get(format!("http://localhost:{}/resultados", self.port)).await?)
    }

    pub async fn get_partido_info(&self) -> Result<Response, Box<dyn std::error::Error>> {
        Ok(reqwest::get(format!("http://localhost:{}/partido-info", self.port)).await?)
    }

    pub async fn get_participantes(&self) -> Result<Response, Box<dyn std::error::Error>> {
        Ok(reqwest::get(format!("http://localhost:{}/participantes", self.port)).await?)
    }

    pub async fn find_participante(&self, params: &[(&str, &str)]) -> Result<Response, Box<dyn std::error::Error>> {
        Ok(reqwest::Client::new()
            .get(format!("http://localhost:{}/buscar-participante", self.port))
            .query(params)
            .send()
            .await?)
    }

    pub async fn create_participante(&self, body: &CreateParticipant) -> Result<Response, Box<dyn std::error::Error>> {
        Ok(reqwest::Client::new()
            .post(format!("http://localhost:{}/crear-participante", self.port))
            .json(body)
            .send()
            .await?)
    }

    pub async fn update_participante(&self, body: &UpdateParticipant) -> Result<Response, Box<dyn std::error::Error>> {
        Ok(reqwest::Client::new()
            .put(format!("http://localhost:{}/actualizar-participante", self.port))
            .json(body)
            .send()
            .await?)
    }

    pub async fn find_partido(&self, params: &[(&str, &str)]) -> Result<Response, Box<dyn std::error::Error>> {
        Ok(reqwest::Client::new()
            .get(format!("http://localhost:{}/buscar-partido", self.port))
            .query(params)
            .send()
            .await?)
    }
}
