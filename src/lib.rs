use std::fmt::Display;

use config_handler::Config;
use lazy_static::lazy_static;
use tracing::log;

pub mod api;
pub mod config_handler;
pub mod db;
pub mod fixture_provider;
pub mod match_service;
pub mod models;
pub mod models_api;
pub mod models_external;
pub mod participant_service;
pub mod registration_window;
pub mod rest_client;
pub mod scoring_service;

lazy_static! {
    pub static ref CONFIG: Config = config_handler::get_config();
}

pub trait LogResult<T, E: Display> {
    fn ok_log(self, msg: &str) -> Option<T>;
}

impl<T, E: Display> LogResult<T, E> for Result<T, E> {
    fn ok_log(self, msg: &str) -> Option<T> {
        match self {
            Ok(o) => Some(o),
            Err(e) => {
                log::error!("{}: {}", msg, e);
                None
            }
        }
    }
}
