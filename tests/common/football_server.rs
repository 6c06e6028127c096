use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use polla_server_rs::models_external::fixture::{
    Fixture, FixtureData, FixtureStatus, FixturesRsp, Goals, LeagueInfo, Score, Team, Teams, Venue,
};
use serde::Deserialize;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

#[derive(Deserialize)]
struct FixturesQuery {
    id: Option<u32>,
    date: Option<String>,
}

type SafeFixtures = Arc<RwLock<HashMap<u32, FixtureData>>>;

/// Mock api-football: serves whatever fixtures the test puts in.
pub struct FootballServer {
    port: u16,
    handle: Option<JoinHandle<()>>,
    fixtures: SafeFixtures,
}

impl Drop for FootballServer {
    fn drop(&mut self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }
}

impl FootballServer {
    pub fn new(port: u16) -> FootballServer {
        FootballServer { port, handle: None, fixtures: Arc::new(RwLock::new(HashMap::new())) }
    }

    pub async fn start(&mut self) {
        let state = self.fixtures.clone();
        let port = self.port;
        self.handle = Some(tokio::spawn(async move { FootballServer::serve(state, port).await }));
        tokio::time::sleep(Duration::from_millis(500)).await; // wait for mock to start
    }

    pub fn get_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    pub async fn put_fixture(&self, fixture: FixtureData) {
        self.fixtures.write().await.insert(fixture.fixture.id, fixture);
    }

    pub async fn clear(&self) {
        self.fixtures.write().await.clear();
    }

    async fn serve(state: SafeFixtures, port: u16) {
        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let app = Router::new()
            .route("/fixtures", axum::routing::get(FootballServer::get_fixtures))
            .with_state(state);
        axum::Server::bind(&addr)
            .serve(app.into_make_service())
            .await
            .unwrap();
    }

    async fn get_fixtures(State(state): State<SafeFixtures>, Query(query): Query<FixturesQuery>) -> Json<FixturesRsp> {
        let fixtures = state.read().await;
        let response = match query.id {
            Some(id) => fixtures.get(&id).cloned().into_iter().collect(),
            None if query.date.is_some() => fixtures.values().cloned().collect(),
            None => vec![],
        };
        Json(FixturesRsp { response })
    }
}

pub fn fixture(
    id: u32,
    home: &str,
    away: &str,
    kickoff: DateTime<Utc>,
    status: (&str, &str),
    goals: (i16, i16),
    halftime: (i16, i16),
) -> FixtureData {
    FixtureData {
        fixture: Fixture {
            id,
            date: kickoff,
            status: FixtureStatus { long: status.1.to_string(), short: status.0.to_string(), elapsed: None, extra: None },
            venue: Venue { name: Some("El Campín".to_string()), city: Some("Bogotá".to_string()) },
        },
        league: LeagueInfo { id: 239, name: "Primera A".to_string(), logo: Some("https://media.example/league.png".to_string()) },
        teams: Teams {
            home: Team { id: 1, name: home.to_string(), logo: Some(format!("https://media.example/{id}-home.png")) },
            away: Team { id: 2, name: away.to_string(), logo: Some(format!("https://media.example/{id}-away.png")) },
        },
        goals: Goals { home: Some(goals.0), away: Some(goals.1) },
        score: Score {
            halftime: Goals { home: Some(halftime.0), away: Some(halftime.1) },
            fulltime: Goals { home: Some(goals.0), away: Some(goals.1) },
        },
    }
}

/// A fixture that has not started: NS status, null goal counts.
pub fn pending_fixture(id: u32, home: &str, away: &str, kickoff: DateTime<Utc>) -> FixtureData {
    let mut result = fixture(id, home, away, kickoff, ("NS", "Not Started"), (0, 0), (0, 0));
    result.goals = Goals::default();
    result.score = Score::default();
    result
}
