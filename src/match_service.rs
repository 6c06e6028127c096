use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::db::Db;
use crate::fixture_provider::FixtureProvider;
use crate::models::Winner;
use crate::models_api::results::MatchResult;
use crate::models_external::fixture::{FixtureData, FixtureStatus, FixturesRsp, Venue};
use crate::{rest_client, CONFIG};

/// Everything the pool needs from one fixture.
pub struct MatchDetails {
    pub fixture_id: u32,
    pub home_team: String,
    pub away_team: String,
    pub home_logo: Option<String>,
    pub away_logo: Option<String>,
    pub league_logo: Option<String>,
    pub kickoff: DateTime<Utc>,
    pub venue: Venue,
    pub status: FixtureStatus,
    pub result: MatchResult,
}

impl From<&FixtureData> for MatchDetails {
    fn from(e: &FixtureData) -> Self {
        let goals_home = e.goals.home.unwrap_or(0);
        let goals_away = e.goals.away.unwrap_or(0);
        let halftime_home = e.score.halftime.home.unwrap_or(0);
        let halftime_away = e.score.halftime.away.unwrap_or(0);

        // goals accumulate, so the second half is whatever the halftime split leaves
        let second_half_home = goals_home - halftime_home;
        let second_half_away = goals_away - halftime_away;

        let winner = if e.fixture.status.is_pending() {
            Winner::Pending
        } else if goals_home > goals_away {
            Winner::Home
        } else if goals_home < goals_away {
            Winner::Away
        } else {
            Winner::Draw
        };

        MatchDetails {
            fixture_id: e.fixture.id,
            home_team: e.teams.home.name.clone(),
            away_team: e.teams.away.name.clone(),
            home_logo: e.teams.home.logo.clone(),
            away_logo: e.teams.away.logo.clone(),
            league_logo: e.league.logo.clone(),
            kickoff: e.fixture.date,
            venue: e.fixture.venue.clone(),
            status: e.fixture.status.clone(),
            result: MatchResult {
                final_score: format!("{goals_home}-{goals_away}"),
                first_half_score: format!("{halftime_home}-{halftime_away}"),
                second_half_score: format!("{second_half_home}-{second_half_away}"),
                winner,
            },
        }
    }
}

pub struct MatchService;

impl MatchService {
    /// `/resultados` tolerates a few minutes of staleness.
    pub fn results_throttle() -> Option<Duration> {
        Some(Duration::from_secs(CONFIG.results_cache_s))
    }

    /// Fixture metadata barely changes, `/partido-info` tolerates a day.
    pub fn info_throttle() -> Option<Duration> {
        Some(Duration::from_secs(CONFIG.info_cache_s))
    }

    /// Read-through cache keyed by the provider url: a stale copy triggers a
    /// refetch and overwrite, a failed refetch surfaces as None for this
    /// request only.
    pub async fn read_fixture(provider: &FixtureProvider, throttle: Option<Duration>) -> Option<FixtureData> {
        let url = rest_client::get_fixture_url(CONFIG.match_id);
        let db = Db::<String, FixturesRsp>::new("fixtures");

        let rsp = if db.is_stale(&url, throttle) {
            if let Some(rsp) = provider.fetch(&url).await {
                _ = db.write(&url, &rsp);
                Some(rsp)
            } else {
                None
            }
        } else {
            db.read(&url)
        };

        rsp.and_then(|mut e| {
            if e.response.is_empty() {
                None
            } else {
                Some(e.response.remove(0))
            }
        })
    }

    pub async fn read_match(provider: &FixtureProvider, throttle: Option<Duration>) -> Option<MatchDetails> {
        MatchService::read_fixture(provider, throttle).await
            .map(|e| MatchDetails::from(&e))
    }

    /// Provider lookup for `/buscar-partido`, uncached: it is a one-off admin
    /// query for finding a fixture id.
    pub async fn search(provider: &FixtureProvider, date: &str) -> Option<Vec<FixtureData>> {
        let url = rest_client::get_fixtures_by_date_url(date);
        provider.fetch(&url).await.map(|e| e.response)
    }
}
