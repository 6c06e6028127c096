use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Statuses where no result can be derived: not started, to be defined,
/// postponed, cancelled, suspended, interrupted, abandoned, awarded, walkover.
const PENDING_STATUSES: [&str; 9] = ["NS", "TBD", "PST", "CANC", "SUSP", "INT", "ABD", "AWD", "WO"];

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct FixturesRsp {
    pub response: Vec<FixtureData>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FixtureData {
    pub fixture: Fixture,
    pub league: LeagueInfo,
    pub teams: Teams,
    pub goals: Goals,
    pub score: Score,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Fixture {
    pub id: u32,
    /// RFC3339 with the provider's offset; normalized to UTC on deserialize.
    pub date: DateTime<Utc>,
    pub status: FixtureStatus,
    #[serde(default)]
    pub venue: Venue,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct FixtureStatus {
    pub long: String,
    pub short: String,
    pub elapsed: Option<u16>,
    pub extra: Option<u16>,
}

impl FixtureStatus {
    pub fn is_pending(&self) -> bool {
        PENDING_STATUSES.contains(&self.short.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Venue {
    pub name: Option<String>,
    pub city: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LeagueInfo {
    pub id: u32,
    pub name: String,
    pub logo: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Teams {
    pub home: Team,
    pub away: Team,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub logo: Option<String>,
}

/// Goal counts come back as numbers or null (match not started).
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Goals {
    pub home: Option<i16>,
    pub away: Option<i16>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Score {
    pub halftime: Goals,
    pub fulltime: Goals,
}
