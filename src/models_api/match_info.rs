use serde::{Deserialize, Serialize};

use crate::models_external::fixture::{Fixture, LeagueInfo, Teams};

/// `/partido-info` payload: the provider's fixture metadata plus the pool the
/// server is configured for.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MatchInfoRsp {
    pub id: u32,
    pub id_polla: String,
    pub fixture: Fixture,
    pub league: LeagueInfo,
    pub teams: Teams,
}

/// One `/buscar-partido` hit; `coincide` marks fixtures where both searched
/// team names match.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FixtureSearchHit {
    pub id: u32,
    pub home_team: String,
    pub away_team: String,
    pub coincide: bool,
}
