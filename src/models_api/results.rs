use serde::{Deserialize, Serialize};

use crate::models::Winner;

/// `/resultados` payload. Field names are the wire contract the frontend
/// consumes, hence the Spanish keys.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ResultsRsp {
    pub equipos: Equipos,
    pub resultados: Vec<ScoredResult>,
    pub resultado_real: MatchResult,
    pub estadio: Estadio,
    pub status: MatchStatus,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Equipos {
    pub home: TeamBadge,
    pub away: TeamBadge,
    pub league: LeagueBadge,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TeamBadge {
    pub name: String,
    pub logo: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LeagueBadge {
    pub logo: Option<String>,
}

/// The authoritative result a pool is scored against.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub final_score: String,
    pub first_half_score: String,
    pub second_half_score: String,
    pub winner: Winner,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Estadio {
    pub nombre: String,
    pub ciudad: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MatchStatus {
    pub estado: String,
    pub minutos: u16,
    pub tiempo_extra: u16,
}

/// One ranked leaderboard row, recomputed on every request.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ScoredResult {
    pub name: String,
    pub score: u8,
    pub posicion: usize,
    pub predictions: Predictions,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Predictions {
    pub winner: String,
    pub final_score: String,
    pub first_half: String,
    pub second_half: String,
}
