use std::net::SocketAddr;

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use chrono::Utc;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::log;

use crate::fixture_provider::FixtureProvider;
use crate::match_service::MatchService;
use crate::models_api::match_info::{FixtureSearchHit, MatchInfoRsp};
use crate::models_api::participant::{CreateParticipant, UpdateParticipant};
use crate::models_api::results::{Equipos, Estadio, LeagueBadge, MatchStatus, ResultsRsp, TeamBadge};
use crate::participant_service::ParticipantService;
use crate::registration_window;
use crate::scoring_service::ScoringService;
use crate::CONFIG;

const UPSTREAM_UNAVAILABLE: &str = "No se pudo obtener la información del partido. Intente nuevamente en unos minutos.";

#[derive(Clone)]
pub struct ApiState {
    pub provider: FixtureProvider,
}

pub struct Api;
impl Api {
    pub async fn serve(port: u16) {
        let state = ApiState { provider: FixtureProvider::from_config() };
        let app = Router::new()
            .route("/resultados", axum::routing::get(Api::get_resultados))
            .route("/partido-info", axum::routing::get(Api::get_partido_info))
            .route("/participantes", axum::routing::get(Api::get_participantes))
            .route("/buscar-participante", axum::routing::get(Api::find_participante))
            .route("/crear-participante", axum::routing::post(Api::create_participante))
            .route("/actualizar-participante", axum::routing::put(Api::update_participante))
            .route("/buscar-partido", axum::routing::get(Api::find_partido))

            .route("/", axum::routing::get(Api::root))
            .with_state(state)
            .layer(ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(CorsLayer::permissive()) // the frontend is served from another origin
            );
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        log::info!("[API] Listening on {}", addr);
        _ = axum::Server::bind(&addr)
            .serve(app.into_make_service())
            .await;
    }

    async fn root() -> &'static str {
        "Polla futbolera"
    }

    async fn get_resultados(State(state): State<ApiState>) -> Response {
        let details = match MatchService::read_match(&state.provider, MatchService::results_throttle()).await {
            Some(details) => details,
            None => {
                return (StatusCode::SERVICE_UNAVAILABLE, Json(json!({ "error": UPSTREAM_UNAVAILABLE }))).into_response();
            }
        };

        let participants = ParticipantService::read_all(&CONFIG.polla_id);
        if participants.is_empty() {
            return (StatusCode::NOT_FOUND, Json(json!({ "error": "No hay predicciones registradas para esta polla." }))).into_response();
        }

        let resultados = ScoringService::rank(&participants, &details);
        Json(ResultsRsp {
            equipos: Equipos {
                home: TeamBadge { name: details.home_team, logo: details.home_logo },
                away: TeamBadge { name: details.away_team, logo: details.away_logo },
                league: LeagueBadge { logo: details.league_logo },
            },
            resultados,
            resultado_real: details.result,
            estadio: Estadio {
                nombre: details.venue.name.unwrap_or_else(|| "No disponible".to_string()),
                ciudad: details.venue.city.unwrap_or_else(|| "No disponible".to_string()),
            },
            status: MatchStatus {
                estado: details.status.long,
                minutos: details.status.elapsed.unwrap_or(0),
                tiempo_extra: details.status.extra.unwrap_or(0),
            },
        }).into_response()
    }

    async fn get_partido_info(State(state): State<ApiState>) -> Response {
        match MatchService::read_fixture(&state.provider, MatchService::info_throttle()).await {
            Some(e) => Json(MatchInfoRsp {
                id: e.fixture.id,
                id_polla: CONFIG.polla_id.clone(),
                fixture: e.fixture,
                league: e.league,
                teams: e.teams,
            }).into_response(),
            None => (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "No se pudo obtener la información del partido." }))).into_response(),
        }
    }

    async fn get_participantes() -> Response {
        if CONFIG.polla_id.trim().is_empty() {
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": "id_polla no configurado" }))).into_response();
        }
        Json(ParticipantService::read_all(&CONFIG.polla_id)).into_response()
    }

    async fn find_participante(Query(query): Query<ParticipantQuery>) -> Response {
        match (query.id_polla, query.phone) {
            // a miss is a null body, not a 404
            (Some(id_polla), Some(phone)) => Json(ParticipantService::read(&id_polla, &phone)).into_response(),
            _ => (StatusCode::BAD_REQUEST, Json(json!({ "error": "id_polla y phone son requeridos" }))).into_response(),
        }
    }

    async fn create_participante(State(state): State<ApiState>, Json(body): Json<CreateParticipant>) -> Response {
        let participant = match body.into_participant() {
            Some(participant) => participant,
            None => {
                return (StatusCode::BAD_REQUEST, Json(json!({ "error": "Faltan campos requeridos" }))).into_response();
            }
        };

        match MatchService::read_match(&state.provider, MatchService::info_throttle()).await {
            Some(details) => {
                if !registration_window::is_open(details.kickoff, Utc::now()) {
                    (StatusCode::FORBIDDEN, Json(json!({ "error": registration_window::CLOSED_MESSAGE }))).into_response()
                } else if ParticipantService::create(&participant) {
                    (StatusCode::CREATED, Json(participant)).into_response()
                } else {
                    (StatusCode::CONFLICT, Json(json!({ "error": "Ya existe un participante con ese teléfono en esta polla." }))).into_response()
                }
            },
            // no kickoff time => the window cannot be validated, fail closed
            None => (StatusCode::SERVICE_UNAVAILABLE, Json(json!({ "error": UPSTREAM_UNAVAILABLE }))).into_response(),
        }
    }

    async fn update_participante(State(state): State<ApiState>, Json(body): Json<UpdateParticipant>) -> Response {
        let (id_polla, phone) = match (&body.id_polla, &body.phone) {
            (Some(id_polla), Some(phone)) => (id_polla.clone(), phone.clone()),
            _ => {
                return (StatusCode::BAD_REQUEST, Json(json!({ "error": "id_polla y phone son requeridos" }))).into_response();
            }
        };

        match MatchService::read_match(&state.provider, MatchService::info_throttle()).await {
            Some(details) => {
                if !registration_window::is_open(details.kickoff, Utc::now()) {
                    return (StatusCode::FORBIDDEN, Json(json!({ "error": registration_window::CLOSED_MESSAGE }))).into_response();
                }
                match ParticipantService::update(&id_polla, &phone, &body) {
                    Some(participant) => Json(participant).into_response(),
                    None => (StatusCode::NOT_FOUND, Json(json!({ "error": "No existe ese participante." }))).into_response(),
                }
            },
            None => (StatusCode::SERVICE_UNAVAILABLE, Json(json!({ "error": UPSTREAM_UNAVAILABLE }))).into_response(),
        }
    }

    async fn find_partido(State(state): State<ApiState>, Query(query): Query<FixtureSearchQuery>) -> Response {
        let (fecha, equipo1, equipo2) = match (query.fecha, query.equipo1, query.equipo2) {
            (Some(fecha), Some(equipo1), Some(equipo2)) => (fecha, equipo1, equipo2),
            _ => {
                return (StatusCode::BAD_REQUEST, Json(json!({ "error": "fecha, equipo1 y equipo2 son requeridos" }))).into_response();
            }
        };

        match MatchService::search(&state.provider, &fecha).await {
            Some(fixtures) => {
                let hits: Vec<FixtureSearchHit> = fixtures.into_iter()
                    .map(|e| FixtureSearchHit {
                        id: e.fixture.id,
                        coincide: is_searched_match(&e.teams.home.name, &e.teams.away.name, &equipo1, &equipo2),
                        home_team: e.teams.home.name,
                        away_team: e.teams.away.name,
                    })
                    .collect();
                Json(hits).into_response()
            },
            None => (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "No se pudo buscar partidos para esa fecha." }))).into_response(),
        }
    }
}

/// Both searched names have to appear, in either orientation.
fn is_searched_match(home: &str, away: &str, equipo1: &str, equipo2: &str) -> bool {
    let (home, away) = (home.to_lowercase(), away.to_lowercase());
    let (equipo1, equipo2) = (equipo1.to_lowercase(), equipo2.to_lowercase());
    (home.contains(&equipo1) && away.contains(&equipo2))
        || (home.contains(&equipo2) && away.contains(&equipo1))
}

#[derive(Deserialize)]
struct ParticipantQuery {
    id_polla: Option<String>,
    phone: Option<String>,
}

#[derive(Deserialize)]
struct FixtureSearchQuery {
    fecha: Option<String>,
    equipo1: Option<String>,
    equipo2: Option<String>,
}
