use std::fmt::Display;

use tracing::log;

use crate::db::Db;
use crate::models_api::participant::{Participant, UpdateParticipant};

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct ParticipantKey(pub String, pub String);

impl Display for ParticipantKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.0, self.1)
    }
}

pub struct ParticipantService;

impl ParticipantService {
    pub fn read(id_polla: &str, phone: &str) -> Option<Participant> {
        ParticipantService::get_db().read(&ParticipantKey(id_polla.to_string(), phone.to_string()))
    }

    pub fn read_all(id_polla: &str) -> Vec<Participant> {
        ParticipantService::get_db().read_all()
            .into_iter()
            .filter(|e: &Participant| e.id_polla == id_polla)
            .collect()
    }

    /// False when (id_polla, phone) is already taken, whatever the payload.
    pub fn create(participant: &Participant) -> bool {
        let db = ParticipantService::get_db();
        let key = ParticipantKey(participant.id_polla.clone(), participant.phone.clone());
        if db.read(&key).is_some() {
            return false;
        }
        log::info!("[PARTICIPANT] Create {key}");
        _ = db.write(&key, participant);
        true
    }

    /// Everything but the identifying pair is updatable. None when the
    /// participant does not exist.
    pub fn update(id_polla: &str, phone: &str, changes: &UpdateParticipant) -> Option<Participant> {
        let db = ParticipantService::get_db();
        let key = ParticipantKey(id_polla.to_string(), phone.to_string());
        let mut participant = db.read(&key)?;

        if let Some(name) = &changes.name {
            participant.name = name.clone();
        }
        if let Some(winner) = &changes.winner {
            participant.winner = winner.clone();
        }
        if let Some(first_half_score) = &changes.first_half_score {
            participant.first_half_score = first_half_score.clone();
        }
        if let Some(second_half_score) = &changes.second_half_score {
            participant.second_half_score = second_half_score.clone();
        }

        log::info!("[PARTICIPANT] Update {key}");
        _ = db.write(&key, &participant);
        Some(participant)
    }

    fn get_db() -> Db<ParticipantKey, Participant> {
        Db::new("participants")
    }
}
