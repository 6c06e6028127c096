use serde::{Deserialize, Serialize};

use crate::models::parse_score;

/// Stored prediction document, keyed by (id_polla, phone). The final score is
/// never stored, it is derived from the halves.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub id_polla: String,
    pub name: String,
    pub phone: String,
    pub winner: String,
    pub first_half_score: String,
    pub second_half_score: String,
}

impl Participant {
    /// Sum of the predicted halves. An unparsable half degrades the whole
    /// derivation to "0-0" instead of failing the row.
    pub fn final_score(&self) -> String {
        match (parse_score(&self.first_half_score), parse_score(&self.second_half_score)) {
            (Ok((first_home, first_away)), Ok((second_home, second_away))) => {
                format!("{}-{}", first_home + second_home, first_away + second_away)
            },
            _ => "0-0".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CreateParticipant {
    pub id_polla: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub winner: Option<String>,
    pub first_half_score: Option<String>,
    pub second_half_score: Option<String>,
}

impl CreateParticipant {
    /// All fields are required; None when any is missing.
    pub fn into_participant(self) -> Option<Participant> {
        Some(Participant {
            id_polla: self.id_polla?,
            name: self.name?,
            phone: self.phone?,
            winner: self.winner?,
            first_half_score: self.first_half_score?,
            second_half_score: self.second_half_score?,
        })
    }
}

/// Update payload: (id_polla, phone) identifies the document and is never
/// changed, the rest is optional.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct UpdateParticipant {
    pub id_polla: Option<String>,
    pub phone: Option<String>,
    pub name: Option<String>,
    pub winner: Option<String>,
    pub first_half_score: Option<String>,
    pub second_half_score: Option<String>,
}
