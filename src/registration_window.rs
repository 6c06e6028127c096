use chrono::{DateTime, Duration, Utc};

/// Registrations close this close to kickoff.
pub const CUTOFF_MINUTES: i64 = 5;

pub const CLOSED_MESSAGE: &str = "Las inscripciones están cerradas: el partido está por comenzar.";

/// Open strictly more than five minutes before kickoff, compared in UTC.
pub fn is_open(kickoff: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    kickoff - now > Duration::minutes(CUTOFF_MINUTES)
}
