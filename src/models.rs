use serde::{Deserialize, Serialize};

/// Outcome of a match. `Pending` covers every fixture status where no result
/// can be derived yet (not started, postponed, suspended, ...).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Home,
    Away,
    Draw,
    Pending,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseStringError;

/// Parses an "H-A" score string. Score strings are stored and compared as raw
/// text; parsing only happens when a final score is derived from the halves.
pub fn parse_score(score: &str) -> Result<(u32, u32), ParseStringError> {
    let (home, away) = score.trim().split_once('-').ok_or(ParseStringError)?;
    let home = home.trim().parse().map_err(|_| ParseStringError)?;
    let away = away.trim().parse().map_err(|_| ParseStringError)?;
    Ok((home, away))
}
