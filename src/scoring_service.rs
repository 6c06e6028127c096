use crate::match_service::MatchDetails;
use crate::models::Winner;
use crate::models_api::participant::Participant;
use crate::models_api::results::{Predictions, ScoredResult};

pub const WINNER_POINTS: u8 = 3;
pub const FINAL_SCORE_POINTS: u8 = 5;
pub const HALF_SCORE_POINTS: u8 = 2;

pub struct ScoringService;

impl ScoringService {
    /// Canonicalizes a predicted winner against the actual team names.
    /// `local`/`visitante`/`empate` are the synonyms the pool accepts, a team
    /// name (case-insensitive) works too. Anything else matches nothing, which
    /// simply scores no winner points downstream.
    pub fn normalize_winner(predicted: &str, home_name: &str, away_name: &str) -> Option<Winner> {
        let predicted = predicted.trim().to_lowercase();
        if predicted == "empate" || predicted == "draw" {
            Some(Winner::Draw)
        } else if predicted == "local" || predicted == home_name.trim().to_lowercase() {
            Some(Winner::Home)
        } else if predicted == "visitante" || predicted == away_name.trim().to_lowercase() {
            Some(Winner::Away)
        } else {
            None
        }
    }

    /// Four independent criteria, no partial credit: winner 3, final score 5,
    /// each half 2. Score strings are compared as raw text.
    pub fn calculate_score(prediction: &Participant, actual: &MatchDetails) -> u8 {
        let mut score = 0;

        let predicted_winner = ScoringService::normalize_winner(&prediction.winner, &actual.home_team, &actual.away_team);
        if predicted_winner == Some(actual.result.winner) {
            score += WINNER_POINTS;
        }
        if prediction.final_score() == actual.result.final_score {
            score += FINAL_SCORE_POINTS;
        }
        if prediction.first_half_score == actual.result.first_half_score {
            score += HALF_SCORE_POINTS;
        }
        if prediction.second_half_score == actual.result.second_half_score {
            score += HALF_SCORE_POINTS;
        }
        score
    }

    /// Scores every participant and assigns competition ranking: descending by
    /// score, ties share the position of the first member of the tied group,
    /// so [10, 8, 8, 5] ranks [1, 2, 2, 4]. The sort is stable, tied
    /// participants keep their store order.
    pub fn rank(participants: &[Participant], actual: &MatchDetails) -> Vec<ScoredResult> {
        let mut results: Vec<ScoredResult> = participants.iter()
            .map(|e| ScoredResult {
                name: e.name.clone(),
                score: ScoringService::calculate_score(e, actual),
                posicion: 0,
                predictions: Predictions {
                    winner: e.winner.clone(),
                    final_score: e.final_score(),
                    first_half: e.first_half_score.clone(),
                    second_half: e.second_half_score.clone(),
                },
            })
            .collect();

        results.sort_by_key(|e| std::cmp::Reverse(e.score));

        let mut position = 0;
        let mut previous_score = None;
        for (idx, res) in results.iter_mut().enumerate() {
            if previous_score != Some(res.score) {
                position = idx + 1;
            }
            res.posicion = position;
            previous_score = Some(res.score);
        }
        results
    }
}
