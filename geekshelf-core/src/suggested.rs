use serde::{Deserialize, Serialize};

use crate::util::voting_percentage;

/// Name of the poll that carries the player-count votes.
pub const SUGGESTED_PLAYERS_POLL: &str = "suggested_numplayers";

/// The three answers of the player-count poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThreeRating {
    NotRecommended,
    Recommended,
    Best,
}

impl ThreeRating {
    /// Label used by the poll's `result value=".."` attribute.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotRecommended => "Not Recommended",
            Self::Recommended => "Recommended",
            Self::Best => "Best",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Best" => Some(Self::Best),
            "Recommended" => Some(Self::Recommended),
            "Not Recommended" => Some(Self::NotRecommended),
            _ => None,
        }
    }
}

impl std::fmt::Display for ThreeRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Community votes for one player-count bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedPlayerCount {
    /// Bucket label, e.g. `"3"` or `"4+"`.
    pub num_players: String,
    pub best: i64,
    pub recommended: i64,
    pub not_recommended: i64,
}

/// Winning answer of a bucket with its vote count and share.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Suggestion {
    pub rating: ThreeRating,
    pub votes: i64,
    pub percentage: f32,
}

impl SuggestedPlayerCount {
    pub fn new(num_players: impl Into<String>) -> Self {
        Self {
            num_players: num_players.into(),
            ..Default::default()
        }
    }

    /// Record the votes for one answer.
    pub fn set_votes(&mut self, rating: ThreeRating, votes: i64) {
        match rating {
            ThreeRating::Best => self.best = votes,
            ThreeRating::Recommended => self.recommended = votes,
            ThreeRating::NotRecommended => self.not_recommended = votes,
        }
    }

    /// Pick the answer users voted for.
    ///
    /// Recommended wins whenever it is at least Best and strictly above Not
    /// Recommended, so a Best/Recommended tie goes to Recommended. Best wins
    /// only when strictly above both others. Everything else reports Not
    /// Recommended.
    pub fn suggestion(&self) -> Suggestion {
        if self.recommended >= self.best && self.recommended > self.not_recommended {
            return Suggestion {
                rating: ThreeRating::Recommended,
                votes: self.recommended,
                percentage: self.recommended_percentile(),
            };
        }

        if self.best > self.recommended && self.best > self.not_recommended {
            return Suggestion {
                rating: ThreeRating::Best,
                votes: self.best,
                percentage: self.best_percentile(),
            };
        }

        Suggestion {
            rating: ThreeRating::NotRecommended,
            votes: self.not_recommended,
            percentage: self.not_recommended_percentile(),
        }
    }

    pub fn best_percentile(&self) -> f32 {
        voting_percentage(self.best, self.recommended, self.not_recommended)
    }

    pub fn recommended_percentile(&self) -> f32 {
        voting_percentage(self.recommended, self.best, self.not_recommended)
    }

    pub fn not_recommended_percentile(&self) -> f32 {
        voting_percentage(self.not_recommended, self.best, self.recommended)
    }

    pub fn total_votes(&self) -> i64 {
        self.best + self.recommended + self.not_recommended
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(best: i64, recommended: i64, not_recommended: i64) -> SuggestedPlayerCount {
        SuggestedPlayerCount {
            num_players: "2".to_string(),
            best,
            recommended,
            not_recommended,
        }
    }

    #[test]
    fn tie_between_best_and_recommended_goes_to_recommended() {
        let s = bucket(5, 5, 0).suggestion();
        assert_eq!(s.rating, ThreeRating::Recommended);
        assert_eq!(s.votes, 5);
        assert!((s.percentage - 50.0).abs() < f32::EPSILON);
    }

    #[test]
    fn best_needs_a_strict_lead() {
        let s = bucket(6, 5, 0).suggestion();
        assert_eq!(s.rating, ThreeRating::Best);
        assert_eq!(s.votes, 6);
    }

    #[test]
    fn not_recommended_when_nobody_likes_it() {
        let s = bucket(0, 0, 1).suggestion();
        assert_eq!(s.rating, ThreeRating::NotRecommended);
        assert_eq!(s.votes, 1);
        assert!((s.percentage - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn no_votes_reports_not_recommended_with_zero_share() {
        let s = bucket(0, 0, 0).suggestion();
        assert_eq!(s.rating, ThreeRating::NotRecommended);
        assert_eq!(s.percentage, 0.0);
    }

    #[test]
    fn recommended_tied_with_not_recommended_falls_through() {
        // Recommended is not strictly above Not Recommended, Best is not ahead either.
        let s = bucket(1, 4, 4).suggestion();
        assert_eq!(s.rating, ThreeRating::NotRecommended);
    }

    #[test]
    fn percentiles_add_up() {
        let b = bucket(2, 5, 3);
        let sum = b.best_percentile() + b.recommended_percentile() + b.not_recommended_percentile();
        assert!((sum - 100.0).abs() < 1e-4);
    }

    #[test]
    fn labels_round_trip() {
        for r in [ThreeRating::Best, ThreeRating::Recommended, ThreeRating::NotRecommended] {
            assert_eq!(ThreeRating::from_label(r.label()), Some(r));
        }
        assert_eq!(ThreeRating::from_label("Meh"), None);
    }
}
