use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::item::{ItemType, Link};
use crate::suggested::SuggestedPlayerCount;

/// Rank of a thing inside one family (strategy games, party games, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FamilyRank {
    pub id: i64,
    pub name: String,
    pub friendly_name: String,
    /// Zero when the upstream reports "Not Ranked".
    pub rank: i64,
    pub bayes_average: f64,
}

/// Full detail record from the thing endpoint.
///
/// Play times stay as text: the upstream sometimes sends placeholders there.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThingResult {
    pub id: i64,
    pub name: String,
    pub alternate_names: Vec<String>,
    pub item_type: ItemType,
    pub year_published: i64,

    pub thumbnail: String,
    pub image: String,

    pub min_players: i64,
    pub max_players: i64,
    pub suggested_player_count: Vec<SuggestedPlayerCount>,

    pub min_age: i64,
    pub play_time: String,
    pub min_play_time: String,
    pub max_play_time: String,

    /// HTML-unescaped description.
    pub description: String,

    /// Links grouped by upstream category (`boardgamecategory`, `boardgamedesigner`, ...).
    pub links: BTreeMap<String, Vec<Link>>,

    pub users_rated: i64,
    pub average_rate: f64,
    pub bayes_average: f64,

    pub users_owned: i64,
    pub users_trading: i64,
    pub users_wanting: i64,
    pub users_wishing: i64,
    pub num_comments: i64,
    pub num_weights: i64,
    pub average_weight: f64,

    /// Overall board game rank, zero when unranked.
    pub rank_total: i64,
    pub family: BTreeMap<String, FamilyRank>,
}

impl ThingResult {
    /// Links of one category, empty when the category is absent.
    pub fn links_of(&self, category: &str) -> &[Link] {
        self.links.get(category).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Rating histogram: slot `i` holds the number of ratings of `i + 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankBreakdown(pub [i64; 10]);

impl RankBreakdown {
    /// Store a count for a rating of 1-10; other ratings are dropped.
    pub fn record(&mut self, rating: i64, count: i64) {
        if (1..=10).contains(&rating) {
            self.0[(rating - 1) as usize] = count;
        }
    }

    pub fn count(&self, rating: usize) -> i64 {
        match rating {
            1..=10 => self.0[rating - 1],
            _ => 0,
        }
    }

    pub fn total(&self) -> i64 {
        self.0.iter().sum()
    }

    /// Plain average of the ratings, 0 when there are none.
    pub fn average(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let weighted: f64 = self
            .0
            .iter()
            .enumerate()
            .map(|(i, &n)| (i as f64 + 1.0) * n as f64)
            .sum();
        weighted / total as f64
    }

    /// Average after adding `added` dummy ratings of 5.5.
    pub fn bayesian_average(&self, added: i64) -> f64 {
        let total = self.total() + added;
        if total == 0 {
            return 0.0;
        }
        let weighted: f64 = self
            .0
            .iter()
            .enumerate()
            .map(|(i, &n)| (i as f64 + 1.0) * n as f64)
            .sum::<f64>()
            + added as f64 * 5.5;
        weighted / total as f64
    }
}
