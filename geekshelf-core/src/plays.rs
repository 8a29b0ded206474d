use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::item::ItemType;

/// One page of a user's (or a game's) logged plays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plays {
    pub total: i64,
    pub page: i64,
    pub user_name: String,
    pub user_id: i64,
    pub items: Vec<Play>,
}

/// A logged play.
///
/// Built whole by the plays decoder. The only field a caller is expected to
/// change afterwards is `id`, which play submission fills in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Play {
    pub id: i64,
    /// `None` when the upstream date was missing or unparsable.
    pub date: Option<NaiveDate>,
    pub quantity: i64,
    pub length: Duration,
    pub incomplete: bool,
    pub now_in_stats: bool,
    pub location: String,
    pub comment: String,
    pub item: PlayItem,
    pub players: Vec<Player>,
}

/// The thing a play was logged against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayItem {
    pub name: String,
    pub item_type: ItemType,
    pub id: i64,
}

/// A participant of a play.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub user_name: String,
    pub user_id: i64,
    pub name: String,
    pub start_position: String,
    pub color: String,
    /// Kept as text: scores like `"12+3"` or `"win"` are common.
    pub score: String,
    pub new: bool,
    pub rating: String,
    pub win: bool,
}

impl Play {
    pub fn winners(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.win)
    }
}
