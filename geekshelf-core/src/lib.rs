//! Domain model of the board-game catalogue client.
//!
//! Everything here is a plain value type built by one decode pass in
//! `geekshelf-client`, plus the lenient coercions ([`util`]) those decoders
//! share and the poll arithmetic of [`SuggestedPlayerCount`].

pub mod collection;
pub mod error;
pub mod feeds;
pub mod item;
pub mod plays;
pub mod suggested;
pub mod thing;
pub mod user;
pub mod util;

pub use collection::{CollectionItem, CollectionType, StatusCounters, StatusTag, WishlistPriority};
pub use error::ParseTagError;
pub use feeds::{IdDelta, ListItem, TrendInterval, TrendOutput};
pub use item::{ItemType, Link, SearchResult};
pub use plays::{Play, PlayItem, Player, Plays};
pub use suggested::{SUGGESTED_PLAYERS_POLL, SuggestedPlayerCount, Suggestion, ThreeRating};
pub use thing::{FamilyRank, RankBreakdown, ThingResult};
pub use user::{PersonImage, User};
