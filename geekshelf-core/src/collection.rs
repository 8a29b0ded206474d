use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::ParseTagError;
use crate::item::ItemType;

/// Collection list membership, named after the collection endpoint's
/// filter parameters (`own=1`, `prevowned=1`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionType {
    Own,
    Rated,
    Played,
    Comment,
    Trade,
    Want,
    Wishlist,
    Preorder,
    WantToPlay,
    WantToBuy,
    PrevOwned,
    HasParts,
    WantParts,
}

const ALL_COLLECTION_TYPES: &[CollectionType] = &[
    CollectionType::Own,
    CollectionType::Rated,
    CollectionType::Played,
    CollectionType::Comment,
    CollectionType::Trade,
    CollectionType::Want,
    CollectionType::Wishlist,
    CollectionType::Preorder,
    CollectionType::WantToPlay,
    CollectionType::WantToBuy,
    CollectionType::PrevOwned,
    CollectionType::HasParts,
    CollectionType::WantParts,
];

impl CollectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Own => "own",
            Self::Rated => "rated",
            Self::Played => "played",
            Self::Comment => "comment",
            Self::Trade => "trade",
            Self::Want => "want",
            Self::Wishlist => "wishlist",
            Self::Preorder => "preorder",
            Self::WantToPlay => "wanttoplay",
            Self::WantToBuy => "wanttobuy",
            Self::PrevOwned => "prevowned",
            Self::HasParts => "hasparts",
            Self::WantParts => "wantparts",
        }
    }

    pub fn all() -> &'static [CollectionType] {
        ALL_COLLECTION_TYPES
    }
}

impl std::fmt::Display for CollectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CollectionType {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_COLLECTION_TYPES
            .iter()
            .copied()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| ParseTagError::new("collection type", s))
    }
}

/// Wishlist priority, 1 (must have) through 5 (don't buy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WishlistPriority {
    MustHave = 1,
    LoveToHave = 2,
    LikeToHave = 3,
    ThinkingAboutIt = 4,
    DoNotBuy = 5,
}

impl WishlistPriority {
    /// Map the upstream `wishlistpriority` value; anything outside 1-5 has no tag.
    pub fn from_level(level: i64) -> Option<Self> {
        match level {
            1 => Some(Self::MustHave),
            2 => Some(Self::LoveToHave),
            3 => Some(Self::LikeToHave),
            4 => Some(Self::ThinkingAboutIt),
            5 => Some(Self::DoNotBuy),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MustHave => "musthave",
            Self::LoveToHave => "lovetohave",
            Self::LikeToHave => "liketohave",
            Self::ThinkingAboutIt => "thinkingaboutit",
            Self::DoNotBuy => "donotbuy",
        }
    }
}

/// One entry of a collection item's status set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatusTag {
    Collection(CollectionType),
    Priority(WishlistPriority),
}

impl StatusTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Collection(t) => t.as_str(),
            Self::Priority(p) => p.as_str(),
        }
    }
}

impl std::fmt::Display for StatusTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<CollectionType> for StatusTag {
    fn from(t: CollectionType) -> Self {
        Self::Collection(t)
    }
}

impl From<WishlistPriority> for StatusTag {
    fn from(p: WishlistPriority) -> Self {
        Self::Priority(p)
    }
}

/// Raw status counters of a collection entry, already coerced to numbers.
///
/// Every counter is "present" when non-zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusCounters {
    pub own: i64,
    pub prev_owned: i64,
    pub for_trade: i64,
    pub want: i64,
    pub want_to_play: i64,
    pub want_to_trade: i64,
    pub want_to_buy: i64,
    pub wishlist: i64,
    pub preordered: i64,
    pub wishlist_priority: i64,
    pub num_plays: i64,
}

impl StatusCounters {
    /// Derive the status tag set.
    ///
    /// `fortrade` and `wanttotrade` both map to `trade`; a positive play
    /// count adds `played`; a valid wishlist priority adds its priority tag.
    pub fn tags(&self) -> BTreeSet<StatusTag> {
        let mut tags = BTreeSet::new();
        let mut set_if = |cond: bool, tag: StatusTag| {
            if cond {
                tags.insert(tag);
            }
        };

        set_if(self.own != 0, CollectionType::Own.into());
        set_if(self.want != 0, CollectionType::Want.into());
        set_if(self.want_to_buy != 0, CollectionType::WantToBuy.into());
        set_if(self.want_to_play != 0, CollectionType::WantToPlay.into());
        set_if(self.want_to_trade != 0, CollectionType::Trade.into());
        set_if(self.wishlist != 0, CollectionType::Wishlist.into());
        if let Some(priority) = WishlistPriority::from_level(self.wishlist_priority) {
            set_if(true, priority.into());
        }
        set_if(self.preordered != 0, CollectionType::Preorder.into());
        set_if(self.prev_owned != 0, CollectionType::PrevOwned.into());
        set_if(self.for_trade != 0, CollectionType::Trade.into());
        set_if(self.num_plays > 0, CollectionType::Played.into());
        tags
    }
}

/// A thing in a user's collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionItem {
    /// Object id of the thing.
    pub id: i64,
    /// Id of the collection entry itself.
    pub coll_id: i64,
    pub name: String,
    pub description: String,
    pub item_type: ItemType,
    pub year_published: i64,
    pub thumbnail: String,
    pub image: String,
    pub num_plays: i64,
    pub collection_status: BTreeSet<StatusTag>,
}

impl CollectionItem {
    pub fn has_status(&self, tag: impl Into<StatusTag>) -> bool {
        self.collection_status.contains(&tag.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[StatusTag]) -> BTreeSet<StatusTag> {
        list.iter().copied().collect()
    }

    #[test]
    fn owned_and_played() {
        let counters = StatusCounters {
            own: 1,
            num_plays: 3,
            ..Default::default()
        };
        assert_eq!(
            counters.tags(),
            tags(&[CollectionType::Own.into(), CollectionType::Played.into()])
        );
    }

    #[test]
    fn empty_counters_have_no_tags() {
        assert!(StatusCounters::default().tags().is_empty());
    }

    #[test]
    fn both_trade_flags_collapse_to_one_tag() {
        let counters = StatusCounters {
            for_trade: 1,
            want_to_trade: 1,
            ..Default::default()
        };
        assert_eq!(counters.tags(), tags(&[CollectionType::Trade.into()]));
    }

    #[test]
    fn wishlist_priority_adds_priority_tag() {
        let counters = StatusCounters {
            wishlist: 1,
            wishlist_priority: 4,
            ..Default::default()
        };
        let got = counters.tags();
        assert!(got.contains(&CollectionType::Wishlist.into()));
        assert!(got.contains(&WishlistPriority::ThinkingAboutIt.into()));
        assert_eq!(got.len(), 2);
    }

    #[test]
    fn out_of_range_priority_is_ignored() {
        let counters = StatusCounters {
            wishlist_priority: 9,
            ..Default::default()
        };
        assert!(counters.tags().is_empty());
    }

    #[test]
    fn rated_and_comment_are_filters_only() {
        let counters = StatusCounters {
            prev_owned: 1,
            ..Default::default()
        };
        let derived = counters.tags();
        assert_eq!(derived, tags(&[CollectionType::PrevOwned.into()]));
        assert!(!derived.contains(&StatusTag::from(CollectionType::Rated)));
        assert!(!derived.contains(&StatusTag::from(CollectionType::Comment)));
    }

    #[test]
    fn collection_type_names_round_trip() {
        for t in CollectionType::all() {
            assert_eq!(t.as_str().parse::<CollectionType>().unwrap(), *t);
        }
        assert!("previouslyowned".parse::<CollectionType>().is_err());
    }
}
