use serde::{Deserialize, Serialize};

use crate::error::ParseTagError;

/// Catalogue item kinds ("things") as named by the upstream API.
///
/// Kinds this crate does not model (`rpgissue`, the generic `thing` used by
/// plays, ...) are kept verbatim in `Other` so decoding never fails on them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum ItemType {
    BoardGame,
    BoardGameExpansion,
    BoardGameAccessory,
    RpgItem,
    VideoGame,
    Other(String),
}

const KNOWN_ITEM_TYPES: &[ItemType] = &[
    ItemType::BoardGame,
    ItemType::BoardGameExpansion,
    ItemType::BoardGameAccessory,
    ItemType::RpgItem,
    ItemType::VideoGame,
];

impl ItemType {
    /// Wire name, as used in `type=` query parameters and `type` attributes.
    pub fn as_str(&self) -> &str {
        match self {
            Self::BoardGame => "boardgame",
            Self::BoardGameExpansion => "boardgameexpansion",
            Self::BoardGameAccessory => "boardgameaccessory",
            Self::RpgItem => "rpgitem",
            Self::VideoGame => "videogame",
            Self::Other(s) => s,
        }
    }

    /// The five kinds with a dedicated variant.
    pub fn known() -> &'static [ItemType] {
        KNOWN_ITEM_TYPES
    }

    /// Map a wire name to a variant, keeping unknown names in `Other`.
    pub fn from_wire(s: &str) -> Self {
        KNOWN_ITEM_TYPES
            .iter()
            .find(|t| t.as_str() == s)
            .cloned()
            .unwrap_or_else(|| Self::Other(s.to_string()))
    }
}

impl Default for ItemType {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ItemType {
    type Err = ParseTagError;

    /// Strict parse for user input: only the five known kinds are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        KNOWN_ITEM_TYPES
            .iter()
            .find(|t| t.as_str() == lower)
            .cloned()
            .ok_or_else(|| ParseTagError::new("item type", s))
    }
}

impl From<String> for ItemType {
    fn from(s: String) -> Self {
        Self::from_wire(&s)
    }
}

impl From<ItemType> for String {
    fn from(t: ItemType) -> Self {
        t.as_str().to_string()
    }
}

/// A `{id, name}` pair from a thing's categorised link list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: i64,
    pub name: String,
}

/// One hit from the search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: i64,
    pub name: String,
    pub alternate_names: Vec<String>,
    pub item_type: ItemType,
    /// Zero means the upstream did not report a year.
    pub year_published: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for t in ItemType::known() {
            assert_eq!(&ItemType::from_wire(t.as_str()), t);
            let parsed: ItemType = t.as_str().parse().unwrap();
            assert_eq!(&parsed, t);
        }
    }

    #[test]
    fn unknown_wire_name_is_kept() {
        let t = ItemType::from_wire("rpgissue");
        assert_eq!(t, ItemType::Other("rpgissue".to_string()));
        assert_eq!(t.to_string(), "rpgissue");
    }

    #[test]
    fn strict_parse_rejects_unknown() {
        assert!("thing".parse::<ItemType>().is_err());
        assert_eq!("BoardGame".parse::<ItemType>().unwrap(), ItemType::BoardGame);
    }
}
