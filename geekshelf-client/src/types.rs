//! Wire shapes of upstream XML and JSON responses.
//!
//! Every scalar is captured as a string (or a raw JSON value) and coerced
//! afterwards, so a missing or malformed value never fails the document.

use serde::{Deserialize, Serialize};

/// An element whose only payload is a `value` attribute
/// (`<yearpublished value="2017"/>`). Absent elements read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueAttr {
    #[serde(rename = "@value", default)]
    pub value: String,
}

impl ValueAttr {
    pub fn int(&self) -> i64 {
        geekshelf_core::util::int_or_zero(&self.value)
    }

    pub fn float(&self) -> f64 {
        geekshelf_core::util::float_or_zero(&self.value)
    }
}

/// `<name type="primary|alternate" value=".."/>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameEntry {
    #[serde(rename = "@type", default)]
    pub kind: String,
    #[serde(rename = "@value", default)]
    pub value: String,
}

impl NameEntry {
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }
}

/// `<link type="boardgamecategory" id="1022" value="Adventure"/>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    #[serde(rename = "@type", default)]
    pub kind: String,
    #[serde(rename = "@id", default)]
    pub id: String,
    #[serde(rename = "@value", default)]
    pub value: String,
}

/// `<poll name=".."><results numplayers=".."><result value=".." numvotes=".."/>..`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollEntry {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "results", default)]
    pub results: Vec<PollResults>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollResults {
    #[serde(rename = "@numplayers", default)]
    pub num_players: String,
    #[serde(rename = "result", default)]
    pub result: Vec<PollResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollResult {
    #[serde(rename = "@value", default)]
    pub value: String,
    #[serde(rename = "@numvotes", default)]
    pub num_votes: String,
}

/// Integer out of a JSON value that may be a number or a numeric string.
pub(crate) fn json_int(value: &serde_json::Value) -> i64 {
    match value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
            .unwrap_or(0),
        serde_json::Value::String(s) => geekshelf_core::util::int_or_zero(s),
        _ => 0,
    }
}

/// Text out of a JSON value that may be a string or a number.
pub(crate) fn json_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

// ---------------------------------------------------------------------------
// xmlapi2/search
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchItems {
    #[serde(rename = "item", default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchItem {
    #[serde(rename = "@type", default)]
    pub kind: String,
    #[serde(rename = "@id", default)]
    pub id: String,
    #[serde(rename = "name", default)]
    pub names: Vec<NameEntry>,
    #[serde(default)]
    pub yearpublished: ValueAttr,
}

// ---------------------------------------------------------------------------
// xmlapi2/thing
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ThingItems {
    #[serde(rename = "item", default)]
    pub items: Vec<ThingItem>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ThingItem {
    #[serde(rename = "@type", default)]
    pub kind: String,
    #[serde(rename = "@id", default)]
    pub id: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub image: String,
    #[serde(rename = "name", default)]
    pub names: Vec<NameEntry>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub yearpublished: ValueAttr,
    #[serde(default)]
    pub minplayers: ValueAttr,
    #[serde(default)]
    pub maxplayers: ValueAttr,
    #[serde(rename = "poll", default)]
    pub polls: Vec<PollEntry>,
    #[serde(default)]
    pub playingtime: ValueAttr,
    #[serde(default)]
    pub minplaytime: ValueAttr,
    #[serde(default)]
    pub maxplaytime: ValueAttr,
    #[serde(default)]
    pub minage: ValueAttr,
    #[serde(rename = "link", default)]
    pub links: Vec<LinkEntry>,
    #[serde(default)]
    pub statistics: ThingStatistics,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ThingStatistics {
    #[serde(default)]
    pub ratings: ThingRatings,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ThingRatings {
    #[serde(default)]
    pub usersrated: ValueAttr,
    #[serde(default)]
    pub average: ValueAttr,
    #[serde(default)]
    pub bayesaverage: ValueAttr,
    #[serde(default)]
    pub ranks: RankList,
    #[serde(default)]
    pub owned: ValueAttr,
    #[serde(default)]
    pub trading: ValueAttr,
    #[serde(default)]
    pub wanting: ValueAttr,
    #[serde(default)]
    pub wishing: ValueAttr,
    #[serde(default)]
    pub numcomments: ValueAttr,
    #[serde(default)]
    pub numweights: ValueAttr,
    #[serde(default)]
    pub averageweight: ValueAttr,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RankList {
    #[serde(rename = "rank", default)]
    pub ranks: Vec<RankEntry>,
}

/// `<rank type="subtype|family" id="1" name="boardgame" friendlyname=".." value="12" bayesaverage=".."/>`
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RankEntry {
    #[serde(rename = "@type", default)]
    pub kind: String,
    #[serde(rename = "@id", default)]
    pub id: String,
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@friendlyname", default)]
    pub friendly_name: String,
    #[serde(rename = "@value", default)]
    pub value: String,
    #[serde(rename = "@bayesaverage", default)]
    pub bayes_average: String,
}

// ---------------------------------------------------------------------------
// xmlapi2/collection
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CollectionItems {
    #[serde(rename = "item", default)]
    pub items: Vec<CollectionEntryXml>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CollectionEntryXml {
    #[serde(rename = "@objecttype", default)]
    pub object_type: String,
    #[serde(rename = "@objectid", default)]
    pub object_id: String,
    #[serde(rename = "@subtype", default)]
    pub subtype: String,
    #[serde(rename = "@collid", default)]
    pub coll_id: String,
    #[serde(rename = "$text", default)]
    pub text: String,
    #[serde(default)]
    pub name: CollectionName,
    #[serde(default)]
    pub yearpublished: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub status: CollectionStatusXml,
    #[serde(default)]
    pub numplays: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CollectionName {
    #[serde(rename = "$text", default)]
    pub text: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CollectionStatusXml {
    #[serde(rename = "@own", default)]
    pub own: String,
    #[serde(rename = "@prevowned", default)]
    pub prev_owned: String,
    #[serde(rename = "@fortrade", default)]
    pub for_trade: String,
    #[serde(rename = "@want", default)]
    pub want: String,
    #[serde(rename = "@wanttoplay", default)]
    pub want_to_play: String,
    #[serde(rename = "@wanttotrade", default)]
    pub want_to_trade: String,
    #[serde(rename = "@wanttobuy", default)]
    pub want_to_buy: String,
    #[serde(rename = "@wishlist", default)]
    pub wishlist: String,
    #[serde(rename = "@preordered", default)]
    pub preordered: String,
    #[serde(rename = "@wishlistpriority", default)]
    pub wishlist_priority: String,
}

// ---------------------------------------------------------------------------
// xmlapi2/plays
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PlaysXml {
    #[serde(rename = "@username", default)]
    pub username: String,
    #[serde(rename = "@userid", default)]
    pub user_id: String,
    #[serde(rename = "@total", default)]
    pub total: String,
    #[serde(rename = "@page", default)]
    pub page: String,
    #[serde(rename = "play", default)]
    pub plays: Vec<PlayXml>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PlayXml {
    #[serde(rename = "@id", default)]
    pub id: String,
    #[serde(rename = "@date", default)]
    pub date: String,
    #[serde(rename = "@quantity", default)]
    pub quantity: String,
    #[serde(rename = "@length", default)]
    pub length: String,
    #[serde(rename = "@incomplete", default)]
    pub incomplete: String,
    #[serde(rename = "@nowinstats", default)]
    pub now_in_stats: String,
    #[serde(rename = "@location", default)]
    pub location: String,
    #[serde(default)]
    pub item: PlayItemXml,
    #[serde(default)]
    pub players: PlayersXml,
    #[serde(default)]
    pub comments: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PlayItemXml {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@objecttype", default)]
    pub object_type: String,
    #[serde(rename = "@objectid", default)]
    pub object_id: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PlayersXml {
    #[serde(rename = "player", default)]
    pub players: Vec<PlayerXml>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PlayerXml {
    #[serde(rename = "@username", default)]
    pub username: String,
    #[serde(rename = "@userid", default)]
    pub user_id: String,
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@startposition", default)]
    pub start_position: String,
    #[serde(rename = "@color", default)]
    pub color: String,
    #[serde(rename = "@score", default)]
    pub score: String,
    #[serde(rename = "@new", default)]
    pub new: String,
    #[serde(rename = "@rating", default)]
    pub rating: String,
    #[serde(rename = "@win", default)]
    pub win: String,
}

// ---------------------------------------------------------------------------
// xmlapi2/user, xmlapi2/person
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub(crate) struct UserXml {
    #[serde(rename = "@id", default)]
    pub id: String,
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(default)]
    pub firstname: ValueAttr,
    #[serde(default)]
    pub lastname: ValueAttr,
    #[serde(default)]
    pub avatarlink: ValueAttr,
    #[serde(default)]
    pub yearregistered: ValueAttr,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PersonItems {
    #[serde(default)]
    pub item: PersonItem,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PersonItem {
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub image: String,
}

// ---------------------------------------------------------------------------
// JSON feeds (api.geekdo.com and the site API)
// ---------------------------------------------------------------------------

/// `items` is required: a body without it is an envelope or garbage, not an
/// empty feed.
#[derive(Debug, Deserialize)]
pub(crate) struct HotnessJson {
    pub items: Vec<HotnessEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct HotnessEntry {
    #[serde(default)]
    pub id: serde_json::Value,
    #[serde(default)]
    pub objectid: serde_json::Value,
    #[serde(default)]
    pub delta: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TrendsJson {
    pub items: Vec<TrendEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct TrendEntry {
    #[serde(default)]
    pub item: FeedObject,
    #[serde(default)]
    pub delta: serde_json::Value,
    #[serde(default)]
    pub appearances: serde_json::Value,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct FeedObject {
    #[serde(default)]
    pub id: serde_json::Value,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeekListPage {
    pub data: Vec<GeekListEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GeekListEntry {
    #[serde(default)]
    pub item: FeedObject,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatsGraphJson {
    pub data: StatsGraphData,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct StatsGraphData {
    #[serde(default)]
    pub rows: Vec<StatsGraphRow>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct StatsGraphRow {
    #[serde(default)]
    pub c: Vec<StatsGraphCell>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct StatsGraphCell {
    #[serde(default)]
    pub v: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreatePlayResponse {
    #[serde(default)]
    pub playid: serde_json::Value,
    #[serde(default)]
    pub numplays: serde_json::Value,
    #[serde(default)]
    pub error: String,
}
