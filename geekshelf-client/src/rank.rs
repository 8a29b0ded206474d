use std::fmt;

use geekshelf_core::RankBreakdown;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::cancel::CancelToken;
use crate::client::BggClient;
use crate::decode::decode_json;
use crate::envelope::envelope_message;
use crate::error::BggError;
use crate::http::{HttpMethod, HttpRequest, Params, Transport};
use crate::types::{StatsGraphJson, json_int, json_text};

const RANK_GRAPH_PATH: &str = "api/collectionstatsgraph";
const COLLECTIONS_PATH: &str = "api/collections";
const COLLECTION_ITEM_PATH: &str = "api/collectionitems";

/// Decode the rating bar chart of `api/collectionstatsgraph`.
///
/// Each row is `[rating, count]`; rows with fewer than two cells fail the
/// decode, ratings outside 1..=10 are skipped.
pub fn decode_rank_breakdown(body: &[u8]) -> Result<RankBreakdown, BggError> {
    const OP: &str = "rank_breakdown";
    let graph: StatsGraphJson = decode_json(OP, body)?;

    let mut breakdown = RankBreakdown::default();
    for (i, row) in graph.data.rows.iter().enumerate() {
        if row.c.len() < 2 {
            return Err(BggError::decode(
                OP,
                format!("row {i} has {} columns, expected at least 2", row.c.len()),
            ));
        }
        breakdown.record(json_int(&row.c[0].v), json_int(&row.c[1].v));
    }
    Ok(breakdown)
}

/// Reject ratings outside 0 < `rating` <= 10 before anything is sent.
pub fn check_rating(rating: f64) -> Result<(), BggError> {
    if rating > 0.0 && rating <= 10.0 {
        Ok(())
    } else {
        Err(BggError::invalid(
            "set_rank",
            format!("rating {rating} is outside (0, 10]"),
        ))
    }
}

/// A user's collection entry as the site JSON API returns it.
///
/// Only `rating` is typed. `collid` and `objectid` keep the JSON value
/// upstream sent, and every other key is kept in `extra` in upstream order;
/// all of them are written back unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionEntry {
    pub coll_id: Option<Value>,
    pub object_id: Option<Value>,
    pub rating: Option<f64>,
    pub extra: Vec<(String, Value)>,
}

impl CollectionEntry {
    /// Id of the entry as used in `api/collectionitems/{id}`, empty if missing.
    pub fn collection_id(&self) -> String {
        self.coll_id.as_ref().map(json_text).unwrap_or_default()
    }

    pub fn thing_id(&self) -> i64 {
        self.object_id.as_ref().map_or(0, json_int)
    }
}

impl<'de> Deserialize<'de> for CollectionEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = CollectionEntry;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a collection item object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<CollectionEntry, A::Error> {
                let mut entry = CollectionEntry::default();
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    match key.as_str() {
                        "collid" => entry.coll_id = Some(value),
                        "objectid" => entry.object_id = Some(value),
                        "rating" => {
                            entry.rating = match &value {
                                Value::Number(n) => n.as_f64(),
                                Value::String(s) => s.trim().parse().ok(),
                                _ => None,
                            }
                        }
                        _ => entry.extra.push((key, value)),
                    }
                }
                Ok(entry)
            }
        }

        deserializer.deserialize_map(EntryVisitor)
    }
}

impl Serialize for CollectionEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.extra.len() + 3))?;
        if let Some(coll_id) = &self.coll_id {
            map.serialize_entry("collid", coll_id)?;
        }
        if let Some(object_id) = &self.object_id {
            map.serialize_entry("objectid", object_id)?;
        }
        map.serialize_entry("rating", &self.rating)?;
        for (key, value) in &self.extra {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[derive(Debug, Deserialize)]
struct CollectionEntries {
    items: Vec<CollectionEntry>,
}

#[derive(Debug, Serialize)]
struct UpdateEntry<'a> {
    item: &'a CollectionEntry,
}

impl<T: Transport> BggClient<T> {
    /// Rating histogram of a thing.
    pub async fn get_rank_breakdown(
        &self,
        cancel: &CancelToken,
        object_id: i64,
    ) -> Result<RankBreakdown, BggError> {
        let mut params = Params::new();
        params.insert("objectid", object_id.to_string());
        params.insert("objecttype", "thing".to_string());
        params.insert("type", "BarChart".to_string());

        let response = self
            .get_ok(cancel, "rank_breakdown", RANK_GRAPH_PATH, &params)
            .await?;
        decode_rank_breakdown(&response.body)
    }

    /// Entries of the logged-in user's collection for one thing.
    pub async fn my_collection_entries(
        &self,
        cancel: &CancelToken,
        object_id: i64,
    ) -> Result<Vec<CollectionEntry>, BggError> {
        const OP: &str = "set_rank";
        let session = self.require_login(OP).await?;
        let username = session
            .username
            .filter(|name| !name.is_empty())
            .ok_or(BggError::NotLoggedIn { operation: OP })?;

        let user = self.get_user(cancel, &username).await?;

        let mut params = Params::new();
        params.insert("objectid", object_id.to_string());
        params.insert("objecttype", "thing".to_string());
        params.insert("userid", user.user_id.to_string());

        let response = self.get_ok(cancel, OP, COLLECTIONS_PATH, &params).await?;
        let entries: CollectionEntries = decode_json(OP, &response.body)?;
        Ok(entries.items)
    }

    /// Set the logged-in user's rating of a thing, 0 < `rating` <= 10.
    ///
    /// The thing has to be in the user's collection already.
    pub async fn set_rank(
        &self,
        cancel: &CancelToken,
        object_id: i64,
        rating: f64,
    ) -> Result<(), BggError> {
        const OP: &str = "set_rank";
        check_rating(rating)?;

        let mut entry = self
            .my_collection_entries(cancel, object_id)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                BggError::upstream(OP, format!("thing {object_id} is not in the collection"))
            })?;
        let coll_id = entry.collection_id();
        if coll_id.is_empty() {
            return Err(BggError::decode(OP, "collection entry has no collid"));
        }

        entry.rating = Some(rating);
        let path = format!("{COLLECTION_ITEM_PATH}/{coll_id}");
        let url = self.url(OP, &path, &Params::new())?;
        let request = HttpRequest::json(HttpMethod::Put, url, &UpdateEntry { item: &entry })
            .map_err(|e| BggError::invalid(OP, format!("cannot encode entry: {e}")))?;

        let response = self.send(cancel, OP, request).await?;
        if !response.is_success() {
            return Err(match envelope_message(&response.body) {
                Some(message) => BggError::upstream(OP, message),
                None => BggError::status(OP, response.status),
            });
        }
        log::info!("rated thing {object_id} {rating}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn breakdown_rows() {
        let body = br#"{"type":"BarChart","options":{},"data":{"cols":[],"rows":[
            {"c":[{"v":1},{"v":10}]},
            {"c":[{"v":"2"},{"v":"20"}]},
            {"c":[{"v":10},{"v":5,"f":"5"}]},
            {"c":[{"v":11},{"v":99}]},
            {"c":[{"v":0},{"v":99}]}
        ]}}"#;
        let breakdown = decode_rank_breakdown(body).unwrap();
        assert_eq!(breakdown.0, [10, 20, 0, 0, 0, 0, 0, 0, 0, 5]);
        assert_eq!(breakdown.total(), 35);
    }

    #[test]
    fn breakdown_short_row_fails() {
        let body = br#"{"data":{"rows":[{"c":[{"v":1},{"v":10}]},{"c":[{"v":2}]}]}}"#;
        let err = decode_rank_breakdown(body).unwrap_err();
        assert!(matches!(err, BggError::Decode { .. }));
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn breakdown_envelope() {
        let err = decode_rank_breakdown(br#"{"message":"Object not found"}"#).unwrap_err();
        assert!(err.to_string().contains("Object not found"));
    }

    #[test]
    fn entry_keeps_unknown_fields_in_order() {
        let raw = json!({
            "collid": "55501",
            "objectid": "13",
            "objecttype": "thing",
            "rating": null,
            "status": {"own": true},
            "textfield": {"comment": {"value": "nice"}}
        });
        let mut entry: CollectionEntry = serde_json::from_value(raw).unwrap();
        assert_eq!(entry.collection_id(), "55501");
        assert_eq!(entry.thing_id(), 13);
        assert_eq!(entry.rating, None);
        let keys: Vec<&str> = entry.extra.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["objecttype", "status", "textfield"]);

        entry.rating = Some(8.5);
        let back = serde_json::to_value(&UpdateEntry { item: &entry }).unwrap();
        assert_eq!(back["item"]["collid"], "55501");
        assert_eq!(back["item"]["objectid"], "13");
        assert_eq!(back["item"]["rating"], 8.5);
        assert_eq!(back["item"]["status"]["own"], true);
        assert_eq!(back["item"]["textfield"]["comment"]["value"], "nice");
    }

    #[test]
    fn numeric_ids_are_written_back_as_numbers() {
        let entry: CollectionEntry =
            serde_json::from_value(json!({"collid": 7, "objectid": 13, "rating": "6"})).unwrap();
        assert_eq!(entry.collection_id(), "7");
        assert_eq!(entry.thing_id(), 13);
        assert_eq!(entry.rating, Some(6.0));

        let back = serde_json::to_value(&entry).unwrap();
        assert_eq!(back, json!({"collid": 7, "objectid": 13, "rating": 6.0}));
    }

    #[test]
    fn missing_ids_stay_missing() {
        let entry: CollectionEntry = serde_json::from_value(json!({"rating": 3})).unwrap();
        assert_eq!(entry.collection_id(), "");
        let back = serde_json::to_value(&entry).unwrap();
        assert_eq!(back, json!({"rating": 3.0}));
    }
}
