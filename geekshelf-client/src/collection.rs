//! `xmlapi2/collection`: options, the deferred-response retry loop and the
//! decoder.
//!
//! Upstream builds collection reports asynchronously. Until a report is
//! ready it answers `202 Accepted`, and the request has to be repeated. No
//! other endpoint behaves this way, so the retry lives here rather than in
//! the shared send path.

use std::time::Duration;

use chrono::NaiveDate;
use geekshelf_core::util::int_or_zero;
use geekshelf_core::{CollectionItem, CollectionType, ItemType, StatusCounters};

use crate::cancel::CancelToken;
use crate::client::BggClient;
use crate::decode::decode_xml;
use crate::error::BggError;
use crate::http::{HttpRequest, Params, Transport};
use crate::types::{CollectionEntryXml, CollectionItems};

const COLLECTION_PATH: &str = "xmlapi2/collection";

/// Status of a collection report that is still being prepared.
pub const STATUS_ACCEPTED: u16 = 202;

/// Upper bound of a single wait between polls.
pub const MAX_BACKOFF: Duration = Duration::from_secs(30);

/// `modifiedsince` takes a two-digit year.
const MODIFIED_SINCE_FORMAT: &str = "%y-%m-%d";

/// Delays between polls of a deferred collection: the n-th wait is n seconds
/// longer than the previous one (1s, 3s, 6s, 10s, ...), capped at
/// [`MAX_BACKOFF`].
#[derive(Debug, Clone, Default)]
pub struct Backoff {
    attempt: u64,
    delay: Duration,
}

impl Backoff {
    pub fn next_delay(&mut self) -> Duration {
        self.attempt += 1;
        self.delay = (self.delay + Duration::from_secs(self.attempt)).min(MAX_BACKOFF);
        self.delay
    }
}

/// Filters of [`BggClient::get_collection`].
///
/// Rating filters outside 1..=10 are ignored, as are zero play counts and
/// non-positive ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionOptions {
    /// Each listed type is sent as `type=1`.
    pub types: Vec<CollectionType>,
    pub version: bool,
    pub subtype: Option<ItemType>,
    pub exclude_subtype: Option<ItemType>,
    pub stats: bool,
    pub min_rating: Option<u8>,
    pub rating: Option<u8>,
    pub min_bgg_rating: Option<u8>,
    pub bgg_rating: Option<u8>,
    pub min_plays: Option<u32>,
    pub max_plays: Option<u32>,
    pub ids: Vec<i64>,
    pub coll_id: Option<i64>,
    pub modified_since: Option<NaiveDate>,
}

impl CollectionOptions {
    pub fn types(mut self, types: impl IntoIterator<Item = CollectionType>) -> Self {
        self.types = types.into_iter().collect();
        self
    }

    pub fn version(mut self, version: bool) -> Self {
        self.version = version;
        self
    }

    pub fn subtype(mut self, subtype: ItemType) -> Self {
        self.subtype = Some(subtype);
        self
    }

    pub fn exclude_subtype(mut self, subtype: ItemType) -> Self {
        self.exclude_subtype = Some(subtype);
        self
    }

    /// Ask for the `<stats>` block; needed for the `rated` status tag.
    pub fn stats(mut self, stats: bool) -> Self {
        self.stats = stats;
        self
    }

    pub fn min_rating(mut self, rating: u8) -> Self {
        self.min_rating = Some(rating);
        self
    }

    pub fn rating(mut self, rating: u8) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn min_bgg_rating(mut self, rating: u8) -> Self {
        self.min_bgg_rating = Some(rating);
        self
    }

    pub fn bgg_rating(mut self, rating: u8) -> Self {
        self.bgg_rating = Some(rating);
        self
    }

    pub fn min_plays(mut self, plays: u32) -> Self {
        self.min_plays = Some(plays);
        self
    }

    pub fn max_plays(mut self, plays: u32) -> Self {
        self.max_plays = Some(plays);
        self
    }

    pub fn ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.ids = ids.into_iter().collect();
        self
    }

    pub fn coll_id(mut self, coll_id: i64) -> Self {
        self.coll_id = Some(coll_id);
        self
    }

    pub fn modified_since(mut self, date: NaiveDate) -> Self {
        self.modified_since = Some(date);
        self
    }

    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        let mut set_if = |cond: bool, key: &'static str, value: String| {
            if cond {
                params.insert(key, value);
            }
        };
        let valid_rating = |r: Option<u8>| r.filter(|r| (1..=10).contains(r));
        let positive = |n: Option<u32>| n.filter(|n| *n > 0);

        set_if(self.version, "version", "1".to_string());
        set_if(self.stats, "stats", "1".to_string());
        if let Some(subtype) = &self.subtype {
            set_if(true, "subtype", subtype.as_str().to_string());
        }
        if let Some(subtype) = &self.exclude_subtype {
            set_if(true, "excludesubtype", subtype.as_str().to_string());
        }
        for (key, value) in [
            ("minrating", valid_rating(self.min_rating)),
            ("rating", valid_rating(self.rating)),
            ("minbggrating", valid_rating(self.min_bgg_rating)),
            ("bggrating", valid_rating(self.bgg_rating)),
        ] {
            if let Some(value) = value {
                set_if(true, key, value.to_string());
            }
        }
        if let Some(plays) = positive(self.min_plays) {
            set_if(true, "minplays", plays.to_string());
        }
        if let Some(plays) = positive(self.max_plays) {
            set_if(true, "maxplays", plays.to_string());
        }
        if let Some(coll_id) = self.coll_id.filter(|id| *id > 0) {
            set_if(true, "collid", coll_id.to_string());
        }
        if let Some(date) = self.modified_since {
            set_if(
                true,
                "modifiedsince",
                date.format(MODIFIED_SINCE_FORMAT).to_string(),
            );
        }
        for kind in &self.types {
            set_if(true, kind.as_str(), "1".to_string());
        }

        let ids: Vec<String> = self
            .ids
            .iter()
            .filter(|id| **id > 0)
            .map(i64::to_string)
            .collect();
        set_if(!ids.is_empty(), "id", ids.join(","));

        params
    }
}

/// Decode an `xmlapi2/collection` document.
pub fn decode_collection(body: &[u8]) -> Result<Vec<CollectionItem>, BggError> {
    let doc: CollectionItems = decode_xml("collection", "items", body)?;
    Ok(doc.items.into_iter().map(item_from_wire).collect())
}

fn item_from_wire(item: CollectionEntryXml) -> CollectionItem {
    let status = &item.status;
    let num_plays = int_or_zero(&item.numplays);
    let counters = StatusCounters {
        own: int_or_zero(&status.own),
        prev_owned: int_or_zero(&status.prev_owned),
        for_trade: int_or_zero(&status.for_trade),
        want: int_or_zero(&status.want),
        want_to_play: int_or_zero(&status.want_to_play),
        want_to_trade: int_or_zero(&status.want_to_trade),
        want_to_buy: int_or_zero(&status.want_to_buy),
        wishlist: int_or_zero(&status.wishlist),
        preordered: int_or_zero(&status.preordered),
        wishlist_priority: int_or_zero(&status.wishlist_priority),
        num_plays,
    };

    let kind = if item.subtype.is_empty() {
        &item.object_type
    } else {
        &item.subtype
    };

    CollectionItem {
        id: int_or_zero(&item.object_id),
        coll_id: int_or_zero(&item.coll_id),
        name: item.name.text.trim().to_string(),
        description: html_escape::decode_html_entities(&item.text)
            .trim_matches(|c| c == '\n' || c == '\t' || c == ' ')
            .to_string(),
        item_type: ItemType::from_wire(kind),
        year_published: int_or_zero(&item.yearpublished),
        thumbnail: item.thumbnail.trim().to_string(),
        image: item.image.trim().to_string(),
        num_plays,
        collection_status: counters.tags(),
    }
}

impl<T: Transport> BggClient<T> {
    /// Fetch a user's collection.
    ///
    /// While upstream answers 202 the request is repeated after a
    /// [`Backoff`] delay. Cancelling `cancel` during a wait ends the call
    /// with [`BggError::Cancelled`] without another request.
    pub async fn get_collection(
        &self,
        cancel: &CancelToken,
        username: &str,
        options: &CollectionOptions,
    ) -> Result<Vec<CollectionItem>, BggError> {
        const OP: &str = "collection";
        if username.trim().is_empty() {
            return Err(BggError::invalid(OP, "username must not be empty"));
        }

        let mut params = options.to_params();
        params.insert("username", username.to_string());
        let url = self.url(OP, COLLECTION_PATH, &params)?;

        let mut backoff = Backoff::default();
        let response = loop {
            let response = self.send(cancel, OP, HttpRequest::get(url.clone())).await?;
            match response.status {
                200 => break response,
                STATUS_ACCEPTED => {
                    let delay = backoff.next_delay();
                    log::debug!(
                        "collection of {username} is not ready, retrying in {}s",
                        delay.as_secs()
                    );
                    cancel.sleep(OP, delay).await?;
                }
                status => return Err(BggError::status(OP, status)),
            }
        };

        decode_collection(&response.body)
    }
}

#[cfg(test)]
#[path = "tests/collection_tests.rs"]
mod tests;
