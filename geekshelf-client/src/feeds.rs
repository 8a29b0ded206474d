//! Site feeds outside the XML API: hotness, trends and geek lists on
//! `api.geekdo.com`, plus the HTML browse pages.

use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::NaiveDate;
use geekshelf_core::util::DATE_FORMAT;
use geekshelf_core::{IdDelta, ListItem, TrendInterval, TrendOutput};
use regex::Regex;

use crate::cancel::CancelToken;
use crate::client::BggClient;
use crate::decode::decode_json;
use crate::error::BggError;
use crate::http::{Params, Transport};
use crate::types::{GeekListPage, HotnessJson, TrendsJson, json_int};

const HOTNESS_URL: &str = "https://api.geekdo.com/api/hotness";
const GEEKLIST_URL: &str = "https://api.geekdo.com/api/listitems";
const TREND_OWNERSHIP_URL: &str = "https://api.geekdo.com/api/trends/ownership";
const TREND_PLAYS_URL: &str = "https://api.geekdo.com/api/trends/plays";
const TREND_PLAYS_DELTA_URL: &str = "https://api.geekdo.com/api/trends/plays_delta";

/// Largest hotness list upstream serves; also the default.
pub const MAX_HOTNESS: u32 = 50;

/// Upper bound on the pages [`BggClient::geek_list`] will fetch.
pub const MAX_GEEKLIST_PAGES: u32 = 1000;

static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment pattern"));
static ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<a\s((?:[^>"']|"[^"]*"|'[^']*')*)>"#).expect("anchor pattern")
});
static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([^\s=/>"']+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s>"']+)))?"#)
        .expect("attribute pattern")
});
static BOARDGAME_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/boardgame/(\d+)").expect("boardgame id pattern"));

pub fn decode_hotness(body: &[u8]) -> Result<Vec<IdDelta>, BggError> {
    let doc: HotnessJson = decode_json("hotness", body)?;
    Ok(doc
        .items
        .iter()
        .map(|item| {
            let id = match json_int(&item.id) {
                0 => json_int(&item.objectid),
                id => id,
            };
            IdDelta {
                id,
                delta: json_int(&item.delta),
            }
        })
        .collect())
}

pub fn decode_trends(operation: &'static str, body: &[u8]) -> Result<Vec<TrendOutput>, BggError> {
    let doc: TrendsJson = decode_json(operation, body)?;
    Ok(doc
        .items
        .iter()
        .map(|entry| TrendOutput {
            id: json_int(&entry.item.id),
            delta: json_int(&entry.delta),
            appearances: json_int(&entry.appearances),
        })
        .collect())
}

/// One page of a geek list; an empty page marks the end.
pub fn decode_geeklist_page(body: &[u8]) -> Result<Vec<ListItem>, BggError> {
    let page: GeekListPage = decode_json("geeklist", body)?;
    Ok(page
        .data
        .into_iter()
        .map(|entry| ListItem {
            id: json_int(&entry.item.id),
            name: entry.item.name,
            description: entry.body,
        })
        .collect())
}

/// Ids of the games listed on a browse page, in page order.
///
/// Only `<a class="primary" href="/boardgame/{id}/...">` anchors count.
/// Attributes may come in any order, with any quoting; commented-out
/// markup is skipped.
pub fn extract_top_ids(html: &str) -> Vec<i64> {
    let html = COMMENT.replace_all(html, "");
    ANCHOR
        .captures_iter(&html)
        .filter_map(|anchor| {
            let attrs = anchor.get(1)?.as_str();
            if attribute(attrs, "class")?.trim() != "primary" {
                return None;
            }
            let href = attribute(attrs, "href")?;
            BOARDGAME_ID.captures(&href)?.get(1)?.as_str().parse().ok()
        })
        .collect()
}

/// Value of the first attribute called `name`, entities decoded.
fn attribute<'a>(attrs: &'a str, name: &str) -> Option<Cow<'a, str>> {
    let found = ATTRIBUTE
        .captures_iter(attrs)
        .find(|attr| attr[1].eq_ignore_ascii_case(name))?;
    let value = (2..=4)
        .find_map(|group| found.get(group))
        .map_or("", |m| m.as_str());
    Some(html_escape::decode_html_entities(value))
}

fn trend_params(interval: TrendInterval, start: NaiveDate) -> Params {
    let mut params = Params::new();
    params.insert("interval", interval.as_str().to_string());
    params.insert(
        "startDate",
        interval.window_start(start).format(DATE_FORMAT).to_string(),
    );
    params
}

impl<T: Transport> BggClient<T> {
    /// The "hotness" list. `count` outside 1..=50 asks for 50.
    pub async fn hotness(&self, cancel: &CancelToken, count: u32) -> Result<Vec<IdDelta>, BggError> {
        let count = if (1..=MAX_HOTNESS).contains(&count) {
            count
        } else {
            MAX_HOTNESS
        };

        let mut params = Params::new();
        params.insert("geeksite", "boardgame".to_string());
        params.insert("objecttype", "thing".to_string());
        params.insert("showcount", count.to_string());

        let response = self.get_ok(cancel, "hotness", HOTNESS_URL, &params).await?;
        decode_hotness(&response.body)
    }

    /// Ids listed on page `page` of the overall ranking.
    pub async fn top_pages(&self, cancel: &CancelToken, page: u32) -> Result<Vec<i64>, BggError> {
        let page = page.max(1);
        let path = format!("browse/boardgame/page/{page}");
        let response = self.get_ok(cancel, "top_pages", &path, &Params::new()).await?;
        let html = String::from_utf8_lossy(&response.body);
        Ok(extract_top_ids(&html))
    }

    /// Weekly best sellers; `start` snaps back to its Monday.
    pub async fn best_sellers(
        &self,
        cancel: &CancelToken,
        start: NaiveDate,
    ) -> Result<Vec<TrendOutput>, BggError> {
        let params = trend_params(TrendInterval::Week, start);
        let response = self
            .get_ok(cancel, "best_sellers", TREND_OWNERSHIP_URL, &params)
            .await?;
        decode_trends("best_sellers", &response.body)
    }

    /// Most played games over the window containing `start`.
    pub async fn most_plays(
        &self,
        cancel: &CancelToken,
        interval: TrendInterval,
        start: NaiveDate,
    ) -> Result<Vec<TrendOutput>, BggError> {
        let params = trend_params(interval, start);
        let response = self
            .get_ok(cancel, "most_plays", TREND_PLAYS_URL, &params)
            .await?;
        decode_trends("most_plays", &response.body)
    }

    /// Games whose play counts moved the most over the window containing `start`.
    pub async fn trending_plays(
        &self,
        cancel: &CancelToken,
        interval: TrendInterval,
        start: NaiveDate,
    ) -> Result<Vec<TrendOutput>, BggError> {
        let params = trend_params(interval, start);
        let response = self
            .get_ok(cancel, "trending_plays", TREND_PLAYS_DELTA_URL, &params)
            .await?;
        decode_trends("trending_plays", &response.body)
    }

    /// Every entry of a geek list, walking pages until one comes back empty.
    ///
    /// A page that repeats the previous one ends the walk, as does reaching
    /// [`MAX_GEEKLIST_PAGES`].
    pub async fn geek_list(&self, cancel: &CancelToken, list_id: i64) -> Result<Vec<ListItem>, BggError> {
        let mut items = Vec::new();
        let mut previous: Vec<i64> = Vec::new();
        for page in 1..=MAX_GEEKLIST_PAGES {
            let mut params = Params::new();
            params.insert("listid", list_id.to_string());
            params.insert("page", page.to_string());

            let response = self.get_ok(cancel, "geeklist", GEEKLIST_URL, &params).await?;
            let entries = decode_geeklist_page(&response.body)?;
            if entries.is_empty() {
                break;
            }
            let ids: Vec<i64> = entries.iter().map(|entry| entry.id).collect();
            if ids == previous {
                log::warn!("geeklist {list_id}: page {page} repeats page {}, stopping", page - 1);
                break;
            }
            log::debug!("geeklist {list_id}: page {page} has {} entries", entries.len());
            items.extend(entries);
            previous = ids;
        }
        Ok(items)
    }
}

#[cfg(test)]
#[path = "tests/feeds_tests.rs"]
mod tests;
