use std::collections::BTreeMap;

use geekshelf_core::util::{float_or_zero, int_or_zero};
use geekshelf_core::{FamilyRank, ItemType, ThingResult};

use crate::cancel::CancelToken;
use crate::client::BggClient;
use crate::decode::decode_xml;
use crate::error::BggError;
use crate::http::{Params, Transport};
use crate::normalize::{group_links, split_names, suggested_player_counts};
use crate::types::{RankEntry, ThingItem, ThingItems};

const THING_PATH: &str = "xmlapi2/thing";

/// Decode an `xmlapi2/thing` document fetched with `stats=1`.
pub fn decode_things(body: &[u8]) -> Result<Vec<ThingResult>, BggError> {
    let doc: ThingItems = decode_xml("thing", "items", body)?;
    Ok(doc.items.into_iter().map(thing_from_wire).collect())
}

fn thing_from_wire(item: ThingItem) -> ThingResult {
    let (name, alternate_names) = split_names(&item.names);
    let ratings = &item.statistics.ratings;
    let (rank_total, family) = scan_ranks(&ratings.ranks.ranks);

    ThingResult {
        id: int_or_zero(&item.id),
        name,
        alternate_names,
        item_type: ItemType::from_wire(&item.kind),
        year_published: item.yearpublished.int(),
        thumbnail: item.thumbnail.trim().to_string(),
        image: item.image.trim().to_string(),
        min_players: item.minplayers.int(),
        max_players: item.maxplayers.int(),
        suggested_player_count: suggested_player_counts(&item.polls),
        min_age: item.minage.int(),
        play_time: item.playingtime.value.clone(),
        min_play_time: item.minplaytime.value.clone(),
        max_play_time: item.maxplaytime.value.clone(),
        description: html_escape::decode_html_entities(&item.description).into_owned(),
        links: group_links(&item.links),
        users_rated: ratings.usersrated.int(),
        average_rate: ratings.average.float(),
        bayes_average: ratings.bayesaverage.float(),
        users_owned: ratings.owned.int(),
        users_trading: ratings.trading.int(),
        users_wanting: ratings.wanting.int(),
        users_wishing: ratings.wishing.int(),
        num_comments: ratings.numcomments.int(),
        num_weights: ratings.numweights.int(),
        average_weight: ratings.averageweight.float(),
        rank_total,
        family,
    }
}

/// Overall rank from the `subtype`/`boardgame` entry, family ranks keyed by
/// family name.
fn scan_ranks(ranks: &[RankEntry]) -> (i64, BTreeMap<String, FamilyRank>) {
    let mut total = 0;
    let mut family = BTreeMap::new();

    for rank in ranks {
        match rank.kind.as_str() {
            "subtype" if rank.name == "boardgame" => total = int_or_zero(&rank.value),
            "family" => {
                family.insert(
                    rank.name.clone(),
                    FamilyRank {
                        id: int_or_zero(&rank.id),
                        name: rank.name.clone(),
                        friendly_name: rank.friendly_name.clone(),
                        rank: int_or_zero(&rank.value),
                        bayes_average: float_or_zero(&rank.bayes_average),
                    },
                );
            }
            _ => {}
        }
    }

    (total, family)
}

impl<T: Transport> BggClient<T> {
    /// Fetch full records, statistics included, for one or more things.
    pub async fn get_things(
        &self,
        cancel: &CancelToken,
        ids: &[i64],
    ) -> Result<Vec<ThingResult>, BggError> {
        if ids.is_empty() {
            return Err(BggError::invalid("thing", "at least one id is required"));
        }

        let mut params = Params::new();
        let ids: Vec<String> = ids.iter().map(i64::to_string).collect();
        params.insert("id", ids.join(","));
        params.insert("stats", "1".to_string());

        let response = self.get_ok(cancel, "thing", THING_PATH, &params).await?;
        decode_things(&response.body)
    }
}

#[cfg(test)]
#[path = "tests/thing_tests.rs"]
mod tests;
