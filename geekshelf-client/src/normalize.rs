//! Normalizers for the repeated, type-tagged elements of item documents.

use std::collections::BTreeMap;

use geekshelf_core::util::int_or_zero;
use geekshelf_core::{Link, SUGGESTED_PLAYERS_POLL, SuggestedPlayerCount, ThreeRating};

use crate::types::{LinkEntry, NameEntry, PollEntry};

/// Split a name list into the primary name and the alternates.
///
/// If several entries claim to be primary the last one wins. Entries of any
/// other type are logged and dropped.
pub fn split_names(entries: &[NameEntry]) -> (String, Vec<String>) {
    let mut primary = String::new();
    let mut alternates = Vec::new();

    for entry in entries {
        match entry.kind.as_str() {
            "primary" => primary = entry.value.clone(),
            "alternate" => alternates.push(entry.value.clone()),
            other => log::warn!("unrecognized name type {other:?} for {:?}", entry.value),
        }
    }

    (primary, alternates)
}

/// Group links by their category, keeping upstream order inside a category.
pub fn group_links(entries: &[LinkEntry]) -> BTreeMap<String, Vec<Link>> {
    let mut links: BTreeMap<String, Vec<Link>> = BTreeMap::new();
    for entry in entries {
        links.entry(entry.kind.clone()).or_default().push(Link {
            id: int_or_zero(&entry.id),
            name: entry.value.clone(),
        });
    }
    links
}

/// Player-count votes out of the item's polls.
pub fn suggested_player_counts(polls: &[PollEntry]) -> Vec<SuggestedPlayerCount> {
    polls
        .iter()
        .filter(|poll| poll.name == SUGGESTED_PLAYERS_POLL)
        .flat_map(|poll| &poll.results)
        .map(|bucket| {
            let mut count = SuggestedPlayerCount::new(bucket.num_players.clone());
            for result in &bucket.result {
                if let Some(rating) = ThreeRating::from_label(&result.value) {
                    count.set_votes(rating, int_or_zero(&result.num_votes));
                }
            }
            count
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;
