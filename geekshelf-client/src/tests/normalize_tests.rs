use serde::{Deserialize, Serialize};

use super::*;
use crate::types::{PollResult, PollResults};

#[derive(Debug, Serialize, Deserialize)]
struct NameList {
    #[serde(rename = "name", default)]
    names: Vec<NameEntry>,
}

fn link(kind: &str, id: &str, value: &str) -> LinkEntry {
    LinkEntry {
        kind: kind.to_string(),
        id: id.to_string(),
        value: value.to_string(),
    }
}

#[test]
fn split_names_round_trip() {
    let list = NameList {
        names: vec![
            NameEntry::new("primary", "Gloomhaven"),
            NameEntry::new("alternate", "Глумхэвен"),
            NameEntry::new("alternate", "幽港迷城"),
        ],
    };
    let xml = quick_xml::se::to_string_with_root("item", &list).unwrap();
    let decoded: NameList = quick_xml::de::from_str(&xml).unwrap();

    let (primary, alternates) = split_names(&decoded.names);
    assert_eq!(primary, "Gloomhaven");
    assert_eq!(alternates, vec!["Глумхэвен", "幽港迷城"]);
}

#[test]
fn split_names_drops_unknown_types() {
    let names = vec![
        NameEntry::new("alternate", "B"),
        NameEntry::new("nickname", "C"),
        NameEntry::new("primary", "A"),
    ];
    let (primary, alternates) = split_names(&names);
    assert_eq!(primary, "A");
    assert_eq!(alternates, vec!["B"]);
}

#[test]
fn split_names_last_primary_wins() {
    let names = vec![NameEntry::new("primary", "First"), NameEntry::new("primary", "Second")];
    assert_eq!(split_names(&names).0, "Second");
}

#[test]
fn split_names_empty() {
    let (primary, alternates) = split_names(&[]);
    assert!(primary.is_empty());
    assert!(alternates.is_empty());
}

#[test]
fn group_links_preserves_order() {
    let entries = vec![
        link("cat1", "1", "one"),
        link("cat2", "4", "four"),
        link("cat1", "2", "two"),
        link("cat1", "3", "three"),
        link("cat2", "5", "five"),
    ];
    let grouped = group_links(&entries);

    let ids = |cat: &str| grouped[cat].iter().map(|l| l.id).collect::<Vec<_>>();
    assert_eq!(grouped.len(), 2);
    assert_eq!(ids("cat1"), vec![1, 2, 3]);
    assert_eq!(ids("cat2"), vec![4, 5]);
    assert_eq!(grouped["cat1"][1].name, "two");
}

#[test]
fn group_links_keeps_incomplete_and_duplicate_links() {
    let entries = vec![
        link("boardgamemechanic", "", "Dice Rolling"),
        link("boardgamemechanic", "2072", ""),
        link("boardgamemechanic", "2072", ""),
    ];
    let grouped = group_links(&entries);
    let mechanics = &grouped["boardgamemechanic"];
    assert_eq!(mechanics.len(), 3);
    assert_eq!(mechanics[0].id, 0);
    assert_eq!(mechanics[0].name, "Dice Rolling");
    assert_eq!(mechanics[1].name, "");
}

fn bucket(players: &str, votes: &[(&str, &str)]) -> PollResults {
    PollResults {
        num_players: players.to_string(),
        result: votes
            .iter()
            .map(|(value, n)| PollResult {
                value: value.to_string(),
                num_votes: n.to_string(),
            })
            .collect(),
    }
}

#[test]
fn suggested_counts_from_named_poll_only() {
    let polls = vec![
        PollEntry {
            name: "suggested_playerage".to_string(),
            results: vec![bucket("", &[("10", "4")])],
        },
        PollEntry {
            name: "suggested_numplayers".to_string(),
            results: vec![
                bucket("1", &[("Best", "1"), ("Recommended", "10"), ("Not Recommended", "30")]),
                bucket("4+", &[("Best", "2"), ("Meh", "99"), ("Not Recommended", "")]),
            ],
        },
    ];

    let counts = suggested_player_counts(&polls);
    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].num_players, "1");
    assert_eq!(
        (counts[0].best, counts[0].recommended, counts[0].not_recommended),
        (1, 10, 30)
    );
    assert_eq!(counts[1].num_players, "4+");
    assert_eq!(
        (counts[1].best, counts[1].recommended, counts[1].not_recommended),
        (2, 0, 0)
    );
}

#[test]
fn suggested_counts_without_poll() {
    assert!(suggested_player_counts(&[]).is_empty());
}
