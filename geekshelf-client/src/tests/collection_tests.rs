use std::collections::BTreeSet;

use geekshelf_core::{StatusTag, WishlistPriority};

use super::*;

const COLLECTION_XML: &str = r#"<?xml version="1.0" encoding="utf-8" standalone="yes"?>
<items totalitems="3" termsofuse="https://boardgamegeek.com/xmlapi/termsofuse" pubdate="Sat, 01 Mar 2025 10:00:00 +0000">
    <item objecttype="thing" objectid="174430" subtype="boardgame" collid="98765">
        <name sortindex="1">Gloomhaven</name>
        <yearpublished>2017</yearpublished>
        <image>https://cf.geekdo-images.com/original/img/gloomhaven.jpg</image>
        <thumbnail>https://cf.geekdo-images.com/thumb/img/gloomhaven.jpg</thumbnail>
        <status own="1" prevowned="0" fortrade="0" want="0" wanttoplay="0" wanttobuy="0" wishlist="0" preordered="0" lastmodified="2024-01-01 10:00:00" />
        <numplays>3</numplays>
    </item>
    <item objecttype="thing" objectid="13" subtype="boardgame" collid="98766">
        <name sortindex="1">CATAN</name>
        <yearpublished>1995</yearpublished>
        <stats minplayers="3" maxplayers="4">
            <rating value="7.5">
                <usersrated value="100000" />
            </rating>
        </stats>
        <status own="0" prevowned="1" fortrade="1" want="0" wanttoplay="0" wanttotrade="1" wanttobuy="0" wishlist="1" wishlistpriority="2" preordered="0" lastmodified="2023-01-01 10:00:00" />
        <numplays>0</numplays>
        <comment>Sold it.</comment>
    </item>
    <item objecttype="thing" objectid="999" collid="1">
        <name sortindex="1">Mystery &amp; Co</name>
        <yearpublished></yearpublished>
        <status own="0" />
    </item>
</items>"#;

fn tags(list: &[StatusTag]) -> BTreeSet<StatusTag> {
    list.iter().copied().collect()
}

#[test]
fn own_and_played() {
    let items = decode_collection(COLLECTION_XML.as_bytes()).unwrap();
    assert_eq!(items.len(), 3);
    let gh = &items[0];
    assert_eq!(gh.id, 174430);
    assert_eq!(gh.coll_id, 98765);
    assert_eq!(gh.name, "Gloomhaven");
    assert_eq!(gh.item_type, ItemType::BoardGame);
    assert_eq!(gh.year_published, 2017);
    assert_eq!(gh.num_plays, 3);
    assert_eq!(
        gh.collection_status,
        tags(&[CollectionType::Own.into(), CollectionType::Played.into()])
    );
}

#[test]
fn trade_wishlist_and_extras() {
    let items = decode_collection(COLLECTION_XML.as_bytes()).unwrap();
    let catan = &items[1];
    assert_eq!(
        catan.collection_status,
        tags(&[
            CollectionType::PrevOwned.into(),
            CollectionType::Trade.into(),
            CollectionType::Wishlist.into(),
            WishlistPriority::LoveToHave.into(),
        ])
    );
    assert!(!catan.has_status(CollectionType::Rated));
    assert!(!catan.has_status(CollectionType::Comment));
}

#[test]
fn sparse_entry_falls_back_to_object_type() {
    let items = decode_collection(COLLECTION_XML.as_bytes()).unwrap();
    let mystery = &items[2];
    assert_eq!(mystery.name, "Mystery & Co");
    assert_eq!(mystery.item_type, ItemType::Other("thing".to_string()));
    assert_eq!(mystery.year_published, 0);
    assert!(mystery.collection_status.is_empty());
    assert!(mystery.description.is_empty());
}

#[test]
fn backoff_grows_and_caps() {
    let mut backoff = Backoff::default();
    let secs: Vec<u64> = (0..9).map(|_| backoff.next_delay().as_secs()).collect();
    assert_eq!(secs, vec![1, 3, 6, 10, 15, 21, 28, 30, 30]);
}

#[test]
fn options_to_params() {
    let options = CollectionOptions::default()
        .types([CollectionType::Own, CollectionType::Wishlist])
        .version(true)
        .subtype(ItemType::BoardGame)
        .exclude_subtype(ItemType::BoardGameExpansion)
        .min_rating(7)
        .bgg_rating(11)
        .min_plays(2)
        .ids([5, -1, 0, 7])
        .coll_id(42)
        .modified_since(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
    let params = options.to_params();

    assert_eq!(params["own"], "1");
    assert_eq!(params["wishlist"], "1");
    assert_eq!(params["version"], "1");
    assert_eq!(params["subtype"], "boardgame");
    assert_eq!(params["excludesubtype"], "boardgameexpansion");
    assert_eq!(params["minrating"], "7");
    assert!(!params.contains_key("bggrating"));
    assert_eq!(params["minplays"], "2");
    assert!(!params.contains_key("maxplays"));
    assert_eq!(params["id"], "5,7");
    assert_eq!(params["collid"], "42");
    assert_eq!(params["modifiedsince"], "24-03-09");
}

#[test]
fn default_options_are_empty() {
    assert!(CollectionOptions::default().to_params().is_empty());
}
