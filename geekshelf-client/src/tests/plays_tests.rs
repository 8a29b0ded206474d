use super::*;

const PLAYS_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<plays username="alice" userid="12345" total="2" page="1" termsofuse="https://boardgamegeek.com/xmlapi/termsofuse">
    <play id="900001" date="2024-03-01" quantity="1" length="5400" incomplete="0" nowinstats="1" location="Home">
        <item name="Gloomhaven" objecttype="thing" objectid="174430">
            <subtypes>
                <subtype value="boardgame" />
            </subtypes>
        </item>
        <comments>Scenario 3, &quot;Crypt of the Damned&quot;</comments>
        <players>
            <player username="alice" userid="12345" name="Alice" startposition="1" color="red" score="42" new="0" rating="8" win="1" />
            <player username="" userid="0" name="Bob" startposition="2" color="blue" score="12+3" new="1" rating="0" win="0" />
        </players>
    </play>
    <play id="900002" date="" quantity="2" length="" incomplete="1" nowinstats="0" location="">
        <item name="CATAN" objecttype="thing" objectid="13" />
    </play>
</plays>"#;

#[test]
fn decodes_plays_page() {
    let plays = decode_plays(PLAYS_XML.as_bytes()).unwrap();
    assert_eq!(plays.total, 2);
    assert_eq!(plays.page, 1);
    assert_eq!(plays.user_name, "alice");
    assert_eq!(plays.user_id, 12345);
    assert_eq!(plays.items.len(), 2);

    let first = &plays.items[0];
    assert_eq!(first.id, 900001);
    assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 3, 1));
    assert_eq!(first.quantity, 1);
    assert_eq!(first.length, Duration::from_secs(5400));
    assert!(!first.incomplete);
    assert!(first.now_in_stats);
    assert_eq!(first.location, "Home");
    assert_eq!(first.comment, "Scenario 3, \"Crypt of the Damned\"");
    assert_eq!(first.item.name, "Gloomhaven");
    assert_eq!(first.item.id, 174430);
    assert_eq!(first.item.item_type, ItemType::Other("thing".to_string()));
}

#[test]
fn decodes_players() {
    let plays = decode_plays(PLAYS_XML.as_bytes()).unwrap();
    let players = &plays.items[0].players;
    assert_eq!(players.len(), 2);
    assert_eq!(players[0].user_name, "alice");
    assert_eq!(players[0].user_id, 12345);
    assert_eq!(players[0].score, "42");
    assert!(players[0].win);
    assert!(!players[0].new);
    assert_eq!(players[1].name, "Bob");
    assert_eq!(players[1].score, "12+3");
    assert!(players[1].new);

    let winners: Vec<&str> = plays.items[0].winners().map(|p| p.name.as_str()).collect();
    assert_eq!(winners, vec!["Alice"]);
}

#[test]
fn sparse_play_uses_zero_values() {
    let plays = decode_plays(PLAYS_XML.as_bytes()).unwrap();
    let second = &plays.items[1];
    assert_eq!(second.date, None);
    assert_eq!(second.length, Duration::ZERO);
    assert!(second.incomplete);
    assert!(second.players.is_empty());
}

#[test]
fn plays_needs_user_or_game() {
    let err = PlaysOptions::default().to_params().unwrap_err();
    assert!(matches!(err, BggError::InvalidArgument { operation: "plays", .. }));

    let err = PlaysOptions::default().username("").game_id(0).to_params().unwrap_err();
    assert!(matches!(err, BggError::InvalidArgument { .. }));
}

#[test]
fn plays_params() {
    let params = PlaysOptions::default()
        .username("alice")
        .game_id(13)
        .page(2)
        .min_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        .max_date(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap())
        .to_params()
        .unwrap();
    assert_eq!(params["username"], "alice");
    assert_eq!(params["id"], "13");
    assert_eq!(params["page"], "2");
    assert_eq!(params["mindate"], "2024-01-01");
    assert_eq!(params["maxdate"], "2024-12-31");
}

#[test]
fn create_play_payload_shape() {
    let play = Play {
        date: NaiveDate::from_ymd_opt(2024, 3, 1),
        length: Duration::from_secs(95 * 60 + 30),
        location: "Club".to_string(),
        comment: "close game".to_string(),
        item: PlayItem {
            name: "CATAN".to_string(),
            item_type: ItemType::default(),
            id: 13,
        },
        players: vec![
            Player {
                name: "Alice".to_string(),
                user_name: "alice".to_string(),
                user_id: 12345,
                color: "red".to_string(),
                score: "10".to_string(),
                win: true,
                ..Player::default()
            },
            Player {
                name: "Bob".to_string(),
                score: "8".to_string(),
                ..Player::default()
            },
        ],
        ..Play::default()
    };

    let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let payload = CreatePlayPayload::new(&play, today, "2025-01-01T12:00:00+00:00".to_string());
    let json = serde_json::to_value(&payload).unwrap();

    assert_eq!(json["action"], "save");
    assert_eq!(json["ajax"], 1);
    assert_eq!(json["objectid"], "13");
    assert_eq!(json["objecttype"], "thing");
    assert_eq!(json["playdate"], "2024-03-01");
    assert_eq!(json["length"], 95);
    assert_eq!(json["minutes"], 95);
    assert_eq!(json["quantity"], 1);
    assert_eq!(json["location"], "Club");
    assert_eq!(json["comments"], "close game");
    assert_eq!(json["players"][0]["userid"], 12345);
    assert_eq!(json["players"][0]["win"], true);
    assert!(json["players"][1].get("userid").is_none());
    assert!(json["players"][1].get("win").is_none());
    assert_eq!(json["players"][1]["score"], "8");
}

#[test]
fn payload_defaults_date_to_today() {
    let play = Play::default();
    let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let payload = CreatePlayPayload::new(&play, today, String::new());
    assert_eq!(payload.playdate, "2025-01-01");
}
