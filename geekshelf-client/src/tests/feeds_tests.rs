use super::*;

#[test]
fn hotness_items() {
    let body = br#"{"items":[
        {"objecttype":"thing","objectid":"174430","delta":3,"id":"174430","name":"Gloomhaven"},
        {"objecttype":"thing","objectid":"13","delta":-2,"name":"CATAN"},
        {"objecttype":"thing","id":"224517","delta":"0"}
    ]}"#;
    let hot = decode_hotness(body).unwrap();
    assert_eq!(
        hot,
        vec![
            IdDelta { id: 174430, delta: 3 },
            IdDelta { id: 13, delta: -2 },
            IdDelta { id: 224517, delta: 0 },
        ]
    );
}

#[test]
fn hotness_envelope() {
    let err = decode_hotness(br#"{"message":"Rate limited"}"#).unwrap_err();
    assert!(matches!(err, BggError::Upstream { operation: "hotness", .. }));
}

#[test]
fn trends_items() {
    let body = br#"{"items":[
        {"id":"1","item":{"type":"things","id":"342942","name":"Ark Nova"},"rank":1,"delta":5,"appearances":12},
        {"id":"2","item":{"type":"things","id":"266192","name":"Wingspan"},"rank":2,"delta":-1,"appearances":40}
    ],"interval":"week","endDate":"2024-05-20T00:00:00+00:00"}"#;
    let trends = decode_trends("best_sellers", body).unwrap();
    assert_eq!(trends.len(), 2);
    assert_eq!(
        trends[0],
        TrendOutput {
            id: 342942,
            delta: 5,
            appearances: 12
        }
    );
    assert_eq!(trends[1].delta, -1);
}

#[test]
fn trend_params_snap_start() {
    let wednesday = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
    let params = trend_params(TrendInterval::Week, wednesday);
    assert_eq!(params["interval"], "week");
    assert_eq!(params["startDate"], "2024-05-13");

    let params = trend_params(TrendInterval::Month, wednesday);
    assert_eq!(params["interval"], "month");
    assert_eq!(params["startDate"], "2024-05-01");
}

#[test]
fn geeklist_page() {
    let body = br#"{"data":[
        {"type":"listitem","id":"1","item":{"type":"things","id":"13","name":"CATAN"},"body":"A classic."},
        {"type":"listitem","id":"2","item":{"type":"things","id":"822","name":"Carcassonne"},"body":""}
    ],"pagination":{"pageid":1,"perPage":25,"total":2}}"#;
    let items = decode_geeklist_page(body).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, 13);
    assert_eq!(items[0].name, "CATAN");
    assert_eq!(items[0].description, "A classic.");

    let empty = decode_geeklist_page(br#"{"data":[],"pagination":{}}"#).unwrap();
    assert!(empty.is_empty());
}

#[test]
fn geeklist_without_data_is_an_error() {
    assert!(decode_geeklist_page(br#"{"pagination":{}}"#).is_err());
}

#[test]
fn top_ids_from_browse_page() {
    let html = r#"
<table>
<tr><td class="collection_objectname">
    <a href="/boardgame/224517/brass-birmingham" class="primary">Brass: Birmingham</a>
    <a href="/boardgame/224517/brass-birmingham/ratings" class="secondary">ratings</a>
</td></tr>
<tr><td>
    <a class='primary' href='/boardgame/161936/pandemic-legacy-season-1'>Pandemic Legacy</a>
</td></tr>
<tr><td>
    <a class="primary" href="/boardgameexpansion/1/not-a-game">nope</a>
    <a class="primary" href="/boardgame/174430/gloomhaven">Gloomhaven</a>
</td></tr>
</table>"#;
    assert_eq!(extract_top_ids(html), vec![224517, 161936, 174430]);
}

#[test]
fn top_ids_tolerate_markup_variations() {
    let html = r#"
<a data-class="primary" class=secondary href="/boardgame/1/decoy">no</a>
<a title="a > b" class=primary href=/boardgame/342942/ark-nova>Ark Nova</a>
<A HREF="/boardgame/266192/wingspan?x=1&amp;y=2" CLASS="primary">Wingspan</A>
<!-- <a class="primary" href="/boardgame/2/commented-out">gone</a> -->
<abbr class="primary" href="/boardgame/3/not-an-anchor">x</abbr>
<a class="primary"
   href="/boardgame/167791/terraforming-mars">Terraforming Mars</a>"#;
    assert_eq!(extract_top_ids(html), vec![342942, 266192, 167791]);
}

#[test]
fn top_ids_of_unrelated_page() {
    assert!(extract_top_ids("<html><body><p>Nothing</p></body></html>").is_empty());
}
