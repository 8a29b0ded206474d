use std::collections::HashMap;

use super::*;

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = ClientConfig::resolve(None, env_of(&[])).unwrap();
    assert_eq!(config.scheme, "https");
    assert_eq!(config.host, "boardgamegeek.com");
    assert_eq!(config.min_request_interval_ms, 0);
    assert_eq!(config.timeout_secs, 30);
    assert!(config.auth_token.is_none());
    assert!(config.user_agent.starts_with("geekshelf/"));
}

#[test]
fn env_beats_config_file() {
    let file = parse_config(
        r#"
[bgg]
host = "bgg.example"
min_request_interval_ms = 500
auth_token = "from-file"
"#,
    )
    .unwrap();

    let config = ClientConfig::resolve(
        Some(&file),
        env_of(&[("GEEKSHELF_TOKEN", "from-env"), ("GEEKSHELF_RATE_MS", "1200")]),
    )
    .unwrap();

    assert_eq!(config.host, "bgg.example");
    assert_eq!(config.auth_token.as_deref(), Some("from-env"));
    assert_eq!(config.min_request_interval_ms, 1200);
}

#[test]
fn rejects_unknown_scheme() {
    let err = ClientConfig::resolve(None, env_of(&[("GEEKSHELF_SCHEME", "ftp")])).unwrap_err();
    assert!(matches!(err, BggError::Config(_)));
}

#[test]
fn rejects_non_numeric_rate() {
    let err = ClientConfig::resolve(None, env_of(&[("GEEKSHELF_RATE_MS", "fast")])).unwrap_err();
    assert!(err.to_string().contains("GEEKSHELF_RATE_MS"));
}

#[test]
fn malformed_file_is_ignored() {
    assert!(parse_config("[bgg\nhost=").is_none());
}

#[test]
fn rendered_config_omits_defaults() {
    let config = ClientConfig {
        username: Some("alice".to_string()),
        ..ClientConfig::default()
    };
    let text = render_config(&config).unwrap();
    assert!(text.contains("username = \"alice\""));
    assert!(!text.contains("host"));
    assert!(!text.contains("timeout_secs"));

    let reparsed = parse_config(&text).unwrap();
    assert_eq!(reparsed.username.as_deref(), Some("alice"));
}

#[test]
fn overrides_replace_loaded_values() {
    let config = ClientConfig::default().with_overrides(
        Some("localhost:8080".to_string()),
        None,
        Some("bob".to_string()),
        None,
    );
    assert_eq!(config.host, "localhost:8080");
    assert_eq!(config.username.as_deref(), Some("bob"));
    assert!(config.auth_token.is_none());
}
