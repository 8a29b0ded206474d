//! Commands that act on the configured account.

use std::time::Duration;

use chrono::NaiveDate;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use geekshelf_client::{BggClient, CancelToken, ClientConfig, check_rating};
use geekshelf_core::{ItemType, Play, PlayItem};

use crate::CliError;

/// Log in with the configured username and password.
async fn login(
    client: &BggClient,
    config: &ClientConfig,
    cancel: &CancelToken,
) -> Result<(), CliError> {
    let (Some(username), Some(password)) = (&config.username, &config.password) else {
        return Err(CliError::config(
            "username and password are required; set GEEKSHELF_USERNAME and \
             GEEKSHELF_PASSWORD or run 'geekshelf config show'",
        ));
    };
    client.login(cancel, username, password).await?;
    Ok(())
}

pub(crate) async fn run_login(
    client: &BggClient,
    config: &ClientConfig,
    cancel: &CancelToken,
) -> Result<(), CliError> {
    login(client, config, cancel).await?;
    let cookies = client.active_cookies().await;
    log::info!(
        "{} Logged in as {} ({} session cookie(s))",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        client
            .active_username()
            .await
            .unwrap_or_default()
            .if_supports_color(Stdout, |t| t.bold()),
        cookies.len(),
    );
    Ok(())
}

pub(crate) async fn run_rate(
    client: &BggClient,
    config: &ClientConfig,
    cancel: &CancelToken,
    id: i64,
    rating: f64,
) -> Result<(), CliError> {
    check_rating(rating)?;
    login(client, config, cancel).await?;
    client.set_rank(cancel, id, rating).await?;
    log::info!(
        "{} Rated {} {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        id.if_supports_color(Stdout, |t| t.cyan()),
        rating,
    );
    Ok(())
}

pub(crate) fn new_play(
    id: i64,
    date: Option<NaiveDate>,
    minutes: u64,
    quantity: i64,
    location: String,
    comment: String,
    incomplete: bool,
) -> Play {
    Play {
        date,
        quantity,
        length: Duration::from_secs(minutes * 60),
        incomplete,
        location,
        comment,
        item: PlayItem {
            name: String::new(),
            item_type: ItemType::Other("thing".to_string()),
            id,
        },
        ..Play::default()
    }
}

pub(crate) async fn run_log_play(
    client: &BggClient,
    config: &ClientConfig,
    cancel: &CancelToken,
    mut play: Play,
) -> Result<(), CliError> {
    login(client, config, cancel).await?;
    let count = client.post_play(cancel, &mut play).await?;
    log::info!(
        "{} Logged play {} of {}; {} play(s) recorded for this game",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        play.id,
        play.item.id.if_supports_color(Stdout, |t| t.cyan()),
        count,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_play_converts_minutes() {
        let play = new_play(13, None, 45, 1, String::new(), String::new(), false);
        assert_eq!(play.length, Duration::from_secs(2700));
        assert_eq!(play.item.id, 13);
        assert_eq!(play.item.item_type.as_str(), "thing");
        assert_eq!(play.id, 0);
    }

    #[tokio::test]
    async fn rate_checks_the_rating_before_logging_in() {
        let config = ClientConfig::default();
        let client = BggClient::new(config.clone()).unwrap();
        let err = run_rate(&client, &config, &CancelToken::new(), 13, 11.0)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::Client(geekshelf_client::BggError::InvalidArgument { .. })
        ));
    }
}
