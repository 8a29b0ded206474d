use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use geekshelf_client::{BggClient, CancelToken, CollectionOptions, PlaysOptions};
use geekshelf_core::{CollectionType, Play};

use super::year_suffix;
use crate::{CliError, spinner};

pub(crate) async fn run_collection(
    client: &BggClient,
    cancel: &CancelToken,
    username: &str,
    status: Vec<CollectionType>,
    stats: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let options = CollectionOptions::default().types(status).stats(stats);

    // Upstream queues large collections and answers 202 until ready.
    let pb = spinner::start(format!("Fetching collection of {username}..."), quiet);
    let result = client.get_collection(cancel, username, &options).await;
    pb.finish_and_clear();
    let mut items = result?;

    if items.is_empty() {
        log::info!("{}", "Collection is empty".if_supports_color(Stdout, |t| t.dimmed()));
        return Ok(());
    }

    items.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    for item in &items {
        let tags: Vec<&str> = item.collection_status.iter().map(|t| t.as_str()).collect();
        log::info!(
            "{}  {}{}  {}",
            format!("{:>7}", item.id).if_supports_color(Stdout, |t| t.cyan()),
            item.name.if_supports_color(Stdout, |t| t.bold()),
            year_suffix(item.year_published),
            tags.join(",").if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();
    log::info!("{} item(s)", items.len());
    Ok(())
}

pub(crate) async fn run_plays(
    client: &BggClient,
    cancel: &CancelToken,
    player: Option<String>,
    game: Option<i64>,
    page: Option<u32>,
) -> Result<(), CliError> {
    let mut options = PlaysOptions::default();
    if let Some(player) = player {
        options = options.username(player);
    }
    if let Some(game) = game {
        options = options.game_id(game);
    }
    if let Some(page) = page {
        options = options.page(page);
    }

    let plays = client.plays(cancel, &options).await?;
    if plays.items.is_empty() {
        log::info!("{}", "No plays".if_supports_color(Stdout, |t| t.dimmed()));
        return Ok(());
    }

    for play in &plays.items {
        log::info!("{}", play_line(play));
    }
    crate::log_blank();
    log::info!(
        "Page {}: {} of {} play(s)",
        plays.page.max(1),
        plays.items.len(),
        plays.total
    );
    Ok(())
}

fn play_line(play: &Play) -> String {
    let date = play
        .date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "----------".to_string());
    let mut line = format!(
        "{}  {}",
        date.if_supports_color(Stdout, |t| t.dimmed()),
        play.item.name.if_supports_color(Stdout, |t| t.bold()),
    );
    if play.quantity > 1 {
        line.push_str(&format!(" x{}", play.quantity));
    }
    let minutes = play.length.as_secs() / 60;
    if minutes > 0 {
        line.push_str(&format!(" {minutes} min"));
    }
    let winners: Vec<&str> = play.winners().map(|p| p.name.as_str()).collect();
    if !winners.is_empty() {
        line.push_str(&format!(
            "  won by {}",
            winners.join(", ").if_supports_color(Stdout, |t| t.green())
        ));
    }
    line
}
