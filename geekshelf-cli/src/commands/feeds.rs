use chrono::NaiveDate;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use geekshelf_client::{BggClient, CancelToken};
use geekshelf_core::{TrendInterval, TrendOutput};

use crate::cli_types::TrendKind;
use crate::{CliError, spinner};

pub(crate) async fn run_hotness(
    client: &BggClient,
    cancel: &CancelToken,
    count: u32,
) -> Result<(), CliError> {
    let hot = client.hotness(cancel, count).await?;
    for (rank, entry) in hot.iter().enumerate() {
        log::info!(
            "{:>3}. {}  {}",
            rank + 1,
            format!("{:>7}", entry.id).if_supports_color(Stdout, |t| t.cyan()),
            signed(entry.delta),
        );
    }
    Ok(())
}

pub(crate) async fn run_top(
    client: &BggClient,
    cancel: &CancelToken,
    page: u32,
) -> Result<(), CliError> {
    let ids = client.top_pages(cancel, page).await?;
    if ids.is_empty() {
        log::warn!("No games found on page {page}");
    }
    for id in ids {
        log::info!("{}", id.if_supports_color(Stdout, |t| t.cyan()));
    }
    Ok(())
}

pub(crate) async fn run_trends(
    client: &BggClient,
    cancel: &CancelToken,
    kind: TrendKind,
    interval: TrendInterval,
    date: Option<NaiveDate>,
) -> Result<(), CliError> {
    let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
    let trends = match kind {
        TrendKind::BestSellers => client.best_sellers(cancel, date).await?,
        TrendKind::MostPlays => client.most_plays(cancel, interval, date).await?,
        TrendKind::Trending => client.trending_plays(cancel, interval, date).await?,
    };
    print_trends(&trends);
    Ok(())
}

fn print_trends(trends: &[TrendOutput]) {
    if trends.is_empty() {
        log::info!("{}", "No entries".if_supports_color(Stdout, |t| t.dimmed()));
    }
    for (rank, entry) in trends.iter().enumerate() {
        log::info!(
            "{:>3}. {}  {}  seen {}x",
            rank + 1,
            format!("{:>7}", entry.id).if_supports_color(Stdout, |t| t.cyan()),
            signed(entry.delta),
            entry.appearances,
        );
    }
}

pub(crate) async fn run_geeklist(
    client: &BggClient,
    cancel: &CancelToken,
    id: i64,
    quiet: bool,
) -> Result<(), CliError> {
    let pb = spinner::start(format!("Reading geek list {id}..."), quiet);
    let result = client.geek_list(cancel, id).await;
    pb.finish_and_clear();

    let items = result?;
    for item in &items {
        log::info!(
            "{}  {}",
            format!("{:>7}", item.id).if_supports_color(Stdout, |t| t.cyan()),
            item.name.if_supports_color(Stdout, |t| t.bold()),
        );
    }
    crate::log_blank();
    log::info!("{} entr{}", items.len(), if items.len() == 1 { "y" } else { "ies" });
    Ok(())
}

fn signed(delta: i64) -> String {
    if delta > 0 {
        format!("+{delta}")
            .if_supports_color(Stdout, |t| t.green())
            .to_string()
    } else if delta < 0 {
        delta.if_supports_color(Stdout, |t| t.red()).to_string()
    } else {
        "=".to_string()
    }
}
