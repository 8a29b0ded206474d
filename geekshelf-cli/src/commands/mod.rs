pub(crate) mod account;
pub(crate) mod catalog;
pub(crate) mod config;
pub(crate) mod feeds;
pub(crate) mod shelf;

use geekshelf_client::{BggClient, CancelToken, ClientConfig};

use crate::CliError;
use crate::cli_types::Commands;

/// Run one network command to completion.
pub(crate) async fn dispatch(
    client: &BggClient,
    config: &ClientConfig,
    cancel: &CancelToken,
    command: Commands,
    quiet: bool,
) -> Result<(), CliError> {
    match command {
        Commands::Search {
            query,
            exact,
            types,
        } => catalog::run_search(client, cancel, &query, exact, types).await,
        Commands::Thing { ids } => catalog::run_thing(client, cancel, &ids).await,
        Commands::User { name } => catalog::run_user(client, cancel, &name).await,
        Commands::Person { id } => catalog::run_person(client, cancel, id).await,
        Commands::Ratings { id } => catalog::run_ratings(client, cancel, id).await,
        Commands::Collection {
            username,
            status,
            stats,
        } => shelf::run_collection(client, cancel, &username, status, stats, quiet).await,
        Commands::Plays { player, game, page } => {
            shelf::run_plays(client, cancel, player, game, page).await
        }
        Commands::Hotness { count } => feeds::run_hotness(client, cancel, count).await,
        Commands::Top { page } => feeds::run_top(client, cancel, page).await,
        Commands::Trends {
            kind,
            interval,
            date,
        } => feeds::run_trends(client, cancel, kind, interval, date).await,
        Commands::Geeklist { id } => feeds::run_geeklist(client, cancel, id, quiet).await,
        Commands::Login => account::run_login(client, config, cancel).await,
        Commands::Rate { id, rating } => {
            account::run_rate(client, config, cancel, id, rating).await
        }
        Commands::LogPlay {
            id,
            date,
            minutes,
            quantity,
            location,
            comment,
            incomplete,
        } => {
            let play = account::new_play(id, date, minutes, quantity, location, comment, incomplete);
            account::run_log_play(client, config, cancel, play).await
        }
        Commands::Config { action } => config::run_config(&action),
    }
}

/// `(1995)`, or nothing when the year is unknown.
pub(crate) fn year_suffix(year: i64) -> String {
    if year == 0 {
        String::new()
    } else {
        format!(" ({year})")
    }
}
