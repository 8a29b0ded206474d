use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use geekshelf_client::{BggClient, CancelToken, SearchOptions};
use geekshelf_core::{ItemType, ThingResult};

use super::year_suffix;
use crate::CliError;

/// Longest description printed by `thing`, in characters.
const DESCRIPTION_PREVIEW: usize = 400;

pub(crate) async fn run_search(
    client: &BggClient,
    cancel: &CancelToken,
    query: &str,
    exact: bool,
    types: Vec<ItemType>,
) -> Result<(), CliError> {
    let mut options = SearchOptions::default().types(types);
    if exact {
        options = options.exact();
    }
    let results = client.search(cancel, query, &options).await?;

    if results.is_empty() {
        log::info!("{}", "No results".if_supports_color(Stdout, |t| t.dimmed()));
        return Ok(());
    }
    for hit in &results {
        log::info!(
            "{}  {}{}  {}",
            format!("{:>7}", hit.id).if_supports_color(Stdout, |t| t.cyan()),
            hit.name.if_supports_color(Stdout, |t| t.bold()),
            year_suffix(hit.year_published),
            hit.item_type.if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();
    log::info!("{} result(s)", results.len());
    Ok(())
}

pub(crate) async fn run_thing(
    client: &BggClient,
    cancel: &CancelToken,
    ids: &[i64],
) -> Result<(), CliError> {
    let things = client.get_things(cancel, ids).await?;
    if things.is_empty() {
        log::warn!("No things found for {ids:?}");
    }
    for (i, thing) in things.iter().enumerate() {
        if i > 0 {
            crate::log_blank();
        }
        print_thing(thing);
    }
    Ok(())
}

fn print_thing(thing: &ThingResult) {
    log::info!(
        "{}{} [{}]",
        thing.name.if_supports_color(Stdout, |t| t.bold()),
        year_suffix(thing.year_published),
        thing.id.if_supports_color(Stdout, |t| t.cyan()),
    );
    if !thing.alternate_names.is_empty() {
        log::info!("  Also known as: {}", thing.alternate_names.join(", "));
    }
    log::info!(
        "  Players: {}-{}  Time: {} min  Age: {}+",
        thing.min_players,
        thing.max_players,
        thing.play_time,
        thing.min_age
    );

    let best: Vec<&str> = thing
        .suggested_player_count
        .iter()
        .filter(|count| count.suggestion().rating == geekshelf_core::ThreeRating::Best)
        .map(|count| count.num_players.as_str())
        .collect();
    if !best.is_empty() {
        log::info!("  Best with: {}", best.join(", "));
    }

    log::info!(
        "  Rating: {:.2} ({} votes, geek {:.2})  Weight: {:.2}",
        thing.average_rate,
        thing.users_rated,
        thing.bayes_average,
        thing.average_weight,
    );
    if thing.rank_total > 0 {
        log::info!(
            "  Rank: {}",
            format!("#{}", thing.rank_total).if_supports_color(Stdout, |t| t.green()),
        );
    }
    for family in thing.family.values() {
        log::info!("    {} #{}", family.friendly_name, family.rank);
    }

    for (label, category) in [
        ("Designers", "boardgamedesigner"),
        ("Categories", "boardgamecategory"),
        ("Mechanics", "boardgamemechanic"),
    ] {
        let names: Vec<&str> = thing
            .links_of(category)
            .iter()
            .map(|link| link.name.as_str())
            .collect();
        if !names.is_empty() {
            log::info!("  {label}: {}", names.join(", "));
        }
    }

    if !thing.description.is_empty() {
        crate::log_blank();
        log::info!("  {}", preview(&thing.description, DESCRIPTION_PREVIEW));
    }
}

/// First `max` characters of `text` on one line, with an ellipsis when cut.
fn preview(text: &str, max: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    match flat.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &flat[..cut]),
        None => flat,
    }
}

pub(crate) async fn run_user(
    client: &BggClient,
    cancel: &CancelToken,
    name: &str,
) -> Result<(), CliError> {
    let user = client.get_user(cancel, name).await?;
    if user.user_id == 0 {
        log::warn!("No user named {name}");
        return Ok(());
    }
    log::info!(
        "{} [{}]",
        user.user_name.if_supports_color(Stdout, |t| t.bold()),
        user.user_id.if_supports_color(Stdout, |t| t.cyan()),
    );
    let full_name = format!("{} {}", user.first_name, user.last_name);
    if !full_name.trim().is_empty() {
        log::info!("  Name: {}", full_name.trim());
    }
    if user.year_registered > 0 {
        log::info!("  Registered: {}", user.year_registered);
    }
    if !user.avatar_link.is_empty() && user.avatar_link != "N/A" {
        log::info!("  Avatar: {}", user.avatar_link);
    }
    Ok(())
}

pub(crate) async fn run_person(
    client: &BggClient,
    cancel: &CancelToken,
    id: i64,
) -> Result<(), CliError> {
    let person = client.person_image(cancel, id).await?;
    log::info!("Person {}", person.id.if_supports_color(Stdout, |t| t.cyan()));
    log::info!("  Thumbnail: {}", or_none(&person.thumbnail));
    log::info!("  Image: {}", or_none(&person.image));
    Ok(())
}

fn or_none(s: &str) -> &str {
    if s.is_empty() { "(none)" } else { s }
}

pub(crate) async fn run_ratings(
    client: &BggClient,
    cancel: &CancelToken,
    id: i64,
) -> Result<(), CliError> {
    let breakdown = client.get_rank_breakdown(cancel, id).await?;
    let total = breakdown.total();
    if total == 0 {
        log::info!("{}", "No ratings yet".if_supports_color(Stdout, |t| t.dimmed()));
        return Ok(());
    }

    let widest = (1..=10).map(|r| breakdown.count(r)).max().unwrap_or(0).max(1);
    for rating in (1..=10).rev() {
        let count = breakdown.count(rating);
        let bar = "#".repeat((count * 40 / widest) as usize);
        log::info!(
            "  {:>2} {:<40} {}",
            rating,
            bar.if_supports_color(Stdout, |t| t.green()),
            count
        );
    }
    crate::log_blank();
    log::info!(
        "{} ratings, average {:.2}, bayesian {:.2}",
        total,
        breakdown.average(),
        breakdown.bayesian_average(100),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_cuts_on_char_boundary() {
        assert_eq!(preview("Brass:   Birmingham\n\nis", 100), "Brass: Birmingham is");
        assert_eq!(preview("Ätna und Öl", 4), "Ätna...");
    }
}
