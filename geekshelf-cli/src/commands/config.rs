use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use geekshelf_client::{ClientConfig, ConfigSource};

use crate::CliError;
use crate::cli_types::ConfigAction;

fn mask_value(s: &str) -> String {
    match s.char_indices().nth(2) {
        Some((cut, _)) => format!("{}****", &s[..cut]),
        None => "****".to_string(),
    }
}

pub(crate) fn run_config(action: &ConfigAction) -> Result<(), CliError> {
    match action {
        ConfigAction::Show => run_config_show(),
        ConfigAction::Save => run_config_save(),
        ConfigAction::Path => run_config_path(),
    }
}

/// Show current settings and their sources.
fn run_config_show() -> Result<(), CliError> {
    let path = geekshelf_client::config_path();
    let sources = geekshelf_client::config_sources();

    log::info!(
        "{}",
        "geekshelf Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    match &path {
        Some(p) if p.exists() => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
        }
        Some(p) => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            log::info!(
                "  Config file: {}",
                "could not determine path".if_supports_color(Stdout, |t| t.red()),
            );
        }
    }
    crate::log_blank();

    let config = ClientConfig::load()?;
    let secret = |v: &Option<String>| v.as_deref().map(mask_value);

    let fields: [(&str, &ConfigSource, Option<String>); 6] = [
        ("scheme", &sources.scheme, Some(config.scheme.clone())),
        ("host", &sources.host, Some(config.host.clone())),
        (
            "min_request_interval_ms",
            &sources.min_request_interval_ms,
            Some(config.min_request_interval_ms.to_string()),
        ),
        ("auth_token", &sources.auth_token, secret(&config.auth_token)),
        ("username", &sources.username, config.username.clone()),
        ("password", &sources.password, secret(&config.password)),
    ];

    for (name, source, value) in fields {
        match value {
            Some(value) => log::info!(
                "  {:<24} {} {}",
                name,
                value,
                format!("({source})").if_supports_color(Stdout, |t| t.dimmed()),
            ),
            None => log::info!(
                "  {:<24} {}",
                name,
                "not set".if_supports_color(Stdout, |t| t.yellow()),
            ),
        }
    }
    Ok(())
}

fn run_config_save() -> Result<(), CliError> {
    let config = ClientConfig::load()?;
    let path = geekshelf_client::save_to_file(&config)?;
    log::info!(
        "{} Settings written to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

fn run_config_path() -> Result<(), CliError> {
    match geekshelf_client::config_path() {
        Some(path) => {
            log::info!("{}", path.display());
            Ok(())
        }
        None => Err(CliError::config("Could not determine config directory")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_all_but_two_chars() {
        assert_eq!(mask_value("hunter2"), "hu****");
        assert_eq!(mask_value("ab"), "****");
        assert_eq!(mask_value("ÄÖÜ"), "ÄÖ****");
    }
}
