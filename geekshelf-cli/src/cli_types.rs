//! CLI type definitions: command enums and argument structs.

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use geekshelf_core::{CollectionType, ItemType, TrendInterval};

#[derive(Parser)]
#[command(name = "geekshelf")]
#[command(about = "Browse BoardGameGeek from the command line", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + request logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Host to talk to instead of the configured one (e.g., a local mirror)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Bearer token for the XML API
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Account name used by commands that need a login
    #[arg(short, long, global = true)]
    pub username: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Search the catalogue by name
    Search {
        query: String,

        /// Only exact name matches
        #[arg(long)]
        exact: bool,

        /// Item kinds to search (e.g., boardgame,boardgameexpansion)
        #[arg(short, long, value_delimiter = ',')]
        types: Vec<ItemType>,
    },

    /// Show full details of one or more things
    Thing {
        /// Thing ids (e.g., 13,174430)
        #[arg(required = true, value_delimiter = ',')]
        ids: Vec<i64>,
    },

    /// List a user's collection
    Collection {
        username: String,

        /// Only entries with these statuses (e.g., own,wishlist)
        #[arg(short, long, value_delimiter = ',')]
        status: Vec<CollectionType>,

        /// Include ratings and rank statistics
        #[arg(long)]
        stats: bool,
    },

    /// List logged plays of a user or a game
    Plays {
        /// Player whose plays to list
        #[arg(long)]
        player: Option<String>,

        /// Only plays of this thing id
        #[arg(short, long)]
        game: Option<i64>,

        /// Result page, 100 plays per page
        #[arg(short, long)]
        page: Option<u32>,
    },

    /// Show a user's profile
    User { name: String },

    /// Show a person's portrait links
    Person { id: i64 },

    /// Show the rating histogram of a thing
    Ratings { id: i64 },

    /// Show the hotness list
    Hotness {
        /// Number of entries (1-50)
        #[arg(short = 'n', long, default_value_t = 50)]
        count: u32,
    },

    /// Show thing ids from a page of the overall ranking
    Top {
        #[arg(default_value_t = 1)]
        page: u32,
    },

    /// Show ownership and play trends
    Trends {
        #[arg(value_enum)]
        kind: TrendKind,

        /// Window size (week or month); best sellers are always weekly
        #[arg(short, long, default_value = "week")]
        interval: TrendInterval,

        /// Any day inside the window (defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// List the entries of a geek list
    Geeklist { id: i64 },

    /// Check that the configured account can log in
    Login,

    /// Rate a thing in your collection (0 < rating <= 10)
    Rate { id: i64, rating: f64 },

    /// Log a play
    LogPlay {
        /// Thing id of the game played
        id: i64,

        /// Day of the play (defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Length of the play in minutes
        #[arg(short, long, default_value_t = 0)]
        minutes: u64,

        /// Number of plays to log
        #[arg(short, long, default_value_t = 1)]
        quantity: i64,

        #[arg(long, default_value = "")]
        location: String,

        #[arg(long, default_value = "")]
        comment: String,

        /// Mark the play as not finished
        #[arg(long)]
        incomplete: bool,
    },

    /// Manage client configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum TrendKind {
    /// Weekly ownership gains
    BestSellers,
    /// Most logged plays
    MostPlays,
    /// Biggest change in logged plays
    Trending,
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show current settings and their sources
    Show,

    /// Write the current settings to the config file
    Save,

    /// Print the config file path
    Path,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_comma_lists() {
        let cli = Cli::parse_from(["geekshelf", "collection", "alice", "--status", "own,wishlist"]);
        match cli.command {
            Commands::Collection { username, status, stats } => {
                assert_eq!(username, "alice");
                assert_eq!(status, vec![CollectionType::Own, CollectionType::Wishlist]);
                assert!(!stats);
            }
            _ => panic!("expected collection"),
        }
    }

    #[test]
    fn rejects_unknown_item_type() {
        let parsed = Cli::try_parse_from(["geekshelf", "search", "catan", "--types", "boardgam"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn trend_defaults() {
        let cli = Cli::parse_from(["geekshelf", "trends", "most-plays"]);
        match cli.command {
            Commands::Trends { kind, interval, date } => {
                assert!(matches!(kind, TrendKind::MostPlays));
                assert_eq!(interval, TrendInterval::Week);
                assert!(date.is_none());
            }
            _ => panic!("expected trends"),
        }
    }
}
