//! Async client for the BoardGameGeek XML API and site endpoints.
//!
//! [`BggClient`] turns the upstream's loosely typed XML and JSON into the
//! value types of `geekshelf-core`. Numbers that are missing or malformed
//! become zero, and bodies that are really error envelopes become
//! [`BggError::Upstream`] instead of parse errors. Collection requests are
//! retried while upstream is still preparing the report.
//!
//! ```no_run
//! use geekshelf_client::{BggClient, CancelToken, ClientConfig, SearchOptions};
//!
//! # async fn run() -> Result<(), geekshelf_client::BggError> {
//! let client = BggClient::new(ClientConfig::load()?)?;
//! let cancel = CancelToken::new();
//! for hit in client.search(&cancel, "catan", &SearchOptions::default()).await? {
//!     println!("{} {} ({})", hit.id, hit.name, hit.year_published);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cancel;
pub mod client;
pub mod collection;
pub mod config;
mod decode;
pub mod envelope;
pub mod error;
pub mod feeds;
pub mod http;
pub mod limiter;
pub mod login;
pub mod normalize;
pub mod plays;
pub mod rank;
pub mod search;
pub mod session;
pub mod thing;
pub mod types;
pub mod user;

pub use cancel::CancelToken;
pub use client::BggClient;
pub use collection::{Backoff, CollectionOptions, MAX_BACKOFF, decode_collection};
pub use config::{ClientConfig, ConfigSource, ConfigSources, config_path, config_sources, save_to_file};
pub use envelope::envelope_message;
pub use error::{BggError, StatusText};
pub use feeds::{
    MAX_GEEKLIST_PAGES, MAX_HOTNESS, decode_geeklist_page, decode_hotness, decode_trends,
    extract_top_ids,
};
pub use http::{
    HttpMethod, HttpRequest, HttpResponse, Params, ReqwestTransport, Transport, TransportError,
    build_url,
};
pub use limiter::RateLimiter;
pub use normalize::{group_links, split_names, suggested_player_counts};
pub use plays::{PlaysOptions, decode_plays};
pub use rank::{CollectionEntry, check_rating, decode_rank_breakdown};
pub use search::{SearchOptions, decode_search};
pub use session::{Cookie, SessionSnapshot};
pub use thing::decode_things;
pub use user::{decode_person_image, decode_user};
