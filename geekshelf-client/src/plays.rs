use std::time::Duration;

use chrono::NaiveDate;
use geekshelf_core::util::{DATE_FORMAT, date_or_zero, int_or_zero, nonzero};
use geekshelf_core::{ItemType, Play, PlayItem, Player, Plays};
use serde::Serialize;

use crate::cancel::CancelToken;
use crate::client::{BggClient, expect_success};
use crate::decode::{decode_failure, decode_json, decode_xml};
use crate::error::BggError;
use crate::http::{HttpMethod, HttpRequest, Params, Transport};
use crate::types::{CreatePlayResponse, PlayXml, PlaysXml, json_int};

const PLAYS_PATH: &str = "xmlapi2/plays";
const POST_PLAY_PATH: &str = "geekplay.php";

/// Query of [`BggClient::plays`]. Needs a username, a game id, or both.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaysOptions {
    pub username: Option<String>,
    pub game_id: Option<i64>,
    pub page: Option<u32>,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
}

impl PlaysOptions {
    pub fn username(mut self, name: impl Into<String>) -> Self {
        self.username = Some(name.into());
        self
    }

    pub fn game_id(mut self, id: i64) -> Self {
        self.game_id = Some(id);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn min_date(mut self, date: NaiveDate) -> Self {
        self.min_date = Some(date);
        self
    }

    pub fn max_date(mut self, date: NaiveDate) -> Self {
        self.max_date = Some(date);
        self
    }

    fn to_params(&self) -> Result<Params, BggError> {
        let username = self.username.as_deref().filter(|n| !n.is_empty());
        let game_id = self.game_id.filter(|id| *id > 0);
        if username.is_none() && game_id.is_none() {
            return Err(BggError::invalid(
                "plays",
                "a username or a game id is required",
            ));
        }

        let mut params = Params::new();
        if let Some(name) = username {
            params.insert("username", name.to_string());
        }
        if let Some(id) = game_id {
            params.insert("id", id.to_string());
        }
        if let Some(page) = self.page.filter(|p| *p > 0) {
            params.insert("page", page.to_string());
        }
        if let Some(date) = self.min_date {
            params.insert("mindate", date.format(DATE_FORMAT).to_string());
        }
        if let Some(date) = self.max_date {
            params.insert("maxdate", date.format(DATE_FORMAT).to_string());
        }
        Ok(params)
    }
}

/// Decode an `xmlapi2/plays` document.
pub fn decode_plays(body: &[u8]) -> Result<Plays, BggError> {
    let doc: PlaysXml = decode_xml("plays", "plays", body)?;
    Ok(Plays {
        total: int_or_zero(&doc.total),
        page: int_or_zero(&doc.page),
        user_name: doc.username,
        user_id: int_or_zero(&doc.user_id),
        items: doc.plays.into_iter().map(play_from_wire).collect(),
    })
}

fn play_from_wire(play: PlayXml) -> Play {
    let seconds = u64::try_from(int_or_zero(&play.length)).unwrap_or(0);
    Play {
        id: int_or_zero(&play.id),
        date: date_or_zero(&play.date, DATE_FORMAT),
        quantity: int_or_zero(&play.quantity),
        length: Duration::from_secs(seconds),
        incomplete: nonzero(&play.incomplete),
        now_in_stats: nonzero(&play.now_in_stats),
        location: play.location,
        comment: play.comments.trim().to_string(),
        item: PlayItem {
            name: play.item.name,
            item_type: ItemType::from_wire(&play.item.object_type),
            id: int_or_zero(&play.item.object_id),
        },
        players: play
            .players
            .players
            .into_iter()
            .map(|p| Player {
                user_name: p.username,
                user_id: int_or_zero(&p.user_id),
                name: p.name,
                start_position: p.start_position,
                color: p.color,
                score: p.score,
                new: nonzero(&p.new),
                rating: p.rating,
                win: nonzero(&p.win),
            })
            .collect(),
    }
}

#[derive(Debug, Serialize)]
struct CreatePlayer<'a> {
    name: &'a str,
    username: &'a str,
    #[serde(skip_serializing_if = "is_zero")]
    userid: i64,
    selected: bool,
    color: &'a str,
    score: &'a str,
    #[serde(skip_serializing_if = "is_false")]
    win: bool,
    #[serde(skip_serializing_if = "is_false")]
    new: bool,
}

#[derive(Debug, Serialize)]
struct CreatePlayPayload<'a> {
    players: Vec<CreatePlayer<'a>>,
    quantity: i64,
    date: String,
    twitter: bool,
    locationfilter: &'a str,
    location: &'a str,
    minutes: u64,
    hours: u64,
    incomplete: bool,
    comments: &'a str,
    userfilter: &'a str,
    objecttype: &'a str,
    objectid: String,
    playdate: String,
    length: u64,
    ajax: u8,
    action: &'a str,
}

fn is_zero(n: &i64) -> bool {
    *n == 0
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl<'a> CreatePlayPayload<'a> {
    fn new(play: &'a Play, today: NaiveDate, now: String) -> Self {
        let minutes = play.length.as_secs() / 60;
        let objecttype = match play.item.item_type.as_str() {
            "" => "thing",
            kind => kind,
        };
        Self {
            players: play
                .players
                .iter()
                .map(|p| CreatePlayer {
                    name: &p.name,
                    username: &p.user_name,
                    userid: p.user_id,
                    selected: false,
                    color: &p.color,
                    score: &p.score,
                    win: p.win,
                    new: p.new,
                })
                .collect(),
            quantity: play.quantity.max(1),
            date: now,
            twitter: false,
            locationfilter: "",
            location: &play.location,
            minutes,
            hours: 0,
            incomplete: play.incomplete,
            comments: &play.comment,
            userfilter: "",
            objecttype,
            objectid: play.item.id.to_string(),
            playdate: play.date.unwrap_or(today).format(DATE_FORMAT).to_string(),
            length: minutes,
            ajax: 1,
            action: "save",
        }
    }
}

impl<T: Transport> BggClient<T> {
    /// One page of logged plays.
    pub async fn plays(
        &self,
        cancel: &CancelToken,
        options: &PlaysOptions,
    ) -> Result<Plays, BggError> {
        let params = options.to_params()?;
        let response = self.get_ok(cancel, "plays", PLAYS_PATH, &params).await?;
        decode_plays(&response.body)
    }

    /// Log a play for the logged-in user.
    ///
    /// On success `play.id` holds the new play id and the user's updated play
    /// count for the item is returned. Without a session nothing is sent.
    pub async fn post_play(&self, cancel: &CancelToken, play: &mut Play) -> Result<i64, BggError> {
        const OP: &str = "post_play";
        self.require_login(OP).await?;

        let now = chrono::Local::now();
        let payload = CreatePlayPayload::new(play, now.date_naive(), now.to_rfc3339());
        let url = self.url(OP, POST_PLAY_PATH, &Params::new())?;
        let request = HttpRequest::json(HttpMethod::Post, url, &payload)
            .map_err(|e| BggError::invalid(OP, format!("cannot encode play: {e}")))?;

        let response = expect_success(OP, self.send(cancel, OP, request).await?)?;
        let created: CreatePlayResponse = decode_json(OP, &response.body)?;
        if !created.error.is_empty() {
            return Err(BggError::upstream(OP, created.error));
        }
        if created.playid.is_null() {
            return Err(decode_failure(OP, &response.body, "response has no playid"));
        }

        play.id = json_int(&created.playid);
        log::info!("logged play {} of {}", play.id, play.item.name);
        Ok(json_int(&created.numplays))
    }
}

#[cfg(test)]
#[path = "tests/plays_tests.rs"]
mod tests;
