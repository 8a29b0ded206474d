#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use geekshelf_client::{
    BggClient, ClientConfig, HttpRequest, HttpResponse, Transport, TransportError,
};
use tokio::time::Instant;

/// Transport that answers from a fixed script and records every request.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, String>>>,
    requests: Mutex<Vec<(Instant, HttpRequest)>>,
}

impl ScriptedTransport {
    pub fn new(responses: impl IntoIterator<Item = HttpResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().map(Ok).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            responses: Mutex::new(VecDeque::from([Err(message.to_string())])),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(_, r)| r.clone())
            .collect()
    }

    pub fn request_times(&self) -> Vec<Instant> {
        self.requests.lock().unwrap().iter().map(|(t, _)| *t).collect()
    }
}

impl Transport for ScriptedTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push((Instant::now(), request));
        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(TransportError::Other(message)),
            None => Err(TransportError::Other("script exhausted".to_string())),
        }
    }
}

pub fn client(responses: impl IntoIterator<Item = HttpResponse>) -> BggClient<ScriptedTransport> {
    BggClient::with_transport(ClientConfig::default(), ScriptedTransport::new(responses))
}

pub fn client_with(
    config: ClientConfig,
    responses: impl IntoIterator<Item = HttpResponse>,
) -> BggClient<ScriptedTransport> {
    BggClient::with_transport(config, ScriptedTransport::new(responses))
}

pub fn ok(body: &str) -> HttpResponse {
    HttpResponse::new(200, body)
}

pub fn body_json(request: &HttpRequest) -> serde_json::Value {
    serde_json::from_slice(request.body.as_deref().unwrap_or_default()).unwrap()
}

pub const COLLECTION_XML: &str = r#"<?xml version="1.0" encoding="utf-8" standalone="yes"?>
<items totalitems="1" termsofuse="https://boardgamegeek.com/xmlapi/termsofuse">
    <item objecttype="thing" objectid="174430" subtype="boardgame" collid="98765">
        <name sortindex="1">Gloomhaven</name>
        <yearpublished>2017</yearpublished>
        <status own="1" prevowned="0" fortrade="0" want="0" wanttoplay="0" wanttobuy="0" wishlist="0" preordered="0" />
        <numplays>3</numplays>
    </item>
</items>"#;

pub const USER_XML: &str = r#"<user id="4242" name="alice" termsofuse="x">
    <firstname value="Alice" />
    <lastname value="Liddell" />
    <yearregistered value="2009" />
</user>"#;
