use tokio::sync::RwLock;

use crate::http::{HttpRequest, HttpResponse};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
}

impl Cookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Parse the `name=value` part of a `Set-Cookie` header, ignoring attributes.
    pub fn parse_set_cookie(header: &str) -> Option<Self> {
        let pair = header.split(';').next()?;
        let (name, value) = pair.split_once('=')?;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some(Self::new(name, value.trim().trim_matches('"')))
    }

    /// Cookies set by a response. Cookies the server is clearing are skipped.
    pub fn from_response(response: &HttpResponse) -> Vec<Self> {
        response
            .header_values("set-cookie")
            .filter_map(Self::parse_set_cookie)
            .filter(|c| !c.value.is_empty() && c.value != "deleted")
            .collect()
    }
}

/// Value of a `Cookie` request header.
pub fn cookie_header(cookies: &[Cookie]) -> Option<String> {
    if cookies.is_empty() {
        return None;
    }
    Some(
        cookies
            .iter()
            .map(|c| format!("{}={}", c.name, c.value))
            .collect::<Vec<_>>()
            .join("; "),
    )
}

/// A consistent copy of the session state, taken before a network call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub username: Option<String>,
    pub cookies: Vec<Cookie>,
    pub auth_token: Option<String>,
}

impl SessionSnapshot {
    pub fn is_logged_in(&self) -> bool {
        !self.cookies.is_empty()
    }

    /// Attach the session cookies and bearer token to a request.
    pub fn apply(&self, mut request: HttpRequest) -> HttpRequest {
        if let Some(header) = cookie_header(&self.cookies) {
            request = request.with_header("cookie", header);
        }
        if let Some(token) = self.auth_token.as_deref().filter(|t| !t.is_empty()) {
            request = request.with_header("authorization", format!("Bearer {token}"));
        }
        request
    }
}

/// Mutable session state shared by concurrent operations.
///
/// Readers take a [`SessionSnapshot`]; login replaces username and cookies
/// together under the write lock.
#[derive(Debug, Default)]
pub struct Session {
    state: RwLock<SessionSnapshot>,
}

impl Session {
    pub fn new(initial: SessionSnapshot) -> Self {
        Self {
            state: RwLock::new(initial),
        }
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.state.read().await.clone()
    }

    pub async fn replace_login(&self, username: String, cookies: Vec<Cookie>) {
        let mut state = self.state.write().await;
        state.username = Some(username);
        state.cookies = cookies;
    }

    pub async fn set_auth_token(&self, token: Option<String>) {
        self.state.write().await.auth_token = token;
    }
}
