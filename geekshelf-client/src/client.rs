use crate::cancel::CancelToken;
use crate::config::ClientConfig;
use crate::error::BggError;
use crate::http::{HttpRequest, HttpResponse, Params, ReqwestTransport, Transport, build_url};
use crate::limiter::RateLimiter;
use crate::session::{Cookie, Session, SessionSnapshot};

/// Client for the BoardGameGeek XML API and site endpoints.
///
/// One instance can be shared by concurrent callers: session state sits
/// behind a read/write lock and requests are spaced by the rate limiter.
/// Every operation takes a [`CancelToken`] first.
pub struct BggClient<T = ReqwestTransport> {
    transport: T,
    scheme: String,
    host: String,
    limiter: RateLimiter,
    session: Session,
}

impl BggClient<ReqwestTransport> {
    /// Create a client that talks HTTP through `reqwest`.
    pub fn new(config: ClientConfig) -> Result<Self, BggError> {
        let transport = ReqwestTransport::new(config.timeout(), &config.user_agent)
            .map_err(|e| BggError::config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> BggClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        let limiter = RateLimiter::new(config.min_request_interval());
        let session = Session::new(SessionSnapshot {
            username: None,
            cookies: Vec::new(),
            auth_token: config.auth_token,
        });
        Self {
            transport,
            scheme: config.scheme,
            host: config.host,
            limiter,
            session,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Copy of the current session state.
    pub async fn session(&self) -> SessionSnapshot {
        self.session.snapshot().await
    }

    pub async fn active_cookies(&self) -> Vec<Cookie> {
        self.session.snapshot().await.cookies
    }

    pub async fn active_username(&self) -> Option<String> {
        self.session.snapshot().await.username
    }

    /// Restore a session saved from an earlier [`login`](Self::login).
    pub async fn set_cookies(&self, username: impl Into<String>, cookies: Vec<Cookie>) {
        self.session.replace_login(username.into(), cookies).await;
    }

    pub async fn set_auth_token(&self, token: Option<String>) {
        self.session.set_auth_token(token).await;
    }

    pub(crate) fn url(
        &self,
        operation: &'static str,
        path: &str,
        params: &Params,
    ) -> Result<String, BggError> {
        build_url(&self.scheme, &self.host, path, params)
            .map(String::from)
            .map_err(|e| BggError::invalid(operation, format!("cannot build URL for {path:?}: {e}")))
    }

    /// Send one request with the session applied, after the rate limiter.
    ///
    /// The whole exchange races `cancel`.
    pub(crate) async fn send(
        &self,
        cancel: &CancelToken,
        operation: &'static str,
        request: HttpRequest,
    ) -> Result<HttpResponse, BggError> {
        let request = self.session.snapshot().await.apply(request);
        let exchange = async {
            self.limiter.take().await;
            log::debug!("{operation}: {} {}", request.method, request.url);
            self.transport.execute(request).await
        };
        cancel
            .run(operation, exchange)
            .await?
            .map_err(|source| BggError::Transport { operation, source })
    }

    /// GET `path` and require a 200 answer.
    pub(crate) async fn get_ok(
        &self,
        cancel: &CancelToken,
        operation: &'static str,
        path: &str,
        params: &Params,
    ) -> Result<HttpResponse, BggError> {
        let url = self.url(operation, path, params)?;
        let response = self.send(cancel, operation, HttpRequest::get(url)).await?;
        expect_ok(operation, response)
    }

    /// Snapshot of a logged-in session, or `NotLoggedIn` without touching
    /// the network.
    pub(crate) async fn require_login(
        &self,
        operation: &'static str,
    ) -> Result<SessionSnapshot, BggError> {
        let snapshot = self.session.snapshot().await;
        if snapshot.is_logged_in() {
            Ok(snapshot)
        } else {
            Err(BggError::NotLoggedIn { operation })
        }
    }

    pub(crate) async fn store_login(&self, username: String, cookies: Vec<Cookie>) {
        self.session.replace_login(username, cookies).await;
    }
}

/// Read endpoints accept nothing but 200.
pub(crate) fn expect_ok(
    operation: &'static str,
    response: HttpResponse,
) -> Result<HttpResponse, BggError> {
    if response.status == 200 {
        Ok(response)
    } else {
        Err(BggError::status(operation, response.status))
    }
}

/// Write endpoints accept any 2xx.
pub(crate) fn expect_success(
    operation: &'static str,
    response: HttpResponse,
) -> Result<HttpResponse, BggError> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(BggError::status(operation, response.status))
    }
}
