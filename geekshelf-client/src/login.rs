use serde::Serialize;

use crate::cancel::CancelToken;
use crate::client::{BggClient, expect_success};
use crate::error::BggError;
use crate::http::{HttpMethod, HttpRequest, Params, Transport};
use crate::session::Cookie;

const LOGIN_PATH: &str = "login/api/v1";

#[derive(Serialize)]
struct LoginPayload<'a> {
    credentials: Credentials<'a>,
}

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

impl<T: Transport> BggClient<T> {
    /// Log in and replace the session with the cookies upstream hands back.
    pub async fn login(
        &self,
        cancel: &CancelToken,
        username: &str,
        password: &str,
    ) -> Result<(), BggError> {
        const OP: &str = "login";
        if username.is_empty() || password.is_empty() {
            return Err(BggError::invalid(OP, "username and password are required"));
        }

        let payload = LoginPayload {
            credentials: Credentials { username, password },
        };
        let url = self.url(OP, LOGIN_PATH, &Params::new())?;
        let request = HttpRequest::json(HttpMethod::Post, url, &payload)
            .map_err(|e| BggError::invalid(OP, format!("cannot encode credentials: {e}")))?;

        let response = expect_success(OP, self.send(cancel, OP, request).await?)?;
        let cookies = Cookie::from_response(&response);
        if cookies.is_empty() {
            return Err(BggError::upstream(
                OP,
                "login answered without a session cookie, check username and password",
            ));
        }

        self.store_login(username.to_string(), cookies).await;
        log::info!("logged in as {username}");
        Ok(())
    }
}
