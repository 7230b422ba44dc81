//! HTTP gateway to the messaging server.
//!
//! One configured `reqwest` client bound to the server's base URL. Every
//! authenticated request passes through [`ApiGateway::prepare_request`], which
//! reads the persisted session token and attaches it under the bespoke
//! `token` header (not `Authorization: Bearer`). There is no retry and no
//! automatic re-authentication; every failure is returned to the caller.

use crate::error::GatewayError;
use crate::token_store::TokenStore;

use common::RedactedToken;

use std::time::Duration;

use log::{debug, warn};
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

/// Header carrying the session token on authenticated requests.
pub const TOKEN_HEADER_KEY: &str = "token";

pub const LOGIN_ENDPOINT: &str = "login";
pub const REGISTER_ENDPOINT: &str = "register";
pub const LOGOUT_ENDPOINT: &str = "logout";
pub const USERS_ENDPOINT: &str = "api/users";
pub const MESSAGES_ENDPOINT: &str = "api/messages";

#[derive(Clone)]
pub struct ApiGateway {
    base_url: Url,
    client: Client,
    tokens: TokenStore,
}

impl ApiGateway {
    /// Build a gateway for `base_url_str`.
    ///
    /// A missing trailing slash is added so endpoint paths resolve beneath the
    /// base path instead of replacing its last segment. `timeout` is `None`
    /// unless configured.
    pub fn new(
        base_url_str: &str,
        tokens: TokenStore,
        timeout: Option<Duration>,
    ) -> Result<Self, GatewayError> {
        let mut base_url = Url::parse(base_url_str)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            base_url,
            client,
            tokens,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, GatewayError> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    /// Attach the persisted token, if any.
    ///
    /// A store read failure is logged and the request goes out unauthenticated;
    /// the server's rejection then surfaces as the operation's failure.
    fn prepare_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self.tokens.retrieve_token() {
            Ok(Some(token)) => request.header(TOKEN_HEADER_KEY, token.as_str()),
            Ok(None) => request,
            Err(e) => {
                warn!("Could not read session token, sending request without it: {e}");
                request
            }
        }
    }

    /// `GET {path}` with the session token attached.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let url = self.endpoint(path)?;
        debug!("GET {url}");

        self.execute(self.prepare_request(self.client.get(url)))
            .await
    }

    /// `POST {path}` with a JSON body and the session token attached.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, GatewayError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!("POST {url}");

        self.execute(self.prepare_request(self.client.post(url)).json(body))
            .await
    }

    /// `POST {path}` with a JSON body and no session token.
    ///
    /// Used for credential exchange (`/login`, `/register`).
    pub async fn post_public<B, T>(&self, path: &str, body: &B) -> Result<T, GatewayError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!("POST {url} (public)");

        self.execute(self.client.post(url).json(body)).await
    }

    /// `POST {path}` with no body, carrying `token` explicitly instead of the persisted one.
    ///
    /// With `None` the request goes out with no token header at all.
    pub async fn post_with_token<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&RedactedToken>,
    ) -> Result<T, GatewayError> {
        let url = self.endpoint(path)?;
        debug!("POST {url} (explicit token)");

        let mut request = self.client.post(url);
        if let Some(token) = token {
            request = request.header(TOKEN_HEADER_KEY, token.as_str());
        }
        self.execute(request).await
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, GatewayError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(GatewayError::server(
                status.as_u16(),
                response.text().await.unwrap_or_default(),
            ));
        }

        let text = response.text().await?;
        decode_body(&text)
    }
}

impl std::fmt::Debug for ApiGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiGateway")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

/// Decode a success body; an empty body is treated as JSON `null`.
pub(crate) fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, GatewayError> {
    if text.trim().is_empty() {
        return Ok(serde_json::from_value(Value::Null)?);
    }
    Ok(serde_json::from_str(text)?)
}
