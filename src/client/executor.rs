use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::error::OdgError;
use super::http::{HttpRequest, HttpResponse, HttpTransport};
use super::issuer::TokenIssuer;
use crate::domain::{Credentials, Environment, Token};
use crate::transport::{FORM_CONTENT_TYPE, RequestDescriptor, materialize_url, tauth_authorization};

/// Dispatches authorized gateway calls and re-authorizes when the token has expired.
///
/// The token slot is shared by every call in flight and is only ever replaced wholesale. Two
/// calls observing the same expired token may both re-authorize; the later token wins.
pub(crate) struct Executor {
    pub(crate) environment: Environment,
    pub(crate) gateway_base: String,
    pub(crate) user_agent: String,
    pub(crate) max_retries: u32,
    pub(crate) credentials: Credentials,
    pub(crate) issuer: Arc<dyn TokenIssuer>,
    pub(crate) http: Arc<dyn HttpTransport>,
    pub(crate) token: RwLock<Option<Token>>,
}

impl Executor {
    /// Obtain a fresh token with the stored credentials and replace the current one.
    pub(crate) async fn authorize(&self) -> Result<Token, OdgError> {
        let token = self.issuer.issue(&self.credentials).await?;
        info!(valid_until = %token.valid_until(), "authorized");
        *self.token.write().await = Some(token.clone());
        Ok(token)
    }

    pub(crate) async fn current_token(&self) -> Option<Token> {
        self.token.read().await.clone()
    }

    pub(crate) async fn request(&self, descriptor: &RequestDescriptor) -> Result<Value, OdgError> {
        let token = self.valid_token().await?;

        let url = materialize_url(&self.gateway_base, descriptor, self.environment)?;
        let path = url.path().to_owned();
        let request = self.build_request(descriptor, url.into(), &token);

        debug!(method = %descriptor.method, %path, "dispatching request");
        let response = self
            .http
            .execute(request)
            .await
            .map_err(OdgError::Transport)?;
        debug!(status = response.status, %path, "received response");

        decode_response(response)
    }

    /// Current token, re-authorizing up to `max_retries` times while it is expired.
    async fn valid_token(&self) -> Result<Token, OdgError> {
        let mut retries = 0;
        loop {
            let token = self.current_token().await.ok_or(OdgError::NotAuthorized)?;
            if !token.is_expired() {
                return Ok(token);
            }
            if retries >= self.max_retries {
                warn!(retries, "token still expired, giving up");
                return Err(OdgError::MaxRetriesExceeded { retries });
            }
            retries += 1;
            warn!(
                retry = retries,
                max_retries = self.max_retries,
                "token expired, re-authorizing"
            );
            self.authorize().await?;
        }
    }

    fn build_request(
        &self,
        descriptor: &RequestDescriptor,
        url: String,
        token: &Token,
    ) -> HttpRequest {
        let mut headers = vec![
            (
                "Authorization".to_owned(),
                tauth_authorization(token.token()),
            ),
            ("User-Agent".to_owned(), self.user_agent.clone()),
            ("Accept".to_owned(), "application/json".to_owned()),
        ];

        let body = descriptor.body();
        if let Some(body) = body.as_deref() {
            headers.push(("Content-Type".to_owned(), FORM_CONTENT_TYPE.to_owned()));
            headers.push(("Content-Length".to_owned(), body.len().to_string()));
        }

        HttpRequest {
            method: descriptor.method,
            url,
            headers,
            body,
        }
    }
}

/// Parse the body first; a non-200 status still carries the parsed payload.
fn decode_response(response: HttpResponse) -> Result<Value, OdgError> {
    let body = match serde_json::from_str::<Value>(&response.body) {
        Ok(body) => body,
        Err(source) => {
            return Err(OdgError::ResponseParse {
                source,
                body: response.body,
            });
        }
    };

    if response.status != 200 {
        return Err(OdgError::HttpStatus {
            status: response.status,
            body,
        });
    }

    Ok(body)
}
