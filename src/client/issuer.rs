use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::debug;

use super::error::OdgError;
use super::http::{BoxFuture, HttpRequest, HttpResponse, HttpTransport};
use crate::domain::{Credentials, Token};
use crate::transport::{HttpMethod, StsTokenBody, basic_authorization, decode_sts_json_response};

/// Exchanges long-lived credentials for a short-lived [`Token`].
pub trait TokenIssuer: Send + Sync {
    fn issue<'a>(&'a self, credentials: &'a Credentials) -> BoxFuture<'a, Result<Token, OdgError>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Where the token service reports the token expiry.
///
/// String values are parsed as HTTP dates or RFC 3339; numeric body fields are Unix seconds.
pub enum ExpirySource {
    /// A response header, `Expires` by default.
    Header(String),
    /// A top-level field of the JSON body.
    BodyField(String),
    /// The header when present, the body field otherwise.
    HeaderOrBodyField { header: String, field: String },
}

impl Default for ExpirySource {
    fn default() -> Self {
        Self::Header("Expires".to_owned())
    }
}

enum RawExpiry<'a> {
    Text(&'a str),
    UnixSeconds(i64),
}

impl ExpirySource {
    fn lookup<'a>(
        &'a self,
        response: &'a HttpResponse,
        fields: &'a Map<String, Value>,
    ) -> Option<RawExpiry<'a>> {
        match self {
            Self::Header(name) => response.header(name).map(RawExpiry::Text),
            Self::BodyField(name) => body_field(fields, name),
            Self::HeaderOrBodyField { header, field } => response
                .header(header)
                .map(RawExpiry::Text)
                .or_else(|| body_field(fields, field)),
        }
    }

    fn token_from(&self, response: &HttpResponse, body: StsTokenBody) -> Result<Token, OdgError> {
        let token = match self.lookup(response, &body.fields) {
            Some(RawExpiry::Text(text)) => Token::parse(body.token, text)?,
            Some(RawExpiry::UnixSeconds(seconds)) => Token::from_unix_seconds(body.token, seconds)?,
            None => {
                return Err(OdgError::AuthProtocol(
                    format!("token response carries no expiry ({self:?})").into(),
                ));
            }
        };
        Ok(token)
    }
}

fn body_field<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<RawExpiry<'a>> {
    match fields.get(name)? {
        Value::String(text) => Some(RawExpiry::Text(text)),
        Value::Number(number) => number.as_i64().map(RawExpiry::UnixSeconds),
        _ => None,
    }
}

/// Token issuer backed by the Telekom security token service (HTTP Basic GET).
pub struct StsTokenIssuer {
    endpoint: String,
    expiry_source: ExpirySource,
    user_agent: String,
    http: Arc<dyn HttpTransport>,
}

impl StsTokenIssuer {
    pub fn new(
        endpoint: impl Into<String>,
        expiry_source: ExpirySource,
        user_agent: impl Into<String>,
        http: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            expiry_source,
            user_agent: user_agent.into(),
            http,
        }
    }
}

impl TokenIssuer for StsTokenIssuer {
    fn issue<'a>(&'a self, credentials: &'a Credentials) -> BoxFuture<'a, Result<Token, OdgError>> {
        Box::pin(async move {
            let request = HttpRequest {
                method: HttpMethod::Get,
                url: self.endpoint.clone(),
                headers: vec![
                    ("Authorization".to_owned(), basic_authorization(credentials)),
                    ("User-Agent".to_owned(), self.user_agent.clone()),
                    ("Accept".to_owned(), "application/json".to_owned()),
                    ("Content-Type".to_owned(), "application/json".to_owned()),
                ],
                body: None,
            };

            debug!(endpoint = %self.endpoint, "requesting token");
            let response = self
                .http
                .execute(request)
                .await
                .map_err(OdgError::Transport)?;

            if !(200..=299).contains(&response.status) {
                return Err(OdgError::AuthHttpStatus {
                    status: response.status,
                });
            }

            let body = decode_sts_json_response(&response.body)
                .map_err(|err| OdgError::AuthProtocol(Box::new(err)))?;

            self.expiry_source.token_from(&response, body)
        })
    }
}
