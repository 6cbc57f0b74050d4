use std::fmt;

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid token expiry: {input:?}")]
/// The expiry supplied with a token could not be parsed into a point in time.
pub struct InvalidExpiryError {
    pub input: String,
}

#[derive(Clone, PartialEq, Eq)]
/// Short-lived security token used to authorize gateway calls.
///
/// Immutable once constructed; a re-authorization replaces the whole value. `Debug` output
/// never includes the token itself.
pub struct Token {
    value: String,
    expires_at: DateTime<Utc>,
}

impl Token {
    pub fn new(value: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            value: value.into(),
            expires_at,
        }
    }

    /// Build a token from a textual expiry.
    ///
    /// Accepts HTTP dates (RFC 2822, e.g. `Wed, 21 Oct 2015 07:28:00 GMT`) and RFC 3339
    /// timestamps.
    pub fn parse(value: impl Into<String>, expiry: &str) -> Result<Self, InvalidExpiryError> {
        Ok(Self::new(value, parse_expiry(expiry)?))
    }

    /// Build a token from an expiry given in seconds since the Unix epoch.
    pub fn from_unix_seconds(
        value: impl Into<String>,
        seconds: i64,
    ) -> Result<Self, InvalidExpiryError> {
        let expires_at =
            DateTime::<Utc>::from_timestamp(seconds, 0).ok_or_else(|| InvalidExpiryError {
                input: seconds.to_string(),
            })?;
        Ok(Self::new(value, expires_at))
    }

    pub fn token(&self) -> &str {
        &self.value
    }

    pub fn valid_until(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// `true` once the current time is strictly after the expiry.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("value", &"[censored]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

fn parse_expiry(input: &str) -> Result<DateTime<Utc>, InvalidExpiryError> {
    let trimmed = input.trim();
    DateTime::parse_from_rfc2822(trimmed)
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed))
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|_| InvalidExpiryError {
            input: input.to_owned(),
        })
}
