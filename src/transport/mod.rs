//! Transport layer: HTTP and wire-format details (URL templates, encoding, headers).

mod admin;
mod iplocation;
mod mms;
mod sms;
mod sts;

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

use crate::domain::{Credentials, Environment};

pub use admin::{encode_account_balance, encode_quota, encode_set_quota};
pub use iplocation::encode_locate_ip;
pub use mms::encode_send_mms;
pub use sms::{
    encode_invalidate_number, encode_send_sms, encode_send_validation_sms,
    encode_validate_number, encode_validated_numbers,
};
pub use sts::{StsTokenBody, decode_sts_json_response};

/// Default gateway prefix of every endpoint template.
pub const DEFAULT_GATEWAY_BASE: &str = "https://gateway.developer.telekom.com";

/// Default token service endpoint.
pub const DEFAULT_STS_ENDPOINT: &str = "https://sts.idm.telekom.com/rest-v1/tokens/odg";

/// Placeholder replaced by the configured [`Environment`].
pub const ENVIRONMENT_PLACEHOLDER: &str = "<environment>";

const TAUTH_REALM: &str = "https://odg.t-online.de";

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Characters escaped in a trailing path segment: everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const PATH_SEGMENT_ENCODED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// `true` when parameters travel in the query string rather than a form body.
    pub fn encodes_query(self) -> bool {
        matches!(self, Self::Get | Self::Delete)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One logical gateway call, before authorization and URL materialization.
pub struct RequestDescriptor {
    pub method: HttpMethod,
    /// Path below the gateway base, containing [`ENVIRONMENT_PLACEHOLDER`].
    pub url_template: String,
    /// Trailing path segment (percent-encoded on materialization).
    pub path_segment: Option<String>,
    /// Parameters in insertion order.
    pub params: Vec<(String, String)>,
}

impl RequestDescriptor {
    pub fn new(method: HttpMethod, url_template: impl Into<String>) -> Self {
        Self {
            method,
            url_template: url_template.into(),
            path_segment: None,
            params: Vec::new(),
        }
    }

    pub fn with_path_segment(mut self, segment: impl Into<String>) -> Self {
        self.path_segment = Some(segment.into());
        self
    }

    pub fn param(mut self, key: &str, value: impl Into<String>) -> Self {
        self.params.push((key.to_owned(), value.into()));
        self
    }

    pub fn param_opt(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// Form body for methods that do not encode parameters in the query string.
    pub fn body(&self) -> Option<String> {
        if self.method.encodes_query() {
            None
        } else {
            Some(encode_params(&self.params))
        }
    }
}

/// Encode parameters as `application/x-www-form-urlencoded`, preserving order.
pub fn encode_params(params: &[(String, String)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish()
}

/// Resolve a descriptor into the concrete URL for `environment`.
pub fn materialize_url(
    gateway_base: &str,
    descriptor: &RequestDescriptor,
    environment: Environment,
) -> Result<Url, url::ParseError> {
    let template = format!(
        "{}{}",
        gateway_base.trim_end_matches('/'),
        descriptor.url_template
    );
    let mut url = Url::parse(&template.replace(ENVIRONMENT_PLACEHOLDER, environment.as_str()))?;

    if let Some(segment) = descriptor.path_segment.as_deref() {
        let path = format!(
            "{}/{}",
            url.path().trim_end_matches('/'),
            utf8_percent_encode(segment, PATH_SEGMENT_ENCODED)
        );
        url.set_path(&path);
    }

    if descriptor.method.encodes_query() && !descriptor.params.is_empty() {
        url.set_query(Some(&encode_params(&descriptor.params)));
    }

    Ok(url)
}

/// Provider-specific `Authorization` header value carrying a gateway token.
pub fn tauth_authorization(token: &str) -> String {
    format!("TAuth realm=\"{TAUTH_REALM}\",tauth_token=\"{token}\"")
}

/// HTTP Basic `Authorization` header value for the token service.
pub fn basic_authorization(credentials: &Credentials) -> String {
    let pair = format!(
        "{}:{}",
        credentials.username().as_str(),
        credentials.password().as_str()
    );
    format!("Basic {}", STANDARD.encode(pair))
}
