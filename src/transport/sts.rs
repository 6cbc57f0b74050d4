use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response does not contain a token")]
    MissingToken,
}

#[derive(Debug, Clone, Deserialize)]
struct StsJsonResponse {
    #[serde(default)]
    token: Option<String>,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

#[derive(Clone, PartialEq)]
/// Decoded token service body: the token plus every other top-level field.
pub struct StsTokenBody {
    pub token: String,
    pub fields: Map<String, Value>,
}

impl std::fmt::Debug for StsTokenBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StsTokenBody")
            .field("token", &"[censored]")
            .field("fields", &self.fields)
            .finish()
    }
}

pub fn decode_sts_json_response(json: &str) -> Result<StsTokenBody, TransportError> {
    let parsed: StsJsonResponse = serde_json::from_str(json)?;
    match parsed.token {
        Some(token) if !token.is_empty() => Ok(StsTokenBody {
            token,
            fields: parsed.fields,
        }),
        _ => Err(TransportError::MissingToken),
    }
}
