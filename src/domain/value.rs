use std::env::VarError;
use std::fmt;
use std::net::IpAddr;
use std::path::PathBuf;
use std::str::FromStr;

use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Gateway environment substituted into every endpoint URL.
pub enum Environment {
    #[default]
    Production,
    Sandbox,
    /// Provider-side mock: requests are answered with canned data and not billed.
    Mock,
}

impl Environment {
    /// Environment variable consulted by [`Environment::from_env`].
    pub const ENV_VAR: &'static str = "ODG_ENVIRONMENT";

    /// Path segment used by the gateway for this environment.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Sandbox => "sandbox",
            Self::Mock => "mock",
        }
    }

    /// Read `ODG_ENVIRONMENT`, falling back to production when unset.
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_var(std::env::var(Self::ENV_VAR))
    }

    pub(crate) fn from_var(var: Result<String, VarError>) -> Result<Self, ValidationError> {
        match var {
            Ok(value) => value.parse(),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(value)) => Err(ValidationError::UnknownEnvironment {
                input: value.to_string_lossy().into_owned(),
            }),
        }
    }
}

impl FromStr for Environment {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "sandbox" => Ok(Self::Sandbox),
            "mock" => Ok(Self::Mock),
            _ => Err(ValidationError::UnknownEnvironment {
                input: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Developer Garden account user name.
///
/// Invariant: non-empty after trimming.
pub struct Username(String);

impl Username {
    pub const FIELD: &'static str = "username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Missing { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Developer Garden account password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed). `Debug` output is
/// redacted.
pub struct Password(String);

impl Password {
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Missing { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password([censored])")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Long-lived credentials exchanged for short-lived tokens.
pub struct Credentials {
    username: Username,
    password: Password,
}

impl Credentials {
    pub const USERNAME_ENV_VAR: &'static str = "ODG_USERNAME";
    pub const PASSWORD_ENV_VAR: &'static str = "ODG_PASSWORD";

    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            password: Password::new(password)?,
        })
    }

    /// Read `ODG_USERNAME` and `ODG_PASSWORD`.
    pub fn from_env() -> Result<Self, ValidationError> {
        let username = std::env::var(Self::USERNAME_ENV_VAR).unwrap_or_default();
        let password = std::env::var(Self::PASSWORD_ENV_VAR).unwrap_or_default();
        Self::new(username, password)
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &Password {
        &self.password
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated phone number as sent to the gateway.
///
/// Invariant: non-empty after trimming. This type does not normalize; if you want E.164
/// normalization, parse into [`PhoneNumber`] and convert it into [`RawPhoneNumber`].
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// Form field name used by the gateway (`number`).
    pub const FIELD: &'static str = "number";

    /// Create a validated (non-empty) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Missing { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to the gateway.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality, ordering, and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    pub const FIELD: &'static str = "number";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Missing { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One or more recipients, sent comma-separated in the `number` field.
///
/// Invariant: non-empty.
pub struct Recipients(Vec<RawPhoneNumber>);

impl Recipients {
    pub const FIELD: &'static str = "number";

    pub fn new(numbers: Vec<RawPhoneNumber>) -> Result<Self, ValidationError> {
        if numbers.is_empty() {
            return Err(ValidationError::Missing { field: Self::FIELD });
        }
        Ok(Self(numbers))
    }

    pub fn one(number: RawPhoneNumber) -> Self {
        Self(vec![number])
    }

    pub fn as_slice(&self) -> &[RawPhoneNumber] {
        &self.0
    }

    /// Comma-joined wire representation.
    pub fn joined(&self) -> String {
        self.0
            .iter()
            .map(RawPhoneNumber::raw)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl From<RawPhoneNumber> for Recipients {
    fn from(value: RawPhoneNumber) -> Self {
        Self::one(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message text (`message`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    pub const FIELD: &'static str = "message";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Missing { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender as displayed to the recipient (`originator`).
///
/// Invariant: non-empty after trimming. A phone number is only accepted by the gateway once it
/// has been validated via the SMS validation service.
pub struct Originator(String);

impl Originator {
    pub const FIELD: &'static str = "originator";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Missing { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sub-account billed for the call. When absent, the main account is billed.
///
/// Invariant: non-empty after trimming.
pub struct AccountId(String);

impl AccountId {
    /// Field name used by the messaging services (`account`).
    pub const FIELD: &'static str = "account";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Missing { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Six-character validation code sent to the number being validated (`key`).
///
/// Invariant: non-empty after trimming.
pub struct ValidationKey(String);

impl ValidationKey {
    pub const FIELD: &'static str = "key";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Missing { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// MMS subject line (`subject`).
///
/// Invariant: non-empty after trimming. The original value is preserved.
pub struct Subject(String);

impl Subject {
    pub const FIELD: &'static str = "subject";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Missing { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Attachment file name as announced to the recipient (`filename`).
pub struct FileName(String);

impl FileName {
    pub const FIELD: &'static str = "filename";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Missing { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// MIME type of the attachment (`contentType`), e.g. `image/png`.
pub struct ContentType(String);

impl ContentType {
    pub const FIELD: &'static str = "contentType";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Missing { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// MMS attachment payload. Sent base64-encoded in the `attachment` field.
pub enum Attachment {
    /// In-memory content.
    Bytes(Vec<u8>),
    /// Content read from the file at the given path when the request is sent.
    File(PathBuf),
}

impl Attachment {
    pub const FIELD: &'static str = "attachment";

    /// Prefix that marks a string attachment as a file reference.
    pub const FILE_PREFIX: char = '@';

    /// Interpret `value` as a file reference when it starts with `@`, otherwise as literal
    /// content.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if let Some(path) = value.strip_prefix(Self::FILE_PREFIX) {
            if path.trim().is_empty() {
                return Err(ValidationError::Missing { field: Self::FIELD });
            }
            return Ok(Self::File(PathBuf::from(path)));
        }
        if value.is_empty() {
            return Err(ValidationError::Missing { field: Self::FIELD });
        }
        Ok(Self::Bytes(value.as_bytes().to_vec()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// IP addresses to locate, sent comma-separated in the `ipaddress` field.
///
/// Invariant: non-empty.
pub struct IpAddresses(Vec<IpAddr>);

impl IpAddresses {
    pub const FIELD: &'static str = "ipaddress";

    pub fn new(addresses: Vec<IpAddr>) -> Result<Self, ValidationError> {
        if addresses.is_empty() {
            return Err(ValidationError::Missing { field: Self::FIELD });
        }
        Ok(Self(addresses))
    }

    pub fn as_slice(&self) -> &[IpAddr] {
        &self.0
    }

    pub fn joined(&self) -> String {
        self.0
            .iter()
            .map(IpAddr::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl From<IpAddr> for IpAddresses {
    fn from(value: IpAddr) -> Self {
        Self(vec![value])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Service and environment whose quota is queried or changed (`moduleID`).
pub enum ModuleId {
    SmsProduction,
    SmsSandbox,
    MmsProduction,
    MmsSandbox,
    VoiceButlerProduction,
    VoiceButlerSandbox,
    CcsProduction,
    CcsSandbox,
    IpLocationProduction,
    IpLocationSandbox,
}

impl ModuleId {
    pub const FIELD: &'static str = "moduleID";

    const ALL: [Self; 10] = [
        Self::SmsProduction,
        Self::SmsSandbox,
        Self::MmsProduction,
        Self::MmsSandbox,
        Self::VoiceButlerProduction,
        Self::VoiceButlerSandbox,
        Self::CcsProduction,
        Self::CcsSandbox,
        Self::IpLocationProduction,
        Self::IpLocationSandbox,
    ];

    /// Identifier as expected by the admin service.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SmsProduction => "SmsProduction",
            Self::SmsSandbox => "SmsSandbox",
            Self::MmsProduction => "MmsProduction",
            Self::MmsSandbox => "MmsSandbox",
            Self::VoiceButlerProduction => "VoiceButlerProduction",
            Self::VoiceButlerSandbox => "VoiceButlerSandbox",
            Self::CcsProduction => "CCSProduction",
            Self::CcsSandbox => "CCSSandbox",
            Self::IpLocationProduction => "IPLocationProduction",
            Self::IpLocationSandbox => "IPLocationSandbox",
        }
    }
}

impl FromStr for ModuleId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Missing { field: Self::FIELD });
        }
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == trimmed)
            .ok_or_else(|| ValidationError::UnknownModuleId {
                input: trimmed.to_owned(),
            })
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
