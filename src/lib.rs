//! Typed Rust client for the Telekom Developer Garden (ODG) HTTP API.
//!
//! Covers SMS and MMS sending, phone-number validation, quota and account administration,
//! and IP location. Calls are authorized with a short-lived token issued by the Telekom
//! security token service; the client renews expired tokens transparently.
//!
//! The crate is layered: a domain layer of strong types, a transport layer for wire-format
//! details, and a small client layer orchestrating requests.
//!
//! ```rust,no_run
//! use telekom_odg::{
//!     Credentials, Environment, MessageText, OdgClient, RawPhoneNumber, SendSms, SendSmsOptions,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), telekom_odg::OdgError> {
//!     let client = OdgClient::builder(Credentials::new("user", "secret")?)
//!         .environment(Environment::Sandbox)
//!         .build()?;
//!     client.authorize().await?;
//!
//!     let to = RawPhoneNumber::new("+4915112345678")?;
//!     let request = SendSms::new(to, MessageText::new("hello")?, SendSmsOptions::default());
//!     let _resp = client.send_sms(request).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    BoxFuture, DEFAULT_MAX_RETRIES, ExpirySource, HttpRequest, HttpResponse, HttpTransport,
    OdgClient, OdgClientBuilder, OdgError, ReqwestTransport, StsTokenIssuer, TokenIssuer,
    TransportFailure,
};
pub use domain::{
    AccountBalance, AccountId, Attachment, ContentType, Credentials, Environment, FileName,
    InvalidExpiryError, IpAddresses, LocateIp, MessageText, ModuleId, Originator, Password,
    PhoneNumber, RawPhoneNumber, Recipients, SendMms, SendMmsOptions, SendSms, SendSmsOptions,
    SendValidationSms, SendValidationSmsOptions, SetQuota, Subject, Token, Username,
    ValidateNumber, ValidationError, ValidationKey,
};
pub use transport::{HttpMethod, RequestDescriptor};
