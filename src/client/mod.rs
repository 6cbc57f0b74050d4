//! Client layer: authorizes, orchestrates transport calls and maps domain ↔ transport.

mod error;
mod executor;
mod http;
mod issuer;

use std::sync::Arc;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;
use tokio::sync::RwLock;
use url::Url;

use crate::domain::{
    AccountBalance, Attachment, Credentials, Environment, LocateIp, ModuleId, RawPhoneNumber,
    SendMms, SendSms, SendValidationSms, SetQuota, Token, ValidateNumber,
};
use crate::transport::{self, DEFAULT_GATEWAY_BASE, DEFAULT_STS_ENDPOINT, RequestDescriptor};

pub use error::OdgError;
pub use http::{
    BoxFuture, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, TransportFailure,
};
pub use issuer::{ExpirySource, StsTokenIssuer, TokenIssuer};

use executor::Executor;

/// Re-authorizations attempted per call before giving up on an expired token.
pub const DEFAULT_MAX_RETRIES: u32 = 5;

const DEFAULT_USER_AGENT: &str = concat!("telekom-odg/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
/// Builder for [`OdgClient`].
///
/// Use this when you need to pick the environment, customize endpoints, timeout or
/// user-agent, or plug in a different transport or token issuer.
pub struct OdgClientBuilder {
    credentials: Credentials,
    environment: Environment,
    gateway_base: String,
    sts_endpoint: String,
    expiry_source: ExpirySource,
    max_retries: u32,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
    token_issuer: Option<Arc<dyn TokenIssuer>>,
}

impl OdgClientBuilder {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            environment: Environment::default(),
            gateway_base: DEFAULT_GATEWAY_BASE.to_owned(),
            sts_endpoint: DEFAULT_STS_ENDPOINT.to_owned(),
            expiry_source: ExpirySource::default(),
            max_retries: DEFAULT_MAX_RETRIES,
            timeout: None,
            user_agent: None,
            transport: None,
            token_issuer: None,
        }
    }

    /// Gateway environment substituted into every endpoint URL (default: production).
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Override the `https://gateway.developer.telekom.com` prefix of every endpoint.
    pub fn gateway_base(mut self, base: impl Into<String>) -> Self {
        self.gateway_base = base.into();
        self
    }

    /// Override the token service URL.
    pub fn sts_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.sts_endpoint = endpoint.into();
        self
    }

    /// Where the token service reports the expiry (default: the `Expires` header).
    pub fn expiry_source(mut self, source: ExpirySource) -> Self {
        self.expiry_source = source;
        self
    }

    /// Re-authorizations attempted per call while the token stays expired.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set an HTTP client timeout applied to each request.
    ///
    /// Only affects the built-in `reqwest` transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a custom transport for both the gateway and the token service.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use a custom token issuer instead of the token service.
    pub fn token_issuer(mut self, issuer: Arc<dyn TokenIssuer>) -> Self {
        self.token_issuer = Some(issuer);
        self
    }

    pub fn build(self) -> Result<OdgClient, OdgError> {
        Url::parse(&self.gateway_base)?;
        Url::parse(&self.sts_endpoint)?;

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned());

        let http: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                let client = builder
                    .build()
                    .map_err(|err| OdgError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport::new(client))
            }
        };

        let issuer: Arc<dyn TokenIssuer> = match self.token_issuer {
            Some(issuer) => issuer,
            None => Arc::new(StsTokenIssuer::new(
                self.sts_endpoint,
                self.expiry_source,
                user_agent.clone(),
                http.clone(),
            )),
        };

        Ok(OdgClient {
            executor: Arc::new(Executor {
                environment: self.environment,
                gateway_base: self.gateway_base,
                user_agent,
                max_retries: self.max_retries,
                credentials: self.credentials,
                issuer,
                http,
                token: RwLock::new(None),
            }),
        })
    }
}

#[derive(Clone)]
/// High-level Telekom Developer Garden client.
///
/// Call [`OdgClient::authorize`] once before any other method; afterwards expired tokens are
/// renewed transparently. Clones share the same token.
///
/// Every endpoint method returns the decoded JSON body on HTTP 200.
pub struct OdgClient {
    executor: Arc<Executor>,
}

impl OdgClient {
    /// Create a production client with default settings.
    ///
    /// For more customization, use [`OdgClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        let http: Arc<dyn HttpTransport> =
            Arc::new(ReqwestTransport::new(reqwest::Client::new()));
        let user_agent = DEFAULT_USER_AGENT.to_owned();
        Self {
            executor: Arc::new(Executor {
                environment: Environment::default(),
                gateway_base: DEFAULT_GATEWAY_BASE.to_owned(),
                user_agent: user_agent.clone(),
                max_retries: DEFAULT_MAX_RETRIES,
                credentials,
                issuer: Arc::new(StsTokenIssuer::new(
                    DEFAULT_STS_ENDPOINT,
                    ExpirySource::default(),
                    user_agent,
                    http.clone(),
                )),
                http,
                token: RwLock::new(None),
            }),
        }
    }

    pub fn builder(credentials: Credentials) -> OdgClientBuilder {
        OdgClientBuilder::new(credentials)
    }

    pub fn environment(&self) -> Environment {
        self.executor.environment
    }

    /// Obtain a token from the token service. Required once before issuing requests.
    ///
    /// Errors:
    /// - [`OdgError::AuthHttpStatus`] when the token service rejects the credentials,
    /// - [`OdgError::AuthProtocol`] / [`OdgError::InvalidExpiry`] for malformed answers,
    /// - [`OdgError::Transport`] for network failures.
    pub async fn authorize(&self) -> Result<Token, OdgError> {
        self.executor.authorize().await
    }

    /// The token currently in use, if the client has been authorized.
    pub async fn token(&self) -> Option<Token> {
        self.executor.current_token().await
    }

    /// Issue an arbitrary authorized gateway call.
    ///
    /// Errors:
    /// - [`OdgError::NotAuthorized`] if [`OdgClient::authorize`] never succeeded,
    /// - [`OdgError::MaxRetriesExceeded`] if the token stays expired after re-authorizing,
    /// - [`OdgError::ResponseParse`] for non-JSON bodies,
    /// - [`OdgError::HttpStatus`] for any status other than 200 (with the parsed body).
    pub async fn request(&self, descriptor: &RequestDescriptor) -> Result<Value, OdgError> {
        self.executor.request(descriptor).await
    }

    /// Send an SMS, or a flash SMS when `options.flash` is set.
    pub async fn send_sms(&self, request: SendSms) -> Result<Value, OdgError> {
        self.request(&transport::encode_send_sms(&request)).await
    }

    /// Send a validation code to a number.
    pub async fn send_validation_sms(
        &self,
        request: SendValidationSms,
    ) -> Result<Value, OdgError> {
        self.request(&transport::encode_send_validation_sms(&request))
            .await
    }

    /// Confirm a number with the code it received.
    pub async fn validate_number(&self, request: ValidateNumber) -> Result<Value, OdgError> {
        self.request(&transport::encode_validate_number(&request))
            .await
    }

    /// Withdraw a validation, or abort a pending validation process.
    pub async fn invalidate_number(&self, number: RawPhoneNumber) -> Result<Value, OdgError> {
        self.request(&transport::encode_invalidate_number(&number))
            .await
    }

    /// List the numbers validated for this account.
    pub async fn validated_numbers(&self) -> Result<Value, OdgError> {
        self.request(&transport::encode_validated_numbers()).await
    }

    /// Send an MMS.
    ///
    /// A [`Attachment::File`] is read when the call is made; failures surface as
    /// [`OdgError::AttachmentRead`] before anything is sent.
    pub async fn send_mms(&self, request: SendMms) -> Result<Value, OdgError> {
        let attachment = match request.options().attachment.as_ref() {
            Some(attachment) => Some(encode_attachment(attachment).await?),
            None => None,
        };
        self.request(&transport::encode_send_mms(&request, attachment.as_deref()))
            .await
    }

    /// Query the quota of a module.
    pub async fn quota(&self, module: ModuleId) -> Result<Value, OdgError> {
        self.request(&transport::encode_quota(module)).await
    }

    /// Change the maximum daily quota of a module.
    pub async fn set_quota(&self, request: SetQuota) -> Result<Value, OdgError> {
        self.request(&transport::encode_set_quota(&request)).await
    }

    /// Query the account balance.
    pub async fn account_balance(&self, request: AccountBalance) -> Result<Value, OdgError> {
        self.request(&transport::encode_account_balance(&request))
            .await
    }

    /// Locate IP addresses.
    pub async fn locate_ip(&self, request: LocateIp) -> Result<Value, OdgError> {
        self.request(&transport::encode_locate_ip(&request)).await
    }
}

async fn encode_attachment(attachment: &Attachment) -> Result<String, OdgError> {
    match attachment {
        Attachment::Bytes(bytes) => Ok(STANDARD.encode(bytes)),
        Attachment::File(path) => {
            let bytes = tokio::fs::read(path)
                .await
                .map_err(|source| OdgError::AttachmentRead {
                    path: path.clone(),
                    source,
                })?;
            Ok(STANDARD.encode(bytes))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::net::IpAddr;
    use std::path::PathBuf;
    use std::sync::Mutex;

    use chrono::{Duration as TimeDelta, Utc};
    use serde_json::json;

    use crate::domain::{
        MessageText, SendMmsOptions, SendSmsOptions, Subject, ValidationError, ValidationKey,
    };
    use crate::transport::HttpMethod;

    use super::http::tests::FakeTransport;
    use super::*;

    /// Issues `tok-<n>` for the n-th call; optionally already expired or failing on one call.
    struct FakeIssuer {
        calls: Mutex<u32>,
        expired: Mutex<bool>,
        fail_on: Option<u32>,
    }

    impl FakeIssuer {
        fn fresh() -> Arc<Self> {
            Self::new(false, None)
        }

        fn always_expired() -> Arc<Self> {
            Self::new(true, None)
        }

        fn new(expired: bool, fail_on: Option<u32>) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(0),
                expired: Mutex::new(expired),
                fail_on,
            })
        }

        fn calls(&self) -> u32 {
            *self.calls.lock().unwrap()
        }

        fn set_expired(&self, expired: bool) {
            *self.expired.lock().unwrap() = expired;
        }
    }

    impl TokenIssuer for FakeIssuer {
        fn issue<'a>(
            &'a self,
            _credentials: &'a Credentials,
        ) -> BoxFuture<'a, Result<Token, OdgError>> {
            Box::pin(async move {
                let call = {
                    let mut calls = self.calls.lock().unwrap();
                    *calls += 1;
                    *calls
                };
                if self.fail_on == Some(call) {
                    return Err(OdgError::AuthHttpStatus { status: 401 });
                }
                let expires_at = if *self.expired.lock().unwrap() {
                    Utc::now() - TimeDelta::hours(1)
                } else {
                    Utc::now() + TimeDelta::hours(1)
                };
                Ok(Token::new(format!("tok-{call}"), expires_at))
            })
        }
    }

    fn make_client(transport: &FakeTransport, issuer: Arc<FakeIssuer>) -> OdgClient {
        OdgClient::builder(Credentials::new("user", "pass").unwrap())
            .environment(Environment::Sandbox)
            .gateway_base("https://gateway.example.invalid")
            .user_agent("test-agent")
            .transport(Arc::new(transport.clone()))
            .token_issuer(issuer)
            .build()
            .unwrap()
    }

    fn send_sms_request() -> SendSms {
        SendSms::new(
            RawPhoneNumber::new("+4915111111111").unwrap(),
            MessageText::new("hello world").unwrap(),
            SendSmsOptions::default(),
        )
    }

    #[tokio::test]
    async fn request_without_authorization_fails() {
        let transport = FakeTransport::new(200, "{}");
        let issuer = FakeIssuer::fresh();
        let client = make_client(&transport, issuer.clone());

        let err = client.send_sms(send_sms_request()).await.unwrap_err();
        assert!(matches!(err, OdgError::NotAuthorized));
        assert_eq!(issuer.calls(), 0);
        assert!(transport.requests().is_empty());

        let err = client.validated_numbers().await.unwrap_err();
        assert!(matches!(err, OdgError::NotAuthorized));
    }

    #[tokio::test]
    async fn ok_response_yields_parsed_body() {
        let transport = FakeTransport::new(200, r#"{"status":"ok"}"#);
        let client = make_client(&transport, FakeIssuer::fresh());
        client.authorize().await.unwrap();

        let value = client.send_sms(send_sms_request()).await.unwrap();
        assert_eq!(value, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn non_200_status_keeps_the_parsed_error_body() {
        let transport = FakeTransport::new(503, r#"{"status":{"statusCode":"0020"}}"#);
        let client = make_client(&transport, FakeIssuer::fresh());
        client.authorize().await.unwrap();

        let err = client.send_sms(send_sms_request()).await.unwrap_err();
        match err {
            OdgError::HttpStatus { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, json!({"status": {"statusCode": "0020"}}));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn invalid_json_is_a_parse_error_with_raw_body() {
        let transport = FakeTransport::new(502, "<html>bad gateway</html>");
        let client = make_client(&transport, FakeIssuer::fresh());
        client.authorize().await.unwrap();

        let err = client.send_sms(send_sms_request()).await.unwrap_err();
        match err {
            OdgError::ResponseParse { body, .. } => assert_eq!(body, "<html>bad gateway</html>"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn transport_failure_is_not_retried() {
        let transport = FakeTransport::failing();
        let issuer = FakeIssuer::fresh();
        let client = make_client(&transport, issuer.clone());
        client.authorize().await.unwrap();

        let err = client.send_sms(send_sms_request()).await.unwrap_err();
        assert!(matches!(err, OdgError::Transport(_)));
        assert_eq!(transport.requests().len(), 1);
        assert_eq!(issuer.calls(), 1);
    }

    #[tokio::test]
    async fn always_expired_token_stops_at_the_retry_ceiling() {
        let transport = FakeTransport::new(200, "{}");
        let issuer = FakeIssuer::always_expired();
        let client = make_client(&transport, issuer.clone());
        client.authorize().await.unwrap();

        let err = client.send_sms(send_sms_request()).await.unwrap_err();
        assert!(matches!(
            err,
            OdgError::MaxRetriesExceeded {
                retries: DEFAULT_MAX_RETRIES
            }
        ));
        // One explicit authorization plus one per retry.
        assert_eq!(issuer.calls(), 1 + DEFAULT_MAX_RETRIES);
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn custom_retry_ceiling_is_honored() {
        let transport = FakeTransport::new(200, "{}");
        let issuer = FakeIssuer::always_expired();
        let client = OdgClient::builder(Credentials::new("user", "pass").unwrap())
            .max_retries(2)
            .transport(Arc::new(transport.clone()))
            .token_issuer(issuer.clone())
            .build()
            .unwrap();
        client.authorize().await.unwrap();

        let err = client.validated_numbers().await.unwrap_err();
        assert!(matches!(err, OdgError::MaxRetriesExceeded { retries: 2 }));
        assert_eq!(issuer.calls(), 3);
    }

    #[tokio::test]
    async fn reissue_failure_is_propagated() {
        let transport = FakeTransport::new(200, "{}");
        // Call 1 authorizes, calls 2.. are reissues; the second reissue fails.
        let issuer = FakeIssuer::new(true, Some(3));
        let client = make_client(&transport, issuer.clone());
        client.authorize().await.unwrap();

        let err = client.send_sms(send_sms_request()).await.unwrap_err();
        assert!(matches!(err, OdgError::AuthHttpStatus { status: 401 }));
        assert_eq!(issuer.calls(), 3);
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn expired_token_is_replaced_before_the_request_is_sent() {
        let transport = FakeTransport::new(200, r#"{"status":"ok"}"#);
        let issuer = FakeIssuer::always_expired();
        let client = make_client(&transport, issuer.clone());
        client.authorize().await.unwrap();
        issuer.set_expired(false);

        client.send_sms(send_sms_request()).await.unwrap();

        assert_eq!(issuer.calls(), 2);
        let request = transport.last_request().unwrap();
        assert_eq!(
            request.header("Authorization"),
            Some("TAuth realm=\"https://odg.t-online.de\",tauth_token=\"tok-2\"")
        );
        assert_eq!(client.token().await.unwrap().token(), "tok-2");
    }

    #[tokio::test]
    async fn concurrent_calls_share_the_token_slot() {
        let transport = FakeTransport::new(200, r#"{"status":"ok"}"#);
        let issuer = FakeIssuer::always_expired();
        let client = make_client(&transport, issuer.clone());
        client.authorize().await.unwrap();
        issuer.set_expired(false);

        let other = client.clone();
        let (first, second) = tokio::join!(
            client.send_sms(send_sms_request()),
            other.validated_numbers()
        );
        assert!(first.is_ok());
        assert!(second.is_ok());
        // Each call may reissue once; a duplicate reissue is tolerated.
        assert!((2..=3).contains(&issuer.calls()));
        assert_eq!(transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn post_request_carries_form_body_and_headers() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client(&transport, FakeIssuer::fresh());
        client.authorize().await.unwrap();

        client.send_sms(send_sms_request()).await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(
            request.url,
            "https://gateway.example.invalid/p3gw-mod-odg-sms/rest/sandbox/sms"
        );
        let body = "number=%2B4915111111111&message=hello+world";
        assert_eq!(request.body.as_deref(), Some(body));
        assert_eq!(
            request.header("content-type"),
            Some("application/x-www-form-urlencoded")
        );
        assert_eq!(
            request.header("content-length"),
            Some(body.len().to_string().as_str())
        );
        assert_eq!(request.header("accept"), Some("application/json"));
        assert_eq!(request.header("user-agent"), Some("test-agent"));
        assert_eq!(
            request.header("authorization"),
            Some("TAuth realm=\"https://odg.t-online.de\",tauth_token=\"tok-1\"")
        );
    }

    #[tokio::test]
    async fn get_request_uses_query_string_and_no_body() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client(&transport, FakeIssuer::fresh());
        client.authorize().await.unwrap();

        let addresses = vec![IpAddr::from([193, 99, 144, 85]), IpAddr::from([8, 8, 4, 4])];
        client
            .locate_ip(LocateIp::new(
                crate::domain::IpAddresses::new(addresses).unwrap(),
            ))
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(
            request.url,
            "https://gateway.example.invalid/p3gw-mod-odg-iplocation/rest/sandbox/location?ipaddress=193.99.144.85%2C8.8.4.4"
        );
        assert_eq!(request.body, None);
        assert_eq!(request.header("content-length"), None);
    }

    #[tokio::test]
    async fn validation_and_admin_endpoints_use_their_verbs_and_paths() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client(&transport, FakeIssuer::fresh());
        client.authorize().await.unwrap();

        let number = RawPhoneNumber::new("+4915111111111").unwrap();
        client
            .validate_number(ValidateNumber::new(
                number.clone(),
                ValidationKey::new("A3B5DG").unwrap(),
            ))
            .await
            .unwrap();
        client.invalidate_number(number).await.unwrap();
        client.quota(ModuleId::SmsSandbox).await.unwrap();
        client
            .set_quota(SetQuota::new(ModuleId::SmsSandbox, 100))
            .await
            .unwrap();
        client
            .account_balance(AccountBalance::default())
            .await
            .unwrap();

        let base = "https://gateway.example.invalid";
        let seen = transport
            .requests()
            .into_iter()
            .map(|request| (request.method, request.url))
            .collect::<Vec<_>>();
        assert_eq!(
            seen,
            vec![
                (
                    HttpMethod::Post,
                    format!(
                        "{base}/p3gw-mod-odg-sms-validation/rest/sandbox/validatednumbers/%2B4915111111111"
                    )
                ),
                (
                    HttpMethod::Delete,
                    format!(
                        "{base}/p3gw-mod-odg-sms-validation/rest/sandbox/validatednumbers/%2B4915111111111"
                    )
                ),
                (
                    HttpMethod::Get,
                    format!("{base}/p3gw-mod-odg-admin/rest/sandbox/quotainfo/SmsSandbox")
                ),
                (
                    HttpMethod::Put,
                    format!("{base}/p3gw-mod-odg-admin/rest/sandbox/quotainfo/SmsSandbox")
                ),
                (
                    HttpMethod::Post,
                    format!("{base}/p3gw-mod-odg-admin/rest/sandbox/account/balance")
                ),
            ]
        );
    }

    #[tokio::test]
    async fn send_mms_reads_file_attachment_as_base64() {
        let path = std::env::temp_dir().join(format!(
            "telekom-odg-attachment-{}.txt",
            std::process::id()
        ));
        tokio::fs::write(&path, b"hello").await.unwrap();

        let transport = FakeTransport::new(200, "{}");
        let client = make_client(&transport, FakeIssuer::fresh());
        client.authorize().await.unwrap();

        let options = SendMmsOptions {
            attachment: Some(Attachment::File(path.clone())),
            ..Default::default()
        };
        let request = SendMms::new(
            RawPhoneNumber::new("+4915111111111").unwrap(),
            Subject::new("greeting").unwrap(),
            options,
        )
        .unwrap();
        client.send_mms(request).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(
            request.url,
            "https://gateway.example.invalid/p3gw-mod-odg-mms/rest/sandbox/sendMMS"
        );
        assert_eq!(
            request.body.as_deref(),
            Some("number=%2B4915111111111&subject=greeting&attachment=aGVsbG8%3D")
        );
    }

    #[tokio::test]
    async fn send_mms_reports_unreadable_attachment() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client(&transport, FakeIssuer::fresh());
        client.authorize().await.unwrap();

        let missing = PathBuf::from("/definitely/not/here/picture.png");
        let options = SendMmsOptions {
            attachment: Some(Attachment::File(missing.clone())),
            ..Default::default()
        };
        let request = SendMms::new(
            RawPhoneNumber::new("+4915111111111").unwrap(),
            Subject::new("greeting").unwrap(),
            options,
        )
        .unwrap();

        let err = client.send_mms(request).await.unwrap_err();
        match err {
            OdgError::AttachmentRead { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn builder_rejects_invalid_urls() {
        let err = OdgClient::builder(Credentials::new("user", "pass").unwrap())
            .gateway_base("not a url")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, OdgError::InvalidUrl(_)));
    }

    #[test]
    fn builder_defaults() {
        let client = OdgClient::builder(Credentials::new("user", "pass").unwrap())
            .build()
            .unwrap();
        assert_eq!(client.environment(), Environment::Production);
        assert_eq!(client.executor.max_retries, DEFAULT_MAX_RETRIES);
        assert_eq!(client.executor.gateway_base, DEFAULT_GATEWAY_BASE);
        assert!(client.executor.user_agent.starts_with("telekom-odg/"));
    }

    #[test]
    fn missing_parameters_are_named() {
        let err: OdgError = MessageText::new("  ").unwrap_err().into();
        assert!(matches!(
            err,
            OdgError::Validation(ValidationError::Missing { field: "message" })
        ));
    }
}
