/*
[INPUT]:  Credentials, environment and transport configuration
[OUTPUT]: Decoded envelopes, unwrapped resources and binary downloads
[POS]:    HTTP layer - core connector implementation
[UPDATE]: When adding connection options or changing envelope/error handling
*/

use std::time::Duration;

use once_cell::sync::OnceCell;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::auth::Credentials;
use crate::config::ShipwireConfig;
use crate::http::{ApiRequest, Result, ShipwireError};
use crate::types::{Download, Envelope, Environment};

pub const DEFAULT_API_VERSION: &str = "v3";
pub const DEFAULT_USER_AGENT: &str = concat!("shipwire-connector/", env!("CARGO_PKG_VERSION"));

const JSON_MIME: &str = "application/json";
const PDF_MIME: &str = "application/pdf";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
    /// Version used for every call that does not pin its own
    pub api_version: String,
    /// Replaces the environment's base URL, e.g. to target a mock server
    pub base_url: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            base_url: None,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

/// reqwest client bound to one base URL and one authorization header
#[derive(Debug, Clone)]
struct Transport {
    http_client: Client,
    base_url: Url,
    authorization: HeaderValue,
}

impl Transport {
    fn build(
        credentials: &Credentials,
        environment: Environment,
        config: &ClientConfig,
    ) -> Result<Self> {
        let header = credentials.authorization_header().ok_or_else(|| {
            ShipwireError::Config("no usable Shipwire credentials configured".to_string())
        })?;
        let mut authorization = HeaderValue::from_str(&header)
            .map_err(|err| ShipwireError::Config(format!("invalid authorization header: {err}")))?;
        authorization.set_sensitive(true);

        let base_url = Url::parse(config.base_url.as_deref().unwrap_or(environment.base_url()))?;

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|err| ShipwireError::Config(format!("failed to build HTTP client: {err}")))?;

        debug!(environment = %environment, base_url = %base_url, "built shipwire transport");

        Ok(Self {
            http_client,
            base_url,
            authorization,
        })
    }

    fn endpoint(&self, version: &str, resource: &str) -> Result<Url> {
        let path = format!("/api/{version}/{}", resource.trim_start_matches('/'));
        Ok(self.base_url.join(&path)?)
    }
}

/// Single chokepoint for outbound Shipwire calls.
///
/// Owns credentials, environment and API version, and interprets response
/// envelopes into typed results or `ShipwireError`s. The underlying reqwest
/// client is built on construction and again, lazily, after `reconfigure`.
#[derive(Debug, Clone)]
pub struct Connector {
    credentials: Credentials,
    environment: Environment,
    config: ClientConfig,
    transport: OnceCell<Transport>,
}

impl Connector {
    /// Create a connector with default configuration
    pub fn new(credentials: Credentials, environment: Environment) -> Result<Self> {
        Self::with_config(credentials, environment, ClientConfig::default())
    }

    /// Create a connector with custom configuration.
    ///
    /// Fails with `ShipwireError::Config` when the credentials produce no
    /// authorization header.
    pub fn with_config(
        credentials: Credentials,
        environment: Environment,
        config: ClientConfig,
    ) -> Result<Self> {
        let connector = Self {
            credentials,
            environment,
            config,
            transport: OnceCell::new(),
        };
        connector.transport()?;
        Ok(connector)
    }

    pub fn from_config(config: &ShipwireConfig) -> Result<Self> {
        Self::with_config(
            config.credentials(),
            config.environment,
            config.client_config(),
        )
    }

    /// Replace credentials and, optionally, environment and client config.
    ///
    /// The current transport is dropped; the next call builds a new one from
    /// the updated settings.
    pub fn reconfigure(
        &mut self,
        credentials: Credentials,
        environment: Option<Environment>,
        config: Option<ClientConfig>,
    ) {
        self.credentials = credentials;
        if let Some(environment) = environment {
            self.environment = environment;
        }
        if let Some(config) = config {
            self.config = config;
        }
        self.transport = OnceCell::new();
        debug!(environment = %self.environment, "shipwire connector reconfigured");
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn api_version(&self) -> &str {
        &self.config.api_version
    }

    pub fn is_transport_built(&self) -> bool {
        self.transport.get().is_some()
    }

    fn transport(&self) -> Result<&Transport> {
        self.transport
            .get_or_try_init(|| Transport::build(&self.credentials, self.environment, &self.config))
    }

    fn headers(&self, transport: &Transport, accept: &'static str) -> Result<HeaderMap> {
        let user_agent = HeaderValue::from_str(&self.config.user_agent)
            .map_err(|err| ShipwireError::Config(format!("invalid user agent: {err}")))?;

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, user_agent);
        headers.insert(ACCEPT, HeaderValue::from_static(accept));
        headers.insert(AUTHORIZATION, transport.authorization.clone());
        Ok(headers)
    }

    /// Send a request and return the whole decoded envelope
    pub async fn request<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<Envelope<R>> {
        let transport = self.transport()?;
        let version = request
            .version
            .as_deref()
            .unwrap_or(&self.config.api_version);
        let url = transport.endpoint(version, &request.resource)?;

        let mut headers = self.headers(transport, JSON_MIME)?;
        if request.body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_MIME));
        }

        debug!(
            method = %request.method,
            resource = %request.resource,
            version,
            "dispatching shipwire request"
        );

        let mut builder = transport
            .http_client
            .request(request.method.clone(), url)
            .headers(headers)
            .query(&request.params);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            let envelope: Envelope = serde_json::from_str(&body)?;
            let envelope = check_envelope(envelope, &request.resource)?;
            Ok(envelope.into_typed()?)
        } else {
            failed_response(status, &body, request.return_on_error, &request.resource)
        }
    }

    /// Send a request and return only the envelope's `resource`
    pub async fn request_resource<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R> {
        let resource = request.resource.clone();
        self.request::<R>(request).await?.resource.ok_or_else(|| {
            ShipwireError::InvalidResponse(format!("response for '{resource}' carried no resource"))
        })
    }

    /// Fetch a binary document (labels) with `Accept: application/pdf`.
    ///
    /// There is no envelope to inspect, so failures are classified by the
    /// HTTP status alone.
    pub async fn download(&self, resource: &str) -> Result<Download> {
        let transport = self.transport()?;
        let url = transport.endpoint(&self.config.api_version, resource)?;
        let headers = self.headers(transport, PDF_MIME)?;

        debug!(resource, "downloading shipwire document");

        let response = transport.http_client.get(url).headers(headers).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await?;
            let error = ShipwireError::from_http_status(status, &body);
            warn!(resource, http_status = status.as_u16(), error = %error, "shipwire download failed");
            return Err(error);
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?;

        Ok(Download { content_type, body })
    }
}

/// Reject 2xx responses whose envelope reports a failure.
///
/// Runs on the raw envelope so an error payload never has to match `R`.
fn check_envelope(envelope: Envelope, resource: &str) -> Result<Envelope> {
    if envelope.is_api_error() {
        warn!(resource, status = envelope.status, "shipwire reported an error status");
        return Err(ShipwireError::Connection {
            message: envelope.message_or_default(),
            status: envelope.status,
        });
    }

    if let Some(summary) = envelope.error_summary() {
        warn!(resource, errors = %summary, "shipwire response carried errors");
        return Err(ShipwireError::Connection {
            message: summary,
            status: envelope.status,
        });
    }

    for warning in &envelope.warnings {
        warn!(resource, warning = %warning, "shipwire response warning");
    }

    Ok(envelope)
}

/// Interpret a non-2xx response
fn failed_response<R: DeserializeOwned>(
    status: StatusCode,
    body: &str,
    return_on_error: bool,
    resource: &str,
) -> Result<Envelope<R>> {
    let error = match serde_json::from_str::<Envelope>(body) {
        Ok(mut envelope) if return_on_error => {
            debug!(
                resource,
                http_status = status.as_u16(),
                status = envelope.status,
                "returning shipwire envelope despite error"
            );
            let typed = match envelope.resource.take().map(serde_json::from_value::<R>) {
                Some(Ok(typed)) => Some(typed),
                Some(Err(err)) => {
                    debug!(resource, error = %err, "dropping undecodable error resource");
                    None
                }
                None => None,
            };
            return Ok(envelope.with_resource(typed));
        }
        Ok(envelope) => ShipwireError::from_status(envelope.status, envelope.message_or_default()),
        Err(_) => ShipwireError::from_http_status(status, body),
    };
    warn!(resource, http_status = status.as_u16(), error = %error, "shipwire request failed");
    Err(error)
}
