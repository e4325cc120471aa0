//! Default [`HttpAdapter`] backed by `reqwest`.

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::errors::{HttpError, ParseError, TransportUnavailableError};
use crate::clients::http_adapter::HttpAdapter;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{Endpoint, HabrConfig};

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Content type of request bodies.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP transport for the Habrahabr API.
///
/// The adapter handles:
/// - URL construction from the configured endpoint
/// - The `client` and `token` auth headers, plus `Accept` and `User-Agent`
/// - The connect-phase timeout
/// - Redirects, which are never followed
/// - Form encoding of request bodies and JSON decoding of responses
///
/// # Thread Safety
///
/// `ReqwestAdapter` is `Send + Sync`. The inner `reqwest::Client` pools
/// connections, so one adapter can serve concurrent calls.
///
/// # Example
///
/// ```rust
/// use habrahabr_api::{ApiToken, ClientId, HabrConfig};
/// use habrahabr_api::clients::ReqwestAdapter;
///
/// let config = HabrConfig::builder()
///     .client_id(ClientId::new("client").unwrap())
///     .token(ApiToken::new("token").unwrap())
///     .build()
///     .unwrap();
///
/// let adapter = ReqwestAdapter::new(&config).unwrap();
/// assert_eq!(adapter.endpoint().as_ref(), "https://api.habrahabr.ru/v1");
/// ```
#[derive(Debug)]
pub struct ReqwestAdapter {
    client: reqwest::Client,
    endpoint: Endpoint,
    default_headers: HashMap<String, String>,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestAdapter>();
};

impl ReqwestAdapter {
    /// Creates an adapter for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TransportUnavailableError`] if the HTTP client cannot be
    /// initialized (e.g. the TLS backend fails to load).
    pub fn new(config: &HabrConfig) -> Result<Self, TransportUnavailableError> {
        Self::with_client_builder(config, reqwest::Client::builder())
    }

    /// Creates an adapter from a caller-supplied `reqwest` builder.
    ///
    /// Use this to set proxies or extra TLS options. The connect timeout,
    /// the TLS backend and the no-redirect policy are applied on top.
    ///
    /// # Errors
    ///
    /// Returns [`TransportUnavailableError`] if the builder fails.
    pub fn with_client_builder(
        config: &HabrConfig,
        builder: reqwest::ClientBuilder,
    ) -> Result<Self, TransportUnavailableError> {
        // The auth headers must never leave the endpoint host.
        let client = builder
            .use_rustls_tls()
            .connect_timeout(config.connect_timeout())
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| TransportUnavailableError {
                message: e.to_string(),
            })?;

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Habrahabr API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("client".to_string(), config.client_id().as_ref().to_string());
        default_headers.insert("token".to_string(), config.token().as_ref().to_string());

        tracing::debug!(endpoint = %config.endpoint(), "created HTTP adapter");

        Ok(Self {
            client,
            endpoint: config.endpoint().clone(),
            default_headers,
        })
    }

    /// Returns the endpoint requests are sent to.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

/// Decodes a response body.
///
/// An empty body decodes to `None`. A non-JSON body is a [`ParseError`] on
/// success statuses; on error statuses the raw text is kept as a JSON
/// string so it can be reported.
fn decode_body(code: u16, text: &str) -> Result<Option<Value>, ParseError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    match serde_json::from_str(text) {
        Ok(value) => Ok(Some(value)),
        Err(_) if !(200..=299).contains(&code) => Ok(Some(Value::String(text.to_string()))),
        Err(e) => Err(e.into()),
    }
}

const fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

impl HttpAdapter for ReqwestAdapter {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.endpoint.join(&request.path);
        let mut req_builder = self
            .client
            .request(to_reqwest_method(request.http_method), &url);

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = request.body() {
            req_builder = req_builder
                .header("Content-Type", FORM_CONTENT_TYPE)
                .body(body);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let text = res.text().await?;
        let body = decode_body(code, &text)?;

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            status = code,
            "received response"
        );

        Ok(HttpResponse::new(code, headers, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiToken, ClientId};
    use serde_json::json;

    fn create_test_config() -> HabrConfig {
        HabrConfig::builder()
            .client_id(ClientId::new("test-client").unwrap())
            .token(ApiToken::new("test-token").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_auth_headers_are_injected() {
        let adapter = ReqwestAdapter::new(&create_test_config()).unwrap();

        assert_eq!(
            adapter.default_headers().get("client"),
            Some(&"test-client".to_string())
        );
        assert_eq!(
            adapter.default_headers().get("token"),
            Some(&"test-token".to_string())
        );
    }

    #[test]
    fn test_accept_header_is_json() {
        let adapter = ReqwestAdapter::new(&create_test_config()).unwrap();
        assert_eq!(
            adapter.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = HabrConfig::builder()
            .client_id(ClientId::new("c").unwrap())
            .token(ApiToken::new("t").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let adapter = ReqwestAdapter::new(&config).unwrap();

        let user_agent = adapter.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("Habrahabr API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_failing_client_builder_is_transport_unavailable() {
        // rustls supports neither TLS 1.0 nor 1.1, leaving no usable version.
        let builder = reqwest::Client::builder()
            .min_tls_version(reqwest::tls::Version::TLS_1_0)
            .max_tls_version(reqwest::tls::Version::TLS_1_1);

        let result = ReqwestAdapter::with_client_builder(&create_test_config(), builder);

        assert!(result.is_err());
    }

    #[test]
    fn test_decode_body_empty_is_none() {
        assert_eq!(decode_body(200, "").unwrap(), None);
        assert_eq!(decode_body(200, "  \n").unwrap(), None);
    }

    #[test]
    fn test_decode_body_json() {
        assert_eq!(
            decode_body(200, r#"{"data":[1,2]}"#).unwrap(),
            Some(json!({"data": [1, 2]}))
        );
    }

    #[test]
    fn test_decode_body_invalid_json_on_success_is_parse_error() {
        assert!(decode_body(200, "<html>").is_err());
    }

    #[test]
    fn test_decode_body_invalid_json_on_error_keeps_raw_text() {
        assert_eq!(
            decode_body(502, "Bad Gateway").unwrap(),
            Some(json!("Bad Gateway"))
        );
    }
}
