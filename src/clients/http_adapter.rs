//! The transport contract every resource talks through.
//!
//! [`HttpAdapter`] has one required method, [`send`](HttpAdapter::send),
//! and provides `get`, `post`, `put` and `delete` on top of it. Custom
//! transports (and test doubles) only implement `send`.

use crate::clients::errors::HttpError;
use crate::clients::http_request::{FormParams, HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::rest::ApiResponse;

/// A transport able to deliver requests to the Habrahabr API.
///
/// Implementations own connection configuration (endpoint, credentials,
/// timeout) and must add the `client` and `token` headers to every request.
///
/// # Example
///
/// ```rust
/// use habrahabr_api::clients::{HttpAdapter, HttpError, HttpRequest, HttpResponse};
/// use serde_json::json;
///
/// struct Fixed;
///
/// impl HttpAdapter for Fixed {
///     async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(HttpResponse::ok(Some(json!({"data": []}))))
///     }
/// }
///
/// let response = tokio_test::block_on(Fixed.get("/companies?page=1")).unwrap();
/// assert_eq!(response.body(), Some(&json!({"data": []})));
/// ```
#[allow(async_fn_in_trait)]
pub trait HttpAdapter: Send + Sync {
    /// Delivers a request and returns the raw response.
    ///
    /// Non-2xx statuses are returned as responses, not errors.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] when no response was received,
    /// [`HttpError::Parse`] when a non-empty body is not JSON, and
    /// [`HttpError::InvalidRequest`] when the request fails validation.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;

    /// Builds, sends and checks a request.
    ///
    /// # Errors
    ///
    /// Everything [`send`](Self::send) returns, plus [`HttpError::Api`] for
    /// a non-2xx status.
    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        params: FormParams,
    ) -> Result<ApiResponse, HttpError> {
        let request = HttpRequest::builder(method, path).params(params).build()?;
        tracing::debug!(method = %method, path = %path, "sending request");

        let response = self.send(request).await?;
        if !response.is_ok() {
            let error = response.to_api_error();
            tracing::warn!(
                method = %method,
                path = %path,
                status = error.code,
                "request returned error status: {}",
                error.message
            );
            return Err(error.into());
        }

        Ok(ApiResponse::new(response.body))
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    async fn get(&self, path: &str) -> Result<ApiResponse, HttpError> {
        self.request(HttpMethod::Get, path, FormParams::new()).await
    }

    /// Sends a POST request with a form body.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    async fn post(&self, path: &str, params: FormParams) -> Result<ApiResponse, HttpError> {
        self.request(HttpMethod::Post, path, params).await
    }

    /// Sends a PUT request with a form body.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    async fn put(&self, path: &str, params: FormParams) -> Result<ApiResponse, HttpError> {
        self.request(HttpMethod::Put, path, params).await
    }

    /// Sends a DELETE request.
    ///
    /// DELETE requests carry no body, so `params` are dropped.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    async fn delete(&self, path: &str, params: FormParams) -> Result<ApiResponse, HttpError> {
        self.request(HttpMethod::Delete, path, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::errors::{InvalidHttpRequestError, NetworkError};
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct Recording {
        sent: Mutex<Vec<HttpRequest>>,
        reply: fn() -> Result<HttpResponse, HttpError>,
    }

    impl Recording {
        fn new(reply: fn() -> Result<HttpResponse, HttpError>) -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                reply,
            }
        }
    }

    impl HttpAdapter for Recording {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
            self.sent.lock().unwrap().push(request);
            (self.reply)()
        }
    }

    #[tokio::test]
    async fn test_put_forwards_params() {
        let adapter = Recording::new(|| Ok(HttpResponse::ok(None)));
        let params = FormParams::new().with("vote", 1_i32);

        let response = adapter.put("/posts/5/vote", params.clone()).await.unwrap();

        assert!(response.is_empty());
        let sent = adapter.sent.lock().unwrap();
        assert_eq!(sent[0].http_method, HttpMethod::Put);
        assert_eq!(sent[0].path, "/posts/5/vote");
        assert_eq!(sent[0].params, params);
    }

    #[tokio::test]
    async fn test_non_2xx_becomes_api_error() {
        let adapter = Recording::new(|| {
            Ok(HttpResponse::new(
                404,
                HashMap::new(),
                Some(json!({"message": "Not Found"})),
            ))
        });

        let result = adapter.get("/users/nobody").await;

        match result {
            Err(HttpError::Api(e)) => {
                assert_eq!(e.code, 404);
                assert_eq!(e.message, "Not Found");
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_network_error_is_propagated_unchanged() {
        let adapter = Recording::new(|| Err(NetworkError::new("refused", 7).into()));

        let result = adapter.delete("/hub/rust", FormParams::new()).await;

        assert!(matches!(
            result,
            Err(HttpError::Network(NetworkError { code: 7, .. }))
        ));
        assert_eq!(adapter.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_path_is_rejected_before_sending() {
        let adapter = Recording::new(|| Ok(HttpResponse::ok(None)));

        let result = adapter.get("users/me").await;

        assert!(matches!(
            result,
            Err(HttpError::InvalidRequest(InvalidHttpRequestError::InvalidPath { .. }))
        ));
        assert!(adapter.sent.lock().unwrap().is_empty());
    }
}
