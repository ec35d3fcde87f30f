//! Generic HTTP fetching with provider error translation

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Fetches `url` and parses the JSON body into `T`.
///
/// No retries are attempted: the first failure is returned to the caller.
/// - Transport failures map to `NetworkTimeout`, `NetworkConnection` or `ApiFetch`
/// - A non-success status maps to `Provider { status }`
/// - A body that does not parse as `T` maps to `Provider { status }` with a
///   malformed-response message, since the payload shape is the provider's contract
#[instrument(skip(client))]
pub(super) async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    let status_code = status.as_u16();
    debug!("Response status: {status}");

    if !status.is_success() {
        let reason = status.canonical_reason().unwrap_or("Unknown error");
        let body = response.text().await.unwrap_or_default();
        let preview: String = body.chars().take(200).collect();
        error!(
            "HTTP {} - {} (URL: {}) body: {}",
            status_code, reason, url, preview
        );
        return Err(AppError::provider(status_code, reason, url));
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());
    let preview: String = response_text.chars().take(1024).collect();
    debug!("Response text (first 1024 chars): {preview}");

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            error!(
                "Response text (first 200 chars): {}",
                &response_text.chars().take(200).collect::<String>()
            );

            let message = if response_text.trim().is_empty() {
                "response body is empty".to_string()
            } else if !response_text.trim_start().starts_with('{')
                && !response_text.trim_start().starts_with('[')
            {
                "response is not valid JSON".to_string()
            } else {
                e.to_string()
            };
            Err(AppError::provider_malformed(status_code, message, url))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::create_test_client;
    use serde::Deserialize;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    #[derive(Debug, Deserialize)]
    struct Sample {
        value: i32,
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sample"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"value":7}"#))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client();
        let url = format!("{}/sample", mock_server.uri());
        let sample: Sample = fetch(&client, &url).await.unwrap();
        assert_eq!(sample.value, 7);
    }

    #[tokio::test]
    async fn test_fetch_non_success_status_is_provider_error() {
        for status in [400u16, 403, 404, 429, 500, 503] {
            let mock_server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path("/sample"))
                .respond_with(ResponseTemplate::new(status))
                .expect(1)
                .mount(&mock_server)
                .await;

            let client = create_test_client();
            let url = format!("{}/sample", mock_server.uri());
            let err = fetch::<Sample>(&client, &url).await.unwrap_err();
            assert_eq!(err.status_code(), Some(status), "status {status}");
        }
    }

    #[tokio::test]
    async fn test_fetch_empty_body_is_malformed() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sample"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let client = create_test_client();
        let url = format!("{}/sample", mock_server.uri());
        let err = fetch::<Sample>(&client, &url).await.unwrap_err();
        assert_eq!(err.status_code(), Some(200));
        assert!(err.to_string().contains("response body is empty"));
    }

    #[tokio::test]
    async fn test_fetch_html_body_is_malformed() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sample"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let client = create_test_client();
        let url = format!("{}/sample", mock_server.uri());
        let err = fetch::<Sample>(&client, &url).await.unwrap_err();
        assert!(err.to_string().contains("response is not valid JSON"));
    }

    #[tokio::test]
    async fn test_fetch_wrong_shape_is_malformed() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sample"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"other":1}"#))
            .mount(&mock_server)
            .await;

        let client = create_test_client();
        let url = format!("{}/sample", mock_server.uri());
        let err = fetch::<Sample>(&client, &url).await.unwrap_err();
        assert!(err.is_provider_error());
        assert!(err.to_string().contains("missing field `value`"));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        // Bind and immediately drop a listener to get a port nobody is listening on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = create_test_client();
        let url = format!("http://127.0.0.1:{port}/sample");
        let err = fetch::<Sample>(&client, &url).await.unwrap_err();
        assert!(!err.is_provider_error());
        assert!(matches!(
            err,
            AppError::NetworkConnection { .. } | AppError::ApiFetch(_)
        ));
    }
}
