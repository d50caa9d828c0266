use crate::error::{ApiError, Error};
use async_trait::async_trait;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Reqwest middleware which translates non-2xx responses returned from Mono APIs
/// into [`Error::ApiError`](crate::error::Error)s.
///
/// Only the status line is captured: Mono does not document a structured error
/// body, so the body of a failed response is never read.
pub struct ErrorHandlingMiddleware;

#[async_trait]
impl Middleware for ErrorHandlingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        // Capture the response
        let response = next.run(req, extensions).await?;

        // Build an ApiError if the response is not a success
        let status = response.status();
        if !status.is_success() {
            tracing::debug!("Failed HTTP request. Status code: {}", status);

            return Err(Error::ApiError(ApiError {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("Unknown Status")
                    .to_string(),
            })
            .into());
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{matchers::method, Mock, MockServer, ResponseTemplate};

    fn mock_client() -> reqwest_middleware::ClientWithMiddleware {
        reqwest_middleware::ClientBuilder::new(reqwest::Client::new())
            .with(ErrorHandlingMiddleware)
            .build()
    }

    #[tokio::test]
    async fn success_responses_are_ignored() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("success"))
            .mount(&mock_server)
            .await;

        assert_eq!(
            "success",
            mock_client()
                .get(mock_server.uri())
                .send()
                .await
                .unwrap()
                .text()
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn failed_responses_are_mapped_to_api_errors() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "status": "failed",
                "message": "invalid account id"
            })))
            .mount(&mock_server)
            .await;

        let err: Error = mock_client()
            .get(mock_server.uri())
            .send()
            .await
            .expect_err("Call succeeded")
            .into();

        let api_error = match err {
            Error::ApiError(api_error) => api_error,
            e => panic!("Unexpected error: {}", e),
        };

        assert_eq!(api_error.status, 400);
        assert_eq!(api_error.reason, "Bad Request");
        // The status code must be visible in the rendered message
        assert!(api_error.to_string().contains("400"));
    }

    #[tokio::test]
    async fn server_errors_are_mapped_to_api_errors() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let err: Error = mock_client()
            .get(mock_server.uri())
            .send()
            .await
            .expect_err("Call succeeded")
            .into();

        assert!(matches!(err, Error::ApiError(e) if e.status == 503));
    }
}
