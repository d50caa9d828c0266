use crate::common::MONO_SEC_KEY_HEADER;
use async_trait::async_trait;
use reqwest::{header::HeaderValue, Request, Response};
use reqwest_middleware::{Middleware, Next};
use secrecy::{ExposeSecret, SecretString};
use task_local_extensions::Extensions;

/// Reqwest middleware to inject the `mono-sec-key` header into outgoing HTTP requests.
pub struct AuthenticationMiddleware {
    pub(crate) secret_key: SecretString,
}

#[async_trait]
impl Middleware for AuthenticationMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        // Inject the secret key as a header
        let mut header_value = HeaderValue::from_str(self.secret_key.expose_secret())
            .map_err(|e| reqwest_middleware::Error::Middleware(e.into()))?;
        header_value.set_sensitive(true);
        req.headers_mut().insert(MONO_SEC_KEY_HEADER, header_value);

        // Run the rest of the middlewares
        next.run(req, extensions).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest_middleware::ClientBuilder;
    use wiremock::{
        matchers::{header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    static MOCK_SECRET_KEY: &str = "test_sk_mock";

    #[tokio::test]
    async fn secret_key_is_attached_to_outgoing_request() {
        // Setup mock server
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/test"))
            .and(header(MONO_SEC_KEY_HEADER, MOCK_SECRET_KEY))
            .respond_with(ResponseTemplate::new(200))
            .expect(1) // Expect exactly one call
            .mount(&mock_server)
            .await;

        // Setup a client using the auth middleware
        let client = ClientBuilder::new(reqwest::Client::new())
            .with(AuthenticationMiddleware {
                secret_key: MOCK_SECRET_KEY.to_string().into(),
            })
            .build();

        // Send a test request
        client
            .get(format!("{}/test", mock_server.uri()))
            .send()
            .await
            .unwrap();

        // Expectations are verified here before the mock server is dropped
    }
}
