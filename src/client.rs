//! Module containing the main Mono API client.

use crate::{
    apis::{
        connect::ConnectApi, customers::CustomersApi, direct_pay::DirectPayApi, lookup::LookupApi,
        telco::TelcoApi, MonoClientInner,
    },
    common::DEFAULT_BASE_URL,
    middlewares::{
        authentication::AuthenticationMiddleware, error_handling::ErrorHandlingMiddleware,
    },
};
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use reqwest_tracing::TracingMiddleware;
use secrecy::SecretString;
use std::sync::Arc;

/// Client for Mono public APIs.
///
/// All API groups share one HTTP client and one immutable configuration
/// (secret key and base URL) fixed at construction time.
#[derive(Debug, Clone)]
pub struct MonoClient {
    /// Customer management APIs client.
    pub customers: CustomersApi,
    /// Bank data (Connect) APIs client.
    pub connect: ConnectApi,
    /// Telecom account APIs client.
    pub telco: TelcoApi,
    /// DirectPay (one-time payments, mandates, payouts) APIs client.
    pub direct_pay: DirectPayApi,
    /// Identity and business lookup APIs client.
    pub lookup: LookupApi,
}

impl MonoClient {
    /// Builds a new [`MonoClient`](crate::client::MonoClient) with the default configuration.
    pub fn new(secret_key: impl Into<SecretString>) -> MonoClient {
        MonoClientBuilder::new(secret_key).build()
    }

    /// Returns a new builder to configure a new [`MonoClient`](crate::client::MonoClient).
    pub fn builder(secret_key: impl Into<SecretString>) -> MonoClientBuilder {
        MonoClientBuilder::new(secret_key)
    }
}

/// Builder for a [`MonoClient`](crate::client::MonoClient).
#[derive(Debug)]
pub struct MonoClientBuilder {
    client: reqwest::Client,
    base_url: Url,
    secret_key: SecretString,
}

impl MonoClientBuilder {
    /// Creates a new builder to configure a [`MonoClient`](crate::client::MonoClient).
    pub fn new(secret_key: impl Into<SecretString>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: Url::parse(DEFAULT_BASE_URL).unwrap(),
            secret_key: secret_key.into(),
        }
    }

    /// Consumes the builder and builds a new [`MonoClient`](crate::client::MonoClient).
    pub fn build(self) -> MonoClient {
        let inner = Arc::new(MonoClientInner {
            client: build_client_with_middleware(
                self.client,
                AuthenticationMiddleware {
                    secret_key: self.secret_key,
                },
            ),
            base_url: self.base_url,
        });

        MonoClient {
            customers: CustomersApi::new(inner.clone()),
            connect: ConnectApi::new(inner.clone()),
            telco: TelcoApi::new(inner.clone()),
            direct_pay: DirectPayApi::new(inner.clone()),
            lookup: LookupApi::new(inner),
        }
    }

    /// Sets a specific reqwest [`Client`](reqwest::Client) to use.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Sets the base URL for all requests.
    ///
    /// Defaults to: `https://api.withmono.com`
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }
}

fn build_client_with_middleware(
    client: reqwest::Client,
    auth_middleware: AuthenticationMiddleware,
) -> ClientWithMiddleware {
    reqwest_middleware::ClientBuilder::new(client)
        .with(TracingMiddleware::default())
        .with(ErrorHandlingMiddleware)
        .with(auth_middleware)
        .build()
}
