use crate::{
    apis::{
        telco::{
            LoginRequest, LoginResponse, OtpVerificationRequest, OtpVerificationResponse,
            TelcoAccountResponse, TelcoBalancesResponse, TelcoIdentityResponse,
            TelcoTransactionsRequest, TelcoTransactionsResponse, TokenExchangeRequest,
            TokenExchangeResponse,
        },
        DataEnvelope, MonoClientInner,
    },
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Mono telecom account APIs client.
///
/// Authentication is a three-step flow sequenced by the caller:
/// [`login`](Self::login) starts a session, [`verify_otp`](Self::verify_otp)
/// confirms the one-time password sent to the subscriber, and
/// [`exchange_token`](Self::exchange_token) trades the resulting code for a
/// permanent account id.
#[derive(Clone, Debug)]
pub struct TelcoApi {
    inner: Arc<MonoClientInner>,
}

impl TelcoApi {
    pub(crate) fn new(inner: Arc<MonoClientInner>) -> Self {
        Self { inner }
    }

    /// Logs a subscriber in with their phone number and network operator.
    #[tracing::instrument(name = "Telco Login", skip(self, request))]
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, Error> {
        let res = self
            .inner
            .client
            .post(self.inner.base_url.join("/v1/telco/auth/login").unwrap())
            .json(&DataEnvelope { data: request })
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Verifies the OTP sent to the subscriber during login.
    #[tracing::instrument(name = "Telco Verify OTP", skip(self, request))]
    pub async fn verify_otp(
        &self,
        request: &OtpVerificationRequest,
    ) -> Result<OtpVerificationResponse, Error> {
        let res = self
            .inner
            .client
            .post(self.inner.base_url.join("/v1/telco/auth/otp").unwrap())
            .json(&DataEnvelope { data: request })
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Exchanges the code produced by OTP verification for a permanent
    /// telecom account id.
    #[tracing::instrument(name = "Telco Exchange Token", skip(self, request))]
    pub async fn exchange_token(
        &self,
        request: &TokenExchangeRequest,
    ) -> Result<TokenExchangeResponse, Error> {
        let res = self
            .inner
            .client
            .post(self.inner.base_url.join("/v1/telco/auth/token").unwrap())
            .json(&DataEnvelope { data: request })
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Gets the details of a telecom account.
    #[tracing::instrument(name = "Get Telco Account", skip(self))]
    pub async fn account_details(&self, account_id: &str) -> Result<TelcoAccountResponse, Error> {
        let res = self
            .inner
            .client
            .get(
                self.inner
                    .base_url
                    .join(&format!("/v1/telco/accounts/{}", encode(account_id)))
                    .unwrap(),
            )
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Gets the airtime, voice and data bundles held by a telecom account.
    #[tracing::instrument(name = "Get Telco Balances", skip(self))]
    pub async fn balances(&self, account_id: &str) -> Result<TelcoBalancesResponse, Error> {
        let res = self
            .inner
            .client
            .get(
                self.inner
                    .base_url
                    .join(&format!(
                        "/v1/telco/accounts/{}/balances",
                        encode(account_id)
                    ))
                    .unwrap(),
            )
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Lists the transactions of a telecom account.
    #[tracing::instrument(name = "List Telco Transactions", skip(self, request))]
    pub async fn transactions(
        &self,
        account_id: &str,
        request: &TelcoTransactionsRequest,
    ) -> Result<TelcoTransactionsResponse, Error> {
        let res = self
            .inner
            .client
            .get(
                self.inner
                    .base_url
                    .join(&format!(
                        "/v1/telco/accounts/{}/transactions",
                        encode(account_id)
                    ))
                    .unwrap(),
            )
            .query(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Gets the subscriber identity attached to a telecom account.
    #[tracing::instrument(name = "Get Telco Identity", skip(self))]
    pub async fn identity(&self, account_id: &str) -> Result<TelcoIdentityResponse, Error> {
        let res = self
            .inner
            .client
            .get(
                self.inner
                    .base_url
                    .join(&format!(
                        "/v1/telco/accounts/{}/identity",
                        encode(account_id)
                    ))
                    .unwrap(),
            )
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        apis::{connect::TransactionDirection, Status},
        middlewares::error_handling::ErrorHandlingMiddleware,
    };
    use reqwest::Url;
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, method, path, query_param, query_param_is_missing},
        Mock, MockServer, ResponseTemplate,
    };

    async fn mock_client_and_server() -> (TelcoApi, MockServer) {
        let mock_server = MockServer::start().await;

        let inner = MonoClientInner {
            client: reqwest_middleware::ClientBuilder::new(reqwest::Client::new())
                .with(ErrorHandlingMiddleware)
                .build(),
            base_url: Url::parse(&mock_server.uri()).unwrap(),
        };

        (TelcoApi::new(Arc::new(inner)), mock_server)
    }

    #[tokio::test]
    async fn login_returns_session() {
        let (api, mock_server) = mock_client_and_server().await;

        Mock::given(method("POST"))
            .and(path("/v1/telco/auth/login"))
            .and(body_json(json!({
                "data": {
                    "phone": "08011111111",
                    "provider": "mtn"
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "successful",
                "data": {
                    "session_id": "sess_1",
                    "result": {
                        "title": "Enter the OTP sent to your line",
                        "form": [
                            {
                                "type": "elements.input",
                                "name": "otp",
                                "hint": "OTP",
                                "contentType": "password",
                                "minLength": 6,
                                "maxLength": 6
                            }
                        ]
                    }
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let res = api
            .login(&LoginRequest {
                phone: "08011111111".to_string(),
                provider: "mtn".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(res.status, Status::Successful);
        assert_eq!(res.data.session_id, "sess_1");
        assert_eq!(res.data.result.form[0].min_length, 6);
    }

    #[tokio::test]
    async fn transactions_filters_are_attached_to_the_query() {
        let (api, mock_server) = mock_client_and_server().await;

        Mock::given(method("GET"))
            .and(path("/v1/telco/accounts/tel_1/transactions"))
            .and(query_param("start", "01-10-2023"))
            .and(query_param("type", "credit"))
            .and(query_param("limit", "20"))
            .and(query_param_is_missing("end"))
            .and(query_param_is_missing("narration"))
            .and(query_param_is_missing("paginate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "paging": {
                    "total": 1,
                    "page": 1,
                    "previous": null,
                    "next": null
                },
                "data": [
                    {
                        "_id": "ttxn_1",
                        "type": "credit",
                        "amount": 500.0,
                        "narration": "Airtime top-up",
                        "balance": 1200.0,
                        "date": "2023-10-02T10:21:00.000Z",
                        "currency": "NGN"
                    }
                ]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let res = api
            .transactions(
                "tel_1",
                &TelcoTransactionsRequest {
                    start: Some("01-10-2023".to_string()),
                    r#type: Some(TransactionDirection::Credit),
                    limit: Some(20),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(res.data[0].id, "ttxn_1");
        assert_eq!(res.data[0].r#type, TransactionDirection::Credit);
    }

    #[tokio::test]
    async fn balances() {
        let (api, mock_server) = mock_client_and_server().await;

        Mock::given(method("GET"))
            .and(path("/v1/telco/accounts/tel_1/balances"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "bundles": [
                    {
                        "_id": "bundle_1",
                        "name": "Airtime",
                        "type": "currency",
                        "value": 1200.0,
                        "unit": "ngn"
                    },
                    {
                        "_id": "bundle_2",
                        "name": "Data",
                        "type": "data",
                        "value": 1.5,
                        "unit": "gb"
                    }
                ]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let res = api.balances("tel_1").await.unwrap();

        assert_eq!(res.bundles.len(), 2);
        assert_eq!(res.bundles[1].unit, "gb");
    }

    #[tokio::test]
    async fn identity_decodes_camel_case_payload() {
        let (api, mock_server) = mock_client_and_server().await;

        Mock::given(method("GET"))
            .and(path("/v1/telco/accounts/tel_1/identity"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "fullName": "Samuel Olamide",
                "phone": "08011111111",
                "gender": "male",
                "bvn": null,
                "dob": "1992-05-16T00:00:00.000Z",
                "createdAt": "2023-10-02T10:21:00.000Z",
                "updatedAt": "2023-10-02T10:21:00.000Z"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let res = api.identity("tel_1").await.unwrap();

        assert_eq!(res.full_name, "Samuel Olamide");
        assert_eq!(res.bvn, None);
    }
}
