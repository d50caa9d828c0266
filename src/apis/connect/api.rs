use crate::{
    apis::{
        connect::{
            AccountBalanceResponse, AccountDetailsResponse, AccountIdentityResponse,
            AccountLinkingRequest, AccountLinkingResponse, AccountReauthorisationRequest,
            AccountsResponse, AssetsResponse, BanksResponse, CashFlowResponse,
            CategorisationRecordsResponse, CreditworthinessRequest, CreditworthinessResponse,
            EarningsResponse, EnrichmentJobResponse, ExchangeTokenRequest, ExchangeTokenResponse,
            IncomeRecordsResponse, IncomeResponse, InsightRecordsResponse,
            MetadataRecordsResponse, StatementOutput, StatementResponse, TransactionsRequest,
            TransactionsResponse, UnlinkResponse,
        },
        DataEnvelope, MonoClientInner,
    },
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Mono bank data (Connect) APIs client.
#[derive(Clone, Debug)]
pub struct ConnectApi {
    inner: Arc<MonoClientInner>,
}

impl ConnectApi {
    pub(crate) fn new(inner: Arc<MonoClientInner>) -> Self {
        Self { inner }
    }

    /// Lists every institution available for linking, with its direct-debit
    /// coverage.
    #[tracing::instrument(name = "Get Bank List", skip(self))]
    pub async fn bank_list(&self) -> Result<BanksResponse, Error> {
        let res = self
            .inner
            .client
            .get(self.inner.base_url.join("/v3/banks/list").unwrap())
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Starts an account linking session.
    ///
    /// The response carries the widget URL the end user must visit; once they
    /// complete enrolment the widget produces a code for
    /// [`exchange_token`](Self::exchange_token).
    #[tracing::instrument(name = "Initiate Account Linking", skip(self, request))]
    pub async fn initiate_account_linking(
        &self,
        request: &AccountLinkingRequest,
    ) -> Result<AccountLinkingResponse, Error> {
        let res = self
            .inner
            .client
            .post(self.inner.base_url.join("/v2/accounts/initiate").unwrap())
            .json(&DataEnvelope { data: request })
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Starts a reauthorisation session for an already linked account.
    #[tracing::instrument(name = "Reauthorise Account", skip(self, request))]
    pub async fn reauthorise_account(
        &self,
        request: &AccountReauthorisationRequest,
    ) -> Result<AccountLinkingResponse, Error> {
        let res = self
            .inner
            .client
            .post(self.inner.base_url.join("/v2/accounts/initiate").unwrap())
            .json(&DataEnvelope { data: request })
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Exchanges the code produced by the linking widget for a permanent
    /// account id.
    #[tracing::instrument(name = "Exchange Token", skip(self, request))]
    pub async fn exchange_token(
        &self,
        request: &ExchangeTokenRequest,
    ) -> Result<ExchangeTokenResponse, Error> {
        let res = self
            .inner
            .client
            .post(self.inner.base_url.join("/v2/accounts/auth").unwrap())
            .json(&DataEnvelope { data: request })
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Lists all linked accounts.
    #[tracing::instrument(name = "List Accounts", skip(self))]
    pub async fn accounts(&self) -> Result<AccountsResponse, Error> {
        let res = self
            .inner
            .client
            .get(self.inner.base_url.join("/v2/accounts").unwrap())
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Gets the details of a linked account.
    #[tracing::instrument(name = "Get Account Details", skip(self))]
    pub async fn account_details(&self, account_id: &str) -> Result<AccountDetailsResponse, Error> {
        let res = self
            .inner
            .client
            .get(
                self.inner
                    .base_url
                    .join(&format!("/v2/accounts/{}", encode(account_id)))
                    .unwrap(),
            )
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Gets the identity attached to a linked account.
    #[tracing::instrument(name = "Get Account Identity", skip(self))]
    pub async fn identity(&self, account_id: &str) -> Result<AccountIdentityResponse, Error> {
        let res = self
            .inner
            .client
            .get(
                self.inner
                    .base_url
                    .join(&format!("/v2/accounts/{}/identity", encode(account_id)))
                    .unwrap(),
            )
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Gets the current balance of a linked account.
    #[tracing::instrument(name = "Get Account Balance", skip(self))]
    pub async fn balance(&self, account_id: &str) -> Result<AccountBalanceResponse, Error> {
        let res = self
            .inner
            .client
            .get(
                self.inner
                    .base_url
                    .join(&format!("/v2/accounts/{}/balance", encode(account_id)))
                    .unwrap(),
            )
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Requests an income computation over the given period.
    #[tracing::instrument(name = "Get Income", skip(self))]
    pub async fn income(
        &self,
        account_id: &str,
        period: Option<&str>,
    ) -> Result<IncomeResponse, Error> {
        let mut req = self.inner.client.get(
            self.inner
                .base_url
                .join(&format!("/v2/accounts/{}/income", encode(account_id)))
                .unwrap(),
        );
        if let Some(period) = period {
            req = req.query(&[("period", period)]);
        }

        let res = req.send().await?.json().await?;

        Ok(res)
    }

    /// Lists previously computed income records for an account.
    #[tracing::instrument(name = "Get Income Records", skip(self))]
    pub async fn income_records(
        &self,
        account_id: &str,
        page: Option<&str>,
    ) -> Result<IncomeRecordsResponse, Error> {
        let mut req = self.inner.client.get(
            self.inner
                .base_url
                .join(&format!(
                    "/v2/accounts/{}/income-records",
                    encode(account_id)
                ))
                .unwrap(),
        );
        if let Some(page) = page {
            req = req.query(&[("page", page)]);
        }

        let res = req.send().await?.json().await?;

        Ok(res)
    }

    /// Requests a creditworthiness evaluation for a linked account.
    #[tracing::instrument(name = "Get Creditworthiness", skip(self, request))]
    pub async fn creditworthiness(
        &self,
        account_id: &str,
        request: &CreditworthinessRequest,
    ) -> Result<CreditworthinessResponse, Error> {
        let res = self
            .inner
            .client
            .post(
                self.inner
                    .base_url
                    .join(&format!(
                        "/v2/accounts/{}/creditworthiness",
                        encode(account_id)
                    ))
                    .unwrap(),
            )
            .json(&DataEnvelope { data: request })
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Unlinks an account, revoking this app's access to it.
    #[tracing::instrument(name = "Unlink Account", skip(self))]
    pub async fn unlink(&self, account_id: &str) -> Result<UnlinkResponse, Error> {
        let res = self
            .inner
            .client
            .post(
                self.inner
                    .base_url
                    .join(&format!("/v2/accounts/{}/unlink", encode(account_id)))
                    .unwrap(),
            )
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Fetches an account statement for the given period.
    ///
    /// With [`StatementOutput::Pdf`] the statement renders asynchronously and
    /// the response points at the generation job instead of carrying the
    /// transactions inline.
    #[tracing::instrument(name = "Get Statement", skip(self))]
    pub async fn statement(
        &self,
        account_id: &str,
        period: &str,
        output: StatementOutput,
        format: &str,
    ) -> Result<StatementResponse, Error> {
        let res = self
            .inner
            .client
            .get(
                self.inner
                    .base_url
                    .join(&format!("/v2/accounts/{}/statement", encode(account_id)))
                    .unwrap(),
            )
            .query(&[
                ("period", period),
                ("output", output.as_str()),
                ("format", format),
            ])
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Lists the transactions of a linked account.
    #[tracing::instrument(name = "List Account Transactions", skip(self, request))]
    pub async fn transactions(
        &self,
        account_id: &str,
        request: &TransactionsRequest,
    ) -> Result<TransactionsResponse, Error> {
        let res = self
            .inner
            .client
            .get(
                self.inner
                    .base_url
                    .join(&format!("/v2/accounts/{}/transactions", encode(account_id)))
                    .unwrap(),
            )
            .query(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Lists the investment assets held in an account.
    #[tracing::instrument(name = "Get Assets", skip(self))]
    pub async fn assets(&self, account_id: &str) -> Result<AssetsResponse, Error> {
        let res = self
            .inner
            .client
            .get(
                self.inner
                    .base_url
                    .join(&format!("/v2/accounts/{}/assets", encode(account_id)))
                    .unwrap(),
            )
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Lists earnings realised from investments in an account.
    #[tracing::instrument(name = "Get Earnings", skip(self))]
    pub async fn earnings(&self, account_id: &str) -> Result<EarningsResponse, Error> {
        let res = self
            .inner
            .client
            .get(
                self.inner
                    .base_url
                    .join(&format!("/v2/accounts/{}/earnings", encode(account_id)))
                    .unwrap(),
            )
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Triggers transaction categorisation for an account.
    #[tracing::instrument(name = "Get Categorisation", skip(self))]
    pub async fn categorisation(&self, account_id: &str) -> Result<EnrichmentJobResponse, Error> {
        let res = self
            .inner
            .client
            .get(
                self.inner
                    .base_url
                    .join(&format!(
                        "/v1/enrichments/{}/transaction-categorisation",
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

    /// Lists all completed categorisation records.
    #[tracing::instrument(name = "Get Categorisation Records", skip(self))]
    pub async fn categorisation_records(&self) -> Result<CategorisationRecordsResponse, Error> {
        let res = self
            .inner
            .client
            .get(
                self.inner
                    .base_url
                    .join("/v1/enrichments/transaction-categorisation/records")
                    .unwrap(),
            )
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Triggers transaction metadata enrichment for an account.
    #[tracing::instrument(name = "Get Transaction Metadata", skip(self))]
    pub async fn transaction_metadata(
        &self,
        account_id: &str,
    ) -> Result<EnrichmentJobResponse, Error> {
        let res = self
            .inner
            .client
            .get(
                self.inner
                    .base_url
                    .join(&format!(
                        "/v1/enrichments/{}/transaction-metadata",
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

    /// Lists all completed transaction metadata records.
    #[tracing::instrument(name = "Get Metadata Records", skip(self))]
    pub async fn metadata_records(&self) -> Result<MetadataRecordsResponse, Error> {
        let res = self
            .inner
            .client
            .get(
                self.inner
                    .base_url
                    .join("/v1/enrichments/transaction-metadata/records")
                    .unwrap(),
            )
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Triggers statement insight computation for an account.
    #[tracing::instrument(name = "Get Statement Insights", skip(self))]
    pub async fn statement_insights(
        &self,
        account_id: &str,
    ) -> Result<EnrichmentJobResponse, Error> {
        let res = self
            .inner
            .client
            .get(
                self.inner
                    .base_url
                    .join(&format!(
                        "/v1/enrichments/{}/statement-insights",
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

    /// Lists completed statement insight records for an account.
    #[tracing::instrument(name = "Get Insight Records", skip(self))]
    pub async fn insight_records(&self, account_id: &str) -> Result<InsightRecordsResponse, Error> {
        let res = self
            .inner
            .client
            .get(
                self.inner
                    .base_url
                    .join(&format!(
                        "/v1/enrichments/{}/statement-insights/records",
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

    /// Gets the aggregated credits flowing into an account.
    #[tracing::instrument(name = "Get Cash Flow Credits", skip(self))]
    pub async fn cash_flow_credits(&self, account_id: &str) -> Result<CashFlowResponse, Error> {
        let res = self
            .inner
            .client
            .get(
                self.inner
                    .base_url
                    .join(&format!("/accounts/{}/credits", encode(account_id)))
                    .unwrap(),
            )
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Gets the aggregated debits flowing out of an account.
    #[tracing::instrument(name = "Get Cash Flow Debits", skip(self))]
    pub async fn cash_flow_debits(&self, account_id: &str) -> Result<CashFlowResponse, Error> {
        let res = self
            .inner
            .client
            .get(
                self.inner
                    .base_url
                    .join(&format!("/accounts/{}/debits", encode(account_id)))
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
        apis::connect::{LinkCustomer, TransactionDirection},
        middlewares::error_handling::ErrorHandlingMiddleware,
    };
    use reqwest::Url;
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, method, path, query_param, query_param_is_missing},
        Mock, MockServer, ResponseTemplate,
    };

    async fn mock_client_and_server() -> (ConnectApi, MockServer) {
        let mock_server = MockServer::start().await;

        let inner = MonoClientInner {
            client: reqwest_middleware::ClientBuilder::new(reqwest::Client::new())
                .with(ErrorHandlingMiddleware)
                .build(),
            base_url: Url::parse(&mock_server.uri()).unwrap(),
        };

        (ConnectApi::new(Arc::new(inner)), mock_server)
    }

    #[tokio::test]
    async fn bank_list() {
        let (api, mock_server) = mock_client_and_server().await;

        Mock::given(method("GET"))
            .and(path("/v3/banks/list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "successful",
                "message": "Successfully retrieved banks",
                "data": {
                    "banks": [
                        {
                            "name": "Access Bank",
                            "bank_code": "044",
                            "nip_code": "000014",
                            "direct_debit": true
                        }
                    ]
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let res = api.bank_list().await.unwrap();

        assert_eq!(res.data.banks.len(), 1);
        assert_eq!(res.data.banks[0].bank_code, "044");
        assert!(res.data.banks[0].direct_debit);
    }

    #[tokio::test]
    async fn initiate_account_linking() {
        let (api, mock_server) = mock_client_and_server().await;

        Mock::given(method("POST"))
            .and(path("/v2/accounts/initiate"))
            .and(body_json(json!({
                "data": {
                    "customer": {
                        "name": "Samuel Olamide",
                        "email": "samuel@neem.com"
                    },
                    "meta": { "ref": "99008877TEST" },
                    "scope": "auth",
                    "redirect_url": "https://mono.co"
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "successful",
                "message": "Payment initiated successfully",
                "timestamp": "2024-01-04T10:21:00.000Z",
                "data": {
                    "mono_url": "https://link.mono.co/b?code=mYd0zxY",
                    "customer": "cust_1",
                    "meta": { "ref": "99008877TEST" },
                    "scope": "auth",
                    "redirect_url": "https://mono.co",
                    "created_at": "2024-01-04T10:21:00.000Z"
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let res = api
            .initiate_account_linking(
                &crate::apis::connect::AccountLinkingRequestBuilder::default()
                    .customer(LinkCustomer {
                        name: "Samuel Olamide".to_string(),
                        email: "samuel@neem.com".to_string(),
                    })
                    .meta(Some(crate::apis::connect::LinkMeta {
                        r#ref: "99008877TEST".to_string(),
                    }))
                    .scope("auth")
                    .redirect_url("https://mono.co")
                    .build()
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(res.data.mono_url, "https://link.mono.co/b?code=mYd0zxY");
        assert_eq!(res.data.meta.r#ref, "99008877TEST");
    }

    #[tokio::test]
    async fn exchange_token() {
        let (api, mock_server) = mock_client_and_server().await;

        Mock::given(method("POST"))
            .and(path("/v2/accounts/auth"))
            .and(body_json(json!({
                "data": { "code": "code_xyz" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "successful",
                "message": "Account linked successfully",
                "timestamp": "2024-01-04T10:21:00.000Z",
                "data": { "id": "acc_1" }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let res = api
            .exchange_token(&ExchangeTokenRequest {
                code: "code_xyz".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(res.data.id, "acc_1");
    }

    #[tokio::test]
    async fn balance() {
        let (api, mock_server) = mock_client_and_server().await;

        Mock::given(method("GET"))
            .and(path("/v2/accounts/acc_1/balance"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "successful",
                "message": "Request was successfully completed",
                "timestamp": "2024-01-04T10:21:00.000Z",
                "data": {
                    "id": "acc_1",
                    "name": "Samuel Olamide",
                    "account_number": "0123456789",
                    "balance": 300000,
                    "currency": "NGN"
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let res = api.balance("acc_1").await.unwrap();

        assert_eq!(res.data.balance, 300000);
        assert_eq!(res.data.currency, "NGN");
    }

    #[tokio::test]
    async fn income_omits_absent_period() {
        let (api, mock_server) = mock_client_and_server().await;

        Mock::given(method("GET"))
            .and(path("/v2/accounts/acc_1/income"))
            .and(query_param_is_missing("period"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "successful",
                "message": "Income computation requested",
                "timestamp": "2024-01-04T10:21:00.000Z",
                "data": null
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let res = api.income("acc_1", None).await.unwrap();

        assert_eq!(res.data, None);
    }

    #[tokio::test]
    async fn transactions_sends_present_filters_only() {
        let (api, mock_server) = mock_client_and_server().await;

        Mock::given(method("GET"))
            .and(path("/v2/accounts/acc_1/transactions"))
            .and(query_param("start", "01-10-2023"))
            .and(query_param("end", "07-10-2023"))
            .and(query_param("type", "debit"))
            .and(query_param_is_missing("narration"))
            .and(query_param_is_missing("paginate"))
            .and(query_param_is_missing("limit"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "successful",
                "message": "Retrieved transactions successfully",
                "timestamp": "2024-01-04T10:21:00.000Z",
                "data": [
                    {
                        "id": "txn_1",
                        "narration": "POS purchase",
                        "amount": 10000,
                        "type": "debit",
                        "balance": 250000,
                        "date": "2023-10-02T10:21:00.000Z",
                        "category": "online_transactions"
                    }
                ],
                "meta": {
                    "total": 1,
                    "page": 1,
                    "previous": null,
                    "next": null
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let res = api
            .transactions(
                "acc_1",
                &TransactionsRequest {
                    start: Some("01-10-2023".to_string()),
                    end: Some("07-10-2023".to_string()),
                    r#type: Some(TransactionDirection::Debit),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(res.data[0].r#type, TransactionDirection::Debit);
        assert_eq!(res.meta.total, 1);
    }

    #[tokio::test]
    async fn statement_decodes_pdf_job_variant() {
        let (api, mock_server) = mock_client_and_server().await;

        Mock::given(method("GET"))
            .and(path("/v2/accounts/acc_1/statement"))
            .and(query_param("period", "last3months"))
            .and(query_param("output", "pdf"))
            .and(query_param("format", "v2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "successful",
                "message": "Statement is being generated",
                "data": {
                    "id": "stmt_1",
                    "status": "BUILDING",
                    "path": "https://api.withmono.com/statements/stmt_1.pdf"
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let res = api
            .statement("acc_1", "last3months", StatementOutput::Pdf, "v2")
            .await
            .unwrap();

        match res {
            StatementResponse::Pdf(pdf) => assert_eq!(pdf.data.id, "stmt_1"),
            other => panic!("Unexpected statement variant: {:?}", other),
        }
    }

    #[tokio::test]
    async fn cash_flow_credits() {
        let (api, mock_server) = mock_client_and_server().await;

        Mock::given(method("GET"))
            .and(path("/accounts/acc_1/credits"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total": 1550000,
                "transactions_count": 3,
                "history": [
                    {
                        "period": "10-2023",
                        "amount": 1550000,
                        "transactions_count": 3
                    }
                ]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let res = api.cash_flow_credits("acc_1").await.unwrap();

        assert_eq!(res.total, 1550000);
        assert_eq!(res.history[0].period, "10-2023");
    }

    #[tokio::test]
    async fn unlink_failure_is_an_api_error() {
        let (api, mock_server) = mock_client_and_server().await;

        Mock::given(method("POST"))
            .and(path("/v2/accounts/acc_1/unlink"))
            .respond_with(ResponseTemplate::new(400))
            .expect(1)
            .mount(&mock_server)
            .await;

        let res = api.unlink("acc_1").await;

        assert!(matches!(res, Err(Error::ApiError(e)) if e.status == 400));
    }
}
