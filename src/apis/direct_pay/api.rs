use crate::{
    apis::{
        direct_pay::{
            BalanceInquiryResponse, CreateMandateRequest, CreateMandateResponse,
            DebitAccountRequest, DebitAccountResponse, InitiateMandateRequest,
            InitiateMandateResponse, InitiatePaymentRequest, InitiatePaymentResponse,
            ListDebitsResponse, ListMandatesResponse, ListPaymentsRequest,
            MandateStatusChangeResponse, PaymentListResponse, PayoutTransactionsResponse,
            PayoutsResponse, RefundRequest,
            RefundResponse, RetrieveDebitResponse, RetrieveMandateResponse, SetOtpMethodRequest,
            SetOtpMethodResponse, VerifyMandateOtpRequest, VerifyMandateResponse,
            VerifyPaymentRequest, VerifyPaymentResponse,
        },
        DataEnvelope, MonoClientInner,
    },
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Mono DirectPay APIs client.
///
/// One-time collections live under [`one_time`](Self::one_time), recurring
/// direct-debit mandates under [`mandates`](Self::mandates); payouts and
/// refunds sit directly on this client.
#[derive(Clone, Debug)]
pub struct DirectPayApi {
    /// One-time payments APIs client.
    pub one_time: OneTimePaymentsApi,
    /// Recurring direct-debit mandate APIs client.
    pub mandates: MandatesApi,
    inner: Arc<MonoClientInner>,
}

impl DirectPayApi {
    pub(crate) fn new(inner: Arc<MonoClientInner>) -> Self {
        Self {
            one_time: OneTimePaymentsApi::new(inner.clone()),
            mandates: MandatesApi::new(inner.clone()),
            inner,
        }
    }

    /// Lists payouts with the given status.
    #[tracing::instrument(name = "List Payouts", skip(self))]
    pub async fn payouts(&self, status: &str) -> Result<PayoutsResponse, Error> {
        let res = self
            .inner
            .client
            .get(self.inner.base_url.join("/v2/payouts").unwrap())
            .query(&[("status", status)])
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Lists the payments settled into payouts with the given status, for one
    /// account.
    #[tracing::instrument(name = "List Payout Transactions", skip(self))]
    pub async fn payout_transactions(
        &self,
        status: &str,
        account: &str,
    ) -> Result<PayoutTransactionsResponse, Error> {
        let res = self
            .inner
            .client
            .get(
                self.inner
                    .base_url
                    .join(&format!("/v2/payouts/{}/transactions", encode(status)))
                    .unwrap(),
            )
            .query(&[("account", account)])
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Requests a refund of a settled payout.
    #[tracing::instrument(
        name = "Request Refund",
        skip(self, request),
        fields(reference = %request.reference)
    )]
    pub async fn request_refund(&self, request: &RefundRequest) -> Result<RefundResponse, Error> {
        let res = self
            .inner
            .client
            .post(self.inner.base_url.join("/v2/payouts/refund").unwrap())
            .json(&DataEnvelope { data: request })
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }
}

/// Mono one-time payments APIs client.
#[derive(Clone, Debug)]
pub struct OneTimePaymentsApi {
    inner: Arc<MonoClientInner>,
}

impl OneTimePaymentsApi {
    pub(crate) fn new(inner: Arc<MonoClientInner>) -> Self {
        Self { inner }
    }

    /// Initiates a one-time payment.
    ///
    /// After the payer completes (or abandons) the widget they are redirected
    /// to the configured `redirect_url` with the reference and final status
    /// in the query string.
    #[tracing::instrument(
        name = "Initiate Payment",
        skip(self, request),
        fields(
            amount = request.amount,
            reference = %request.reference,
        )
    )]
    pub async fn initiate(
        &self,
        request: &InitiatePaymentRequest,
    ) -> Result<InitiatePaymentResponse, Error> {
        let res = self
            .inner
            .client
            .post(self.inner.base_url.join("/v2/payments/initiate").unwrap())
            .json(&DataEnvelope { data: request })
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Verifies the final status of a one-time payment by its reference.
    #[tracing::instrument(name = "Verify Payment", skip(self, request))]
    pub async fn verify(
        &self,
        request: &VerifyPaymentRequest,
    ) -> Result<VerifyPaymentResponse, Error> {
        let res = self
            .inner
            .client
            .post(self.inner.base_url.join("/v2/payments/verify").unwrap())
            .json(&DataEnvelope { data: request })
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Lists one-time payment transactions.
    #[tracing::instrument(name = "List Payments", skip(self, request))]
    pub async fn list_transactions(
        &self,
        request: &ListPaymentsRequest,
    ) -> Result<PaymentListResponse, Error> {
        let res = self
            .inner
            .client
            .get(self.inner.base_url.join("/v2/payments/transactions").unwrap())
            .query(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }
}

/// Mono recurring direct-debit mandate APIs client.
///
/// A mandate goes through initiate (or direct create), OTP verification where
/// required, and is then active until cancelled; an active mandate can be
/// paused and reinstated, have its balance checked and be debited.
#[derive(Clone, Debug)]
pub struct MandatesApi {
    inner: Arc<MonoClientInner>,
}

impl MandatesApi {
    pub(crate) fn new(inner: Arc<MonoClientInner>) -> Self {
        Self { inner }
    }

    /// Opens a mandate authorization session through the widget.
    #[tracing::instrument(
        name = "Initiate Mandate",
        skip(self, request),
        fields(
            amount = request.amount,
            reference = %request.reference,
        )
    )]
    pub async fn initiate(
        &self,
        request: &InitiateMandateRequest,
    ) -> Result<InitiateMandateResponse, Error> {
        let res = self
            .inner
            .client
            .post(self.inner.base_url.join("/v2/payments/initiate").unwrap())
            .json(&DataEnvelope { data: request })
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Creates a mandate directly against a customer's account.
    #[tracing::instrument(
        name = "Create Mandate",
        skip(self, request),
        fields(
            amount = request.amount,
            reference = %request.reference,
        )
    )]
    pub async fn create(
        &self,
        request: &CreateMandateRequest,
    ) -> Result<CreateMandateResponse, Error> {
        let res = self
            .inner
            .client
            .post(self.inner.base_url.join("/v3/payments/mandates").unwrap())
            .json(&DataEnvelope { data: request })
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Chooses the delivery method for the mandate approval OTP.
    #[tracing::instrument(name = "Set Mandate OTP Method", skip(self, request))]
    pub async fn set_otp_method(
        &self,
        request: &SetOtpMethodRequest,
    ) -> Result<SetOtpMethodResponse, Error> {
        let res = self
            .inner
            .client
            .post(
                self.inner
                    .base_url
                    .join("/v3/payments/mandates/verify/otp")
                    .unwrap(),
            )
            .json(&DataEnvelope { data: request })
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Verifies the OTP and approves the mandate.
    #[tracing::instrument(name = "Verify Mandate OTP", skip(self, request))]
    pub async fn verify_otp(
        &self,
        request: &VerifyMandateOtpRequest,
    ) -> Result<VerifyMandateResponse, Error> {
        let res = self
            .inner
            .client
            .post(
                self.inner
                    .base_url
                    .join("/v3/payments/mandates/verify/otp")
                    .unwrap(),
            )
            .json(&DataEnvelope { data: request })
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Gets the details of an existing mandate.
    #[tracing::instrument(name = "Get Mandate", skip(self))]
    pub async fn get(&self, mandate_id: &str) -> Result<RetrieveMandateResponse, Error> {
        let res = self
            .inner
            .client
            .get(
                self.inner
                    .base_url
                    .join(&format!("/v3/payments/mandates/{}", encode(mandate_id)))
                    .unwrap(),
            )
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Lists all mandates, paginated.
    #[tracing::instrument(name = "List Mandates", skip(self))]
    pub async fn list(&self, limit: u32, page: u32) -> Result<ListMandatesResponse, Error> {
        let res = self
            .inner
            .client
            .get(self.inner.base_url.join("/v3/payments/mandates").unwrap())
            .query(&[("page", page.to_string()), ("limit", limit.to_string())])
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Cancels a mandate. Cancelled mandates cannot be reinstated.
    #[tracing::instrument(name = "Cancel Mandate", skip(self))]
    pub async fn cancel(&self, mandate_id: &str) -> Result<MandateStatusChangeResponse, Error> {
        let res = self
            .inner
            .client
            .patch(
                self.inner
                    .base_url
                    .join(&format!(
                        "/v3/payments/mandates/{}/cancel",
                        encode(mandate_id)
                    ))
                    .unwrap(),
            )
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Pauses an active mandate.
    #[tracing::instrument(name = "Pause Mandate", skip(self))]
    pub async fn pause(&self, mandate_id: &str) -> Result<MandateStatusChangeResponse, Error> {
        let res = self
            .inner
            .client
            .patch(
                self.inner
                    .base_url
                    .join(&format!(
                        "/v3/payments/mandates/{}/pause",
                        encode(mandate_id)
                    ))
                    .unwrap(),
            )
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Reinstates a paused mandate.
    #[tracing::instrument(name = "Reinstate Mandate", skip(self))]
    pub async fn reinstate(&self, mandate_id: &str) -> Result<MandateStatusChangeResponse, Error> {
        let res = self
            .inner
            .client
            .patch(
                self.inner
                    .base_url
                    .join(&format!(
                        "/v3/payments/mandates/{}/reinstate",
                        encode(mandate_id)
                    ))
                    .unwrap(),
            )
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Checks whether the mandated account holds enough balance, optionally
    /// against a specific amount.
    #[tracing::instrument(name = "Mandate Balance Inquiry", skip(self))]
    pub async fn balance_inquiry(
        &self,
        mandate_id: &str,
        amount: Option<i64>,
    ) -> Result<BalanceInquiryResponse, Error> {
        let mut req = self.inner.client.get(
            self.inner
                .base_url
                .join(&format!(
                    "/v3/payments/mandates/{}/balance-inquiry",
                    encode(mandate_id)
                ))
                .unwrap(),
        );
        if let Some(amount) = amount {
            req = req.query(&[("amount", amount.to_string())]);
        }

        let res = req.send().await?.json().await?;

        Ok(res)
    }

    /// Debits the mandated account.
    #[tracing::instrument(
        name = "Debit Account",
        skip(self, request),
        fields(
            amount = request.amount,
            reference = %request.reference,
        )
    )]
    pub async fn debit(
        &self,
        mandate_id: &str,
        request: &DebitAccountRequest,
    ) -> Result<DebitAccountResponse, Error> {
        let res = self
            .inner
            .client
            .post(
                self.inner
                    .base_url
                    .join(&format!(
                        "/v3/payments/mandates/{}/debit",
                        encode(mandate_id)
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

    /// Gets a single debit previously placed on a mandate.
    #[tracing::instrument(name = "Get Mandate Debit", skip(self))]
    pub async fn get_debit(
        &self,
        mandate_id: &str,
        reference: &str,
    ) -> Result<RetrieveDebitResponse, Error> {
        let res = self
            .inner
            .client
            .get(
                self.inner
                    .base_url
                    .join(&format!(
                        "/v3/payments/mandates/{}/debits/{}",
                        encode(mandate_id),
                        encode(reference)
                    ))
                    .unwrap(),
            )
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Lists every debit placed on a mandate.
    #[tracing::instrument(name = "List Mandate Debits", skip(self))]
    pub async fn list_debits(&self, mandate_id: &str) -> Result<ListDebitsResponse, Error> {
        let res = self
            .inner
            .client
            .get(
                self.inner
                    .base_url
                    .join(&format!(
                        "/v3/payments/mandates/{}/debits",
                        encode(mandate_id)
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
