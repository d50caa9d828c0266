use crate::apis::{customers::Identification, Status};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Debit product a payment belongs to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
pub enum PaymentType {
    #[serde(rename = "onetime-debit")]
    OnetimeDebit,
    #[serde(rename = "recurring-debit")]
    RecurringDebit,
}

/// Channel a payment is collected through.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Account,
    Transfer,
    Mandate,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum MandateType {
    Emandate,
    Signed,
    Gsm,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum DebitType {
    Variable,
    Fixed,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Days,
    Weeks,
    Months,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Successful,
    Failed,
    Cancelled,
    Abandoned,
}

/// Where a refunded payout is funded from.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum RefundSource {
    Wallet,
    Payout,
}

/// Customer details collected when initiating a one-time payment.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct PaymentCustomer {
    pub email: String,
    pub phone: String,
    pub address: String,
    pub identity: Identification,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
#[builder(setter(into))]
pub struct InitiatePaymentRequest {
    /// Amount in kobo.
    pub amount: i64,
    pub r#type: PaymentType,
    pub method: PaymentMethod,
    pub description: String,
    /// Caller-chosen reference, echoed back on verification and in the
    /// redirect query string.
    pub reference: String,
    pub redirect_url: String,
    pub customer: PaymentCustomer,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub meta: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct InitiatePaymentResponse {
    pub status: Status,
    pub message: String,
    pub data: InitiatedPayment,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct InitiatedPayment {
    pub id: String,
    /// Widget URL the payer must be sent to in order to complete the payment.
    pub mono_url: String,
    pub r#type: PaymentType,
    pub method: PaymentMethod,
    pub amount: i64,
    pub description: String,
    pub reference: String,
    pub customer: String,
    pub redirect_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub meta: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct VerifyPaymentRequest {
    pub reference: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct VerifyPaymentResponse {
    pub status: Status,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: VerifiedPayment,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct VerifiedPayment {
    pub id: String,
    pub channel: String,
    pub fee: i64,
    pub r#type: PaymentType,
    pub status: Status,
    pub amount: i64,
    pub currency: String,
    pub description: String,
    pub reference: String,
    pub live_mode: bool,
    pub account: DebitedAccount,
    pub customer: String,
    pub refunded: bool,
    pub device_fingerprint: String,
    pub ip_address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub meta: VerifiedPaymentMeta,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct VerifiedPaymentMeta {
    pub locked: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct DebitedAccount {
    pub id: String,
    pub name: String,
    pub account_number: String,
    pub currency: String,
    pub balance: i64,
    pub r#type: String,
    pub bvn: String,
    pub live_mode: bool,
    pub institution: DebitedInstitution,
    pub scope: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct DebitedInstitution {
    pub name: String,
    pub r#type: String,
    pub timeout: u32,
    pub available: bool,
    pub scope: Vec<String>,
    pub bank_code: String,
}

/// Filters accepted when listing one-time payment transactions.
///
/// Absent filters are omitted from the query string.
#[derive(Serialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct ListPaymentsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct PaymentListResponse {
    pub status: Status,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: PaymentList,
    pub meta: PagingMeta,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct PaymentList {
    pub payments: Vec<PaymentRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct PaymentRecord {
    pub id: String,
    pub r#type: PaymentType,
    pub status: PaymentStatus,
    pub amount: i64,
    pub description: String,
    pub currency: String,
    pub account: PaymentAccount,
    pub customer: Option<CustomerSummary>,
    pub reference: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub fee: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct PaymentAccount {
    pub id: String,
    pub institution: PaymentInstitution,
    pub name: String,
    pub account_number: String,
    pub currency: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct PaymentInstitution {
    pub id: String,
    pub name: String,
    pub r#type: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct CustomerSummary {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Paging {
    pub total: u32,
    pub pages: u32,
    pub previous: Option<String>,
    pub next: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct PagingMeta {
    pub paging: Paging,
}

/// Request to open a mandate authorization session through the widget.
///
/// The frequency-related fields only apply to fixed mandates and are omitted
/// from the body when unset.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
#[builder(setter(into))]
pub struct InitiateMandateRequest {
    /// Amount in kobo.
    pub amount: i64,
    pub r#type: PaymentType,
    pub method: PaymentMethod,
    pub mandate_type: MandateType,
    pub debit_type: DebitType,
    pub description: String,
    pub reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub customer: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub redirect_url: Option<String>,
    /// `YYYY-MM-DD`.
    pub start_date: String,
    /// `YYYY-MM-DD`.
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub frequency: Option<Frequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub interval: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub retrial_frequency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub initial_debit_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub initial_debit_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub grace_period: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub minimum_due: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub meta: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct InitiateMandateResponse {
    pub status: Status,
    pub message: String,
    pub data: MandateAuthorization,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct MandateAuthorization {
    pub mono_url: String,
    pub r#type: PaymentType,
    pub mandate_type: MandateType,
    pub method: Option<PaymentMethod>,
    pub amount: i64,
    pub description: String,
    pub reference: String,
    pub customer: String,
    pub redirect_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// Request to create a mandate directly against a customer's account.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
#[builder(setter(into))]
pub struct CreateMandateRequest {
    pub customer: String,
    pub mandate_type: MandateType,
    pub debit_type: DebitType,
    /// Amount in kobo.
    pub amount: i64,
    pub reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub bank_code: Option<String>,
    pub description: String,
    /// `YYYY-MM-DD`.
    pub start_date: String,
    /// `YYYY-MM-DD`.
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub frequency: Option<Frequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub interval: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub retrial_frequency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub initial_debit_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub initial_debit_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub grace_period: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub minimum_due: Option<i64>,
    /// Base64 image of the signed paper mandate, for `signed` mandates.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub account: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct CreateMandateResponse {
    pub status: Status,
    pub message: String,
    pub data: CreatedMandate,
}

/// A freshly created mandate.
///
/// Depending on the mandate type the server may return OTP destinations (the
/// approval still needs [`MandatesApi::verify_otp`](crate::apis::direct_pay::MandatesApi::verify_otp))
/// or transfer destinations used to activate the mandate with a test
/// transfer.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct CreatedMandate {
    pub id: Option<String>,
    pub status: String,
    pub mandate_type: MandateType,
    pub debit_type: DebitType,
    pub amount: Option<i64>,
    pub approved: Option<bool>,
    pub reference: String,
    pub account_name: String,
    pub account_number: String,
    pub bank: String,
    pub customer: String,
    pub description: String,
    pub live_mode: Option<bool>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub date: DateTime<Utc>,
    pub transfer_destinations: Option<Vec<TransferDestination>>,
    pub otp_destinations: Option<OtpDestinations>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct TransferDestination {
    pub bank_name: String,
    pub account_number: String,
    pub icon: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct OtpDestinations {
    /// Opaque session to thread through the OTP verification calls.
    pub session: String,
    pub methods: Vec<OtpDestination>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct OtpDestination {
    pub r#type: OtpChannel,
    pub value: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum OtpChannel {
    PhoneNumber,
    Email,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct SetOtpMethodRequest {
    pub session: String,
    /// Delivery method chosen among the advertised OTP destinations.
    pub method: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct SetOtpMethodResponse {
    pub status: String,
    pub message: String,
    pub data: OtpDelivery,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct OtpDelivery {
    pub phone_number: String,
    pub action: String,
    pub session: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct VerifyMandateOtpRequest {
    pub session: String,
    pub otp: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct VerifyMandateResponse {
    pub status: Status,
    pub message: String,
    pub data: VerifiedMandate,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct VerifiedMandate {
    pub id: String,
    pub status: String,
    pub mandate_type: MandateType,
    pub debit_type: DebitType,
    pub ready_to_debit: bool,
    pub nibss_code: String,
    pub approved: bool,
    pub reference: String,
    pub account_name: String,
    pub account_number: String,
    pub bank: String,
    pub bank_code: String,
    pub customer: String,
    pub description: String,
    pub live_mode: bool,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub date: DateTime<Utc>,
    pub amount: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct RetrieveMandateResponse {
    pub status: Status,
    pub message: String,
    pub data: Mandate,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct ListMandatesResponse {
    pub status: Status,
    pub message: String,
    pub data: Vec<Mandate>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Mandate {
    pub id: String,
    pub status: String,
    pub mandate_type: MandateType,
    pub debit_type: DebitType,
    pub approved: bool,
    pub amount: i64,
    pub account_name: String,
    pub account_number: String,
    pub institution: MandateInstitution,
    pub customer: String,
    pub narration: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct MandateInstitution {
    pub bank_code: String,
    pub nip_code: String,
    pub name: String,
}

/// Acknowledgement returned by the cancel, pause and reinstate operations.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct MandateStatusChangeResponse {
    pub status: String,
    pub response_code: String,
    pub message: String,
    pub timestamps: String,
    pub documentation: String,
    pub data: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct BalanceInquiryResponse {
    pub status: Status,
    pub message: String,
    pub data: MandateBalance,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct MandateBalance {
    pub id: String,
    pub has_sufficient_balance: bool,
    pub account_balance: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
#[builder(setter(into))]
pub struct DebitAccountRequest {
    /// Amount in kobo.
    pub amount: i64,
    pub reference: String,
    pub narration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub beneficiary: Option<DebitBeneficiary>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct DebitBeneficiary {
    pub nuban: String,
    pub nip_code: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct DebitAccountResponse {
    pub status: String,
    pub message: String,
    pub response_code: String,
    pub data: ExecutedDebit,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct ExecutedDebit {
    pub status: String,
    pub amount: i64,
    pub customer: String,
    pub mandate: String,
    pub reference_number: String,
    pub account_debited: AccountParty,
    pub beneficiary: AccountParty,
    pub date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct AccountParty {
    pub bank_code: String,
    pub account_name: String,
    pub account_number: String,
    pub bank_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct RetrieveDebitResponse {
    pub status: Status,
    pub message: String,
    pub data: MandateDebit,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct ListDebitsResponse {
    pub status: Status,
    pub message: String,
    pub data: Vec<MandateDebit>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct MandateDebit {
    pub id: String,
    pub channel: String,
    pub fee: i64,
    pub r#type: String,
    pub status: String,
    pub amount: i64,
    pub currency: String,
    pub description: String,
    pub reference: String,
    pub object_id: String,
    pub live_mode: bool,
    pub app: String,
    pub business: String,
    pub refunded: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "__v")]
    pub version: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct PayoutsResponse {
    pub status: String,
    pub message: String,
    pub data: PayoutList,
    pub meta: PagingMeta,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct PayoutList {
    pub payouts: Vec<Payout>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Payout {
    pub id: String,
    pub status: String,
    pub amount: i64,
    pub fee: i64,
    pub currency: String,
    pub date: DateTime<Utc>,
    pub bank: String,
    pub message: String,
    pub settled_amount: Option<i64>,
    pub settled_account: Option<SettledAccount>,
    pub processor: Option<String>,
    pub response: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct SettledAccount {
    pub beneficiary_bank: String,
    pub beneficiary_account_name: String,
    pub beneficiary_account_number: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct PayoutTransactionsResponse {
    pub status: String,
    pub message: String,
    pub data: PaymentList,
    pub meta: PagingMeta,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct RefundRequest {
    /// Reference of the payout being refunded.
    pub reference: String,
    pub source: RefundSource,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct RefundResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: Refund,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Refund {
    pub id: String,
    pub reference: String,
    pub refunded: bool,
    pub refunded_amount: i64,
    pub beneficiary: RefundBeneficiary,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct RefundBeneficiary {
    pub name: String,
    pub bank_name: String,
    pub bank_code: String,
    pub account_number: String,
}
