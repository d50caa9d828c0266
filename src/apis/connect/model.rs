use crate::apis::Status;
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Direction of a ledger entry.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionDirection {
    Credit,
    Debit,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct BanksResponse {
    pub status: String,
    pub message: String,
    pub data: BankList,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct BankList {
    pub banks: Vec<Bank>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Bank {
    pub name: String,
    pub bank_code: String,
    pub nip_code: String,
    /// Whether the institution supports direct-debit mandates.
    pub direct_debit: bool,
}

/// Customer on whose behalf an account is being linked.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct LinkCustomer {
    pub name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct LinkMeta {
    pub r#ref: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
#[builder(setter(into))]
pub struct AccountLinkingRequest {
    pub customer: LinkCustomer,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub meta: Option<LinkMeta>,
    /// Always `"auth"` for first-time linking.
    pub scope: String,
    pub redirect_url: String,
}

/// Request to reauthorise a previously linked account whose credentials have
/// gone stale.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
#[builder(setter(into))]
pub struct AccountReauthorisationRequest {
    pub account: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub meta: Option<LinkMeta>,
    /// Always `"reauth"`.
    pub scope: String,
    pub redirect_url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct AccountLinkingResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: AccountLinkingData,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct AccountLinkingData {
    /// Widget URL the end user must be sent to in order to complete linking.
    pub mono_url: String,
    pub customer: String,
    pub meta: LinkMeta,
    pub scope: String,
    pub redirect_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct ExchangeTokenRequest {
    /// Code produced by the linking widget after a successful enrolment.
    pub code: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct ExchangeTokenResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: ExchangedAccount,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct ExchangedAccount {
    /// Permanent account id to use for all account-scoped calls.
    pub id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Institution {
    pub id: String,
    pub name: String,
    pub bank_code: Option<String>,
    pub r#type: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct LinkedAccount {
    pub id: String,
    pub name: String,
    pub account_number: String,
    pub currency: String,
    pub balance: i64,
    pub auth_method: String,
    pub status: String,
    pub bvn: String,
    pub r#type: String,
    pub institution: Institution,
    pub customer: LinkCustomer,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Paging {
    pub total: u32,
    pub pages: u32,
    pub previous: Option<String>,
    pub next: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct AccountsResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: Vec<LinkedAccount>,
    pub meta: Paging,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct InstitutionSummary {
    pub name: String,
    pub bank_code: String,
    pub r#type: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct AccountDetails {
    pub id: String,
    pub name: String,
    pub currency: String,
    pub r#type: String,
    pub account_number: String,
    pub balance: i64,
    pub bvn: String,
    pub institution: InstitutionSummary,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct AccountMeta {
    pub data_status: String,
    pub auth_method: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct AccountDetailsResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: AccountDetailsData,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct AccountDetailsData {
    pub account: AccountDetails,
    pub meta: AccountMeta,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct AccountIdentity {
    pub full_name: String,
    pub bvn: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    pub dob: String,
    pub address_line1: String,
    pub state_of_origin: String,
    pub lga_of_origin: String,
    pub marital_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct AccountIdentityResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: AccountIdentity,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct AccountBalance {
    pub id: String,
    pub name: String,
    pub account_number: String,
    pub balance: i64,
    pub currency: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct AccountBalanceResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: AccountBalance,
}

/// Acknowledgement of an income computation request. The computed income is
/// delivered out-of-band; `data` is always null.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct IncomeResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct IncomeStream {
    pub income_type: String,
    pub frequency: String,
    pub monthly_average: f64,
    pub average_income_amount: f64,
    pub currency: String,
    pub stability: f64,
    pub last_income_amount: f64,
    pub last_income_description: String,
    pub last_income_date: String,
    pub periods_with_income: u32,
    pub number_of_incomes: u32,
    pub number_of_months: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct IncomeSummary {
    pub total_income: f64,
    pub employer: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Income {
    pub account: String,
    pub income_summary: IncomeSummary,
    pub income_streams: Vec<IncomeStream>,
    pub income_source_type: String,
    pub first_transaction_date: String,
    pub last_transaction_date: String,
    pub period: String,
    pub number_of_income_streams: u32,
    pub monthly_average: f64,
    pub monthly_average_regular: f64,
    pub monthly_average_irregular: f64,
    pub total_regular_income_amount: f64,
    pub total_irregular_income_amount: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct IncomeRecord {
    pub income: Income,
    pub app: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct IncomeRecordsResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: Vec<IncomeRecord>,
    pub meta: Paging,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Builder)]
#[builder(setter(into))]
pub struct CreditworthinessRequest {
    pub bvn: String,
    /// Loan principal, in kobo.
    pub principal: i64,
    pub interest_rate: f64,
    /// Loan term, in months.
    pub term: u32,
    pub run_credit_check: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreditworthinessResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct UnlinkResponse {
    pub status: String,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Requested rendering of an account statement.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum StatementOutput {
    Json,
    Pdf,
}

impl StatementOutput {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            StatementOutput::Json => "json",
            StatementOutput::Pdf => "pdf",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct StatementTransaction {
    pub id: String,
    pub r#type: String,
    pub amount: i64,
    pub narration: String,
    pub balance: Option<i64>,
    pub date: String,
    pub category: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct StatementJsonResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: Vec<StatementTransaction>,
    pub meta: StatementMeta,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct StatementMeta {
    pub count: u32,
}

/// Statement requested as a PDF renders asynchronously; the response points
/// at the generation job.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct StatementPdfResponse {
    pub status: String,
    pub message: String,
    pub data: StatementJob,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct StatementJob {
    pub id: String,
    pub status: String,
    pub path: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(untagged)]
pub enum StatementResponse {
    Json(StatementJsonResponse),
    Pdf(StatementPdfResponse),
}

/// Filters accepted when listing account transactions.
///
/// Absent filters are omitted from the query string.
#[derive(Serialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct TransactionsRequest {
    /// Start date, `DD-MM-YYYY`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// End date, `DD-MM-YYYY`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<TransactionDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paginate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub narration: String,
    pub amount: i64,
    pub r#type: TransactionDirection,
    pub balance: i64,
    pub date: String,
    pub category: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct TransactionPaging {
    pub total: u32,
    pub page: u32,
    pub previous: Option<String>,
    pub next: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct TransactionsResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: Vec<Transaction>,
    pub meta: TransactionPaging,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AssetDetails {
    pub symbol: Option<String>,
    pub price: Option<f64>,
    pub current_balance: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Asset {
    pub name: String,
    pub r#type: String,
    pub cost: Option<f64>,
    pub r#return: f64,
    pub quantity: Option<f64>,
    pub currency: String,
    pub details: AssetDetails,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AssetBalances {
    #[serde(rename = "USD")]
    pub usd: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AssetsData {
    pub id: String,
    pub balances: AssetBalances,
    pub assets: Vec<Asset>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AssetsResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: AssetsData,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SoldAsset {
    pub symbol: String,
    pub name: String,
    pub sale_price: f64,
    pub quantity_sold: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Earning {
    pub id: String,
    pub amount: f64,
    pub narration: String,
    pub date: String,
    pub asset: SoldAsset,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EarningsResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: Vec<Earning>,
}

/// Acknowledgement of an enrichment job. Results are delivered out-of-band
/// and later retrieved through the `*_records` calls; `data` is always null.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct EnrichmentJobResponse {
    pub status: Status,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct CategorisedTransaction {
    pub id: String,
    pub r#type: String,
    pub narration: String,
    pub category: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct CategorisationRecord {
    pub transactions: Vec<CategorisedTransaction>,
    pub app: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct CategorisationRecordsResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: Vec<CategorisationRecord>,
    pub meta: Paging,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct TransactionMetadata {
    pub category: String,
    pub channel: String,
    pub payee: String,
    pub payment_method: String,
    pub ref_num: String,
    pub payment_processor: String,
    pub location: String,
    pub reason: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct MetadataRecord {
    pub transactions: Vec<TransactionMetadata>,
    pub app: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct MetadataRecordsResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: Vec<MetadataRecord>,
    pub meta: Paging,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AveragePerMonth {
    pub last_12_months: f64,
    pub since_first_transaction: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FlowStats {
    pub average_per_month: AveragePerMonth,
    pub monthly_sum: Vec<HashMap<String, f64>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FlowBreakdown {
    pub all_transaction: FlowStats,
    pub repeat_transactions: FlowStats,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatementInsights {
    pub account: String,
    pub start_date: String,
    pub end_date: String,
    pub transaction_length: u32,
    pub transaction_count: u32,
    pub balance_after_expense: f64,
    pub account_summary: serde_json::Value,
    pub activity_insights: serde_json::Value,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InsightTransactionDetails {
    pub highest_debits: Vec<serde_json::Value>,
    pub highest_credits: Vec<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InsightRecord {
    pub insights: StatementInsights,
    pub transaction_details: InsightTransactionDetails,
    pub inflow: FlowBreakdown,
    pub outflow: FlowBreakdown,
    pub recurring_transactions: Vec<serde_json::Value>,
    pub app: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InsightRecordsResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub data: Vec<InsightRecord>,
    pub meta: Paging,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct CashFlowPeriod {
    pub period: String,
    pub amount: i64,
    pub transactions_count: u32,
}

/// Aggregated credits or debits over the life of an account.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct CashFlowResponse {
    pub total: i64,
    pub transactions_count: u32,
    pub history: Vec<CashFlowPeriod>,
}
