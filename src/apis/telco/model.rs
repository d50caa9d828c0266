use crate::apis::{connect::TransactionDirection, Status};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct LoginRequest {
    pub phone: String,
    /// Network operator, e.g. `"mtn"` or `"airtel"`.
    pub provider: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct LoginResponse {
    pub status: Status,
    pub data: TelcoSession,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct TelcoSession {
    /// Opaque identifier for the login session, to thread into the OTP step.
    pub session_id: String,
    pub result: LoginForm,
}

/// Form the operator wants rendered to the user to continue authentication.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct LoginForm {
    pub title: String,
    pub form: Vec<FormElement>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormElement {
    pub r#type: String,
    pub name: String,
    pub hint: String,
    pub content_type: String,
    pub min_length: u32,
    pub max_length: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct OtpVerificationRequest {
    pub otp: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct OtpVerificationResponse {
    pub status: Status,
    pub data: OtpCode,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct OtpCode {
    /// Code to exchange for a permanent telecom account id.
    pub code: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct TokenExchangeRequest {
    pub code: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct TokenExchangeResponse {
    pub id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TelcoAccountResponse {
    pub meta: TelcoAccountMeta,
    pub account: TelcoAccount,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct TelcoAccountMeta {
    pub data_status: String,
    pub auth_method: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TelcoAccount {
    #[serde(rename = "_id")]
    pub id: String,
    pub institution: TelcoInstitution,
    pub name: String,
    #[serde(rename = "accountNumber")]
    pub account_number: String,
    pub r#type: String,
    pub balance: f64,
    pub currency: String,
    pub bvn: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct TelcoInstitution {
    pub name: String,
    pub r#type: String,
}

/// Kind of value a telecom bundle holds.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum BundleKind {
    Currency,
    Voice,
    Data,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Bundle {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub r#type: BundleKind,
    pub value: f64,
    /// Unit the value is denominated in, e.g. `"ngn"`, `"minutes"` or `"gb"`.
    pub unit: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TelcoBalancesResponse {
    pub bundles: Vec<Bundle>,
}

/// Filters accepted when listing telecom transactions.
///
/// Absent filters are omitted from the query string.
#[derive(Serialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct TelcoTransactionsRequest {
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
pub struct TelcoPaging {
    pub total: u32,
    pub page: u32,
    pub previous: Option<String>,
    pub next: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TelcoTransaction {
    #[serde(rename = "_id")]
    pub id: String,
    pub r#type: TransactionDirection,
    pub amount: f64,
    pub narration: String,
    pub balance: f64,
    pub date: DateTime<Utc>,
    pub currency: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TelcoTransactionsResponse {
    pub paging: TelcoPaging,
    pub data: Vec<TelcoTransaction>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TelcoIdentityResponse {
    pub full_name: String,
    pub phone: String,
    pub gender: String,
    pub bvn: Option<String>,
    pub dob: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
