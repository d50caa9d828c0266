use crate::apis::connect::TransactionDirection;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Identification document attached to a customer, e.g. a BVN or NIN.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Identification {
    pub r#type: String,
    pub number: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
#[builder(setter(into))]
pub struct CreateIndividualCustomerRequest {
    pub identity: Identification,
    pub email: String,
    pub r#type: String,
    pub last_name: String,
    pub first_name: String,
    pub address: String,
    pub phone: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
#[builder(setter(into))]
pub struct CreateBusinessCustomerRequest {
    pub identity: Identification,
    pub email: String,
    pub r#type: String,
    pub business_name: String,
    pub address: String,
    pub phone: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct UpdateCustomerRequest {
    pub identity: Identification,
    pub address: String,
    pub phone: String,
}

/// Filters accepted when listing customers.
///
/// Absent filters are omitted from the query string.
#[derive(Serialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct ListCustomersRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Filters accepted when listing the accounts linked by customers.
#[derive(Serialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct ListLinkedAccountsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub identification_no: String,
    pub identification_type: String,
    pub bvn: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct BusinessCustomer {
    pub id: String,
    pub r#type: String,
    pub business_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub identification_no: String,
    pub identification_type: String,
    pub bvn: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct IndividualCustomerResponse {
    pub status: String,
    pub message: String,
    pub data: Customer,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct BusinessCustomerResponse {
    pub status: String,
    pub message: String,
    pub data: BusinessCustomer,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct CustomerResponse {
    pub status: String,
    pub message: String,
    pub data: Customer,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct ListCustomersResponse {
    pub status: String,
    pub message: String,
    pub data: Vec<Customer>,
}

/// Transactions of one customer, grouped per linked account.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct CustomerTransactionsResponse {
    pub status: String,
    pub message: String,
    pub data: Vec<CustomerAccountTransactions>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct CustomerAccountTransactions {
    pub account: String,
    pub account_name: String,
    pub bank: String,
    pub account_transaction_data: AccountTransactionOutcome,
}

/// Per-account fetch outcome. A failure on one account does not fail the
/// whole listing, so each account carries its own error slot.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct AccountTransactionOutcome {
    pub errored: bool,
    pub data: AccountTransactionData,
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct AccountTransactionData {
    pub message: String,
    pub status: String,
    pub data: TransactionsPage,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct TransactionsPage {
    pub transactions: Vec<CustomerTransaction>,
    pub meta: TransactionsMeta,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct CustomerTransaction {
    pub id: String,
    pub r#type: TransactionDirection,
    pub amount: i64,
    pub narration: String,
    pub date: String,
    pub balance: i64,
    pub category: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct TransactionsMeta {
    pub total: u32,
    pub pages: u32,
    pub previous: Option<String>,
    pub next: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct UpdateCustomerResponse {
    pub status: String,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct DeleteCustomerResponse {
    pub status: String,
    pub message: String,
    pub data: Option<serde_json::Value>,
}
