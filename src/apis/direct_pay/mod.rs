//! APIs and models related to DirectPay: one-time payments, direct-debit
//! mandates, payouts and refunds.

mod api;
mod model;

pub use api::{DirectPayApi, MandatesApi, OneTimePaymentsApi};
pub use model::*;
