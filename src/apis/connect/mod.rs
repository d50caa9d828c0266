//! APIs and models related to bank data: account linking, account
//! information, statements, transactions, investments, data enrichment and
//! cash flow.

mod api;
mod model;

pub use api::ConnectApi;
pub use model::*;
