//! APIs and models related to telecom account aggregation.

mod api;
mod model;

pub use api::TelcoApi;
pub use model::*;
