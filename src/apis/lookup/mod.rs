//! APIs and models related to identity and business lookups: BVN, the CAC
//! business registry, and the remaining KYC checks.

mod api;
mod model;

pub use api::{BvnApi, CacApi, LookupApi};
pub use model::*;
