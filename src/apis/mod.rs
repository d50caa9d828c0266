//! Clients for the various Mono APIs.

use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};

pub mod connect;
pub mod customers;
pub mod direct_pay;
pub mod lookup;
pub mod telco;

pub(crate) struct MonoClientInner {
    pub(crate) client: ClientWithMiddleware,
    pub(crate) base_url: Url,
}

impl Debug for MonoClientInner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonoClientInner")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Request envelope used by every write operation.
///
/// Mono expects all payloads wrapped as `{"data": <payload>}`, with no other
/// keys at the top level.
#[derive(Serialize, Debug)]
pub(crate) struct DataEnvelope<T> {
    pub(crate) data: T,
}

/// Outcome carried by the `status` field of most Mono response envelopes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Successful,
    Failed,
    Pending,
}
