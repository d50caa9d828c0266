//! The [Mono](https://mono.co) Rust client provides convenient access
//! to the Mono APIs from applications built with Rust.
//!
//! Check out also the official Mono [API documentation](https://docs.mono.co).
//!
//! # Usage
//!
//! ## Prerequisites
//!
//! First [sign up](https://app.mono.co) for a developer account and create an
//! app to obtain your secret key. Every request the client sends carries that
//! key in the `mono-sec-key` header.
//!
//! ## Initialize a new `MonoClient`
//!
//! ```rust,no_run
//! # use mono_rust::MonoClient;
//! let mono = MonoClient::builder("sk_live_your_secret_key".to_string()).build();
//! ```
//!
//! ## Link a bank account
//!
//! Account linking is a two-step flow: initiate a linking session, send the
//! user to the returned widget URL, then exchange the code produced by the
//! widget for a permanent account id.
//!
//! ```rust,no_run
//! # use mono_rust::{MonoClient, Error, apis::connect::*};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let mono: MonoClient = unreachable!();
//! let session = mono
//!     .connect
//!     .initiate_account_linking(&AccountLinkingRequestBuilder::default()
//!         .customer(LinkCustomer {
//!             name: "Samuel Olamide".to_string(),
//!             email: "samuel@neem.com".to_string(),
//!         })
//!         .scope("auth")
//!         .redirect_url("https://mono.co")
//!         .build()
//!         .unwrap())
//!     .await?;
//!
//! println!("Send the user to: {}", session.data.mono_url);
//! # Ok(())
//! # }
//! ```
//!
//! ## Initiate a one-time payment
//!
//! ```rust,no_run
//! # use mono_rust::{MonoClient, Error, apis::direct_pay::*};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let mono: MonoClient = unreachable!();
//! # let request: InitiatePaymentRequest = unreachable!();
//! let res = mono.direct_pay.one_time.initiate(&request).await?;
//!
//! println!("Payment {} started: {}", res.data.id, res.data.mono_url);
//! # Ok(())
//! # }
//! ```
//!
//! Multi-step flows (BVN lookup, telco login, mandate OTP verification) are
//! sequenced by the caller: each initiation call returns an opaque session
//! identifier which must be passed to the follow-up call.

#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod apis;
pub mod client;
mod common;
pub mod error;
mod middlewares;

pub use client::MonoClient;
pub use error::Error;
