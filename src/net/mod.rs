//! Remote-service access: wire types, error kinds, and per-endpoint calls.
//!
//! Browser HTTP (`gloo-net`) is gated behind the `csr` feature; without it
//! every call returns a `Network` error so the crate builds and its pure
//! logic unit-tests on the native target.

pub mod auth;
pub mod blogs;
pub mod error;
#[cfg(feature = "csr")]
pub(crate) mod http;
pub mod profiles;
pub mod types;
