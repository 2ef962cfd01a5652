//! Browser-environment helpers.

pub mod token_store;
