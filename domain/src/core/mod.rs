//! Core domain concepts shared across all subdomains.
//!
//! - [`async_result::AsyncResult`] — a deferred computation that may fail
//! - [`error::FetchError`] — the failure carried by every producer

pub mod async_result;
pub mod error;
