//! Infobús upstream API integration.
//!
//! - `client`: HTTP client issuing requests and converting failures to values
//! - `arrivals`: rendering of next-arrival responses into display text
//! - `error`: construction errors and per-request failure descriptors

pub mod arrivals;
mod client;
mod error;

#[cfg(test)]
pub(crate) mod test_support;

pub use arrivals::{ArrivalRecord, format_arrival, render};
pub use client::{InfobusClient, NEXT_TRIPS_PATH, UpstreamResult};
pub use error::{FailureKind, FetchError, InfobusError};
