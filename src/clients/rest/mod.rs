//! REST API client.
//!
//! [`RestClient`] runs typed operations from [`crate::rest`] on top of
//! [`HttpClient`](crate::clients::HttpClient).

mod client;

pub use client::RestClient;
