//! HTTP client module
//!
//! Thin wrapper over `reqwest` configured for long-poll style API reads:
//! a generous fixed per-request timeout, gzip/deflate response decompression,
//! and an `Authorization` header applied from the auth module. There is no
//! retry or backoff here; every failure propagates to the caller.

mod client;

pub use client::{ClientConfig, ClientConfigBuilder, HttpClient, RequestConfig, DEFAULT_TIMEOUT};
