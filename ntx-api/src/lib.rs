//! Data model and HTTP client for the NYC Taxi Explorer API.
//!
//! The API serves precomputed trip statistics as plain JSON. This crate
//! provides:
//! - `models`: the response types (`SummaryStats`, `Trip`, `HourlyFare`, ...)
//! - `filter`: the trip filter and its query-string encoding
//! - `client`: `ApiClient`, which turns every failure into `None`
//! - `error`: `ApiError`, the failure taxonomy logged by the client
//!
//! The client builds on `reqwest`, so the same code runs natively (CLI) and
//! in the browser (WASM dashboard).

pub mod client;
pub mod error;
pub mod filter;
pub mod models;

pub use client::{ApiClient, DEFAULT_BASE_URL, DEFAULT_TOP_ZONES};
pub use error::ApiError;
pub use filter::{Filter, BOROUGHS};
pub use models::{HealthStatus, HourlyFare, SummaryStats, Trip, ZoneCount};
