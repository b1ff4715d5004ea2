//! Shared Dioxus components and JS bridge for the NYC Taxi Explorer.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers around Chart.js and Leaflet via `js_sys::eval()`
//! - `state`: reactive `AppState` with Dioxus Signals
//! - `controller`: the filter controller (trip table refresh)
//! - `bootstrap`: the one-shot initial load of every view
//! - `components`: RSX components for cards, table, filters, charts and map

pub mod bootstrap;
pub mod components;
pub mod controller;
pub mod js_bridge;
pub mod state;
