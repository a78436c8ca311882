//! VBA Code Parser - Dioxus Fullstack Web Application
//!
//! Thin frontend over the external VBA parsing service: paste code, submit
//! it, and the returned documentation structure is rendered as formatted
//! JSON.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod api;
mod app;
mod components;
mod pages;
mod routes;
mod state;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
