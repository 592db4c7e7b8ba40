//! GRC Dashboard
//!
//! Risk and compliance overview for the GRC-MMAP API, built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. On mount it performs a single GET against the dashboard
//! summary endpoint and renders risk cards and the control maturity list.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
