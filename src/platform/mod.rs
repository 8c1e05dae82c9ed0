//! Platform abstraction layer
//!
//! Hosts that drive the [`crate::Engine`]:
//! - `web`: wasm-bindgen bindings with LocalStorage persistence
//! - `headless`: fixed-rate native runner used by the CLI and tests

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;
