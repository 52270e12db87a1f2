//! RustKit Engine Integration Tests
//!
//! End-to-end tests for element and page rendering.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --package rustkit-engine --test integration_tests
//!
//! # With log output
//! RUST_LOG=rustkit_engine=debug cargo test --package rustkit-engine --test integration_tests -- --nocapture
//! ```
//!
//! ## Test Categories
//!
//! - **page_rendering**: Full style map → descriptors, viewport, JSON output
//! - **z_order**: Stable z-sorting and stacking-context selection
//! - **failures**: Per-element failure collection

mod integration;
mod support;
