//! # Observability & Tracing
//!
//! Structured logging for every actor in the system.
//!
//! The [`setup_tracing`] function installs a compact `tracing-subscriber` formatter that
//! hides the module prefix (`with_target(false)`); actors tag their lines with an
//! `entity_type` field instead.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Lifecycle and successful writes
//! RUST_LOG=info cargo run
//!
//! # Full request payloads
//! RUST_LOG=debug cargo run
//! ```
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Actor started entity_type="Category"
//! INFO Created entity_type="Category" id=5f0c... size=1
//! INFO place_order: Order placed order_id=9b1e... total=40.00
//! ```
//!
//! **With `RUST_LOG=debug`** the actors also log each request as it arrives:
//!
//! ```text
//! DEBUG Create entity_type="PlacedOrder" params=NewOrder { .. }
//! DEBUG Query entity_type="Product" query=InSubtree(..)
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` (e.g. `"info"`) applies.
/// Calling it twice is harmless: the second subscriber is silently discarded, which
/// lets every test set up logging on its own.
pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type replaces module paths
        .compact()
        .try_init();
}
