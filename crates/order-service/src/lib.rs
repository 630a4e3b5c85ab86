//! # Order Service Library
//!
//! An order-management core built on [`actor_framework`]: a category forest, a product
//! catalog, customers, and atomically placed orders, each owned by a store actor.
//!
//! - **[service]**: every caller-facing operation, with role checks and validation
//! - **[auth]**: bearer header → [`Principal`](auth::Principal), plus the role gate
//! - **[clients]**: typed wrappers over each store actor's channel
//! - **[notification]**: best-effort order confirmations, queued after commit
//! - **[lifecycle]**: wiring, configuration and shutdown
//!
//! See [`lifecycle::OrderSystem`] to start everything at once.

pub mod auth;
pub mod category_actor;
pub mod clients;
pub mod customer_actor;
pub mod lifecycle;
pub mod model;
pub mod notification;
pub mod order_actor;
pub mod product_actor;
pub mod service;
