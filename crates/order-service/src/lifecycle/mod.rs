//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the store actors and the notification worker.
//!
//! ## Dependency Injection via Context
//!
//! Actors are created first and receive their dependencies when they start running:
//!
//! ```rust,ignore
//! impl ActorEntity for Category    { type Context = (); }
//! impl ActorEntity for Product     { type Context = CategoryClient; }
//! impl ActorEntity for PlacedOrder { type Context = ProductClient; }
//! ```
//!
//! Each context client is a clone. As long as the graph stays acyclic, dropping the
//! outside handles is enough for every actor to see its channel close.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all handles** - closes the sender side of channels
//! 2. **Actors drain** - queued requests are still answered, then `recv()` returns `None`
//! 3. **Worker drains** - queued notifications are still delivered
//! 4. **Await completion** - every task handle is joined
//!
//! ## Configuration
//!
//! [`SystemConfig::from_env`] sizes mailboxes and the notification queue and picks the
//! default log filter for [`setup_tracing`](actor_framework::tracing::setup_tracing).

pub mod config;
pub mod order_system;

pub use config::*;
pub use order_system::*;
