use super::SystemConfig;
use crate::auth::{PrincipalResolver, TokenVerifier};
use crate::clients::{CategoryClient, CustomerClient, OrderClient, ProductClient};
use crate::notification::{NotificationSink, NotificationWorker};
use crate::service::OrderService;
use crate::{category_actor, customer_actor, order_actor, product_actor};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
#[error("{task} task failed: {source}")]
pub struct ShutdownError {
    pub task: &'static str,
    #[source]
    pub source: tokio::task::JoinError,
}

/// The running system: four store actors, the notification worker, and the handles
/// callers use to reach them.
///
/// # Architecture
///
/// - **Category Actor**: the category forest (no dependencies)
/// - **Product Actor**: the catalog; context = `CategoryClient`
/// - **Order Actor**: orders and items; context = `ProductClient`
/// - **Customer Actor**: registered customers (no dependencies)
/// - **Notification Worker**: drains the confirmation queue into the sink; context =
///   `CustomerClient` for recipient lookups
///
/// The dependency graph is acyclic, so dropping the outside handles shuts the actors
/// down from the top: orders, then products, then categories, and the worker before
/// the customers.
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new(SystemConfig::default(), verifier, Arc::new(LogSink));
///
/// let principal = system.resolver.resolve(Some("Bearer t-ada")).await?;
/// let placed = system.service.place_order(&principal, &customer_id, &items).await?;
///
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    /// Every core-exposed operation
    pub service: OrderService,

    /// Header → principal
    pub resolver: PrincipalResolver,

    pub category_client: CategoryClient,
    pub product_client: ProductClient,
    pub order_client: OrderClient,
    pub customer_client: CustomerClient,

    /// Task handles in shutdown order (used for graceful shutdown)
    handles: Vec<(&'static str, JoinHandle<()>)>,
}

impl OrderSystem {
    /// Spawns every actor with its context injected, plus the notification worker.
    /// Must be called inside a Tokio runtime.
    pub fn new(
        config: SystemConfig,
        verifier: Arc<dyn TokenVerifier>,
        sink: Arc<dyn NotificationSink>,
    ) -> Self {
        // 1. Create actors (no dependencies)
        let (category_actor, category_client) = category_actor::new(config.mailbox_capacity);
        let (product_actor, product_client) = product_actor::new(config.mailbox_capacity);
        let (order_actor, order_client) = order_actor::new(config.mailbox_capacity);
        let (customer_actor, customer_client) = customer_actor::new(config.mailbox_capacity);
        let (worker, dispatcher) =
            NotificationWorker::new(config.notification_queue_capacity, sink);
        let worker = worker.with_directory(Arc::new(customer_client.clone()));

        // 2. Start actors with injected context
        let order_handle = tokio::spawn(order_actor.run(product_client.clone()));
        let product_handle = tokio::spawn(product_actor.run(category_client.clone()));
        let category_handle = tokio::spawn(category_actor.run(()));
        let customer_handle = tokio::spawn(customer_actor.run(()));
        let worker_handle = worker.spawn();

        let service = OrderService::new(
            category_client.clone(),
            product_client.clone(),
            order_client.clone(),
            customer_client.clone(),
            dispatcher,
        );
        info!(?config, "Order system started");

        Self {
            service,
            resolver: PrincipalResolver::new(verifier),
            category_client,
            product_client,
            order_client,
            customer_client,
            handles: vec![
                ("order", order_handle),
                ("product", product_handle),
                ("category", category_handle),
                ("notification", worker_handle),
                ("customer", customer_handle),
            ],
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping every handle closes the channels; each actor finishes the requests
    /// already queued and exits, and the worker delivers what is still queued.
    ///
    /// Service clones held elsewhere keep their actors alive, so drop them first.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down system...");

        drop(self.service);
        drop(self.resolver);
        drop(self.category_client);
        drop(self.product_client);
        drop(self.order_client);
        drop(self.customer_client);

        for (task, handle) in self.handles {
            if let Err(source) = handle.await {
                error!(task, error = %source, "Task failed");
                return Err(ShutdownError { task, source });
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
