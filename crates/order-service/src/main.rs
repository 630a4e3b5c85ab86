//! # Order Service Demo
//!
//! Starts the [`OrderSystem`] with an in-memory token table and a logging notification
//! sink, then walks one scenario end to end:
//! 1.  An admin builds a two-level category tree and prices two products.
//! 2.  The subtree listing and average price are read back.
//! 3.  A customer places an order; confirmations are logged by the worker.

use actor_framework::tracing::setup_tracing;
use order_service::auth::{StaticTokenVerifier, ADMIN, CUSTOMER};
use order_service::lifecycle::{OrderSystem, SystemConfig};
use order_service::notification::LogSink;
use order_service::service::{LineItemInput, NewProduct};
use rust_decimal::Decimal;
use serde_json::json;
use std::error::Error;
use std::sync::Arc;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = SystemConfig::from_env();
    setup_tracing(&config.log_filter);

    info!("Starting order service demo");

    let verifier = StaticTokenVerifier::default()
        .with_token(
            "t-admin",
            "uid-admin",
            json!({ "email": "ops@example.com", "roles": [ADMIN] }),
        )
        .with_token(
            "t-ada",
            "uid-ada",
            json!({ "email": "ada@example.com", "roles": [CUSTOMER] }),
        );
    let system = OrderSystem::new(config, Arc::new(verifier), Arc::new(LogSink));

    let admin = system.resolver.resolve(Some("Bearer t-admin")).await?;
    let ada = system.resolver.resolve(Some("Bearer t-ada")).await?;

    let span = tracing::info_span!("catalog_setup");
    let (root, p1, p2) = async {
        let root = system.service.create_category(&admin, "Hardware", None).await?;
        let child = system
            .service
            .create_category(&admin, "Fasteners", Some(&root.id.to_string()))
            .await?;

        let p1 = system
            .service
            .create_product(
                &admin,
                NewProduct {
                    name: "Hammer".to_string(),
                    description: None,
                    price: Decimal::new(5, 0),
                    category_id: root.id.to_string(),
                },
            )
            .await?;
        let p2 = system
            .service
            .create_product(
                &admin,
                NewProduct {
                    name: "Box of screws".to_string(),
                    description: Some("200 pieces".to_string()),
                    price: Decimal::new(10, 0),
                    category_id: child.id.to_string(),
                },
            )
            .await?;
        Ok::<_, Box<dyn Error>>((root, p1, p2))
    }
    .instrument(span)
    .await?;

    let in_tree = system
        .service
        .list_products_in_subtree(&root.id.to_string())
        .await?;
    let average = system
        .service
        .average_price_in_subtree(&root.id.to_string())
        .await?;
    info!(products = in_tree.len(), %average, "Catalog ready");

    let customer = system
        .service
        .register_customer(&admin, "Ada", "ada@example.com", Some("+15550100"))
        .await?;

    let span = tracing::info_span!("order_processing");
    let placed = async {
        system
            .service
            .place_order(
                &ada,
                &customer.id.to_string(),
                &[LineItemInput::new(p1.id, 2), LineItemInput::new(p2.id, 3)],
            )
            .await
    }
    .instrument(span)
    .await;

    match placed {
        Ok(placed) => info!(order_id = %placed.order.id, total = %placed.order.total, "Order processed successfully"),
        Err(e) => error!(error = %e, "Order processing failed"),
    }

    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
