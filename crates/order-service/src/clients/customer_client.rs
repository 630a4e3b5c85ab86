//! # Customer Client
//!
//! Provides a high‑level API for interacting with the `Customer` actor.
use super::recover;
use crate::customer_actor::{CustomerError, CustomerQuery};
use crate::model::{Customer, CustomerCreate, CustomerId};
use crate::notification::{NotificationError, Recipient, RecipientDirectory};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: ResourceClient<Customer>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn register(&self, params: CustomerCreate) -> Result<Customer, CustomerError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Customers in registration order, skipping `offset` and returning at most `limit`.
    #[instrument(skip(self))]
    pub async fn list(&self, limit: usize, offset: usize) -> Result<Vec<Customer>, CustomerError> {
        self.inner
            .query(CustomerQuery::List { limit, offset })
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Customer> for CustomerClient {
    type Error = CustomerError;

    fn inner(&self) -> &ResourceClient<Customer> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        recover(e, |other| match other {
            FrameworkError::NotFound(id) => CustomerError::NotFound(id),
            FrameworkError::AlreadyExists(id) => CustomerError::AlreadyExists(id),
            other => CustomerError::ActorCommunicationError(other.to_string()),
        })
    }
}

/// Order confirmations are addressed from the customer record.
#[async_trait]
impl RecipientDirectory for CustomerClient {
    async fn recipient(&self, customer_id: CustomerId) -> Result<Option<Recipient>, NotificationError> {
        self.get(customer_id)
            .await
            .map(|found| found.map(Recipient::from))
            .map_err(|e| NotificationError::ContactLookup(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::MockClient;

    #[tokio::test]
    async fn test_list_passes_paging_through() {
        let mut mock = MockClient::<Customer>::new();
        mock.expect_query().return_ok(vec![]);

        let customers = CustomerClient::new(mock.client());
        assert!(customers.list(10, 20).await.unwrap().is_empty());
        mock.verify();
    }

    #[tokio::test]
    async fn test_duplicate_email_surfaces_as_entity_error() {
        let mut mock = MockClient::<Customer>::new();
        mock.expect_create()
            .return_err(FrameworkError::EntityError(Box::new(CustomerError::EmailTaken(
                "ada@example.com".into(),
            ))));

        let customers = CustomerClient::new(mock.client());
        let err = customers
            .register(CustomerCreate {
                id: crate::model::CustomerId::generate(),
                name: "Ada".into(),
                email: "ada@example.com".into(),
                phone: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err, CustomerError::EmailTaken("ada@example.com".into()));
        mock.verify();
    }

    #[tokio::test]
    async fn test_recipient_from_customer_record() {
        let now = chrono::Utc::now();
        let ada = Customer {
            id: CustomerId::generate(),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: Some("+15550100".into()),
            created_at: now,
            updated_at: now,
        };
        let stranger = CustomerId::generate();

        let mut mock = MockClient::<Customer>::new();
        mock.expect_get(ada.id).return_ok(Some(ada.clone()));
        mock.expect_get(stranger).return_ok(None);
        mock.expect_get(stranger).return_err(FrameworkError::ActorClosed);

        let customers = CustomerClient::new(mock.client());
        assert_eq!(
            customers.recipient(ada.id).await.unwrap(),
            Some(Recipient {
                name: Some("Ada".into()),
                email: Some("ada@example.com".into()),
                phone: Some("+15550100".into()),
            })
        );
        assert_eq!(customers.recipient(stranger).await.unwrap(), None);
        assert!(matches!(
            customers.recipient(stranger).await,
            Err(NotificationError::ContactLookup(_))
        ));
        mock.verify();
    }
}
