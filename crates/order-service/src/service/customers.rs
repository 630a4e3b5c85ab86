//! Customer registration and lookup. Admin only.

use super::{parse_id, required_name, OrderService, ServiceError};
use crate::auth::{authorize, Principal, ADMIN};
use crate::model::{Customer, CustomerCreate, CustomerId};
use actor_framework::ActorClient;
use tracing::{info, instrument};

pub const MAX_PAGE_SIZE: usize = 100;

impl OrderService {
    #[instrument(skip(self, principal), fields(principal = %principal.id))]
    pub async fn register_customer(
        &self,
        principal: &Principal,
        name: &str,
        email: &str,
        phone: Option<&str>,
    ) -> Result<Customer, ServiceError> {
        authorize(principal, ADMIN)?;
        let params = CustomerCreate {
            id: CustomerId::generate(),
            name: required_name("customer name", name)?,
            email: email.trim().to_string(),
            phone: phone.map(str::to_string),
        };

        let customer = self.customers.register(params).await?;
        info!(customer_id = %customer.id, "Customer registered");
        Ok(customer)
    }

    #[instrument(skip(self, principal), fields(principal = %principal.id))]
    pub async fn get_customer(&self, principal: &Principal, id: &str) -> Result<Customer, ServiceError> {
        authorize(principal, ADMIN)?;
        let id: CustomerId = parse_id("customer id", id)?;
        Ok(self.customers.require(id).await?)
    }

    /// Registration order. `limit` must be between 1 and [`MAX_PAGE_SIZE`].
    #[instrument(skip(self, principal), fields(principal = %principal.id))]
    pub async fn list_customers(
        &self,
        principal: &Principal,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Customer>, ServiceError> {
        authorize(principal, ADMIN)?;
        if limit == 0 || limit > MAX_PAGE_SIZE {
            return Err(ServiceError::validation(format!(
                "limit must be between 1 and {MAX_PAGE_SIZE}, got {limit}"
            )));
        }
        Ok(self.customers.list(limit, offset).await?)
    }
}
