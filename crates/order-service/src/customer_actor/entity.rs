//! [`ActorEntity`] implementation for [`Customer`].

use super::{CustomerError, CustomerQuery};
use crate::model::{Customer, CustomerCreate, CustomerId};
use actor_framework::{ActorEntity, EntityStore};
use async_trait::async_trait;
use chrono::Utc;
use std::convert::Infallible;

fn normalized_email(raw: &str) -> Result<String, CustomerError> {
    let email = raw.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email.to_string()),
        _ => Err(CustomerError::InvalidEmail(raw.to_string())),
    }
}

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Update = Infallible;
    type Query = CustomerQuery;
    type QueryResult = Vec<Customer>;
    type Context = ();
    type Error = CustomerError;

    fn from_create_params(params: CustomerCreate) -> Result<Self, Self::Error> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(CustomerError::BlankName);
        }
        let now = Utc::now();
        Ok(Self {
            id: params.id,
            name: name.to_string(),
            email: normalized_email(&params.email)?,
            phone: params
                .phone
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
            created_at: now,
            updated_at: now,
        })
    }

    fn id(&self) -> &CustomerId {
        &self.id
    }

    fn check_constraints(&self, existing: &EntityStore<Self>) -> Result<(), Self::Error> {
        if existing
            .iter()
            .any(|c| c.email.eq_ignore_ascii_case(&self.email))
        {
            return Err(CustomerError::EmailTaken(self.email.clone()));
        }
        Ok(())
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_query(
        query: CustomerQuery,
        rows: &EntityStore<Self>,
        _ctx: &(),
    ) -> Result<Vec<Customer>, Self::Error> {
        match query {
            CustomerQuery::List { limit, offset } => {
                Ok(rows.iter().skip(offset).take(limit).cloned().collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(name: &str, email: &str) -> CustomerCreate {
        CustomerCreate {
            id: CustomerId::generate(),
            name: name.to_string(),
            email: email.to_string(),
            phone: Some("  ".to_string()),
        }
    }

    #[test]
    fn test_create_normalizes_input() {
        let customer = Customer::from_create_params(create(" Ada ", " ada@example.com ")).unwrap();
        assert_eq!(customer.name, "Ada");
        assert_eq!(customer.email, "ada@example.com");
        assert_eq!(customer.phone, None);
    }

    #[test]
    fn test_create_rejects_bad_email() {
        for email in ["", "ada", "@example.com", "ada@"] {
            assert!(matches!(
                Customer::from_create_params(create("Ada", email)),
                Err(CustomerError::InvalidEmail(_))
            ));
        }
    }

    #[test]
    fn test_email_is_unique_ignoring_case() {
        let mut store = EntityStore::new();
        store
            .insert(Customer::from_create_params(create("Ada", "ada@example.com")).unwrap())
            .unwrap();

        let twin = Customer::from_create_params(create("Ada L.", "ADA@example.com")).unwrap();
        assert_eq!(
            twin.check_constraints(&store).unwrap_err(),
            CustomerError::EmailTaken("ADA@example.com".to_string())
        );
    }
}
