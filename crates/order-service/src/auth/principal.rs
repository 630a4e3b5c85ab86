//! The verified caller and the role gate.

use super::AuthError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const ADMIN: &str = "admin";
pub const CUSTOMER: &str = "customer";

/// The verified identity attached to one operation. Built per call, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Identity id assigned by the token issuer.
    pub id: String,
    pub email: Option<String>,
    pub roles: BTreeSet<String>,
}

impl Principal {
    pub fn new<I, S>(id: impl Into<String>, email: Option<String>, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            email,
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }
}

/// Allows the call when `principal` holds `role`.
pub fn authorize(principal: &Principal, role: &str) -> Result<(), AuthError> {
    if principal.has_role(role) {
        Ok(())
    } else {
        Err(AuthError::Forbidden {
            required: role.to_string(),
        })
    }
}

/// Allows the call when `principal` holds at least one of `roles`.
pub fn authorize_any(principal: &Principal, roles: &[&str]) -> Result<(), AuthError> {
    if roles.iter().any(|role| principal.has_role(role)) {
        Ok(())
    } else {
        Err(AuthError::Forbidden {
            required: roles.join(" or "),
        })
    }
}
