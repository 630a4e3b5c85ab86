//! Newtype IDs for type-safe entity references.
//!
//! Every row is keyed by a random UUID assigned by the caller before the row reaches
//! its store. Wrapping each key in its own type keeps a `ProductId` from being passed
//! where a `CategoryId` is expected.

use std::str::FromStr;
use uuid::Uuid;

/// Defines a UUID-backed ID wrapper.
///
/// The generated type is `Copy`, hashes and orders like the inner UUID, serializes
/// transparently, prints as the hyphenated UUID and parses from it.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// A fresh random (v4) identifier.
            #[must_use]
            pub fn generate() -> Self {
                Self(Uuid::new_v4())
            }

            #[must_use]
            pub const fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            #[must_use]
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s.trim()).map(Self)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }
    };
}

define_id!(CategoryId);
define_id!(ProductId);
define_id!(OrderId);
define_id!(OrderItemId);
define_id!(CustomerId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_parses_its_own_display() {
        let id = ProductId::generate();
        let parsed: ProductId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!("not-a-uuid".parse::<OrderId>().is_err());
        assert!("".parse::<CustomerId>().is_err());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let raw = "6f1c1c52-1b53-4d4b-9a39-2f0e4f3a7c11";
        let id: CategoryId = raw.parse().unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), format!("\"{raw}\""));
    }
}
