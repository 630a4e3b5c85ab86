//! # Principal Resolution & Role Gate
//!
//! [`PrincipalResolver`] turns an `Authorization: Bearer <token>` header into a
//! [`Principal`] through a [`TokenVerifier`]. [`authorize`] is the pure role check the
//! service runs before any side effect; the principal is passed to it explicitly.
//!
//! ```rust,ignore
//! let principal = resolver.resolve(headers.get("authorization")).await?;
//! authorize(&principal, CUSTOMER)?;
//! ```

pub mod error;
pub mod principal;
pub mod resolver;
pub mod static_verifier;

pub use error::*;
pub use principal::*;
pub use resolver::*;
pub use static_verifier::StaticTokenVerifier;
