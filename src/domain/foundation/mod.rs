//! Foundation types shared across the domain.

mod auth;
mod ids;

pub use auth::{AuthError, AuthenticatedUser};
pub use ids::{AgencyId, ClientId, InvoiceId, ItineraryId, SupplierId, UserId};
