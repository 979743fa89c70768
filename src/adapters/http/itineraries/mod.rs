//! HTTP surface for itineraries.

mod dto;
mod handlers;
mod routes;

pub use routes::routes;
