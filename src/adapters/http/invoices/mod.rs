//! HTTP surface for invoices.

mod dto;
mod handlers;
mod routes;

pub use routes::routes;
