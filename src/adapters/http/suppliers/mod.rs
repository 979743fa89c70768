//! HTTP surface for the supplier partner directory.

mod dto;
mod handlers;
mod routes;

pub use routes::routes;
