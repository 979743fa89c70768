//! PostgreSQL persistence adapters.
//!
//! Plain `sqlx::query` with bound parameters throughout; every statement
//! filters by `agency_id` so tenant isolation holds by construction.

mod clients;
mod conversation_log;
mod invoices;
mod itineraries;
mod suppliers;

pub use clients::PostgresClientRepository;
pub use conversation_log::PostgresConversationLog;
pub use invoices::PostgresInvoiceRepository;
pub use itineraries::PostgresItineraryRepository;
pub use suppliers::PostgresSupplierRepository;
