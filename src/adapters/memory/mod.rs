//! In-memory adapters with the same semantics as the Postgres ones.
//!
//! Used by unit and integration tests so the whole pipeline can run without
//! a database.

mod clients;
mod conversation_log;
mod invoices;
mod itineraries;
mod suppliers;

pub use clients::InMemoryClientRepository;
pub use conversation_log::InMemoryConversationLog;
pub use invoices::InMemoryInvoiceRepository;
pub use itineraries::InMemoryItineraryRepository;
pub use suppliers::InMemorySupplierRepository;
