//! Persisted travel entities: clients, itineraries, invoices, suppliers.

mod client;
mod invoice;
mod itinerary;
mod supplier;

pub use client::Client;
pub use invoice::{generate_invoice_number, Invoice, InvoiceStatus, DEFAULT_DUE_DAYS};
pub use itinerary::{Itinerary, ItineraryStatus};
pub use supplier::Supplier;
