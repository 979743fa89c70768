//! Ports: trait seams for every external collaborator.

mod client_repository;
mod conversation_log;
mod invoice_repository;
mod itinerary_repository;
mod model_gateway;
mod repository;
mod session_validator;
mod supplier_repository;

pub use client_repository::ClientRepository;
pub use conversation_log::{ConversationLog, ConversationLogError};
pub use invoice_repository::InvoiceRepository;
pub use itinerary_repository::ItineraryRepository;
pub use model_gateway::{Completion, ModelError, ModelGateway, TokenUsage};
pub use repository::RepositoryError;
pub use session_validator::SessionValidator;
pub use supplier_repository::SupplierRepository;
