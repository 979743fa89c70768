//! Shared application state for HTTP handlers.

use std::sync::Arc;

use crate::application::assistant::ChatHandler;
use crate::ports::{
    ClientRepository, ConversationLog, InvoiceRepository, ItineraryRepository, ModelGateway,
    SupplierRepository,
};

/// Everything the HTTP handlers need, cheaply cloneable per request.
#[derive(Clone)]
pub struct AppState {
    pub clients: Arc<dyn ClientRepository>,
    pub itineraries: Arc<dyn ItineraryRepository>,
    pub invoices: Arc<dyn InvoiceRepository>,
    pub suppliers: Arc<dyn SupplierRepository>,
    pub assistant: Arc<ChatHandler>,
}

impl AppState {
    /// Wires the assistant pipeline and CRUD repositories together.
    pub fn new(
        gateway: Arc<dyn ModelGateway>,
        clients: Arc<dyn ClientRepository>,
        itineraries: Arc<dyn ItineraryRepository>,
        invoices: Arc<dyn InvoiceRepository>,
        suppliers: Arc<dyn SupplierRepository>,
        conversation_log: Arc<dyn ConversationLog>,
    ) -> Self {
        let assistant = Arc::new(ChatHandler::new(
            gateway,
            clients.clone(),
            itineraries.clone(),
            invoices.clone(),
            conversation_log,
        ));
        Self {
            clients,
            itineraries,
            invoices,
            suppliers,
            assistant,
        }
    }
}
