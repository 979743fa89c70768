//! Tripdesk - B2B travel-agency backend
//!
//! This crate implements tenant-scoped CRM, itinerary, invoicing, and supplier
//! records together with a conversational AI assistant that turns free-text
//! requests into persisted itineraries and invoices.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
