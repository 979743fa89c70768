//! The assistant pipeline: classify -> dispatch -> synthesize/reuse/edit/
//! invoice -> persist -> reply.

mod chat;
mod classify;
mod edit;
mod invoice;
mod prompts;
mod reuse;
mod synthesize;

pub use chat::{ChatAction, ChatCommand, ChatError, ChatHandler, ChatReply};
pub use classify::IntentClassifier;
pub use edit::{
    EditItineraryCommand, EditItineraryError, EditItineraryHandler, EditItineraryOutcome,
};
pub use invoice::{CreateInvoiceCommand, CreateInvoiceHandler, CreateInvoiceOutcome};
pub use reuse::ItineraryReuse;
pub use synthesize::{ItinerarySynthesizer, SynthesisRequest};
