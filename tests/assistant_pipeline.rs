//! End-to-end assistant pipeline scenarios against in-memory adapters and
//! the scripted mock gateway: the full classify -> dispatch -> persist ->
//! reply loop without a database or a live model.

use std::sync::Arc;

use chrono::Utc;

use tripdesk::adapters::ai::MockModelGateway;
use tripdesk::adapters::memory::{
    InMemoryClientRepository, InMemoryConversationLog, InMemoryInvoiceRepository,
    InMemoryItineraryRepository,
};
use tripdesk::application::assistant::{ChatAction, ChatCommand, ChatHandler};
use tripdesk::domain::assistant::ItineraryPlan;
use tripdesk::domain::foundation::{AgencyId, UserId};
use tripdesk::domain::travel::{Client, Itinerary, ItineraryStatus};
use tripdesk::ports::{ClientRepository, InvoiceRepository, ItineraryRepository};

struct Pipeline {
    handler: ChatHandler,
    gateway: MockModelGateway,
    clients: Arc<InMemoryClientRepository>,
    itineraries: Arc<InMemoryItineraryRepository>,
    invoices: Arc<InMemoryInvoiceRepository>,
    log: Arc<InMemoryConversationLog>,
}

fn pipeline(gateway: MockModelGateway) -> Pipeline {
    let clients = Arc::new(InMemoryClientRepository::new());
    let itineraries = Arc::new(InMemoryItineraryRepository::new());
    let invoices = Arc::new(InMemoryInvoiceRepository::new());
    let log = Arc::new(InMemoryConversationLog::new());
    let handler = ChatHandler::new(
        Arc::new(gateway.clone()),
        clients.clone(),
        itineraries.clone(),
        invoices.clone(),
        log.clone(),
    );
    Pipeline {
        handler,
        gateway,
        clients,
        itineraries,
        invoices,
        log,
    }
}

fn command(agency_id: AgencyId, user_id: UserId, message: &str) -> ChatCommand {
    ChatCommand {
        message: message.to_string(),
        history: Vec::new(),
        agency_id,
        user_id,
    }
}

const PARIS_CLASSIFICATION: &str = r#"{
    "intent": "itinerary",
    "client_name": "Jane Smith",
    "destination": "Paris",
    "duration": "5 days",
    "dates": null,
    "itinerary_id": null,
    "edit_instruction": null,
    "invoice_amount": null,
    "invoice_description": null
}"#;

fn paris_plan() -> String {
    let days: Vec<serde_json::Value> = (1..=5)
        .map(|day| {
            serde_json::json!({
                "day": day,
                "title": format!("Day {}", day),
                "description": "Explore",
                "activities": ["Walk", "Museum"],
                "activitiesDescription": ["", ""],
                "meals": {"breakfast": "Cafe", "lunch": "Bistro", "dinner": "Brasserie"}
            })
        })
        .collect();
    serde_json::json!({
        "content": "Welcome to Paris!",
        "detailedPlan": {
            "destination": "Paris",
            "description": "Five days in the city of light.",
            "duration": "5 days",
            "travelers": 1,
            "budget": "moderate",
            "totalCost": "$2000-$2500",
            "dailyPlan": days
        },
        "suggestions": ["Buy a museum pass"]
    })
    .to_string()
}

#[tokio::test]
async fn itinerary_request_creates_persisted_draft() {
    let gateway = MockModelGateway::new()
        .with_reply(PARIS_CLASSIFICATION)
        .with_reply(paris_plan());
    let px = pipeline(gateway);

    let agency = AgencyId::new();
    let user = UserId::new();
    let jane = Client::new(agency, "Jane Smith", Utc::now());
    px.clients.insert(&jane).await.unwrap();

    let reply = px
        .handler
        .handle(command(agency, user, "Create a 5 day trip to Paris for Jane Smith"))
        .await
        .unwrap();

    assert_eq!(reply.action, Some(ChatAction::ItineraryCreated));
    assert!(reply.raw.is_some());
    let itinerary_id = reply.itinerary_id.expect("itinerary id in reply");

    let stored = px
        .itineraries
        .find_by_id(agency, itinerary_id)
        .await
        .unwrap()
        .expect("itinerary persisted");
    assert_eq!(stored.destination, "Paris");
    assert_eq!(stored.duration, 5);
    assert_eq!(stored.client_id, Some(jane.id));
    assert_eq!(stored.status, ItineraryStatus::Draft);
    assert_eq!(stored.created_by, user);

    // Stored plan has the full five distinct days.
    let plan: ItineraryPlan = serde_json::from_value(stored.ai_generated_json).unwrap();
    let days: Vec<u32> = plan.detailed_plan.daily_plan.iter().map(|d| d.day).collect();
    assert_eq!(days, vec![1, 2, 3, 4, 5]);

    // Classification + synthesis, nothing more.
    assert_eq!(px.gateway.call_count(), 2);
}

#[tokio::test]
async fn repeated_destination_reuses_itinerary_within_tenant() {
    let gateway = MockModelGateway::new()
        .with_reply(PARIS_CLASSIFICATION)
        .with_reply(paris_plan())
        .with_reply(PARIS_CLASSIFICATION);
    let px = pipeline(gateway);

    let agency = AgencyId::new();
    let user = UserId::new();
    px.clients
        .insert(&Client::new(agency, "Jane Smith", Utc::now()))
        .await
        .unwrap();

    let first = px
        .handler
        .handle(command(agency, user, "Create a 5 day trip to Paris for Jane Smith"))
        .await
        .unwrap();
    let second = px
        .handler
        .handle(command(agency, user, "Create a 5 day trip to PARIS for Jane Smith"))
        .await
        .unwrap();

    assert_eq!(second.action, Some(ChatAction::ItineraryCreated));
    assert_eq!(second.itinerary_id, first.itinerary_id);
    assert_eq!(px.itineraries.len().await, 1);
    // Second turn spent only a classification call; the plan was reused.
    assert_eq!(px.gateway.call_count(), 3);
}

#[tokio::test]
async fn reuse_never_crosses_tenants() {
    let gateway = MockModelGateway::new()
        .with_reply(PARIS_CLASSIFICATION)
        .with_reply(paris_plan());
    let px = pipeline(gateway);

    // Tenant A already has a Paris itinerary.
    let agency_a = AgencyId::new();
    let existing = Itinerary::from_plan(
        agency_a,
        None,
        UserId::new(),
        "Paris",
        5,
        &ItineraryPlan::default(),
        Utc::now(),
    );
    px.itineraries.insert(&existing).await.unwrap();

    // Tenant B asks for paris: must generate its own, not borrow A's.
    let agency_b = AgencyId::new();
    px.clients
        .insert(&Client::new(agency_b, "Jane Smith", Utc::now()))
        .await
        .unwrap();

    let reply = px
        .handler
        .handle(command(agency_b, UserId::new(), "Create a 5 day trip to paris for Jane Smith"))
        .await
        .unwrap();

    assert_eq!(reply.action, Some(ChatAction::ItineraryCreated));
    assert_ne!(reply.itinerary_id, Some(existing.id));
    assert_eq!(px.itineraries.len().await, 2);
    // Tenant B paid for its own synthesis call.
    assert_eq!(px.gateway.call_count(), 2);
}

#[tokio::test]
async fn invoice_request_creates_draft_with_generated_number() {
    let gateway = MockModelGateway::new().with_reply(
        r#"{"intent": "invoice", "client_name": "Jane Smith", "invoice_amount": 500, "invoice_description": "Paris trip deposit"}"#,
    );
    let px = pipeline(gateway);

    let agency = AgencyId::new();
    let jane = Client::new(agency, "Jane Smith", Utc::now());
    px.clients.insert(&jane).await.unwrap();

    let before = Utc::now();
    let reply = px
        .handler
        .handle(command(agency, UserId::new(), "Create invoice for Jane Smith for $500"))
        .await
        .unwrap();

    assert_eq!(reply.action, Some(ChatAction::InvoiceCreated));
    let invoices = px.invoices.list(agency, Some(jane.id)).await.unwrap();
    assert_eq!(invoices.len(), 1);
    let invoice = &invoices[0];
    assert_eq!(reply.invoice_id, Some(invoice.id));
    assert_eq!(invoice.total, 500.0);
    assert_eq!(invoice.status.as_str(), "draft");
    assert_eq!(invoice.notes.as_deref(), Some("Paris trip deposit"));

    // INV-<epoch_ms>-<0..=999>
    let mut parts = invoice.invoice_number.splitn(3, '-');
    assert_eq!(parts.next(), Some("INV"));
    assert!(parts.next().unwrap().chars().all(|c| c.is_ascii_digit()));
    let suffix = parts.next().unwrap();
    assert!((1..=3).contains(&suffix.len()));
    assert!(suffix.chars().all(|c| c.is_ascii_digit()));

    // Default payment terms: about a week out.
    let due = invoice.due_date.expect("default due date");
    let days_out = (due - before).num_days();
    assert!((6..=7).contains(&days_out));
}

#[tokio::test]
async fn general_chat_answers_without_side_effects() {
    let gateway = MockModelGateway::new()
        .with_reply(r#"{"intent": "general", "client_name": null, "destination": null, "duration": null, "dates": null}"#)
        .with_reply("I can create itineraries and invoices for your clients, or just chat.");
    let px = pipeline(gateway);

    let agency = AgencyId::new();
    let reply = px
        .handler
        .handle(command(agency, UserId::new(), "hello, what can you do?"))
        .await
        .unwrap();

    assert!(reply.action.is_none());
    assert!(reply.itinerary_id.is_none());
    assert!(reply.invoice_id.is_none());
    assert!(reply.response.contains("itineraries"));
    assert!(px.itineraries.is_empty().await);
    assert!(px.invoices.is_empty().await);

    // The exchange still lands in the audit log.
    let entries = px.log.entries().await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].user_message, "hello, what can you do?");
}

#[tokio::test]
async fn edit_request_updates_stored_plan() {
    let classification = r#"{"intent": "edit_itinerary", "edit_instruction": "add a dinner on day 2"}"#;
    let edited = serde_json::json!({
        "content": "Welcome to Paris!",
        "detailedPlan": {
            "destination": "Paris",
            "dailyPlan": [
                {"day": 1, "title": "Arrive"},
                {"day": 2, "title": "Museums", "meals": {"dinner": "Le Procope"}}
            ]
        }
    })
    .to_string();
    let gateway = MockModelGateway::new()
        .with_reply(classification)
        .with_reply(edited);
    let px = pipeline(gateway);

    let agency = AgencyId::new();
    let plan: ItineraryPlan = serde_json::from_str(&paris_plan()).unwrap();
    let stored = Itinerary::from_plan(agency, None, UserId::new(), "Paris", 5, &plan, Utc::now());
    px.itineraries.insert(&stored).await.unwrap();

    let reply = px
        .handler
        .handle(command(agency, UserId::new(), "Add a dinner on day 2"))
        .await
        .unwrap();

    assert_eq!(reply.action, Some(ChatAction::ItineraryUpdated));
    assert_eq!(reply.itinerary_id, Some(stored.id));

    let reloaded = px
        .itineraries
        .find_by_id(agency, stored.id)
        .await
        .unwrap()
        .unwrap();
    assert!(reloaded.ai_generated_json.to_string().contains("Le Procope"));
}

#[tokio::test]
async fn unparseable_classification_falls_back_to_chat() {
    let gateway = MockModelGateway::new()
        .with_reply("I think you want a trip somewhere?")
        .with_reply("Happy to help - tell me the client, destination, and duration.");
    let px = pipeline(gateway);

    let reply = px
        .handler
        .handle(command(AgencyId::new(), UserId::new(), "do the thing"))
        .await
        .unwrap();

    // Degraded to general chat: no action, both model calls made.
    assert!(reply.action.is_none());
    assert_eq!(px.gateway.call_count(), 2);
    assert!(px.itineraries.is_empty().await);
}
