//! Generated itinerary plans and the recovery parser for model output.
//!
//! The synthesizer asks the model for a fixed JSON shape, but model output
//! drifts: fenced blocks, leading prose, truncated JSON. Rather than bury
//! recovery in control flow, parsing is a chain of attempts returning a
//! tagged [`PlanOutcome`], so callers (and tests) can tell a clean parse
//! from a degenerate fallback.
//!
//! Chain order:
//! 1. strict JSON parse of the full reply,
//! 2. parse after stripping markdown fences,
//! 3. parse the first `{...}` spanning substring,
//! 4. degenerate single-day plan carrying the start of the raw text.
//!
//! Every path yields a structurally valid plan; only the *call* to the model
//! can fail, and that failure belongs to the gateway, not to this parser.

use serde::{Deserialize, Serialize};

use super::repair::{extract_json_object, first_integer, strip_code_fences};

/// A structured multi-day travel plan as produced by the model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryPlan {
    /// Welcome/summary message shown in chat.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub detailed_plan: DetailedPlan,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// The plan body: trip metadata plus the day-by-day schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedPlan {
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub travelers: Option<u32>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub total_cost: Option<String>,
    /// Flight suggestion; shape is provider-defined, kept opaque.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flights: Option<serde_json::Value>,
    /// Hotel suggestion; shape is provider-defined, kept opaque.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel: Option<serde_json::Value>,
    #[serde(default)]
    pub daily_plan: Vec<DayPlan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<serde_json::Value>,
}

/// One day of the schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    #[serde(default)]
    pub day: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub activities_description: Vec<String>,
    #[serde(default)]
    pub meals: Meals,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport: Option<String>,
}

/// Meal suggestions for a day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meals {
    #[serde(default)]
    pub breakfast: Option<String>,
    #[serde(default)]
    pub lunch: Option<String>,
    #[serde(default)]
    pub dinner: Option<String>,
}

impl ItineraryPlan {
    /// Text summary used as the itinerary's plain content: the welcome
    /// message, falling back to the plan description.
    pub fn summary_text(&self) -> String {
        self.content
            .clone()
            .or_else(|| self.detailed_plan.description.clone())
            .unwrap_or_else(|| "Itinerary created.".to_string())
    }
}

/// How a raw model reply was turned into a plan.
#[derive(Debug, Clone)]
pub enum PlanOutcome {
    /// The reply parsed as the expected JSON shape (possibly after cleanup).
    Parsed(ItineraryPlan),
    /// Nothing parsed; a minimal single-day plan was synthesized from the
    /// raw text so the pipeline still has a structurally valid plan.
    Degenerate(ItineraryPlan),
}

impl PlanOutcome {
    pub fn is_degenerate(&self) -> bool {
        matches!(self, PlanOutcome::Degenerate(_))
    }

    pub fn into_plan(self) -> ItineraryPlan {
        match self {
            PlanOutcome::Parsed(plan) | PlanOutcome::Degenerate(plan) => plan,
        }
    }
}

/// Parses a raw model reply through the recovery chain.
///
/// `destination` and `duration_days` seed the degenerate fallback so it
/// still describes the requested trip.
pub fn parse_plan(raw: &str, destination: &str, duration_days: u32) -> PlanOutcome {
    if let Ok(plan) = serde_json::from_str::<ItineraryPlan>(raw) {
        return PlanOutcome::Parsed(plan);
    }

    let stripped = strip_code_fences(raw);
    if let Ok(plan) = serde_json::from_str::<ItineraryPlan>(&stripped) {
        return PlanOutcome::Parsed(plan);
    }

    if let Some(candidate) = extract_json_object(raw) {
        if let Ok(plan) = serde_json::from_str::<ItineraryPlan>(candidate) {
            return PlanOutcome::Parsed(plan);
        }
    }

    PlanOutcome::Degenerate(degenerate_plan(raw, destination, duration_days))
}

/// Derives a day count from a free-form duration string.
///
/// Takes the first integer substring ("5 days" -> 5); defaults to 1 when no
/// digits are present ("a week" -> 1).
pub fn duration_days(duration: &str) -> u32 {
    first_integer(duration).filter(|d| *d > 0).unwrap_or(1)
}

/// Builds the minimal fallback plan from unparseable model output.
fn degenerate_plan(raw: &str, destination: &str, duration_days: u32) -> ItineraryPlan {
    let excerpt: String = raw.chars().take(200).collect();
    ItineraryPlan {
        content: Some(excerpt.clone()),
        detailed_plan: DetailedPlan {
            destination: destination.to_string(),
            description: Some(excerpt.clone()),
            duration: Some(format!("{} days", duration_days)),
            daily_plan: vec![DayPlan {
                day: 1,
                title: "Day 1".to_string(),
                description: excerpt,
                ..Default::default()
            }],
            ..Default::default()
        },
        suggestions: Vec::new(),
    }
}
