//! Trip summary rendering for the confirmation step.
//!
//! Uses Handlebars with HTML escaping disabled; the output is plain text.

use crate::draft::ItineraryDraft;
use crate::WizardError;
use handlebars::Handlebars;
use serde::Serialize;

const SUMMARY_TEMPLATE_NAME: &str = "trip_summary";

/// Default confirmation text
pub const DEFAULT_SUMMARY_TEMPLATE: &str = "Congratulations!
Your trip to {{destination}} has been customized successfully.

Trip Summary:
- Destination: {{destination}}
- Duration: {{duration}}
- Travelers: {{travelers}}
- Accommodation: {{accommodation}}

A travel expert will contact you shortly with a detailed itinerary.";

/// Shown for a selection the visitor skipped
pub const NOT_SELECTED: &str = "Not selected";

/// Read-only view of a draft for the confirmation step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSummary {
    pub destination: String,
    pub duration: String,
    pub travelers: String,
    pub accommodation: String,
}

impl TripSummary {
    pub fn from_draft(draft: &ItineraryDraft) -> Self {
        Self {
            destination: draft.destination.to_string(),
            duration: draft
                .duration
                .map(|d| d.label())
                .unwrap_or_else(|| NOT_SELECTED.to_string()),
            travelers: draft
                .traveler_type
                .map(|t| t.id().to_string())
                .unwrap_or_else(|| NOT_SELECTED.to_string()),
            accommodation: draft.rooms.describe(),
        }
    }
}

pub struct SummaryRenderer {
    handlebars: Handlebars<'static>,
}

impl SummaryRenderer {
    /// Renderer for `DEFAULT_SUMMARY_TEMPLATE`
    pub fn new() -> Result<Self, WizardError> {
        Self::with_template(DEFAULT_SUMMARY_TEMPLATE)
    }

    /// Use a custom summary template
    pub fn with_template(template: &str) -> Result<Self, WizardError> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars
            .register_template_string(SUMMARY_TEMPLATE_NAME, template)
            .map_err(|e| WizardError::Render(e.to_string()))?;
        Ok(Self { handlebars })
    }

    pub fn render(&self, summary: &TripSummary) -> Result<String, WizardError> {
        self.handlebars
            .render(SUMMARY_TEMPLATE_NAME, summary)
            .map_err(|e| WizardError::Render(e.to_string()))
    }
}
