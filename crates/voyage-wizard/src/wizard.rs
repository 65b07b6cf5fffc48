//! Itinerary wizard state machine.
//!
//! ```text
//! Duration ⇄ Travelers ⇄ Rooms ⇄ Confirmation ──finish──► exit(Finished)
//!    │
//!    └──back──► exit(Abandoned)
//! ```
//!
//! Each step owns one field group of the draft. Navigating back and forth
//! never resets a field; the draft lives until the host drops the wizard
//! after an exit.

use crate::draft::{Adjustment, ItineraryDraft, RoomField, TravelerType, TripDuration};
use crate::step::{Step, WizardPolicy};
use crate::summary::{SummaryRenderer, TripSummary};
use crate::WizardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use voyage_core::DestinationName;

/// Why the wizard handed control back to its host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitReason {
    /// `back` from the first step
    Abandoned,
    /// `finish` from the confirmation step
    Finished,
}

/// Result of a wizard action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Navigation {
    Moved { from: Step, to: Step },
    Stayed { step: Step },
    Blocked { step: Step, reason: String },
    Exited { reason: ExitReason },
}

impl Navigation {
    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exited { .. })
    }
}

/// Actions a host can forward to the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WizardAction {
    Next,
    Back,
    Finish,
    SelectDuration { days: u32 },
    SelectTravelers { traveler: TravelerType },
    AdjustRooms { field: RoomField, adjustment: Adjustment },
}

/// Host callback invoked on exit
pub type ExitHandler = Box<dyn FnMut(ExitReason, &ItineraryDraft) + Send>;

pub struct ItineraryWizard {
    draft: ItineraryDraft,
    step: Step,
    policy: WizardPolicy,
    on_exit: Option<ExitHandler>,
}

impl fmt::Debug for ItineraryWizard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItineraryWizard")
            .field("draft", &self.draft)
            .field("step", &self.step)
            .field("policy", &self.policy)
            .field("on_exit", &self.on_exit.is_some())
            .finish()
    }
}

impl ItineraryWizard {
    pub fn new(destination: DestinationName) -> Self {
        Self::with_policy(destination, WizardPolicy::permissive())
    }

    pub fn with_policy(destination: DestinationName, policy: WizardPolicy) -> Self {
        tracing::debug!(destination = %destination, "wizard started");
        Self {
            draft: ItineraryDraft::new(destination),
            step: Step::Duration,
            policy,
            on_exit: None,
        }
    }

    /// Register the host's exit collaborator
    pub fn on_exit<F>(mut self, handler: F) -> Self
    where
        F: FnMut(ExitReason, &ItineraryDraft) + Send + 'static,
    {
        self.on_exit = Some(Box::new(handler));
        self
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn step_index(&self) -> usize {
        self.step.index()
    }

    pub fn draft(&self) -> &ItineraryDraft {
        &self.draft
    }

    pub fn policy(&self) -> &WizardPolicy {
        &self.policy
    }

    pub fn next(&mut self) -> Navigation {
        let from = self.step;
        if from.is_last() {
            return Navigation::Stayed { step: from };
        }
        if !self.policy.allows_next(from, &self.draft) {
            return Navigation::Blocked {
                step: from,
                reason: format!("{} requires a selection", from.title()),
            };
        }

        match Step::from_index(from.index() + 1) {
            Some(to) => {
                self.step = to;
                Navigation::Moved { from, to }
            }
            None => Navigation::Stayed { step: from },
        }
    }

    pub fn back(&mut self) -> Navigation {
        let from = self.step;
        if from.is_first() {
            return self.exit(ExitReason::Abandoned);
        }

        match from.index().checked_sub(1).and_then(Step::from_index) {
            Some(to) => {
                self.step = to;
                Navigation::Moved { from, to }
            }
            None => Navigation::Stayed { step: from },
        }
    }

    /// Leave the flow from the confirmation step
    pub fn finish(&mut self) -> Result<Navigation, WizardError> {
        self.require_step(Step::Confirmation)?;
        Ok(self.exit(ExitReason::Finished))
    }

    pub fn select_duration(&mut self, duration: TripDuration) -> Result<(), WizardError> {
        self.require_step(Step::Duration)?;
        self.draft.duration = Some(duration);
        Ok(())
    }

    pub fn select_travelers(&mut self, traveler: TravelerType) -> Result<(), WizardError> {
        self.require_step(Step::Travelers)?;
        self.draft.traveler_type = Some(traveler);
        Ok(())
    }

    /// Step a room counter; returns the clamped value
    pub fn adjust_rooms(&mut self, field: RoomField, adjustment: Adjustment) -> Result<u32, WizardError> {
        self.require_step(Step::Rooms)?;
        Ok(self.draft.rooms.adjust(field, adjustment))
    }

    pub fn apply(&mut self, action: WizardAction) -> Result<Navigation, WizardError> {
        match action {
            WizardAction::Next => Ok(self.next()),
            WizardAction::Back => Ok(self.back()),
            WizardAction::Finish => self.finish(),
            WizardAction::SelectDuration { days } => {
                self.select_duration(TripDuration::try_from(days)?)?;
                Ok(Navigation::Stayed { step: self.step })
            }
            WizardAction::SelectTravelers { traveler } => {
                self.select_travelers(traveler)?;
                Ok(Navigation::Stayed { step: self.step })
            }
            WizardAction::AdjustRooms { field, adjustment } => {
                self.adjust_rooms(field, adjustment)?;
                Ok(Navigation::Stayed { step: self.step })
            }
        }
    }

    /// Indicator dots: reached steps are `true`
    pub fn progress(&self) -> Vec<bool> {
        Step::ALL.iter().map(|s| s.index() <= self.step.index()).collect()
    }

    /// Summary of the draft; available on the confirmation step only
    pub fn summary(&self) -> Option<TripSummary> {
        (self.step == Step::Confirmation).then(|| TripSummary::from_draft(&self.draft))
    }

    pub fn snapshot(&self, renderer: &SummaryRenderer) -> Result<WizardSnapshot, WizardError> {
        let summary_text = match self.summary() {
            Some(summary) => Some(renderer.render(&summary)?),
            None => None,
        };

        Ok(WizardSnapshot {
            step: self.step,
            step_index: self.step.index(),
            step_count: Step::ALL.len(),
            title: self.step.title(),
            description: self.step.description(),
            progress: self.progress(),
            can_finish: self.step.is_last(),
            draft: self.draft.clone(),
            summary: self.summary(),
            summary_text,
        })
    }

    fn require_step(&self, expected: Step) -> Result<(), WizardError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(WizardError::NotOnStep {
                expected,
                actual: self.step,
            })
        }
    }

    fn exit(&mut self, reason: ExitReason) -> Navigation {
        tracing::debug!(?reason, destination = %self.draft.destination, "wizard exit");
        if let Some(handler) = self.on_exit.as_mut() {
            handler(reason, &self.draft);
        }
        Navigation::Exited { reason }
    }
}

/// Serializable view of the wizard for a host UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardSnapshot {
    pub step: Step,
    pub step_index: usize,
    pub step_count: usize,
    pub title: &'static str,
    pub description: &'static str,
    /// Indicator dots: reached steps are `true`
    pub progress: Vec<bool>,
    pub can_finish: bool,
    pub draft: ItineraryDraft,
    pub summary: Option<TripSummary>,
    pub summary_text: Option<String>,
}
