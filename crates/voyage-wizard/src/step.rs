//! Wizard steps, their copy, and per-step gating policy.

use crate::draft::ItineraryDraft;
use serde::{Deserialize, Serialize};
use voyage_core::VoyageError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Duration,
    Travelers,
    Rooms,
    Confirmation,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Duration, Step::Travelers, Step::Rooms, Step::Confirmation];

    pub const LAST_INDEX: usize = Self::ALL.len() - 1;

    pub fn index(&self) -> usize {
        match self {
            Self::Duration => 0,
            Self::Travelers => 1,
            Self::Rooms => 2,
            Self::Confirmation => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Step> {
        Self::ALL.get(index).copied()
    }

    pub fn is_first(&self) -> bool {
        self.index() == 0
    }

    pub fn is_last(&self) -> bool {
        self.index() == Self::LAST_INDEX
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Duration => "Duration",
            Self::Travelers => "Travelers",
            Self::Rooms => "Room Options",
            Self::Confirmation => "Confirmation",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Duration => "How long would you like to stay?",
            Self::Travelers => "Who is traveling with you?",
            Self::Rooms => "Configure your accommodation",
            Self::Confirmation => "Review your trip details",
        }
    }

    /// Whether the draft holds this step's selection
    pub fn is_satisfied(&self, draft: &ItineraryDraft) -> bool {
        match self {
            Self::Duration => draft.duration.is_some(),
            Self::Travelers => draft.traveler_type.is_some(),
            Self::Rooms | Self::Confirmation => true,
        }
    }
}

/// Gating for a single step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepPolicy {
    /// Block `next` until the step's selection is made
    #[serde(default)]
    pub require_selection: bool,
}

/// Gating for every step. The default lets `next` through unconditionally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardPolicy {
    #[serde(default)]
    pub duration: StepPolicy,
    #[serde(default)]
    pub travelers: StepPolicy,
    #[serde(default)]
    pub rooms: StepPolicy,
    #[serde(default)]
    pub confirmation: StepPolicy,
}

impl WizardPolicy {
    /// Permissive: no step requires a selection
    pub fn permissive() -> Self {
        Self::default()
    }

    /// Every step requires its selection before moving on
    pub fn strict() -> Self {
        let required = StepPolicy { require_selection: true };
        Self {
            duration: required,
            travelers: required,
            rooms: required,
            confirmation: required,
        }
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, VoyageError> {
        serde_yaml::from_str(yaml)
            .map_err(|e| VoyageError::ConfigError(format!("invalid wizard policy yaml: {}", e)))
    }

    pub fn load(path: &str) -> Result<Self, VoyageError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            VoyageError::ConfigError(format!("failed to read wizard policy {}: {}", path, e))
        })?;
        let policy = Self::from_yaml(&content)?;
        tracing::info!(path, ?policy, "loaded wizard policy");
        Ok(policy)
    }

    pub fn for_step(&self, step: Step) -> StepPolicy {
        match step {
            Step::Duration => self.duration,
            Step::Travelers => self.travelers,
            Step::Rooms => self.rooms,
            Step::Confirmation => self.confirmation,
        }
    }

    /// Whether `next` may leave `step` with the given draft
    pub fn allows_next(&self, step: Step, draft: &ItineraryDraft) -> bool {
        !self.for_step(step).require_selection || step.is_satisfied(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voyage_core::DestinationName;

    #[test]
    fn test_index_roundtrip() {
        for step in Step::ALL {
            assert_eq!(Step::from_index(step.index()), Some(step));
        }
        assert_eq!(Step::from_index(4), None);
        assert!(Step::Confirmation.is_last());
        assert!(Step::Duration.is_first());
    }

    #[test]
    fn test_policy_from_yaml() {
        let policy = WizardPolicy::from_yaml("duration:\n  require_selection: true\n").unwrap();
        assert!(policy.duration.require_selection);
        assert!(!policy.travelers.require_selection);

        let err = WizardPolicy::from_yaml("duration: nope").unwrap_err();
        assert_eq!(err.code(), "CONFIG");
    }

    #[test]
    fn test_allows_next() {
        let draft = ItineraryDraft::new(DestinationName::new("Bali"));
        assert!(WizardPolicy::permissive().allows_next(Step::Duration, &draft));
        assert!(!WizardPolicy::strict().allows_next(Step::Duration, &draft));
        assert!(WizardPolicy::strict().allows_next(Step::Rooms, &draft));
    }
}
