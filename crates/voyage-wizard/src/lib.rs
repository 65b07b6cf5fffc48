//! Voyage Wizard: itinerary configuration
//!
//! A linear, four-step wizard that accumulates trip preferences for a picked
//! destination and ends on a read-only summary.
//!
//! # Example
//!
//! ```ignore
//! use voyage_wizard::{ItineraryWizard, TripDuration, TravelerType};
//!
//! let mut wizard = ItineraryWizard::new(destination)
//!     .on_exit(|reason, draft| println!("{:?}: {:?}", reason, draft));
//!
//! wizard.select_duration(TripDuration::Seven)?;
//! wizard.next();
//! wizard.select_travelers(TravelerType::Couple)?;
//! ```

pub mod draft;
pub mod step;
pub mod summary;
pub mod wizard;

pub use draft::{Adjustment, ItineraryDraft, RoomField, RoomOptions, TravelerType, TripDuration};
pub use step::{Step, StepPolicy, WizardPolicy};
pub use summary::{SummaryRenderer, TripSummary};
pub use wizard::{ExitReason, ItineraryWizard, Navigation, WizardAction, WizardSnapshot};

use thiserror::Error;
use voyage_core::VoyageError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("action belongs to the {expected:?} step, wizard is on {actual:?}")]
    NotOnStep { expected: Step, actual: Step },

    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    #[error("summary render failed: {0}")]
    Render(String),
}

impl From<WizardError> for VoyageError {
    fn from(err: WizardError) -> Self {
        VoyageError::WizardError(err.to_string())
    }
}
