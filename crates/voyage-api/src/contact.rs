//! Get-in-touch requests: the hand-off from a configured trip to a travel expert.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const NAME_MIN_CHARS: usize = 2;
pub const PHONE_MIN_CHARS: usize = 10;

pub const CONTACT_CONFIRMATION: &str =
    "Thank you for contacting us! One of our travel experts will reach out to you shortly.";

static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Budget brackets offered on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BudgetRange {
    #[serde(rename = "50000-100000")]
    From50kTo1Lakh,
    #[serde(rename = "100000-200000")]
    From1To2Lakhs,
    #[serde(rename = "200000-300000")]
    From2To3Lakhs,
    #[serde(rename = "300000+")]
    Over3Lakhs,
}

impl BudgetRange {
    pub const ALL: [BudgetRange; 4] = [
        Self::From50kTo1Lakh,
        Self::From1To2Lakhs,
        Self::From2To3Lakhs,
        Self::Over3Lakhs,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            Self::From50kTo1Lakh => "50000-100000",
            Self::From1To2Lakhs => "100000-200000",
            Self::From2To3Lakhs => "200000-300000",
            Self::Over3Lakhs => "300000+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::From50kTo1Lakh => "50,000 - 1 Lakh",
            Self::From1To2Lakhs => "1 Lakh - 2 Lakhs",
            Self::From2To3Lakhs => "2 Lakhs - 3 Lakhs",
            Self::Over3Lakhs => "3 Lakhs+",
        }
    }
}

impl FromStr for BudgetRange {
    type Err = ContactFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.value() == s)
            .ok_or_else(|| ContactFieldError::UnknownBudget(s.to_string()))
    }
}

impl fmt::Display for BudgetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One rejected form field
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactFieldError {
    #[error("Name must be at least 2 characters.")]
    NameTooShort,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Please enter a valid phone number.")]
    InvalidPhone,

    #[error("Please select your budget range.")]
    MissingBudget,

    #[error("Unknown budget range: {0}")]
    UnknownBudget(String),
}

impl ContactFieldError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::NameTooShort => "name",
            Self::InvalidEmail => "email",
            Self::InvalidPhone => "phone",
            Self::MissingBudget | Self::UnknownBudget(_) => "budget",
        }
    }
}

/// Raw form submission; every field may be missing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub budget: Option<String>,
}

/// A submission that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLead {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub budget: BudgetRange,
}

impl ContactRequest {
    /// Checks every field, reporting all failures at once
    pub fn validate(&self) -> Result<ContactLead, Vec<ContactFieldError>> {
        let mut errors = Vec::new();

        if self.name.chars().count() < NAME_MIN_CHARS {
            errors.push(ContactFieldError::NameTooShort);
        }
        if !EMAIL.is_match(&self.email) {
            errors.push(ContactFieldError::InvalidEmail);
        }
        if self.phone.chars().count() < PHONE_MIN_CHARS {
            errors.push(ContactFieldError::InvalidPhone);
        }
        let budget = match self.budget.as_deref() {
            None | Some("") => {
                errors.push(ContactFieldError::MissingBudget);
                None
            }
            Some(raw) => match raw.parse::<BudgetRange>() {
                Ok(budget) => Some(budget),
                Err(err) => {
                    errors.push(err);
                    None
                }
            },
        };

        match budget {
            Some(budget) if errors.is_empty() => Ok(ContactLead {
                name: self.name.clone(),
                email: self.email.clone(),
                phone: self.phone.clone(),
                budget,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ContactRequest {
        ContactRequest {
            name: "Asha Verma".to_string(),
            email: "asha@example.com".to_string(),
            phone: "+918765180699".to_string(),
            budget: Some("100000-200000".to_string()),
        }
    }

    #[test]
    fn test_valid_request() {
        let lead = request().validate().unwrap();
        assert_eq!(lead.budget, BudgetRange::From1To2Lakhs);
        assert_eq!(lead.budget.label(), "1 Lakh - 2 Lakhs");
    }

    #[test]
    fn test_empty_request_reports_every_field() {
        let errors = ContactRequest::default().validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field()).collect();
        assert_eq!(fields, vec!["name", "email", "phone", "budget"]);
        assert_eq!(errors[3], ContactFieldError::MissingBudget);
    }

    #[test]
    fn test_field_bounds() {
        let mut req = request();
        req.name = "A".to_string();
        req.phone = "123456789".to_string();
        let errors = req.validate().unwrap_err();
        assert_eq!(errors, vec![ContactFieldError::NameTooShort, ContactFieldError::InvalidPhone]);

        req.name = "Al".to_string();
        req.phone = "1234567890".to_string();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_email_shape() {
        for bad in ["", "asha", "asha@", "asha@example", "a sha@example.com"] {
            let mut req = request();
            req.email = bad.to_string();
            assert_eq!(req.validate().unwrap_err(), vec![ContactFieldError::InvalidEmail], "{}", bad);
        }
    }

    #[test]
    fn test_unknown_budget() {
        let mut req = request();
        req.budget = Some("priceless".to_string());
        assert_eq!(
            req.validate().unwrap_err(),
            vec![ContactFieldError::UnknownBudget("priceless".to_string())]
        );
    }

    #[test]
    fn test_budget_serializes_as_form_value() {
        assert_eq!(serde_json::to_value(BudgetRange::Over3Lakhs).unwrap(), "300000+");
    }
}
