//! Contact submission domain entity
//!
//! A submission exists only for the duration of one form flow; nothing is
//! persisted locally. Validation is field-scoped and never thrown.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Required fields; an invalid value in one of these blocks submission.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "email", "project", "message"];

const MIN_NAME_LEN: usize = 2;
const MIN_MESSAGE_LEN: usize = 10;

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    // Basic shape check, not full RFC 5322
    EMAIL_REGEX
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

/// Project type offered on the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    CustomWebsite,
    EcommerceStore,
    WebApplication,
    SiteRedesign,
    Maintenance,
    Other,
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectType::CustomWebsite => write!(f, "Custom Website"),
            ProjectType::EcommerceStore => write!(f, "E-commerce Store"),
            ProjectType::WebApplication => write!(f, "Web Application"),
            ProjectType::SiteRedesign => write!(f, "Site Redesign"),
            ProjectType::Maintenance => write!(f, "Maintenance"),
            ProjectType::Other => write!(f, "Other"),
        }
    }
}

impl std::str::FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "custom website" | "custom-website" => Ok(ProjectType::CustomWebsite),
            "e-commerce store" | "ecommerce-store" | "ecommerce" => Ok(ProjectType::EcommerceStore),
            "web application" | "web-application" => Ok(ProjectType::WebApplication),
            "site redesign" | "site-redesign" => Ok(ProjectType::SiteRedesign),
            "maintenance" => Ok(ProjectType::Maintenance),
            "other" => Ok(ProjectType::Other),
            _ => Err(format!("Unknown project type: {}", s)),
        }
    }
}

/// Budget band, denominated in the calculator's rupee base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetRange {
    Under50k,
    From50kTo150k,
    From150kTo500k,
    Above500k,
}

impl std::fmt::Display for BudgetRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BudgetRange::Under50k => write!(f, "under-50k"),
            BudgetRange::From50kTo150k => write!(f, "50k-150k"),
            BudgetRange::From150kTo500k => write!(f, "150k-500k"),
            BudgetRange::Above500k => write!(f, "above-500k"),
        }
    }
}

impl std::str::FromStr for BudgetRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "under-50k" => Ok(BudgetRange::Under50k),
            "50k-150k" => Ok(BudgetRange::From50kTo150k),
            "150k-500k" => Ok(BudgetRange::From150kTo500k),
            "above-500k" => Ok(BudgetRange::Above500k),
            _ => Err(format!("Unknown budget range: {}", s)),
        }
    }
}

/// One contact form submission. Ephemeral.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub project: String,
    pub budget: Option<String>,
    pub message: String,
}

/// A field-scoped validation error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl ContactSubmission {
    /// Validate one field by name. Returns `None` for unknown fields and for
    /// empty optional fields.
    pub fn validate_field(&self, field: &str) -> Option<FieldError> {
        match field {
            "name" => {
                if self.name.trim().chars().count() < MIN_NAME_LEN {
                    Some(FieldError::new("name", "Name must be at least 2 characters"))
                } else {
                    None
                }
            }
            "email" => {
                if !email_regex().is_match(self.email.trim()) {
                    Some(FieldError::new("email", "Enter a valid email address"))
                } else {
                    None
                }
            }
            "project" => match self.project.parse::<ProjectType>() {
                Ok(_) => None,
                Err(_) => Some(FieldError::new("project", "Select a project type")),
            },
            "budget" => match self.budget.as_deref() {
                None | Some("") => None,
                Some(b) => match b.parse::<BudgetRange>() {
                    Ok(_) => None,
                    Err(_) => Some(FieldError::new("budget", "Select a budget range")),
                },
            },
            "message" => {
                if self.message.trim().chars().count() < MIN_MESSAGE_LEN {
                    Some(FieldError::new(
                        "message",
                        "Message must be at least 10 characters",
                    ))
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Validate every required field plus the optional budget.
    /// An empty result means the submission may be sent.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors: Vec<FieldError> = REQUIRED_FIELDS
            .iter()
            .filter_map(|f| self.validate_field(f))
            .collect();
        if let Some(err) = self.validate_field("budget") {
            errors.push(err);
        }
        errors
    }

    /// Parsed project type; only valid after `validate` passes
    pub fn project_type(&self) -> Option<ProjectType> {
        self.project.parse().ok()
    }

    /// Parsed budget range, if one was given
    pub fn budget_range(&self) -> Option<BudgetRange> {
        self.budget.as_deref().and_then(|b| b.parse().ok())
    }
}

/// Phase of the contact form flow.
///
/// `Idle → Validating → Submitting → {Succeeded | Failed}`. Success clears
/// the entered values; failure returns to an editable state that retains
/// them. Transitions outside this order are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormPhase {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

impl FormPhase {
    /// Whether `next` is a legal successor of `self`
    pub fn can_transition_to(self, next: FormPhase) -> bool {
        matches!(
            (self, next),
            (FormPhase::Idle, FormPhase::Validating)
                | (FormPhase::Validating, FormPhase::Submitting)
                | (FormPhase::Validating, FormPhase::Idle)
                | (FormPhase::Submitting, FormPhase::Succeeded)
                | (FormPhase::Submitting, FormPhase::Failed)
                | (FormPhase::Succeeded, FormPhase::Idle)
                | (FormPhase::Failed, FormPhase::Validating)
        )
    }
}
