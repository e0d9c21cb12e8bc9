//! Project status values and field validation.
//!
//! Status names must match the `CHECK` constraint on `projects.status`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const PROJECT_STATUS_PLANNING: &str = "Planning";
pub const PROJECT_STATUS_IN_PROGRESS: &str = "In Progress";
pub const PROJECT_STATUS_COMPLETED: &str = "Completed";

pub const VALID_PROJECT_STATUSES: &[&str] = &[
    PROJECT_STATUS_PLANNING,
    PROJECT_STATUS_IN_PROGRESS,
    PROJECT_STATUS_COMPLETED,
];

/// Seats offered when a project is created without an explicit count.
pub const DEFAULT_SEATS_REQUIRED: i32 = 1;

/// Project lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[default]
    Planning,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Planning => PROJECT_STATUS_PLANNING,
            ProjectStatus::InProgress => PROJECT_STATUS_IN_PROGRESS,
            ProjectStatus::Completed => PROJECT_STATUS_COMPLETED,
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            PROJECT_STATUS_PLANNING => Ok(ProjectStatus::Planning),
            PROJECT_STATUS_IN_PROGRESS => Ok(ProjectStatus::InProgress),
            PROJECT_STATUS_COMPLETED => Ok(ProjectStatus::Completed),
            other => Err(CoreError::Validation(format!(
                "Invalid project status '{other}'. Must be one of: {}",
                VALID_PROJECT_STATUSES.join(", ")
            ))),
        }
    }
}

impl TryFrom<String> for ProjectStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Reject a missing or whitespace-only required text field.
pub fn validate_required_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// A project must offer at least one seat.
pub fn validate_seats_required(seats: i32) -> Result<(), CoreError> {
    if seats < 1 {
        return Err(CoreError::Validation(format!(
            "seats_required must be at least 1, got {seats}"
        )));
    }
    Ok(())
}

/// Trim every entry of a free-text list and drop the blank ones.
pub fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parses_status_names_including_the_spaced_one() {
        assert_eq!("Planning".parse::<ProjectStatus>().unwrap(), ProjectStatus::Planning);
        assert_eq!("In Progress".parse::<ProjectStatus>().unwrap(), ProjectStatus::InProgress);
        assert_eq!("Completed".parse::<ProjectStatus>().unwrap(), ProjectStatus::Completed);
        assert_matches!("InProgress".parse::<ProjectStatus>(), Err(CoreError::Validation(_)));
        assert_matches!("Open".parse::<ProjectStatus>(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn serde_uses_display_names() {
        let json = serde_json::to_string(&ProjectStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
        let parsed: ProjectStatus = serde_json::from_str("\"Completed\"").unwrap();
        assert_eq!(parsed, ProjectStatus::Completed);
    }

    #[test]
    fn default_status_is_planning() {
        assert_eq!(ProjectStatus::default(), ProjectStatus::Planning);
    }

    #[test]
    fn required_text_rejects_blank() {
        assert!(validate_required_text("title", "Graph mining").is_ok());
        assert_matches!(
            validate_required_text("title", "   "),
            Err(CoreError::Validation(msg)) if msg == "title is required"
        );
    }

    #[test]
    fn seats_must_be_positive() {
        assert!(validate_seats_required(DEFAULT_SEATS_REQUIRED).is_ok());
        assert!(validate_seats_required(4).is_ok());
        assert_matches!(validate_seats_required(0), Err(CoreError::Validation(_)));
        assert_matches!(validate_seats_required(-2), Err(CoreError::Validation(_)));
    }

    #[test]
    fn clean_list_trims_and_drops_blanks() {
        let cleaned = clean_list(vec![
            " Rust ".to_string(),
            String::new(),
            "SQL".to_string(),
            "  ".to_string(),
        ]);
        assert_eq!(cleaned, vec!["Rust".to_string(), "SQL".to_string()]);
    }
}
