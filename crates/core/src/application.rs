//! Application status values and the configurable transition policy.
//!
//! The status names must match the `CHECK` constraint on
//! `applications.status` in `20260301000004_create_applications_table.sql`.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const STATUS_APPLIED: &str = "Applied";
pub const STATUS_SHORTLISTED: &str = "Shortlisted";
pub const STATUS_SELECTED: &str = "Selected";
pub const STATUS_REJECTED: &str = "Rejected";

/// All valid application status values, in pipeline order.
pub const VALID_APPLICATION_STATUSES: &[&str] = &[
    STATUS_APPLIED,
    STATUS_SHORTLISTED,
    STATUS_SELECTED,
    STATUS_REJECTED,
];

/// Where an application sits in a project's triage pipeline.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum ApplicationStatus {
    #[default]
    Applied,
    Shortlisted,
    Selected,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 4] = [
        ApplicationStatus::Applied,
        ApplicationStatus::Shortlisted,
        ApplicationStatus::Selected,
        ApplicationStatus::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::Applied => STATUS_APPLIED,
            ApplicationStatus::Shortlisted => STATUS_SHORTLISTED,
            ApplicationStatus::Selected => STATUS_SELECTED,
            ApplicationStatus::Rejected => STATUS_REJECTED,
        }
    }

    /// Only untouched applications may be withdrawn by the student.
    pub fn is_withdrawable(self) -> bool {
        self == ApplicationStatus::Applied
    }

    /// Parse the status carried by a request body. A missing or
    /// non-text value is as invalid as an unknown name.
    pub fn parse_requested(raw: Option<&str>) -> Result<Self, CoreError> {
        match raw {
            Some(value) => value.parse(),
            None => Err(CoreError::Validation(format!(
                "Invalid status value. Must be one of: {}",
                VALID_APPLICATION_STATUSES.join(", ")
            ))),
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ApplicationStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid status value '{s}'. Must be one of: {}",
                    VALID_APPLICATION_STATUSES.join(", ")
                ))
            })
    }
}

impl TryFrom<String> for ApplicationStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ---------------------------------------------------------------------------
// Transition policy
// ---------------------------------------------------------------------------

/// Keyword selecting the unrestricted policy in configuration.
pub const POLICY_UNRESTRICTED: &str = "unrestricted";

/// The set of status changes a transition request may perform.
///
/// `Unrestricted` lets any status move to any other, including
/// `Rejected -> Applied`. `Restricted` only allows the listed
/// `(from, to)` pairs. Re-applying the current status is always allowed
/// under either policy since it changes nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TransitionPolicy {
    #[default]
    Unrestricted,
    Restricted(BTreeSet<(ApplicationStatus, ApplicationStatus)>),
}

impl TransitionPolicy {
    pub fn restricted(
        pairs: impl IntoIterator<Item = (ApplicationStatus, ApplicationStatus)>,
    ) -> Self {
        TransitionPolicy::Restricted(pairs.into_iter().collect())
    }

    pub fn allows(&self, from: ApplicationStatus, to: ApplicationStatus) -> bool {
        if from == to {
            return true;
        }
        match self {
            TransitionPolicy::Unrestricted => true,
            TransitionPolicy::Restricted(pairs) => pairs.contains(&(from, to)),
        }
    }

    /// Parse a policy from its configuration form.
    ///
    /// Accepts `unrestricted` (case-insensitive) or a comma-separated list
    /// of `From>To` pairs, e.g. `Applied>Shortlisted, Shortlisted>Selected`.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case(POLICY_UNRESTRICTED) {
            return Ok(TransitionPolicy::Unrestricted);
        }

        let mut pairs = BTreeSet::new();
        for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (from, to) = entry.split_once('>').ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid transition '{entry}'. Expected the form From>To"
                ))
            })?;
            pairs.insert((from.trim().parse()?, to.trim().parse()?));
        }

        if pairs.is_empty() {
            return Err(CoreError::Validation(
                "Transition policy must be 'unrestricted' or list at least one From>To pair"
                    .into(),
            ));
        }
        Ok(TransitionPolicy::Restricted(pairs))
    }
}
