//! Application lifecycle rules.
//!
//! The lifecycle manager in the API crate loads an application and its
//! project inside a transaction, asks these functions for a decision and
//! then persists exactly what they return. Keeping the decisions here
//! means every rule can be exercised without a database.

use crate::access::{self, Principal};
use crate::application::{ApplicationStatus, TransitionPolicy};
use crate::error::CoreError;
use crate::project::clean_list;
use crate::roles::Role;
use crate::types::DbId;

/// Outcome of a permitted status transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionPlan {
    pub from: ApplicationStatus,
    pub to: ApplicationStatus,
    /// The applicant's name must be added to the project's member list.
    pub adds_member: bool,
}

/// Only the owning faculty member or an admin may move an application.
pub fn authorize_transition(principal: &Principal, faculty_id: DbId) -> Result<(), CoreError> {
    access::require(
        access::can_transition_application(principal, faculty_id),
        "Not authorized to update this application",
    )
}

/// Decide whether `current -> requested` may happen.
///
/// When the caller supplies `expected_version` it must match the stored
/// version, otherwise another writer got there first and the request is a
/// [`CoreError::Conflict`]. Without it the later write simply wins.
pub fn plan_transition(
    current: ApplicationStatus,
    requested: ApplicationStatus,
    policy: &TransitionPolicy,
    current_version: i32,
    expected_version: Option<i32>,
) -> Result<TransitionPlan, CoreError> {
    if let Some(expected) = expected_version {
        if expected != current_version {
            return Err(CoreError::Conflict(format!(
                "Application was modified concurrently (expected version {expected}, \
                 found {current_version})"
            )));
        }
    }

    if !policy.allows(current, requested) {
        return Err(CoreError::InvalidState(format!(
            "Cannot move application from '{current}' to '{requested}'"
        )));
    }

    Ok(TransitionPlan {
        from: current,
        to: requested,
        adds_member: requested == ApplicationStatus::Selected,
    })
}

/// Check a withdrawal request. Ownership is checked before state so a
/// stranger learns nothing about the application's status.
pub fn check_withdrawal(
    principal: &Principal,
    application_student_id: DbId,
    status: ApplicationStatus,
) -> Result<(), CoreError> {
    access::require(
        access::can_withdraw(principal, application_student_id),
        "Not authorized to withdraw this application",
    )?;

    if !status.is_withdrawable() {
        return Err(CoreError::InvalidState(format!(
            "Cannot withdraw application with status '{status}'"
        )));
    }
    Ok(())
}

/// Students only ever apply on their own behalf.
pub fn check_submission(principal: &Principal, student_id: DbId) -> Result<(), CoreError> {
    access::require(
        principal.id == student_id,
        "Not authorized to submit application for another student",
    )
}

/// A submission must name both the project and its owning faculty.
pub fn require_target(
    project_id: Option<DbId>,
    faculty_id: Option<DbId>,
) -> Result<(DbId, DbId), CoreError> {
    match (project_id, faculty_id) {
        (Some(project_id), Some(faculty_id)) => Ok((project_id, faculty_id)),
        _ => Err(CoreError::Validation(
            "Project ID and Faculty ID are required".into(),
        )),
    }
}

/// The referenced applicant must hold the student role.
pub fn ensure_student(user_id: DbId, role: Role) -> Result<(), CoreError> {
    if role != Role::Student {
        return Err(CoreError::Validation(format!(
            "User {user_id} is a {role}, only students may apply to projects"
        )));
    }
    Ok(())
}

/// At most one application per (student, project).
pub fn ensure_not_already_applied(
    already_applied: bool,
    student_id: DbId,
    project_id: DbId,
) -> Result<(), CoreError> {
    if already_applied {
        return Err(CoreError::DuplicateApplication {
            student_id,
            project_id,
        });
    }
    Ok(())
}

/// Applicant details copied into an application when it is submitted.
///
/// The copy is never refreshed: a student who later changes their name
/// keeps the old name on every historical application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicantSnapshot {
    pub name: String,
    pub email: String,
    pub program: Option<String>,
    pub skills: Vec<String>,
}

impl ApplicantSnapshot {
    pub fn capture(
        name: &str,
        email: &str,
        program: Option<String>,
        skills: Option<Vec<String>>,
    ) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            program: program
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
            skills: clean_list(skills.unwrap_or_default()),
        }
    }
}
