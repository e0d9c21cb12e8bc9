//! Access-control guard.
//!
//! Every predicate is pure and total: it never fails, it only answers.
//! Callers turn a `false` into [`CoreError::Forbidden`] via [`require`].

use serde::Serialize;

use crate::error::CoreError;
use crate::roles::Role;
use crate::types::DbId;

/// The authenticated caller attempting an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Principal {
    pub id: DbId,
    pub role: Role,
}

impl Principal {
    pub fn new(id: DbId, role: Role) -> Self {
        Self { id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// The owning faculty member or any admin.
pub fn can_mutate_project(principal: &Principal, project_faculty_id: DbId) -> bool {
    principal.is_admin() || principal.id == project_faculty_id
}

/// Students never hold transition rights, even on their own application.
pub fn can_transition_application(principal: &Principal, project_faculty_id: DbId) -> bool {
    can_mutate_project(principal, project_faculty_id)
}

/// Only the applying student. Admins are deliberately not included.
pub fn can_withdraw(principal: &Principal, application_student_id: DbId) -> bool {
    principal.id == application_student_id
}

pub fn can_view_applications(principal: &Principal, project_faculty_id: DbId) -> bool {
    can_mutate_project(principal, project_faculty_id)
}

/// A student's own application list, or any list for an admin.
pub fn can_view_student_applications(principal: &Principal, student_id: DbId) -> bool {
    principal.is_admin() || principal.id == student_id
}

/// Convert a guard answer into a `Forbidden` error.
pub fn require(allowed: bool, message: &str) -> Result<(), CoreError> {
    if allowed {
        Ok(())
    } else {
        Err(CoreError::Forbidden(message.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    const OWNER: DbId = 10;
    const OTHER_FACULTY: DbId = 11;
    const STUDENT: DbId = 20;

    fn faculty(id: DbId) -> Principal {
        Principal::new(id, Role::Faculty)
    }

    fn student(id: DbId) -> Principal {
        Principal::new(id, Role::Student)
    }

    fn admin() -> Principal {
        Principal::new(1, Role::Admin)
    }

    #[test]
    fn owner_and_admin_may_mutate_project() {
        assert!(can_mutate_project(&faculty(OWNER), OWNER));
        assert!(can_mutate_project(&admin(), OWNER));
        assert!(!can_mutate_project(&faculty(OTHER_FACULTY), OWNER));
        assert!(!can_mutate_project(&student(STUDENT), OWNER));
    }

    #[test]
    fn transition_rights_follow_project_ownership() {
        assert!(can_transition_application(&faculty(OWNER), OWNER));
        assert!(can_transition_application(&admin(), OWNER));
        assert!(!can_transition_application(&faculty(OTHER_FACULTY), OWNER));
        assert!(!can_transition_application(&student(STUDENT), OWNER));
    }

    #[test]
    fn only_the_applicant_may_withdraw() {
        assert!(can_withdraw(&student(STUDENT), STUDENT));
        assert!(!can_withdraw(&student(STUDENT + 1), STUDENT));
        assert!(!can_withdraw(&admin(), STUDENT));
        assert!(!can_withdraw(&faculty(OWNER), STUDENT));
    }

    #[test]
    fn view_rights_match_mutate_rights() {
        for principal in [faculty(OWNER), faculty(OTHER_FACULTY), student(STUDENT), admin()] {
            assert_eq!(
                can_view_applications(&principal, OWNER),
                can_mutate_project(&principal, OWNER)
            );
        }
    }

    #[test]
    fn student_listing_is_self_or_admin() {
        assert!(can_view_student_applications(&student(STUDENT), STUDENT));
        assert!(can_view_student_applications(&admin(), STUDENT));
        assert!(!can_view_student_applications(&student(STUDENT + 1), STUDENT));
        assert!(!can_view_student_applications(&faculty(OWNER), STUDENT));
    }

    #[test]
    fn require_maps_false_to_forbidden() {
        assert!(require(true, "nope").is_ok());
        assert_matches!(require(false, "nope"), Err(CoreError::Forbidden(msg)) if msg == "nope");
    }
}
