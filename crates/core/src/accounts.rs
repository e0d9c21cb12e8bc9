//! Account-level rules: institutional email domains and self-service
//! signup roles.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;
use crate::roles::Role;

/// `local@host` with no whitespace and exactly one `@`.
static EMAIL_SHAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("valid regex"));

/// Email domain required of students and faculty unless configured otherwise.
pub const DEFAULT_INSTITUTION_DOMAIN: &str = "mahindrauniversity.edu.in";

/// Validate an email address for a user with the given role.
///
/// Every address must have the `local@host` shape. Students and faculty
/// must additionally use the institution's domain; admins may use any.
pub fn validate_email(email: &str, role: Role, institution_domain: &str) -> Result<(), CoreError> {
    if !EMAIL_SHAPE_RE.is_match(email) {
        return Err(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        )));
    }

    if role == Role::Admin {
        return Ok(());
    }

    let institutional = Regex::new(&format!("^.+@{}$", regex::escape(institution_domain)))
        .map_err(|e| CoreError::Internal(format!("institution email pattern: {e}")))?;
    if !institutional.is_match(email) {
        return Err(CoreError::Validation(format!(
            "'{email}' is not a valid {institution_domain} email. \
             Only admin accounts may use another domain"
        )));
    }
    Ok(())
}

/// Roles a visitor may pick for themselves at signup.
///
/// Admin accounts are only created by an existing admin or the
/// `create-admin` binary.
pub fn validate_signup_role(role: Role) -> Result<(), CoreError> {
    match role {
        Role::Student | Role::Faculty => Ok(()),
        Role::Admin => Err(CoreError::Forbidden(
            "Admin accounts cannot be created through signup".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    const DOMAIN: &str = DEFAULT_INSTITUTION_DOMAIN;

    #[test]
    fn institutional_address_is_accepted_for_students_and_faculty() {
        let email = "asha.rao@mahindrauniversity.edu.in";
        assert!(validate_email(email, Role::Student, DOMAIN).is_ok());
        assert!(validate_email(email, Role::Faculty, DOMAIN).is_ok());
    }

    #[test]
    fn foreign_domain_is_rejected_for_non_admins() {
        let result = validate_email("asha@gmail.com", Role::Student, DOMAIN);
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.contains(DOMAIN));
        assert_matches!(
            validate_email("asha@gmail.com", Role::Faculty, DOMAIN),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn lookalike_domains_are_rejected() {
        // The dots in the domain must not act as wildcards.
        assert_matches!(
            validate_email("asha@mahindrauniversityXedu.in", Role::Student, DOMAIN),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            validate_email("asha@mahindrauniversity.edu.in.evil.com", Role::Student, DOMAIN),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn shape_pattern_is_shared_across_calls() {
        assert!(EMAIL_SHAPE_RE.is_match("a@b"));
        assert!(!EMAIL_SHAPE_RE.is_match("a@b@c"));
        for _ in 0..3 {
            assert!(validate_email("root@example.org", Role::Admin, DOMAIN).is_ok());
        }
    }

    #[test]
    fn admins_may_use_any_domain() {
        assert!(validate_email("root@example.org", Role::Admin, DOMAIN).is_ok());
    }

    #[test]
    fn malformed_addresses_are_rejected_for_everyone() {
        for bad in ["", "no-at-sign", "two@@signs.com", "space in@x.com", "@x.com"] {
            assert_matches!(validate_email(bad, Role::Admin, DOMAIN), Err(CoreError::Validation(_)));
        }
    }

    #[test]
    fn custom_domain_is_honoured() {
        assert!(validate_email("a@cs.example.edu", Role::Student, "cs.example.edu").is_ok());
        assert!(validate_email("a@mahindrauniversity.edu.in", Role::Student, "cs.example.edu").is_err());
    }

    #[test]
    fn signup_allows_students_and_faculty_only() {
        assert!(validate_signup_role(Role::Student).is_ok());
        assert!(validate_signup_role(Role::Faculty).is_ok());
        assert_matches!(validate_signup_role(Role::Admin), Err(CoreError::Forbidden(_)));
    }
}
