//! Application lifecycle manager.
//!
//! The only code that creates, moves or deletes applications. Every
//! operation runs in one transaction that first locks the owning project
//! row, so concurrent writers to the same project are serialized and the
//! member-list side effect of a selection cannot be lost.
//!
//! The decisions themselves live in [`portal_core::lifecycle`]; this module
//! loads rows, asks for a decision and persists the outcome.

use portal_core::access::Principal;
use portal_core::application::{ApplicationStatus, TransitionPolicy};
use portal_core::error::CoreError;
use portal_core::lifecycle::{
    authorize_transition, check_submission, check_withdrawal, ensure_not_already_applied,
    ensure_student, plan_transition, require_target, ApplicantSnapshot,
};
use portal_core::roles::Role;
use portal_core::team::insert_member;
use portal_core::types::DbId;
use portal_db::models::application::{
    Application, CreateApplication, StatusUpdate, SubmitApplication, TransitionRequest,
};
use portal_db::models::project::Project;
use portal_db::repositories::application_repo::UNIQUE_PROJECT_STUDENT;
use portal_db::repositories::{ApplicationRepo, ProjectRepo, UserRepo};
use portal_db::DbPool;
use sqlx::PgConnection;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Borrowed view of what the lifecycle needs from [`AppState`].
pub struct ApplicationLifecycle<'a> {
    pool: &'a DbPool,
    policy: &'a TransitionPolicy,
}

impl<'a> ApplicationLifecycle<'a> {
    pub fn new(pool: &'a DbPool, policy: &'a TransitionPolicy) -> Self {
        Self { pool, policy }
    }

    pub fn from_state(state: &'a AppState) -> Self {
        Self::new(&state.pool, &state.config.transition_policy)
    }

    /// Move an application addressed by its full path.
    ///
    /// Checks run in this order: caller may act for `faculty_id`, requested
    /// status is valid, faculty exists, project exists under the faculty,
    /// application exists under the project, policy allows the move,
    /// expected version matches.
    pub async fn transition(
        &self,
        faculty_id: DbId,
        project_id: DbId,
        application_id: DbId,
        request: &TransitionRequest,
        principal: &Principal,
    ) -> AppResult<Application> {
        authorize_transition(principal, faculty_id)?;
        let requested = ApplicationStatus::parse_requested(request.status_text())?;

        let mut tx = self.pool.begin().await?;

        UserRepo::find_with_role(&mut *tx, faculty_id, Role::Faculty)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Faculty",
                id: faculty_id,
            })?;

        let project = ProjectRepo::lock_for_faculty(&mut tx, faculty_id, project_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Project",
                id: project_id,
            })?;

        let application = ApplicationRepo::find_in_project(&mut *tx, project.id, application_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Application",
                id: application_id,
            })?;

        let updated = self
            .apply_transition(&mut tx, project, application, requested, request, principal)
            .await?;

        tx.commit().await?;
        Ok(updated)
    }

    /// Move an application addressed by its ID alone.
    ///
    /// The owning project and faculty are found through the application's
    /// foreign key. The status is validated before anything is loaded.
    pub async fn transition_by_id(
        &self,
        application_id: DbId,
        request: &TransitionRequest,
        principal: &Principal,
    ) -> AppResult<Application> {
        let requested = ApplicationStatus::parse_requested(request.status_text())?;
        let not_found = || CoreError::NotFound {
            entity: "Application",
            id: application_id,
        };

        let mut tx = self.pool.begin().await?;

        let located = ApplicationRepo::find_by_id(&mut *tx, application_id)
            .await?
            .ok_or_else(not_found)?;

        let project = ProjectRepo::lock_by_id(&mut tx, located.project_id)
            .await?
            .ok_or_else(not_found)?;

        authorize_transition(principal, project.faculty_id)?;

        // Re-read under the project lock; a withdrawal may have won the race.
        let application = ApplicationRepo::find_in_project(&mut *tx, project.id, application_id)
            .await?
            .ok_or_else(not_found)?;

        let updated = self
            .apply_transition(&mut tx, project, application, requested, request, principal)
            .await?;

        tx.commit().await?;
        Ok(updated)
    }

    /// Shared tail of both transition forms. The caller holds the project
    /// row lock.
    async fn apply_transition(
        &self,
        conn: &mut PgConnection,
        project: Project,
        application: Application,
        requested: ApplicationStatus,
        request: &TransitionRequest,
        principal: &Principal,
    ) -> AppResult<Application> {
        let plan = plan_transition(
            application.status,
            requested,
            self.policy,
            application.version,
            request.expected_version,
        )?;

        let update = StatusUpdate {
            status: plan.to,
            feedback: request.feedback.clone(),
            interview_date: request.interview_date,
            interview_location: request.interview_location.clone(),
            interview_notes: request.interview_notes.clone(),
        };
        let updated = ApplicationRepo::update_status(conn, application.id, &update).await?;

        let mut member_added = false;
        if plan.adds_member {
            let mut members = project.members;
            if insert_member(&mut members, &application.student_name) {
                ProjectRepo::set_members(conn, project.id, &members).await?;
                member_added = true;
            }
        }

        tracing::info!(
            user_id = principal.id,
            project_id = project.id,
            application_id = application.id,
            from = %plan.from,
            status = %plan.to,
            version = updated.version,
            member_added,
            "Application status changed",
        );
        Ok(updated)
    }

    /// Withdraw (hard-delete) an application on behalf of its student.
    pub async fn withdraw(
        &self,
        application_id: DbId,
        principal: &Principal,
    ) -> AppResult<()> {
        let not_found = || CoreError::NotFound {
            entity: "Application",
            id: application_id,
        };

        let mut tx = self.pool.begin().await?;

        let located = ApplicationRepo::find_by_id(&mut *tx, application_id)
            .await?
            .ok_or_else(not_found)?;

        // Lock order is always project then application.
        ProjectRepo::lock_by_id(&mut tx, located.project_id)
            .await?
            .ok_or_else(not_found)?;
        let application = ApplicationRepo::lock_by_id(&mut tx, application_id)
            .await?
            .ok_or_else(not_found)?;

        check_withdrawal(principal, application.student_id, application.status)?;

        ApplicationRepo::delete(&mut tx, application.id).await?;
        tx.commit().await?;

        tracing::info!(
            user_id = principal.id,
            project_id = application.project_id,
            application_id = application.id,
            "Application withdrawn",
        );
        Ok(())
    }

    /// Submit a new application for `student_id`.
    ///
    /// The student's current name and email are copied onto the
    /// application and never refreshed afterwards.
    pub async fn submit(
        &self,
        student_id: DbId,
        input: &SubmitApplication,
        principal: &Principal,
    ) -> AppResult<Application> {
        check_submission(principal, student_id)?;
        let (project_id, faculty_id) = require_target(input.project_id(), input.faculty_id())?;

        let mut tx = self.pool.begin().await?;

        let student = UserRepo::find_by_id(&mut *tx, student_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Student",
                id: student_id,
            })?;
        ensure_student(student.id, student.role)?;

        UserRepo::find_with_role(&mut *tx, faculty_id, Role::Faculty)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Faculty",
                id: faculty_id,
            })?;

        let project = ProjectRepo::lock_for_faculty(&mut tx, faculty_id, project_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Project",
                id: project_id,
            })?;

        let already_applied =
            ApplicationRepo::exists_for_student(&mut *tx, project.id, student.id).await?;
        ensure_not_already_applied(already_applied, student.id, project.id)?;

        let snapshot = ApplicantSnapshot::capture(
            &student.name,
            &student.email,
            input.student_program.clone(),
            input.student_skills.clone(),
        );
        let create = CreateApplication {
            project_id: project.id,
            student_id: student.id,
            student_name: snapshot.name,
            student_email: snapshot.email,
            student_program: snapshot.program,
            student_skills: snapshot.skills,
            cover_letter: input.cover_letter.clone().unwrap_or_default(),
        };

        let application = ApplicationRepo::create(&mut *tx, &create)
            .await
            .map_err(|e| duplicate_or_database(e, student.id, project.id))?;

        tx.commit().await?;

        tracing::info!(
            user_id = principal.id,
            project_id = project.id,
            application_id = application.id,
            status = %application.status,
            "Application submitted",
        );
        Ok(application)
    }
}

/// A racing insert that trips the unique constraint is the same duplicate
/// the explicit existence check reports.
fn duplicate_or_database(err: sqlx::Error, student_id: DbId, project_id: DbId) -> AppError {
    if portal_db::is_unique_violation(&err, UNIQUE_PROJECT_STUDENT) {
        AppError::Core(CoreError::DuplicateApplication {
            student_id,
            project_id,
        })
    } else {
        AppError::Database(err)
    }
}
