//! Repository for the `applications` table.

use portal_core::types::DbId;
use sqlx::{PgConnection, PgExecutor, PgPool};

use crate::models::application::{Application, CreateApplication, StatusUpdate};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, student_id, student_name, student_email, \
                        student_program, student_skills, cover_letter, status, feedback, \
                        interview_date, interview_location, interview_notes, version, \
                        applied_at, created_at, updated_at";

/// Name of the constraint enforcing one application per student and project.
pub const UNIQUE_PROJECT_STUDENT: &str = "uq_applications_project_student";

/// Provides persistence for applications. Status changes go through
/// [`Self::update_status`] only.
pub struct ApplicationRepo;

impl ApplicationRepo {
    /// Insert a new application in the `Applied` state.
    ///
    /// A second application for the same (project, student) fails with a
    /// unique violation on [`UNIQUE_PROJECT_STUDENT`].
    pub async fn create<'e, E>(
        executor: E,
        input: &CreateApplication,
    ) -> Result<Application, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO applications
                (project_id, student_id, student_name, student_email, student_program,
                 student_skills, cover_letter)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(input.project_id)
            .bind(input.student_id)
            .bind(&input.student_name)
            .bind(&input.student_email)
            .bind(&input.student_program)
            .bind(&input.student_skills)
            .bind(&input.cover_letter)
            .fetch_one(executor)
            .await
    }

    /// Find an application by internal ID.
    pub async fn find_by_id<'e, E>(
        executor: E,
        id: DbId,
    ) -> Result<Option<Application>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM applications WHERE id = $1");
        sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find an application only if it belongs to `project_id`.
    pub async fn find_in_project<'e, E>(
        executor: E,
        project_id: DbId,
        application_id: DbId,
    ) -> Result<Option<Application>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query =
            format!("SELECT {COLUMNS} FROM applications WHERE id = $1 AND project_id = $2");
        sqlx::query_as::<_, Application>(&query)
            .bind(application_id)
            .bind(project_id)
            .fetch_optional(executor)
            .await
    }

    /// Find an application by ID and lock its row until the transaction ends.
    pub async fn lock_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Application>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM applications WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Whether `student_id` already has an application on `project_id`.
    pub async fn exists_for_student<'e, E>(
        executor: E,
        project_id: DbId,
        student_id: DbId,
    ) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM applications WHERE project_id = $1 AND student_id = $2)",
        )
        .bind(project_id)
        .bind(student_id)
        .fetch_one(executor)
        .await?;
        Ok(row.0)
    }

    /// List a project's applications in submission order.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Application>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM applications WHERE project_id = $1 ORDER BY applied_at, id"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Write a new status and bump the version. `None` extras keep their
    /// stored value.
    pub async fn update_status(
        conn: &mut PgConnection,
        id: DbId,
        input: &StatusUpdate,
    ) -> Result<Application, sqlx::Error> {
        let query = format!(
            "UPDATE applications SET
                status = $2,
                feedback = COALESCE($3, feedback),
                interview_date = COALESCE($4, interview_date),
                interview_location = COALESCE($5, interview_location),
                interview_notes = COALESCE($6, interview_notes),
                version = version + 1
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .bind(input.status.as_str())
            .bind(&input.feedback)
            .bind(input.interview_date)
            .bind(&input.interview_location)
            .bind(&input.interview_notes)
            .fetch_one(conn)
            .await
    }

    /// Hard-delete an application. Returns `true` if a row was removed.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM applications WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
