//! Repository for the `projects` table.

use portal_core::project::{ProjectStatus, DEFAULT_SEATS_REQUIRED};
use portal_core::types::DbId;
use sqlx::{PgConnection, PgExecutor, PgPool};

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, faculty_id, title, description, domain, required_skills, \
                        seats_required, application_deadline, status, members, \
                        attachment_urls, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project owned by `faculty_id`, returning the created row.
    ///
    /// Absent optional fields take the column defaults.
    pub async fn create(
        pool: &PgPool,
        faculty_id: DbId,
        input: &CreateProject,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (faculty_id, title, description, domain, required_skills, seats_required,
                 application_deadline, status, members, attachment_urls)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(faculty_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.domain.as_deref().unwrap_or(""))
            .bind(input.required_skills.clone().unwrap_or_default())
            .bind(input.seats_required.unwrap_or(DEFAULT_SEATS_REQUIRED))
            .bind(input.application_deadline)
            .bind(input.status.unwrap_or_default().as_str())
            .bind(input.members.clone().unwrap_or_default())
            .bind(input.attachment_urls.clone().unwrap_or_default())
            .fetch_one(pool)
            .await
    }

    /// Find a project by internal ID.
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Project>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a project only if it belongs to `faculty_id`.
    pub async fn find_for_faculty<'e, E>(
        executor: E,
        faculty_id: DbId,
        project_id: DbId,
    ) -> Result<Option<Project>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1 AND faculty_id = $2");
        sqlx::query_as::<_, Project>(&query)
            .bind(project_id)
            .bind(faculty_id)
            .fetch_optional(executor)
            .await
    }

    /// Like [`Self::find_for_faculty`] but takes a row lock held until the
    /// surrounding transaction ends. Every writer to a project's
    /// applications goes through this lock first.
    pub async fn lock_for_faculty(
        conn: &mut PgConnection,
        faculty_id: DbId,
        project_id: DbId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects WHERE id = $1 AND faculty_id = $2 FOR UPDATE"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(project_id)
            .bind(faculty_id)
            .fetch_optional(conn)
            .await
    }

    /// Lock a project row by ID alone.
    pub async fn lock_by_id(
        conn: &mut PgConnection,
        project_id: DbId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Project>(&query)
            .bind(project_id)
            .fetch_optional(conn)
            .await
    }

    /// List one faculty member's projects, newest first.
    pub async fn list_by_faculty(
        pool: &PgPool,
        faculty_id: DbId,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects WHERE faculty_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(faculty_id)
            .fetch_all(pool)
            .await
    }

    /// Update a project owned by `faculty_id`. Only non-`None` fields are
    /// applied; a `Some(None)` deadline clears it.
    ///
    /// Returns `None` if the project does not exist under that faculty.
    pub async fn update(
        pool: &PgPool,
        faculty_id: DbId,
        project_id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                domain = COALESCE($5, domain),
                required_skills = COALESCE($6, required_skills),
                seats_required = COALESCE($7, seats_required),
                application_deadline = CASE WHEN $12 THEN $8 ELSE application_deadline END,
                status = COALESCE($9, status),
                members = COALESCE($10, members),
                attachment_urls = COALESCE($11, attachment_urls)
             WHERE id = $1 AND faculty_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(project_id)
            .bind(faculty_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.domain)
            .bind(&input.required_skills)
            .bind(input.seats_required)
            .bind(input.application_deadline.flatten())
            .bind(input.status.map(ProjectStatus::as_str))
            .bind(&input.members)
            .bind(&input.attachment_urls)
            .bind(input.application_deadline.is_some())
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the member list of a project.
    pub async fn set_members(
        conn: &mut PgConnection,
        project_id: DbId,
        members: &[String],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE projects SET members = $2 WHERE id = $1")
            .bind(project_id)
            .bind(members)
            .execute(conn)
            .await?;
        Ok(())
    }

    /// Delete a project owned by `faculty_id`. Its applications are removed
    /// by the `ON DELETE CASCADE` foreign key.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(
        pool: &PgPool,
        faculty_id: DbId,
        project_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1 AND faculty_id = $2")
            .bind(project_id)
            .bind(faculty_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
