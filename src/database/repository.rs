use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::models::project::{NewProjectData, Project};
use super::DatabaseError;

/// Store accessor for the project collection.
///
/// Handlers depend on this trait rather than a concrete pool so tests can
/// substitute [`super::memory::InMemoryProjectRepository`].
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// All projects owned by `owner_id`. Empty vec, never an error, when none exist.
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Project>, DatabaseError>;

    /// Single-project lookup. `None` means no such row; transport failures are `Err`.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, DatabaseError>;

    /// Persist a new project for `owner_id`. The store assigns the id; callers
    /// cannot supply one.
    async fn create(&self, owner_id: Uuid, data: NewProjectData) -> Result<Project, DatabaseError>;

    /// Cheap reachability probe for the health endpoint.
    async fn health_check(&self) -> Result<(), DatabaseError>;
}

pub struct PgProjectRepository {
    pool: PgPool,
}

impl PgProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for PgProjectRepository {
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Project>, DatabaseError> {
        let projects = sqlx::query_as::<_, Project>(
            "SELECT * FROM projects WHERE owner_id = $1 ORDER BY created_at",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, DatabaseError> {
        let project = sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(project)
    }

    async fn create(&self, owner_id: Uuid, data: NewProjectData) -> Result<Project, DatabaseError> {
        let project = sqlx::query_as::<_, Project>(
            "INSERT INTO projects \
             (owner_id, name, is_initiated, link, stacks, field_of_study, looking_for, idea) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(owner_id)
        .bind(data.name)
        .bind(data.is_initiated)
        .bind(data.link)
        .bind(data.stacks)
        .bind(data.field_of_study)
        .bind(data.looking_for)
        .bind(data.idea)
        .fetch_one(&self.pool)
        .await?;

        Ok(project)
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
