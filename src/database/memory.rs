use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::models::project::{NewProjectData, Project};
use super::repository::ProjectRepository;
use super::DatabaseError;

/// In-memory stand-in for the Postgres repository.
///
/// Backs integration tests that exercise the full HTTP pipeline without a
/// running database. Semantics mirror [`super::repository::PgProjectRepository`]:
/// ids are assigned on create and lookups never fail for missing rows.
#[derive(Default)]
pub struct InMemoryProjectRepository {
    projects: RwLock<Vec<Project>>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored projects. Lets tests assert on side effects directly.
    pub async fn count(&self) -> usize {
        self.projects.read().await.len()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Project>, DatabaseError> {
        let projects = self.projects.read().await;
        Ok(projects
            .iter()
            .filter(|p| p.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, DatabaseError> {
        let projects = self.projects.read().await;
        Ok(projects.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, owner_id: Uuid, data: NewProjectData) -> Result<Project, DatabaseError> {
        let project = Project {
            id: Uuid::new_v4(),
            owner_id,
            name: data.name,
            is_initiated: data.is_initiated,
            link: data.link,
            stacks: data.stacks,
            field_of_study: data.field_of_study,
            looking_for: data.looking_for,
            idea: data.idea,
            created_at: Utc::now(),
        };

        self.projects.write().await.push(project.clone());
        Ok(project)
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}
