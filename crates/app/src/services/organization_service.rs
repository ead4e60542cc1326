//! Organization service: use-cases for rescue organizations.

use rescuehub_domain::error::{NotFoundError, RescueError};
use rescuehub_domain::id::OrganizationId;
use rescuehub_domain::organization::Organization;

use crate::ports::OrganizationRepository;

/// Application service for organization operations.
pub struct OrganizationService<R> {
    repo: R,
}

impl<R: OrganizationRepository> OrganizationService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Register an organization after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RescueError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, organization), fields(organization_name = %organization.name))]
    pub async fn create_organization(
        &self,
        organization: Organization,
    ) -> Result<Organization, RescueError> {
        organization.validate()?;
        self.repo.create(organization).await
    }

    /// Look up an organization by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`RescueError::NotFound`] when no organization with `id`
    /// exists, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_organization(&self, id: OrganizationId) -> Result<Organization, RescueError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Organization",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all organizations.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_organizations(&self) -> Result<Vec<Organization>, RescueError> {
        self.repo.get_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryCatalog;
    use rescuehub_domain::error::ValidationError;

    fn make_service() -> OrganizationService<InMemoryCatalog> {
        OrganizationService::new(InMemoryCatalog::default())
    }

    fn valid_org(name: &str) -> Organization {
        Organization::builder()
            .name(name)
            .country("DE")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_organization_when_valid() {
        let svc = make_service();
        let org = valid_org("Happy Paws");
        let id = org.id;

        svc.create_organization(org).await.unwrap();

        let fetched = svc.get_organization(id).await.unwrap();
        assert_eq!(fetched.name, "Happy Paws");
    }

    #[tokio::test]
    async fn should_reject_create_when_country_is_empty() {
        let svc = make_service();
        let mut org = valid_org("Happy Paws");
        org.country = String::new();

        let result = svc.create_organization(org).await;
        assert!(matches!(
            result,
            Err(RescueError::Validation(ValidationError::EmptyCountry))
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_organization_missing() {
        let svc = make_service();
        let result = svc.get_organization(OrganizationId::new()).await;
        assert!(matches!(result, Err(RescueError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_organizations_by_name() {
        let svc = make_service();
        svc.create_organization(valid_org("Zoe's Rescue")).await.unwrap();
        svc.create_organization(valid_org("Animal Aid")).await.unwrap();

        let names: Vec<String> = svc
            .list_organizations()
            .await
            .unwrap()
            .into_iter()
            .map(|org| org.name)
            .collect();
        assert_eq!(names, vec!["Animal Aid", "Zoe's Rescue"]);
    }
}
