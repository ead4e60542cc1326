//! Statistics service: aggregates the counts shown by the hero section.

use std::future::Future;

use rescuehub_domain::error::RescueError;
use rescuehub_domain::statistics::Statistics;

use crate::ports::{DogRepository, OrganizationRepository, StatisticsProvider};

/// Builds [`Statistics`] from the catalogue repositories.
pub struct StatisticsService<DR, OR> {
    dogs: DR,
    organizations: OR,
}

impl<DR: DogRepository, OR: OrganizationRepository> StatisticsService<DR, OR> {
    /// Create a new service backed by the given repositories.
    pub fn new(dogs: DR, organizations: OR) -> Self {
        Self {
            dogs,
            organizations,
        }
    }

    /// Count available dogs, active organizations and their countries.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from either repository.
    #[tracing::instrument(skip(self))]
    pub async fn statistics(&self) -> Result<Statistics, RescueError> {
        let total_dogs = self.dogs.count_available().await?;
        let total_organizations = self.organizations.count_active().await?;
        let countries = self.organizations.active_countries().await?;
        tracing::debug!(
            total_dogs,
            total_organizations,
            countries = countries.len(),
            "statistics aggregated"
        );
        Ok(Statistics {
            total_dogs,
            total_organizations,
            countries,
        })
    }
}

impl<DR, OR> StatisticsProvider for StatisticsService<DR, OR>
where
    DR: DogRepository + Send + Sync,
    OR: OrganizationRepository + Send + Sync,
{
    fn fetch_statistics(&self) -> impl Future<Output = Result<Statistics, RescueError>> + Send {
        self.statistics()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::testing::InMemoryCatalog;
    use rescuehub_domain::dog::{AdoptionStatus, Dog};
    use rescuehub_domain::organization::Organization;

    async fn seed(catalog: &Arc<InMemoryCatalog>) {
        let orgs = [
            ("Happy Paws", "DE", true),
            ("Sofia Strays", "BG", true),
            ("Berlin Barks", "de", true),
            ("Closed Shelter", "TR", false),
        ];
        for (name, country, active) in orgs {
            let org = Organization::builder()
                .name(name)
                .country(country)
                .active(active)
                .build()
                .unwrap();
            OrganizationRepository::create(catalog, org.clone())
                .await
                .unwrap();
            for (i, status) in [AdoptionStatus::Available, AdoptionStatus::Adopted]
                .into_iter()
                .enumerate()
            {
                let dog = Dog::builder()
                    .name(format!("{name} dog {i}"))
                    .organization_id(org.id)
                    .status(status)
                    .build()
                    .unwrap();
                DogRepository::create(catalog, dog).await.unwrap();
            }
        }
    }

    #[tokio::test]
    async fn should_count_only_available_dogs_of_active_organizations() {
        let catalog = Arc::new(InMemoryCatalog::default());
        seed(&catalog).await;
        let svc = StatisticsService::new(catalog.clone(), catalog);

        let stats = svc.statistics().await.unwrap();

        assert_eq!(stats.total_dogs, 3);
        assert_eq!(stats.total_organizations, 3);
        assert_eq!(stats.countries, vec!["BG".to_string(), "DE".to_string()]);
    }

    #[tokio::test]
    async fn should_return_zeroes_for_empty_catalog() {
        let catalog = Arc::new(InMemoryCatalog::default());
        let svc = StatisticsService::new(catalog.clone(), catalog);

        let stats = svc.fetch_statistics().await.unwrap();

        assert_eq!(stats, Statistics::default());
    }
}
