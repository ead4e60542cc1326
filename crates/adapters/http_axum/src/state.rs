//! Shared application state for axum handlers.

use std::sync::Arc;

use rescuehub_app::ports::{DogRepository, OrganizationRepository};
use rescuehub_app::services::dog_service::DogService;
use rescuehub_app::services::organization_service::OrganizationService;
use rescuehub_app::services::statistics_service::StatisticsService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<DR, OR> {
    /// Organization use-cases.
    pub organization_service: Arc<OrganizationService<OR>>,
    /// Dog use-cases.
    pub dog_service: Arc<DogService<DR, OR>>,
    /// Statistics aggregation, also the hero's statistics provider.
    pub statistics_service: Arc<StatisticsService<DR, OR>>,
}

impl<DR, OR> Clone for AppState<DR, OR> {
    fn clone(&self) -> Self {
        Self {
            organization_service: Arc::clone(&self.organization_service),
            dog_service: Arc::clone(&self.dog_service),
            statistics_service: Arc::clone(&self.statistics_service),
        }
    }
}

impl<DR, OR> AppState<DR, OR>
where
    DR: DogRepository + Send + Sync + 'static,
    OR: OrganizationRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        organization_service: OrganizationService<OR>,
        dog_service: DogService<DR, OR>,
        statistics_service: StatisticsService<DR, OR>,
    ) -> Self {
        Self {
            organization_service: Arc::new(organization_service),
            dog_service: Arc::new(dog_service),
            statistics_service: Arc::new(statistics_service),
        }
    }
}
