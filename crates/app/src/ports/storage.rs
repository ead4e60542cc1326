//! Storage port: repository traits for persistence.

use std::future::Future;

use rescuehub_domain::dog::{Dog, PreviewDog};
use rescuehub_domain::error::RescueError;
use rescuehub_domain::id::{DogId, OrganizationId};
use rescuehub_domain::organization::Organization;

/// Persistence for rescue organizations.
pub trait OrganizationRepository {
    fn create(
        &self,
        organization: Organization,
    ) -> impl Future<Output = Result<Organization, RescueError>> + Send;

    fn get_by_id(
        &self,
        id: OrganizationId,
    ) -> impl Future<Output = Result<Option<Organization>, RescueError>> + Send;

    /// All organizations ordered by name.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Organization>, RescueError>> + Send;

    /// Number of active organizations.
    fn count_active(&self) -> impl Future<Output = Result<u64, RescueError>> + Send;

    /// Distinct countries of active organizations, ascending.
    fn active_countries(&self) -> impl Future<Output = Result<Vec<String>, RescueError>> + Send;
}

/// Persistence for dogs.
pub trait DogRepository {
    fn create(&self, dog: Dog) -> impl Future<Output = Result<Dog, RescueError>> + Send;

    fn get_by_id(&self, id: DogId)
    -> impl Future<Output = Result<Option<Dog>, RescueError>> + Send;

    /// Card record for the dog with `slug`, whatever its status.
    fn get_preview_by_slug(
        &self,
        slug: &str,
    ) -> impl Future<Output = Result<Option<PreviewDog>, RescueError>> + Send;

    /// Number of available dogs listed by active organizations.
    fn count_available(&self) -> impl Future<Output = Result<u64, RescueError>> + Send;

    /// Available dogs of active organizations, newest first.
    fn find_available(
        &self,
        limit: Option<u32>,
    ) -> impl Future<Output = Result<Vec<PreviewDog>, RescueError>> + Send;
}

impl<T: OrganizationRepository + Send + Sync> OrganizationRepository for std::sync::Arc<T> {
    fn create(
        &self,
        organization: Organization,
    ) -> impl Future<Output = Result<Organization, RescueError>> + Send {
        (**self).create(organization)
    }

    fn get_by_id(
        &self,
        id: OrganizationId,
    ) -> impl Future<Output = Result<Option<Organization>, RescueError>> + Send {
        (**self).get_by_id(id)
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Organization>, RescueError>> + Send {
        (**self).get_all()
    }

    fn count_active(&self) -> impl Future<Output = Result<u64, RescueError>> + Send {
        (**self).count_active()
    }

    fn active_countries(&self) -> impl Future<Output = Result<Vec<String>, RescueError>> + Send {
        (**self).active_countries()
    }
}

impl<T: DogRepository + Send + Sync> DogRepository for std::sync::Arc<T> {
    fn create(&self, dog: Dog) -> impl Future<Output = Result<Dog, RescueError>> + Send {
        (**self).create(dog)
    }

    fn get_by_id(
        &self,
        id: DogId,
    ) -> impl Future<Output = Result<Option<Dog>, RescueError>> + Send {
        (**self).get_by_id(id)
    }

    fn get_preview_by_slug(
        &self,
        slug: &str,
    ) -> impl Future<Output = Result<Option<PreviewDog>, RescueError>> + Send {
        (**self).get_preview_by_slug(slug)
    }

    fn count_available(&self) -> impl Future<Output = Result<u64, RescueError>> + Send {
        (**self).count_available()
    }

    fn find_available(
        &self,
        limit: Option<u32>,
    ) -> impl Future<Output = Result<Vec<PreviewDog>, RescueError>> + Send {
        (**self).find_available(limit)
    }
}
