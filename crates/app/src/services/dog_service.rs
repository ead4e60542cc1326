//! Dog service: use-cases for listing dogs.

use rescuehub_domain::dog::{Dog, PreviewDog, slugify};
use rescuehub_domain::error::{NotFoundError, RescueError};
use rescuehub_domain::hero::MAX_PREVIEW_CARDS;
use rescuehub_domain::id::DogId;

use crate::ports::{DogRepository, OrganizationRepository};

/// Upper bound for the preview endpoint.
pub const MAX_PREVIEW_LIMIT: u32 = 12;

/// Numbered variants tried for a name-derived slug before giving up.
const MAX_SLUG_SUFFIX: u32 = 100;

/// Application service for dog operations.
pub struct DogService<DR, OR> {
    dogs: DR,
    organizations: OR,
}

impl<DR: DogRepository, OR: OrganizationRepository> DogService<DR, OR> {
    /// Create a new service backed by the given repositories.
    pub fn new(dogs: DR, organizations: OR) -> Self {
        Self {
            dogs,
            organizations,
        }
    }

    /// Register a dog after validating invariants and its organization.
    ///
    /// A slug derived from the name that is already taken gets a numeric
    /// suffix (`luna`, `luna-2`, `luna-3`, ...). Any other slug must be free.
    ///
    /// # Errors
    ///
    /// Returns [`RescueError::Validation`] if invariants fail or an explicit
    /// slug is taken, [`RescueError::NotFound`] when the organization does
    /// not exist, or a storage error from a repository.
    #[tracing::instrument(skip(self, dog), fields(dog_name = %dog.name))]
    pub async fn register_dog(&self, mut dog: Dog) -> Result<Dog, RescueError> {
        dog.validate()?;
        if self
            .organizations
            .get_by_id(dog.organization_id)
            .await?
            .is_none()
        {
            return Err(NotFoundError {
                entity: "Organization",
                id: dog.organization_id.to_string(),
            }
            .into());
        }
        if dog.slug == slugify(&dog.name) {
            dog.slug = self.free_slug(&dog.slug).await?;
        }
        self.dogs.create(dog).await
    }

    async fn free_slug(&self, base: &str) -> Result<String, RescueError> {
        if self.dogs.get_preview_by_slug(base).await?.is_none() {
            return Ok(base.to_string());
        }
        for suffix in 2..=MAX_SLUG_SUFFIX {
            let candidate = format!("{base}-{suffix}");
            if self.dogs.get_preview_by_slug(&candidate).await?.is_none() {
                tracing::debug!(slug = %candidate, "slug taken, using numbered variant");
                return Ok(candidate);
            }
        }
        // Every variant is taken: let the repository report the duplicate.
        Ok(base.to_string())
    }

    /// Look up a dog by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`RescueError::NotFound`] when no dog with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_dog(&self, id: DogId) -> Result<Dog, RescueError> {
        self.dogs.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Dog",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Look up a dog's card record by slug.
    ///
    /// # Errors
    ///
    /// Returns [`RescueError::NotFound`] when no dog has `slug`, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_by_slug(&self, slug: &str) -> Result<PreviewDog, RescueError> {
        self.dogs.get_preview_by_slug(slug).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Dog",
                id: slug.to_string(),
            }
            .into()
        })
    }

    /// Available dogs, newest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_available(&self, limit: Option<u32>) -> Result<Vec<PreviewDog>, RescueError> {
        self.dogs.find_available(limit).await
    }

    /// Dogs for preview cards. `limit` defaults to the number of hero cards
    /// and is clamped to `1..=MAX_PREVIEW_LIMIT`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn preview(&self, limit: Option<u32>) -> Result<Vec<PreviewDog>, RescueError> {
        let limit = preview_limit(limit);
        self.dogs.find_available(Some(limit)).await
    }
}

fn preview_limit(requested: Option<u32>) -> u32 {
    #[allow(clippy::cast_possible_truncation)]
    let default = MAX_PREVIEW_CARDS as u32;
    requested.unwrap_or(default).clamp(1, MAX_PREVIEW_LIMIT)
}
