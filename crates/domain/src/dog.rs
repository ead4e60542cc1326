//! Dog: an adoptable animal listed by an organization.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RescueError, ValidationError};
use crate::id::{DogId, OrganizationId};
use crate::organization::Organization;
use crate::time::{Timestamp, now};

/// Where a dog stands in the adoption process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdoptionStatus {
    #[default]
    Available,
    Reserved,
    Adopted,
}

impl AdoptionStatus {
    /// Stable lowercase name used for storage and JSON.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Reserved => "reserved",
            Self::Adopted => "adopted",
        }
    }
}

impl fmt::Display for AdoptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdoptionStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "reserved" => Ok(Self::Reserved),
            "adopted" => Ok(Self::Adopted),
            other => Err(ValidationError::UnknownStatus(other.to_owned())),
        }
    }
}

/// A dog listed for adoption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dog {
    pub id: DogId,
    pub name: String,
    /// URL-safe handle used by `/dogs/{slug}` links.
    pub slug: String,
    pub breed: Option<String>,
    /// Free-form age description such as "2 years" or "Puppy".
    pub age_text: Option<String>,
    pub image_url: Option<String>,
    pub organization_id: OrganizationId,
    pub status: AdoptionStatus,
    pub created_at: Timestamp,
}

impl Dog {
    /// Create a builder for constructing a [`Dog`].
    #[must_use]
    pub fn builder() -> DogBuilder {
        DogBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RescueError::Validation`] when `name` is blank or `slug`
    /// contains anything other than lowercase ASCII alphanumerics and `-`.
    pub fn validate(&self) -> Result<(), RescueError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if !is_valid_slug(&self.slug) {
            return Err(ValidationError::InvalidSlug(self.slug.clone()).into());
        }
        Ok(())
    }

    /// Project this dog into the lightweight card record.
    #[must_use]
    pub fn preview(&self, organization: &Organization) -> PreviewDog {
        PreviewDog {
            id: self.id,
            name: self.name.clone(),
            slug: self.slug.clone(),
            breed: self.breed.clone(),
            age_text: self.age_text.clone(),
            image_url: self.image_url.clone(),
            organization_name: organization.name.clone(),
            country: Some(organization.country.clone()),
        }
    }
}

/// Step-by-step builder for [`Dog`].
#[derive(Debug, Default)]
pub struct DogBuilder {
    id: Option<DogId>,
    name: Option<String>,
    slug: Option<String>,
    breed: Option<String>,
    age_text: Option<String>,
    image_url: Option<String>,
    organization_id: Option<OrganizationId>,
    status: AdoptionStatus,
    created_at: Option<Timestamp>,
}

impl DogBuilder {
    #[must_use]
    pub fn id(mut self, id: DogId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    #[must_use]
    pub fn breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = Some(breed.into());
        self
    }

    #[must_use]
    pub fn age_text(mut self, age_text: impl Into<String>) -> Self {
        self.age_text = Some(age_text.into());
        self
    }

    #[must_use]
    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    #[must_use]
    pub fn organization_id(mut self, organization_id: OrganizationId) -> Self {
        self.organization_id = Some(organization_id);
        self
    }

    #[must_use]
    pub fn status(mut self, status: AdoptionStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Consume the builder, validate, and return a [`Dog`].
    ///
    /// When no slug is given it is derived from the name.
    ///
    /// # Errors
    ///
    /// Returns [`RescueError::Validation`] if `name` is missing or the slug
    /// is malformed.
    pub fn build(self) -> Result<Dog, RescueError> {
        let name = self.name.unwrap_or_default();
        let slug = self.slug.unwrap_or_else(|| slugify(&name));
        let dog = Dog {
            id: self.id.unwrap_or_default(),
            name,
            slug,
            breed: self.breed,
            age_text: self.age_text,
            image_url: self.image_url,
            organization_id: self.organization_id.unwrap_or_default(),
            status: self.status,
            created_at: self.created_at.unwrap_or_else(now),
        };
        dog.validate()?;
        Ok(dog)
    }
}

/// Lightweight record rendered by preview cards.
///
/// Only `id` is inspected by the hero (list keying); the rest is forwarded
/// untouched to the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewDog {
    pub id: DogId,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub age_text: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub organization_name: String,
    #[serde(default)]
    pub country: Option<String>,
}

impl PreviewDog {
    /// Relative link to the dog's detail page.
    #[must_use]
    pub fn href(&self) -> String {
        format!("/dogs/{}", self.slug)
    }
}

/// Turn a display name into a slug: lowercase ASCII alphanumerics joined by `-`.
#[must_use]
pub fn slugify(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_derive_slug_from_name() {
        let dog = Dog::builder().name("Sir Barks-a-Lot 2").build().unwrap();
        assert_eq!(dog.slug, "sir-barks-a-lot-2");
        assert_eq!(dog.status, AdoptionStatus::Available);
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = Dog::builder().build();
        assert!(matches!(
            result,
            Err(RescueError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_reject_slug_with_uppercase() {
        let result = Dog::builder().name("Rex").slug("Rex").build();
        assert!(matches!(
            result,
            Err(RescueError::Validation(ValidationError::InvalidSlug(_)))
        ));
    }

    #[test]
    fn should_reject_name_without_slug_characters() {
        let result = Dog::builder().name("ñ").build();
        assert!(matches!(
            result,
            Err(RescueError::Validation(ValidationError::InvalidSlug(_)))
        ));
    }

    #[test]
    fn should_parse_known_statuses() {
        assert_eq!("reserved".parse(), Ok(AdoptionStatus::Reserved));
        assert_eq!(
            "lost".parse::<AdoptionStatus>(),
            Err(ValidationError::UnknownStatus("lost".to_string()))
        );
    }

    #[test]
    fn should_project_preview_with_organization_details() {
        let org = Organization::builder()
            .name("Happy Paws")
            .country("DE")
            .build()
            .unwrap();
        let dog = Dog::builder()
            .name("Luna")
            .breed("Mixed")
            .organization_id(org.id)
            .build()
            .unwrap();

        let preview = dog.preview(&org);
        assert_eq!(preview.id, dog.id);
        assert_eq!(preview.organization_name, "Happy Paws");
        assert_eq!(preview.country.as_deref(), Some("DE"));
        assert_eq!(preview.href(), "/dogs/luna");
    }

    #[test]
    fn should_deserialize_preview_with_only_required_fields() {
        let id = DogId::new();
        let json = format!(
            r#"{{"id":"{id}","name":"Luna","slug":"luna","organization_name":"Happy Paws"}}"#
        );
        let preview: PreviewDog = serde_json::from_str(&json).unwrap();
        assert_eq!(preview.id, id);
        assert!(preview.breed.is_none());
    }
}
