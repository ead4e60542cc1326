//! Organization: a rescue group that lists dogs for adoption.

use serde::{Deserialize, Serialize};

use crate::error::{RescueError, ValidationError};
use crate::id::OrganizationId;

/// A rescue organization operating in a single country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: OrganizationId,
    pub name: String,
    /// Country identifier (e.g. `DE`, `TR`). Counted by the statistics panel.
    pub country: String,
    /// Inactive organizations and their dogs are left out of statistics and listings.
    pub active: bool,
}

impl Organization {
    /// Create a builder for constructing an [`Organization`].
    #[must_use]
    pub fn builder() -> OrganizationBuilder {
        OrganizationBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RescueError::Validation`] when `name` or `country` is blank.
    pub fn validate(&self) -> Result<(), RescueError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.country.trim().is_empty() {
            return Err(ValidationError::EmptyCountry.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Organization`].
#[derive(Debug)]
pub struct OrganizationBuilder {
    id: Option<OrganizationId>,
    name: Option<String>,
    country: Option<String>,
    active: bool,
}

impl Default for OrganizationBuilder {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            country: None,
            active: true,
        }
    }
}

impl OrganizationBuilder {
    #[must_use]
    pub fn id(mut self, id: OrganizationId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Country identifiers are stored upper-cased so `de` and `DE` count once.
    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into().trim().to_uppercase());
        self
    }

    #[must_use]
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Consume the builder, validate, and return an [`Organization`].
    ///
    /// # Errors
    ///
    /// Returns [`RescueError::Validation`] if `name` or `country` is missing.
    pub fn build(self) -> Result<Organization, RescueError> {
        let organization = Organization {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            country: self.country.unwrap_or_default(),
            active: self.active,
        };
        organization.validate()?;
        Ok(organization)
    }
}
