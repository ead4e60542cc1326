//! Demo catalogue inserted into an empty database.

use chrono::Duration;
use rescuehub_app::ports::{DogRepository, OrganizationRepository};
use rescuehub_app::services::dog_service::DogService;
use rescuehub_app::services::organization_service::OrganizationService;
use rescuehub_domain::dog::Dog;
use rescuehub_domain::error::RescueError;
use rescuehub_domain::organization::Organization;
use rescuehub_domain::time::now;

const ORGANIZATIONS: [(&str, &str); 3] = [
    ("Happy Paws Berlin", "DE"),
    ("Second Chance Bucharest", "RO"),
    ("Galgos del Sur", "ES"),
];

/// `(name, breed, age, organization index)`
const DOGS: [(&str, &str, &str, usize); 5] = [
    ("Luna", "German Shepherd mix", "2 years", 0),
    ("Bruno", "Carpathian Shepherd", "4 years", 1),
    ("Mara", "Galgo Español", "3 years", 2),
    ("Fifi", "Terrier mix", "8 months", 1),
    ("Oskar", "Dachshund", "7 years", 0),
];

/// Insert the demo organizations and dogs unless the catalogue already has
/// organizations. Returns whether anything was inserted.
///
/// # Errors
///
/// Returns any error from the services.
pub async fn demo_catalogue<DR, OR>(
    organizations: &OrganizationService<OR>,
    dogs: &DogService<DR, OR>,
) -> Result<bool, RescueError>
where
    DR: DogRepository,
    OR: OrganizationRepository,
{
    if !organizations.list_organizations().await?.is_empty() {
        return Ok(false);
    }

    let mut created = Vec::with_capacity(ORGANIZATIONS.len());
    for (name, country) in ORGANIZATIONS {
        let organization = Organization::builder().name(name).country(country).build()?;
        created.push(organizations.create_organization(organization).await?);
    }

    // Staggered so the newest-first listing follows declaration order.
    let started = now();
    for (offset, (name, breed, age, org)) in (0_i64..).zip(DOGS) {
        let dog = Dog::builder()
            .name(name)
            .breed(breed)
            .age_text(age)
            .organization_id(created[org].id)
            .created_at(started - Duration::minutes(offset))
            .build()?;
        dogs.register_dog(dog).await?;
    }

    tracing::info!(
        organizations = created.len(),
        dogs = DOGS.len(),
        "demo catalogue seeded"
    );
    Ok(true)
}
