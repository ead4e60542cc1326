//! In-memory port implementations shared by the unit tests of this crate.

use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use rescuehub_domain::dog::{AdoptionStatus, Dog, PreviewDog};
use rescuehub_domain::error::{RescueError, ValidationError};
use rescuehub_domain::id::{DogId, OrganizationId};
use rescuehub_domain::organization::Organization;
use rescuehub_domain::statistics::Statistics;

use crate::ports::{DogRepository, ErrorReporter, OrganizationRepository, StatisticsProvider};

/// Organizations and dogs kept in two vectors.
#[derive(Default)]
pub struct InMemoryCatalog {
    organizations: Mutex<Vec<Organization>>,
    dogs: Mutex<Vec<Dog>>,
}

impl InMemoryCatalog {
    fn active_org(&self, id: OrganizationId) -> Option<Organization> {
        self.organizations
            .lock()
            .unwrap()
            .iter()
            .find(|org| org.id == id && org.active)
            .cloned()
    }

    fn available(&self) -> Vec<(Dog, Organization)> {
        let dogs = self.dogs.lock().unwrap().clone();
        let mut rows: Vec<(Dog, Organization)> = dogs
            .into_iter()
            .filter(|dog| dog.status == AdoptionStatus::Available)
            .filter_map(|dog| {
                let org = self.active_org(dog.organization_id)?;
                Some((dog, org))
            })
            .collect();
        rows.sort_by(|a, b| b.0.created_at.cmp(&a.0.created_at));
        rows
    }
}

impl OrganizationRepository for InMemoryCatalog {
    fn create(
        &self,
        organization: Organization,
    ) -> impl Future<Output = Result<Organization, RescueError>> + Send {
        self.organizations.lock().unwrap().push(organization.clone());
        async { Ok(organization) }
    }

    fn get_by_id(
        &self,
        id: OrganizationId,
    ) -> impl Future<Output = Result<Option<Organization>, RescueError>> + Send {
        let result = self
            .organizations
            .lock()
            .unwrap()
            .iter()
            .find(|org| org.id == id)
            .cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Organization>, RescueError>> + Send {
        let mut all = self.organizations.lock().unwrap().clone();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        async { Ok(all) }
    }

    fn count_active(&self) -> impl Future<Output = Result<u64, RescueError>> + Send {
        let count = self
            .organizations
            .lock()
            .unwrap()
            .iter()
            .filter(|org| org.active)
            .count() as u64;
        async move { Ok(count) }
    }

    fn active_countries(&self) -> impl Future<Output = Result<Vec<String>, RescueError>> + Send {
        let mut countries: Vec<String> = self
            .organizations
            .lock()
            .unwrap()
            .iter()
            .filter(|org| org.active)
            .map(|org| org.country.clone())
            .collect();
        countries.sort();
        countries.dedup();
        async { Ok(countries) }
    }
}

impl DogRepository for InMemoryCatalog {
    fn create(&self, dog: Dog) -> impl Future<Output = Result<Dog, RescueError>> + Send {
        let mut dogs = self.dogs.lock().unwrap();
        let result = if dogs.iter().any(|existing| existing.slug == dog.slug) {
            Err(ValidationError::DuplicateSlug(dog.slug).into())
        } else {
            dogs.push(dog.clone());
            Ok(dog)
        };
        async { result }
    }

    fn get_by_id(
        &self,
        id: DogId,
    ) -> impl Future<Output = Result<Option<Dog>, RescueError>> + Send {
        let result = self
            .dogs
            .lock()
            .unwrap()
            .iter()
            .find(|dog| dog.id == id)
            .cloned();
        async { Ok(result) }
    }

    fn get_preview_by_slug(
        &self,
        slug: &str,
    ) -> impl Future<Output = Result<Option<PreviewDog>, RescueError>> + Send {
        let dog = self
            .dogs
            .lock()
            .unwrap()
            .iter()
            .find(|dog| dog.slug == slug)
            .cloned();
        let organizations = self.organizations.lock().unwrap().clone();
        let preview = dog.and_then(|dog| {
            organizations
                .iter()
                .find(|org| org.id == dog.organization_id)
                .map(|org| dog.preview(org))
        });
        async { Ok(preview) }
    }

    fn count_available(&self) -> impl Future<Output = Result<u64, RescueError>> + Send {
        let count = self.available().len() as u64;
        async move { Ok(count) }
    }

    fn find_available(
        &self,
        limit: Option<u32>,
    ) -> impl Future<Output = Result<Vec<PreviewDog>, RescueError>> + Send {
        let take = limit.map_or(usize::MAX, |n| n as usize);
        let previews: Vec<PreviewDog> = self
            .available()
            .iter()
            .take(take)
            .map(|(dog, org)| dog.preview(org))
            .collect();
        async { Ok(previews) }
    }
}

/// Statistics provider replaying a scripted sequence of results.
pub struct ScriptedProvider {
    responses: Mutex<Vec<Result<Statistics, String>>>,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    /// Responses are served in order; the last one repeats.
    pub fn new(responses: Vec<Result<Statistics, String>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[derive(Debug)]
struct ScriptedFailure(String);

impl std::fmt::Display for ScriptedFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ScriptedFailure {}

impl StatisticsProvider for ScriptedProvider {
    fn fetch_statistics(&self) -> impl Future<Output = Result<Statistics, RescueError>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut responses = self.responses.lock().unwrap();
        let next = if responses.len() > 1 {
            responses.remove(0)
        } else {
            responses[0].clone()
        };
        async move { next.map_err(|msg| RescueError::Storage(Box::new(ScriptedFailure(msg)))) }
    }
}

/// Reporter that remembers every report.
#[derive(Default)]
pub struct RecordingReporter {
    reports: Mutex<Vec<(String, String)>>,
}

impl RecordingReporter {
    pub fn reports(&self) -> Vec<(String, String)> {
        self.reports.lock().unwrap().clone()
    }
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, label: &str, message: &str) {
        self.reports
            .lock()
            .unwrap()
            .push((label.to_string(), message.to_string()));
    }
}
