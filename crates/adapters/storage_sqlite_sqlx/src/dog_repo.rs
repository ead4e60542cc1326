//! `SQLite` implementation of [`DogRepository`].

use std::future::Future;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use rescuehub_app::ports::DogRepository;
use rescuehub_domain::dog::{AdoptionStatus, Dog, PreviewDog};
use rescuehub_domain::error::{RescueError, ValidationError};
use rescuehub_domain::id::{DogId, OrganizationId};
use rescuehub_domain::time::Timestamp;

use crate::error::{StorageError, count, decode_error};

/// Wrapper for converting database rows into domain [`Dog`].
struct Wrapper(Dog);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let organization_id: String = row.try_get("organization_id")?;
        let status: String = row.try_get("status")?;
        let created_at: String = row.try_get("created_at")?;

        Ok(Self(Dog {
            id: DogId::from_str(&id).map_err(decode_error)?,
            name: row.try_get("name")?,
            slug: row.try_get("slug")?,
            breed: row.try_get("breed")?,
            age_text: row.try_get("age_text")?,
            image_url: row.try_get("image_url")?,
            organization_id: OrganizationId::from_str(&organization_id).map_err(decode_error)?,
            status: AdoptionStatus::from_str(&status).map_err(decode_error)?,
            created_at: DateTime::parse_from_rfc3339(&created_at)
                .map_err(decode_error)?
                .with_timezone(&Utc),
        }))
    }
}

/// Wrapper for the joined dog + organization preview rows.
struct PreviewWrapper(PreviewDog);

impl<'r> FromRow<'r, SqliteRow> for PreviewWrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;

        Ok(Self(PreviewDog {
            id: DogId::from_str(&id).map_err(decode_error)?,
            name: row.try_get("name")?,
            slug: row.try_get("slug")?,
            breed: row.try_get("breed")?,
            age_text: row.try_get("age_text")?,
            image_url: row.try_get("image_url")?,
            organization_name: row.try_get("organization_name")?,
            country: row.try_get("country")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO dogs (id, name, slug, breed, age_text, image_url, organization_id, status, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM dogs WHERE id = ?";
const COUNT_AVAILABLE: &str = "SELECT COUNT(*) FROM dogs d \
    JOIN organizations o ON o.id = d.organization_id \
    WHERE d.status = 'available' AND o.active = 1";
const SELECT_PREVIEW_BY_SLUG: &str = "SELECT d.id, d.name, d.slug, d.breed, d.age_text, \
    d.image_url, o.name AS organization_name, o.country AS country \
    FROM dogs d JOIN organizations o ON o.id = d.organization_id \
    WHERE d.slug = ?";
// A negative LIMIT means "no limit" in SQLite.
const SELECT_AVAILABLE: &str = "SELECT d.id, d.name, d.slug, d.breed, d.age_text, d.image_url, \
    o.name AS organization_name, o.country AS country \
    FROM dogs d JOIN organizations o ON o.id = d.organization_id \
    WHERE d.status = 'available' AND o.active = 1 \
    ORDER BY d.created_at DESC, d.name \
    LIMIT ?";

/// Fixed-width RFC 3339 so that text ordering matches time ordering.
fn encode_timestamp(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// `SQLite`-backed dog repository.
#[derive(Clone)]
pub struct SqliteDogRepository {
    pool: SqlitePool,
}

impl SqliteDogRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl DogRepository for SqliteDogRepository {
    fn create(&self, dog: Dog) -> impl Future<Output = Result<Dog, RescueError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(dog.id.to_string())
                .bind(&dog.name)
                .bind(&dog.slug)
                .bind(&dog.breed)
                .bind(&dog.age_text)
                .bind(&dog.image_url)
                .bind(dog.organization_id.to_string())
                .bind(dog.status.as_str())
                .bind(encode_timestamp(dog.created_at))
                .execute(&pool)
                .await;

            match result {
                Ok(_) => Ok(dog),
                Err(sqlx::Error::Database(err)) if err.is_unique_violation() => {
                    Err(ValidationError::DuplicateSlug(dog.slug).into())
                }
                Err(err) => Err(StorageError::from(err).into()),
            }
        }
    }

    fn get_by_id(
        &self,
        id: DogId,
    ) -> impl Future<Output = Result<Option<Dog>, RescueError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|w| w.0))
        }
    }

    fn get_preview_by_slug(
        &self,
        slug: &str,
    ) -> impl Future<Output = Result<Option<PreviewDog>, RescueError>> + Send {
        let pool = self.pool.clone();
        let slug = slug.to_owned();
        async move {
            let row: Option<PreviewWrapper> = sqlx::query_as(SELECT_PREVIEW_BY_SLUG)
                .bind(slug)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|w| w.0))
        }
    }

    fn count_available(&self) -> impl Future<Output = Result<u64, RescueError>> + Send {
        let pool = self.pool.clone();
        async move {
            let total: i64 = sqlx::query_scalar(COUNT_AVAILABLE)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(count(total))
        }
    }

    fn find_available(
        &self,
        limit: Option<u32>,
    ) -> impl Future<Output = Result<Vec<PreviewDog>, RescueError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<PreviewWrapper> = sqlx::query_as(SELECT_AVAILABLE)
                .bind(limit.map_or(-1, i64::from))
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
