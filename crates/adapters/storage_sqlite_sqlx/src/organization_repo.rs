//! `SQLite` implementation of [`OrganizationRepository`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use rescuehub_app::ports::OrganizationRepository;
use rescuehub_domain::error::RescueError;
use rescuehub_domain::id::OrganizationId;
use rescuehub_domain::organization::Organization;

use crate::error::{StorageError, count, decode_error};

/// Wrapper for converting database rows into domain [`Organization`].
struct Wrapper(Organization);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let country: String = row.try_get("country")?;
        let active: bool = row.try_get("active")?;

        let id = OrganizationId::from_str(&id).map_err(decode_error)?;

        Ok(Self(Organization {
            id,
            name,
            country,
            active,
        }))
    }
}

const INSERT: &str = "INSERT INTO organizations (id, name, country, active) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM organizations WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM organizations ORDER BY name";
const COUNT_ACTIVE: &str = "SELECT COUNT(*) FROM organizations WHERE active = 1";
const ACTIVE_COUNTRIES: &str =
    "SELECT DISTINCT country FROM organizations WHERE active = 1 ORDER BY country";

/// `SQLite`-backed organization repository.
#[derive(Clone)]
pub struct SqliteOrganizationRepository {
    pool: SqlitePool,
}

impl SqliteOrganizationRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl OrganizationRepository for SqliteOrganizationRepository {
    fn create(
        &self,
        organization: Organization,
    ) -> impl Future<Output = Result<Organization, RescueError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(organization.id.to_string())
                .bind(&organization.name)
                .bind(&organization.country)
                .bind(organization.active)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(organization)
        }
    }

    fn get_by_id(
        &self,
        id: OrganizationId,
    ) -> impl Future<Output = Result<Option<Organization>, RescueError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Organization>, RescueError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn count_active(&self) -> impl Future<Output = Result<u64, RescueError>> + Send {
        let pool = self.pool.clone();
        async move {
            let total: i64 = sqlx::query_scalar(COUNT_ACTIVE)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(count(total))
        }
    }

    fn active_countries(&self) -> impl Future<Output = Result<Vec<String>, RescueError>> + Send {
        let pool = self.pool.clone();
        async move {
            let countries: Vec<String> = sqlx::query_scalar(ACTIVE_COUNTRIES)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(countries)
        }
    }
}
