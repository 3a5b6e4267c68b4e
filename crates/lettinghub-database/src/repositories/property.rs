//! Property repository implementation.
//!
//! Uniqueness of title, postal code, street address, interior, and surface
//! area is enforced by per-column unique indexes; violations are translated
//! into Conflict errors here so the service layer never sees a raw driver
//! error for a duplicate listing.

use rust_decimal::Decimal;
use sqlx::PgPool;

use lettinghub_core::error::{AppError, ErrorKind};
use lettinghub_core::result::AppResult;
use lettinghub_entity::property::{CreateProperty, HouseType, LocationType, Property};

const INSERT_COLUMNS: &str = "title, description, rental_condition, interior, surface_area, \
     postal_code, street_address, available_date, location_type, house_type, \
     rent_amount, security_deposit, quantity, bedrooms, image, image2, image3, image4";

/// Repository for property CRUD and query operations.
#[derive(Debug, Clone)]
pub struct PropertyRepository {
    pool: PgPool,
}

impl PropertyRepository {
    /// Create a new property repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new property and return the stored row.
    pub async fn create(&self, data: &CreateProperty) -> AppResult<Property> {
        let sql = format!(
            "INSERT INTO properties ({INSERT_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18) \
             RETURNING *"
        );

        sqlx::query_as::<_, Property>(&sql)
            .bind(&data.title)
            .bind(&data.description)
            .bind(&data.rental_condition)
            .bind(&data.interior)
            .bind(&data.surface_area)
            .bind(&data.postal_code)
            .bind(&data.street_address)
            .bind(&data.available_date)
            .bind(data.location_type)
            .bind(data.house_type)
            .bind(data.rent_amount)
            .bind(data.security_deposit)
            .bind(data.quantity)
            .bind(data.bedrooms)
            .bind(&data.image)
            .bind(&data.image2)
            .bind(&data.image3)
            .bind(&data.image4)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                unique_violation(&e, data).unwrap_or_else(|| {
                    AppError::with_source(ErrorKind::Database, "Failed to create property", e)
                })
            })
    }

    /// Fully overwrite an existing property's fields, keeping its id,
    /// creation time, and rented flag. Returns `None` if the id is unknown.
    pub async fn update(&self, id: i64, data: &CreateProperty) -> AppResult<Option<Property>> {
        let sql = "UPDATE properties SET \
                title = $2, description = $3, rental_condition = $4, interior = $5, \
                surface_area = $6, postal_code = $7, street_address = $8, \
                available_date = $9, location_type = $10, house_type = $11, \
                rent_amount = $12, security_deposit = $13, quantity = $14, \
                bedrooms = $15, image = $16, image2 = $17, image3 = $18, image4 = $19, \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *";

        sqlx::query_as::<_, Property>(sql)
            .bind(id)
            .bind(&data.title)
            .bind(&data.description)
            .bind(&data.rental_condition)
            .bind(&data.interior)
            .bind(&data.surface_area)
            .bind(&data.postal_code)
            .bind(&data.street_address)
            .bind(&data.available_date)
            .bind(data.location_type)
            .bind(data.house_type)
            .bind(data.rent_amount)
            .bind(data.security_deposit)
            .bind(data.quantity)
            .bind(data.bedrooms)
            .bind(&data.image)
            .bind(&data.image2)
            .bind(&data.image3)
            .bind(&data.image4)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                unique_violation(&e, data).unwrap_or_else(|| {
                    AppError::with_source(ErrorKind::Database, "Failed to update property", e)
                })
            })
    }

    /// Update only the rented flag. Returns `None` if the id is unknown.
    pub async fn set_rented(&self, id: i64, is_rented: bool) -> AppResult<Option<Property>> {
        sqlx::query_as::<_, Property>(
            "UPDATE properties SET is_rented = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(is_rented)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update rented status", e)
        })
    }

    /// Find a property by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Property>> {
        sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find property by id", e)
            })
    }

    /// Check whether a property with the given id exists.
    pub async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM properties WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check property existence", e)
            })
    }

    /// Delete a property by id. Returns `true` if a row was removed.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete property", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    /// List all properties in insertion order.
    pub async fn find_all(&self) -> AppResult<Vec<Property>> {
        sqlx::query_as::<_, Property>("SELECT * FROM properties ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list properties", e))
    }

    /// List properties in the given city.
    pub async fn find_by_location(&self, location: LocationType) -> AppResult<Vec<Property>> {
        sqlx::query_as::<_, Property>(
            "SELECT * FROM properties WHERE location_type = $1 ORDER BY id",
        )
        .bind(location)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list properties by location", e)
        })
    }

    /// List properties of the given house type.
    pub async fn find_by_house_type(&self, house_type: HouseType) -> AppResult<Vec<Property>> {
        sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE house_type = $1 ORDER BY id")
            .bind(house_type)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    "Failed to list properties by house type",
                    e,
                )
            })
    }

    /// List properties whose surface area contains the given substring,
    /// ignoring case.
    pub async fn find_by_surface_area_containing(
        &self,
        surface_area: &str,
    ) -> AppResult<Vec<Property>> {
        let pattern = format!("%{surface_area}%");
        sqlx::query_as::<_, Property>(
            "SELECT * FROM properties WHERE surface_area ILIKE $1 ORDER BY id",
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to search properties by surface area",
                e,
            )
        })
    }

    /// List properties whose interior description contains the given
    /// substring, ignoring case.
    pub async fn find_by_interior_containing(&self, interior: &str) -> AppResult<Vec<Property>> {
        let pattern = format!("%{interior}%");
        sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE interior ILIKE $1 ORDER BY id")
            .bind(pattern)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    "Failed to search properties by interior",
                    e,
                )
            })
    }

    /// List properties with rent at or below the given amount.
    pub async fn find_by_rent_at_most(&self, rent_amount: Decimal) -> AppResult<Vec<Property>> {
        sqlx::query_as::<_, Property>(
            "SELECT * FROM properties WHERE rent_amount <= $1 ORDER BY id",
        )
        .bind(rent_amount)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to search properties by rent", e)
        })
    }

    /// Check whether a property with the given title exists.
    pub async fn exists_by_title(&self, title: &str) -> AppResult<bool> {
        self.exists_where("title", title).await
    }

    /// Check whether a property with the given postal code exists.
    pub async fn exists_by_postal_code(&self, postal_code: &str) -> AppResult<bool> {
        self.exists_where("postal_code", postal_code).await
    }

    /// Check whether a property with the given street address exists.
    pub async fn exists_by_street_address(&self, street_address: &str) -> AppResult<bool> {
        self.exists_where("street_address", street_address).await
    }

    /// Check whether a property with the given interior description exists.
    pub async fn exists_by_interior(&self, interior: &str) -> AppResult<bool> {
        self.exists_where("interior", interior).await
    }

    /// Check whether a property with the given surface area exists.
    pub async fn exists_by_surface_area(&self, surface_area: &str) -> AppResult<bool> {
        self.exists_where("surface_area", surface_area).await
    }

    /// Count total properties.
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM properties")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count properties", e)
            })?;
        Ok(count as u64)
    }

    // `column` is always one of the fixed identifiers above, never user input.
    async fn exists_where(&self, column: &str, value: &str) -> AppResult<bool> {
        let sql = format!("SELECT EXISTS(SELECT 1 FROM properties WHERE {column} = $1)");
        sqlx::query_scalar::<_, bool>(&sql)
            .bind(value)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to check property existence by {column}"),
                    e,
                )
            })
    }
}

/// Translate a unique-index violation into a Conflict error naming the
/// offending value, or `None` if the error is anything else.
fn unique_violation(e: &sqlx::Error, data: &CreateProperty) -> Option<AppError> {
    let sqlx::Error::Database(db_err) = e else {
        return None;
    };

    let message = match db_err.constraint()? {
        "uq_properties_title" => {
            format!("Property already exists with title '{}'", data.title)
        }
        "uq_properties_postal_code" => {
            format!("Property already exists with postal code '{}'", data.postal_code)
        }
        "uq_properties_street_address" => {
            format!("Property already exists with address '{}'", data.street_address)
        }
        "uq_properties_interior" => {
            format!("Property already exists with interior '{}'", data.interior)
        }
        "uq_properties_surface_area" => {
            format!("Property already exists with surface area '{}'", data.surface_area)
        }
        _ => return None,
    };

    Some(AppError::conflict(message))
}
