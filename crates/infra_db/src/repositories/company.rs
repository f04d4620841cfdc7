//! Company table access
//!
//! SQL for the `companies` table. Queries are built at runtime so the crate
//! compiles without a reachable database; each filter half is bound as a
//! nullable parameter and a NULL parameter matches every row.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::error::DatabaseError;

/// Repository for the `companies` table
#[derive(Debug, Clone)]
pub struct CompanyTable {
    pool: PgPool,
}

/// A row of the `companies` table
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct CompanyRow {
    pub site_id: String,
    pub company_code: String,
    pub company_name: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub address_line3: Option<String>,
    pub country: Option<String>,
    pub equipment_company_code: Option<String>,
    pub fax_number: Option<String>,
    pub phone_number: Option<String>,
    pub postal_zip_code: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,
}

const SELECT_COMPANIES: &str = r#"
    SELECT
        site_id,
        company_code,
        company_name,
        address_line1,
        address_line2,
        address_line3,
        country,
        equipment_company_code,
        fax_number,
        phone_number,
        postal_zip_code,
        last_modified
    FROM companies
    WHERE ($1::text IS NULL OR site_id = $1)
      AND ($2::text IS NULL OR company_code = $2)
    ORDER BY site_id, company_code
"#;

impl CompanyTable {
    /// Creates a new CompanyTable with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns the rows matching both optional key halves
    ///
    /// # Arguments
    ///
    /// * `site_id` - Site to match, or `None` for every site
    /// * `company_code` - Code to match, or `None` for every code
    pub async fn select(
        &self,
        site_id: Option<&str>,
        company_code: Option<&str>,
    ) -> Result<Vec<CompanyRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, CompanyRow>(SELECT_COMPANIES)
            .bind(site_id)
            .bind(company_code)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    /// Inserts a row
    ///
    /// # Returns
    ///
    /// The number of rows written
    ///
    /// # Errors
    ///
    /// `DatabaseError::DuplicateEntry` if the key already exists
    pub async fn insert(&self, row: &CompanyRow) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            r#"
            INSERT INTO companies (
                site_id, company_code, company_name,
                address_line1, address_line2, address_line3,
                country, equipment_company_code, fax_number,
                phone_number, postal_zip_code, last_modified
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(&row.site_id)
        .bind(&row.company_code)
        .bind(&row.company_name)
        .bind(&row.address_line1)
        .bind(&row.address_line2)
        .bind(&row.address_line3)
        .bind(&row.country)
        .bind(&row.equipment_company_code)
        .bind(&row.fax_number)
        .bind(&row.phone_number)
        .bind(&row.postal_zip_code)
        .bind(row.last_modified)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Overwrites every non-key column of the row with the same key
    ///
    /// # Returns
    ///
    /// The number of rows changed; zero when the key does not exist
    pub async fn update(&self, row: &CompanyRow) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            r#"
            UPDATE companies SET
                company_name = $3,
                address_line1 = $4,
                address_line2 = $5,
                address_line3 = $6,
                country = $7,
                equipment_company_code = $8,
                fax_number = $9,
                phone_number = $10,
                postal_zip_code = $11,
                last_modified = $12
            WHERE site_id = $1 AND company_code = $2
            "#,
        )
        .bind(&row.site_id)
        .bind(&row.company_code)
        .bind(&row.company_name)
        .bind(&row.address_line1)
        .bind(&row.address_line2)
        .bind(&row.address_line3)
        .bind(&row.country)
        .bind(&row.equipment_company_code)
        .bind(&row.fax_number)
        .bind(&row.phone_number)
        .bind(&row.postal_zip_code)
        .bind(row.last_modified)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Deletes the rows matching both optional key halves
    pub async fn delete(
        &self,
        site_id: Option<&str>,
        company_code: Option<&str>,
    ) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            r#"
            DELETE FROM companies
            WHERE ($1::text IS NULL OR site_id = $1)
              AND ($2::text IS NULL OR company_code = $2)
            "#,
        )
        .bind(site_id)
        .bind(company_code)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
