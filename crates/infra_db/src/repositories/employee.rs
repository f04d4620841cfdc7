//! Employee table access

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::error::DatabaseError;

/// Repository for the `employees` table
#[derive(Debug, Clone)]
pub struct EmployeeTable {
    pool: PgPool,
}

/// A row of the `employees` table
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct EmployeeRow {
    pub site_id: String,
    pub employee_code: String,
    pub employee_name: Option<String>,
    pub occupation: Option<String>,
    pub employee_status: Option<String>,
    pub email_address: Option<String>,
    pub phone: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,
}

impl EmployeeTable {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns the rows matching both optional key halves
    pub async fn select(
        &self,
        site_id: Option<&str>,
        employee_code: Option<&str>,
    ) -> Result<Vec<EmployeeRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT
                site_id,
                employee_code,
                employee_name,
                occupation,
                employee_status,
                email_address,
                phone,
                last_modified
            FROM employees
            WHERE ($1::text IS NULL OR site_id = $1)
              AND ($2::text IS NULL OR employee_code = $2)
            ORDER BY site_id, employee_code
            "#,
        )
        .bind(site_id)
        .bind(employee_code)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Inserts a row, returning the number of rows written
    pub async fn insert(&self, row: &EmployeeRow) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            r#"
            INSERT INTO employees (
                site_id, employee_code, employee_name, occupation,
                employee_status, email_address, phone, last_modified
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(&row.site_id)
        .bind(&row.employee_code)
        .bind(&row.employee_name)
        .bind(&row.occupation)
        .bind(&row.employee_status)
        .bind(&row.email_address)
        .bind(&row.phone)
        .bind(row.last_modified)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Overwrites the row with the same key, returning the number of rows changed
    pub async fn update(&self, row: &EmployeeRow) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            r#"
            UPDATE employees SET
                employee_name = $3,
                occupation = $4,
                employee_status = $5,
                email_address = $6,
                phone = $7,
                last_modified = $8
            WHERE site_id = $1 AND employee_code = $2
            "#,
        )
        .bind(&row.site_id)
        .bind(&row.employee_code)
        .bind(&row.employee_name)
        .bind(&row.occupation)
        .bind(&row.employee_status)
        .bind(&row.email_address)
        .bind(&row.phone)
        .bind(row.last_modified)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete(
        &self,
        site_id: Option<&str>,
        employee_code: Option<&str>,
    ) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            r#"
            DELETE FROM employees
            WHERE ($1::text IS NULL OR site_id = $1)
              AND ($2::text IS NULL OR employee_code = $2)
            "#,
        )
        .bind(site_id)
        .bind(employee_code)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
