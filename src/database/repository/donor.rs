use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{qualified_columns, Donor, DonorWithCount};
use crate::validation::DonorSchema;

pub struct DonorRepository {
    pool: PgPool,
}

impl DonorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<DonorWithCount>, DatabaseError> {
        let query = format!(
            "SELECT {cols}, \
                 (SELECT COUNT(*) FROM donations d WHERE d.donor_id = dn.id) AS donation_count \
             FROM donors dn \
             ORDER BY dn.created_at DESC",
            cols = qualified_columns("dn", Donor::COLUMNS)
        );
        let rows = sqlx::query_as::<_, DonorWithCount>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn create(&self, input: &DonorSchema) -> Result<Donor, DatabaseError> {
        let query = format!(
            "INSERT INTO donors (id, name, email, phone, address) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {}",
            Donor::COLUMNS.join(", ")
        );
        let donor = sqlx::query_as::<_, Donor>(&query)
            .bind(Uuid::new_v4())
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.address)
            .fetch_one(&self.pool)
            .await?;
        Ok(donor)
    }
}
