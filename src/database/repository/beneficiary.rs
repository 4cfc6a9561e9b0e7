use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::Beneficiary;
use crate::validation::BeneficiarySchema;

pub struct BeneficiaryRepository {
    pool: PgPool,
}

impl BeneficiaryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Beneficiary>, DatabaseError> {
        let query = format!(
            "SELECT {} FROM beneficiaries ORDER BY created_at DESC",
            Beneficiary::COLUMNS.join(", ")
        );
        let rows = sqlx::query_as::<_, Beneficiary>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn create(&self, input: &BeneficiarySchema) -> Result<Beneficiary, DatabaseError> {
        let query = format!(
            "INSERT INTO beneficiaries (id, name, description, contact_info) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {}",
            Beneficiary::COLUMNS.join(", ")
        );
        let beneficiary = sqlx::query_as::<_, Beneficiary>(&query)
            .bind(Uuid::new_v4())
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.contact_info)
            .fetch_one(&self.pool)
            .await?;
        Ok(beneficiary)
    }
}
