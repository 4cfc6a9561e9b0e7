use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{
    joined_columns, qualified_columns, Campaign, Expense, ExpenseExportRow, ExpenseWithCampaign,
};
use crate::validation::ExpenseSchema;

pub struct ExpenseRepository {
    pool: PgPool,
}

impl ExpenseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<ExpenseWithCampaign>, DatabaseError> {
        let query = format!(
            "SELECT {expense}, {campaign} \
             FROM expenses e \
             LEFT JOIN campaigns campaign ON campaign.id = e.campaign_id \
             ORDER BY e.created_at DESC",
            expense = qualified_columns("e", Expense::COLUMNS),
            campaign = joined_columns("campaign", Campaign::COLUMNS),
        );
        let rows = sqlx::query_as::<_, ExpenseWithCampaign>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn create(&self, input: &ExpenseSchema) -> Result<Expense, DatabaseError> {
        let query = format!(
            "INSERT INTO expenses (id, description, amount, category, campaign_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {}",
            Expense::COLUMNS.join(", ")
        );
        let expense = sqlx::query_as::<_, Expense>(&query)
            .bind(Uuid::new_v4())
            .bind(&input.description)
            .bind(input.amount)
            .bind(&input.category)
            .bind(input.campaign_uuid())
            .fetch_one(&self.pool)
            .await?;
        Ok(expense)
    }

    /// Overwrite every editable field. `id` and `created_at` are preserved.
    pub async fn update(&self, id: Uuid, input: &ExpenseSchema) -> Result<Expense, DatabaseError> {
        let query = format!(
            "UPDATE expenses \
             SET description = $2, amount = $3, category = $4, campaign_id = $5, updated_at = now() \
             WHERE id = $1 \
             RETURNING {}",
            Expense::COLUMNS.join(", ")
        );
        sqlx::query_as::<_, Expense>(&query)
            .bind(id)
            .bind(&input.description)
            .bind(input.amount)
            .bind(&input.category)
            .bind(input.campaign_uuid())
            .fetch_optional(&self.pool)
            .await?
            .ok_or(DatabaseError::NotFound("Expense"))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound("Expense"));
        }
        Ok(())
    }

    /// Sum of every expense amount; 0 when there are none
    pub async fn total_amount(&self) -> Result<f64, DatabaseError> {
        let total: f64 = sqlx::query_scalar("SELECT COALESCE(SUM(amount), 0)::DOUBLE PRECISION FROM expenses")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    /// Every expense with its campaign name, newest first
    pub async fn export_rows(&self) -> Result<Vec<ExpenseExportRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, ExpenseExportRow>(
            "SELECT e.created_at, e.description, e.amount, e.category, c.name AS campaign_name \
             FROM expenses e \
             LEFT JOIN campaigns c ON c.id = e.campaign_id \
             ORDER BY e.created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
