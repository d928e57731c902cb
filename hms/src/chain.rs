use abi::{ChainForm, ChainId, Error, HotelChain, Validator};
use async_trait::async_trait;
use tracing::info;

use crate::{cascade::Owner, ChainRepo, HmsManager};

#[async_trait]
impl ChainRepo for HmsManager {
    async fn create_chain(&self, form: ChainForm) -> Result<HotelChain, Error> {
        form.validate()?;

        let chain: HotelChain = sqlx::query_as(
            r#"
            INSERT INTO hms.hotel_chains (name, email, number_hotels, phone_number, address)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(form.name)
        .bind(form.email)
        .bind(form.number_hotels)
        .bind(form.phone_number)
        .bind(form.address)
        .fetch_one(&self.pool)
        .await?;

        info!("created hotel chain {} ({})", chain.id, chain.name);
        Ok(chain)
    }

    async fn fetch_chains(&self) -> Result<Vec<HotelChain>, Error> {
        let chains = sqlx::query_as("SELECT * FROM hms.hotel_chains ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(chains)
    }

    async fn fetch_chain(&self, id: ChainId) -> Result<HotelChain, Error> {
        sqlx::query_as("SELECT * FROM hms.hotel_chains WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::not_found("hotel chain", id))
    }

    async fn update_chain(&self, id: ChainId, form: ChainForm) -> Result<HotelChain, Error> {
        form.validate()?;

        sqlx::query_as(
            r#"
            UPDATE hms.hotel_chains
            SET name = $2, email = $3, number_hotels = $4, phone_number = $5, address = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(form.name)
        .bind(form.email)
        .bind(form.number_hotels)
        .bind(form.phone_number)
        .bind(form.address)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::not_found("hotel chain", id))
    }

    async fn delete_chain(&self, id: ChainId) -> Result<HotelChain, Error> {
        let mut tx = self.pool.begin().await?;

        // lock the row so no hotel can be attached while we decide
        let chain: HotelChain =
            sqlx::query_as("SELECT * FROM hms.hotel_chains WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| Error::not_found("hotel chain", id))?;

        Owner::Chain(id).release(self.policy, &mut *tx).await?;

        sqlx::query("DELETE FROM hms.hotel_chains WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        info!("deleted hotel chain {}", id);
        Ok(chain)
    }
}
