use abi::{ChainId, Error, Hotel, HotelForm, HotelId, Validator};
use async_trait::async_trait;
use tracing::info;

use crate::{cascade::Owner, ChainRepo, HmsManager, HotelRepo};

#[async_trait]
impl HotelRepo for HmsManager {
    async fn create_hotel(&self, chain_id: ChainId, form: HotelForm) -> Result<Hotel, Error> {
        form.validate()?;

        // a dangling chain_id or manager_id surfaces as a foreign key error
        let hotel: Hotel = sqlx::query_as(
            r#"
            INSERT INTO hms.hotels (chain_id, name, rating, number_rooms, email, manager_id, phone_number, address)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(chain_id)
        .bind(form.name)
        .bind(form.rating)
        .bind(form.number_rooms)
        .bind(form.email)
        .bind(form.manager_id)
        .bind(form.phone_number)
        .bind(form.address)
        .fetch_one(&self.pool)
        .await?;

        info!("created hotel {} in chain {}", hotel.id, chain_id);
        Ok(hotel)
    }

    async fn fetch_hotel(&self, id: HotelId) -> Result<Hotel, Error> {
        sqlx::query_as("SELECT * FROM hms.hotels WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::not_found("hotel", id))
    }

    async fn fetch_hotels_of_chain(&self, chain_id: ChainId) -> Result<Vec<Hotel>, Error> {
        // an unknown chain is an error, a chain without hotels is not
        self.fetch_chain(chain_id).await?;

        let hotels = sqlx::query_as("SELECT * FROM hms.hotels WHERE chain_id = $1 ORDER BY id")
            .bind(chain_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(hotels)
    }

    async fn update_hotel(&self, id: HotelId, form: HotelForm) -> Result<Hotel, Error> {
        form.validate()?;

        sqlx::query_as(
            r#"
            UPDATE hms.hotels
            SET chain_id = COALESCE($2, chain_id), name = $3, rating = $4, number_rooms = $5,
                email = $6, manager_id = $7, phone_number = $8, address = $9
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(form.chain_id)
        .bind(form.name)
        .bind(form.rating)
        .bind(form.number_rooms)
        .bind(form.email)
        .bind(form.manager_id)
        .bind(form.phone_number)
        .bind(form.address)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::not_found("hotel", id))
    }

    async fn delete_hotel(&self, id: HotelId) -> Result<Hotel, Error> {
        let mut tx = self.pool.begin().await?;

        let hotel: Hotel = sqlx::query_as("SELECT * FROM hms.hotels WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| Error::not_found("hotel", id))?;

        Owner::Hotel(id).release(self.policy, &mut *tx).await?;

        sqlx::query("DELETE FROM hms.hotels WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        info!("deleted hotel {}", id);
        Ok(hotel)
    }
}
