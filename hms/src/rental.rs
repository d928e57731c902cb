use abi::{Booking, BookingId, CustomerId, Error, Rental, RentalId};
use async_trait::async_trait;
use tracing::info;

use crate::{HmsManager, RentalRepo};

#[async_trait]
impl RentalRepo for HmsManager {
    async fn create_rental(
        &self,
        booking_id: BookingId,
        customer_id: CustomerId,
    ) -> Result<Rental, Error> {
        let mut tx = self.pool.begin().await?;

        // a booking of someone else is reported the same way as a missing one
        let booking: Booking =
            sqlx::query_as("SELECT * FROM hms.bookings WHERE id = $1 AND customer_id = $2 FOR UPDATE")
                .bind(booking_id)
                .bind(customer_id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| {
                    Error::NotFound(format!(
                        "booking {} of customer {}",
                        booking_id, customer_id
                    ))
                })?;

        let rental: Rental = sqlx::query_as(
            r#"
            INSERT INTO hms.rentals (booking_id, customer_id, room_id, start_date, end_date, total_price)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(booking.id)
        .bind(booking.customer_id)
        .bind(booking.room_id)
        .bind(booking.start_date)
        .bind(booking.end_date)
        .bind(booking.total_price())
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        info!(
            "booking {} converted into rental {} for customer {}",
            booking_id, rental.id, customer_id
        );
        Ok(rental)
    }

    async fn fetch_rental(&self, id: RentalId) -> Result<Rental, Error> {
        sqlx::query_as("SELECT * FROM hms.rentals WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::not_found("rental", id))
    }

    async fn fetch_rentals_of_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Rental>, Error> {
        let rentals =
            sqlx::query_as("SELECT * FROM hms.rentals WHERE customer_id = $1 ORDER BY start_date, id")
                .bind(customer_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(rentals)
    }
}
