use abi::{Booking, BookingForm, BookingId, CustomerId, Error, Validator};
use async_trait::async_trait;
use tracing::info;

use crate::{BookingRepo, HmsManager};

#[async_trait]
impl BookingRepo for HmsManager {
    async fn create_booking(&self, form: BookingForm) -> Result<Booking, Error> {
        form.validate()?;

        // overlapping stays of the same room are rejected by bookings_room_stay_excl
        let booking: Booking = sqlx::query_as(
            r#"
            INSERT INTO hms.bookings (room_id, customer_id, start_date, end_date, rental_price, additional_charge)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(form.room_id)
        .bind(form.customer_id)
        .bind(form.start_date)
        .bind(form.end_date)
        .bind(form.rental_price)
        .bind(form.additional_charge)
        .fetch_one(&self.pool)
        .await?;

        info!(
            "booked room {} for customer {} ({} night(s))",
            booking.room_id,
            booking.customer_id,
            form.nights()
        );
        Ok(booking)
    }

    async fn fetch_booking(&self, id: BookingId) -> Result<Booking, Error> {
        sqlx::query_as("SELECT * FROM hms.bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::not_found("booking", id))
    }

    async fn fetch_bookings_of_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Booking>, Error> {
        let bookings = sqlx::query_as(
            "SELECT * FROM hms.bookings WHERE customer_id = $1 ORDER BY start_date, id",
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(bookings)
    }
}

#[cfg(test)]
mod tests {
    use abi::{parse_date, BookingConflictInfo, DeletePolicy};

    use super::*;
    use crate::test_utils::{seed_chain, seed_hotel, seed_room, test_manager};

    fn form(room_id: i64, customer_id: i64, start: &str, end: &str) -> BookingForm {
        BookingForm::new(
            room_id,
            customer_id,
            parse_date(start).unwrap(),
            parse_date(end).unwrap(),
            800.0,
        )
    }

    async fn room_manager() -> (sqlx_db_tester::TestDb, HmsManager, i64) {
        let (tdb, manager) = test_manager(DeletePolicy::Restrict).await;
        let chain = seed_chain(&manager).await;
        let hotel = seed_hotel(&manager, chain.id).await;
        let room = seed_room(&manager, hotel.id, 111).await;
        (tdb, manager, room.id)
    }

    #[tokio::test]
    async fn create_booking_should_work() {
        let (_tdb, manager, room_id) = room_manager().await;
        let mut form = form(room_id, 1, "2023-03-06", "2023-03-14");
        form.additional_charge = 40.0;

        let booking = manager.create_booking(form).await.unwrap();
        assert_eq!(booking.id, 1);
        assert_eq!(booking.room_id, room_id);
        assert_eq!(booking.customer_id, 1);
        assert_eq!(booking.start_date, parse_date("2023-03-06").unwrap());
        assert_eq!(booking.end_date, parse_date("2023-03-14").unwrap());
        assert_eq!(booking.rental_price, 800.0);
        assert_eq!(booking.additional_charge, 40.0);
        assert_eq!(manager.fetch_booking(booking.id).await.unwrap(), booking);
    }

    #[tokio::test]
    async fn overlapping_booking_should_conflict() {
        let (_tdb, manager, room_id) = room_manager().await;
        manager
            .create_booking(form(room_id, 1, "2023-03-01", "2023-03-10"))
            .await
            .unwrap();

        let err = manager
            .create_booking(form(room_id, 2, "2023-03-06", "2023-03-14"))
            .await
            .unwrap_err();
        if let Error::ConflictBooking(BookingConflictInfo::Parsed(info)) = err {
            assert_eq!(info.new.room_id, room_id);
            assert_eq!(info.new.start, parse_date("2023-03-06").unwrap());
            assert_eq!(info.old.start, parse_date("2023-03-01").unwrap());
            assert_eq!(info.old.end, parse_date("2023-03-10").unwrap());
        } else {
            panic!("expected a booking conflict, got {:?}", err);
        }
        assert!(manager
            .fetch_bookings_of_customer(2)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn adjacent_bookings_should_not_conflict() {
        let (_tdb, manager, room_id) = room_manager().await;
        manager
            .create_booking(form(room_id, 1, "2023-03-01", "2023-03-06"))
            .await
            .unwrap();
        manager
            .create_booking(form(room_id, 2, "2023-03-06", "2023-03-14"))
            .await
            .unwrap();
        manager
            .create_booking(form(room_id, 3, "2023-02-20", "2023-03-01"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn concurrent_overlapping_bookings_should_admit_one() {
        let (_tdb, manager, room_id) = room_manager().await;

        let (a, b) = futures::future::join(
            manager.create_booking(form(room_id, 1, "2023-03-06", "2023-03-14")),
            manager.create_booking(form(room_id, 2, "2023-03-08", "2023-03-20")),
        )
        .await;

        let ok = [&a, &b].iter().filter(|r| r.is_ok()).count();
        assert_eq!(ok, 1);
        let err = if a.is_err() { a } else { b };
        assert!(matches!(err, Err(Error::ConflictBooking(_))));
    }

    #[tokio::test]
    async fn booking_of_missing_room_should_fail() {
        let (_tdb, manager) = test_manager(DeletePolicy::Restrict).await;
        let err = manager
            .create_booking(form(5, 1, "2023-03-06", "2023-03-14"))
            .await
            .unwrap_err();
        assert_eq!(err, Error::ForeignKey("room".into()));
    }

    #[tokio::test]
    async fn empty_stay_should_be_rejected() {
        let (_tdb, manager, room_id) = room_manager().await;
        let err = manager
            .create_booking(form(room_id, 1, "2023-03-06", "2023-03-06"))
            .await
            .unwrap_err();
        assert_eq!(err, Error::InvalidDateRange);
    }

    #[tokio::test]
    async fn bookings_of_customer_should_be_ordered_by_start() {
        let (_tdb, manager, room_id) = room_manager().await;
        manager
            .create_booking(form(room_id, 7, "2023-04-01", "2023-04-03"))
            .await
            .unwrap();
        manager
            .create_booking(form(room_id, 7, "2023-03-01", "2023-03-03"))
            .await
            .unwrap();
        manager
            .create_booking(form(room_id, 8, "2023-05-01", "2023-05-03"))
            .await
            .unwrap();

        let bookings = manager.fetch_bookings_of_customer(7).await.unwrap();
        let starts: Vec<_> = bookings.iter().map(|b| b.start_date.to_string()).collect();
        assert_eq!(starts, vec!["2023-03-01", "2023-04-01"]);
    }

    #[tokio::test]
    async fn fetch_missing_booking_should_be_not_found() {
        let (_tdb, manager) = test_manager(DeletePolicy::Restrict).await;
        let err = manager.fetch_booking(3).await.unwrap_err();
        assert_eq!(err, Error::not_found("booking", 3));
    }
}
