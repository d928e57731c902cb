use abi::{Error, HotelId, Normalizer, Room, RoomForm, RoomId, RoomSearch};
use async_trait::async_trait;
use tracing::{debug, info};

use crate::{cascade::Owner, HmsManager, HotelRepo, RoomRepo};

#[async_trait]
impl RoomRepo for HmsManager {
    async fn create_room(&self, hotel_id: HotelId, mut form: RoomForm) -> Result<Room, Error> {
        form.normalize()?;

        let room: Room = sqlx::query_as(
            r#"
            INSERT INTO hms.rooms (hotel_id, room_number, price_per_night, amenities, room_capacity, view_type, extendability, problems)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(hotel_id)
        .bind(form.room_number)
        .bind(form.price_per_night)
        .bind(form.amenities)
        .bind(form.room_capacity)
        .bind(form.view_type)
        .bind(form.extendability)
        .bind(form.problems)
        .fetch_one(&self.pool)
        .await?;

        info!(
            "created room {} (number {}) in hotel {}",
            room.id, room.room_number, hotel_id
        );
        Ok(room)
    }

    async fn fetch_room(&self, id: RoomId) -> Result<Room, Error> {
        sqlx::query_as("SELECT * FROM hms.rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::not_found("room", id))
    }

    async fn fetch_rooms_of_hotel(&self, hotel_id: HotelId) -> Result<Vec<Room>, Error> {
        self.fetch_hotel(hotel_id).await?;

        let rooms =
            sqlx::query_as("SELECT * FROM hms.rooms WHERE hotel_id = $1 ORDER BY room_number")
                .bind(hotel_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(rooms)
    }

    async fn update_room(&self, id: RoomId, mut form: RoomForm) -> Result<Room, Error> {
        form.normalize()?;

        sqlx::query_as(
            r#"
            UPDATE hms.rooms
            SET hotel_id = COALESCE($2, hotel_id), room_number = $3, price_per_night = $4,
                amenities = $5, room_capacity = $6, view_type = $7, extendability = $8, problems = $9
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(form.hotel_id)
        .bind(form.room_number)
        .bind(form.price_per_night)
        .bind(form.amenities)
        .bind(form.room_capacity)
        .bind(form.view_type)
        .bind(form.extendability)
        .bind(form.problems)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::not_found("room", id))
    }

    async fn delete_room(&self, id: RoomId) -> Result<Room, Error> {
        let mut tx = self.pool.begin().await?;

        let room: Room = sqlx::query_as("SELECT * FROM hms.rooms WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| Error::not_found("room", id))?;

        Owner::Room(id).release(self.policy, &mut *tx).await?;

        sqlx::query("DELETE FROM hms.rooms WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        info!("deleted room {}", id);
        Ok(room)
    }

    async fn search_rooms(
        &self,
        hotel_id: HotelId,
        mut search: RoomSearch,
    ) -> Result<Vec<Room>, Error> {
        search.normalize()?;
        self.fetch_hotel(hotel_id).await?;

        let mut query = search.to_query(hotel_id);
        debug!("room search: {}", query.sql());
        let rooms = query.build_query_as().fetch_all(&self.pool).await?;
        Ok(rooms)
    }
}

#[cfg(test)]
mod tests {
    use abi::{parse_date, BookingForm, DeletePolicy, RoomSearchBuilder};

    use super::*;
    use crate::{
        test_utils::{seed_chain, seed_hotel, seed_room, test_manager},
        BookingRepo, RentalRepo,
    };

    fn stay(start: &str, end: &str) -> RoomSearchBuilder {
        let mut builder = RoomSearchBuilder::default();
        builder
            .start_date(parse_date(start).unwrap())
            .end_date(parse_date(end).unwrap());
        builder
    }

    async fn book(manager: &HmsManager, room_id: RoomId, start: &str, end: &str) {
        manager
            .create_booking(BookingForm::new(
                room_id,
                1,
                parse_date(start).unwrap(),
                parse_date(end).unwrap(),
                200.0,
            ))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn create_room_should_work() {
        let (_tdb, manager) = test_manager(DeletePolicy::Restrict).await;
        let chain = seed_chain(&manager).await;
        let hotel = seed_hotel(&manager, chain.id).await;
        let room = seed_room(&manager, hotel.id, 111).await;

        assert_eq!(room.id, 1);
        assert_eq!(room.hotel_id, hotel.id);
        assert_eq!(room.room_number, 111);
        assert_eq!(room.price_per_night, 104.0);
        assert_eq!(room.amenities, vec!["PS5", "tv", "wifi"]);
        assert_eq!(room.room_capacity, 5);
        assert!(room.extendability);
        assert_eq!(manager.fetch_room(room.id).await.unwrap(), room);
    }

    #[tokio::test]
    async fn duplicated_room_number_should_conflict() {
        let (_tdb, manager) = test_manager(DeletePolicy::Restrict).await;
        let chain = seed_chain(&manager).await;
        let hotel = seed_hotel(&manager, chain.id).await;
        let other = seed_hotel(&manager, chain.id).await;
        seed_room(&manager, hotel.id, 111).await;

        let err = manager
            .create_room(hotel.id, RoomForm::new(111, 90.0, 2))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            Error::Conflict("room number already exists in this hotel".into())
        );

        // the same number in another hotel is fine
        assert!(manager
            .create_room(other.id, RoomForm::new(111, 90.0, 2))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn create_room_in_missing_hotel_should_fail() {
        let (_tdb, manager) = test_manager(DeletePolicy::Restrict).await;
        let err = manager
            .create_room(3, RoomForm::new(111, 90.0, 2))
            .await
            .unwrap_err();
        assert_eq!(err, Error::ForeignKey("hotel".into()));
    }

    #[tokio::test]
    async fn rooms_of_hotel_should_be_ordered_by_number() {
        let (_tdb, manager) = test_manager(DeletePolicy::Restrict).await;
        let chain = seed_chain(&manager).await;
        let hotel = seed_hotel(&manager, chain.id).await;
        seed_room(&manager, hotel.id, 202).await;
        seed_room(&manager, hotel.id, 101).await;

        let rooms = manager.fetch_rooms_of_hotel(hotel.id).await.unwrap();
        let numbers: Vec<_> = rooms.iter().map(|r| r.room_number).collect();
        assert_eq!(numbers, vec![101, 202]);
    }

    #[tokio::test]
    async fn update_room_should_replace_fields() {
        let (_tdb, manager) = test_manager(DeletePolicy::Restrict).await;
        let chain = seed_chain(&manager).await;
        let hotel = seed_hotel(&manager, chain.id).await;
        let room = seed_room(&manager, hotel.id, 111).await;

        let mut form = RoomForm::new(112, 120.0, 3);
        form.problems = "leaking tap".into();
        let updated = manager.update_room(room.id, form).await.unwrap();
        assert_eq!(updated.hotel_id, hotel.id);
        assert_eq!(updated.room_number, 112);
        assert_eq!(updated.price_per_night, 120.0);
        assert!(updated.amenities.is_empty());
        assert!(!updated.extendability);
        assert_eq!(updated.problems, "leaking tap");
    }

    #[tokio::test]
    async fn restricted_delete_should_keep_booked_room() {
        let (_tdb, manager) = test_manager(DeletePolicy::Restrict).await;
        let chain = seed_chain(&manager).await;
        let hotel = seed_hotel(&manager, chain.id).await;
        let room = seed_room(&manager, hotel.id, 111).await;
        book(&manager, room.id, "2023-03-06", "2023-03-14").await;

        let err = manager.delete_room(room.id).await.unwrap_err();
        assert_eq!(
            err,
            Error::Conflict(format!("room {} still has 1 booking(s)", room.id))
        );
        assert!(manager.fetch_room(room.id).await.is_ok());
    }

    #[tokio::test]
    async fn cascaded_delete_should_remove_bookings_and_rentals() {
        let (_tdb, manager) = test_manager(DeletePolicy::Cascade).await;
        let chain = seed_chain(&manager).await;
        let hotel = seed_hotel(&manager, chain.id).await;
        let room = seed_room(&manager, hotel.id, 111).await;
        book(&manager, room.id, "2023-03-06", "2023-03-14").await;
        let rental = manager.create_rental(1, 1).await.unwrap();

        manager.delete_room(room.id).await.unwrap();
        assert!(matches!(
            manager.fetch_booking(1).await,
            Err(Error::NotFound(_))
        ));
        assert!(matches!(
            manager.fetch_rental(rental.id).await,
            Err(Error::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn search_should_find_free_room() {
        let (_tdb, manager) = test_manager(DeletePolicy::Restrict).await;
        let chain = seed_chain(&manager).await;
        let hotel = seed_hotel(&manager, chain.id).await;
        let room = seed_room(&manager, hotel.id, 111).await;

        let search = stay("2023-03-06", "2023-03-14")
            .room_capacity(2)
            .build()
            .unwrap();
        let rooms = manager.search_rooms(hotel.id, search).await.unwrap();
        assert_eq!(rooms, vec![room]);
    }

    #[tokio::test]
    async fn search_inside_existing_booking_should_be_empty() {
        let (_tdb, manager) = test_manager(DeletePolicy::Restrict).await;
        let chain = seed_chain(&manager).await;
        let hotel = seed_hotel(&manager, chain.id).await;
        let room = seed_room(&manager, hotel.id, 111).await;
        book(&manager, room.id, "2023-03-01", "2023-03-20").await;

        let search = stay("2023-03-06", "2023-03-14").build().unwrap();
        let rooms = manager.search_rooms(hotel.id, search).await.unwrap();
        assert!(rooms.is_empty());
    }

    #[tokio::test]
    async fn search_outside_existing_booking_should_find_room() {
        let (_tdb, manager) = test_manager(DeletePolicy::Restrict).await;
        let chain = seed_chain(&manager).await;
        let hotel = seed_hotel(&manager, chain.id).await;
        let room = seed_room(&manager, hotel.id, 111).await;
        book(&manager, room.id, "2023-03-01", "2023-03-06").await;
        book(&manager, room.id, "2023-03-14", "2023-03-20").await;

        // half-open stays: checking out on the 6th frees the room that day
        let search = stay("2023-03-06", "2023-03-14").build().unwrap();
        let rooms = manager.search_rooms(hotel.id, search).await.unwrap();
        assert_eq!(rooms, vec![room]);
    }

    #[tokio::test]
    async fn search_should_apply_room_and_hotel_filters() {
        let (_tdb, manager) = test_manager(DeletePolicy::Restrict).await;
        let chain = seed_chain(&manager).await;
        let hotel = seed_hotel(&manager, chain.id).await;
        let big = seed_room(&manager, hotel.id, 111).await;
        manager
            .create_room(hotel.id, RoomForm::new(112, 300.0, 1))
            .await
            .unwrap();

        let search = RoomSearchBuilder::default()
            .room_capacity(2)
            .price_per_night(150.0)
            .address("toronto")
            .name("marriott")
            .rating(4)
            .build()
            .unwrap();
        let rooms = manager.search_rooms(hotel.id, search).await.unwrap();
        assert_eq!(rooms, vec![big.clone()]);

        let search = RoomSearchBuilder::default().room_number(112).build().unwrap();
        let rooms = manager.search_rooms(hotel.id, search).await.unwrap();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].room_number, 112);

        let search = RoomSearchBuilder::default().rating(5).build().unwrap();
        assert!(manager.search_rooms(hotel.id, search).await.unwrap().is_empty());

        let search = RoomSearchBuilder::default().address("Paris").build().unwrap();
        assert!(manager.search_rooms(hotel.id, search).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn search_in_missing_hotel_should_be_not_found() {
        let (_tdb, manager) = test_manager(DeletePolicy::Restrict).await;
        let search = RoomSearchBuilder::default().build().unwrap();
        let err = manager.search_rooms(8, search).await.unwrap_err();
        assert_eq!(err, Error::not_found("hotel", 8));
    }
}
