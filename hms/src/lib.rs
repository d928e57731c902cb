mod booking;
mod cascade;
mod chain;
mod employee;
mod hotel;
mod manager;
mod rental;
mod room;
#[cfg(test)]
mod test_utils;

use abi::{
    Booking, BookingForm, BookingId, ChainForm, ChainId, CustomerId, DeletePolicy, Employee,
    EmployeeId, Error, Hotel, HotelChain, HotelForm, HotelId, Rental, RentalId, Room, RoomForm,
    RoomId, RoomSearch,
};
use async_trait::async_trait;
use sqlx::PgPool;

/// Storage entry point. Holds the connection pool handed in at start-up and
/// the deletion policy; every repository trait below is implemented on it.
#[derive(Debug, Clone)]
pub struct HmsManager {
    pool: PgPool,
    policy: DeletePolicy,
}

#[async_trait]
pub trait ChainRepo {
    /// create a hotel chain
    async fn create_chain(&self, form: ChainForm) -> Result<HotelChain, Error>;
    /// all hotel chains ordered by id
    async fn fetch_chains(&self) -> Result<Vec<HotelChain>, Error>;
    async fn fetch_chain(&self, id: ChainId) -> Result<HotelChain, Error>;
    /// replace the stored fields of a chain
    async fn update_chain(&self, id: ChainId, form: ChainForm) -> Result<HotelChain, Error>;
    /// delete a chain, its hotels are handled by the delete policy
    async fn delete_chain(&self, id: ChainId) -> Result<HotelChain, Error>;
}

#[async_trait]
pub trait HotelRepo {
    async fn create_hotel(&self, chain_id: ChainId, form: HotelForm) -> Result<Hotel, Error>;
    async fn fetch_hotel(&self, id: HotelId) -> Result<Hotel, Error>;
    /// hotels of an existing chain, possibly none
    async fn fetch_hotels_of_chain(&self, chain_id: ChainId) -> Result<Vec<Hotel>, Error>;
    async fn update_hotel(&self, id: HotelId, form: HotelForm) -> Result<Hotel, Error>;
    async fn delete_hotel(&self, id: HotelId) -> Result<Hotel, Error>;
}

#[async_trait]
pub trait RoomRepo {
    async fn create_room(&self, hotel_id: HotelId, form: RoomForm) -> Result<Room, Error>;
    async fn fetch_room(&self, id: RoomId) -> Result<Room, Error>;
    async fn fetch_rooms_of_hotel(&self, hotel_id: HotelId) -> Result<Vec<Room>, Error>;
    async fn update_room(&self, id: RoomId, form: RoomForm) -> Result<Room, Error>;
    async fn delete_room(&self, id: RoomId) -> Result<Room, Error>;
    /// rooms of a hotel matching the filters and free for the requested stay
    async fn search_rooms(&self, hotel_id: HotelId, search: RoomSearch)
        -> Result<Vec<Room>, Error>;
}

#[async_trait]
pub trait BookingRepo {
    /// book a room; fails with a conflict when the stay overlaps another booking
    async fn create_booking(&self, form: BookingForm) -> Result<Booking, Error>;
    async fn fetch_booking(&self, id: BookingId) -> Result<Booking, Error>;
    async fn fetch_bookings_of_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Booking>, Error>;
}

#[async_trait]
pub trait RentalRepo {
    /// turn a booking of the customer into a rental
    async fn create_rental(
        &self,
        booking_id: BookingId,
        customer_id: CustomerId,
    ) -> Result<Rental, Error>;
    async fn fetch_rental(&self, id: RentalId) -> Result<Rental, Error>;
    async fn fetch_rentals_of_customer(&self, customer_id: CustomerId)
        -> Result<Vec<Rental>, Error>;
}

#[async_trait]
pub trait EmployeeRepo {
    async fn fetch_employee(&self, id: EmployeeId) -> Result<Employee, Error>;
    async fn fetch_employees(&self) -> Result<Vec<Employee>, Error>;
}
