use abi::{
    Booking, BookingForm, ChainForm, Employee, EmployeeRole, Hotel, HotelChain, HotelForm,
    Rental, Room, RoomForm,
};
use axum::Json;
use utoipa::OpenApi;

use crate::handlers::{booking, chain, employee, hotel, rental, room};

#[derive(OpenApi)]
#[openapi(
    info(title = "Hotel Management System API"),
    paths(
        chain::list,
        chain::create,
        chain::detail,
        chain::update,
        chain::delete,
        hotel::list,
        hotel::create,
        hotel::detail,
        hotel::update,
        hotel::delete,
        room::list,
        room::create,
        room::detail,
        room::update,
        room::delete,
        room::search,
        booking::create,
        booking::detail,
        booking::list_of_customer,
        rental::create,
        rental::detail,
        rental::list_of_customer,
        employee::list,
        employee::detail,
    ),
    components(schemas(
        HotelChain,
        ChainForm,
        Hotel,
        HotelForm,
        Room,
        RoomForm,
        Booking,
        BookingForm,
        Rental,
        Employee,
        EmployeeRole,
    )),
    tags(
        (name = "Hotel Chain", description = "hotel chains"),
        (name = "Hotel", description = "hotels of a chain"),
        (name = "Room", description = "rooms of a hotel and their availability"),
        (name = "Booking", description = "room bookings of customers"),
        (name = "Rental", description = "bookings turned into stays at check-in"),
        (name = "Employee", description = "hotel staff"),
    )
)]
pub struct ApiDoc;

pub(crate) async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
