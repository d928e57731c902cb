use abi::{Booking, BookingForm, BookingId, CustomerId, Error};
use axum::{extract::State, http::StatusCode, Json};
use hms::BookingRepo;

use crate::{AppState, Form, Path};

#[utoipa::path(
    post,
    path = "/hms/api/bookings",
    tag = "Booking",
    request_body(content = BookingForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "booking created", body = Booking),
        (status = 400, description = "invalid form, date range or unknown room"),
        (status = 409, description = "room already booked for part of the stay"),
    )
)]
pub(crate) async fn create(
    State(svc): State<AppState>,
    Form(form): Form<BookingForm>,
) -> Result<(StatusCode, Json<Booking>), Error> {
    let booking = svc.manager().create_booking(form).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

#[utoipa::path(
    get,
    path = "/hms/api/bookings/{id}",
    tag = "Booking",
    params(("id" = i64, Path, description = "id of the booking")),
    responses(
        (status = 200, description = "the booking", body = Booking),
        (status = 404, description = "no such booking"),
    )
)]
pub(crate) async fn detail(
    State(svc): State<AppState>,
    Path(id): Path<BookingId>,
) -> Result<Json<Booking>, Error> {
    Ok(Json(svc.manager().fetch_booking(id).await?))
}

#[utoipa::path(
    get,
    path = "/hms/api/bookings/customer/{customer_id}",
    tag = "Booking",
    params(("customer_id" = i64, Path, description = "id of the customer")),
    responses((status = 200, description = "bookings of the customer", body = [Booking]))
)]
pub(crate) async fn list_of_customer(
    State(svc): State<AppState>,
    Path(customer_id): Path<CustomerId>,
) -> Result<Json<Vec<Booking>>, Error> {
    Ok(Json(
        svc.manager().fetch_bookings_of_customer(customer_id).await?,
    ))
}
