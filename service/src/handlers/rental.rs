use abi::{BookingId, CustomerId, Error, Rental, RentalId};
use axum::{extract::State, http::StatusCode, Json};
use hms::RentalRepo;

use crate::{AppState, Path};

/// `:id` is the booking being checked in
#[utoipa::path(
    post,
    path = "/hms/api/rentals/{id}/customer/{customer_id}",
    tag = "Rental",
    params(
        ("id" = i64, Path, description = "id of the booking to check in"),
        ("customer_id" = i64, Path, description = "id of the customer holding the booking"),
    ),
    responses(
        (status = 201, description = "rental created from the booking", body = Rental),
        (status = 404, description = "customer holds no such booking"),
        (status = 409, description = "booking was already converted"),
    )
)]
pub(crate) async fn create(
    State(svc): State<AppState>,
    Path((booking_id, customer_id)): Path<(BookingId, CustomerId)>,
) -> Result<(StatusCode, Json<Rental>), Error> {
    let rental = svc.manager().create_rental(booking_id, customer_id).await?;
    Ok((StatusCode::CREATED, Json(rental)))
}

#[utoipa::path(
    get,
    path = "/hms/api/rentals/{id}",
    tag = "Rental",
    params(("id" = i64, Path, description = "id of the rental")),
    responses(
        (status = 200, description = "the rental", body = Rental),
        (status = 404, description = "no such rental"),
    )
)]
pub(crate) async fn detail(
    State(svc): State<AppState>,
    Path(id): Path<RentalId>,
) -> Result<Json<Rental>, Error> {
    Ok(Json(svc.manager().fetch_rental(id).await?))
}

#[utoipa::path(
    get,
    path = "/hms/api/rentals/customer/{customer_id}",
    tag = "Rental",
    params(("customer_id" = i64, Path, description = "id of the customer")),
    responses((status = 200, description = "rentals of the customer", body = [Rental]))
)]
pub(crate) async fn list_of_customer(
    State(svc): State<AppState>,
    Path(customer_id): Path<CustomerId>,
) -> Result<Json<Vec<Rental>>, Error> {
    Ok(Json(
        svc.manager().fetch_rentals_of_customer(customer_id).await?,
    ))
}
