use abi::{ChainId, Error, Hotel, HotelForm, HotelId};
use axum::{extract::State, http::StatusCode, Json};
use hms::HotelRepo;

use crate::{AppState, Form, Path};

#[utoipa::path(
    get,
    path = "/hms/api/chain/{chain_id}/hotel",
    tag = "Hotel",
    params(("chain_id" = i64, Path, description = "id of the hotel chain")),
    responses(
        (status = 200, description = "hotels of the chain", body = [Hotel]),
        (status = 404, description = "no such chain"),
    )
)]
pub(crate) async fn list(
    State(svc): State<AppState>,
    Path(chain_id): Path<ChainId>,
) -> Result<Json<Vec<Hotel>>, Error> {
    Ok(Json(svc.manager().fetch_hotels_of_chain(chain_id).await?))
}

#[utoipa::path(
    post,
    path = "/hms/api/chain/{chain_id}/hotel",
    tag = "Hotel",
    params(("chain_id" = i64, Path, description = "id of the hotel chain")),
    request_body(content = HotelForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "hotel created", body = Hotel),
        (status = 400, description = "invalid form or unknown chain"),
    )
)]
pub(crate) async fn create(
    State(svc): State<AppState>,
    Path(chain_id): Path<ChainId>,
    Form(form): Form<HotelForm>,
) -> Result<(StatusCode, Json<Hotel>), Error> {
    let hotel = svc.manager().create_hotel(chain_id, form).await?;
    Ok((StatusCode::CREATED, Json(hotel)))
}

#[utoipa::path(
    get,
    path = "/hms/api/chain/hotel/{hotel_id}",
    tag = "Hotel",
    params(("hotel_id" = i64, Path, description = "id of the hotel")),
    responses(
        (status = 200, description = "the hotel", body = Hotel),
        (status = 404, description = "no such hotel"),
    )
)]
pub(crate) async fn detail(
    State(svc): State<AppState>,
    Path(id): Path<HotelId>,
) -> Result<Json<Hotel>, Error> {
    Ok(Json(svc.manager().fetch_hotel(id).await?))
}

#[utoipa::path(
    put,
    path = "/hms/api/chain/hotel/{hotel_id}",
    tag = "Hotel",
    params(("hotel_id" = i64, Path, description = "id of the hotel")),
    request_body(content = HotelForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "hotel after the update", body = Hotel),
        (status = 400, description = "invalid form"),
        (status = 404, description = "no such hotel"),
    )
)]
pub(crate) async fn update(
    State(svc): State<AppState>,
    Path(id): Path<HotelId>,
    Form(form): Form<HotelForm>,
) -> Result<Json<Hotel>, Error> {
    Ok(Json(svc.manager().update_hotel(id, form).await?))
}

#[utoipa::path(
    delete,
    path = "/hms/api/chain/hotel/{hotel_id}",
    tag = "Hotel",
    params(("hotel_id" = i64, Path, description = "id of the hotel")),
    responses(
        (status = 200, description = "the deleted hotel", body = Hotel),
        (status = 404, description = "no such hotel"),
        (status = 409, description = "hotel still has rooms"),
    )
)]
pub(crate) async fn delete(
    State(svc): State<AppState>,
    Path(id): Path<HotelId>,
) -> Result<Json<Hotel>, Error> {
    Ok(Json(svc.manager().delete_hotel(id).await?))
}
