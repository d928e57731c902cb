use abi::{Error, HotelId, Room, RoomForm, RoomId, RoomSearch};
use axum::{extract::State, http::StatusCode, Json};
use hms::RoomRepo;

use crate::{AppState, Form, Path, Query};

#[utoipa::path(
    get,
    path = "/hms/api/chain/hotel/{hotel_id}/room",
    tag = "Room",
    params(("hotel_id" = i64, Path, description = "id of the hotel")),
    responses(
        (status = 200, description = "rooms of the hotel", body = [Room]),
        (status = 404, description = "no such hotel"),
    )
)]
pub(crate) async fn list(
    State(svc): State<AppState>,
    Path(hotel_id): Path<HotelId>,
) -> Result<Json<Vec<Room>>, Error> {
    Ok(Json(svc.manager().fetch_rooms_of_hotel(hotel_id).await?))
}

#[utoipa::path(
    post,
    path = "/hms/api/chain/hotel/{hotel_id}/room",
    tag = "Room",
    params(("hotel_id" = i64, Path, description = "id of the hotel")),
    request_body(content = RoomForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "room created", body = Room),
        (status = 400, description = "invalid form or unknown hotel"),
        (status = 409, description = "room number already taken in the hotel"),
    )
)]
pub(crate) async fn create(
    State(svc): State<AppState>,
    Path(hotel_id): Path<HotelId>,
    Form(form): Form<RoomForm>,
) -> Result<(StatusCode, Json<Room>), Error> {
    let room = svc.manager().create_room(hotel_id, form).await?;
    Ok((StatusCode::CREATED, Json(room)))
}

#[utoipa::path(
    get,
    path = "/hms/api/chain/hotel/room/{room_id}",
    tag = "Room",
    params(("room_id" = i64, Path, description = "id of the room")),
    responses(
        (status = 200, description = "the room", body = Room),
        (status = 404, description = "no such room"),
    )
)]
pub(crate) async fn detail(
    State(svc): State<AppState>,
    Path(id): Path<RoomId>,
) -> Result<Json<Room>, Error> {
    Ok(Json(svc.manager().fetch_room(id).await?))
}

#[utoipa::path(
    put,
    path = "/hms/api/chain/hotel/room/{room_id}",
    tag = "Room",
    params(("room_id" = i64, Path, description = "id of the room")),
    request_body(content = RoomForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "room after the update", body = Room),
        (status = 400, description = "invalid form"),
        (status = 404, description = "no such room"),
    )
)]
pub(crate) async fn update(
    State(svc): State<AppState>,
    Path(id): Path<RoomId>,
    Form(form): Form<RoomForm>,
) -> Result<Json<Room>, Error> {
    Ok(Json(svc.manager().update_room(id, form).await?))
}

#[utoipa::path(
    delete,
    path = "/hms/api/chain/hotel/room/{room_id}",
    tag = "Room",
    params(("room_id" = i64, Path, description = "id of the room")),
    responses(
        (status = 200, description = "the deleted room", body = Room),
        (status = 404, description = "no such room"),
        (status = 409, description = "room still has bookings"),
    )
)]
pub(crate) async fn delete(
    State(svc): State<AppState>,
    Path(id): Path<RoomId>,
) -> Result<Json<Room>, Error> {
    Ok(Json(svc.manager().delete_room(id).await?))
}

/// filters come in the query string, all optional
#[utoipa::path(
    get,
    path = "/hms/api/chain/hotel/{hotel_id}/room-search",
    tag = "Room",
    params(("hotel_id" = i64, Path, description = "id of the hotel"), RoomSearch),
    responses(
        (status = 200, description = "rooms matching every given filter", body = [Room]),
        (status = 400, description = "invalid filter or date range"),
        (status = 404, description = "no such hotel"),
    )
)]
pub(crate) async fn search(
    State(svc): State<AppState>,
    Path(hotel_id): Path<HotelId>,
    Query(search): Query<RoomSearch>,
) -> Result<Json<Vec<Room>>, Error> {
    Ok(Json(svc.manager().search_rooms(hotel_id, search).await?))
}
