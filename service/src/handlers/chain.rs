use abi::{ChainForm, ChainId, Error, HotelChain};
use axum::{extract::State, http::StatusCode, Json};
use hms::ChainRepo;

use crate::{AppState, Form, Path};

#[utoipa::path(
    get,
    path = "/hms/api/chain",
    tag = "Hotel Chain",
    responses((status = 200, description = "all hotel chains", body = [HotelChain]))
)]
pub(crate) async fn list(State(svc): State<AppState>) -> Result<Json<Vec<HotelChain>>, Error> {
    Ok(Json(svc.manager().fetch_chains().await?))
}

#[utoipa::path(
    post,
    path = "/hms/api/chain",
    tag = "Hotel Chain",
    request_body(content = ChainForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "chain created", body = HotelChain),
        (status = 400, description = "invalid form"),
    )
)]
pub(crate) async fn create(
    State(svc): State<AppState>,
    Form(form): Form<ChainForm>,
) -> Result<(StatusCode, Json<HotelChain>), Error> {
    let chain = svc.manager().create_chain(form).await?;
    Ok((StatusCode::CREATED, Json(chain)))
}

#[utoipa::path(
    get,
    path = "/hms/api/chain/{chain_id}",
    tag = "Hotel Chain",
    params(("chain_id" = i64, Path, description = "id of the hotel chain")),
    responses(
        (status = 200, description = "the hotel chain", body = HotelChain),
        (status = 404, description = "no such chain"),
    )
)]
pub(crate) async fn detail(
    State(svc): State<AppState>,
    Path(id): Path<ChainId>,
) -> Result<Json<HotelChain>, Error> {
    Ok(Json(svc.manager().fetch_chain(id).await?))
}

#[utoipa::path(
    put,
    path = "/hms/api/chain/{chain_id}",
    tag = "Hotel Chain",
    params(("chain_id" = i64, Path, description = "id of the hotel chain")),
    request_body(content = ChainForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "chain after the update", body = HotelChain),
        (status = 400, description = "invalid form"),
        (status = 404, description = "no such chain"),
    )
)]
pub(crate) async fn update(
    State(svc): State<AppState>,
    Path(id): Path<ChainId>,
    Form(form): Form<ChainForm>,
) -> Result<Json<HotelChain>, Error> {
    Ok(Json(svc.manager().update_chain(id, form).await?))
}

#[utoipa::path(
    delete,
    path = "/hms/api/chain/{chain_id}",
    tag = "Hotel Chain",
    params(("chain_id" = i64, Path, description = "id of the hotel chain")),
    responses(
        (status = 200, description = "the deleted chain", body = HotelChain),
        (status = 404, description = "no such chain"),
        (status = 409, description = "chain still has hotels"),
    )
)]
pub(crate) async fn delete(
    State(svc): State<AppState>,
    Path(id): Path<ChainId>,
) -> Result<Json<HotelChain>, Error> {
    Ok(Json(svc.manager().delete_chain(id).await?))
}
