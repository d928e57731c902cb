use abi::{Employee, EmployeeId, Error};
use axum::{extract::State, Json};
use hms::EmployeeRepo;

use crate::{AppState, Path};

#[utoipa::path(
    get,
    path = "/hms/api/employee",
    tag = "Employee",
    responses((status = 200, description = "all employees", body = [Employee]))
)]
pub(crate) async fn list(State(svc): State<AppState>) -> Result<Json<Vec<Employee>>, Error> {
    Ok(Json(svc.manager().fetch_employees().await?))
}

#[utoipa::path(
    get,
    path = "/hms/api/employee/{id}",
    tag = "Employee",
    params(("id" = i64, Path, description = "id of the employee")),
    responses(
        (status = 200, description = "the employee", body = Employee),
        (status = 404, description = "no such employee"),
    )
)]
pub(crate) async fn detail(
    State(svc): State<AppState>,
    Path(id): Path<EmployeeId>,
) -> Result<Json<Employee>, Error> {
    Ok(Json(svc.manager().fetch_employee(id).await?))
}
