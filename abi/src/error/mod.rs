mod conflict;

use axum::{
    extract::rejection::{FormRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use sqlx::postgres::PgDatabaseError;
use thiserror::Error;
use tracing::{error, warn};

pub use conflict::{BookingConflict, BookingConflictInfo, BookingWindow};

#[derive(Error, Debug)]
pub enum Error {
    #[error("database error: {0}")]
    DbError(sqlx::Error),

    #[error("storage unavailable: {0}")]
    StorageUnavailable(sqlx::Error),

    #[error("Failed to read configuration file")]
    ConfigReadError,

    #[error("Failed to parse configuration file")]
    ConfigParseError,

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("end date must be after start date")]
    InvalidDateRange,

    #[error("{0} not found")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("booking overlaps an existing booking of the same room")]
    ConflictBooking(BookingConflictInfo),

    #[error("referenced {0} does not exist")]
    ForeignKey(String),

    #[error("{0} is not implemented yet")]
    NotImplemented(String),
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            // sqlx errors carry no equality, compare by kind only
            (Self::DbError(_), Self::DbError(_)) => true,
            (Self::StorageUnavailable(_), Self::StorageUnavailable(_)) => true,
            (Self::ConfigReadError, Self::ConfigReadError) => true,
            (Self::ConfigParseError, Self::ConfigParseError) => true,
            (Self::Validation(v1), Self::Validation(v2)) => v1 == v2,
            (Self::InvalidDateRange, Self::InvalidDateRange) => true,
            (Self::NotFound(v1), Self::NotFound(v2)) => v1 == v2,
            (Self::Conflict(v1), Self::Conflict(v2)) => v1 == v2,
            (Self::ConflictBooking(v1), Self::ConflictBooking(v2)) => v1 == v2,
            (Self::ForeignKey(v1), Self::ForeignKey(v2)) => v1 == v2,
            (Self::NotImplemented(v1), Self::NotImplemented(v2)) => v1 == v2,
            _ => false,
        }
    }
}

impl Error {
    pub fn not_found(entity: &str, id: i64) -> Self {
        Error::NotFound(format!("{} {}", entity, id))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) | Error::InvalidDateRange | Error::ForeignKey(_) => {
                StatusCode::BAD_REQUEST
            }
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Conflict(_) | Error::ConflictBooking(_) => StatusCode::CONFLICT,
            Error::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Error::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            Error::DbError(_) | Error::ConfigReadError | Error::ConfigParseError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<sqlx::Error> for Error {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Database(db_err) => {
                let Some(err) = db_err.try_downcast_ref::<PgDatabaseError>() else {
                    return Error::DbError(sqlx::Error::Database(db_err));
                };
                match (err.code(), err.table()) {
                    ("23P01", Some("bookings")) => {
                        Error::ConflictBooking(err.detail().unwrap_or_default().into())
                    }
                    ("23505", _) => Error::Conflict(unique_violation(err.constraint())),
                    ("23503", table) if err.message().starts_with("update or delete") => {
                        Error::Conflict(format!(
                            "{} is still referenced by other records",
                            table.unwrap_or("record")
                        ))
                    }
                    ("23503", _) => Error::ForeignKey(referenced_entity(err.constraint())),
                    ("23514" | "22P02" | "22003" | "22008", _) => {
                        Error::Validation(err.message().to_string())
                    }
                    _ => Error::DbError(sqlx::Error::Database(db_err)),
                }
            }
            sqlx::Error::RowNotFound => Error::NotFound("record".to_string()),
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => Error::StorageUnavailable(e),
            _ => Error::DbError(e),
        }
    }
}

fn unique_violation(constraint: Option<&str>) -> String {
    match constraint {
        Some("rooms_hotel_room_number_key") => "room number already exists in this hotel".into(),
        Some("rentals_booking_id_key") => "booking was already converted into a rental".into(),
        Some(other) => format!("duplicate value violates {}", other),
        None => "duplicate value".into(),
    }
}

fn referenced_entity(constraint: Option<&str>) -> String {
    match constraint {
        Some("hotels_chain_id_fkey") => "hotel chain".into(),
        Some("hotels_manager_id_fkey") => "manager".into(),
        Some("rooms_hotel_id_fkey") => "hotel".into(),
        Some("bookings_room_id_fkey" | "rentals_room_id_fkey") => "room".into(),
        Some("rentals_booking_id_fkey") => "booking".into(),
        Some("employees_hotel_id_fkey") => "hotel".into(),
        _ => "record".into(),
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Error::Validation(rejection.body_text())
    }
}

impl From<FormRejection> for Error {
    fn from(rejection: FormRejection) -> Self {
        Error::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        Error::Validation(rejection.body_text())
    }
}

// 将错误转换为 http 响应
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            Error::DbError(e) => {
                error!("unexpected database error: {:?}", e);
                json!({ "error": "internal server error" })
            }
            Error::StorageUnavailable(e) => {
                error!("storage unavailable, check the database connection: {:?}", e);
                json!({ "error": "storage unavailable" })
            }
            Error::ConfigReadError | Error::ConfigParseError => {
                error!("{}", self);
                json!({ "error": "internal server error" })
            }
            Error::ConflictBooking(info) => {
                warn!("{}: {:?}", self, info);
                json!({ "error": self.to_string(), "conflict": info })
            }
            _ => {
                warn!("{}", self);
                json!({ "error": self.to_string() })
            }
        };
        (status, Json(body)).into_response()
    }
}
