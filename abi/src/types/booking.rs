use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{deserialize_date, price, validate_range};
use crate::{BookingId, CustomerId, Error, RoomId, Validator};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Booking {
    pub id: BookingId,
    pub room_id: RoomId,
    pub customer_id: CustomerId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub rental_price: f64,
    pub additional_charge: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookingForm {
    #[serde(alias = "room_ID")]
    pub room_id: RoomId,
    #[serde(alias = "customer_ID")]
    pub customer_id: CustomerId,
    #[serde(deserialize_with = "deserialize_date")]
    pub start_date: NaiveDate,
    #[serde(deserialize_with = "deserialize_date")]
    pub end_date: NaiveDate,
    pub rental_price: f64,
    #[serde(default)]
    pub additional_charge: f64,
}

impl BookingForm {
    pub fn new(
        room_id: RoomId,
        customer_id: CustomerId,
        start_date: NaiveDate,
        end_date: NaiveDate,
        rental_price: f64,
    ) -> Self {
        Self {
            room_id,
            customer_id,
            start_date,
            end_date,
            rental_price,
            additional_charge: 0.0,
        }
    }

    /// number of nights covered by the half-open stay
    pub fn nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

impl Validator for BookingForm {
    fn validate(&self) -> Result<(), Error> {
        validate_range(self.start_date, self.end_date)?;
        price("rental_price", self.rental_price)?;
        price("additional_charge", self.additional_charge)
    }
}
