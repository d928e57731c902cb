use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::{Booking, BookingId, CustomerId, RentalId, RoomId};

/// A stay converted from a booking once the customer checked in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Rental {
    pub id: RentalId,
    pub booking_id: BookingId,
    pub customer_id: CustomerId,
    pub room_id: RoomId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// what the customer owes for the stay once it turns into a rental
    pub fn total_price(&self) -> f64 {
        self.rental_price + self.additional_charge
    }
}
