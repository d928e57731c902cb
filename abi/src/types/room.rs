use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{deserialize_amenities, deserialize_flag, empty_as_none, non_negative, price};
use crate::{Error, HotelId, Normalizer, RoomId, Validator};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Room {
    pub id: RoomId,
    pub hotel_id: HotelId,
    pub room_number: i32,
    pub price_per_night: f64,
    pub amenities: Vec<String>,
    pub room_capacity: i32,
    pub view_type: String,
    pub extendability: bool,
    pub problems: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RoomForm {
    /// only honored on update, moves the room to another hotel
    #[serde(default, deserialize_with = "empty_as_none")]
    pub hotel_id: Option<HotelId>,
    pub room_number: i32,
    pub price_per_night: f64,
    #[serde(default, deserialize_with = "deserialize_amenities")]
    pub amenities: Vec<String>,
    pub room_capacity: i32,
    #[serde(default)]
    pub view_type: String,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub extendability: bool,
    #[serde(default)]
    pub problems: String,
}

impl RoomForm {
    pub fn new(room_number: i32, price_per_night: f64, room_capacity: i32) -> Self {
        Self {
            room_number,
            price_per_night,
            room_capacity,
            ..Default::default()
        }
    }
}

impl Validator for RoomForm {
    fn validate(&self) -> Result<(), Error> {
        non_negative("room_number", self.room_number)?;
        price("price_per_night", self.price_per_night)?;
        if self.room_capacity < 1 {
            return Err(Error::Validation(format!(
                "room_capacity must be at least 1, got {}",
                self.room_capacity
            )));
        }
        Ok(())
    }
}

impl Normalizer for RoomForm {
    fn do_normalize(&mut self) {
        // amenities are a set, everything else is stored as given
        self.amenities = super::split_amenities(&self.amenities.join(","));
    }
}
