use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{empty_as_none, non_negative, require};
use crate::{ChainId, EmployeeId, Error, HotelId, Validator};

pub const MAX_RATING: i32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Hotel {
    pub id: HotelId,
    pub chain_id: ChainId,
    pub name: String,
    pub rating: i32,
    pub number_rooms: i32,
    pub email: String,
    pub manager_id: Option<EmployeeId>,
    pub phone_number: String,
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HotelForm {
    /// only honored on update, moves the hotel to another chain
    #[serde(default, deserialize_with = "empty_as_none")]
    pub chain_id: Option<ChainId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rating: i32,
    #[serde(default)]
    pub number_rooms: i32,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub manager_id: Option<EmployeeId>,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub address: String,
}

impl HotelForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        rating: i32,
        number_rooms: i32,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            rating,
            number_rooms,
            ..Default::default()
        }
    }
}

impl Validator for HotelForm {
    fn validate(&self) -> Result<(), Error> {
        require("name", &self.name)?;
        if !(0..=MAX_RATING).contains(&self.rating) {
            return Err(Error::Validation(format!(
                "rating must be between 0 and {}, got {}",
                MAX_RATING, self.rating
            )));
        }
        non_negative("number_rooms", self.number_rooms)
    }
}
