use chrono::NaiveDate;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use sqlx::{Postgres, QueryBuilder};
use utoipa::IntoParams;

use super::{deserialize_optional_date, empty_as_none, non_negative, price, validate_range};
use crate::{Error, HotelId, Normalizer, Validator, MAX_RATING};

/// Filters for the availability search of a hotel's rooms. Every filter is
/// optional; an absent filter does not restrict the result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder, IntoParams)]
#[into_params(parameter_in = Query)]
#[builder(
    default,
    setter(into, strip_option),
    build_fn(name = "private_build", error = "Error")
)]
pub struct RoomSearch {
    /// minimum number of guests the room must hold
    #[serde(default, deserialize_with = "empty_as_none")]
    pub room_capacity: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub end_date: Option<NaiveDate>,
    /// substring of the hotel address, case insensitive
    #[serde(default, deserialize_with = "empty_as_none")]
    pub address: Option<String>,
    /// substring of the hotel name, case insensitive
    #[serde(default, deserialize_with = "empty_as_none")]
    pub name: Option<String>,
    /// minimum hotel rating
    #[serde(default, deserialize_with = "empty_as_none")]
    pub rating: Option<i32>,
    /// price ceiling per night
    #[serde(default, deserialize_with = "empty_as_none")]
    pub price_per_night: Option<f64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub room_number: Option<i32>,
}

impl RoomSearchBuilder {
    pub fn build(&self) -> Result<RoomSearch, Error> {
        let mut search = self.private_build()?;
        search.normalize()?;
        Ok(search)
    }
}

impl From<derive_builder::UninitializedFieldError> for Error {
    fn from(e: derive_builder::UninitializedFieldError) -> Self {
        Error::Validation(e.to_string())
    }
}

impl Validator for RoomSearch {
    fn validate(&self) -> Result<(), Error> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => validate_range(start, end)?,
            (None, None) => {}
            _ => {
                return Err(Error::Validation(
                    "start_date and end_date must be given together".into(),
                ))
            }
        }
        if let Some(capacity) = self.room_capacity {
            non_negative("room_capacity", capacity)?;
        }
        if let Some(ceiling) = self.price_per_night {
            price("price_per_night", ceiling)?;
        }
        if let Some(rating) = self.rating {
            if !(0..=MAX_RATING).contains(&rating) {
                return Err(Error::Validation(format!(
                    "rating must be between 0 and {}, got {}",
                    MAX_RATING, rating
                )));
            }
        }
        Ok(())
    }
}

impl Normalizer for RoomSearch {
    fn do_normalize(&mut self) {
        let trim = |v: &mut Option<String>| {
            *v = v
                .take()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty());
        };
        trim(&mut self.address);
        trim(&mut self.name);
    }
}

impl RoomSearch {
    /// Build the availability query for the rooms of `hotel_id`. A room is
    /// available when no booking `b` of it satisfies
    /// `b.start_date < end_date AND b.end_date > start_date`.
    pub fn to_query(&self, hotel_id: HotelId) -> QueryBuilder<'static, Postgres> {
        let mut query = QueryBuilder::new(
            "SELECT r.* FROM hms.rooms r JOIN hms.hotels h ON h.id = r.hotel_id WHERE r.hotel_id = ",
        );
        query.push_bind(hotel_id);

        if let Some(capacity) = self.room_capacity {
            query.push(" AND r.room_capacity >= ").push_bind(capacity);
        }
        if let Some(price) = self.price_per_night {
            query.push(" AND r.price_per_night <= ").push_bind(price);
        }
        if let Some(number) = self.room_number {
            query.push(" AND r.room_number = ").push_bind(number);
        }
        if let Some(address) = &self.address {
            query.push(" AND h.address ILIKE ").push_bind(like_pattern(address));
        }
        if let Some(name) = &self.name {
            query.push(" AND h.name ILIKE ").push_bind(like_pattern(name));
        }
        if let Some(rating) = self.rating {
            query.push(" AND h.rating >= ").push_bind(rating);
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            query
                .push(" AND NOT EXISTS (SELECT 1 FROM hms.bookings b WHERE b.room_id = r.id AND b.start_date < ")
                .push_bind(end)
                .push(" AND b.end_date > ")
                .push_bind(start)
                .push(")");
        }
        query.push(" ORDER BY r.room_number");
        query
    }
}

fn like_pattern(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}
