use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{non_negative, require};
use crate::{ChainId, Error, Validator};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct HotelChain {
    pub id: ChainId,
    pub name: String,
    pub email: String,
    pub number_hotels: i32,
    pub phone_number: String,
    pub address: String,
}

/// fields of a hotel chain as submitted by a create or update form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChainForm {
    #[serde(default, alias = "chain_name")]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub number_hotels: i32,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub address: String,
}

impl ChainForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, number_hotels: i32) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            number_hotels,
            ..Default::default()
        }
    }
}

impl Validator for ChainForm {
    fn validate(&self) -> Result<(), Error> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        non_negative("number_hotels", self.number_hotels)
    }
}
