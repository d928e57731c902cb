use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::{EmployeeId, HotelId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Employee {
    pub id: EmployeeId,
    pub hotel_id: Option<HotelId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub role: EmployeeRole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "employee_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EmployeeRole {
    Manager,
    Receptionist,
    Housekeeping,
    Maintenance,
    Other,
}

impl fmt::Display for EmployeeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmployeeRole::Manager => write!(f, "manager"),
            EmployeeRole::Receptionist => write!(f, "receptionist"),
            EmployeeRole::Housekeeping => write!(f, "housekeeping"),
            EmployeeRole::Maintenance => write!(f, "maintenance"),
            EmployeeRole::Other => write!(f, "other"),
        }
    }
}
