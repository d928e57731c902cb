mod config;
mod error;
mod types;

pub use config::*;
pub use error::*;
pub use types::*;

pub type ChainId = i64;
pub type HotelId = i64;
pub type RoomId = i64;
pub type BookingId = i64;
pub type RentalId = i64;
pub type EmployeeId = i64;
pub type CustomerId = i64;

/// validate the data structure, raise error if invalid
pub trait Validator {
    fn validate(&self) -> Result<(), Error>;
}

/// normalize the data structure (trim, dedup, ...) after it passed validation
pub trait Normalizer: Validator {
    fn normalize(&mut self) -> Result<(), Error> {
        self.do_normalize();
        self.validate()
    }

    fn do_normalize(&mut self);
}
