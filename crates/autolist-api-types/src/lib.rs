//! Wire types for the car-rental owner listing API.

mod listing;
pub mod options;

pub use listing::{ADD_CAR_PATH, AddCarResponse, CAR_DATA_FIELD, CarListing, IMAGE_FIELD};
pub use options::{Category, FuelType, Location, Transmission, UnknownOption};
