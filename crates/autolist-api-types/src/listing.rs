use serde::{Deserialize, Serialize, Serializer};

use crate::options::{Category, FuelType, Location, Transmission, blank};

/// Multipart field carrying the listing JSON.
pub const CAR_DATA_FIELD: &str = "carData";

/// Multipart field carrying the vehicle picture.
pub const IMAGE_FIELD: &str = "image";

/// Path of the add-car endpoint, relative to the API base URL.
pub const ADD_CAR_PATH: &str = "api/owner/add-car";

/// A vehicle listing as sent in the `carData` part.
///
/// Field names follow the backend's wire shape, which mixes camel and snake
/// case. `Default` is the empty draft a fresh form starts from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CarListing {
    pub brand: String,
    pub model: String,
    pub year: i32,
    #[serde(rename = "pricePerDay", serialize_with = "compact_number")]
    pub price_per_day: f64,
    #[serde(with = "blank")]
    pub category: Option<Category>,
    #[serde(with = "blank")]
    pub transmission: Option<Transmission>,
    #[serde(with = "blank")]
    pub fuel_type: Option<FuelType>,
    pub seating_capacity: u32,
    #[serde(with = "blank")]
    pub location: Option<Location>,
    pub description: String,
}

/// Largest integer a JSON number carries exactly (2^53 - 1).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Writes whole amounts without a fractional part (`50`, not `50.0`).
fn compact_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Body returned by the add-car endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddCarResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_draft_uses_blank_selections() {
        let value = serde_json::to_value(CarListing::default()).expect("serialize");
        assert_eq!(
            value,
            json!({
                "brand": "",
                "model": "",
                "year": 0,
                "pricePerDay": 0,
                "category": "",
                "transmission": "",
                "fuel_type": "",
                "seating_capacity": 0,
                "location": "",
                "description": "",
            })
        );
    }

    #[test]
    fn car_data_text_matches_backend_shape() {
        let listing = CarListing {
            brand: "Bajaj".into(),
            model: "RE".into(),
            year: 2024,
            price_per_day: 50.0,
            category: Some(Category::Cargo),
            transmission: Some(Transmission::Manual),
            fuel_type: Some(FuelType::Cng),
            seating_capacity: 3,
            location: Some(Location::UllalBeach),
            description: "Test".into(),
        };

        let text = serde_json::to_string(&listing).expect("serialize");
        assert_eq!(
            text,
            r#"{"brand":"Bajaj","model":"RE","year":2024,"pricePerDay":50,"category":"Cargo Auto","transmission":"Manual","fuel_type":"CNG","seating_capacity":3,"location":"Ullal Beach","description":"Test"}"#
        );
    }

    #[test]
    fn fractional_price_keeps_its_decimals() {
        let listing = CarListing {
            price_per_day: 49.5,
            ..CarListing::default()
        };

        let value = serde_json::to_value(&listing).expect("serialize");
        assert_eq!(value["pricePerDay"], json!(49.5));
        assert!(value["pricePerDay"].is_f64());
    }

    #[test]
    fn reads_backend_shape() {
        let listing: CarListing = serde_json::from_value(json!({
            "brand": "Bajaj",
            "model": "RE",
            "year": 2024,
            "pricePerDay": 50,
            "category": "Cargo Auto",
            "transmission": "Manual",
            "fuel_type": "CNG",
            "seating_capacity": 3,
            "location": "",
            "description": "Test",
        }))
        .expect("deserialize");

        assert_eq!(listing.price_per_day, 50.0);
        assert_eq!(listing.category, Some(Category::Cargo));
        assert_eq!(listing.fuel_type, Some(FuelType::Cng));
        assert_eq!(listing.location, None);
    }

    #[test]
    fn rejects_unknown_selection() {
        let err = serde_json::from_value::<CarListing>(json!({
            "brand": "", "model": "", "year": 0, "pricePerDay": 0,
            "category": "Truck", "transmission": "", "fuel_type": "",
            "seating_capacity": 0, "location": "", "description": "",
        }))
        .expect_err("truck is not a category");
        assert!(err.to_string().contains("unknown category `Truck`"));
    }

    #[test]
    fn response_message_defaults_to_empty() {
        let response: AddCarResponse =
            serde_json::from_str(r#"{"success":true}"#).expect("deserialize");
        assert!(response.success);
        assert!(response.message.is_empty());
    }
}
