//! Draft listing state held by the add-car form.
//!
//! Updates are copy-on-write: each edit produces a new [`CarListing`] where
//! exactly one field differs from its predecessor.

use autolist_api_types::{CarListing, Category, FuelType, Location, Transmission};

use super::image::ListingImage;

/// One typed edit to a single draft field.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingField {
    Brand(String),
    Model(String),
    Year(i32),
    PricePerDay(f64),
    Category(Option<Category>),
    Transmission(Option<Transmission>),
    FuelType(Option<FuelType>),
    SeatingCapacity(u32),
    Location(Option<Location>),
    Description(String),
}

/// Return `listing` with the single field named by `field` replaced.
#[must_use]
pub fn apply_field(listing: CarListing, field: ListingField) -> CarListing {
    match field {
        ListingField::Brand(brand) => CarListing { brand, ..listing },
        ListingField::Model(model) => CarListing { model, ..listing },
        ListingField::Year(year) => CarListing { year, ..listing },
        ListingField::PricePerDay(price_per_day) => CarListing {
            price_per_day,
            ..listing
        },
        ListingField::Category(category) => CarListing { category, ..listing },
        ListingField::Transmission(transmission) => CarListing {
            transmission,
            ..listing
        },
        ListingField::FuelType(fuel_type) => CarListing {
            fuel_type,
            ..listing
        },
        ListingField::SeatingCapacity(seating_capacity) => CarListing {
            seating_capacity,
            ..listing
        },
        ListingField::Location(location) => CarListing { location, ..listing },
        ListingField::Description(description) => CarListing {
            description,
            ..listing
        },
    }
}

/// Listing plus its optional picture. `Draft::default()` is the reset state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub listing: CarListing,
    pub image: Option<ListingImage>,
}

impl Draft {
    #[must_use]
    pub fn with_field(self, field: ListingField) -> Self {
        Self {
            listing: apply_field(self.listing, field),
            ..self
        }
    }

    #[must_use]
    pub fn with_image(self, image: Option<ListingImage>) -> Self {
        Self { image, ..self }
    }

    #[must_use]
    pub fn without_image(self) -> Self {
        self.with_image(None)
    }
}

/// Render a per-day price with the configured currency symbol, e.g. `$50/day`.
pub fn format_daily_price(currency: &str, price_per_day: f64) -> String {
    if price_per_day.fract() == 0.0 {
        format!("{currency}{price_per_day:.0}/day")
    } else {
        format!("{currency}{price_per_day:.2}/day")
    }
}
