//! Closed option sets offered by the owner listing form.
//!
//! Every option travels over the wire as its display label (e.g.
//! `"Cargo Auto"`). Parsing accepts the label in any ASCII case or the
//! kebab-case slug (`cargo-auto`), which is what the command line uses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Returned when a value is not a member of an option set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}` (expected one of: {expected})")]
pub struct UnknownOption {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

macro_rules! option_set {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $label:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// Every member, in form order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Wire and display label.
            #[must_use]
            pub fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            /// Kebab-case form of the label.
            #[must_use]
            pub fn slug(self) -> String {
                slugify(self.label())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = UnknownOption;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let wanted = value.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|option| {
                        option.label().eq_ignore_ascii_case(wanted)
                            || option.slug().eq_ignore_ascii_case(wanted)
                    })
                    .ok_or_else(|| UnknownOption {
                        kind: $kind,
                        value: value.to_string(),
                        expected: Self::ALL
                            .iter()
                            .map(|option| option.label())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

option_set! {
    /// Vehicle category.
    Category, "category" {
        Passenger => "Passenger Auto",
        Cargo => "Cargo Auto",
        Electric => "E-Auto",
    }
}

option_set! {
    Transmission, "transmission" {
        Automatic => "Automatic",
        Manual => "Manual",
        SemiAutomatic => "Semi-Automatic",
    }
}

option_set! {
    FuelType, "fuel type" {
        Petrol => "Petrol",
        Lpg => "LPG",
        Electric => "Electric",
        Cng => "CNG",
    }
}

option_set! {
    /// Pick-up points a vehicle can be listed at.
    Location, "location" {
        PanamburBeach => "Panambur Beach",
        KadriManjunathTemple => "Kadri Manjunath Temple",
        SultanBattery => "Sultan Battery",
        PilikulaNisargadhama => "Pilikula Nisargadhama",
        TannirbhaviBeach => "Tannirbhavi Beach",
        StAloysiusChapel => "St. Aloysius Chapel",
        MangaladeviTemple => "Mangaladevi Temple",
        SomeshwarBeach => "Someshwar Beach",
        RosarioCathedral => "Rosario Cathedral",
        UllalBeach => "Ullal Beach",
        KudroliGokarnathTemple => "Kudroli Gokarnath Temple",
        PiliculaBiologicalPark => "Pilicula Biological Park",
        BejaiMuseum => "Bejai Museum",
        SharavuMahaganapathiTemple => "Sharavu Mahaganapathi Temple",
        LightHouseHillGarden => "Light House Hill Garden",
    }
}

fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    for ch in label.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') && (ch == ' ' || ch == '-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Serde adapter for an optional option-set value where "nothing selected"
/// is the empty string on the wire.
pub mod blank {
    use std::fmt::Display;
    use std::str::FromStr;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
        }
    }
}
