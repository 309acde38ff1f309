use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A bookable room as served by the hotel/room listing API.
///
/// `price_per_night` arrives as a JSON number from some endpoints and as a
/// numeric string from others; `Decimal`'s deserializer accepts both, so the
/// rest of the crate only ever sees a parsed decimal.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub room_id: u32,
    pub room_type: String,
    pub price_per_night: Decimal,
    pub capacity: u32,
    #[serde(default = "default_available")]
    pub is_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenities: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_city: Option<String>,
}

fn default_available() -> bool {
    true
}

impl Room {
    pub fn can_accommodate(&self, guests: u32) -> bool {
        guests <= self.capacity
    }
}
