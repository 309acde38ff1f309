use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::room::Room;

/// A candidate check-in/check-out pair at calendar-day granularity. No
/// time-of-day or timezone is carried; night counts come from whole-day
/// differencing only.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl DateRange {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            check_in,
            check_out,
        }
    }
}

/// Everything needed to price one stay. Rebuilt from the form inputs on
/// every change; nothing here is cached or persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct StayRequest {
    pub room: Room,
    pub range: DateRange,
    pub guests: u32,
}

impl StayRequest {
    /// Capacity is a policy check the caller enforces before submission;
    /// pricing itself accepts any guest count without failing.
    pub fn exceeds_capacity(&self) -> bool {
        !self.room.can_accommodate(self.guests)
    }
}

/// Intermediate pricing values exposed for display alongside the draft.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    pub nights: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub per_night_rate: Decimal,
}

impl PricingResult {
    /// Zero nights with a zero total means the form is not yet priceable,
    /// not that pricing failed.
    pub fn empty(per_night_rate: Decimal) -> Self {
        Self {
            nights: 0,
            total_amount: Decimal::ZERO,
            per_night_rate,
        }
    }

    pub fn is_priceable(&self) -> bool {
        self.nights > 0 && self.total_amount > Decimal::ZERO
    }
}

/// The exact JSON payload the booking-creation endpoint expects.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub room_id: u32,
    /// `YYYY-MM-DD`, no time or timezone suffix.
    pub check_in_date: String,
    pub check_out_date: String,
    pub guests: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}
