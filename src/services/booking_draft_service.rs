use std::fmt;

use rust_decimal::Decimal;

use crate::models::booking::{BookingDraft, DateRange};
use crate::services::date_range_service::NightsCalculator;

const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Why a draft could not be assembled. Returned, never panicked: these come
/// up on every half-filled form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    /// The date range is missing, reversed, or a zero-night stay.
    IncompleteInput,
    /// A positive-night stay arrived with a non-positive total. Pricing
    /// upstream is broken and the draft must not be submitted.
    UnpricedStay,
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftError::IncompleteInput => {
                write!(f, "check-in and check-out dates are missing or out of order")
            }
            DraftError::UnpricedStay => {
                write!(f, "stay total is not positive; refusing to build a booking draft")
            }
        }
    }
}

impl std::error::Error for DraftError {}

/// Builds the payload handed to the booking-creation endpoint. Performs no
/// I/O; the caller submits the returned value.
pub struct BookingDraftAssembler;

impl BookingDraftAssembler {
    pub fn assemble(
        room_id: u32,
        range: DateRange,
        guests: u32,
        total_amount: Decimal,
        special_requests: Option<String>,
    ) -> Result<BookingDraft, DraftError> {
        let nights = NightsCalculator::nights(range.check_in, range.check_out);
        if nights <= 0 {
            return Err(DraftError::IncompleteInput);
        }
        if total_amount <= Decimal::ZERO {
            log::warn!(
                "refusing draft for room {}: {} nights priced at {}",
                room_id,
                nights,
                total_amount
            );
            return Err(DraftError::UnpricedStay);
        }

        Ok(BookingDraft {
            room_id,
            check_in_date: range.check_in.format(WIRE_DATE_FORMAT).to_string(),
            check_out_date: range.check_out.format(WIRE_DATE_FORMAT).to_string(),
            guests,
            total_amount,
            special_requests,
        })
    }
}
