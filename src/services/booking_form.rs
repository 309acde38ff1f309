use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::booking::{BookingDraft, DateRange, PricingResult, StayRequest};
use crate::models::room::Room;
use crate::services::booking_draft_service::{BookingDraftAssembler, DraftError};
use crate::services::date_range_service::{DateRangeValidator, ValidationOutcome};
use crate::services::pricing_service::{PricingPolicy, StayPriceCalculator};

/// Where a booking form session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// Nothing picked yet.
    Empty,
    /// Some input present, but the date pair is not yet valid.
    DatesPartial,
    /// Dates are valid; no room selected, so nothing to price.
    DatesValid,
    /// Dates and room present, total computed but not positive.
    Priced,
    /// Positive total; the draft can be built and submitted.
    Submittable,
}

/// Mutable inputs of one booking form session. Setters are plain field
/// updates; validation, pricing, and state are recomputed from scratch on
/// every read, so re-invoking on each keystroke is safe and idempotent.
#[derive(Debug, Clone)]
pub struct BookingForm {
    room: Option<Room>,
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
    guests: u32,
    special_requests: Option<String>,
    policy: PricingPolicy,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self::new(PricingPolicy::default())
    }
}

impl BookingForm {
    pub fn new(policy: PricingPolicy) -> Self {
        Self {
            room: None,
            check_in: None,
            check_out: None,
            guests: 1,
            special_requests: None,
            policy,
        }
    }

    pub fn set_room(&mut self, room: Room) {
        self.room = Some(room);
    }

    pub fn set_check_in(&mut self, date: Option<NaiveDate>) {
        self.check_in = date;
    }

    pub fn set_check_out(&mut self, date: Option<NaiveDate>) {
        self.check_out = date;
    }

    pub fn set_guests(&mut self, guests: u32) {
        self.guests = guests;
    }

    pub fn set_special_requests(&mut self, requests: Option<String>) {
        self.special_requests = requests;
    }

    pub fn room(&self) -> Option<&Room> {
        self.room.as_ref()
    }

    pub fn guests(&self) -> u32 {
        self.guests
    }

    fn range(&self) -> Option<DateRange> {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => Some(DateRange::new(check_in, check_out)),
            _ => None,
        }
    }

    /// Capacity check the UI enforces before submission. Pricing and draft
    /// assembly deliberately do not require it.
    pub fn guests_exceed_capacity(&self) -> bool {
        match &self.room {
            Some(room) => !room.can_accommodate(self.guests),
            None => false,
        }
    }

    pub fn validation(&self, today: NaiveDate) -> ValidationOutcome {
        DateRangeValidator::validate(self.check_in, self.check_out, today)
    }

    /// Current pricing view. Anything short of a valid range with a selected
    /// room yields the empty result rather than an error.
    pub fn pricing(&self, today: NaiveDate) -> PricingResult {
        let room = match &self.room {
            Some(room) => room,
            None => return PricingResult::empty(Decimal::ZERO),
        };
        let range = match self.range() {
            Some(range) if self.validation(today).is_valid() => range,
            _ => return PricingResult::empty(room.price_per_night),
        };

        let request = StayRequest {
            room: room.clone(),
            range,
            guests: self.guests,
        };
        StayPriceCalculator::quote(&request, self.policy)
    }

    /// Derived session state: Empty -> DatesPartial -> DatesValid -> Priced
    /// -> Submittable. Submittable requires a positive total.
    pub fn state(&self, today: NaiveDate) -> FormState {
        match self.validation(today) {
            ValidationOutcome::Incomplete => {
                if self.check_in.is_none() && self.check_out.is_none() {
                    FormState::Empty
                } else {
                    FormState::DatesPartial
                }
            }
            ValidationOutcome::InvalidOrder | ValidationOutcome::PastDate => {
                FormState::DatesPartial
            }
            ValidationOutcome::Valid => {
                if self.room.is_none() {
                    return FormState::DatesValid;
                }
                if self.pricing(today).is_priceable() {
                    FormState::Submittable
                } else {
                    FormState::Priced
                }
            }
        }
    }

    /// Build the submission payload for the current inputs.
    pub fn draft(&self, today: NaiveDate) -> Result<BookingDraft, DraftError> {
        let room = self.room.as_ref().ok_or(DraftError::IncompleteInput)?;
        if !self.validation(today).is_valid() {
            return Err(DraftError::IncompleteInput);
        }
        let range = self.range().ok_or(DraftError::IncompleteInput)?;
        let pricing = self.pricing(today);

        BookingDraftAssembler::assemble(
            room.room_id,
            range,
            self.guests,
            pricing.total_amount,
            self.special_requests.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn standard_room() -> Room {
        serde_json::from_str(
            r#"{"roomId": 42, "roomType": "Double", "pricePerNight": "100.00", "capacity": 2}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_walks_states_as_fields_fill_in() {
        let today = date(2025, 6, 1);
        let mut form = BookingForm::default();

        assert_eq!(form.state(today), FormState::Empty);

        form.set_check_in(Some(date(2025, 6, 1)));
        assert_eq!(form.state(today), FormState::DatesPartial);

        form.set_check_out(Some(date(2025, 6, 4)));
        assert_eq!(form.state(today), FormState::DatesValid);

        form.set_room(standard_room());
        form.set_guests(2);
        assert_eq!(form.state(today), FormState::Submittable);
    }

    #[test]
    fn test_clearing_a_date_falls_back() {
        let today = date(2025, 6, 1);
        let mut form = BookingForm::default();
        form.set_room(standard_room());
        form.set_check_in(Some(date(2025, 6, 1)));
        form.set_check_out(Some(date(2025, 6, 4)));
        assert_eq!(form.state(today), FormState::Submittable);

        form.set_check_out(None);
        assert_eq!(form.state(today), FormState::DatesPartial);
        assert_eq!(form.pricing(today).nights, 0);
    }

    #[test]
    fn test_invalid_order_never_prices() {
        let today = date(2025, 6, 1);
        let mut form = BookingForm::default();
        form.set_room(standard_room());
        form.set_check_in(Some(date(2025, 6, 4)));
        form.set_check_out(Some(date(2025, 6, 4)));

        assert_eq!(form.state(today), FormState::DatesPartial);
        assert_eq!(form.pricing(today).total_amount, Decimal::ZERO);
        assert_eq!(form.draft(today), Err(DraftError::IncompleteInput));
    }

    #[test]
    fn test_zero_rate_room_is_priced_but_not_submittable() {
        let today = date(2025, 6, 1);
        let mut form = BookingForm::default();
        form.set_room(
            serde_json::from_str(
                r#"{"roomId": 9, "roomType": "Comp", "pricePerNight": 0, "capacity": 2}"#,
            )
            .unwrap(),
        );
        form.set_check_in(Some(date(2025, 6, 1)));
        form.set_check_out(Some(date(2025, 6, 3)));

        assert_eq!(form.state(today), FormState::Priced);
        assert_eq!(form.draft(today), Err(DraftError::UnpricedStay));
    }

    #[test]
    fn test_capacity_check_is_advisory() {
        let today = date(2025, 6, 1);
        let mut form = BookingForm::default();
        form.set_room(standard_room());
        form.set_check_in(Some(date(2025, 6, 1)));
        form.set_check_out(Some(date(2025, 6, 4)));
        form.set_guests(5);

        // Over capacity still prices; the UI decides whether to block it.
        assert!(form.guests_exceed_capacity());
        assert_eq!(form.pricing(today).total_amount, dec!(1500.00));
        assert_eq!(form.state(today), FormState::Submittable);
    }

    #[test]
    fn test_draft_carries_special_requests() {
        let today = date(2025, 6, 1);
        let mut form = BookingForm::default();
        form.set_room(standard_room());
        form.set_check_in(Some(date(2025, 6, 1)));
        form.set_check_out(Some(date(2025, 6, 4)));
        form.set_guests(2);
        form.set_special_requests(Some("High floor.".to_string()));

        let draft = form.draft(today).unwrap();
        assert_eq!(draft.total_amount, dec!(600.00));
        assert_eq!(draft.special_requests.as_deref(), Some("High floor."));
    }
}
