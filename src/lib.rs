//! Stay pricing and date-range validation core for the hotel booking
//! platform. Everything here is a pure function of its inputs; the caller
//! owns the form state and submits the resulting `BookingDraft` itself.

pub mod models;
pub mod services;

pub use models::booking::{BookingDraft, DateRange, PricingResult, StayRequest};
pub use models::room::Room;
pub use services::booking_draft_service::{BookingDraftAssembler, DraftError};
pub use services::booking_form::{BookingForm, FormState};
pub use services::date_range_service::{DateRangeValidator, NightsCalculator, ValidationOutcome};
pub use services::pricing_service::{PricingPolicy, StayPriceCalculator};
