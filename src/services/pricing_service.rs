use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::booking::{PricingResult, StayRequest};
use crate::services::date_range_service::NightsCalculator;

/// How guest count folds into the stay total.
///
/// The booking pages historically disagreed here: some multiplied the
/// nightly rate by the guest count, others charged the flat nightly rate no
/// matter how many guests stayed. Both are kept as explicit policies, with
/// `PerGuest` as the platform default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PricingPolicy {
    /// `nights * rate * guests`. The default.
    PerGuest,
    /// `nights * (rate + extra_guests * surcharge)`, where extra guests are
    /// those above `base_occupancy`. With a zero surcharge this is the old
    /// "flat nightly rate regardless of guests" behavior.
    FlatRate {
        surcharge_per_extra_guest: Decimal,
        base_occupancy: u32,
    },
}

impl Default for PricingPolicy {
    fn default() -> Self {
        PricingPolicy::PerGuest
    }
}

impl PricingPolicy {
    /// Flat nightly rate with no per-guest surcharge.
    pub fn flat() -> Self {
        PricingPolicy::FlatRate {
            surcharge_per_extra_guest: Decimal::ZERO,
            base_occupancy: 1,
        }
    }
}

pub struct StayPriceCalculator;

impl StayPriceCalculator {
    /// Total for a stay, rounded half-up to cents exactly once at the end,
    /// never per night. Non-positive nights price to zero (the incomplete
    /// form state, not an error) and guest counts below 1 clamp to 1.
    pub fn price(
        nights: i64,
        per_night_rate: Decimal,
        guests: u32,
        policy: PricingPolicy,
    ) -> Decimal {
        if nights <= 0 {
            return Decimal::ZERO;
        }

        let guests = guests.max(1);
        let nights = Decimal::from(nights);

        let total = match policy {
            PricingPolicy::PerGuest => nights * per_night_rate * Decimal::from(guests),
            PricingPolicy::FlatRate {
                surcharge_per_extra_guest,
                base_occupancy,
            } => {
                let extra_guests = guests.saturating_sub(base_occupancy);
                nights * (per_night_rate + Decimal::from(extra_guests) * surcharge_per_extra_guest)
            }
        };

        // A negative total means a broken rate or surcharge reached
        // arithmetic; surface it in development and price to zero in release.
        debug_assert!(total >= Decimal::ZERO, "stay total went negative: {}", total);
        if total < Decimal::ZERO {
            log::warn!(
                "computed negative stay total {} from rate {} over {} nights",
                total,
                per_night_rate,
                nights
            );
            return Decimal::ZERO;
        }

        total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Price a full stay request, deriving nights from its date range. An
    /// unvalidated or reversed range degrades to the empty result.
    pub fn quote(request: &StayRequest, policy: PricingPolicy) -> PricingResult {
        let rate = request.room.price_per_night;
        let nights = NightsCalculator::nights(request.range.check_in, request.range.check_out);
        if nights <= 0 {
            return PricingResult::empty(rate);
        }

        PricingResult {
            nights,
            total_amount: Self::price(nights, rate, request.guests, policy),
            per_night_rate: rate,
        }
    }
}
