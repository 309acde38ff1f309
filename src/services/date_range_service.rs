use chrono::NaiveDate;

/// Result of validating a candidate check-in/check-out pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// One or both dates missing. Expected while the form is being filled;
    /// the UI disables submission instead of showing an error.
    Incomplete,
    /// Check-out is not strictly after check-in. Equal dates land here too:
    /// zero-night stays are rejected, never clamped to one night.
    InvalidOrder,
    /// Check-in is before the caller-supplied reference date.
    PastDate,
    Valid,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// User-facing copy for the failures worth surfacing. `Incomplete` gets
    /// none on purpose; an unfinished form is not an error.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ValidationOutcome::InvalidOrder => {
                Some("Check-out date must be after check-in date.")
            }
            ValidationOutcome::PastDate => Some("Check-in date cannot be in the past."),
            ValidationOutcome::Incomplete | ValidationOutcome::Valid => None,
        }
    }
}

pub struct DateRangeValidator;

impl DateRangeValidator {
    /// Validate a candidate pair against `today`. The reference date is
    /// always supplied by the caller; nothing here reads the wall clock.
    pub fn validate(
        check_in: Option<NaiveDate>,
        check_out: Option<NaiveDate>,
        today: NaiveDate,
    ) -> ValidationOutcome {
        let (check_in, check_out) = match (check_in, check_out) {
            (Some(check_in), Some(check_out)) => (check_in, check_out),
            _ => return ValidationOutcome::Incomplete,
        };

        if check_out <= check_in {
            return ValidationOutcome::InvalidOrder;
        }
        if check_in < today {
            return ValidationOutcome::PastDate;
        }

        ValidationOutcome::Valid
    }
}

pub struct NightsCalculator;

impl NightsCalculator {
    /// Whole-calendar-day difference between the two dates. Same-day pairs
    /// are 0 nights and reversed pairs go negative, so callers that skipped
    /// validation degrade to a zero total instead of panicking.
    pub fn nights(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
        (check_out - check_in).num_days()
    }
}
