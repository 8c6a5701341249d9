//! Revenue lost to missed calls, projected over a week, a month and a year.
//!
//! Amounts are kept in whole cents. Ticket values are whole dollars and the
//! close rate is a whole percent, so `calls * rate% * ticket` dollars is
//! exactly `calls * rate * ticket` cents and the multiples never drift.

use std::fmt;
use std::ops::RangeInclusive;

pub const MISSED_CALLS_RANGE: RangeInclusive<u32> = 5..=50;
pub const CLOSE_RATE_RANGE: RangeInclusive<u32> = 10..=80;
pub const TICKET_VALUE_RANGE: RangeInclusive<u32> = 150..=1000;
pub const TICKET_VALUE_STEP: u32 = 25;

const WEEKS_PER_MONTH: u64 = 4;
const WEEKS_PER_YEAR: u64 = 52;

/// A US dollar amount in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Usd(u64);

impl Usd {
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn from_dollars(dollars: u64) -> Self {
        Self(dollars * 100)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    fn times(self, factor: u64) -> Self {
        Self(self.0 * factor)
    }
}

impl fmt::Display for Usd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_usd(*self))
    }
}

/// en-US currency with no fraction digits, e.g. `$109,200`.
/// Half cents round away from zero.
pub fn format_usd(amount: Usd) -> String {
    let dollars = (amount.cents() + 50) / 100;
    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    grouped.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimatorInputs {
    pub missed_calls_per_week: u32,
    pub average_ticket_value: u32,
    pub close_rate_percent: u32,
}

impl Default for EstimatorInputs {
    fn default() -> Self {
        Self {
            missed_calls_per_week: 15,
            average_ticket_value: 350,
            close_rate_percent: 40,
        }
    }
}

impl EstimatorInputs {
    /// Pulls raw slider values into range; the ticket value also snaps to
    /// its 25 dollar step.
    pub fn clamped(missed_calls_per_week: u32, close_rate_percent: u32, average_ticket_value: u32) -> Self {
        Self {
            missed_calls_per_week: clamp(missed_calls_per_week, &MISSED_CALLS_RANGE),
            close_rate_percent: clamp(close_rate_percent, &CLOSE_RATE_RANGE),
            average_ticket_value: snap_ticket(clamp(average_ticket_value, &TICKET_VALUE_RANGE)),
        }
    }

    pub fn with_missed_calls(self, value: u32) -> Self {
        Self::clamped(value, self.close_rate_percent, self.average_ticket_value)
    }

    pub fn with_close_rate(self, value: u32) -> Self {
        Self::clamped(self.missed_calls_per_week, value, self.average_ticket_value)
    }

    pub fn with_ticket_value(self, value: u32) -> Self {
        Self::clamped(self.missed_calls_per_week, self.close_rate_percent, value)
    }

    pub fn estimate(&self) -> EstimatorOutputs {
        compute(
            self.missed_calls_per_week,
            self.close_rate_percent,
            self.average_ticket_value,
        )
    }
}

fn clamp(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}

fn snap_ticket(value: u32) -> u32 {
    let base = *TICKET_VALUE_RANGE.start();
    let steps = (value - base + TICKET_VALUE_STEP / 2) / TICKET_VALUE_STEP;
    (base + steps * TICKET_VALUE_STEP).min(*TICKET_VALUE_RANGE.end())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimatorOutputs {
    pub weekly: Usd,
    pub monthly: Usd,
    pub yearly: Usd,
}

/// `weekly = calls * (close_rate / 100) * ticket`, month = 4 weeks,
/// year = 52 weeks. Callers pass values already in range.
pub fn compute(missed_calls_per_week: u32, close_rate_percent: u32, average_ticket_value: u32) -> EstimatorOutputs {
    let weekly = Usd::from_cents(
        u64::from(missed_calls_per_week) * u64::from(close_rate_percent) * u64::from(average_ticket_value),
    );
    EstimatorOutputs {
        weekly,
        monthly: weekly.times(WEEKS_PER_MONTH),
        yearly: weekly.times(WEEKS_PER_YEAR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dollars(outputs: EstimatorOutputs) -> (u64, u64, u64) {
        (
            outputs.weekly.cents() / 100,
            outputs.monthly.cents() / 100,
            outputs.yearly.cents() / 100,
        )
    }

    #[test]
    fn default_inputs() {
        assert_eq!(dollars(compute(15, 40, 350)), (2100, 8400, 109_200));
        assert_eq!(EstimatorInputs::default().estimate(), compute(15, 40, 350));
    }

    #[test]
    fn lower_bound() {
        assert_eq!(dollars(compute(5, 10, 150)), (75, 300, 3900));
    }

    #[test]
    fn upper_bound() {
        assert_eq!(dollars(compute(50, 80, 1000)), (40_000, 160_000, 2_080_000));
    }

    #[test]
    fn fractional_weekly_loss_stays_exact() {
        // 7 * 11% * $175 = $134.75
        let out = compute(7, 11, 175);
        assert_eq!(out.weekly, Usd::from_cents(13_475));
        assert_eq!(out.monthly, Usd::from_cents(53_900));
        assert_eq!(out.yearly, Usd::from_cents(700_700));
    }

    #[test]
    fn horizons_are_exact_multiples_across_the_whole_range() {
        for calls in MISSED_CALLS_RANGE {
            for rate in CLOSE_RATE_RANGE {
                for ticket in TICKET_VALUE_RANGE.step_by(TICKET_VALUE_STEP as usize) {
                    let out = compute(calls, rate, ticket);
                    assert_eq!(out.monthly.cents(), 4 * out.weekly.cents());
                    assert_eq!(out.yearly.cents(), 52 * out.weekly.cents());
                }
            }
        }
    }

    #[test]
    fn monotonic_in_each_input() {
        let base = EstimatorInputs::default();
        let mut last = Usd::default();
        for calls in MISSED_CALLS_RANGE {
            let weekly = base.with_missed_calls(calls).estimate().weekly;
            assert!(weekly >= last);
            last = weekly;
        }
        let mut last = Usd::default();
        for rate in CLOSE_RATE_RANGE {
            let weekly = base.with_close_rate(rate).estimate().weekly;
            assert!(weekly >= last);
            last = weekly;
        }
        let mut last = Usd::default();
        for ticket in TICKET_VALUE_RANGE.step_by(TICKET_VALUE_STEP as usize) {
            let weekly = base.with_ticket_value(ticket).estimate().weekly;
            assert!(weekly >= last);
            last = weekly;
        }
    }

    #[test]
    fn clamps_out_of_range_inputs() {
        let low = EstimatorInputs::clamped(0, 0, 0);
        assert_eq!(low, EstimatorInputs { missed_calls_per_week: 5, close_rate_percent: 10, average_ticket_value: 150 });
        let high = EstimatorInputs::clamped(500, 100, 5000);
        assert_eq!(high, EstimatorInputs { missed_calls_per_week: 50, close_rate_percent: 80, average_ticket_value: 1000 });
    }

    #[test]
    fn ticket_value_snaps_to_step() {
        assert_eq!(EstimatorInputs::default().with_ticket_value(362).average_ticket_value, 350);
        assert_eq!(EstimatorInputs::default().with_ticket_value(363).average_ticket_value, 375);
        assert_eq!(EstimatorInputs::default().with_ticket_value(999).average_ticket_value, 1000);
    }

    #[test]
    fn formats_like_en_us_currency() {
        assert_eq!(format_usd(Usd::from_dollars(75)), "$75");
        assert_eq!(format_usd(Usd::from_dollars(109_200)), "$109,200");
        assert_eq!(format_usd(Usd::from_dollars(2_080_000)), "$2,080,000");
        assert_eq!(format_usd(Usd::from_cents(13_450)), "$135");
        assert_eq!(format_usd(Usd::from_cents(13_449)), "$134");
        assert_eq!(Usd::from_dollars(1000).to_string(), "$1,000");
        assert_eq!(format_usd(Usd::default()), "$0");
    }
}
