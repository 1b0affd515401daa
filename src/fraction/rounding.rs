//! # Rounding
//!
//! Rounding a fraction to an integer under a closed set of rules. The engine
//! operates on the normalized form, where the denominator is guaranteed
//! positive, so the sign of the value is the sign of the numerator.
use crate::fraction::Fraction;

/// A rule deciding which integer a non-integer fraction rounds to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RoundingRule {
    /// Toward zero.
    TowardZero,
    /// Toward positive infinity.
    Up,
    /// Toward negative infinity.
    Down,
    /// Away from zero.
    AwayFromZero,
    /// To the nearest integer, away from zero when two are equally near.
    ToNearestOrAwayFromZero,
    /// To the nearest integer, to the even one when two are equally near.
    ToNearestOrEven,
}

impl Fraction {
    /// Rounded with [`RoundingRule::ToNearestOrAwayFromZero`].
    pub fn rounded(&self) -> i64 {
        self.rounded_with(RoundingRule::ToNearestOrAwayFromZero)
    }

    /// The integer obtained by rounding under the given rule.
    pub fn rounded_with(&self, rule: RoundingRule) -> i64 {
        let normalized = self.normalized();
        debug_assert!(normalized.denominator > 0);

        // The trivial case first.
        if normalized.denominator == 1 {
            return normalized.numerator;
        }

        let truncated = normalized.numerator / normalized.denominator;
        match rule {
            RoundingRule::TowardZero => truncated,
            RoundingRule::Up => {
                if normalized.numerator >= 0 { truncated + 1 } else { truncated }
            },
            RoundingRule::Down => {
                if normalized.numerator >= 0 { truncated } else { truncated - 1 }
            },
            RoundingRule::AwayFromZero => {
                if normalized.numerator >= 0 { truncated + 1 } else { truncated - 1 }
            },
            RoundingRule::ToNearestOrAwayFromZero => {
                // Shift by one half toward the value's sign, then truncate.
                // The recursive call re-normalizes the shifted fraction.
                if normalized.numerator >= 0 {
                    (normalized + Self::ONE_HALF).rounded_with(RoundingRule::TowardZero)
                } else {
                    (normalized - Self::ONE_HALF).rounded_with(RoundingRule::TowardZero)
                }
            },
            RoundingRule::ToNearestOrEven => match normalized.denominator {
                1 => unreachable!("denominator 1 is handled by the trivial case"),
                2 => {
                    // An exact midpoint, halfway between two integers. Take
                    // the even one.
                    if truncated % 2 == 0 {
                        truncated
                    } else if normalized.numerator >= 0 {
                        truncated + 1
                    } else {
                        truncated - 1
                    }
                },
                _ => normalized.rounded_with(RoundingRule::ToNearestOrAwayFromZero),
            },
        }
    }
}
