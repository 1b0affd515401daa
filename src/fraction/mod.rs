//! # Fractions
//!
//! The fraction value type and its operations. A fraction owns a numerator
//! and a denominator; the only invariant enforced at construction is that the
//! denominator is not zero. Values are not kept in reduced form and the
//! denominator may be negative.
use crate::integer::gcd;
use crate::sign::Sign;

pub use parse::ParseFractionError;
pub use rounding::RoundingRule;

mod arithmetic;
mod compare;
mod parse;
mod rounding;
mod serialization;

/// An exact rational number, `numerator / denominator`.
///
/// Two fractions are equal if and only if they denote the same rational
/// value, regardless of reduction state or sign placement; `2/-4` and `-1/2`
/// are equal. Comparisons are done on integers, so there is never a precision
/// issue. See the `PartialEq`, `Hash` and `Ord` implementations.
///
/// This is a plain value type. Every operation reads its inputs and returns a
/// newly constructed fraction, so values can be shared freely across threads.
#[derive(Clone, Copy, Debug)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    /// `0/1`
    pub const ZERO: Self = Self { numerator: 0, denominator: 1 };

    /// `1/1`
    pub const ONE: Self = Self { numerator: 1, denominator: 1 };

    /// `1/2`
    pub const ONE_HALF: Self = Self { numerator: 1, denominator: 2 };

    /// The fraction `value/100`.
    pub const fn percentage(value: i64) -> Self {
        Self { numerator: value, denominator: 100 }
    }

    /// Create a new fraction.
    ///
    /// # Arguments
    ///
    /// * `numerator`: Any integer.
    /// * `denominator`: Any integer. May be negative.
    ///
    /// # Return value
    ///
    /// `None` if and only if the denominator is zero. No other validation is
    /// done; the fraction is stored exactly as given.
    pub const fn new(numerator: i64, denominator: i64) -> Option<Self> {
        if denominator == 0 {
            return None;
        }

        Some(Self { numerator, denominator })
    }

    pub const fn numerator(&self) -> i64 {
        self.numerator
    }

    pub const fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Replace the numerator, keeping the denominator.
    ///
    /// The denominator is read-only after construction; it is the field the
    /// nonzero invariant lives on.
    pub fn set_numerator(&mut self, value: i64) {
        self.numerator = value;
    }

    /// Sign of the fraction as an integer in `{-1, 0, 1}`.
    ///
    /// Zero exactly when the numerator is zero.
    pub fn signum(&self) -> i64 {
        self.numerator.signum() * self.denominator.signum()
    }

    /// The exact sign of the fraction.
    ///
    /// Contrary to [`Fraction::signum`], this can not be zero. If the
    /// fraction is equal to 0 (zero numerator), the result is the sign of the
    /// denominator, which is never zero for a well formed fraction.
    pub fn signum_nonzero(&self) -> Sign {
        if self.numerator == 0 {
            return Sign::of(self.denominator);
        }

        Sign::of(self.numerator) * Sign::of(self.denominator)
    }

    /// Whether the fraction is greater than zero.
    pub fn is_positive(&self) -> bool {
        self.signum() > 0
    }

    /// Whether the fraction is less than zero.
    pub fn is_negative(&self) -> bool {
        self.signum() < 0
    }

    /// Whether the fraction is greater than or equal to zero.
    pub fn is_non_negative(&self) -> bool {
        self.signum() >= 0
    }

    /// Whether the fraction is less than or equal to zero.
    pub fn is_non_positive(&self) -> bool {
        self.signum() <= 0
    }

    /// The `f32` value of this fraction.
    ///
    /// Due to `f32` precision, in some extreme cases the converted value of
    /// the fraction and of the normalized fraction might not be equal. The
    /// fraction `418950000000000000*3 / 10000000000000000*3` converts to
    /// `41.894997` while its normalized form converts to `41.895`. That is
    /// inherent to floating conversion of large integers, not a defect of the
    /// fraction.
    pub fn to_f32(&self) -> f32 {
        self.numerator as f32 / self.denominator as f32
    }

    /// The `f32` value of the normalized fraction.
    pub fn normalized_to_f32(&self) -> f32 {
        self.normalized().to_f32()
    }

    /// The `f64` value of this fraction.
    ///
    /// Due to `f64` precision, in some extreme cases the converted value of
    /// the fraction and of the normalized fraction might not be equal. See
    /// [`Fraction::to_f32`].
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// The `f64` value of the normalized fraction.
    pub fn normalized_to_f64(&self) -> f64 {
        self.normalized().to_f64()
    }

    /// The absolute value, field by field.
    pub fn abs(&self) -> Self {
        Self::new(self.numerator.abs(), self.denominator.abs())
            .expect("nonzero denominator")
    }

    /// Reduce to lowest terms with a positive denominator.
    ///
    /// Both fields are divided by `gcd(numerator, denominator)` signed by the
    /// denominator, so the result's denominator is always positive and the
    /// fields share no common factor beyond 1. This is the canonical form
    /// used wherever a comparison free of floating point is needed.
    pub fn normalized(&self) -> Self {
        let divisor = gcd(self.numerator, self.denominator) * self.denominator.signum();
        Self::new(self.numerator / divisor, self.denominator / divisor)
            .expect("nonzero denominator")
    }

    /// The next value in the positive direction, `1/|denominator|` away.
    ///
    /// The numerator moves by the denominator's sign, so the value increases
    /// regardless of how the sign is placed.
    pub fn next_up(&self) -> Self {
        Self::new(self.numerator + self.denominator.signum(), self.denominator)
            .expect("nonzero denominator")
    }

    /// The next value in the negative direction, `1/|denominator|` away.
    pub fn next_down(&self) -> Self {
        Self::new(self.numerator - self.denominator.signum(), self.denominator)
            .expect("nonzero denominator")
    }

    /// The same fraction with numerator and denominator swapped.
    ///
    /// `None` if the numerator is zero, as the result's denominator would be
    /// zero.
    pub fn inverse(&self) -> Option<Self> {
        Self::new(self.denominator, self.numerator)
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Self { numerator: value, denominator: 1 }
    }
}
