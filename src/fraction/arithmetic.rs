//! # Arithmetic
//!
//! Operators on fractions. Every operation routes through the validated
//! constructor; inputs are well formed, so construction can not fail here.
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use num::{One, Zero};

use crate::fraction::Fraction;
use crate::integer::gcd;

impl Neg for Fraction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.numerator, self.denominator)
            .expect("nonzero denominator")
    }
}

impl Add for Fraction {
    type Output = Self;

    /// Sum on the common denominator `lhs.denominator * (rhs.denominator / gcd)`.
    ///
    /// Scaling both sides by the other denominator divided by the
    /// denominators' gcd reaches the same common denominator as naive cross
    /// multiplication would, with smaller intermediate magnitudes.
    fn add(self, rhs: Self) -> Self::Output {
        let gcd = gcd(self.denominator, rhs.denominator);
        let lhs_multiplier = rhs.denominator / gcd;
        let rhs_multiplier = self.denominator / gcd;
        debug_assert_eq!(self.denominator * lhs_multiplier, rhs.denominator * rhs_multiplier);

        Self::new(
            self.numerator * lhs_multiplier + rhs.numerator * rhs_multiplier,
            self.denominator * lhs_multiplier,
        ).expect("nonzero denominator")
    }
}

impl Sub for Fraction {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}

impl Mul for Fraction {
    type Output = Self;

    /// Field by field, unreduced.
    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.numerator * rhs.numerator, self.denominator * rhs.denominator)
            .expect("nonzero denominator")
    }
}

impl Mul<i64> for Fraction {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        Self::new(self.numerator * rhs, self.denominator)
            .expect("nonzero denominator")
    }
}

impl Div for Fraction {
    type Output = Self;

    /// Multiplication by the reciprocal.
    ///
    /// # Panics
    ///
    /// When the right operand is a zero valued fraction. A zero divisor is a
    /// contract violation by the caller, not a recoverable condition.
    fn div(self, rhs: Self) -> Self::Output {
        assert_ne!(rhs.numerator, 0, "division by zero");

        Self::new(self.numerator * rhs.denominator, self.denominator * rhs.numerator)
            .expect("nonzero denominator")
    }
}

impl Div<i64> for Fraction {
    type Output = Self;

    /// # Panics
    ///
    /// When the divisor is zero.
    fn div(self, rhs: i64) -> Self::Output {
        assert_ne!(rhs, 0, "division by zero");

        Self::new(self.numerator, self.denominator * rhs)
            .expect("nonzero denominator")
    }
}

impl AddAssign for Fraction {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Fraction {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Fraction {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

impl One for Fraction {
    fn one() -> Self {
        Self::ONE
    }
}
