//! # Equality, hashing and ordering
//!
//! All three route through the same gcd based canonicalization, so they agree
//! with each other and stay exact for arbitrarily signed denominators.
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::fraction::Fraction;
use crate::integer::gcd;

impl PartialEq for Fraction {
    /// Equal when the signs match and the absolute fields, each side reduced
    /// by its own gcd, are pairwise equal.
    ///
    /// Reducing each side by its own gcd handles differing un-normalized
    /// representations of the same value without computing a shared
    /// denominator.
    fn eq(&self, other: &Self) -> bool {
        if self.signum() != other.signum() {
            return false;
        }

        let lhs_gcd = gcd(self.numerator, self.denominator);
        let rhs_gcd = gcd(other.numerator, other.denominator);
        debug_assert!(self.numerator % lhs_gcd == 0 && self.denominator % lhs_gcd == 0);
        debug_assert!(other.numerator % rhs_gcd == 0 && other.denominator % rhs_gcd == 0);

        self.numerator.abs() / lhs_gcd == other.numerator.abs() / rhs_gcd
            && self.denominator.abs() / lhs_gcd == other.denominator.abs() / rhs_gcd
    }
}

impl Eq for Fraction {}

impl Hash for Fraction {
    /// Combines the signum with the gcd reduced absolute fields, so equal
    /// fractions hash identically.
    fn hash<H: Hasher>(&self, state: &mut H) {
        let gcd = gcd(self.numerator, self.denominator);
        debug_assert!(self.numerator % gcd == 0 && self.denominator % gcd == 0);

        self.signum().hash(state);
        (self.numerator.abs() / gcd).hash(state);
        (self.denominator.abs() / gcd).hash(state);
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    /// Compare the numerators after scaling both sides to a common
    /// denominator.
    ///
    /// The scaling gcd is signed by the product of both denominators' signs,
    /// which normalizes the common denominator to positive, so the scaled
    /// numerators compare directly.
    fn cmp(&self, other: &Self) -> Ordering {
        let gcd = gcd(self.denominator, other.denominator)
            * self.denominator.signum()
            * other.denominator.signum();
        let lhs_multiplier = other.denominator / gcd;
        let rhs_multiplier = self.denominator / gcd;
        debug_assert_eq!(self.denominator * lhs_multiplier, other.denominator * rhs_multiplier);

        (self.numerator * lhs_multiplier).cmp(&(other.numerator * rhs_multiplier))
    }
}
