//! # Exact fraction arithmetic
//!
//! A [`Fraction`] is a pair of machine integers denoting `numerator / denominator`
//! exactly. All arithmetic, comparison and rounding is done on integers, so
//! results never suffer from floating point error.
//!
//! Fractions are not stored in reduced form. `2/4` and `1/2` compare equal and
//! hash identically, but keep the representation they were built with until
//! [`Fraction::normalized`] is called. The denominator may be negative; `1/-2`
//! is a valid fraction equal to `-1/2`.
pub use fraction::Fraction;
pub use fraction::ParseFractionError;
pub use fraction::RoundingRule;
pub use integer::gcd;
pub use sign::Sign;

mod fraction;
mod integer;
mod macros;
mod sign;
