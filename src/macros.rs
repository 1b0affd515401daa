/// Shorthand for creating a fraction in tests.
#[macro_export]
macro_rules! frac {
    ($value:expr) => {
        $crate::Fraction::from($value as i64)
    };
    ($numerator:expr, $denominator:expr) => {
        $crate::Fraction::new($numerator, $denominator).unwrap()
    };
}
