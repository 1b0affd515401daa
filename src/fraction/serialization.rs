//! # Serialization
//!
//! Fractions serialize as their canonical string form, exactly as stored,
//! and deserialize from the lenient grammar. A value that round trips keeps
//! its fields bit for bit, not merely its rational value.
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::fraction::Fraction;

impl Serialize for Fraction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Fraction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Self::from_str_lenient(&text).map_err(|error| {
            de::Error::custom(format_args!("invalid fraction string {:?}: {}", text, error))
        })
    }
}
