use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// Non-negative amount with exact decimal arithmetic.
///
/// Serialized as a JSON number so documents stay readable (`4.6`, `10.97`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(Decimal);

impl Price {
    pub fn new(amount: Decimal) -> Result<Self, ValidationError> {
        if amount < Decimal::ZERO {
            return Err(ValidationError::NegativePrice(amount));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Price after taking `percent` off, rounded to cents (half away from zero).
    pub fn discounted(self, percent: u32) -> Self {
        let factor = Decimal::ONE - Decimal::new(i64::from(percent), 2);
        Self(
            (self.0 * factor)
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
                .max(Decimal::ZERO),
        )
    }
}

impl FromStr for Price {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().replace(',', ".");
        let amount = Decimal::from_str(&normalized)
            .map_err(|e| ValidationError::InvalidRecord(format!("invalid price '{}': {}", raw, e)))?;
        Self::new(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = rust_decimal::serde::float::deserialize(deserializer)?;
        Price::new(amount).map_err(serde::de::Error::custom)
    }
}
