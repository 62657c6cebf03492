use serde::{Deserialize, Serialize};

use super::Price;

/// A plated dish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    name: String,
    price: Price,
    description: Option<String>,
}

impl Dish {
    pub const DISCOUNT_PERCENT: u32 = 5;

    pub fn new(name: impl Into<String>, price: Price, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            price,
            description,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn apply_discount(&mut self) {
        self.price = self.price.discounted(Self::DISCOUNT_PERCENT);
    }
}
