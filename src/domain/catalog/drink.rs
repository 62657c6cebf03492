use serde::{Deserialize, Serialize};

use super::{Price, SizeLabel};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drink {
    name: String,
    price: Price,
    size: Option<SizeLabel>,
}

impl Drink {
    pub const DISCOUNT_PERCENT: u32 = 8;

    pub fn new(name: impl Into<String>, price: Price, size: Option<SizeLabel>) -> Self {
        Self {
            name: name.into(),
            price,
            size,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn size(&self) -> Option<&SizeLabel> {
        self.size.as_ref()
    }

    pub fn apply_discount(&mut self) {
        self.price = self.price.discounted(Self::DISCOUNT_PERCENT);
    }
}
