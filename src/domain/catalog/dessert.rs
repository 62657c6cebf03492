use serde::{Deserialize, Serialize};

use super::{Price, SizeLabel};

/// A dessert; `kind` is its category (ice cream, pie, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dessert {
    name: String,
    price: Price,
    description: Option<String>,
    kind: Option<String>,
    size: Option<SizeLabel>,
}

impl Dessert {
    pub const DISCOUNT_PERCENT: u32 = 15;

    pub fn new(
        name: impl Into<String>,
        price: Price,
        description: Option<String>,
        kind: Option<String>,
        size: Option<SizeLabel>,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            description,
            kind,
            size,
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

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn size(&self) -> Option<&SizeLabel> {
        self.size.as_ref()
    }

    pub fn apply_discount(&mut self) {
        self.price = self.price.discounted(Self::DISCOUNT_PERCENT);
    }
}
