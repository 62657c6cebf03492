//! Catalog items offered by an establishment.
//!
//! The set of variants is closed: every item is a [`Dish`], a [`Drink`] or a [`Dessert`].
//! Each variant carries its own fixed discount rate. Serialized items are tagged with a
//! `variant` field (`dish`, `drink`, `dessert`) so a document can be read back into the
//! right variant.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::ValidationError;

pub mod dessert;
pub mod dish;
pub mod drink;
pub mod price;

pub use dessert::Dessert;
pub use dish::Dish;
pub use drink::Drink;
pub use price::Price;

/// Discriminator identifying which variant a serialized record represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantTag {
    Dish,
    Drink,
    Dessert,
}

impl VariantTag {
    pub const ALL: [VariantTag; 3] = [VariantTag::Dish, VariantTag::Drink, VariantTag::Dessert];

    pub fn as_str(&self) -> &'static str {
        match self {
            VariantTag::Dish => "dish",
            VariantTag::Drink => "drink",
            VariantTag::Dessert => "dessert",
        }
    }

    /// Capitalized name for display.
    pub fn label(&self) -> &'static str {
        match self {
            VariantTag::Dish => "Dish",
            VariantTag::Drink => "Drink",
            VariantTag::Dessert => "Dessert",
        }
    }

    pub fn discount_percent(&self) -> u32 {
        match self {
            VariantTag::Dish => Dish::DISCOUNT_PERCENT,
            VariantTag::Drink => Drink::DISCOUNT_PERCENT,
            VariantTag::Dessert => Dessert::DISCOUNT_PERCENT,
        }
    }
}

impl fmt::Display for VariantTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VariantTag {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim();
        VariantTag::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::UnknownVariant(wanted.to_string()))
    }
}

/// Size of a drink or dessert: a volume in ml or a free-form label ("large", "Médio").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeLabel {
    Volume(u32),
    Label(String),
}

impl From<&str> for SizeLabel {
    fn from(raw: &str) -> Self {
        let raw = raw.trim();
        // Only canonical numbers become volumes so "0300" is kept as typed.
        match raw.parse::<u32>() {
            Ok(ml) if ml.to_string() == raw => SizeLabel::Volume(ml),
            _ => SizeLabel::Label(raw.to_string()),
        }
    }
}

impl fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeLabel::Volume(ml) => write!(f, "{}", ml),
            SizeLabel::Label(label) => f.write_str(label),
        }
    }
}

/// A priced entry in an establishment's catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum CatalogItem {
    Dish(Dish),
    Drink(Drink),
    Dessert(Dessert),
}

impl CatalogItem {
    /// Builds the variant named by `tag` from a record holding its fields.
    ///
    /// Fails when the record lacks `name`/`price`, carries a negative price or has
    /// fields of the wrong type. Absent descriptive fields become `None`.
    pub fn from_record(tag: VariantTag, record: JsonValue) -> Result<Self, ValidationError> {
        let invalid = |e: serde_json::Error| ValidationError::InvalidRecord(e.to_string());
        match tag {
            VariantTag::Dish => serde_json::from_value(record).map(CatalogItem::Dish).map_err(invalid),
            VariantTag::Drink => serde_json::from_value(record).map(CatalogItem::Drink).map_err(invalid),
            VariantTag::Dessert => serde_json::from_value(record)
                .map(CatalogItem::Dessert)
                .map_err(invalid),
        }
    }

    /// Full tagged record, as written to disk and returned by the API.
    pub fn to_record(&self) -> Result<JsonValue, serde_json::Error> {
        serde_json::to_value(self)
    }

    pub fn variant(&self) -> VariantTag {
        match self {
            CatalogItem::Dish(_) => VariantTag::Dish,
            CatalogItem::Drink(_) => VariantTag::Drink,
            CatalogItem::Dessert(_) => VariantTag::Dessert,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            CatalogItem::Dish(dish) => dish.name(),
            CatalogItem::Drink(drink) => drink.name(),
            CatalogItem::Dessert(dessert) => dessert.name(),
        }
    }

    pub fn price(&self) -> Price {
        match self {
            CatalogItem::Dish(dish) => dish.price(),
            CatalogItem::Drink(drink) => drink.price(),
            CatalogItem::Dessert(dessert) => dessert.price(),
        }
    }

    /// Takes the variant's fixed rate off the current price. Applying it again compounds.
    pub fn apply_discount(&mut self) {
        match self {
            CatalogItem::Dish(dish) => dish.apply_discount(),
            CatalogItem::Drink(drink) => drink.apply_discount(),
            CatalogItem::Dessert(dessert) => dessert.apply_discount(),
        }
    }
}

impl From<Dish> for CatalogItem {
    fn from(dish: Dish) -> Self {
        CatalogItem::Dish(dish)
    }
}

impl From<Drink> for CatalogItem {
    fn from(drink: Drink) -> Self {
        CatalogItem::Drink(drink)
    }
}

impl From<Dessert> for CatalogItem {
    fn from(dessert: Dessert) -> Self {
        CatalogItem::Dessert(dessert)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_parsing_is_case_insensitive() {
        assert_eq!("Drink".parse::<VariantTag>().unwrap(), VariantTag::Drink);
        assert_eq!(" dessert ".parse::<VariantTag>().unwrap(), VariantTag::Dessert);
        assert!(matches!(
            "combo".parse::<VariantTag>(),
            Err(ValidationError::UnknownVariant(tag)) if tag == "combo"
        ));
    }

    #[test]
    fn size_label_prefers_volume() {
        assert_eq!(SizeLabel::from("300"), SizeLabel::Volume(300));
        assert_eq!(SizeLabel::from("grande"), SizeLabel::Label("grande".to_string()));
    }
}
