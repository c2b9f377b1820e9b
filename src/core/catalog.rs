//! Purchasing records: suppliers, branded products, prices.
//!
//! Flat records with constructor-enforced field validation.  Persistence
//! and cross-record queries belong to whatever store wraps this crate.

use std::{error::Error, fmt};

use crate::core::{
    constants::{DESCR_LENGTH, NAME_LENGTH, PRICE_DECIMALS, WEIGHT_DECIMALS},
    slug::slugify,
};

/// Field-level validation faults.
#[derive(Debug, PartialEq)]
pub enum CatalogError {
    EmptyField(&'static str),
    FieldTooLong {
        field: &'static str,
        max: usize,
        got: usize,
    },
    BadAmount {
        field: &'static str,
        got: f64,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::EmptyField(x) => write!(f, "field `{x}` must not be blank"),
            CatalogError::FieldTooLong { field, max, got } => {
                write!(f, "field `{field}` is {got} chars, max {max}")
            }
            CatalogError::BadAmount { field, got } => {
                write!(f, "field `{field}` must be a non-negative number, got {got}")
            }
        }
    }
}
impl Error for CatalogError {}

fn checked_text(
    field: &'static str,
    value: impl Into<String>,
    max: usize,
    allow_blank: bool,
) -> Result<String, CatalogError> {
    let value = value.into();
    if !allow_blank && value.trim().is_empty() {
        return Err(CatalogError::EmptyField(field));
    }
    let got = value.chars().count();
    if got > max {
        return Err(CatalogError::FieldTooLong { field, max, got });
    }
    Ok(value)
}

fn checked_amount(field: &'static str, value: f64) -> Result<f64, CatalogError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CatalogError::BadAmount { field, got: value })
    }
}

#[inline]
fn round_dp(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).round() / scale
}

/// A place where ingredients may be purchased.  Mainly an anchor for
/// [`Price`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Supplier {
    pub name: String,
    pub slug: String,
    pub description: String,
}

impl Supplier {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        let name = checked_text("name", name, NAME_LENGTH, false)?;
        let description = checked_text("description", description, DESCR_LENGTH, true)?;
        let slug = slugify(&name);
        Ok(Self {
            name,
            slug,
            description,
        })
    }
}

impl fmt::Display for Supplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A branded instance of a generic ingredient.  Kept only to attach
/// brand names; the slug is derived from `brand` + `name`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub brand: String,
    pub slug: String,
    pub description: String,
}

impl Product {
    pub fn new(name: impl Into<String>, brand: impl Into<String>) -> Result<Self, CatalogError> {
        let name = checked_text("name", name, NAME_LENGTH, false)?;
        let brand = checked_text("brand", brand, NAME_LENGTH, false)?;
        let slug = slugify(&format!("{brand}_{name}"));
        Ok(Self {
            name,
            brand,
            slug,
            description: String::new(),
        })
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.brand)
    }
}

/// Price of an item: `price` dollars for `weight` kilograms.
///
/// Amounts are rounded on construction (cents, grams); there is no
/// decimal type here, so display code must not re-round.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Price {
    price: f64,
    weight: f64,
}

impl Price {
    pub fn new(price: f64, weight: f64) -> Result<Self, CatalogError> {
        let price = round_dp(checked_amount("price", price)?, PRICE_DECIMALS);
        let weight = round_dp(checked_amount("weight", weight)?, WEIGHT_DECIMALS);
        Ok(Self { price, weight })
    }

    #[must_use]
    pub fn price(&self) -> f64 {
        self.price
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Price per kilogram rounded to cents, for display use.  `None`
    /// when the weight is zero.
    #[must_use]
    pub fn per_kg(&self) -> Option<f64> {
        if self.weight == 0.0 {
            None
        } else {
            Some(round_dp(self.price / self.weight, PRICE_DECIMALS))
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.per_kg() {
            Some(pk) => write!(f, "${:.2} for {:.3}kg (${pk:.2}/kg)", self.price, self.weight),
            None => write!(f, "${:.2} for 0kg", self.price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supplier_slug_derives_from_name() {
        let s = Supplier::new("Bulk Foods Direct", "online, bulk").unwrap();
        assert_eq!(s.slug, "bulk-foods-direct");
    }

    #[test]
    fn blank_names_are_rejected() {
        assert_eq!(
            Supplier::new("   ", ""),
            Err(CatalogError::EmptyField("name"))
        );
    }

    #[test]
    fn overlong_names_are_rejected() {
        let long = "x".repeat(NAME_LENGTH + 1);
        assert!(matches!(
            Supplier::new(long, ""),
            Err(CatalogError::FieldTooLong { field: "name", .. })
        ));
    }

    #[test]
    fn product_slug_joins_brand_and_name() {
        let p = Product::new("Rolled Oats", "BrandCo").unwrap();
        assert_eq!(p.slug, "brandco_rolled-oats");
        assert_eq!(p.to_string(), "Rolled Oats (BrandCo)");
    }

    #[test]
    fn price_rounds_on_construction() {
        let p = Price::new(5.499, 0.7504).unwrap();
        assert_eq!(p.price(), 5.5);
        assert_eq!(p.weight(), 0.75);
    }

    #[test]
    fn per_kg_rounds_to_cents() {
        let p = Price::new(5.50, 0.750).unwrap();
        assert_eq!(p.per_kg(), Some(7.33));
    }

    #[test]
    fn per_kg_of_zero_weight_is_none() {
        let p = Price::new(5.50, 0.0).unwrap();
        assert_eq!(p.per_kg(), None);
    }

    #[test]
    fn negative_amounts_are_rejected() {
        assert!(matches!(
            Price::new(-1.0, 0.5),
            Err(CatalogError::BadAmount { field: "price", .. })
        ));
        assert!(matches!(
            Price::new(1.0, -0.5),
            Err(CatalogError::BadAmount { field: "weight", .. })
        ));
    }
}
