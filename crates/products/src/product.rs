use serde::Serialize;

use smartvend_core::{DomainError, DomainResult};

/// Catalog entity: a stocked, priced product.
///
/// Identity is the trimmed name; the machine's catalog keys entries by it.
/// Price and stock only change through the validated operations below, so a
/// reachable product never carries a negative price, and the unsigned stock
/// type rules out negative stock entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    name: String,
    price: f64,
    stock: u32,
}

impl Product {
    /// Create a product with an initial price and stock level.
    ///
    /// Stores the trimmed name. Fails if the name trims to empty or the
    /// price is negative or non-finite.
    pub fn new(name: &str, price: f64, stock: u32) -> DomainResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::invalid_argument(
                "product name cannot be empty",
            ));
        }
        check_price(price)?;

        Ok(Self {
            name: name.to_string(),
            price,
            stock,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Check if at least one unit is in stock.
    pub fn is_available(&self) -> bool {
        self.stock > 0
    }

    /// Remove exactly one unit from stock (one dispensed purchase).
    ///
    /// Fails when stock is already zero; stock is untouched on failure.
    pub fn reduce_stock(&mut self) -> DomainResult<()> {
        if self.stock == 0 {
            return Err(DomainError::invalid_state(
                "cannot reduce stock: product is out of stock",
            ));
        }
        self.stock -= 1;
        Ok(())
    }

    /// Add `quantity` units to stock.
    ///
    /// Fails if the quantity is zero or would overflow the stock counter;
    /// stock is untouched on failure.
    pub fn restock(&mut self, quantity: u32) -> DomainResult<()> {
        if quantity == 0 {
            return Err(DomainError::invalid_argument(
                "restock quantity must be positive",
            ));
        }
        self.stock = self.stock.checked_add(quantity).ok_or_else(|| {
            DomainError::invalid_argument("restock quantity overflows stock")
        })?;
        Ok(())
    }

    /// Overwrite the price.
    ///
    /// Fails if the new price is negative or non-finite.
    pub fn set_price(&mut self, price: f64) -> DomainResult<()> {
        check_price(price)?;
        self.price = price;
        Ok(())
    }
}

fn check_price(price: f64) -> DomainResult<()> {
    if !price.is_finite() {
        return Err(DomainError::invalid_argument("price must be finite"));
    }
    if price < 0.0 {
        return Err(DomainError::invalid_argument("price cannot be negative"));
    }
    Ok(())
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} (${:.2}, stock {})", self.name, self.price, self.stock)
    }
}
