use std::collections::HashMap;

use smartvend_core::{Clock, DomainError, DomainResult, MachineId, SystemClock};
use smartvend_products::Product;
use smartvend_sales::Transaction;

/// A single vending machine: product catalog, inserted balance, and the log
/// of completed purchases.
///
/// The catalog is keyed by each product's trimmed name; the key is derived
/// from the product at insertion time, never supplied separately. Every
/// mutating operation takes `&mut self`, so each lookup-then-mutate sequence
/// is one critical section. A multi-threaded embedder wraps the machine in a
/// mutex and one lock acquisition then spans a whole operation.
///
/// Generic over the time source so purchase timestamps are deterministic
/// under test; defaults to the wall clock.
#[derive(Debug, Clone, PartialEq)]
pub struct VendingMachine<C: Clock = SystemClock> {
    machine_id: MachineId,
    catalog: HashMap<String, Product>,
    balance: f64,
    transactions: Vec<Transaction>,
    clock: C,
}

impl VendingMachine<SystemClock> {
    /// Create a machine with an empty catalog, zero balance, and an empty
    /// purchase log, stamped with a fresh machine id.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for VendingMachine<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> VendingMachine<C> {
    /// Create a machine that reads time from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            machine_id: MachineId::new(),
            catalog: HashMap::new(),
            balance: 0.0,
            transactions: Vec::new(),
            clock,
        }
    }

    /// Stock a product, keyed by its trimmed name.
    ///
    /// Overwrites any entry already under that name (last write wins) and
    /// returns the displaced product.
    pub fn add_product(&mut self, product: Product) -> Option<Product> {
        tracing::debug!("stocking {} in machine {}", product, self.machine_id);
        self.catalog.insert(product.name().to_string(), product)
    }

    /// Accept money into the balance. Repeated calls accumulate.
    ///
    /// Fails if the amount is non-finite, zero, or negative, or if accepting
    /// it would push the balance past the representable range; the balance
    /// is untouched on failure and therefore stays finite.
    pub fn insert_money(&mut self, amount: f64) -> DomainResult<()> {
        if !amount.is_finite() {
            return Err(DomainError::invalid_argument("amount must be finite"));
        }
        if amount <= 0.0 {
            return Err(DomainError::invalid_argument("amount must be positive"));
        }
        let new_balance = self.balance + amount;
        if !new_balance.is_finite() {
            return Err(DomainError::invalid_argument(
                "amount overflows the balance",
            ));
        }
        self.balance = new_balance;
        tracing::debug!("accepted ${:.2}, balance now ${:.2}", amount, self.balance);
        Ok(())
    }

    /// Purchase one unit of the named product.
    ///
    /// The name is trimmed before lookup. Checks run in a fixed order: name
    /// shape, catalog existence, stock, then funds; the first failure wins
    /// and leaves the machine unchanged. On success the product's stock
    /// drops by one, the entire balance resets to zero (change is handed
    /// back immediately), and the returned record is appended to the log.
    pub fn select_product(&mut self, product_name: &str) -> DomainResult<Transaction> {
        let name = product_name.trim();
        if name.is_empty() {
            return Err(DomainError::invalid_argument(
                "product name cannot be empty",
            ));
        }

        let product = self
            .catalog
            .get_mut(name)
            .ok_or_else(|| DomainError::invalid_state(format!("product not found: {name}")))?;

        if !product.is_available() {
            return Err(DomainError::invalid_state(format!(
                "product is out of stock: {name}"
            )));
        }

        if self.balance < product.price() {
            return Err(DomainError::invalid_state(format!(
                "insufficient funds: required ${:.2}, available ${:.2}",
                product.price(),
                self.balance
            )));
        }

        let amount_paid = product.price();
        let change = self.balance - amount_paid;

        // Build the record first; stock and balance only move once it exists.
        let transaction = Transaction::new(name, amount_paid, change, self.clock.now())?;
        product.reduce_stock()?;
        self.balance = 0.0;
        self.transactions.push(transaction.clone());

        tracing::info!(
            "dispensed {}: charged ${:.2}, change ${:.2} (machine {})",
            name,
            amount_paid,
            change,
            self.machine_id
        );

        Ok(transaction)
    }

    /// Return the whole balance as change and reset it to zero.
    ///
    /// The cancel operation: no purchase happens and nothing is logged.
    pub fn take_change(&mut self) -> f64 {
        let change = self.balance;
        self.balance = 0.0;
        if change > 0.0 {
            tracing::debug!("returned ${:.2} in change", change);
        }
        change
    }

    /// Products with at least one unit in stock, in no particular order.
    pub fn available_products(&self) -> Vec<&Product> {
        self.catalog
            .values()
            .filter(|product| product.is_available())
            .collect()
    }

    /// Every catalog entry, in no particular order.
    pub fn products(&self) -> Vec<&Product> {
        self.catalog.values().collect()
    }

    /// The purchase log, oldest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Check for a catalog entry under exactly `name` (no trimming).
    pub fn has_product(&self, name: &str) -> bool {
        self.catalog.contains_key(name)
    }

    /// Look up a catalog entry under exactly `name` (no trimming).
    pub fn product(&self, name: &str) -> Option<&Product> {
        self.catalog.get(name)
    }

    /// Remove the catalog entry under exactly `name` (no trimming).
    pub fn remove_product(&mut self, name: &str) -> Option<Product> {
        self.catalog.remove(name)
    }

    /// Empty the catalog. Balance and purchase log are untouched.
    pub fn clear_products(&mut self) {
        self.catalog.clear();
    }

    /// Number of catalog entries, sold out ones included.
    pub fn product_count(&self) -> usize {
        self.catalog.len()
    }

    /// Money currently inserted and not yet spent or returned.
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Identity stamp for correlating this machine's records across a fleet.
    pub fn machine_id(&self) -> MachineId {
        self.machine_id
    }

    /// Total retail value of everything in stock: Σ price × stock.
    pub fn total_inventory_value(&self) -> f64 {
        self.catalog
            .values()
            .map(|product| product.price() * f64::from(product.stock()))
            .sum()
    }
}

impl<C: Clock> core::fmt::Display for VendingMachine<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "products: {}, balance: ${:.2}, transactions: {}",
            self.catalog.len(),
            self.balance,
            self.transactions.len()
        )
    }
}
