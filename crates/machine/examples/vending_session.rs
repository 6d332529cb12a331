//! End-to-end vending session.
//!
//! Stocks a machine, runs a few purchases, prints receipts, and exports the
//! purchase log as JSON. Run with:
//!
//! ```sh
//! cargo run -p smartvend-machine --example vending_session
//! ```

use smartvend_machine::VendingMachine;
use smartvend_products::Product;

fn main() -> anyhow::Result<()> {
    smartvend_observability::init();

    let mut machine = VendingMachine::new();
    machine.add_product(Product::new("Cola", 2.50, 10)?);
    machine.add_product(Product::new("Chips", 1.50, 5)?);
    machine.add_product(Product::new("Candy", 1.00, 6)?);

    tracing::info!(
        "machine {} stocked with {} products worth ${:.2}",
        machine.machine_id(),
        machine.product_count(),
        machine.total_inventory_value()
    );

    // A customer pays with a five and gets change back.
    machine.insert_money(5.00)?;
    let receipt = machine.select_product("Cola")?;
    println!("{}", receipt.receipt_line());

    // Another feeds coins one at a time and pays exactly.
    machine.insert_money(1.00)?;
    machine.insert_money(0.50)?;
    let receipt = machine.select_product("Chips")?;
    println!("{}", receipt.receipt_line());

    // A third walks away; the machine refunds the balance.
    machine.insert_money(2.00)?;
    let refunded = machine.take_change();
    println!("Refunded: ${refunded:.2}");

    // Export the purchase log for the back office.
    println!("{}", serde_json::to_string_pretty(machine.transactions())?);
    println!("{machine}");

    Ok(())
}
