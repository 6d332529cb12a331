//! Vending machine orchestration.
//!
//! Ties the product catalog and purchase records together behind one
//! machine surface: stock products, accept money, dispense, return change.

pub mod machine;

pub use machine::VendingMachine;
