//! Sales domain module.
//!
//! This crate contains the purchase record produced by completed sales,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod transaction;

pub use transaction::Transaction;
