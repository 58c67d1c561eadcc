//! Application layer containing the checkout orchestration.
//!
//! This module defines the `Checkout` which is the entry point for scanning
//! items and pricing a cart, plus the rule configuration used to assemble a
//! rule set from declarative input.

pub mod checkout;
pub mod config;
