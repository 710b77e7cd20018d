//! Contract bindings for the ERC20 token standard.
//!
//! The ABI is generated at compile time by alloy's `sol!` macro and is
//! shared, read-only data for the whole process.

pub mod token;
