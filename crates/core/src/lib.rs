//! Domain types and storage contracts for the crust inventory.
//!
//! Everything here is pure: no I/O, no runtime. Backends live in the
//! `ingredients` crate.

pub mod crust;
pub mod storage;
