//! Adapter implementations of the purchasing ports.

pub mod memory;
