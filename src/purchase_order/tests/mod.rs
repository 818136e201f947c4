//! Unit tests for the purchase order module.
