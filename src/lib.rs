//! Purchasing: purchase order validation and lifecycle management.
//!
//! This crate provides the business rules applied to purchase orders, their
//! line items and shipments before they are written, and the status
//! transitions that confirm or cancel an order.
//!
//! # Architecture
//!
//! Purchasing follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for data access
//! - **Adapters**: Concrete implementations of ports (in-memory today)
//!
//! # Modules
//!
//! - [`purchase_order`]: Validation engine, order lifecycle and supplier
//!   write service

pub mod purchase_order;
