//! Order risk table.
//!
//! The table is produced by an external prediction pipeline and is read-only
//! for the lifetime of an optimization run. Each row carries a predicted
//! delay-risk score and, optionally, the number of days the order is
//! scheduled to ship within.
//!
//! # Key Types
//!
//! - [`OrderId`]: Stable external identifier of an order
//! - [`Order`]: One row of the table
//! - [`OrderTable`]: Validated, indexed collection of orders

mod table;

pub use table::{Order, OrderId, OrderTable};
