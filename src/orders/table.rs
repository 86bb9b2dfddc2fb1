//! Order and order-table types.

use crate::error::{Result, SequencingError};
use crate::solution::Solution;
use std::collections::HashMap;
use std::fmt;

/// Stable external identifier of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderId(pub u64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        OrderId(id)
    }
}

/// One shippable order with its predicted delay risk.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    /// Stable identifier, unique within a table.
    pub id: OrderId,
    /// Predicted delay risk in `[0, 1]`.
    pub predicted_risk: f64,
    /// Days the order is scheduled to ship within, if known.
    pub scheduled_days: Option<u32>,
}

impl Order {
    /// Creates an order without schedule data.
    pub fn new(id: u64, predicted_risk: f64) -> Self {
        Self {
            id: OrderId(id),
            predicted_risk,
            scheduled_days: None,
        }
    }

    /// Sets the scheduled shipping days.
    pub fn with_scheduled_days(mut self, days: u32) -> Self {
        self.scheduled_days = Some(days);
        self
    }
}

/// Validated, immutable collection of orders.
///
/// Rows keep their insertion order. A [`Solution`] refers to rows by their
/// position in this table, so the table must outlive every solution built
/// against it.
///
/// # Examples
///
/// ```
/// use u_sequencing::orders::{Order, OrderId, OrderTable};
///
/// let table = OrderTable::new(vec![
///     Order::new(10, 0.9),
///     Order::new(11, 0.1),
/// ])
/// .unwrap();
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.position_of(OrderId(11)), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OrderTable {
    orders: Vec<Order>,
    #[cfg_attr(feature = "serde", serde(skip))]
    index: HashMap<OrderId, usize>,
}

impl OrderTable {
    /// Builds a table, rejecting duplicate ids and risks outside `[0, 1]`.
    pub fn new(orders: Vec<Order>) -> Result<Self> {
        let mut index = HashMap::with_capacity(orders.len());
        for (pos, order) in orders.iter().enumerate() {
            if !(0.0..=1.0).contains(&order.predicted_risk) {
                return Err(SequencingError::RiskOutOfRange {
                    id: order.id,
                    risk: order.predicted_risk,
                });
            }
            if index.insert(order.id, pos).is_some() {
                return Err(SequencingError::DuplicateOrderId(order.id));
            }
        }
        Ok(Self { orders, index })
    }

    /// Builds a table from bare risk scores, numbering ids `0..n`.
    pub fn from_risks(risks: &[f64]) -> Result<Self> {
        Self::new(
            risks
                .iter()
                .enumerate()
                .map(|(i, &r)| Order::new(i as u64, r))
                .collect(),
        )
    }

    /// Number of orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether the table has no orders.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// All orders in table order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Order at row `pos`.
    ///
    /// # Panics
    /// Panics if `pos >= self.len()`.
    pub fn get(&self, pos: usize) -> &Order {
        &self.orders[pos]
    }

    /// Row position of the order with `id`.
    pub fn position_of(&self, id: OrderId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Orders in the dispatch sequence given by `solution`.
    pub fn reorder<'a>(&'a self, solution: &'a Solution) -> impl Iterator<Item = &'a Order> + 'a {
        solution.iter().map(move |pos| &self.orders[pos])
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for OrderTable {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            orders: Vec<Order>,
        }
        let raw = Raw::deserialize(deserializer)?;
        OrderTable::new(raw.orders).map_err(serde::de::Error::custom)
    }
}
