//! MLBS register orders with precomputed ideal sequence tables

use std::fmt;

use crate::error::ReferenceError;

/// Shift-register order of a maximal-length binary sequence.
///
/// Only these orders ship a precomputed ideal sequence table; any other
/// value is a configuration error, never a computed result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceOrder {
    Order9,
    Order12,
    Order15,
}

impl SequenceOrder {
    /// All supported orders, ascending.
    pub const ALL: [SequenceOrder; 3] = [
        SequenceOrder::Order9,
        SequenceOrder::Order12,
        SequenceOrder::Order15,
    ];

    /// The numeric register order.
    pub fn order(self) -> u32 {
        match self {
            SequenceOrder::Order9 => 9,
            SequenceOrder::Order12 => 12,
            SequenceOrder::Order15 => 15,
        }
    }

    /// Length of the ideal sequence, `2^order - 1` chips.
    pub fn sequence_len(self) -> usize {
        (1usize << self.order()) - 1
    }

    /// File name of the shipped sequence table for this order.
    pub fn table_name(self) -> String {
        format!("mlbs{}.txt", self.order())
    }
}

impl TryFrom<u32> for SequenceOrder {
    type Error = ReferenceError;

    fn try_from(order: u32) -> Result<Self, Self::Error> {
        match order {
            9 => Ok(SequenceOrder::Order9),
            12 => Ok(SequenceOrder::Order12),
            15 => Ok(SequenceOrder::Order15),
            other => Err(ReferenceError::UnsupportedOrder { order: other }),
        }
    }
}

impl fmt::Display for SequenceOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.order())
    }
}
