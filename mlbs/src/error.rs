//! Error taxonomy for reference-signal construction

use thiserror::Error;

use crate::order::SequenceOrder;

/// Errors that can abort a reference-bundle computation
///
/// Every error is fatal to the call that raised it; no partial results are
/// ever returned and nothing is retried.
#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("unsupported MLBS order {order} (supported orders: 9, 12, 15)")]
    UnsupportedOrder { order: u32 },

    #[error("invalid parameter {name}: {value} (must be positive)")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("failed to read MLBS table for order {order}: {source}")]
    TableIo {
        order: SequenceOrder,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed MLBS table for order {order}: {detail}")]
    TableParse { order: SequenceOrder, detail: String },

    #[error("MLBS table for order {order} too short: expected {expected} values, found {actual}")]
    TableTooShort {
        order: SequenceOrder,
        expected: usize,
        actual: usize,
    },

    #[error("oversampling {oversampling} with order {order} has no golden validation data")]
    UnsupportedOversampling {
        order: SequenceOrder,
        oversampling: u32,
    },
}
