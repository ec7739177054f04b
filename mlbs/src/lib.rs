//! Reference MLBS signal and spectrum construction for UWB radar deconvolution
//!
//! Builds, from a stored ideal maximal-length binary sequence and a small set
//! of acquisition parameters, the time-domain reference waveform and the
//! phase-only correlation kernel that captured measurements are correlated
//! against to recover a calibrated impulse response, together with the
//! equivalent delay-time and frequency axes.
//!
//! The pipeline is a pure function of its inputs plus one static lookup
//! table: sequence table → axes → waveform synthesis → whitening spectrum.
//! Device I/O, acquisition timing, and the correlation of measured spectra
//! all live outside this crate; it consumes acquisition parameters and
//! produces one immutable [`ReferenceBundle`].
//!
//! # Example
//!
//! ```
//! use mlbs::{reference_dependencies, AcquisitionParams, SequenceOrder};
//!
//! let params = AcquisitionParams::new(13.312, 1, SequenceOrder::Order9)?;
//! let bundle = reference_dependencies(&params)?;
//! assert_eq!(bundle.len(), 511);
//! assert_eq!(bundle.spectrum()[0].norm(), 0.0);
//! # Ok::<(), mlbs::ReferenceError>(())
//! ```

mod axes;
mod error;
mod order;
mod pipeline;
mod spectrum;
mod synth;
mod table;

pub use axes::build_axes;
pub use error::ReferenceError;
pub use order::SequenceOrder;
pub use pipeline::{
    reference_dependencies, reference_dependencies_with_store, AcquisitionParams, ReferenceBundle,
};
pub use spectrum::{build_spectrum, FEEDTHROUGH_GAIN};
pub use synth::{expand_chips, synthesize, Mixing};
pub use table::{default_store, Delimiter, Layout, TableFormat, TableStore};
