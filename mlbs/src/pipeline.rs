//! Orchestration of the reference-signal construction pipeline

use log::warn;
use num_complex::Complex64;

use crate::axes::build_axes;
use crate::error::ReferenceError;
use crate::order::SequenceOrder;
use crate::spectrum::build_spectrum;
use crate::synth::{synthesize, Mixing};
use crate::table::{default_store, TableStore};

/// Acquisition parameters that fully determine a reference bundle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcquisitionParams {
    clock_ghz: f64,
    oversampling: u32,
    order: SequenceOrder,
}

impl AcquisitionParams {
    /// Validate and construct acquisition parameters.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if the clock rate is not positive or the
    /// oversampling factor is zero.
    pub fn new(
        clock_ghz: f64,
        oversampling: u32,
        order: SequenceOrder,
    ) -> Result<Self, ReferenceError> {
        if !(clock_ghz > 0.0) {
            return Err(ReferenceError::InvalidParameter {
                name: "clock_ghz",
                value: clock_ghz,
            });
        }
        if oversampling == 0 {
            return Err(ReferenceError::InvalidParameter {
                name: "oversampling",
                value: 0.0,
            });
        }
        Ok(AcquisitionParams {
            clock_ghz,
            oversampling,
            order,
        })
    }

    pub fn clock_ghz(&self) -> f64 {
        self.clock_ghz
    }

    pub fn oversampling(&self) -> u32 {
        self.oversampling
    }

    pub fn order(&self) -> SequenceOrder {
        self.order
    }

    /// Samples in one capture: `(2^order - 1) * oversampling`.
    pub fn sample_count(&self) -> usize {
        self.order.sequence_len() * self.oversampling as usize
    }

    /// Effective sampling rate in GHz.
    pub fn sample_rate_ghz(&self) -> f64 {
        self.clock_ghz * self.oversampling as f64
    }

    /// True when golden validation data exists for this combination.
    ///
    /// Oversampling above 1 is structurally supported by the algebra but has
    /// never been checked against hardware-validated captures.
    pub fn is_verified(&self) -> bool {
        self.oversampling == 1
    }

    /// Reject combinations without golden validation data.
    ///
    /// The pipeline itself computes such bundles (with a warning); callers
    /// that must not act on unverified kernels use this to fail instead.
    pub fn ensure_verified(&self) -> Result<(), ReferenceError> {
        if self.is_verified() {
            Ok(())
        } else {
            Err(ReferenceError::UnsupportedOversampling {
                order: self.order,
                oversampling: self.oversampling,
            })
        }
    }
}

/// The four reference artifacts for one parameter set, produced atomically.
///
/// All four sequences share the length `(2^order - 1) * oversampling`; the
/// bundle is never observable partially built and is immutable once returned.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceBundle {
    waveform: Vec<f64>,
    spectrum: Vec<Complex64>,
    delay_times_ns: Vec<f64>,
    frequencies_ghz: Vec<f64>,
}

impl ReferenceBundle {
    /// Ideal reference waveform (baseband, plus carrier when oversampling).
    pub fn waveform(&self) -> &[f64] {
        &self.waveform
    }

    /// Phase-only conjugate spectrum used as the correlation kernel.
    pub fn spectrum(&self) -> &[Complex64] {
        &self.spectrum
    }

    /// Equivalent delay times in nanoseconds, starting at zero.
    pub fn delay_times_ns(&self) -> &[f64] {
        &self.delay_times_ns
    }

    /// Frequency axis in GHz, DFT bin order (0 Hz first, negatives wrapped).
    pub fn frequencies_ghz(&self) -> &[f64] {
        &self.frequencies_ghz
    }

    /// Common length of all four sequences.
    pub fn len(&self) -> usize {
        self.waveform.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waveform.is_empty()
    }
}

/// Compute the reference bundle using the embedded sequence tables.
pub fn reference_dependencies(
    params: &AcquisitionParams,
) -> Result<ReferenceBundle, ReferenceError> {
    reference_dependencies_with_store(params, default_store())
}

/// Compute the reference bundle with an explicit table store.
///
/// Load → axes → waveform → spectrum; any failure aborts the whole call with
/// no observable side effect beyond the write-once table cache.
pub fn reference_dependencies_with_store(
    params: &AcquisitionParams,
    store: &TableStore,
) -> Result<ReferenceBundle, ReferenceError> {
    if !params.is_verified() {
        warn!(
            "oversampling {} with order {} has no golden validation data; \
             computing an unverified reference bundle",
            params.oversampling(),
            params.order()
        );
    }

    let raw = store.load(params.order())?;
    let (delay_times_ns, frequencies_ghz) =
        build_axes(params.sample_count(), params.sample_rate_ghz())?;

    let mixing = Mixing::for_oversampling(params.oversampling(), params.clock_ghz());
    let waveform = synthesize(&raw, params.oversampling(), mixing, &delay_times_ns);
    let spectrum = build_spectrum(
        &waveform,
        params.oversampling(),
        params.order().sequence_len(),
    );

    Ok(ReferenceBundle {
        waveform,
        spectrum,
        delay_times_ns,
        frequencies_ghz,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_clock() {
        for clock in [0.0, -13.312, f64::NAN] {
            let err = AcquisitionParams::new(clock, 1, SequenceOrder::Order9).unwrap_err();
            assert!(matches!(
                err,
                ReferenceError::InvalidParameter {
                    name: "clock_ghz",
                    ..
                }
            ));
        }
    }

    #[test]
    fn rejects_zero_oversampling() {
        let err = AcquisitionParams::new(13.312, 0, SequenceOrder::Order9).unwrap_err();
        assert!(matches!(
            err,
            ReferenceError::InvalidParameter {
                name: "oversampling",
                ..
            }
        ));
    }

    #[test]
    fn derived_quantities() {
        let params = AcquisitionParams::new(13.312, 2, SequenceOrder::Order9).unwrap();
        assert_eq!(params.sample_count(), 1022);
        assert_eq!(params.sample_rate_ghz(), 26.624);
        assert!(!params.is_verified());
        assert!(matches!(
            params.ensure_verified(),
            Err(ReferenceError::UnsupportedOversampling {
                oversampling: 2,
                ..
            })
        ));
    }

    #[test]
    fn unity_oversampling_is_verified() {
        let params = AcquisitionParams::new(18.0, 1, SequenceOrder::Order15).unwrap();
        assert!(params.is_verified());
        assert!(params.ensure_verified().is_ok());
    }
}
