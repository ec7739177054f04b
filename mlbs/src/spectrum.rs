//! Phase-only reference spectrum (whitening kernel) construction

use num_complex::Complex64;
use rustfft::FftPlanner;

/// Gain applied to the clock-feedthrough bins when oversampling.
///
/// Not a true zero: a small residual is tolerated rather than risking
/// numerical artifacts from exact nulling.
pub const FEEDTHROUGH_GAIN: f64 = 1e-3;

/// Build the frequency-domain correlation kernel for a reference waveform.
///
/// Each FFT bin is replaced by the unit-magnitude conjugate of its phase,
/// `exp(-i·angle(X[k]))` — magnitude is discarded entirely, leaving a
/// whitening/matched-filter kernel. Bin 0 is forced to zero because the
/// hardware cannot measure DC reliably.
///
/// When `oversampling > 1`, residual clock feedthrough leaks into the bins at
/// `sequence_len + 1` and `(oversampling - 1) * sequence_len + 1`; each is
/// scaled by [`FEEDTHROUGH_GAIN`]. The two index formulas coincide at
/// oversampling 2, so that one bin is scaled twice. Kept literal until the
/// intent for oversampling > 2 is confirmed against hardware captures.
///
/// `waveform` must hold `sequence_len * oversampling` samples; the
/// feedthrough indices are derived from that relation.
pub fn build_spectrum(
    waveform: &[f64],
    oversampling: u32,
    sequence_len: usize,
) -> Vec<Complex64> {
    if waveform.is_empty() {
        return Vec::new();
    }
    debug_assert_eq!(waveform.len(), sequence_len * oversampling as usize);

    let mut bins: Vec<Complex64> = waveform
        .iter()
        .map(|&x| Complex64::new(x, 0.0))
        .collect();
    FftPlanner::new()
        .plan_fft_forward(bins.len())
        .process(&mut bins);

    let mut spectrum: Vec<Complex64> = bins
        .iter()
        .map(|bin| Complex64::from_polar(1.0, -bin.arg()))
        .collect();
    spectrum[0] = Complex64::new(0.0, 0.0);

    if oversampling > 1 {
        spectrum[sequence_len + 1] *= FEEDTHROUGH_GAIN;
        spectrum[(oversampling as usize - 1) * sequence_len + 1] *= FEEDTHROUGH_GAIN;
    }

    spectrum
}
