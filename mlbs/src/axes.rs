//! Delay-time and frequency axis construction

use crate::error::ReferenceError;

/// Build the equivalent delay-time and frequency axes for a capture.
///
/// `delay_times[k] = k / sample_rate`, so with a rate in GHz the axis is in
/// nanoseconds. The frequency axis is the centered axis
/// `ceil(-n/2) .. ceil(n/2) - 1` scaled by `sample_rate / n`, reordered
/// zero-first (the inverse of the centering shift) so that index 0 is 0 Hz,
/// positive frequencies ascend, and negative frequencies wrap to the tail —
/// the native bin order of a forward DFT.
///
/// # Arguments
///
/// * `sample_count` - number of samples in the capture
/// * `sample_rate` - sampling rate (GHz for nanosecond delay times)
pub fn build_axes(
    sample_count: usize,
    sample_rate: f64,
) -> Result<(Vec<f64>, Vec<f64>), ReferenceError> {
    if sample_count == 0 {
        return Err(ReferenceError::InvalidParameter {
            name: "sample_count",
            value: 0.0,
        });
    }
    if !(sample_rate > 0.0) {
        return Err(ReferenceError::InvalidParameter {
            name: "sample_rate",
            value: sample_rate,
        });
    }

    let n = sample_count;
    let time_step = 1.0 / sample_rate;
    let delay_times: Vec<f64> = (0..n).map(|k| k as f64 * time_step).collect();

    let frequency_step = sample_rate / n as f64;
    // Centered axis starts at ceil(-n/2) == -(n/2 rounded down); the
    // zero-first order is a left rotation by n/2 bins.
    let first = -((n / 2) as i64);
    let half = n / 2;
    let frequencies: Vec<f64> = (0..n)
        .map(|k| {
            let centered_index = (k + half) % n;
            (first + centered_index as i64) as f64 * frequency_step
        })
        .collect();

    Ok((delay_times, frequencies))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn delay_axis_starts_at_zero_and_increases() {
        let (times, _) = build_axes(511, 13.312).unwrap();
        assert_eq!(times.len(), 511);
        assert_eq!(times[0], 0.0);
        for pair in times.windows(2) {
            assert!(pair[1] > pair[0]);
        }
        assert_relative_eq!(times[1], 1.0 / 13.312, max_relative = 1e-15);
    }

    #[test]
    fn frequency_axis_even_count_matches_direct_construction() {
        let (_, freqs) = build_axes(8, 8.0).unwrap();
        // step = 1 GHz; zero-first reordering of [-4..3].
        let expected = [0.0, 1.0, 2.0, 3.0, -4.0, -3.0, -2.0, -1.0];
        for (got, want) in freqs.iter().zip(expected) {
            assert_relative_eq!(*got, want, max_relative = 1e-15);
        }
    }

    #[test]
    fn frequency_axis_odd_count_matches_direct_construction() {
        let (_, freqs) = build_axes(5, 5.0).unwrap();
        // step = 1 GHz; zero-first reordering of [-2..2].
        let expected = [0.0, 1.0, 2.0, -2.0, -1.0];
        for (got, want) in freqs.iter().zip(expected) {
            assert_relative_eq!(*got, want, max_relative = 1e-15);
        }
    }

    #[test]
    fn frequency_axis_starts_at_dc() {
        for n in [4, 5, 511, 1022] {
            let (_, freqs) = build_axes(n, 13.312).unwrap();
            assert_eq!(freqs[0], 0.0);
            assert_eq!(freqs.len(), n);
        }
    }

    #[test]
    fn invalid_inputs_rejected() {
        assert!(matches!(
            build_axes(0, 1.0),
            Err(ReferenceError::InvalidParameter {
                name: "sample_count",
                ..
            })
        ));
        assert!(matches!(
            build_axes(16, 0.0),
            Err(ReferenceError::InvalidParameter {
                name: "sample_rate",
                ..
            })
        ));
        assert!(matches!(
            build_axes(16, -1.0),
            Err(ReferenceError::InvalidParameter { .. })
        ));
    }
}
