//! Sensor module-configuration records

use serde::{Deserialize, Serialize};

use mlbs::{AcquisitionParams, ReferenceError, SequenceOrder};

/// Module configuration as reported by the sensor's configuration query.
///
/// The reference-construction core treats this as an opaque input record and
/// only consumes `order`, `clock_ghz`, and `oversampling`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModConfig {
    /// MLBS shift-register order.
    pub order: u32,
    /// Sub-sampling divider of the receiver.
    pub sub_sampling: u32,
    /// Sequence clock rate in GHz.
    pub clock_ghz: f64,
    /// Transmitter oversampling factor.
    pub oversampling: u32,
    /// Transmitter index in a multi-sensor setup.
    pub tx_id: u32,
    /// Number of active receivers.
    pub rx_count: u32,
}

impl ModConfig {
    /// Bridge this configuration to validated acquisition parameters.
    pub fn acquisition_params(&self) -> Result<AcquisitionParams, ReferenceError> {
        let order = SequenceOrder::try_from(self.order)?;
        AcquisitionParams::new(self.clock_ghz, self.oversampling, order)
    }
}

/// Full module information record, configuration plus calibration readbacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModInfo {
    pub config: ModConfig,
    /// Timebase centre frequency in GHz.
    pub timebase_fc_ghz: f64,
    /// Die temperature in degrees Celsius.
    pub temperature_c: f64,
    /// Voltage of one ADC least-significant bit.
    pub lsb_volt: f64,
    /// Full-scale input range, [low, high] volts.
    pub full_scale_range: [f64; 2],
    /// Hardware averaging factor currently applied.
    pub hw_avg: u32,
    /// Software averaging factor currently applied.
    pub sw_avg: u32,
    /// Valid software averaging range, [min, max].
    pub avg_limits: [u32; 2],
    /// Wait cycles inserted between acquisitions.
    pub wait_cycles: u32,
    /// Valid wait-cycle range, [min, max].
    pub wait_limits: [u32; 2],
    /// Samples per receiver and acquisition.
    pub num_samples: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(order: u32, oversampling: u32) -> ModConfig {
        ModConfig {
            order,
            sub_sampling: 1,
            clock_ghz: 13.312,
            oversampling,
            tx_id: 1,
            rx_count: 2,
        }
    }

    #[test]
    fn bridges_to_acquisition_params() {
        let params = config(9, 1).acquisition_params().unwrap();
        assert_eq!(params.order(), SequenceOrder::Order9);
        assert_eq!(params.sample_count(), 511);
        assert_eq!(params.clock_ghz(), 13.312);
    }

    #[test]
    fn rejects_unsupported_order() {
        let err = config(10, 1).acquisition_params().unwrap_err();
        assert!(matches!(err, ReferenceError::UnsupportedOrder { order: 10 }));
    }

    #[test]
    fn rejects_zero_oversampling() {
        let err = config(9, 0).acquisition_params().unwrap_err();
        assert!(matches!(err, ReferenceError::InvalidParameter { .. }));
    }

    #[test]
    fn config_round_trips_through_serde() {
        let cfg = config(15, 2);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: ModConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
