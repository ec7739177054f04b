//! Closed enumerations of the vendor hardware API
//!
//! The vendor headers expose these as bare integer constants; they are closed
//! sets, so they are represented as enums with their wire values.

/// API diagnostic verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum DebugLevel {
    #[default]
    None = 0,
    Info = 1,
    More = 2,
    Most = 3,
    All = 4,
}

/// Role of a sensor in a multi-sensor setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum SensorRole {
    Slave = 0,
    Master = 1,
}

/// Whether sensors run phase-synchronized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum SyncMode {
    Off = 0,
    On = 1,
}

/// Transmitter output state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum PowerMode {
    TxOn = 0,
    TxOff = 1,
}

/// Measurement run state of a sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum MeasurementMode {
    /// Sensor is not measuring.
    Off = 0,
    /// Sensor is measuring; data is not buffered by the API.
    Raw = 1,
    /// Sensor is measuring; data is buffered by the API in a separate thread.
    Buffered = 2,
}

impl MeasurementMode {
    pub fn from_raw(value: i32) -> Option<Self> {
        match value {
            0 => Some(MeasurementMode::Off),
            1 => Some(MeasurementMode::Raw),
            2 => Some(MeasurementMode::Buffered),
            _ => None,
        }
    }
}

impl DebugLevel {
    pub fn from_raw(value: u32) -> Option<Self> {
        match value {
            0 => Some(DebugLevel::None),
            1 => Some(DebugLevel::Info),
            2 => Some(DebugLevel::More),
            3 => Some(DebugLevel::Most),
            4 => Some(DebugLevel::All),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values_match_vendor_constants() {
        assert_eq!(DebugLevel::None as u32, 0);
        assert_eq!(DebugLevel::All as u32, 4);
        assert_eq!(SensorRole::Master as i32, 1);
        assert_eq!(SyncMode::On as i32, 1);
        assert_eq!(PowerMode::TxOff as i32, 1);
        assert_eq!(MeasurementMode::Buffered as i32, 2);
    }

    #[test]
    fn raw_round_trips() {
        for level in [
            DebugLevel::None,
            DebugLevel::Info,
            DebugLevel::More,
            DebugLevel::Most,
            DebugLevel::All,
        ] {
            assert_eq!(DebugLevel::from_raw(level as u32), Some(level));
        }
        assert_eq!(MeasurementMode::from_raw(2), Some(MeasurementMode::Buffered));
        assert_eq!(MeasurementMode::from_raw(3), None);
        assert_eq!(DebugLevel::from_raw(5), None);
    }
}
