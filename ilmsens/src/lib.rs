//! Ilmsens m:explore UWB sensor collaborator surface
//!
//! This crate holds the pieces the reference-construction core consumes from
//! and produces for the hardware-access layer: the module-configuration
//! records reported by a sensor, the fixed-layout raw sample-frame parse, and
//! the closed mode enumerations of the vendor API. Device I/O itself (shared
//! library binding, register access, data-ready polling) is not implemented
//! here.

mod config;
mod frame;
mod modes;

pub use config::{ModConfig, ModInfo};
pub use frame::{parse_frame, FrameError, SampleFrame, SAMPLE_BYTES};
pub use modes::{DebugLevel, MeasurementMode, PowerMode, SensorRole, SyncMode};
