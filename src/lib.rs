//! MAX31856 thermocouple-to-digital converter driver.
//!
//! Talks to the IC over a software bit-banged serial bus (four GPIO lines),
//! decodes cold-junction and thermocouple temperatures from their signed
//! fixed-point register encodings, surfaces fault conditions as typed
//! outcomes, and transparently re-applies configuration after the IC loses
//! power and resets to factory defaults.

#![no_std]

pub mod bus;
pub mod data_types;
pub mod driver;
pub mod error;
pub mod registers;

pub use bus::{Bus, GpioBus};
pub use data_types::{
    AveragingMode, ConversionMode, FAULT_OPEN, FAULT_VOLTAGE, FaultStatus, NO_MAX31856,
    NoiseFilter, Reading, ThermocoupleType, Unit,
};
pub use driver::Max31856;
pub use error::Error;
