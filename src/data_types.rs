//! Data types for the MAX31856 driver.

use crate::registers::{FaultBits, celsius_to_fahrenheit};

/// Reserved value returned by [`Reading::into_degrees`] for an open
/// (broken or disconnected) thermocouple. Outside any reachable temperature.
pub const FAULT_OPEN: f32 = 10000.0;
/// Reserved value for an over/undervoltage condition on the inputs.
pub const FAULT_VOLTAGE: f32 = 10001.0;
/// Reserved value returned when no device answers on the bus.
pub const NO_MAX31856: f32 = 10002.0;

/// Temperature unit for decoded readings.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Unit {
    Celsius,
    Fahrenheit,
}

/// Outcome of a temperature read.
///
/// Device-level conditions are variants rather than errors: a missing or
/// faulted sensor is a steady-state observable the caller handles every call.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Reading {
    /// Decoded temperature in the requested unit.
    Temperature(f32),
    /// Thermocouple wire broken or disconnected.
    OpenCircuit,
    /// Input voltage outside the safe ADC range (e.g. short to supply).
    OverUnderVoltage,
    /// No device answered on the bus.
    NotPresent,
}

impl Reading {
    /// Collapse to a plain number, mapping fault states to the reserved
    /// sentinel constants ([`FAULT_OPEN`], [`FAULT_VOLTAGE`], [`NO_MAX31856`]).
    pub fn into_degrees(self) -> f32 {
        match self {
            Reading::Temperature(t) => t,
            Reading::OpenCircuit => FAULT_OPEN,
            Reading::OverUnderVoltage => FAULT_VOLTAGE,
            Reading::NotPresent => NO_MAX31856,
        }
    }

    /// True for any non-temperature outcome.
    pub fn is_fault(&self) -> bool {
        !matches!(self, Reading::Temperature(_))
    }
}

/// Thermocouple type selection (CR1 bits 3:0).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ThermocoupleType {
    B,
    E,
    J,
    K,
    N,
    R,
    S,
    T,
}

impl ThermocoupleType {
    /// CR1 type field value.
    pub fn bits(self) -> u8 {
        match self {
            ThermocoupleType::B => 0x0,
            ThermocoupleType::E => 0x1,
            ThermocoupleType::J => 0x2,
            ThermocoupleType::K => 0x3,
            ThermocoupleType::N => 0x4,
            ThermocoupleType::R => 0x5,
            ThermocoupleType::S => 0x6,
            ThermocoupleType::T => 0x7,
        }
    }

    /// Linearized measurement range (degC) supported for this type,
    /// per the datasheet's thermocouple range table.
    pub fn temperature_range(self) -> (f32, f32) {
        match self {
            ThermocoupleType::B => (250.0, 1820.0),
            ThermocoupleType::E => (-200.0, 1000.0),
            ThermocoupleType::J => (-210.0, 1200.0),
            ThermocoupleType::K => (-200.0, 1372.0),
            ThermocoupleType::N => (-200.0, 1300.0),
            ThermocoupleType::R => (-50.0, 1768.0),
            ThermocoupleType::S => (-50.0, 1768.0),
            ThermocoupleType::T => (-200.0, 400.0),
        }
    }
}

/// Sample averaging (CR1 bits 6:4).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AveragingMode {
    One,
    Two,
    Four,
    Eight,
    Sixteen,
}

impl AveragingMode {
    /// CR1 averaging field value, already shifted into bits 6:4.
    pub fn bits(self) -> u8 {
        match self {
            AveragingMode::One => 0 << 4,
            AveragingMode::Two => 1 << 4,
            AveragingMode::Four => 2 << 4,
            AveragingMode::Eight => 3 << 4,
            AveragingMode::Sixteen => 4 << 4,
        }
    }
}

/// Mains noise rejection filter (CR0 bit 0).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NoiseFilter {
    Hz60,
    Hz50,
}

/// Conversion mode (CR0 bit 7).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConversionMode {
    /// Conversions stopped; a one-shot trigger is required per sample.
    NormallyOff,
    /// Continuous conversion roughly every 100 ms.
    Automatic,
}

/// Fault flags decoded from the fault status register.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FaultStatus {
    pub cj_out_of_range: bool,
    pub tc_out_of_range: bool,
    pub cj_high: bool,
    pub cj_low: bool,
    pub tc_high: bool,
    pub tc_low: bool,
    pub over_under_voltage: bool,
    pub open_circuit: bool,
}

impl FaultStatus {
    /// Decode a raw fault status register value.
    pub fn from_register(raw: u8) -> Self {
        let bits = FaultBits::from_bits_truncate(raw);
        Self {
            cj_out_of_range: bits.contains(FaultBits::CJ_RANGE),
            tc_out_of_range: bits.contains(FaultBits::TC_RANGE),
            cj_high: bits.contains(FaultBits::CJ_HIGH),
            cj_low: bits.contains(FaultBits::CJ_LOW),
            tc_high: bits.contains(FaultBits::TC_HIGH),
            tc_low: bits.contains(FaultBits::TC_LOW),
            over_under_voltage: bits.contains(FaultBits::OVUV),
            open_circuit: bits.contains(FaultBits::OPEN),
        }
    }

    /// True if any fault bit is set.
    pub fn any(&self) -> bool {
        *self != FaultStatus::default()
    }
}

pub(crate) fn in_unit(celsius: f32, unit: Unit) -> f32 {
    match unit {
        Unit::Celsius => celsius,
        Unit::Fahrenheit => celsius_to_fahrenheit(celsius),
    }
}
