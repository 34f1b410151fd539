//! Register map and constants for MAX31856.
//! Addresses, reset values and scale factors are taken from the datasheet.

/// Set on the address byte to select a write transaction; reads leave it clear.
pub const WRITE_FLAG: u8 = 0x80;

/// Last writable register address (LTCBH and above are read-only data).
pub const LAST_WRITABLE: u8 = 0x0B;

/// Register addresses (read form; OR with [`WRITE_FLAG`] to write).
pub mod addr {
    /// Configuration 0 (conversion mode, open-circuit detection, fault mode, filter).
    pub const CR0: u8 = 0x00;
    /// Configuration 1 (averaging, thermocouple type).
    pub const CR1: u8 = 0x01;
    /// Fault mask (1 = fault masked).
    pub const MASK: u8 = 0x02;
    /// Cold-junction high fault threshold.
    pub const CJHF: u8 = 0x03;
    /// Cold-junction low fault threshold.
    pub const CJLF: u8 = 0x04;
    /// Linearized temperature high fault threshold, MSB then LSB.
    pub const LTHFTH: u8 = 0x05;
    pub const LTHFTL: u8 = 0x06;
    /// Linearized temperature low fault threshold, MSB then LSB.
    pub const LTLFTH: u8 = 0x07;
    pub const LTLFTL: u8 = 0x08;
    /// Cold-junction temperature offset.
    pub const CJTO: u8 = 0x09;
    /// Cold-junction temperature, MSB then LSB.
    pub const CJTH: u8 = 0x0A;
    pub const CJTL: u8 = 0x0B;
    /// Linearized thermocouple temperature, high/mid/low byte.
    pub const LTCBH: u8 = 0x0C;
    pub const LTCBM: u8 = 0x0D;
    pub const LTCBL: u8 = 0x0E;
    /// Fault status (read-only).
    pub const SR: u8 = 0x0F;
}

/// Power-on-reset values of the three control registers (CR0, CR1, MASK).
/// The IC reverts to these whenever its supply is interrupted.
pub const POR_CONFIG: [u8; 3] = [0x00, 0x03, 0xFF];

/// Cold-junction register scale: 1/256 degC per LSB of the 16-bit pair.
pub const CJ_LSB_PER_DEGC: f32 = 256.0;

/// Thermocouple register scale: 1/4096 degC per LSB of the 24-bit group
/// (the hardware keeps the low 5 bits zero; the scale covers the full word).
pub const TC_LSB_PER_DEGC: f32 = 4096.0;

bitflags::bitflags! {
    /// CR0 register bits (0x00).
    pub struct Cr0Bits: u8 {
        /// Bit 7: Automatic (continuous) conversion mode.
        const AUTO_CONVERT = 1 << 7;
        /// Bit 6: Trigger a single conversion (self-clearing).
        const ONE_SHOT     = 1 << 6;
        /// Bits 5-4: Open-circuit detection mode.
        const OC_DETECT1   = 1 << 5;
        const OC_DETECT0   = 1 << 4;
        /// Bit 3: Cold-junction sensor disable.
        const CJ_DISABLE   = 1 << 3;
        /// Bit 2: FAULT pin interrupt mode (0 = comparator).
        const FAULT_INT    = 1 << 2;
        /// Bit 1: Fault status clear (self-clearing).
        const FAULT_CLR    = 1 << 1;
        /// Bit 0: 50 Hz noise filter (0 = 60 Hz).
        const FILTER_50HZ  = 1 << 0;
    }

    /// Fault mask register bits (0x02). A set bit masks the fault.
    pub struct MaskBits: u8 {
        const CJ_HIGH = 1 << 5;
        const CJ_LOW  = 1 << 4;
        const TC_HIGH = 1 << 3;
        const TC_LOW  = 1 << 2;
        const OVUV    = 1 << 1;
        const OPEN    = 1 << 0;
    }

    /// Fault status register bits (0x0F).
    pub struct FaultBits: u8 {
        /// Cold-junction out of range for the selected type.
        const CJ_RANGE = 1 << 7;
        /// Thermocouple out of range for the selected type.
        const TC_RANGE = 1 << 6;
        const CJ_HIGH  = 1 << 5;
        const CJ_LOW   = 1 << 4;
        const TC_HIGH  = 1 << 3;
        const TC_LOW   = 1 << 2;
        /// Input voltage outside the ADC's safe range.
        const OVUV     = 1 << 1;
        /// Thermocouple open circuit.
        const OPEN     = 1 << 0;
    }
}

/// Decode the big-endian cold-junction register pair into degrees Celsius.
pub fn cj_raw_to_celsius(raw: u16) -> f32 {
    (raw as i16) as f32 / CJ_LSB_PER_DEGC
}

/// Encode degrees Celsius into the cold-junction register pair encoding.
pub fn cj_celsius_to_raw(celsius: f32) -> u16 {
    (celsius * CJ_LSB_PER_DEGC) as i16 as u16
}

/// Decode the 24-bit thermocouple register group into degrees Celsius.
/// `raw` holds the three register bytes with the MSB in bits 23-16.
pub fn tc_raw_to_celsius(raw: u32) -> f32 {
    // Sign-extend from bit 23.
    let counts = ((raw << 8) as i32) >> 8;
    counts as f32 / TC_LSB_PER_DEGC
}

/// Encode degrees Celsius into the 24-bit thermocouple register encoding.
pub fn tc_celsius_to_raw(celsius: f32) -> u32 {
    ((celsius * TC_LSB_PER_DEGC) as i32 as u32) & 0x00FF_FFFF
}

/// Standard linear Celsius-to-Fahrenheit transform.
pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 9.0 / 5.0 + 32.0
}
