//! Driver for the MAX31856 thermocouple-to-digital converter.
//!
//! Owns one device's desired configuration and all register traffic. The IC
//! has no persistent memory, so the driver verifies the live control
//! registers before every measurement and silently reprograms them after a
//! supply interruption.

use crate::bus::Bus;
use crate::data_types::{
    AveragingMode, ConversionMode, FaultStatus, NoiseFilter, Reading, ThermocoupleType, Unit,
    in_unit,
};
use crate::error::Error;
use crate::registers::{
    Cr0Bits, FaultBits, LAST_WRITABLE, MaskBits, POR_CONFIG, WRITE_FLAG, addr, cj_raw_to_celsius,
    tc_raw_to_celsius,
};

/// MAX31856 device handle. One instance per physical IC; owns its bus lines
/// exclusively through `B`.
pub struct Max31856<B> {
    bus: B,
    /// Desired CR0/CR1/MASK values, reasserted on power-loss recovery.
    config: [u8; 3],
}

impl<B> Max31856<B> {
    /// Create a driver over an exclusively owned bus. The stored
    /// configuration starts at the IC's power-on-reset values.
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            config: POR_CONFIG,
        }
    }

    /// The control register values the driver re-asserts after a device
    /// reset (CR0, CR1, MASK).
    pub fn desired_config(&self) -> [u8; 3] {
        self.config
    }

    /// Release the underlying bus.
    pub fn free(self) -> B {
        self.bus
    }
}

impl<B: Bus> Max31856<B> {
    /// Program a working default: continuous conversions, open-circuit
    /// detection enabled, type K thermocouple, no averaging, with only the
    /// open-circuit and voltage faults unmasked.
    pub fn init(&mut self) -> Result<(), Error<B::Error>> {
        let cr0 = (Cr0Bits::AUTO_CONVERT | Cr0Bits::OC_DETECT0).bits();
        let cr1 = ThermocoupleType::K.bits() | AveragingMode::One.bits();
        let mask = !(MaskBits::OPEN | MaskBits::OVUV).bits();
        self.write_registers(addr::CR0, &[cr0, cr1, mask])
    }

    /// Write a single register.
    pub fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Error<B::Error>> {
        self.write_registers(reg, &[value])
    }

    /// Write contiguous registers in one transaction; the device
    /// auto-increments the address after each payload byte.
    pub fn write_registers(&mut self, reg: u8, values: &[u8]) -> Result<(), Error<B::Error>> {
        if values.is_empty() || reg as usize + values.len() > LAST_WRITABLE as usize + 1 {
            return Err(Error::InvalidAddress);
        }
        self.transaction(|bus| {
            bus.transfer_byte(reg | WRITE_FLAG)?;
            for &value in values {
                bus.transfer_byte(value)?;
            }
            Ok(())
        })?;
        // Control register writes become the desired configuration.
        for (offset, &value) in values.iter().enumerate() {
            let target = reg as usize + offset;
            if target < self.config.len() {
                self.config[target] = value;
            }
        }
        Ok(())
    }

    /// Read a single register.
    pub fn read_register(&mut self, reg: u8) -> Result<u8, Error<B::Error>> {
        let mut buf = [0u8; 1];
        self.read_registers(reg, &mut buf)?;
        Ok(buf[0])
    }

    /// Read contiguous registers in one transaction.
    pub fn read_registers(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Error<B::Error>> {
        if buf.is_empty() || reg as usize + buf.len() > addr::SR as usize + 1 {
            return Err(Error::InvalidAddress);
        }
        self.transaction(|bus| {
            bus.transfer_byte(reg)?;
            for byte in buf.iter_mut() {
                // Dummy byte out, register byte in.
                *byte = bus.transfer_byte(0xFF)?;
            }
            Ok(())
        })
    }

    /// Cold-junction (on-chip) temperature, or a fault outcome.
    pub fn read_junction(&mut self, unit: Unit) -> Result<Reading, Error<B::Error>> {
        if !self.verify_config()? {
            return Ok(Reading::NotPresent);
        }
        // CJTH, CJTL, the three thermocouple bytes, then SR in one burst.
        let mut buf = [0u8; 6];
        self.read_registers(addr::CJTH, &mut buf)?;
        if let Some(fault) = self.active_fault(buf[5]) {
            return Ok(fault);
        }
        let raw = u16::from_be_bytes([buf[0], buf[1]]);
        Ok(Reading::Temperature(in_unit(cj_raw_to_celsius(raw), unit)))
    }

    /// Linearized, cold-junction-compensated thermocouple temperature, or a
    /// fault outcome.
    pub fn read_thermocouple(&mut self, unit: Unit) -> Result<Reading, Error<B::Error>> {
        if !self.verify_config()? {
            return Ok(Reading::NotPresent);
        }
        // LTCBH, LTCBM, LTCBL, then SR.
        let mut buf = [0u8; 4];
        self.read_registers(addr::LTCBH, &mut buf)?;
        if let Some(fault) = self.active_fault(buf[3]) {
            return Ok(fault);
        }
        let raw = u32::from_be_bytes([0, buf[0], buf[1], buf[2]]);
        Ok(Reading::Temperature(in_unit(tc_raw_to_celsius(raw), unit)))
    }

    /// Select the conversion mode (CR0 bit 7).
    pub fn set_conversion_mode(&mut self, mode: ConversionMode) -> Result<(), Error<B::Error>> {
        let mut cr0 = Cr0Bits::from_bits_truncate(self.config[0]);
        cr0.set(Cr0Bits::AUTO_CONVERT, mode == ConversionMode::Automatic);
        self.write_register(addr::CR0, cr0.bits())
    }

    /// Select the mains rejection filter (CR0 bit 0).
    pub fn set_noise_filter(&mut self, filter: NoiseFilter) -> Result<(), Error<B::Error>> {
        let mut cr0 = Cr0Bits::from_bits_truncate(self.config[0]);
        cr0.set(Cr0Bits::FILTER_50HZ, filter == NoiseFilter::Hz50);
        self.write_register(addr::CR0, cr0.bits())
    }

    /// Select the thermocouple type (CR1 bits 3:0).
    pub fn set_thermocouple_type(&mut self, tc: ThermocoupleType) -> Result<(), Error<B::Error>> {
        let cr1 = (self.config[1] & 0xF0) | tc.bits();
        self.write_register(addr::CR1, cr1)
    }

    /// Select sample averaging (CR1 bits 6:4).
    pub fn set_averaging(&mut self, avg: AveragingMode) -> Result<(), Error<B::Error>> {
        let cr1 = (self.config[1] & 0x8F) | avg.bits();
        self.write_register(addr::CR1, cr1)
    }

    /// Set the fault mask register. A set bit masks (disables) the fault;
    /// masked OPEN/OVUV bits are also ignored when decoding measurements.
    pub fn set_fault_mask(&mut self, mask: MaskBits) -> Result<(), Error<B::Error>> {
        self.write_register(addr::MASK, mask.bits())
    }

    /// Read and decode the fault status register.
    pub fn fault_status(&mut self) -> Result<FaultStatus, Error<B::Error>> {
        let raw = self.read_register(addr::SR)?;
        Ok(FaultStatus::from_register(raw))
    }

    /// Pulse the fault-clear bit in CR0 (used in interrupt fault mode).
    pub fn clear_faults(&mut self) -> Result<(), Error<B::Error>> {
        let cr0 = self.config[0];
        self.write_register(addr::CR0, cr0 | Cr0Bits::FAULT_CLR.bits())?;
        self.write_register(addr::CR0, cr0)
    }

    /// Run a closure inside an asserted chip-select scope. The select line
    /// is released on every exit path, including transfer errors.
    fn transaction<T>(
        &mut self,
        f: impl FnOnce(&mut B) -> Result<T, B::Error>,
    ) -> Result<T, Error<B::Error>> {
        self.bus.assert_select().map_err(Error::Bus)?;
        let result = f(&mut self.bus);
        let released = self.bus.deassert_select();
        let value = result.map_err(Error::Bus)?;
        released.map_err(Error::Bus)?;
        Ok(value)
    }

    /// Check that the device still holds the desired control registers.
    /// Returns `false` when nothing answered on the bus. Any other mismatch
    /// (power-on-reset values included) is repaired by rewriting all three
    /// registers before the caller proceeds to decode.
    fn verify_config(&mut self) -> Result<bool, Error<B::Error>> {
        let mut live = [0u8; 3];
        self.read_registers(addr::CR0, &mut live)?;
        if live == [0xFF; 3] && self.config != [0xFF; 3] {
            // Floating data line: nothing is driving SDO.
            return Ok(false);
        }
        if live != self.config {
            let desired = self.config;
            self.write_registers(addr::CR0, &desired)?;
        }
        Ok(true)
    }

    /// Map the fault status byte to a measurement outcome, honoring the
    /// mask register. Voltage faults outrank open-circuit faults.
    fn active_fault(&self, sr: u8) -> Option<Reading> {
        let active = FaultBits::from_bits_truncate(sr & !self.config[2]);
        if active.contains(FaultBits::OVUV) {
            Some(Reading::OverUnderVoltage)
        } else if active.contains(FaultBits::OPEN) {
            Some(Reading::OpenCircuit)
        } else {
            None
        }
    }
}
