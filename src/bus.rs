//! Bit-banged serial transport for the MAX31856.
//!
//! The interface is toggled in software line by line so the driver works on
//! any target with four free GPIOs, no hardware SPI peripheral required.
//! The protocol logic talks to the [`Bus`] trait only, so it can also run
//! against a simulated bus in tests.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

/// Half clock period in nanoseconds (~1 MHz; the IC tops out at 5 MHz and
/// needs at least 100 ns per clock phase).
pub const HALF_PERIOD_NS: u32 = 500;

/// Minimal transport capability: scoped chip-select plus full-duplex
/// byte transfer. One implementor owns its four lines exclusively.
pub trait Bus {
    type Error;

    /// Assert chip-select (drive it low) with the clock idle.
    fn assert_select(&mut self) -> Result<(), Self::Error>;

    /// Deassert chip-select, ending the transaction.
    fn deassert_select(&mut self) -> Result<(), Self::Error>;

    /// Shift one byte out MSB first while sampling one byte in.
    /// Always clocks exactly eight bits; never blocks indefinitely.
    fn transfer_byte(&mut self, value: u8) -> Result<u8, Self::Error>;
}

/// [`Bus`] implementation over plain GPIO pins and a delay provider.
///
/// `sdi` is the host's output into the device's SDI pin, `sdo` the input
/// from the device's SDO pin; naming follows the IC's pinout.
pub struct GpioBus<SDI, SDO, CS, SCK, D> {
    sdi: SDI,
    sdo: SDO,
    cs: CS,
    sck: SCK,
    delay: D,
}

impl<SDI, SDO, CS, SCK, D> GpioBus<SDI, SDO, CS, SCK, D> {
    /// Take exclusive ownership of the four bus lines and a delay source.
    pub fn new(sdi: SDI, sdo: SDO, cs: CS, sck: SCK, delay: D) -> Self {
        Self {
            sdi,
            sdo,
            cs,
            sck,
            delay,
        }
    }

    /// Release the pins and delay provider.
    pub fn free(self) -> (SDI, SDO, CS, SCK, D) {
        (self.sdi, self.sdo, self.cs, self.sck, self.delay)
    }
}

impl<SDI, SDO, CS, SCK, D, E> Bus for GpioBus<SDI, SDO, CS, SCK, D>
where
    SDI: OutputPin<Error = E>,
    SDO: InputPin<Error = E>,
    CS: OutputPin<Error = E>,
    SCK: OutputPin<Error = E>,
    D: DelayNs,
{
    type Error = E;

    fn assert_select(&mut self) -> Result<(), E> {
        self.sck.set_low()?;
        self.cs.set_low()?;
        self.delay.delay_ns(HALF_PERIOD_NS);
        Ok(())
    }

    fn deassert_select(&mut self) -> Result<(), E> {
        self.cs.set_high()?;
        self.delay.delay_ns(HALF_PERIOD_NS);
        Ok(())
    }

    fn transfer_byte(&mut self, value: u8) -> Result<u8, E> {
        let mut input = 0u8;
        for i in (0..8).rev() {
            // Drive the output bit on the rising edge, sample on the falling
            // edge (CPOL = 0, CPHA = 1 per the datasheet's interface table).
            self.sck.set_high()?;
            if (value >> i) & 1 != 0 {
                self.sdi.set_high()?;
            } else {
                self.sdi.set_low()?;
            }
            self.delay.delay_ns(HALF_PERIOD_NS);
            self.sck.set_low()?;
            input <<= 1;
            if self.sdo.is_high()? {
                input |= 1;
            }
            self.delay.delay_ns(HALF_PERIOD_NS);
        }
        Ok(input)
    }
}
