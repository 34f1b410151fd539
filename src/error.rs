//! Error definitions for the MAX31856 driver.

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug)]
pub enum Error<BusError> {
    /// Underlying bus transaction failed (pin drive/sample error).
    Bus(BusError),
    /// Register range is not writable or not contiguous within the map.
    InvalidAddress,
}

impl<BusError: core::fmt::Debug> core::fmt::Display for Error<BusError> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "bus error: {:?}", e),
            Error::InvalidAddress => write!(f, "register address out of writable range"),
        }
    }
}
