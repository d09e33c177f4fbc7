//! Driver errors.

use core::fmt;

/// Errors returned by the driver, generic over the bus error `E`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The I2C bus reported a failure (no acknowledge, arbitration loss, ...).
    Bus(E),
    /// A value outside the field's legal set was rejected before any bus traffic.
    InvalidArgument {
        /// Register the value was meant for.
        register: u8,
        /// The rejected value.
        value: u8,
    },
    /// Attempted write to a read-only field.
    ReadOnly {
        /// Register holding the field.
        register: u8,
    },
    /// The reset status bit did not clear within the configured poll limit.
    ResetTimeout,
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bus(e) => write!(f, "I2C bus error: {e:?}"),
            Self::InvalidArgument { register, value } => {
                write!(f, "value {value} not allowed for register {register:#04x}")
            }
            Self::ReadOnly { register } => write!(f, "register {register:#04x} is read-only"),
            Self::ResetTimeout => f.write_str("device not responding: reset did not complete"),
        }
    }
}
