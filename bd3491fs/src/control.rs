//! Generic audio control interface.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::driver::Bd3491fs;
use crate::error::Error;
use crate::registers::CHANNEL_GAIN_MAX;
use crate::types::Input;

/// Trait for audio components that support runtime control (e.g., codec chips).
pub trait AudioControl {
    /// Error type for control operations.
    type Error;

    /// Enable the audio component.
    fn enable(&mut self) -> Result<(), Self::Error>;

    /// Disable the audio component.
    fn disable(&mut self) -> Result<(), Self::Error>;

    /// Set the output volume (0.0 = silent, 1.0 = full scale).
    fn volume(&mut self, level: f32) -> Result<(), Self::Error>;
}

/// Convert a linear level (0.0–1.0) to channel attenuation in dB.
///
/// Non-positive levels map to the maximum attenuation; levels above 1.0
/// map to 0 dB.
pub fn level_to_attenuation(level: f32) -> u8 {
    if level.is_nan() || level <= 0.0 {
        return CHANNEL_GAIN_MAX;
    }
    let db = libm::roundf(-20.0 * libm::log10f(level));
    if db <= 0.0 {
        0
    } else if db >= CHANNEL_GAIN_MAX as f32 {
        CHANNEL_GAIN_MAX
    } else {
        db as u8
    }
}

impl<I2C, D> AudioControl for Bd3491fs<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    type Error = Error<I2C::Error>;

    /// Reset the chip to its power-on defaults.
    fn enable(&mut self) -> Result<(), Self::Error> {
        self.reset()
    }

    /// Mute all inputs.
    fn disable(&mut self) -> Result<(), Self::Error> {
        self.set_active_input(Input::Mute)
    }

    /// Set both channels to the same attenuation.
    fn volume(&mut self, level: f32) -> Result<(), Self::Error> {
        let db = level_to_attenuation(level);
        self.set_channel_1_gain(db)?;
        self.set_channel_2_gain(db)
    }
}
