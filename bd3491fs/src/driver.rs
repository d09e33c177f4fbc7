//! BD3491FS audio processor driver.
//!
//! The driver is generic over any [`embedded_hal::i2c::I2c`] and
//! [`embedded_hal::delay::DelayNs`] implementation. The delay is used only
//! while polling for reset completion.
//!
//! Every setter validates its value against the register map before touching
//! the bus. Fields narrower than a byte are then written with a
//! read-modify-write so that neighbouring fields are preserved. Getters return the raw field contents
//! without re-validating them.
//!
//! # Example
//!
//! ```ignore
//! let mut dsp = Bd3491fs::new(i2c, delay);
//! dsp.reset()?;
//! dsp.set_active_input(Input::B)?;
//! dsp.set_input_gain(InputGain::Db6)?;
//! dsp.set_channel_1_gain(20)?;
//! dsp.set_channel_2_gain(20)?;
//! dsp.set_bass_gain(ToneGain::Db4)?;
//! dsp.set_bass_gain_cut(false)?;
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::config::Config;
use crate::error::Error;
use crate::registers::{self as reg, Field};
use crate::types::Input;

// ── Driver struct ──────────────────────────────────────────────────────────

/// BD3491FS audio processor driver.
///
/// Construction performs no bus traffic; call [`reset`](Self::reset) to put
/// the chip into a known state.
pub struct Bd3491fs<I2C, D> {
    i2c: I2C,
    delay: D,
    config: Config,
}

impl<I2C, D> Bd3491fs<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Default I2C address (address-select pin high).
    pub const DEFAULT_ADDRESS: u8 = reg::I2C_ADDR_DEFAULT;

    /// Alternate I2C address (address-select pin grounded).
    pub const ALT_ADDRESS: u8 = reg::I2C_ADDR_ALT;

    /// Create a new driver with the default I2C address (0x41).
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::with_config(i2c, delay, Config::default())
    }

    /// Create a new driver with a specific I2C address.
    pub fn new_with_address(i2c: I2C, delay: D, address: u8) -> Self {
        Self::with_config(i2c, delay, Config::new(address))
    }

    /// Create a new driver from a full [`Config`].
    pub fn with_config(i2c: I2C, delay: D, config: Config) -> Self {
        Self { i2c, delay, config }
    }

    /// I2C address the driver talks to.
    pub fn address(&self) -> u8 {
        self.config.address
    }

    /// Active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    // ── Low-level I2C helpers ──────────────────────────────────────────

    /// Write a byte to a register.
    pub fn write_register(&mut self, register: u8, value: u8) -> Result<(), I2C::Error> {
        #[cfg(feature = "defmt")]
        defmt::trace!("BD3491FS write {=u8:#x} <- {=u8:#x}", register, value);
        self.i2c.write(self.config.address, &[register, value])
    }

    /// Read a byte from a register.
    pub fn read_register(&mut self, register: u8) -> Result<u8, I2C::Error> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(self.config.address, &[register], &mut buf)?;
        #[cfg(feature = "defmt")]
        defmt::trace!("BD3491FS read {=u8:#x} -> {=u8:#x}", register, buf[0]);
        Ok(buf[0])
    }

    /// Read-modify-write: `new = (current & !mask) | (value & mask)`.
    fn modify(&mut self, register: u8, value: u8, mask: u8) -> Result<u8, I2C::Error> {
        let current = self.read_register(register)?;
        let new_val = (current & !mask) | (value & mask);
        self.write_register(register, new_val)?;
        Ok(new_val)
    }

    // ── Field access ───────────────────────────────────────────────────

    /// Read the raw contents of a field.
    pub fn read_field(&mut self, field: Field) -> Result<u8, Error<I2C::Error>> {
        let value = self.read_register(field.register())?;
        Ok(field.extract(value))
    }

    /// Validate `value` against `field` and write it.
    ///
    /// Rejected values return [`Error::InvalidArgument`] and read-only fields
    /// return [`Error::ReadOnly`], both without any bus traffic. Fields that
    /// span the whole register are written directly; narrower fields go
    /// through a read-modify-write that leaves the other bits untouched.
    pub fn write_field(&mut self, field: Field, value: u8) -> Result<(), Error<I2C::Error>> {
        if !field.is_writable() {
            return Err(Error::ReadOnly {
                register: field.register(),
            });
        }
        if !field.accepts(value) {
            #[cfg(feature = "defmt")]
            defmt::debug!(
                "BD3491FS rejected {=u8} for register {=u8:#x}",
                value,
                field.register()
            );
            return Err(Error::InvalidArgument {
                register: field.register(),
                value,
            });
        }

        if field.mask() == 0xFF {
            self.write_register(field.register(), value)?;
        } else {
            self.modify(field.register(), field.insert(0, value), field.mask())?;
        }
        Ok(())
    }

    /// Read a single-bit field.
    pub fn read_flag(&mut self, field: Field) -> Result<bool, Error<I2C::Error>> {
        Ok(self.read_field(field)? != 0)
    }

    /// Write a single-bit field.
    pub fn write_flag(&mut self, field: Field, set: bool) -> Result<(), Error<I2C::Error>> {
        self.write_field(field, set as u8)
    }

    // ── Reset ──────────────────────────────────────────────────────────

    /// Reset the chip, restoring all configuration registers to their defaults.
    ///
    /// Writes the reset code to `SYSTEM_RESET`, then polls its busy bit until
    /// it reads clear. Polling stops after [`Config::reset_poll_limit`] reads
    /// with [`Error::ResetTimeout`]; bus errors during polling are returned
    /// immediately.
    pub fn reset(&mut self) -> Result<(), Error<I2C::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("BD3491FS reset");

        self.write_register(reg::REG_SYSTEM_RESET, reg::SYSTEM_RESET_ALL)?;

        for _ in 0..self.config.reset_poll_limit {
            self.delay.delay_us(self.config.reset_poll_interval_us);
            let status = self.read_register(reg::REG_SYSTEM_RESET)?;
            if status & reg::SYSTEM_RESET_BUSY == 0 {
                #[cfg(feature = "defmt")]
                defmt::debug!("BD3491FS reset complete");
                return Ok(());
            }
        }

        #[cfg(feature = "defmt")]
        defmt::warn!(
            "BD3491FS reset did not complete after {=u16} polls",
            self.config.reset_poll_limit
        );
        Err(Error::ResetTimeout)
    }

    // ── Input selection ────────────────────────────────────────────────

    /// Currently selected input pair.
    pub fn active_input(&mut self) -> Result<Input, Error<I2C::Error>> {
        let code = self.read_field(reg::INPUT_SELECTOR)?;
        Ok(Input::from_bits(code))
    }

    /// Select the active input pair. Accepts an [`Input`] or a raw code 0–7.
    pub fn set_active_input(&mut self, input: impl Into<u8>) -> Result<(), Error<I2C::Error>> {
        self.write_field(reg::INPUT_SELECTOR, input.into())
    }

    // ── Input gain ─────────────────────────────────────────────────────

    /// Raw input gain code (see [`InputGain`](crate::InputGain)).
    pub fn input_gain(&mut self) -> Result<u8, Error<I2C::Error>> {
        self.read_field(reg::INPUT_GAIN)
    }

    /// Set the gain applied to all inputs equally.
    ///
    /// Only the codes in [`INPUT_GAIN_CODES`](reg::INPUT_GAIN_CODES) are accepted.
    pub fn set_input_gain(&mut self, gain: impl Into<u8>) -> Result<(), Error<I2C::Error>> {
        self.write_field(reg::INPUT_GAIN, gain.into())
    }

    // ── Channel volume ─────────────────────────────────────────────────

    /// Channel 1 attenuation in dB.
    pub fn channel_1_gain(&mut self) -> Result<u8, Error<I2C::Error>> {
        self.read_field(reg::VOLUME_GAIN_CH1)
    }

    /// Set channel 1 attenuation, 0–87 dB.
    pub fn set_channel_1_gain(&mut self, db: u8) -> Result<(), Error<I2C::Error>> {
        self.write_field(reg::VOLUME_GAIN_CH1, db)
    }

    /// Channel 2 attenuation in dB.
    pub fn channel_2_gain(&mut self) -> Result<u8, Error<I2C::Error>> {
        self.read_field(reg::VOLUME_GAIN_CH2)
    }

    /// Set channel 2 attenuation, 0–87 dB.
    pub fn set_channel_2_gain(&mut self, db: u8) -> Result<(), Error<I2C::Error>> {
        self.write_field(reg::VOLUME_GAIN_CH2, db)
    }

    // ── Tone controls ──────────────────────────────────────────────────

    /// Raw bass gain code (see [`ToneGain`](crate::ToneGain)).
    pub fn bass_gain(&mut self) -> Result<u8, Error<I2C::Error>> {
        self.read_field(reg::BASS_GAIN)
    }

    /// Set the bass gain step.
    pub fn set_bass_gain(&mut self, gain: impl Into<u8>) -> Result<(), Error<I2C::Error>> {
        self.write_field(reg::BASS_GAIN, gain.into())
    }

    /// `true` if the bass gain cuts, `false` if it boosts.
    pub fn bass_gain_cut(&mut self) -> Result<bool, Error<I2C::Error>> {
        self.read_flag(reg::BASS_GAIN_CUT)
    }

    /// Set to `true` to cut the bass by [`bass_gain`](Self::bass_gain), or
    /// `false` to boost it.
    pub fn set_bass_gain_cut(&mut self, cut: bool) -> Result<(), Error<I2C::Error>> {
        self.write_flag(reg::BASS_GAIN_CUT, cut)
    }

    /// Raw treble gain code (see [`ToneGain`](crate::ToneGain)).
    pub fn treble_gain(&mut self) -> Result<u8, Error<I2C::Error>> {
        self.read_field(reg::TREBLE_GAIN)
    }

    /// Set the treble gain step.
    pub fn set_treble_gain(&mut self, gain: impl Into<u8>) -> Result<(), Error<I2C::Error>> {
        self.write_field(reg::TREBLE_GAIN, gain.into())
    }

    /// `true` if the treble gain cuts, `false` if it boosts.
    pub fn treble_gain_cut(&mut self) -> Result<bool, Error<I2C::Error>> {
        self.read_flag(reg::TREBLE_GAIN_CUT)
    }

    /// Set to `true` to cut the treble, `false` to boost it.
    pub fn set_treble_gain_cut(&mut self, cut: bool) -> Result<(), Error<I2C::Error>> {
        self.write_flag(reg::TREBLE_GAIN_CUT, cut)
    }

    // ── Surround ───────────────────────────────────────────────────────

    /// Surround gain (0–15).
    pub fn surround_gain(&mut self) -> Result<u8, Error<I2C::Error>> {
        self.read_field(reg::SURROUND_GAIN)
    }

    /// Set surround gain (0–15).
    pub fn set_surround_gain(&mut self, gain: u8) -> Result<(), Error<I2C::Error>> {
        self.write_field(reg::SURROUND_GAIN, gain)
    }

    /// Whether surround mode is enabled.
    pub fn surround_mode(&mut self) -> Result<bool, Error<I2C::Error>> {
        self.read_flag(reg::SURROUND_MODE)
    }

    /// Enable or disable surround mode.
    pub fn set_surround_mode(&mut self, enabled: bool) -> Result<(), Error<I2C::Error>> {
        self.write_flag(reg::SURROUND_MODE, enabled)
    }

    // ── Test mode ──────────────────────────────────────────────────────

    /// Raw test mode register.
    pub fn test_mode(&mut self) -> Result<u8, Error<I2C::Error>> {
        self.read_field(reg::TEST_MODE)
    }

    /// Write the raw test mode register. Keep at 0 for normal operation.
    pub fn set_test_mode(&mut self, value: u8) -> Result<(), Error<I2C::Error>> {
        self.write_field(reg::TEST_MODE, value)
    }

    // ── Release ────────────────────────────────────────────────────────

    /// Consume the driver and return the I2C bus and delay.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────
