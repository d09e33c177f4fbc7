//! Typed values for the BD3491FS controls.
//!
//! Each enum converts into the raw register code it stands for, so it can be
//! passed straight to the driver setters.

use crate::registers::{I2C_ADDR_ALT, I2C_ADDR_DEFAULT};

/// Input pair selection for [`Bd3491fs::set_active_input`](crate::Bd3491fs::set_active_input).
///
/// | `Input`  | Input pair       |
/// |----------|------------------|
/// | `A`      | Inputs A1 and A2 |
/// | `B`      | Inputs B1 and B2 |
/// | `C`      | Inputs C1 and C2 |
/// | `D`      | Inputs D1 and D2 |
/// | `E`      | Inputs E1 and E2 |
/// | `F`      | Inputs F1 and F2 |
/// | `Short`  | Inputs shorted   |
/// | `Mute`   | All inputs muted |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Input {
    /// Inputs A1 and A2.
    A = 0x00,
    /// Inputs B1 and B2.
    B = 0x01,
    /// Inputs C1 and C2.
    C = 0x02,
    /// Inputs D1 and D2.
    D = 0x03,
    /// Inputs E1 and E2.
    E = 0x04,
    /// Inputs shorted together.
    Short = 0x05,
    /// Inputs F1 and F2.
    F = 0x06,
    /// All inputs muted.
    Mute = 0x07,
}

impl Input {
    /// Decode the low three bits of a selector value. Higher bits are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0x00 => Self::A,
            0x01 => Self::B,
            0x02 => Self::C,
            0x03 => Self::D,
            0x04 => Self::E,
            0x05 => Self::Short,
            0x06 => Self::F,
            _ => Self::Mute,
        }
    }
}

impl From<Input> for u8 {
    fn from(input: Input) -> Self {
        input as u8
    }
}

/// Input gain steps.
///
/// The register codes are not linear in dB: codes 5, 7 and 9 are unused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum InputGain {
    /// 0 dB.
    Db0 = 0x00,
    /// +2 dB.
    Db2 = 0x01,
    /// +4 dB.
    Db4 = 0x02,
    /// +6 dB.
    Db6 = 0x03,
    /// +8 dB.
    Db8 = 0x04,
    /// +12 dB.
    Db12 = 0x06,
    /// +16 dB.
    Db16 = 0x08,
    /// +20 dB.
    Db20 = 0x0A,
}

impl InputGain {
    /// Gain in dB.
    pub const fn db(self) -> u8 {
        match self {
            Self::Db0 => 0,
            Self::Db2 => 2,
            Self::Db4 => 4,
            Self::Db6 => 6,
            Self::Db8 => 8,
            Self::Db12 => 12,
            Self::Db16 => 16,
            Self::Db20 => 20,
        }
    }
}

impl From<InputGain> for u8 {
    fn from(gain: InputGain) -> Self {
        gain as u8
    }
}

impl TryFrom<u8> for InputGain {
    type Error = u8;

    /// Decode a register code, returning the code back if it is not a legal step.
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0x00 => Ok(Self::Db0),
            0x01 => Ok(Self::Db2),
            0x02 => Ok(Self::Db4),
            0x03 => Ok(Self::Db6),
            0x04 => Ok(Self::Db8),
            0x06 => Ok(Self::Db12),
            0x08 => Ok(Self::Db16),
            0x0A => Ok(Self::Db20),
            other => Err(other),
        }
    }
}

/// Bass and treble gain steps.
///
/// Whether the step boosts or cuts is chosen separately with
/// [`set_bass_gain_cut`](crate::Bd3491fs::set_bass_gain_cut) /
/// [`set_treble_gain_cut`](crate::Bd3491fs::set_treble_gain_cut).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ToneGain {
    /// 0 dB.
    Db0 = 0x00,
    /// 2 dB.
    Db2 = 0x01,
    /// 4 dB.
    Db4 = 0x02,
    /// 6 dB.
    Db6 = 0x03,
    /// 8 dB.
    Db8 = 0x04,
    /// 12 dB.
    Db12 = 0x06,
    /// 14 dB.
    Db14 = 0x07,
}

impl ToneGain {
    /// Gain in dB.
    pub const fn db(self) -> u8 {
        match self {
            Self::Db0 => 0,
            Self::Db2 => 2,
            Self::Db4 => 4,
            Self::Db6 => 6,
            Self::Db8 => 8,
            Self::Db12 => 12,
            Self::Db14 => 14,
        }
    }
}

impl From<ToneGain> for u8 {
    fn from(gain: ToneGain) -> Self {
        gain as u8
    }
}

impl TryFrom<u8> for ToneGain {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0x00 => Ok(Self::Db0),
            0x01 => Ok(Self::Db2),
            0x02 => Ok(Self::Db4),
            0x03 => Ok(Self::Db6),
            0x04 => Ok(Self::Db8),
            0x06 => Ok(Self::Db12),
            0x07 => Ok(Self::Db14),
            other => Err(other),
        }
    }
}

/// Strapping of the address-select pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressPin {
    /// Pin high or left open: address 0x41.
    #[default]
    Vcc,
    /// Pin strapped to ground: address 0x40.
    Ground,
}

impl AddressPin {
    /// 7-bit I2C address for this strapping.
    pub const fn address(self) -> u8 {
        match self {
            Self::Vcc => I2C_ADDR_DEFAULT,
            Self::Ground => I2C_ADDR_ALT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::{INPUT_GAIN_CODES, TONE_GAIN_CODES};

    #[test]
    fn input_codes_match_selector_values() {
        assert_eq!(u8::from(Input::C), 0x02);
        assert_eq!(u8::from(Input::F), 0x06);
        assert_eq!(u8::from(Input::Short), 0x05);
        assert_eq!(u8::from(Input::Mute), 0x07);
    }

    #[test]
    fn every_selector_code_decodes() {
        for code in 0..8u8 {
            assert_eq!(u8::from(Input::from_bits(code)), code);
        }
    }

    #[test]
    fn selector_decode_ignores_high_bits() {
        for bits in 0..=u8::MAX {
            assert_eq!(u8::from(Input::from_bits(bits)), bits & 0b111);
        }
        assert_eq!(Input::from_bits(0xFA), Input::C);
        assert_eq!(Input::from_bits(0x08), Input::A);
    }

    #[test]
    fn input_gain_decodes_exactly_the_allow_list() {
        for code in 0..16u8 {
            assert_eq!(InputGain::try_from(code).is_ok(), INPUT_GAIN_CODES.contains(&code));
        }
        assert_eq!(InputGain::try_from(5), Err(5));
        assert_eq!(InputGain::try_from(0x0A), Ok(InputGain::Db20));
        assert_eq!(InputGain::Db12.db(), 12);
    }

    #[test]
    fn tone_gain_decodes_exactly_the_allow_list() {
        for code in 0..8u8 {
            assert_eq!(ToneGain::try_from(code).is_ok(), TONE_GAIN_CODES.contains(&code));
        }
        assert_eq!(ToneGain::try_from(7).map(ToneGain::db), Ok(14));
    }

    #[test]
    fn address_pin_strapping() {
        assert_eq!(AddressPin::default().address(), 0x41);
        assert_eq!(AddressPin::Ground.address(), 0x40);
    }
}
