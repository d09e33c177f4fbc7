//! BD3491FS register addresses and bitfield definitions.
//!
//! Register addresses are 8-bit and every register holds a single byte.
//! Each named control is described by a [`Field`]: the register it lives in,
//! its bit offset and width, whether it may be written, and the rule a value
//! must pass before it is written.

// ── I2C addresses ──────────────────────────────────────────────────────────

/// Default I2C address (address-select pin high).
pub const I2C_ADDR_DEFAULT: u8 = 0x41;

/// Alternate I2C address (address-select pin strapped to ground).
pub const I2C_ADDR_ALT: u8 = 0x40;

// ── Register addresses ─────────────────────────────────────────────────────

/// Input selector.
/// - Bits 3:1 — INPUT_SEL (see [`crate::Input`])
pub const REG_INPUT_SELECTOR: u8 = 0x04;

/// Input gain.
/// - Bits 4:1 — INPUT_GAIN (non-linear codes, see [`crate::InputGain`])
pub const REG_INPUT_GAIN: u8 = 0x06;

/// Channel 1 volume attenuation.
/// - Bits 6:0 — attenuation in dB (0–87)
pub const REG_VOLUME_GAIN_CH1: u8 = 0x21;

/// Channel 2 volume attenuation.
/// - Bits 6:0 — attenuation in dB (0–87)
pub const REG_VOLUME_GAIN_CH2: u8 = 0x22;

/// Bass tone control.
/// - Bit  7   — BASS_CUT (1 = cut, 0 = boost)
/// - Bits 3:1 — BASS_GAIN (see [`crate::ToneGain`])
pub const REG_BASS_GAIN: u8 = 0x51;

/// Treble tone control.
/// - Bit  7   — TREBLE_CUT (1 = cut, 0 = boost)
/// - Bits 3:1 — TREBLE_GAIN (see [`crate::ToneGain`])
pub const REG_TREBLE_GAIN: u8 = 0x57;

/// Surround control.
/// - Bit  7   — SURROUND_MODE
/// - Bits 3:0 — SURROUND_GAIN
pub const REG_SURROUND_GAIN: u8 = 0x78;

/// Test mode (raw byte, leave at 0 for normal operation).
pub const REG_TEST_MODE: u8 = 0xF0;

/// System reset.
/// - Bit 7 — reset trigger / busy status, reads 1 until the reset completes
/// - Bit 0 — reset all registers to power-on defaults
pub const REG_SYSTEM_RESET: u8 = 0xFE;

/// Value written to [`REG_SYSTEM_RESET`] to start a full register reset.
pub const SYSTEM_RESET_ALL: u8 = 0x81;

/// Status bit in [`REG_SYSTEM_RESET`] that stays set while a reset is running.
pub const SYSTEM_RESET_BUSY: u8 = 1 << 7;

// ── Legal value sets ───────────────────────────────────────────────────────

/// Legal input gain codes. Codes 5, 7 and 9 are skipped by the chip.
pub const INPUT_GAIN_CODES: &[u8] = &[0, 1, 2, 3, 4, 6, 8, 10];

/// Legal bass and treble gain codes. Code 5 is skipped by the chip.
pub const TONE_GAIN_CODES: &[u8] = &[0, 1, 2, 3, 4, 6, 7];

/// Largest channel attenuation in dB.
pub const CHANNEL_GAIN_MAX: u8 = 87;

// ── Field descriptors ──────────────────────────────────────────────────────

/// Whether a field may be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Access {
    /// Readable and writable.
    ReadWrite,
    /// Readable only; writes are rejected before reaching the bus.
    ReadOnly,
}

/// The values a field accepts on write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rule {
    /// Any value that fits in the field width.
    Any,
    /// Only the listed codes.
    OneOf(&'static [u8]),
    /// Any value in `min..=max`.
    Range {
        /// Smallest legal value.
        min: u8,
        /// Largest legal value.
        max: u8,
    },
}

/// A bit field inside a single-byte register.
///
/// Fields can only be built through [`Field::new`] / [`Field::try_new`], so
/// `offset + width <= 8` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Field {
    register: u8,
    offset: u8,
    width: u8,
    access: Access,
    rule: Rule,
}

impl Field {
    /// A read/write field with no restriction beyond its width.
    ///
    /// # Panics
    ///
    /// If the field is empty or does not fit in one byte. In a `const` item
    /// this is a compile error.
    pub const fn new(register: u8, offset: u8, width: u8) -> Self {
        match Self::try_new(register, offset, width) {
            Some(field) => field,
            None => panic!("field must fit in one byte"),
        }
    }

    /// Like [`Field::new`], returning `None` for a field that does not fit.
    pub const fn try_new(register: u8, offset: u8, width: u8) -> Option<Self> {
        if width == 0 || width > 8 || offset > 8 - width {
            return None;
        }
        Some(Self {
            register,
            offset,
            width,
            access: Access::ReadWrite,
            rule: Rule::Any,
        })
    }

    /// Register address.
    pub const fn register(&self) -> u8 {
        self.register
    }

    /// Position of the least significant bit.
    pub const fn offset(&self) -> u8 {
        self.offset
    }

    /// Number of bits.
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Write capability.
    pub const fn access(&self) -> Access {
        self.access
    }

    /// Validation applied before writing.
    pub const fn rule(&self) -> Rule {
        self.rule
    }

    /// A single-bit read/write field.
    pub const fn bit(register: u8, bit: u8) -> Self {
        Self::new(register, bit, 1)
    }

    /// Restrict the field to the given rule.
    pub const fn with_rule(mut self, rule: Rule) -> Self {
        self.rule = rule;
        self
    }

    /// Mark the field read-only.
    pub const fn read_only(mut self) -> Self {
        self.access = Access::ReadOnly;
        self
    }

    /// Field mask, already shifted into register position.
    pub const fn mask(&self) -> u8 {
        (((1u16 << self.width) - 1) as u8) << self.offset
    }

    /// Largest raw value the field can hold.
    pub const fn max_value(&self) -> u8 {
        ((1u16 << self.width) - 1) as u8
    }

    /// Extract the field value from a register byte.
    pub const fn extract(&self, register_value: u8) -> u8 {
        (register_value & self.mask()) >> self.offset
    }

    /// Place `value` into `register_value`, leaving every other bit untouched.
    ///
    /// Bits of `value` above the field width are discarded.
    pub const fn insert(&self, register_value: u8, value: u8) -> u8 {
        (register_value & !self.mask()) | ((value << self.offset) & self.mask())
    }

    /// Whether `value` may be written to this field.
    pub fn accepts(&self, value: u8) -> bool {
        if value > self.max_value() {
            return false;
        }
        match self.rule {
            Rule::Any => true,
            Rule::OneOf(codes) => codes.contains(&value),
            Rule::Range { min, max } => (min..=max).contains(&value),
        }
    }

    /// Whether the field may be written at all.
    pub const fn is_writable(&self) -> bool {
        matches!(self.access, Access::ReadWrite)
    }
}

// ── Register map ───────────────────────────────────────────────────────────

/// Active input pair selector.
pub const INPUT_SELECTOR: Field = Field::new(REG_INPUT_SELECTOR, 1, 3);

/// Gain applied to all inputs equally.
pub const INPUT_GAIN: Field =
    Field::new(REG_INPUT_GAIN, 1, 4).with_rule(Rule::OneOf(INPUT_GAIN_CODES));

/// Channel 1 attenuation in dB.
pub const VOLUME_GAIN_CH1: Field = Field::new(REG_VOLUME_GAIN_CH1, 0, 7).with_rule(Rule::Range {
    min: 0,
    max: CHANNEL_GAIN_MAX,
});

/// Channel 2 attenuation in dB.
pub const VOLUME_GAIN_CH2: Field = Field::new(REG_VOLUME_GAIN_CH2, 0, 7).with_rule(Rule::Range {
    min: 0,
    max: CHANNEL_GAIN_MAX,
});

/// Bass gain code.
pub const BASS_GAIN: Field =
    Field::new(REG_BASS_GAIN, 1, 3).with_rule(Rule::OneOf(TONE_GAIN_CODES));

/// Bass direction (1 = cut, 0 = boost).
pub const BASS_GAIN_CUT: Field = Field::bit(REG_BASS_GAIN, 7);

/// Treble gain code.
pub const TREBLE_GAIN: Field =
    Field::new(REG_TREBLE_GAIN, 1, 3).with_rule(Rule::OneOf(TONE_GAIN_CODES));

/// Treble direction (1 = cut, 0 = boost).
pub const TREBLE_GAIN_CUT: Field = Field::bit(REG_TREBLE_GAIN, 7);

/// Surround gain.
pub const SURROUND_GAIN: Field = Field::new(REG_SURROUND_GAIN, 0, 4);

/// Surround mode enable.
pub const SURROUND_MODE: Field = Field::bit(REG_SURROUND_GAIN, 7);

/// Test mode register, whole byte.
pub const TEST_MODE: Field = Field::new(REG_TEST_MODE, 0, 8);

/// System reset register, whole byte.
pub const SYSTEM_RESET: Field = Field::new(REG_SYSTEM_RESET, 0, 8);

/// Every named field, in register order.
pub const FIELDS: [Field; 12] = [
    INPUT_SELECTOR,
    INPUT_GAIN,
    VOLUME_GAIN_CH1,
    VOLUME_GAIN_CH2,
    BASS_GAIN,
    BASS_GAIN_CUT,
    TREBLE_GAIN,
    TREBLE_GAIN_CUT,
    SURROUND_GAIN,
    SURROUND_MODE,
    TEST_MODE,
    SYSTEM_RESET,
];

// ── Tests ──────────────────────────────────────────────────────────────────
