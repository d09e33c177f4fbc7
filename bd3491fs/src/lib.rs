//! # bd3491fs
//!
//! A `no_std`, zero-allocation driver for the Rohm BD3491FS audio processor,
//! built on [`embedded-hal`](https://docs.rs/embedded-hal) 1.0 I2C.
//!
//! The BD3491FS is a six-input sound processor with input gain, two-channel
//! volume, bass/treble tone controls and surround. Every control lives in a
//! bit field of a single-byte register; this crate exposes each one as a
//! validated getter/setter pair.
//!
//! ## Architecture
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`registers`] | Register addresses and the static [`Field`] table |
//! | [`types`] | Typed control values ([`Input`], [`InputGain`], [`ToneGain`]) |
//! | [`config`] | Bus address and reset polling bounds |
//! | [`driver`] | The [`Bd3491fs`] driver |
//! | [`control`] | [`AudioControl`] trait |
//!
//! ## Quick start
//!
//! ```ignore
//! use bd3491fs::{Bd3491fs, Input, InputGain, ToneGain};
//!
//! let mut dsp = Bd3491fs::new(i2c, delay);
//! dsp.reset()?;
//! dsp.set_active_input(Input::A)?;
//! dsp.set_input_gain(InputGain::Db4)?;
//! dsp.set_channel_1_gain(30)?; // -30 dB
//! dsp.set_channel_2_gain(30)?;
//! dsp.set_treble_gain(ToneGain::Db6)?;
//! dsp.set_treble_gain_cut(true)?;
//! ```
//!
//! ## Features
//!
//! | Feature | Default | Enables |
//! |---------|---------|---------|
//! | `defmt` | no | `defmt::Format` on public types and driver logging |
//!
//! ## Concurrency
//!
//! Setters are read-modify-write sequences of two bus transactions. The
//! driver needs `&mut self` for every access; if several contexts share one
//! chip, put the driver behind a mutex.

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod control;
pub mod driver;
pub mod error;
pub mod registers;
pub mod types;

pub use config::Config;
pub use control::AudioControl;
pub use driver::Bd3491fs;
pub use error::Error;
pub use registers::{Access, Field, Rule};
pub use types::{AddressPin, Input, InputGain, ToneGain};
