#![cfg_attr(not(test), no_std)]

//! Gray code position decoder.
//!
//! Samples an ordered set of input lines (first line is the least significant
//! bit), treats the pattern as a reflected binary Gray code and converts it to
//! a plain binary position. Intended for encoder wheels on wind vanes, angle
//! sensors and similar absolute position inputs.

// must stay first so the log macros are in scope for every module below
#[macro_use]
mod fmt;

pub mod config;
pub mod drivers;
pub mod math;
pub mod sensor;

pub use config::{GrayCodeValue, ERROR_SENTINEL_VALUE, MAX_GRAY_DECODER_BITS};
pub use drivers::gray_decoder::{ConfigError, DecoderConfig, GrayCodeDecoder};
pub use drivers::lines::{Line, LineBus, LineId};
pub use drivers::pin_bank::PinBank;
pub use drivers::sampler::BitSampler;
pub use sensor::{GeneralPurposeMeasurement, GrayCodeSensor};
