use crate::config::{GrayCodeValue, ERROR_SENTINEL_VALUE};
use crate::drivers::lines::{Line, LineBus};
use crate::drivers::sampler::BitSampler;
use crate::math::gray;

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    TooManyLines { requested: usize, max: usize },
}

/// Line list and polarity flag handed to [`GrayCodeDecoder::new`].
#[derive(Clone, Copy, Debug)]
pub struct DecoderConfig<'a> {
    /// Least significant bit first.
    pub lines: &'a [Line],
    /// Polarity inversion for consumers of the decoded value. Not applied by the decoder.
    pub invert: bool,
}

impl<'a> DecoderConfig<'a> {
    pub const fn new(lines: &'a [Line]) -> Self {
        DecoderConfig {
            lines,
            invert: false,
        }
    }

    pub const fn inverted(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }
}

/// Samples Gray coded lines and returns the binary position.
///
/// Construction never fails. A rejected configuration is latched and every
/// later read reports it without touching the bus.
pub struct GrayCodeDecoder<B: LineBus> {
    bus: B,
    sampler: BitSampler,
    invert: bool,
    error: Option<ConfigError>,
}

impl<B: LineBus> GrayCodeDecoder<B> {
    pub fn new(mut bus: B, config: DecoderConfig<'_>) -> Self {
        info!("GrayCodeDecoder - {} lines", config.lines.len());

        match BitSampler::new(config.lines) {
            Ok(sampler) => {
                sampler.configure(&mut bus);
                GrayCodeDecoder {
                    bus,
                    sampler,
                    invert: config.invert,
                    error: None,
                }
            }
            Err(err) => {
                error!("GrayCodeDecoder - rejected configuration: {}", err);
                GrayCodeDecoder {
                    bus,
                    sampler: BitSampler::empty(),
                    invert: false,
                    error: Some(err),
                }
            }
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn config_error(&self) -> Option<ConfigError> {
        self.error
    }

    pub fn line_count(&self) -> usize {
        self.sampler.len()
    }

    pub fn is_inverted(&self) -> bool {
        self.invert
    }

    /// Samples the lines and decodes them.
    pub fn try_value(&mut self) -> Result<GrayCodeValue, ConfigError> {
        if let Some(err) = self.error {
            error!("GrayCodeDecoder - read while misconfigured");
            return Err(err);
        }

        let raw = self.sampler.sample(&mut self.bus);
        let num = gray::to_binary(raw);
        debug!("GrayCodeDecoder - raw {} decoded {}", raw, num);

        Ok(num)
    }

    /// Decoded position, or [`ERROR_SENTINEL_VALUE`] if misconfigured.
    pub fn value(&mut self) -> u32 {
        match self.try_value() {
            Ok(num) => num as u32,
            Err(_) => ERROR_SENTINEL_VALUE,
        }
    }

    pub fn release(self) -> B {
        self.bus
    }
}
