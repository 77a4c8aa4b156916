use crate::drivers::gray_decoder::{DecoderConfig, GrayCodeDecoder};
use crate::drivers::lines::{Line, LineBus};

/// A sensor publishing a single numeric reading.
///
/// The reporting side decides when to poll.
pub trait GeneralPurposeMeasurement {
    fn value(&mut self) -> f64;
}

/// Gray code decoder exposed as a general purpose measurement.
pub struct GrayCodeSensor<B: LineBus> {
    decoder: GrayCodeDecoder<B>,
}

impl<B: LineBus> GrayCodeSensor<B> {
    pub fn new(bus: B, lines: &[Line]) -> Self {
        Self::from_decoder(GrayCodeDecoder::new(bus, DecoderConfig::new(lines)))
    }

    pub fn from_decoder(decoder: GrayCodeDecoder<B>) -> Self {
        GrayCodeSensor { decoder }
    }

    pub fn decoder(&self) -> &GrayCodeDecoder<B> {
        &self.decoder
    }

    pub fn into_decoder(self) -> GrayCodeDecoder<B> {
        self.decoder
    }
}

impl<B: LineBus> GeneralPurposeMeasurement for GrayCodeSensor<B> {
    fn value(&mut self) -> f64 {
        self.decoder.value() as f64
    }
}
