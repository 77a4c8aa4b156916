// Decoder limits and electrical constants.

/// Integer type carrying a raw sample and a decoded position.
pub type GrayCodeValue = u8;

// Width of the output type. Line counts at or above this are rejected, one
// short of what the type could technically carry.
pub const MAX_GRAY_DECODER_BITS: usize = 8;
const _: () = assert!(MAX_GRAY_DECODER_BITS <= GrayCodeValue::BITS as usize);

// Returned by `GrayCodeDecoder::value` when the decoder is misconfigured.
pub const ERROR_SENTINEL_VALUE: u32 = 42;

// Analog-capable lines report 10 bit readings, 1024 counts at the nominal 1 V reference.
pub const ANALOG_FULL_SCALE: u16 = 1024;
// ~95.4% of full scale (977 counts, ~977 mV), anything above reads as 'high'
pub const ANALOG_HIGH_THRESHOLD_DEFAULT: u16 = ANALOG_FULL_SCALE - ANALOG_FULL_SCALE * 46 / 1000;
