pub mod gray_decoder;
pub mod lines;
pub mod pin_bank;
pub mod sampler;

#[cfg(feature = "stm32")]
pub mod stm32_lines;
