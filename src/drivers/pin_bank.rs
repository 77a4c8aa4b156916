use embedded_hal::digital::InputPin;

use crate::drivers::lines::{LineBus, LineId};

/// [`LineBus`] over any HAL's input pins. `LineId(i)` is the i-th pin passed in.
///
/// Pins are expected to already be inputs with their pull-ups set by the HAL,
/// so `configure_input` only checks the id. A failed read counts as low.
pub struct PinBank<P: InputPin, const PIN_CT: usize> {
    pins: [P; PIN_CT],
}

impl<P: InputPin, const PIN_CT: usize> PinBank<P, PIN_CT> {
    pub const fn new_from_pins(pins: [P; PIN_CT]) -> Self {
        PinBank { pins }
    }

    pub fn release(self) -> [P; PIN_CT] {
        self.pins
    }
}

impl<P: InputPin, const PIN_CT: usize> LineBus for PinBank<P, PIN_CT> {
    fn configure_input(&mut self, id: LineId) {
        if id.0 as usize >= PIN_CT {
            warn!("PinBank - no pin for IO{}", id.0);
        }
    }

    fn read_digital(&mut self, id: LineId) -> bool {
        match self.pins.get_mut(id.0 as usize) {
            Some(pin) => match pin.is_high() {
                Ok(level) => level,
                Err(_) => {
                    warn!("PinBank - read of IO{} failed", id.0);
                    false
                }
            },
            None => {
                warn!("PinBank - no pin for IO{}", id.0);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use embedded_hal::digital::{Error, ErrorKind, ErrorType};

    use super::*;
    use crate::drivers::gray_decoder::{DecoderConfig, GrayCodeDecoder};
    use crate::drivers::lines::Line;

    struct FakePin(bool);

    impl ErrorType for FakePin {
        type Error = Infallible;
    }

    impl InputPin for FakePin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.0)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.0)
        }
    }

    #[derive(Debug)]
    struct Floating;

    impl Error for Floating {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    struct BrokenPin;

    impl ErrorType for BrokenPin {
        type Error = Floating;
    }

    impl InputPin for BrokenPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Err(Floating)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Err(Floating)
        }
    }

    #[test]
    fn line_id_selects_pin() {
        let mut bank = PinBank::new_from_pins([FakePin(false), FakePin(true), FakePin(false)]);
        assert!(!bank.read_digital(LineId(0)));
        assert!(bank.read_digital(LineId(1)));
        assert!(!bank.read_digital(LineId(2)));
        // outside the bank
        assert!(!bank.read_digital(LineId(3)));
        assert_eq!(bank.read_analog(LineId(1)), None);
    }

    #[test]
    fn decodes_through_input_pins() {
        // gray 0b1010 -> 12
        let bank = PinBank::new_from_pins([FakePin(false), FakePin(true), FakePin(false), FakePin(true)]);
        let lines = [Line::digital(0), Line::digital(1), Line::digital(2), Line::digital(3)];
        let mut decoder = GrayCodeDecoder::new(bank, DecoderConfig::new(&lines));
        assert_eq!(decoder.try_value(), Ok(12));

        let pins = decoder.release().release();
        assert!(pins[3].0);
    }

    #[test]
    fn failed_read_is_low() {
        let mut bank = PinBank::new_from_pins([BrokenPin, BrokenPin]);
        assert!(!bank.read_digital(LineId(0)));
        assert!(!bank.read_digital(LineId(1)));
    }
}
