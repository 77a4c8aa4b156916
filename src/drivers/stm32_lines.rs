use embassy_stm32::gpio::{AnyPin, Flex, Pull};

use crate::drivers::lines::{LineBus, LineId};

/// GPIO bank backing a [`LineBus`]. `LineId(i)` is the i-th pin passed in.
///
/// Digital only, threshold lines fall back to digital reads.
pub struct Stm32LineBank<'d, const PIN_CT: usize> {
    pins: [Flex<'d>; PIN_CT],
}

impl<'d, const PIN_CT: usize> Stm32LineBank<'d, PIN_CT> {
    pub fn new_from_pins(pins: [AnyPin; PIN_CT]) -> Self {
        let pins = pins.map(|pin| Flex::new(pin));

        Stm32LineBank { pins }
    }
}

impl<'d, const PIN_CT: usize> LineBus for Stm32LineBank<'d, PIN_CT> {
    fn configure_input(&mut self, id: LineId) {
        match self.pins.get_mut(id.0 as usize) {
            Some(pin) => pin.set_as_input(Pull::Up),
            None => warn!("Stm32LineBank - no pin for IO{}", id.0),
        }
    }

    fn read_digital(&mut self, id: LineId) -> bool {
        match self.pins.get(id.0 as usize) {
            Some(pin) => pin.is_high(),
            None => {
                warn!("Stm32LineBank - no pin for IO{}", id.0);
                false
            }
        }
    }
}
