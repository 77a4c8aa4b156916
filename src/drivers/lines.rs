use crate::config::ANALOG_HIGH_THRESHOLD_DEFAULT;

/// Identifies one physical input line on a [`LineBus`].
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineId(pub u8);

/// How a configured line is turned into a bit.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    /// Logic level read straight from the pin.
    Digital(LineId),
    /// Analog reading compared against `threshold`, strictly above is high.
    ThresholdAnalog { id: LineId, threshold: u16 },
}

impl Line {
    pub const fn digital(id: u8) -> Self {
        Line::Digital(LineId(id))
    }

    pub const fn analog(id: u8) -> Self {
        Line::ThresholdAnalog {
            id: LineId(id),
            threshold: ANALOG_HIGH_THRESHOLD_DEFAULT,
        }
    }

    pub const fn analog_with_threshold(id: u8, threshold: u16) -> Self {
        Line::ThresholdAnalog {
            id: LineId(id),
            threshold,
        }
    }

    pub const fn id(&self) -> LineId {
        match *self {
            Line::Digital(id) => id,
            Line::ThresholdAnalog { id, .. } => id,
        }
    }
}

/// Hardware access used by the sampler.
///
/// Implemented by the board for real pins and by tests with scripted levels.
/// Pull-up idle wiring means an asserted sensor contact usually reads low;
/// mapping that to a bit value is left to the wiring.
pub trait LineBus {
    /// Put the line into input mode with its pull-up enabled.
    fn configure_input(&mut self, id: LineId);

    fn read_digital(&mut self, id: LineId) -> bool;

    /// Raw analog reading, or `None` if the line has no analog capability.
    fn read_analog(&mut self, _id: LineId) -> Option<u16> {
        None
    }
}

impl<B: LineBus + ?Sized> LineBus for &mut B {
    fn configure_input(&mut self, id: LineId) {
        (**self).configure_input(id)
    }

    fn read_digital(&mut self, id: LineId) -> bool {
        (**self).read_digital(id)
    }

    fn read_analog(&mut self, id: LineId) -> Option<u16> {
        (**self).read_analog(id)
    }
}
