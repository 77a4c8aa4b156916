use heapless::Vec;

use crate::config::{GrayCodeValue, MAX_GRAY_DECODER_BITS};
use crate::drivers::gray_decoder::ConfigError;
use crate::drivers::lines::{Line, LineBus};

/// Reads the configured lines into one integer, first line in bit 0.
#[derive(Clone, Debug)]
pub struct BitSampler {
    lines: Vec<Line, MAX_GRAY_DECODER_BITS>,
}

impl BitSampler {
    pub fn new(lines: &[Line]) -> Result<Self, ConfigError> {
        // a full 8 lines is refused as well
        if lines.len() >= MAX_GRAY_DECODER_BITS {
            return Err(ConfigError::TooManyLines {
                requested: lines.len(),
                max: MAX_GRAY_DECODER_BITS - 1,
            });
        }

        let lines = Vec::from_slice(lines).map_err(|_| ConfigError::TooManyLines {
            requested: lines.len(),
            max: MAX_GRAY_DECODER_BITS - 1,
        })?;

        Ok(BitSampler { lines })
    }

    pub const fn empty() -> Self {
        BitSampler { lines: Vec::new() }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Switches every configured line to a pulled-up input.
    pub fn configure<B: LineBus>(&self, bus: &mut B) {
        for (i, line) in self.lines.iter().enumerate() {
            debug!("D{} is IO{}", i, line.id().0);
            bus.configure_input(line.id());
        }
    }

    pub fn read_line<B: LineBus>(bus: &mut B, line: &Line) -> bool {
        match *line {
            Line::Digital(id) => bus.read_digital(id),
            Line::ThresholdAnalog { id, threshold } => match bus.read_analog(id) {
                Some(reading) => {
                    trace!("analog IO{}: {} (threshold {})", id.0, reading, threshold);
                    reading > threshold
                }
                None => {
                    warn!("IO{} has no analog reading, falling back to digital", id.0);
                    bus.read_digital(id)
                }
            },
        }
    }

    pub fn sample<B: LineBus>(&self, bus: &mut B) -> GrayCodeValue {
        let mut num: GrayCodeValue = 0;
        for (i, line) in self.lines.iter().enumerate() {
            let pin_state = Self::read_line(bus, line);
            trace!("pin {} io[{}] is {}", i, line.id().0, pin_state as u8);

            num |= (pin_state as GrayCodeValue) << i;
        }

        num
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::lines::LineId;

    struct Levels {
        digital: [bool; 16],
        analog: [Option<u16>; 16],
    }

    impl Levels {
        fn new() -> Self {
            Levels {
                digital: [false; 16],
                analog: [None; 16],
            }
        }
    }

    impl LineBus for Levels {
        fn configure_input(&mut self, _id: LineId) {}

        fn read_digital(&mut self, id: LineId) -> bool {
            self.digital[id.0 as usize]
        }

        fn read_analog(&mut self, id: LineId) -> Option<u16> {
            self.analog[id.0 as usize]
        }
    }

    #[test]
    fn accepts_up_to_seven_lines() {
        let lines = [Line::digital(0); 8];
        for n in 0..MAX_GRAY_DECODER_BITS {
            assert!(BitSampler::new(&lines[..n]).is_ok());
        }
        assert_eq!(
            BitSampler::new(&lines).unwrap_err(),
            ConfigError::TooManyLines { requested: 8, max: 7 }
        );
    }

    #[test]
    fn first_line_is_lsb() {
        let mut bus = Levels::new();
        bus.digital[5] = true;
        let sampler = BitSampler::new(&[Line::digital(5), Line::digital(6), Line::digital(7)]).unwrap();
        assert_eq!(sampler.sample(&mut bus), 0b001);

        let sampler = BitSampler::new(&[Line::digital(6), Line::digital(7), Line::digital(5)]).unwrap();
        assert_eq!(sampler.sample(&mut bus), 0b100);
    }

    #[test]
    fn analog_threshold_is_strict() {
        let mut bus = Levels::new();
        bus.analog[0] = Some(977);
        bus.analog[1] = Some(978);
        let sampler = BitSampler::new(&[Line::analog(0), Line::analog(1)]).unwrap();
        assert_eq!(
            sampler.lines()[0],
            Line::ThresholdAnalog { id: LineId(0), threshold: 977 }
        );
        assert_eq!(sampler.sample(&mut bus), 0b10);
    }

    #[test]
    fn analog_without_capability_reads_digital() {
        let mut bus = Levels::new();
        bus.digital[3] = true;
        let sampler = BitSampler::new(&[Line::analog_with_threshold(3, 500)]).unwrap();
        assert_eq!(sampler.sample(&mut bus), 1);
    }

    #[test]
    fn empty_sampler_reads_zero() {
        let mut bus = Levels::new();
        bus.digital = [true; 16];
        let sampler = BitSampler::new(&[]).unwrap();
        assert!(sampler.is_empty());
        assert_eq!(sampler.sample(&mut bus), 0);
    }
}
