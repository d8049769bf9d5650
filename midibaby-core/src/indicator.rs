use smart_leds::{brightness, SmartLedsWrite, RGB8};

use crate::consts::OFF;

/// Frame buffer for a short chain of addressable RGB LEDs.
///
/// Colors are kept at full scale, brightness is only applied when the frame is
/// written out.
pub struct Indicator<W, const N: usize> {
    writer: W,
    frame: [RGB8; N],
    brightness: u8,
}

impl<W, const N: usize> Indicator<W, N>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    pub fn new(writer: W, brightness: u8) -> Self {
        Self {
            writer,
            frame: [OFF; N],
            brightness,
        }
    }

    pub fn fill(&mut self, color: RGB8) {
        self.frame = [color; N];
    }

    /// Out of range indices are ignored.
    pub fn set(&mut self, index: usize, color: RGB8) {
        if let Some(pixel) = self.frame.get_mut(index) {
            *pixel = color;
        }
    }

    pub fn clear(&mut self) {
        self.fill(OFF);
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn frame(&self) -> &[RGB8; N] {
        &self.frame
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn show(&mut self) -> Result<(), W::Error> {
        self.writer
            .write(brightness(self.frame.iter().copied(), self.brightness))
    }

    /// Replaces the whole frame and brightness and writes it out.
    pub fn render(&mut self, frame: [RGB8; N], brightness: u8) -> Result<(), W::Error> {
        self.frame = frame;
        self.brightness = brightness;
        self.show()
    }
}
