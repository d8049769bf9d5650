use core::convert::Infallible;

use fugit::HertzU32;
use rp_pico::hal::pio::{
    Buffers, InstallError, PIOBuilder, PIOExt, PinDir, Running, ShiftDirection, StateMachine,
    StateMachineIndex, Tx, UninitStateMachine, PIO,
};
use smart_leds::{SmartLedsWrite, RGB8};

use crate::pio::{ws2812_clock_divisor, ws2812_program};

/// A chain of WS2812 LEDs on one PIO state machine.
///
/// The LEDs on the MIDI Baby boards take their bytes in RGB order, not the usual GRB.
pub struct Ws2812<P: PIOExt, SM: StateMachineIndex> {
    tx: Tx<(P, SM)>,
    _sm: StateMachine<(P, SM), Running>,
}

impl<P: PIOExt, SM: StateMachineIndex> Ws2812<P, SM> {
    /// `pin` must already be switched to the function of this PIO block.
    pub fn new(
        pio: &mut PIO<P>,
        sm: UninitStateMachine<(P, SM)>,
        pin: u8,
        system_clock: HertzU32,
    ) -> Result<Self, InstallError> {
        let program = pio.install(&ws2812_program())?;
        let (int, frac) = ws2812_clock_divisor(system_clock);

        let (mut sm, _rx, tx) = PIOBuilder::from_installed_program(program)
            .side_set_pin_base(pin)
            .clock_divisor_fixed_point(int, frac)
            .out_shift_direction(ShiftDirection::Left)
            .autopull(true)
            .pull_threshold(24u8)
            .buffers(Buffers::OnlyTx)
            .build(sm);

        sm.set_pindirs([(pin, PinDir::Output)]);

        Ok(Self {
            tx,
            _sm: sm.start(),
        })
    }
}

impl<P: PIOExt, SM: StateMachineIndex> SmartLedsWrite for Ws2812<P, SM> {
    type Error = Infallible;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        for pixel in iterator {
            let RGB8 { r, g, b } = pixel.into();
            let word = (u32::from(r) << 24) | (u32::from(g) << 16) | (u32::from(b) << 8);

            while !self.tx.write(word) {
                cortex_m::asm::nop();
            }
        }

        Ok(())
    }
}
