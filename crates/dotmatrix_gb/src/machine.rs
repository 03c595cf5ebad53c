//! The assembled machine: CPU plus bus, cartridge and peripherals.

mod bus;
mod cartridge;
mod gameboy;

#[cfg(test)]
mod tests;

pub use bus::GameBoyBus;
pub use cartridge::{BankingMode, Cartridge};
pub use gameboy::GameBoy;

/// Full 64 KiB address space.
pub(crate) const MEMORY_SIZE: usize = 0x1_0000;

/// Host-facing joypad keys.
///
/// The discriminant is the key's bit in the internal joypad state: the
/// low nibble holds the directional pad, the high nibble the buttons.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum JoypadKey {
    Right = 0,
    Left = 1,
    Up = 2,
    Down = 3,
    A = 4,
    B = 5,
    Select = 6,
    Start = 7,
}
