pub mod cpu;
pub mod machine;

pub use cpu::{Bus, Cpu};
pub use machine::{GameBoy, JoypadKey};

/// Logical screen width in pixels for the Game Boy DMG.
pub const SCREEN_WIDTH: usize = 160;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 144;

/// Per-frame cycle budget, compared against the scaled cycle counter.
///
/// The driver loop steps the machine until this many cycles have been
/// consumed and then yields to the host, which is the only point where
/// input and presentation are allowed to touch the machine.
pub const CYCLES_PER_FRAME: u32 = 69_905;
