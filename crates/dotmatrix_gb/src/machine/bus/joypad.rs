use crate::cpu::Interrupts;
use crate::machine::JoypadKey;

use super::GameBoyBus;

/// Joypad register.
const JOYP_ADDR: usize = 0xFF00;

impl GameBoyBus {
    /// Compose the value read back from 0xFF00.
    ///
    /// The stored register holds the select lines the program wrote;
    /// everything is active low. The stored byte is inverted, the
    /// selected half of the key state is merged in, and the result
    /// returned with unselected key bits reading as released.
    pub(super) fn read_joyp(&self) -> u8 {
        let mut result = self.memory[JOYP_ADDR] ^ 0xFF;
        if result & (1 << 4) == 0 {
            // Button group selected: A, B, Select, Start.
            result &= (self.joypad_state >> 4) | 0xF0;
        } else if result & (1 << 5) == 0 {
            // Directional pad selected.
            result &= (self.joypad_state & 0x0F) | 0xF0;
        }
        result
    }

    /// Record a key press.
    ///
    /// A joypad interrupt fires only on the released-to-pressed edge,
    /// and only when the program currently has that key's group
    /// selected through the register.
    pub fn key_press(&mut self, key: JoypadKey) {
        let bit = key as u8;
        let was_pressed = self.joypad_state & (1 << bit) == 0;
        self.joypad_state &= !(1 << bit);

        let is_button = bit > 3;
        let select = self.memory[JOYP_ADDR];
        let group_selected = if is_button {
            select & (1 << 5) == 0
        } else {
            select & (1 << 4) == 0
        };

        if group_selected && !was_pressed {
            self.request_interrupt(Interrupts::JOYPAD);
        }
    }

    /// Record a key release. Never raises an interrupt.
    pub fn key_release(&mut self, key: JoypadKey) {
        self.joypad_state |= 1 << key as u8;
    }
}
