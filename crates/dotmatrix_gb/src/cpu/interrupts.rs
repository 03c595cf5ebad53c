use bitflags::bitflags;

use super::{Bus, Cpu};

/// Interrupt request register (IF).
pub(crate) const IF_ADDR: u16 = 0xFF0F;
/// Interrupt enable register (IE).
pub(crate) const IE_ADDR: u16 = 0xFFFF;

bitflags! {
    /// Bit layout shared by the interrupt request (0xFF0F) and enable
    /// (0xFFFF) registers. Ascending bit position is descending priority.
    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    pub struct Interrupts: u8 {
        const VBLANK = 1 << 0;
        const STAT   = 1 << 1;
        const TIMER  = 1 << 2;
        const SERIAL = 1 << 3;
        const JOYPAD = 1 << 4;
    }
}

/// Whether any interrupt is both requested and enabled, regardless of the
/// master enable flag. Used to wake a halted CPU.
pub(super) fn pending(bus: &mut dyn Bus) -> bool {
    bus.read8(IF_ADDR) & bus.read8(IE_ADDR) & 0x1F != 0
}

impl Cpu {
    /// Scan for a pending interrupt and dispatch the highest-priority one.
    ///
    /// Gated on the master enable flag. Bits are scanned in ascending
    /// order and only the first interrupt that is both requested and
    /// enabled is serviced: its request bit is cleared, the master flag
    /// dropped, PC pushed, and control transferred to the fixed vector
    /// 0x40 + 8 * index. Any other pending bits wait for a later scan
    /// once EI/RETI restores the master flag.
    pub fn service_interrupts(&mut self, bus: &mut dyn Bus) {
        if !self.ime {
            return;
        }

        let requested = bus.read8(IF_ADDR);
        let enabled = bus.read8(IE_ADDR);
        let pending = requested & enabled & 0x1F;
        if pending == 0 {
            return;
        }

        let index = pending.trailing_zeros() as u8;
        bus.write8(IF_ADDR, requested & !(1 << index));
        self.ime = false;
        self.halted = false;

        let pc = self.regs.pc;
        self.push16(bus, pc);
        self.regs.pc = 0x0040 + 8 * index as u16;
    }
}
