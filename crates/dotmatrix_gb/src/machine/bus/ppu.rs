//! LCD status and scanline progression.
//!
//! Rendering itself is out of scope; what games observe from the CPU is
//! the STAT mode state machine, the LY counter and the interrupts they
//! raise, so only those are modelled. Mode timing is derived from the
//! per-scanline cycle countdown: a line starts in mode 2 (OAM search),
//! moves to mode 3 (transfer) and finishes in mode 0 (HBlank), with
//! lines 144-153 spent in mode 1 (VBlank).

use bitflags::bitflags;

use crate::cpu::{Bus, Interrupts};

use super::GameBoyBus;

const LCDC_ADDR: u16 = 0xFF40;
const STAT_ADDR: u16 = 0xFF41;
const LY_ADDR: usize = 0xFF44;
const LYC_ADDR: u16 = 0xFF45;

/// Cycles per scanline.
const SCANLINE_CYCLES: i32 = 456;
/// First scanline of the VBlank period.
const VBLANK_LINE: u8 = 144;
/// Last scanline before LY wraps to zero.
const LAST_LINE: u8 = 153;

bitflags! {
    /// LCD control register (0xFF40).
    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    pub struct Lcdc: u8 {
        const BG_ENABLE       = 1 << 0;
        const OBJ_ENABLE      = 1 << 1;
        const OBJ_SIZE        = 1 << 2;
        const BG_TILE_MAP     = 1 << 3;
        const TILE_DATA       = 1 << 4;
        const WINDOW_ENABLE   = 1 << 5;
        const WINDOW_TILE_MAP = 1 << 6;
        const LCD_ENABLE      = 1 << 7;
    }
}

bitflags! {
    /// LCD status register (0xFF41). Bits 1:0 hold the mode number and
    /// are handled outside the flag set.
    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    pub struct Stat: u8 {
        const COINCIDENCE     = 1 << 2;
        const HBLANK_IRQ      = 1 << 3;
        const VBLANK_IRQ      = 1 << 4;
        const OAM_IRQ         = 1 << 5;
        const COINCIDENCE_IRQ = 1 << 6;
    }
}

impl GameBoyBus {
    fn lcd_enabled(&self) -> bool {
        Lcdc::from_bits_retain(self.peek8(LCDC_ADDR)).contains(Lcdc::LCD_ENABLE)
    }

    /// Recompute the STAT mode bits and raise the STAT interrupts the
    /// program has opted into.
    ///
    /// A disabled LCD parks the state machine: the scanline countdown
    /// and LY reset and the mode bits read back as zero. Otherwise the
    /// mode follows the countdown thresholds, a mode interrupt fires
    /// only when the mode actually changes, and the coincidence
    /// interrupt fires only on the transition to LY == LYC. The stored
    /// coincidence bit doubles as the previous comparison result.
    fn set_lcd_status(&mut self) {
        let mut stat = self.read8(STAT_ADDR);

        if !self.lcd_enabled() {
            self.scanline_count = SCANLINE_CYCLES;
            self.memory[LY_ADDR] = 0;
            self.write8(STAT_ADDR, stat & !0x03);
            return;
        }

        let line = self.memory[LY_ADDR];
        let previous_mode = stat & 0x03;

        let (mode, irq_enable) = if line >= VBLANK_LINE {
            (1, Some(Stat::VBLANK_IRQ))
        } else if self.scanline_count >= 376 {
            (2, Some(Stat::OAM_IRQ))
        } else if self.scanline_count >= 204 {
            (3, None)
        } else {
            (0, Some(Stat::HBLANK_IRQ))
        };
        stat = (stat & !0x03) | mode;

        let flags = Stat::from_bits_retain(stat);
        if mode != previous_mode {
            if let Some(enable) = irq_enable {
                if flags.contains(enable) {
                    self.request_interrupt(Interrupts::STAT);
                }
            }
        }

        if line == self.read8(LYC_ADDR) {
            if !flags.contains(Stat::COINCIDENCE) {
                stat |= Stat::COINCIDENCE.bits();
                if flags.contains(Stat::COINCIDENCE_IRQ) {
                    self.request_interrupt(Interrupts::STAT);
                }
            }
        } else {
            stat &= !Stat::COINCIDENCE.bits();
        }

        self.write8(STAT_ADDR, stat);
    }

    /// Advance the scanline countdown by one instruction's cycle cost.
    ///
    /// Status is refreshed before the countdown moves so the mode bits
    /// reflect the line the cycles are spent on. LY increments bypass
    /// the write path (a bus write to LY resets it). Reaching line 144
    /// raises the VBlank interrupt; past line 153 LY wraps to zero.
    pub fn step_scanlines(&mut self, cycles: u32) {
        self.set_lcd_status();

        if !self.lcd_enabled() {
            return;
        }

        self.scanline_count -= cycles as i32;
        if self.scanline_count > 0 {
            return;
        }
        self.scanline_count = SCANLINE_CYCLES;

        self.memory[LY_ADDR] = self.memory[LY_ADDR].wrapping_add(1);
        let line = self.memory[LY_ADDR];
        if line == VBLANK_LINE {
            self.request_interrupt(Interrupts::VBLANK);
        } else if line > LAST_LINE {
            self.memory[LY_ADDR] = 0;
        }
    }
}
