use crate::cpu::{Bus, Interrupts};

use super::GameBoyBus;

/// Divider register, incremented every 256 cycles.
const DIV_ADDR: usize = 0xFF04;
/// Timer counter.
const TIMA_ADDR: u16 = 0xFF05;
/// Timer modulo, reloaded into TIMA on overflow.
const TMA_ADDR: u16 = 0xFF06;
/// Timer control: bit 2 enables, bits 1:0 pick the rate.
const TAC_ADDR: u16 = 0xFF07;

/// Cycles per TIMA increment, indexed by TAC bits 1:0.
const TIMA_PERIODS: [u32; 4] = [1024, 16, 64, 256];

impl GameBoyBus {
    /// Advance DIV and TIMA by one instruction's cycle cost.
    ///
    /// Both counters retain their overshoot when a threshold is crossed,
    /// so a long instruction never loses cycles. DIV increments bypass
    /// the write path, which would otherwise reset the register to zero.
    pub fn update_timers(&mut self, cycles: u32) {
        self.divider_count += cycles;
        while self.divider_count >= 256 {
            self.divider_count -= 256;
            self.memory[DIV_ADDR] = self.memory[DIV_ADDR].wrapping_add(1);
        }

        let control = self.read8(TAC_ADDR);
        if control & 0x04 == 0 {
            return;
        }

        let period = TIMA_PERIODS[(control & 0x03) as usize];
        self.timer_count += cycles;
        while self.timer_count >= period {
            self.timer_count -= period;
            self.tick_tima();
        }
    }

    /// One TIMA increment. Wrapping past 0xFF reloads TMA and raises
    /// the timer interrupt.
    fn tick_tima(&mut self) {
        let tima = self.read8(TIMA_ADDR).wrapping_add(1);
        if tima == 0 {
            let modulo = self.read8(TMA_ADDR);
            self.write8(TIMA_ADDR, modulo);
            self.request_interrupt(Interrupts::TIMER);
        } else {
            self.write8(TIMA_ADDR, tima);
        }
    }
}
