mod alu;
mod cb;
mod exec;
mod interrupts;
mod regs;
mod table;

#[cfg(test)]
mod tests;

pub use cb::CB_OPCODES;
pub use interrupts::Interrupts;
pub use regs::{Flag, Registers};
pub use table::{Handler, Instr, CYCLES, OPCODES};

pub(crate) use interrupts::{IE_ADDR, IF_ADDR};

/// Abstraction over the Game Boy bus (memory and IO).
///
/// The CPU only ever needs byte reads and writes; all address decoding and
/// register side effects live behind this trait.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);
}

/// Game Boy CPU core.
///
/// Holds the register file, the master interrupt enable flag and the
/// operand latches filled by the fetch stage. Instruction semantics live
/// in the dispatch tables (`table`/`cb`) and the handler modules under
/// `exec`.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    /// Master interrupt enable. Set by EI/RETI, cleared by DI and on
    /// interrupt dispatch.
    pub ime: bool,
    /// HALT low-power state. Cleared when an enabled interrupt becomes
    /// pending.
    pub halted: bool,
    /// Set after decoding an opcode with no handler. A locked CPU refuses
    /// to step until reset.
    locked: bool,
    /// Opcode latched by the fetch stage, consulted by family handlers
    /// that decode a register or condition index from it.
    opcode: u8,
    /// 8-bit operand for length-2 instructions (also the CB sub-opcode).
    operand8: u8,
    /// 16-bit little-endian operand for length-3 instructions.
    operand16: u16,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Create a CPU in its power-on state: registers zeroed and PC at
    /// 0x0000, where boot ROM execution begins.
    pub fn new() -> Self {
        Self {
            regs: Registers::default(),
            ime: false,
            halted: false,
            locked: false,
            opcode: 0,
            operand8: 0,
            operand16: 0,
        }
    }

    /// Reset the CPU to its power-on state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Whether the CPU has decoded an invalid opcode and stopped.
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        (self.regs.f & (1 << flag as u8)) != 0
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        if value {
            self.regs.f |= 1 << flag as u8;
        } else {
            self.regs.f &= !(1 << flag as u8);
        }
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.regs.f = 0;
    }

    /// Read an 8-bit register or (HL) by table index.
    ///
    /// The encoding matches the standard Game Boy opcode layout:
    /// 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A.
    #[inline]
    fn read_reg8(&mut self, bus: &mut dyn Bus, index: u8) -> u8 {
        match index & 0x07 {
            0 => self.regs.b,
            1 => self.regs.c,
            2 => self.regs.d,
            3 => self.regs.e,
            4 => self.regs.h,
            5 => self.regs.l,
            6 => bus.read8(self.regs.hl()),
            _ => self.regs.a,
        }
    }

    /// Write an 8-bit register or (HL) by table index. Encoding matches
    /// `read_reg8`.
    #[inline]
    fn write_reg8(&mut self, bus: &mut dyn Bus, index: u8, value: u8) {
        match index & 0x07 {
            0 => self.regs.b = value,
            1 => self.regs.c = value,
            2 => self.regs.d = value,
            3 => self.regs.e = value,
            4 => self.regs.h = value,
            5 => self.regs.l = value,
            6 => bus.write8(self.regs.hl(), value),
            _ => self.regs.a = value,
        }
    }

    /// Branch condition by table index: 0=NZ, 1=Z, 2=NC, 3=C.
    #[inline]
    fn condition(&self, index: u8) -> bool {
        match index & 0x03 {
            0 => !self.get_flag(Flag::Z),
            1 => self.get_flag(Flag::Z),
            2 => !self.get_flag(Flag::C),
            _ => self.get_flag(Flag::C),
        }
    }

    #[inline]
    fn push16(&mut self, bus: &mut dyn Bus, value: u16) {
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, (value >> 8) as u8);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, value as u8);
    }

    #[inline]
    fn pop16(&mut self, bus: &mut dyn Bus) -> u16 {
        let lo = bus.read8(self.regs.sp) as u16;
        let hi = bus.read8(self.regs.sp.wrapping_add(1)) as u16;
        self.regs.sp = self.regs.sp.wrapping_add(2);
        (hi << 8) | lo
    }

    /// Execute one instruction and return the scaled cycle cost.
    ///
    /// The sequence is strict: fetch the opcode, fetch operands per the
    /// table length, advance PC past the whole instruction, then run the
    /// handler. Relative jumps rely on seeing the already-advanced PC.
    /// The cost is always `2 * CYCLES[opcode]`, charged from the primary
    /// table even for CB-prefixed instructions; a handful of conditional
    /// branches are charged 0.
    ///
    /// Also returns 0 when the CPU is locked on an invalid opcode.
    /// Callers use `is_locked` to tell the fault apart from a 0-cost
    /// instruction and stop driving the machine.
    pub fn step(&mut self, bus: &mut dyn Bus) -> u32 {
        if self.locked {
            return 0;
        }

        if self.halted {
            if interrupts::pending(bus) {
                self.halted = false;
            } else {
                // Idle at NOP cost so timers and the LCD keep moving.
                return 2 * CYCLES[0x00] as u32;
            }
        }

        let pc = self.regs.pc;
        let opcode = bus.read8(pc);
        let instr = &OPCODES[opcode as usize];

        let Some(handler) = instr.handler else {
            log::error!(
                "invalid opcode {:#04X} at {:#06X}; locking CPU",
                opcode,
                pc
            );
            self.locked = true;
            return 0;
        };

        self.opcode = opcode;
        match instr.length {
            // Lengths 0 and 1 both mean "no operand fetch".
            0 | 1 => {
                self.regs.pc = pc.wrapping_add(1);
                handler(self, bus);
            }
            2 => {
                self.operand8 = bus.read8(pc.wrapping_add(1));
                self.regs.pc = pc.wrapping_add(2);
                if opcode == 0xCB {
                    // Every CB sub-opcode is assigned; a hole here is a
                    // table defect, treated like any other decode fault.
                    let Some(sub_handler) = CB_OPCODES[self.operand8 as usize].handler else {
                        log::error!(
                            "invalid CB opcode {:#04X} at {:#06X}; locking CPU",
                            self.operand8,
                            pc
                        );
                        self.locked = true;
                        return 0;
                    };
                    sub_handler(self, bus);
                } else {
                    handler(self, bus);
                }
            }
            3 => {
                let lo = bus.read8(pc.wrapping_add(1)) as u16;
                let hi = bus.read8(pc.wrapping_add(2)) as u16;
                self.operand16 = (hi << 8) | lo;
                self.regs.pc = pc.wrapping_add(3);
                handler(self, bus);
            }
            _ => unreachable!("instruction lengths are 0-3"),
        }

        2 * CYCLES[opcode as usize] as u32
    }
}
