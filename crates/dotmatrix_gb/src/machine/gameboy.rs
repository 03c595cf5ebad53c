use std::fmt;

use crate::cpu::{Bus, Cpu, OPCODES};
use crate::machine::{GameBoyBus, JoypadKey};
use crate::CYCLES_PER_FRAME;

/// Address where cartridge execution begins and the boot ROM hands off.
const ENTRY_POINT: u16 = 0x0100;

/// The whole machine: CPU wired to the bus.
///
/// Hosts drive it one frame at a time with `step_frame` and feed input
/// through `key_down`/`key_up` between frames.
pub struct GameBoy {
    pub cpu: Cpu,
    pub bus: GameBoyBus,
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBoy {
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new(),
            bus: GameBoyBus::new(),
        }
    }

    pub fn load_rom(&mut self, rom: Vec<u8>) {
        self.bus.load_rom(rom);
    }

    /// Install a boot ROM. Execution then starts at 0x0000 inside the
    /// overlay, which unmaps once PC reaches the cartridge entry point.
    pub fn load_boot_rom(&mut self, image: Vec<u8>) {
        self.bus.load_boot_rom(image);
    }

    /// Jump straight to the cartridge entry point with the register and
    /// IO state the boot ROM would have left behind.
    pub fn skip_boot(&mut self) {
        self.bus.disable_boot_rom();

        let regs = &mut self.cpu.regs;
        regs.set_af(0x01B0);
        regs.set_bc(0x0013);
        regs.set_de(0x00D8);
        regs.set_hl(0x014D);
        regs.sp = 0xFFFE;
        regs.pc = ENTRY_POINT;

        self.bus.write8(0xFF40, 0x91);
        self.bus.write8(0xFF47, 0xFC);
        self.bus.write8(0xFF48, 0xFF);
        self.bus.write8(0xFF49, 0xFF);
    }

    /// Execute one instruction and move the peripherals by its cost.
    ///
    /// Returns the cycle cost. A return of 0 is not by itself fatal
    /// (some conditional branches are charged 0); check `is_locked` on
    /// the CPU to tell a fault apart. Interrupts are scanned after the
    /// peripherals so a request raised this step can dispatch before
    /// the next instruction.
    pub fn step(&mut self) -> u32 {
        if self.bus.boot_enabled() && self.cpu.regs.pc >= ENTRY_POINT {
            self.bus.disable_boot_rom();
        }

        let cycles = self.cpu.step(&mut self.bus);
        if self.cpu.is_locked() {
            return 0;
        }

        self.bus.update_timers(cycles);
        self.bus.step_scanlines(cycles);
        self.cpu.service_interrupts(&mut self.bus);
        cycles
    }

    /// Run instructions until the frame's cycle budget is spent.
    ///
    /// Stops early if the CPU locks on an invalid opcode.
    pub fn step_frame(&mut self) {
        let mut elapsed = 0u32;
        while elapsed < CYCLES_PER_FRAME {
            elapsed += self.step();
            if self.cpu.is_locked() {
                break;
            }
        }
    }

    pub fn key_down(&mut self, key: JoypadKey) {
        self.bus.key_press(key);
    }

    pub fn key_up(&mut self, key: JoypadKey) {
        self.bus.key_release(key);
    }
}

/// Register dump with the mnemonic about to execute, for trace logging.
impl fmt::Display for GameBoy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let regs = &self.cpu.regs;
        let opcode = self.bus.peek8(regs.pc);
        write!(
            f,
            "AF={:04X} BC={:04X} DE={:04X} HL={:04X} SP={:04X} PC={:04X} {}",
            regs.af(),
            regs.bc(),
            regs.de(),
            regs.hl(),
            regs.sp,
            regs.pc,
            OPCODES[opcode as usize].mnemonic,
        )
    }
}
