mod dma;
mod joypad;
mod ppu;
mod timer;

use crate::cpu::{Bus, Interrupts, IF_ADDR};

use super::cartridge::Cartridge;
use super::MEMORY_SIZE;

/// The Game Boy address space and everything hanging off it: cartridge,
/// boot ROM overlay, timers, the LCD status state machine and the
/// joypad.
///
/// Reads have no side effects on this machine, so the trait's `read8`
/// simply forwards to the immutable `peek8`, which debugging surfaces
/// use directly.
pub struct GameBoyBus {
    memory: Box<[u8; MEMORY_SIZE]>,
    cartridge: Cartridge,
    /// Boot ROM overlay, mapped over 0x0000-0x00FF while enabled.
    boot_rom: Vec<u8>,
    boot_enabled: bool,
    /// Cycles accumulated toward the next DIV increment (every 256).
    divider_count: u32,
    /// Cycles accumulated toward the next TIMA increment. Overshoot is
    /// retained across increments so no cycles are lost.
    timer_count: u32,
    /// Cycles remaining in the current scanline, counting down from 456.
    scanline_count: i32,
    /// One bit per key, 1 = released. Low nibble is the directional pad,
    /// high nibble the buttons.
    joypad_state: u8,
}

impl Default for GameBoyBus {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBoyBus {
    pub fn new() -> Self {
        Self {
            memory: Box::new([0u8; MEMORY_SIZE]),
            cartridge: Cartridge::default(),
            boot_rom: Vec::new(),
            boot_enabled: false,
            divider_count: 0,
            timer_count: 0,
            scanline_count: 456,
            joypad_state: 0xFF,
        }
    }

    pub fn load_rom(&mut self, rom: Vec<u8>) {
        self.cartridge = Cartridge::new(rom);
    }

    /// Install a boot ROM and map it over the low 256 bytes.
    pub fn load_boot_rom(&mut self, image: Vec<u8>) {
        self.boot_rom = image;
        self.boot_enabled = true;
    }

    pub fn boot_enabled(&self) -> bool {
        self.boot_enabled
    }

    /// Unmap the boot ROM overlay, exposing the cartridge underneath.
    pub fn disable_boot_rom(&mut self) {
        if self.boot_enabled {
            log::debug!("boot ROM unmapped");
            self.boot_enabled = false;
        }
    }

    pub fn cartridge(&self) -> &Cartridge {
        &self.cartridge
    }

    /// Side-effect-free read, also the implementation behind `read8`.
    ///
    /// Precedence: boot ROM overlay while enabled, then cartridge ROM,
    /// then the joypad register, then flat memory.
    pub fn peek8(&self, addr: u16) -> u8 {
        if self.boot_enabled && (addr as usize) < self.boot_rom.len() && addr < 0x0100 {
            self.boot_rom[addr as usize]
        } else if addr < 0x8000 {
            self.cartridge.rom_read(addr)
        } else if addr == 0xFF00 {
            self.read_joyp()
        } else {
            self.memory[addr as usize]
        }
    }

    /// Raise an interrupt request bit in IF.
    pub fn request_interrupt(&mut self, interrupt: Interrupts) {
        let requested = self.read8(IF_ADDR);
        self.write8(IF_ADDR, requested | interrupt.bits());
    }
}

impl Bus for GameBoyBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.peek8(addr)
    }

    /// Address-decoded write.
    ///
    /// The cartridge range never stores into memory: 0x2000-0x3FFF is
    /// the bank select register, the rest of it is ignored. DIV and LY
    /// reset to zero on any write, and a write to 0xFF46 starts an OAM
    /// DMA transfer without storing the value.
    fn write8(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x1FFF => {}
            0x2000..=0x3FFF => self.cartridge.select_bank(value),
            0x4000..=0x7FFF => {}
            0xFF04 => {
                self.memory[0xFF04] = 0;
                self.divider_count = 0;
            }
            0xFF44 => self.memory[0xFF44] = 0,
            0xFF46 => self.dma_transfer(value),
            _ => self.memory[addr as usize] = value,
        }
    }
}
