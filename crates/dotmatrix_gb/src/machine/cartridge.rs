/// Memory bank controller family, decoded from the cartridge type byte
/// at 0x0147.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BankingMode {
    /// 32 KiB ROM mapped flat, bank writes ignored.
    #[default]
    None,
    Mbc1,
    Mbc2,
}

/// Cartridge ROM with a minimal bank controller.
///
/// Only ROM banking is modelled: writes to 0x2000-0x3FFF pick the bank
/// visible in the switchable 0x4000-0x7FFF window. Cartridge RAM and the
/// MBC1 mode/upper-bit registers are not implemented.
#[derive(Clone, Debug, Default)]
pub struct Cartridge {
    rom: Vec<u8>,
    banking: BankingMode,
    /// Byte offset added to switchable-window reads. Bank 1 (the reset
    /// state) maps the window to its natural file position, so the
    /// offset for bank `n` is `(n - 1) * 0x4000`.
    bank_offset: usize,
}

impl Cartridge {
    /// Take ownership of a ROM image and decode its banking scheme.
    pub fn new(rom: Vec<u8>) -> Self {
        let kind = rom.get(0x0147).copied().unwrap_or(0x00);
        let banking = match kind {
            0x01..=0x03 => BankingMode::Mbc1,
            0x05 | 0x06 => BankingMode::Mbc2,
            _ => BankingMode::None,
        };
        log::info!(
            "cartridge type {:#04X} ({:?}), {} bytes of ROM, RAM size byte {:#04X}",
            kind,
            banking,
            rom.len(),
            rom.get(0x0149).copied().unwrap_or(0x00)
        );
        Self {
            rom,
            banking,
            bank_offset: 0,
        }
    }

    pub fn banking(&self) -> BankingMode {
        self.banking
    }

    /// Read from the cartridge address range (0x0000-0x7FFF).
    ///
    /// The fixed bank 0 window maps straight to the file; the switchable
    /// window adds the current bank offset. Out-of-range reads return
    /// open-bus 0xFF rather than panicking on undersized images.
    pub fn rom_read(&self, addr: u16) -> u8 {
        let index = if addr < 0x4000 {
            addr as usize
        } else {
            addr as usize + self.bank_offset
        };
        self.rom.get(index).copied().unwrap_or(0xFF)
    }

    /// Handle a bank select write (0x2000-0x3FFF).
    ///
    /// MBC1 takes the low five bits of the value, MBC2 the low four. The
    /// selected bank replaces the 0x4000-0x7FFF window; selecting bank 0
    /// leaves the offset pointing below the file start, which the guarded
    /// read path turns into open-bus reads.
    pub fn select_bank(&mut self, value: u8) {
        let bank = match self.banking {
            BankingMode::None => return,
            BankingMode::Mbc1 => value & 0x1F,
            BankingMode::Mbc2 => value & 0x0F,
        };
        self.bank_offset = (bank.wrapping_sub(1) as usize).wrapping_mul(0x4000);
        log::debug!("ROM bank {} selected", bank);
    }
}
