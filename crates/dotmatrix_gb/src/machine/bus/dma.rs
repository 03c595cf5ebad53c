use crate::cpu::Bus;

use super::GameBoyBus;

/// OAM sprite attribute table.
const OAM_BASE: u16 = 0xFE00;
/// 40 sprites, 4 bytes each.
const OAM_LEN: u16 = 0xA0;

impl GameBoyBus {
    /// OAM DMA, triggered by a write to 0xFF46.
    ///
    /// Copies 160 bytes from `value << 8` into OAM through the normal
    /// read and write paths, so a transfer sourced from cartridge ROM
    /// honors the current bank mapping. The transfer is instantaneous
    /// and the written value itself is not stored.
    pub(super) fn dma_transfer(&mut self, value: u8) {
        let source = (value as u16) << 8;
        for offset in 0..OAM_LEN {
            let byte = self.read8(source + offset);
            self.write8(OAM_BASE + offset, byte);
        }
    }
}
