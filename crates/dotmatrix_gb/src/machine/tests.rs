use crate::cpu::{Bus, Interrupts, IE_ADDR, IF_ADDR};

use super::*;

const IF: u16 = IF_ADDR;
const STAT: u16 = 0xFF41;
const LY: u16 = 0xFF44;

/// A flat 32 KiB image with the cartridge type byte set.
fn rom_with_type(kind: u8) -> Vec<u8> {
    let mut rom = vec![0u8; 0x8000];
    rom[0x0147] = kind;
    rom
}

fn bus_with_rom(rom: Vec<u8>) -> GameBoyBus {
    let mut bus = GameBoyBus::new();
    bus.load_rom(rom);
    bus
}

#[test]
fn rom_region_ignores_plain_writes() {
    let mut rom = rom_with_type(0x00);
    rom[0x1000] = 0x7E;
    let mut bus = bus_with_rom(rom);

    bus.write8(0x1000, 0x00);
    assert_eq!(bus.read8(0x1000), 0x7E);
    bus.write8(0x5000, 0x12);
    assert_eq!(bus.read8(0x5000), 0x00);
}

#[test]
fn bank_select_remaps_the_switchable_window() {
    let mut rom = vec![0u8; 0xC000];
    rom[0x0147] = 0x01; // MBC1
    rom[0x4000] = 0xAA; // bank 1
    rom[0x8000] = 0xBB; // bank 2
    let mut bus = bus_with_rom(rom);

    assert_eq!(bus.read8(0x4000), 0xAA, "bank 1 mapped at reset");
    bus.write8(0x2000, 0x02);
    assert_eq!(bus.read8(0x4000), 0xBB);
    assert_eq!(bus.read8(0x0000), 0x00, "fixed bank unaffected");
}

#[test]
fn bank_select_out_of_range_reads_open_bus() {
    let mut bus = bus_with_rom(rom_with_type(0x01));
    bus.write8(0x2000, 0x1F);
    assert_eq!(bus.read8(0x4000), 0xFF);
}

#[test]
fn bank_select_is_ignored_without_a_controller() {
    let mut rom = vec![0u8; 0xC000];
    rom[0x4000] = 0xAA;
    let mut bus = bus_with_rom(rom);
    bus.write8(0x2000, 0x02);
    assert_eq!(bus.read8(0x4000), 0xAA);
}

#[test]
fn boot_rom_overlays_the_cartridge_until_disabled() {
    let mut rom = rom_with_type(0x00);
    rom[0x0000] = 0x99;
    rom[0x0100] = 0x77;
    let mut bus = bus_with_rom(rom);
    bus.load_boot_rom(vec![0x42; 0x100]);

    assert_eq!(bus.read8(0x0000), 0x42);
    assert_eq!(bus.read8(0x0100), 0x77, "overlay covers only 0x00-0xFF");

    bus.disable_boot_rom();
    assert_eq!(bus.read8(0x0000), 0x99);
}

#[test]
fn boot_rom_unmaps_when_execution_reaches_the_entry_point() {
    let mut gb = GameBoy::new();
    gb.load_rom(rom_with_type(0x00));
    gb.load_boot_rom(vec![0x00; 0x100]);

    gb.step();
    assert!(gb.bus.boot_enabled(), "still running inside the overlay");

    gb.cpu.regs.pc = 0x0100;
    gb.step();
    assert!(!gb.bus.boot_enabled());
}

#[test]
fn dma_copies_160_bytes_into_oam() {
    let mut bus = GameBoyBus::new();
    for offset in 0..0xA0u16 {
        bus.write8(0xC000 + offset, offset as u8);
    }
    bus.write8(0xFF46, 0xC0);

    for offset in 0..0xA0u16 {
        assert_eq!(bus.read8(0xFE00 + offset), offset as u8);
    }
    assert_eq!(bus.read8(0xFF46), 0x00, "the DMA register itself is not stored");
}

#[test]
fn div_ticks_every_256_cycles_and_resets_on_write() {
    let mut bus = GameBoyBus::new();
    bus.update_timers(255);
    assert_eq!(bus.read8(0xFF04), 0);
    bus.update_timers(1);
    assert_eq!(bus.read8(0xFF04), 1);
    bus.update_timers(512);
    assert_eq!(bus.read8(0xFF04), 3);

    bus.write8(0xFF04, 0x55);
    assert_eq!(bus.read8(0xFF04), 0, "any write resets DIV");
    // The sub-counter resets with it.
    bus.update_timers(255);
    assert_eq!(bus.read8(0xFF04), 0);
    bus.update_timers(1);
    assert_eq!(bus.read8(0xFF04), 1);
}

#[test]
fn tima_keeps_cycle_overshoot_across_increments() {
    let mut bus = GameBoyBus::new();
    bus.write8(0xFF07, 0x05); // enabled, 16-cycle period

    bus.update_timers(20);
    assert_eq!(bus.read8(0xFF05), 1);
    // 4 cycles carried over, so 12 more complete the next period.
    bus.update_timers(12);
    assert_eq!(bus.read8(0xFF05), 2);
}

#[test]
fn tima_respects_the_tac_rate_select() {
    let mut bus = GameBoyBus::new();
    bus.write8(0xFF07, 0x06); // enabled, 64-cycle period
    bus.update_timers(63);
    assert_eq!(bus.read8(0xFF05), 0);
    bus.update_timers(1);
    assert_eq!(bus.read8(0xFF05), 1);

    // Disabled timer accumulates nothing.
    bus.write8(0xFF07, 0x02);
    bus.update_timers(1000);
    assert_eq!(bus.read8(0xFF05), 1);
}

#[test]
fn tima_overflow_reloads_tma_and_requests_the_interrupt() {
    let mut bus = GameBoyBus::new();
    bus.write8(0xFF05, 0xFF);
    bus.write8(0xFF06, 0xAB);
    bus.write8(0xFF07, 0x05);

    bus.update_timers(16);
    assert_eq!(bus.read8(0xFF05), 0xAB);
    assert_eq!(bus.read8(IF) & Interrupts::TIMER.bits(), Interrupts::TIMER.bits());
}

#[test]
fn scanlines_advance_and_raise_vblank_at_line_144() {
    let mut bus = GameBoyBus::new();
    bus.write8(0xFF40, 0x91); // LCD on

    bus.step_scanlines(456);
    assert_eq!(bus.read8(LY), 1);

    for _ in 1..144 {
        bus.step_scanlines(456);
    }
    assert_eq!(bus.read8(LY), 144);
    assert_ne!(bus.read8(IF) & Interrupts::VBLANK.bits(), 0);
}

#[test]
fn ly_wraps_to_zero_after_line_153() {
    let mut bus = GameBoyBus::new();
    bus.write8(0xFF40, 0x91);
    for _ in 0..153 {
        bus.step_scanlines(456);
    }
    assert_eq!(bus.read8(LY), 153);
    bus.step_scanlines(456);
    assert_eq!(bus.read8(LY), 0);
}

#[test]
fn disabled_lcd_parks_the_state_machine() {
    let mut bus = GameBoyBus::new();
    bus.write8(0xFF40, 0x91);
    bus.step_scanlines(456);
    assert_eq!(bus.read8(LY), 1);

    bus.write8(0xFF40, 0x00);
    bus.step_scanlines(456);
    assert_eq!(bus.read8(LY), 0, "LY resets while the LCD is off");
    assert_eq!(bus.read8(STAT) & 0x03, 0, "mode bits cleared");
}

#[test]
fn stat_mode_follows_the_scanline_countdown() {
    let mut bus = GameBoyBus::new();
    bus.write8(0xFF40, 0x91);

    // Fresh line: OAM search.
    bus.step_scanlines(0);
    assert_eq!(bus.read8(STAT) & 0x03, 2);

    // Into the transfer window (count 376 down to 204).
    bus.step_scanlines(100);
    bus.step_scanlines(0);
    assert_eq!(bus.read8(STAT) & 0x03, 3);

    // HBlank tail of the line.
    bus.step_scanlines(200);
    bus.step_scanlines(0);
    assert_eq!(bus.read8(STAT) & 0x03, 0);

    // Drive to the VBlank region.
    for _ in 0..144 {
        bus.step_scanlines(456);
    }
    bus.step_scanlines(0);
    assert_eq!(bus.read8(STAT) & 0x03, 1);
}

#[test]
fn stat_mode_interrupt_fires_on_mode_change_only() {
    let mut bus = GameBoyBus::new();
    bus.write8(0xFF40, 0x91);
    bus.write8(STAT, 1 << 5); // OAM interrupt opt-in

    bus.step_scanlines(0);
    assert_ne!(bus.read8(IF) & Interrupts::STAT.bits(), 0, "entering mode 2");

    bus.write8(IF, 0);
    bus.step_scanlines(0);
    assert_eq!(bus.read8(IF) & Interrupts::STAT.bits(), 0, "still mode 2");
}

#[test]
fn coincidence_interrupt_fires_on_the_transition_only() {
    let mut bus = GameBoyBus::new();
    bus.write8(0xFF40, 0x91);
    bus.write8(0xFF45, 0x01); // LYC = 1
    bus.write8(STAT, 1 << 6);

    bus.step_scanlines(456); // LY becomes 1
    bus.write8(IF, 0);
    bus.step_scanlines(0);
    assert_ne!(bus.read8(IF) & Interrupts::STAT.bits(), 0);
    assert_ne!(bus.read8(STAT) & 0x04, 0, "coincidence bit set");

    // Still equal: no second request.
    bus.write8(IF, 0);
    bus.step_scanlines(0);
    assert_eq!(bus.read8(IF) & Interrupts::STAT.bits(), 0);

    // Leaving equality clears the bit.
    bus.step_scanlines(456);
    bus.step_scanlines(0);
    assert_eq!(bus.read8(STAT) & 0x04, 0);
}

#[test]
fn writing_ly_resets_it() {
    let mut bus = GameBoyBus::new();
    bus.write8(0xFF40, 0x91);
    bus.step_scanlines(456);
    assert_eq!(bus.read8(LY), 1);
    bus.write8(LY, 0x90);
    assert_eq!(bus.read8(LY), 0);
}

#[test]
fn joypad_read_merges_the_selected_group() {
    let mut bus = GameBoyBus::new();
    assert_eq!(bus.read8(0xFF00) & 0x0F, 0x0F, "everything released");

    bus.key_press(JoypadKey::A);
    bus.write8(0xFF00, 0x10);
    assert_eq!(bus.read8(0xFF00), 0xEE, "A reads low in the button group");

    bus.key_press(JoypadKey::Right);
    bus.write8(0xFF00, 0x20);
    assert_eq!(bus.read8(0xFF00), 0xDE, "Right reads low in the pad group");

    bus.key_release(JoypadKey::Right);
    assert_eq!(bus.read8(0xFF00), 0xDF);
}

#[test]
fn joypad_interrupt_on_fresh_press_of_a_selected_key() {
    let mut bus = GameBoyBus::new();
    bus.write8(0xFF00, 0x10); // bit 5 low: buttons selected

    bus.key_press(JoypadKey::Start);
    assert_ne!(bus.read8(IF) & Interrupts::JOYPAD.bits(), 0);

    // Held key repeating does not request again.
    bus.write8(IF, 0);
    bus.key_press(JoypadKey::Start);
    assert_eq!(bus.read8(IF) & Interrupts::JOYPAD.bits(), 0);

    // Unselected group stays silent.
    bus.key_release(JoypadKey::Start);
    bus.write8(0xFF00, 0x30);
    bus.key_press(JoypadKey::Start);
    assert_eq!(bus.read8(IF) & Interrupts::JOYPAD.bits(), 0);
}

#[test]
fn step_dispatches_a_pending_interrupt_after_the_instruction() {
    let mut gb = GameBoy::new();
    gb.load_rom(rom_with_type(0x00));
    gb.skip_boot();
    gb.cpu.ime = true;
    gb.bus.write8(IE_ADDR, Interrupts::TIMER.bits());
    gb.bus.write8(IF_ADDR, Interrupts::TIMER.bits());

    gb.step();
    assert_eq!(gb.cpu.regs.pc, 0x0050);
    assert!(!gb.cpu.ime);
}

#[test]
fn frame_budget_runs_the_expected_instruction_count() {
    let mut gb = GameBoy::new();
    gb.load_rom(rom_with_type(0x00)); // a sea of NOPs
    gb.skip_boot();

    gb.step_frame();
    // Each NOP costs 8 cycles; the loop runs until 69 905 are spent.
    let steps = crate::CYCLES_PER_FRAME / 8 + 1;
    assert_eq!(gb.cpu.regs.pc, 0x0100 + steps as u16);
}

#[test]
fn frame_stops_when_the_cpu_locks() {
    let mut rom = rom_with_type(0x00);
    rom[0x0100] = 0xD3;
    let mut gb = GameBoy::new();
    gb.load_rom(rom);
    gb.skip_boot();

    gb.step_frame();
    assert!(gb.cpu.is_locked());
    assert_eq!(gb.cpu.regs.pc, 0x0100);
}

#[test]
fn skip_boot_lands_at_the_entry_point_with_post_boot_state() {
    let mut gb = GameBoy::new();
    gb.load_rom(rom_with_type(0x00));
    gb.skip_boot();

    assert_eq!(gb.cpu.regs.pc, 0x0100);
    assert_eq!(gb.cpu.regs.af(), 0x01B0);
    assert_eq!(gb.cpu.regs.sp, 0xFFFE);
    assert_eq!(gb.bus.read8(0xFF40), 0x91);
    assert!(!gb.bus.boot_enabled());
}

#[test]
fn display_dumps_registers_and_the_next_mnemonic() {
    let mut gb = GameBoy::new();
    gb.load_rom(rom_with_type(0x00));
    gb.skip_boot();
    let dump = gb.to_string();
    assert!(dump.contains("PC=0100"));
    assert!(dump.ends_with("NOP"));
}
