use super::*;

/// Flat 64 KiB memory with none of the machine's register side effects.
struct TestBus {
    mem: Vec<u8>,
}

impl TestBus {
    fn new() -> Self {
        Self {
            mem: vec![0; 0x1_0000],
        }
    }

    /// Bus with `code` placed at 0x0000, where a fresh CPU starts.
    fn with_code(code: &[u8]) -> Self {
        let mut bus = Self::new();
        bus.mem[..code.len()].copy_from_slice(code);
        bus
    }
}

impl Bus for TestBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.mem[addr as usize]
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.mem[addr as usize] = value;
    }
}

fn run_one(code: &[u8]) -> (Cpu, TestBus, u32) {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_code(code);
    let cycles = cpu.step(&mut bus);
    (cpu, bus, cycles)
}

#[test]
fn pair_accessors_are_big_endian_register_order() {
    let mut regs = Registers::default();
    regs.set_bc(0x1234);
    assert_eq!(regs.b, 0x12);
    assert_eq!(regs.c, 0x34);
    regs.h = 0xC0;
    regs.l = 0x01;
    assert_eq!(regs.hl(), 0xC001);
}

#[test]
fn f_low_nibble_reads_zero() {
    let mut regs = Registers::default();
    regs.set_af(0xABCD);
    assert_eq!(regs.af(), 0xABC0);
    assert_eq!(regs.f, 0xC0);
}

#[test]
fn add_flag_law_holds_exhaustively() {
    let mut cpu = Cpu::new();
    for a in 0..=255u8 {
        for value in [0x00, 0x01, 0x0F, 0x10, 0x7F, 0x80, 0xFF] {
            cpu.regs.a = a;
            cpu.regs.f = 0;
            cpu.alu_add(value);

            let sum = a.wrapping_add(value);
            assert_eq!(cpu.regs.a, sum);
            assert_eq!(cpu.get_flag(Flag::Z), sum == 0);
            assert!(!cpu.get_flag(Flag::N));
            assert_eq!(cpu.get_flag(Flag::H), (a & 0x0F) + (value & 0x0F) > 0x0F);
            assert_eq!(cpu.get_flag(Flag::C), (a as u16) + (value as u16) > 0xFF);
        }
    }
}

#[test]
fn subtract_carry_is_a_plain_unsigned_compare() {
    let mut cpu = Cpu::new();

    cpu.regs.a = 0x10;
    cpu.alu_sub(0x20);
    assert_eq!(cpu.regs.a, 0xF0);
    assert!(cpu.get_flag(Flag::C));
    assert!(cpu.get_flag(Flag::N));

    // Equal operands: no carry, result zero.
    cpu.regs.a = 0x42;
    cpu.alu_sub(0x42);
    assert!(cpu.get_flag(Flag::Z));
    assert!(!cpu.get_flag(Flag::C));

    // Half carry tracks the low nibbles only.
    cpu.regs.a = 0x20;
    cpu.alu_sub(0x01);
    assert!(cpu.get_flag(Flag::H));
    assert!(!cpu.get_flag(Flag::C));
}

#[test]
fn cp_sets_flags_without_touching_a() {
    let mut cpu = Cpu::new();
    cpu.regs.a = 0x3C;
    cpu.alu_cp(0x40);
    assert_eq!(cpu.regs.a, 0x3C);
    assert!(cpu.get_flag(Flag::C));
    assert!(!cpu.get_flag(Flag::Z));
}

#[test]
fn inc_wraps_and_preserves_carry() {
    // SCF; INC A with A preloaded via LD A,d8.
    let (mut cpu, mut bus, _) = run_one(&[0x3E, 0xFF, 0x37, 0x3C]);
    cpu.step(&mut bus); // SCF
    cpu.step(&mut bus); // INC A
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::H));
    assert!(!cpu.get_flag(Flag::N));
    assert!(cpu.get_flag(Flag::C), "INC must leave carry alone");
}

#[test]
fn dec_half_carry_on_nibble_underflow() {
    let mut cpu = Cpu::new();
    assert_eq!(cpu.alu_dec8(0x10), 0x0F);
    assert!(cpu.get_flag(Flag::H));
    assert_eq!(cpu.alu_dec8(0x01), 0x00);
    assert!(cpu.get_flag(Flag::Z));
}

#[test]
fn add16_half_carry_comes_from_the_low_byte() {
    let mut cpu = Cpu::new();
    cpu.set_flag(Flag::Z, true);
    let result = cpu.alu_add16(0x00FF, 0x0001);
    assert_eq!(result, 0x0100);
    assert!(cpu.get_flag(Flag::H), "low-byte overflow sets H");
    assert!(!cpu.get_flag(Flag::C));
    assert!(cpu.get_flag(Flag::Z), "16-bit add leaves Z alone");

    let result = cpu.alu_add16(0xFFFF, 0x0001);
    assert_eq!(result, 0x0000);
    assert!(cpu.get_flag(Flag::C));
}

#[test]
fn rlca_clears_z_but_cb_rlc_reports_it() {
    // RLCA with A = 0.
    let (cpu, _, _) = run_one(&[0x07]);
    assert!(!cpu.get_flag(Flag::Z));

    // CB RLC A with A = 0.
    let (cpu, _, _) = run_one(&[0xCB, 0x07]);
    assert!(cpu.get_flag(Flag::Z));
}

#[test]
fn swap_exchanges_nibbles_through_the_cb_table() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_code(&[0xCB, 0x37]); // SWAP A
    cpu.regs.a = 0xF1;
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x1F);
    assert!(!cpu.get_flag(Flag::Z));
    assert_eq!(cpu.regs.pc, 2);
}

#[test]
fn cb_bit_res_set_on_hl_indirect() {
    let mut cpu = Cpu::new();
    // BIT 7,(HL); SET 0,(HL); RES 7,(HL)
    let mut bus = TestBus::with_code(&[0xCB, 0x7E, 0xCB, 0xC6, 0xCB, 0xBE]);
    cpu.regs.set_hl(0xC000);
    bus.mem[0xC000] = 0x80;

    cpu.step(&mut bus);
    assert!(!cpu.get_flag(Flag::Z), "bit 7 is set");
    assert!(cpu.get_flag(Flag::H));

    cpu.step(&mut bus);
    assert_eq!(bus.mem[0xC000], 0x81);

    cpu.step(&mut bus);
    assert_eq!(bus.mem[0xC000], 0x01);
}

#[test]
fn nop_costs_doubled_table_cycles() {
    let (cpu, _, cycles) = run_one(&[0x00]);
    assert_eq!(cpu.regs.pc, 1);
    assert_eq!(cycles, 8);
}

#[test]
fn cb_instructions_are_charged_from_the_prefix_entry() {
    let (_, _, cycles) = run_one(&[0xCB, 0x06]); // RLC (HL)
    assert_eq!(cycles, 2 * CYCLES[0xCB] as u32);
}

#[test]
fn jr_backwards_lands_relative_to_the_next_instruction() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::new();
    bus.mem[0x0010] = 0x18; // JR -2
    bus.mem[0x0011] = 0xFE;
    cpu.regs.pc = 0x0010;
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0010);
}

#[test]
fn conditional_jr_only_taken_when_condition_holds() {
    // JR NZ,+2 with Z set falls through.
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_code(&[0x20, 0x02]);
    cpu.set_flag(Flag::Z, true);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0002);

    // Same code with Z clear takes the branch.
    let (cpu, _, _) = run_one(&[0x20, 0x02]);
    assert_eq!(cpu.regs.pc, 0x0004);
}

#[test]
fn call_and_ret_roundtrip() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::new();
    bus.mem[0x0000] = 0xCD; // CALL 0x1234
    bus.mem[0x0001] = 0x34;
    bus.mem[0x0002] = 0x12;
    bus.mem[0x1234] = 0xC9; // RET
    cpu.regs.sp = 0xFFFE;

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x1234);
    assert_eq!(cpu.regs.sp, 0xFFFC);
    // Return address is the instruction after the CALL, little-endian.
    assert_eq!(bus.mem[0xFFFC], 0x03);
    assert_eq!(bus.mem[0xFFFD], 0x00);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0003);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn rst_jumps_to_the_vector_encoded_in_the_opcode() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_code(&[0xEF]); // RST 28H
    cpu.regs.sp = 0xFFFE;
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0028);
}

#[test]
fn push_pop_roundtrip_masks_f() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_code(&[0xC5, 0xF1]); // PUSH BC; POP AF
    cpu.regs.sp = 0xFFFE;
    cpu.regs.set_bc(0x12FF);
    cpu.step(&mut bus);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x12);
    assert_eq!(cpu.regs.f, 0xF0, "POP AF drops the low nibble");
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn ldh_uses_the_high_page() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_code(&[0xE0, 0x80, 0xF0, 0x80]);
    cpu.regs.a = 0x5A;
    cpu.step(&mut bus);
    assert_eq!(bus.mem[0xFF80], 0x5A);
    cpu.regs.a = 0;
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x5A);
}

#[test]
fn hl_post_increment_and_decrement_loads() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_code(&[0x2A, 0x3A]);
    cpu.regs.set_hl(0xC000);
    bus.mem[0xC000] = 0x11;
    bus.mem[0xC001] = 0x22;

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x11);
    assert_eq!(cpu.regs.hl(), 0xC001);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x22);
    assert_eq!(cpu.regs.hl(), 0xC000);
}

#[test]
fn invalid_opcode_locks_the_cpu() {
    let (mut cpu, mut bus, cycles) = run_one(&[0xD3]);
    assert_eq!(cycles, 0);
    assert!(cpu.is_locked());
    let pc = cpu.regs.pc;
    assert_eq!(pc, 0, "PC does not advance past a fault");
    assert_eq!(cpu.step(&mut bus), 0, "a locked CPU refuses to step");
    assert_eq!(cpu.regs.pc, pc);
}

#[test]
fn primary_table_has_exactly_the_known_holes() {
    let holes = [
        0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
    ];
    for (index, instr) in OPCODES.iter().enumerate() {
        if holes.contains(&index) {
            assert!(instr.handler.is_none(), "{index:#04X} should be invalid");
            assert_eq!(instr.length, 0);
        } else {
            assert!(instr.handler.is_some(), "{index:#04X} lost its handler");
            assert!((1..=3).contains(&instr.length), "{index:#04X} length");
        }
    }
}

#[test]
fn cb_table_is_fully_populated() {
    for (index, instr) in CB_OPCODES.iter().enumerate() {
        assert!(instr.handler.is_some(), "CB {index:#04X}");
        assert_eq!(instr.length, 2);
    }
}

#[test]
fn interrupt_dispatch_takes_the_lowest_pending_bit_only() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::new();
    cpu.regs.sp = 0xFFFE;
    cpu.regs.pc = 0x1234;
    cpu.ime = true;
    bus.write8(IE_ADDR, 0x05);
    bus.write8(IF_ADDR, 0x05); // VBlank and timer both pending

    cpu.service_interrupts(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0040);
    assert_eq!(bus.mem[IF_ADDR as usize], 0x04, "timer bit still pending");
    assert!(!cpu.ime);
    // Pushed return address.
    assert_eq!(bus.mem[0xFFFC], 0x34);
    assert_eq!(bus.mem[0xFFFD], 0x12);

    // Nothing more happens until the master flag returns.
    cpu.service_interrupts(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0040);

    cpu.ime = true;
    cpu.service_interrupts(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0050, "timer vector on the next scan");
}

#[test]
fn serial_interrupt_uses_vector_0x58() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::new();
    cpu.regs.sp = 0xFFFE;
    cpu.ime = true;
    bus.write8(IE_ADDR, Interrupts::SERIAL.bits());
    bus.write8(IF_ADDR, Interrupts::SERIAL.bits());
    cpu.service_interrupts(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0058);
}

#[test]
fn halt_idles_until_an_enabled_interrupt_is_pending() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_code(&[0x76, 0x00]);
    cpu.step(&mut bus); // HALT
    assert!(cpu.halted);

    let pc = cpu.regs.pc;
    assert_eq!(cpu.step(&mut bus), 8, "halted CPU idles at NOP cost");
    assert_eq!(cpu.regs.pc, pc);

    // Pending request wakes it even with IME off.
    bus.write8(IE_ADDR, 0x01);
    bus.write8(IF_ADDR, 0x01);
    cpu.step(&mut bus);
    assert!(!cpu.halted);
    assert_eq!(cpu.regs.pc, pc + 1, "execution resumed after the HALT");
}

#[test]
fn ei_takes_effect_immediately() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_code(&[0xFB]);
    cpu.regs.sp = 0xFFFE;
    bus.write8(IE_ADDR, 0x01);
    bus.write8(IF_ADDR, 0x01);

    cpu.step(&mut bus); // EI
    assert!(cpu.ime);
    cpu.service_interrupts(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0040);
}

#[test]
fn reti_restores_the_master_flag() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::new();
    bus.mem[0x0040] = 0xD9; // RETI
    cpu.regs.pc = 0x0040;
    cpu.regs.sp = 0xFFFC;
    bus.mem[0xFFFC] = 0x00;
    bus.mem[0xFFFD] = 0xC0;
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0xC000);
    assert!(cpu.ime);
}

#[test]
fn daa_adjusts_bcd_addition() {
    let mut cpu = Cpu::new();
    // 0x15 + 0x27 = 0x3C, adjusted to BCD 42.
    cpu.regs.a = 0x15;
    cpu.alu_add(0x27);
    cpu.alu_daa();
    assert_eq!(cpu.regs.a, 0x42);
    assert!(!cpu.get_flag(Flag::C));

    // 0x90 + 0x90 = 0x120, carry out, BCD 80.
    cpu.regs.a = 0x90;
    cpu.alu_add(0x90);
    cpu.alu_daa();
    assert_eq!(cpu.regs.a, 0x80);
    assert!(cpu.get_flag(Flag::C));
}

#[test]
fn ld_hl_sp_r8_zero_extends_the_operand() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_code(&[0xF8, 0xFF]);
    cpu.regs.sp = 0x0100;
    cpu.set_flag(Flag::Z, true);
    cpu.step(&mut bus);
    // 0xFF is added as 0x00FF, never as -1.
    assert_eq!(cpu.regs.hl(), 0x01FF);
    assert!(cpu.get_flag(Flag::Z), "16-bit add leaves Z alone");
    assert!(!cpu.get_flag(Flag::H));
    assert!(!cpu.get_flag(Flag::C));
}

#[test]
fn add_sp_r8_zero_extends_the_operand() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_code(&[0xE8, 0xFF]);
    cpu.regs.sp = 0x0100;
    cpu.set_flag(Flag::Z, true);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.sp, 0x01FF);
    assert!(cpu.get_flag(Flag::Z), "16-bit add leaves Z alone");
}

#[test]
fn sbc_folds_carry_into_the_subtrahend_with_wraparound() {
    let mut cpu = Cpu::new();
    cpu.regs.a = 0x10;
    cpu.set_flag(Flag::C, true);
    cpu.alu_sbc(0xFF);
    // 0xFF + carry wraps to 0x00: A unchanged, no carry, no half carry.
    assert_eq!(cpu.regs.a, 0x10);
    assert!(!cpu.get_flag(Flag::C));
    assert!(!cpu.get_flag(Flag::H));
    assert!(!cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::N));

    // The ordinary path still borrows.
    cpu.regs.a = 0x10;
    cpu.set_flag(Flag::C, true);
    cpu.alu_sbc(0x10);
    assert_eq!(cpu.regs.a, 0xFF);
    assert!(cpu.get_flag(Flag::C));
}
