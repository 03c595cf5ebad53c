use crate::cpu::{Bus, Cpu};

/// LD r,r' block (0x40-0x7F except HALT). Destination in bits 5:3,
/// source in bits 2:0.
pub(crate) fn ld_r_r(cpu: &mut Cpu, bus: &mut dyn Bus) {
    let dst = (cpu.opcode >> 3) & 0x07;
    let src = cpu.opcode & 0x07;
    let value = cpu.read_reg8(bus, src);
    cpu.write_reg8(bus, dst, value);
}

/// LD r,d8 column (0x06/0x0E/../0x3E), including LD (HL),d8.
pub(crate) fn ld_r_d8(cpu: &mut Cpu, bus: &mut dyn Bus) {
    let dst = (cpu.opcode >> 3) & 0x07;
    let value = cpu.operand8;
    cpu.write_reg8(bus, dst, value);
}

/// LD rr,d16 column (0x01/0x11/0x21/0x31).
pub(crate) fn ld_rr_d16(cpu: &mut Cpu, _bus: &mut dyn Bus) {
    let value = cpu.operand16;
    match (cpu.opcode >> 4) & 0x03 {
        0 => cpu.regs.set_bc(value),
        1 => cpu.regs.set_de(value),
        2 => cpu.regs.set_hl(value),
        _ => cpu.regs.sp = value,
    }
}

/// Store A through a register pair: LD (BC),A / LD (DE),A and the
/// post-increment/post-decrement HL forms (0x02/0x12/0x22/0x32).
pub(crate) fn ld_rrp_a(cpu: &mut Cpu, bus: &mut dyn Bus) {
    let a = cpu.regs.a;
    match (cpu.opcode >> 4) & 0x03 {
        0 => bus.write8(cpu.regs.bc(), a),
        1 => bus.write8(cpu.regs.de(), a),
        2 => {
            let hl = cpu.regs.hl();
            bus.write8(hl, a);
            cpu.regs.set_hl(hl.wrapping_add(1));
        }
        _ => {
            let hl = cpu.regs.hl();
            bus.write8(hl, a);
            cpu.regs.set_hl(hl.wrapping_sub(1));
        }
    }
}

/// Load A through a register pair: LD A,(BC) / LD A,(DE) and the
/// post-increment/post-decrement HL forms (0x0A/0x1A/0x2A/0x3A).
pub(crate) fn ld_a_rrp(cpu: &mut Cpu, bus: &mut dyn Bus) {
    match (cpu.opcode >> 4) & 0x03 {
        0 => cpu.regs.a = bus.read8(cpu.regs.bc()),
        1 => cpu.regs.a = bus.read8(cpu.regs.de()),
        2 => {
            let hl = cpu.regs.hl();
            cpu.regs.a = bus.read8(hl);
            cpu.regs.set_hl(hl.wrapping_add(1));
        }
        _ => {
            let hl = cpu.regs.hl();
            cpu.regs.a = bus.read8(hl);
            cpu.regs.set_hl(hl.wrapping_sub(1));
        }
    }
}

/// LD (a16),SP (0x08): SP stored little-endian.
pub(crate) fn ld_a16_sp(cpu: &mut Cpu, bus: &mut dyn Bus) {
    let addr = cpu.operand16;
    bus.write8(addr, cpu.regs.sp as u8);
    bus.write8(addr.wrapping_add(1), (cpu.regs.sp >> 8) as u8);
}

/// LDH (a8),A (0xE0): high-page store.
pub(crate) fn ldh_a8_a(cpu: &mut Cpu, bus: &mut dyn Bus) {
    bus.write8(0xFF00 + cpu.operand8 as u16, cpu.regs.a);
}

/// LDH A,(a8) (0xF0): high-page load.
pub(crate) fn ldh_a_a8(cpu: &mut Cpu, bus: &mut dyn Bus) {
    cpu.regs.a = bus.read8(0xFF00 + cpu.operand8 as u16);
}

/// LD (C),A (0xE2).
pub(crate) fn ld_cp_a(cpu: &mut Cpu, bus: &mut dyn Bus) {
    bus.write8(0xFF00 + cpu.regs.c as u16, cpu.regs.a);
}

/// LD A,(C) (0xF2).
pub(crate) fn ld_a_cp(cpu: &mut Cpu, bus: &mut dyn Bus) {
    cpu.regs.a = bus.read8(0xFF00 + cpu.regs.c as u16);
}

/// LD (a16),A (0xEA).
pub(crate) fn ld_a16_a(cpu: &mut Cpu, bus: &mut dyn Bus) {
    bus.write8(cpu.operand16, cpu.regs.a);
}

/// LD A,(a16) (0xFA).
pub(crate) fn ld_a_a16(cpu: &mut Cpu, bus: &mut dyn Bus) {
    cpu.regs.a = bus.read8(cpu.operand16);
}

/// LD SP,HL (0xF9).
pub(crate) fn ld_sp_hl(cpu: &mut Cpu, _bus: &mut dyn Bus) {
    cpu.regs.sp = cpu.regs.hl();
}

/// LD HL,SP+r8 (0xF8): zero-extended offset with the 16-bit add flag
/// rules, Z untouched.
pub(crate) fn ld_hl_sp_r8(cpu: &mut Cpu, _bus: &mut dyn Bus) {
    let result = cpu.alu_add16(cpu.regs.sp, cpu.operand8 as u16);
    cpu.regs.set_hl(result);
}
