use crate::cpu::{Bus, Cpu, Flag};

/// ADD A,r row (0x80-0x87). Source register in bits 2:0.
pub(crate) fn add_a_r(cpu: &mut Cpu, bus: &mut dyn Bus) {
    let value = cpu.read_reg8(bus, cpu.opcode & 0x07);
    cpu.alu_add(value);
}

/// ADC A,r row (0x88-0x8F).
pub(crate) fn adc_a_r(cpu: &mut Cpu, bus: &mut dyn Bus) {
    let value = cpu.read_reg8(bus, cpu.opcode & 0x07);
    cpu.alu_adc(value);
}

/// SUB r row (0x90-0x97).
pub(crate) fn sub_r(cpu: &mut Cpu, bus: &mut dyn Bus) {
    let value = cpu.read_reg8(bus, cpu.opcode & 0x07);
    cpu.alu_sub(value);
}

/// SBC A,r row (0x98-0x9F).
pub(crate) fn sbc_a_r(cpu: &mut Cpu, bus: &mut dyn Bus) {
    let value = cpu.read_reg8(bus, cpu.opcode & 0x07);
    cpu.alu_sbc(value);
}

/// AND r row (0xA0-0xA7).
pub(crate) fn and_r(cpu: &mut Cpu, bus: &mut dyn Bus) {
    let value = cpu.read_reg8(bus, cpu.opcode & 0x07);
    cpu.alu_and(value);
}

/// XOR r row (0xA8-0xAF).
pub(crate) fn xor_r(cpu: &mut Cpu, bus: &mut dyn Bus) {
    let value = cpu.read_reg8(bus, cpu.opcode & 0x07);
    cpu.alu_xor(value);
}

/// OR r row (0xB0-0xB7).
pub(crate) fn or_r(cpu: &mut Cpu, bus: &mut dyn Bus) {
    let value = cpu.read_reg8(bus, cpu.opcode & 0x07);
    cpu.alu_or(value);
}

/// CP r row (0xB8-0xBF).
pub(crate) fn cp_r(cpu: &mut Cpu, bus: &mut dyn Bus) {
    let value = cpu.read_reg8(bus, cpu.opcode & 0x07);
    cpu.alu_cp(value);
}

pub(crate) fn add_a_d8(cpu: &mut Cpu, _bus: &mut dyn Bus) {
    cpu.alu_add(cpu.operand8);
}

pub(crate) fn adc_a_d8(cpu: &mut Cpu, _bus: &mut dyn Bus) {
    cpu.alu_adc(cpu.operand8);
}

pub(crate) fn sub_d8(cpu: &mut Cpu, _bus: &mut dyn Bus) {
    cpu.alu_sub(cpu.operand8);
}

pub(crate) fn sbc_a_d8(cpu: &mut Cpu, _bus: &mut dyn Bus) {
    cpu.alu_sbc(cpu.operand8);
}

pub(crate) fn and_d8(cpu: &mut Cpu, _bus: &mut dyn Bus) {
    cpu.alu_and(cpu.operand8);
}

pub(crate) fn xor_d8(cpu: &mut Cpu, _bus: &mut dyn Bus) {
    cpu.alu_xor(cpu.operand8);
}

pub(crate) fn or_d8(cpu: &mut Cpu, _bus: &mut dyn Bus) {
    cpu.alu_or(cpu.operand8);
}

pub(crate) fn cp_d8(cpu: &mut Cpu, _bus: &mut dyn Bus) {
    cpu.alu_cp(cpu.operand8);
}

/// ADD HL,rr column (0x09/0x19/0x29/0x39). Z is untouched.
pub(crate) fn add_hl_rr(cpu: &mut Cpu, _bus: &mut dyn Bus) {
    let value = match (cpu.opcode >> 4) & 0x03 {
        0 => cpu.regs.bc(),
        1 => cpu.regs.de(),
        2 => cpu.regs.hl(),
        _ => cpu.regs.sp,
    };
    let result = cpu.alu_add16(cpu.regs.hl(), value);
    cpu.regs.set_hl(result);
}

/// ADD SP,r8 (0xE8). The operand is zero-extended, not sign-extended,
/// and Z stays untouched like every other 16-bit add.
pub(crate) fn add_sp_r8(cpu: &mut Cpu, _bus: &mut dyn Bus) {
    cpu.regs.sp = cpu.alu_add16(cpu.regs.sp, cpu.operand8 as u16);
}

/// RLCA (0x07). Shares the rotate helper with CB RLC but clears Z
/// afterwards; the CB form keeps Z from the result.
pub(crate) fn rlca(cpu: &mut Cpu, _bus: &mut dyn Bus) {
    cpu.regs.a = cpu.rot_left(cpu.regs.a);
    cpu.set_flag(Flag::Z, false);
}

/// RRCA (0x0F). Same Z-clearing wrapper as RLCA.
pub(crate) fn rrca(cpu: &mut Cpu, _bus: &mut dyn Bus) {
    cpu.regs.a = cpu.rot_right(cpu.regs.a);
    cpu.set_flag(Flag::Z, false);
}

/// RLA (0x17): rotate A left through carry.
pub(crate) fn rla(cpu: &mut Cpu, _bus: &mut dyn Bus) {
    cpu.regs.a = cpu.rot_left_carry(cpu.regs.a);
    cpu.set_flag(Flag::Z, false);
}

/// RRA (0x1F): rotate A right through carry.
pub(crate) fn rra(cpu: &mut Cpu, _bus: &mut dyn Bus) {
    cpu.regs.a = cpu.rot_right_carry(cpu.regs.a);
    cpu.set_flag(Flag::Z, false);
}
