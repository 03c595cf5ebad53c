use crate::cpu::{Bus, Cpu};

/// JR r8 (0x18): relative jump, signed offset from the byte after the
/// instruction (PC already points there).
pub(crate) fn jr_r8(cpu: &mut Cpu, _bus: &mut dyn Bus) {
    let offset = cpu.operand8 as i8;
    cpu.regs.pc = cpu.regs.pc.wrapping_add(offset as u16);
}

/// JR cc,r8 column (0x20/0x28/0x30/0x38). Condition in bits 4:3.
pub(crate) fn jr_cc_r8(cpu: &mut Cpu, bus: &mut dyn Bus) {
    if cpu.condition((cpu.opcode >> 3) & 0x03) {
        jr_r8(cpu, bus);
    }
}

/// JP a16 (0xC3).
pub(crate) fn jp_a16(cpu: &mut Cpu, _bus: &mut dyn Bus) {
    cpu.regs.pc = cpu.operand16;
}

/// JP cc,a16 column (0xC2/0xCA/0xD2/0xDA).
pub(crate) fn jp_cc_a16(cpu: &mut Cpu, bus: &mut dyn Bus) {
    if cpu.condition((cpu.opcode >> 3) & 0x03) {
        jp_a16(cpu, bus);
    }
}

/// JP HL (0xE9).
pub(crate) fn jp_hl(cpu: &mut Cpu, _bus: &mut dyn Bus) {
    cpu.regs.pc = cpu.regs.hl();
}

/// CALL a16 (0xCD): push the return address, jump to the target.
pub(crate) fn call_a16(cpu: &mut Cpu, bus: &mut dyn Bus) {
    let ret = cpu.regs.pc;
    cpu.push16(bus, ret);
    cpu.regs.pc = cpu.operand16;
}

/// CALL cc,a16 column (0xC4/0xCC/0xD4/0xDC).
pub(crate) fn call_cc_a16(cpu: &mut Cpu, bus: &mut dyn Bus) {
    if cpu.condition((cpu.opcode >> 3) & 0x03) {
        call_a16(cpu, bus);
    }
}

/// RET (0xC9).
pub(crate) fn ret(cpu: &mut Cpu, bus: &mut dyn Bus) {
    cpu.regs.pc = cpu.pop16(bus);
}

/// RET cc column (0xC0/0xC8/0xD0/0xD8).
pub(crate) fn ret_cc(cpu: &mut Cpu, bus: &mut dyn Bus) {
    if cpu.condition((cpu.opcode >> 3) & 0x03) {
        ret(cpu, bus);
    }
}

/// RETI (0xD9): return and restore the interrupt master flag.
pub(crate) fn reti(cpu: &mut Cpu, bus: &mut dyn Bus) {
    cpu.regs.pc = cpu.pop16(bus);
    cpu.ime = true;
}

/// RST column (0xC7/0xCF/../0xFF). The target vector is encoded in
/// bits 5:3 of the opcode, so masking with 0x38 recovers it directly.
pub(crate) fn rst(cpu: &mut Cpu, bus: &mut dyn Bus) {
    let ret = cpu.regs.pc;
    cpu.push16(bus, ret);
    cpu.regs.pc = (cpu.opcode & 0x38) as u16;
}
