use crate::cpu::{Bus, Cpu};

/// INC r column (0x04/0x0C/../0x3C), including INC (HL). Carry is
/// untouched.
pub(crate) fn inc_r(cpu: &mut Cpu, bus: &mut dyn Bus) {
    let index = (cpu.opcode >> 3) & 0x07;
    let value = cpu.read_reg8(bus, index);
    let result = cpu.alu_inc8(value);
    cpu.write_reg8(bus, index, result);
}

/// DEC r column (0x05/0x0D/../0x3D), including DEC (HL).
pub(crate) fn dec_r(cpu: &mut Cpu, bus: &mut dyn Bus) {
    let index = (cpu.opcode >> 3) & 0x07;
    let value = cpu.read_reg8(bus, index);
    let result = cpu.alu_dec8(value);
    cpu.write_reg8(bus, index, result);
}

/// INC rr column (0x03/0x13/0x23/0x33). No flags.
pub(crate) fn inc_rr(cpu: &mut Cpu, _bus: &mut dyn Bus) {
    match (cpu.opcode >> 4) & 0x03 {
        0 => cpu.regs.set_bc(cpu.regs.bc().wrapping_add(1)),
        1 => cpu.regs.set_de(cpu.regs.de().wrapping_add(1)),
        2 => cpu.regs.set_hl(cpu.regs.hl().wrapping_add(1)),
        _ => cpu.regs.sp = cpu.regs.sp.wrapping_add(1),
    }
}

/// DEC rr column (0x0B/0x1B/0x2B/0x3B). No flags.
pub(crate) fn dec_rr(cpu: &mut Cpu, _bus: &mut dyn Bus) {
    match (cpu.opcode >> 4) & 0x03 {
        0 => cpu.regs.set_bc(cpu.regs.bc().wrapping_sub(1)),
        1 => cpu.regs.set_de(cpu.regs.de().wrapping_sub(1)),
        2 => cpu.regs.set_hl(cpu.regs.hl().wrapping_sub(1)),
        _ => cpu.regs.sp = cpu.regs.sp.wrapping_sub(1),
    }
}
