use crate::cpu::{Bus, Cpu};

/// PUSH rr column (0xC5/0xD5/0xE5/0xF5). Pair index 3 is AF here,
/// unlike the LD/INC columns where it is SP.
pub(crate) fn push_rr(cpu: &mut Cpu, bus: &mut dyn Bus) {
    let value = match (cpu.opcode >> 4) & 0x03 {
        0 => cpu.regs.bc(),
        1 => cpu.regs.de(),
        2 => cpu.regs.hl(),
        _ => cpu.regs.af(),
    };
    cpu.push16(bus, value);
}

/// POP rr column (0xC1/0xD1/0xE1/0xF1). Popping into AF masks the low
/// nibble of F.
pub(crate) fn pop_rr(cpu: &mut Cpu, bus: &mut dyn Bus) {
    let value = cpu.pop16(bus);
    match (cpu.opcode >> 4) & 0x03 {
        0 => cpu.regs.set_bc(value),
        1 => cpu.regs.set_de(value),
        2 => cpu.regs.set_hl(value),
        _ => cpu.regs.set_af(value),
    }
}
