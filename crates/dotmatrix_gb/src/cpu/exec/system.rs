use crate::cpu::{Bus, Cpu, Flag};

pub(crate) fn nop(_cpu: &mut Cpu, _bus: &mut dyn Bus) {}

/// STOP (0x10). Treated as a no-op; low-power mode is not modelled.
pub(crate) fn stop(_cpu: &mut Cpu, _bus: &mut dyn Bus) {}

/// HALT (0x76): suspend execution until an interrupt is pending.
pub(crate) fn halt(cpu: &mut Cpu, _bus: &mut dyn Bus) {
    cpu.halted = true;
}

/// DI (0xF3): interrupt master flag cleared immediately.
pub(crate) fn di(cpu: &mut Cpu, _bus: &mut dyn Bus) {
    cpu.ime = false;
}

/// EI (0xFB): interrupt master flag set immediately, without the
/// one-instruction delay of the real hardware.
pub(crate) fn ei(cpu: &mut Cpu, _bus: &mut dyn Bus) {
    cpu.ime = true;
}

/// DAA (0x27): decimal-adjust A after a BCD add or subtract.
pub(crate) fn daa(cpu: &mut Cpu, _bus: &mut dyn Bus) {
    cpu.alu_daa();
}

/// CPL (0x2F): complement A. Sets N and H, leaves Z and C alone.
pub(crate) fn cpl(cpu: &mut Cpu, _bus: &mut dyn Bus) {
    cpu.regs.a = !cpu.regs.a;
    cpu.set_flag(Flag::N, true);
    cpu.set_flag(Flag::H, true);
}

/// SCF (0x37): set carry, clear N and H.
pub(crate) fn scf(cpu: &mut Cpu, _bus: &mut dyn Bus) {
    cpu.set_flag(Flag::N, false);
    cpu.set_flag(Flag::H, false);
    cpu.set_flag(Flag::C, true);
}

/// CCF (0x3F): complement carry, clear N and H.
pub(crate) fn ccf(cpu: &mut Cpu, _bus: &mut dyn Bus) {
    let carry = cpu.get_flag(Flag::C);
    cpu.set_flag(Flag::N, false);
    cpu.set_flag(Flag::H, false);
    cpu.set_flag(Flag::C, !carry);
}

/// 0xCB prefix. The fetch stage already dispatched the sub-opcode, so
/// the table entry itself has nothing left to do.
pub(crate) fn prefix_cb(_cpu: &mut Cpu, _bus: &mut dyn Bus) {}
