//! CB-prefixed opcode table: rotates, shifts, SWAP and the single-bit
//! BIT/RES/SET operations.
//!
//! The fetch stage dispatches here when the primary opcode is 0xCB; the
//! sub-opcode arrives in the CPU's 8-bit operand latch. Every handler
//! decodes the target register from bits 2:0 of that latch, and the
//! BIT/RES/SET families decode the bit number from bits 5:3, so eight
//! handlers cover all 256 entries. Cycle cost is charged from the
//! primary table's 0xCB entry, never from here.

use super::table::{Handler, Instr};
use super::{Bus, Cpu};

const fn op(mnemonic: &'static str, handler: Handler) -> Instr {
    Instr {
        mnemonic,
        length: 2,
        handler: Some(handler),
    }
}

/// RLC r: rotate left, bit 7 into carry and bit 0. Unlike RLCA, Z is
/// kept from the result.
fn rlc_r(cpu: &mut Cpu, bus: &mut dyn Bus) {
    let index = cpu.operand8 & 0x07;
    let value = cpu.read_reg8(bus, index);
    let result = cpu.rot_left(value);
    cpu.write_reg8(bus, index, result);
}

/// RRC r: rotate right, bit 0 into carry and bit 7.
fn rrc_r(cpu: &mut Cpu, bus: &mut dyn Bus) {
    let index = cpu.operand8 & 0x07;
    let value = cpu.read_reg8(bus, index);
    let result = cpu.rot_right(value);
    cpu.write_reg8(bus, index, result);
}

/// RL r: rotate left through carry.
fn rl_r(cpu: &mut Cpu, bus: &mut dyn Bus) {
    let index = cpu.operand8 & 0x07;
    let value = cpu.read_reg8(bus, index);
    let result = cpu.rot_left_carry(value);
    cpu.write_reg8(bus, index, result);
}

/// RR r: rotate right through carry.
fn rr_r(cpu: &mut Cpu, bus: &mut dyn Bus) {
    let index = cpu.operand8 & 0x07;
    let value = cpu.read_reg8(bus, index);
    let result = cpu.rot_right_carry(value);
    cpu.write_reg8(bus, index, result);
}

/// SLA r: arithmetic shift left, bit 0 cleared.
fn sla_r(cpu: &mut Cpu, bus: &mut dyn Bus) {
    let index = cpu.operand8 & 0x07;
    let value = cpu.read_reg8(bus, index);
    let result = cpu.shift_left(value);
    cpu.write_reg8(bus, index, result);
}

/// SRA r: arithmetic shift right, sign bit preserved.
fn sra_r(cpu: &mut Cpu, bus: &mut dyn Bus) {
    let index = cpu.operand8 & 0x07;
    let value = cpu.read_reg8(bus, index);
    let result = cpu.shift_right_arith(value);
    cpu.write_reg8(bus, index, result);
}

/// SWAP r: exchange nibbles.
fn swap_r(cpu: &mut Cpu, bus: &mut dyn Bus) {
    let index = cpu.operand8 & 0x07;
    let value = cpu.read_reg8(bus, index);
    let result = cpu.alu_swap(value);
    cpu.write_reg8(bus, index, result);
}

/// SRL r: logical shift right, bit 7 cleared.
fn srl_r(cpu: &mut Cpu, bus: &mut dyn Bus) {
    let index = cpu.operand8 & 0x07;
    let value = cpu.read_reg8(bus, index);
    let result = cpu.shift_right(value);
    cpu.write_reg8(bus, index, result);
}

/// BIT n,r: Z reports the bit being clear. Register is not written.
fn bit_n_r(cpu: &mut Cpu, bus: &mut dyn Bus) {
    let index = cpu.operand8 & 0x07;
    let bit = (cpu.operand8 >> 3) & 0x07;
    let value = cpu.read_reg8(bus, index);
    cpu.bit_test(bit, value);
}

/// RES n,r: clear a bit. No flags.
fn res_n_r(cpu: &mut Cpu, bus: &mut dyn Bus) {
    let index = cpu.operand8 & 0x07;
    let bit = (cpu.operand8 >> 3) & 0x07;
    let value = cpu.read_reg8(bus, index);
    cpu.write_reg8(bus, index, value & !(1 << bit));
}

/// SET n,r: set a bit. No flags.
fn set_n_r(cpu: &mut Cpu, bus: &mut dyn Bus) {
    let index = cpu.operand8 & 0x07;
    let bit = (cpu.operand8 >> 3) & 0x07;
    let value = cpu.read_reg8(bus, index);
    cpu.write_reg8(bus, index, value | (1 << bit));
}

#[rustfmt::skip]
pub static CB_OPCODES: [Instr; 256] = [
    op("RLC B", rlc_r),        // 0x00
    op("RLC C", rlc_r),        // 0x01
    op("RLC D", rlc_r),        // 0x02
    op("RLC E", rlc_r),        // 0x03
    op("RLC H", rlc_r),        // 0x04
    op("RLC L", rlc_r),        // 0x05
    op("RLC (HL)", rlc_r),     // 0x06
    op("RLC A", rlc_r),        // 0x07
    op("RRC B", rrc_r),        // 0x08
    op("RRC C", rrc_r),        // 0x09
    op("RRC D", rrc_r),        // 0x0A
    op("RRC E", rrc_r),        // 0x0B
    op("RRC H", rrc_r),        // 0x0C
    op("RRC L", rrc_r),        // 0x0D
    op("RRC (HL)", rrc_r),     // 0x0E
    op("RRC A", rrc_r),        // 0x0F
    op("RL B", rl_r),          // 0x10
    op("RL C", rl_r),          // 0x11
    op("RL D", rl_r),          // 0x12
    op("RL E", rl_r),          // 0x13
    op("RL H", rl_r),          // 0x14
    op("RL L", rl_r),          // 0x15
    op("RL (HL)", rl_r),       // 0x16
    op("RL A", rl_r),          // 0x17
    op("RR B", rr_r),          // 0x18
    op("RR C", rr_r),          // 0x19
    op("RR D", rr_r),          // 0x1A
    op("RR E", rr_r),          // 0x1B
    op("RR H", rr_r),          // 0x1C
    op("RR L", rr_r),          // 0x1D
    op("RR (HL)", rr_r),       // 0x1E
    op("RR A", rr_r),          // 0x1F
    op("SLA B", sla_r),        // 0x20
    op("SLA C", sla_r),        // 0x21
    op("SLA D", sla_r),        // 0x22
    op("SLA E", sla_r),        // 0x23
    op("SLA H", sla_r),        // 0x24
    op("SLA L", sla_r),        // 0x25
    op("SLA (HL)", sla_r),     // 0x26
    op("SLA A", sla_r),        // 0x27
    op("SRA B", sra_r),        // 0x28
    op("SRA C", sra_r),        // 0x29
    op("SRA D", sra_r),        // 0x2A
    op("SRA E", sra_r),        // 0x2B
    op("SRA H", sra_r),        // 0x2C
    op("SRA L", sra_r),        // 0x2D
    op("SRA (HL)", sra_r),     // 0x2E
    op("SRA A", sra_r),        // 0x2F
    op("SWAP B", swap_r),      // 0x30
    op("SWAP C", swap_r),      // 0x31
    op("SWAP D", swap_r),      // 0x32
    op("SWAP E", swap_r),      // 0x33
    op("SWAP H", swap_r),      // 0x34
    op("SWAP L", swap_r),      // 0x35
    op("SWAP (HL)", swap_r),   // 0x36
    op("SWAP A", swap_r),      // 0x37
    op("SRL B", srl_r),        // 0x38
    op("SRL C", srl_r),        // 0x39
    op("SRL D", srl_r),        // 0x3A
    op("SRL E", srl_r),        // 0x3B
    op("SRL H", srl_r),        // 0x3C
    op("SRL L", srl_r),        // 0x3D
    op("SRL (HL)", srl_r),     // 0x3E
    op("SRL A", srl_r),        // 0x3F
    op("BIT 0,B", bit_n_r),    // 0x40
    op("BIT 0,C", bit_n_r),    // 0x41
    op("BIT 0,D", bit_n_r),    // 0x42
    op("BIT 0,E", bit_n_r),    // 0x43
    op("BIT 0,H", bit_n_r),    // 0x44
    op("BIT 0,L", bit_n_r),    // 0x45
    op("BIT 0,(HL)", bit_n_r), // 0x46
    op("BIT 0,A", bit_n_r),    // 0x47
    op("BIT 1,B", bit_n_r),    // 0x48
    op("BIT 1,C", bit_n_r),    // 0x49
    op("BIT 1,D", bit_n_r),    // 0x4A
    op("BIT 1,E", bit_n_r),    // 0x4B
    op("BIT 1,H", bit_n_r),    // 0x4C
    op("BIT 1,L", bit_n_r),    // 0x4D
    op("BIT 1,(HL)", bit_n_r), // 0x4E
    op("BIT 1,A", bit_n_r),    // 0x4F
    op("BIT 2,B", bit_n_r),    // 0x50
    op("BIT 2,C", bit_n_r),    // 0x51
    op("BIT 2,D", bit_n_r),    // 0x52
    op("BIT 2,E", bit_n_r),    // 0x53
    op("BIT 2,H", bit_n_r),    // 0x54
    op("BIT 2,L", bit_n_r),    // 0x55
    op("BIT 2,(HL)", bit_n_r), // 0x56
    op("BIT 2,A", bit_n_r),    // 0x57
    op("BIT 3,B", bit_n_r),    // 0x58
    op("BIT 3,C", bit_n_r),    // 0x59
    op("BIT 3,D", bit_n_r),    // 0x5A
    op("BIT 3,E", bit_n_r),    // 0x5B
    op("BIT 3,H", bit_n_r),    // 0x5C
    op("BIT 3,L", bit_n_r),    // 0x5D
    op("BIT 3,(HL)", bit_n_r), // 0x5E
    op("BIT 3,A", bit_n_r),    // 0x5F
    op("BIT 4,B", bit_n_r),    // 0x60
    op("BIT 4,C", bit_n_r),    // 0x61
    op("BIT 4,D", bit_n_r),    // 0x62
    op("BIT 4,E", bit_n_r),    // 0x63
    op("BIT 4,H", bit_n_r),    // 0x64
    op("BIT 4,L", bit_n_r),    // 0x65
    op("BIT 4,(HL)", bit_n_r), // 0x66
    op("BIT 4,A", bit_n_r),    // 0x67
    op("BIT 5,B", bit_n_r),    // 0x68
    op("BIT 5,C", bit_n_r),    // 0x69
    op("BIT 5,D", bit_n_r),    // 0x6A
    op("BIT 5,E", bit_n_r),    // 0x6B
    op("BIT 5,H", bit_n_r),    // 0x6C
    op("BIT 5,L", bit_n_r),    // 0x6D
    op("BIT 5,(HL)", bit_n_r), // 0x6E
    op("BIT 5,A", bit_n_r),    // 0x6F
    op("BIT 6,B", bit_n_r),    // 0x70
    op("BIT 6,C", bit_n_r),    // 0x71
    op("BIT 6,D", bit_n_r),    // 0x72
    op("BIT 6,E", bit_n_r),    // 0x73
    op("BIT 6,H", bit_n_r),    // 0x74
    op("BIT 6,L", bit_n_r),    // 0x75
    op("BIT 6,(HL)", bit_n_r), // 0x76
    op("BIT 6,A", bit_n_r),    // 0x77
    op("BIT 7,B", bit_n_r),    // 0x78
    op("BIT 7,C", bit_n_r),    // 0x79
    op("BIT 7,D", bit_n_r),    // 0x7A
    op("BIT 7,E", bit_n_r),    // 0x7B
    op("BIT 7,H", bit_n_r),    // 0x7C
    op("BIT 7,L", bit_n_r),    // 0x7D
    op("BIT 7,(HL)", bit_n_r), // 0x7E
    op("BIT 7,A", bit_n_r),    // 0x7F
    op("RES 0,B", res_n_r),    // 0x80
    op("RES 0,C", res_n_r),    // 0x81
    op("RES 0,D", res_n_r),    // 0x82
    op("RES 0,E", res_n_r),    // 0x83
    op("RES 0,H", res_n_r),    // 0x84
    op("RES 0,L", res_n_r),    // 0x85
    op("RES 0,(HL)", res_n_r), // 0x86
    op("RES 0,A", res_n_r),    // 0x87
    op("RES 1,B", res_n_r),    // 0x88
    op("RES 1,C", res_n_r),    // 0x89
    op("RES 1,D", res_n_r),    // 0x8A
    op("RES 1,E", res_n_r),    // 0x8B
    op("RES 1,H", res_n_r),    // 0x8C
    op("RES 1,L", res_n_r),    // 0x8D
    op("RES 1,(HL)", res_n_r), // 0x8E
    op("RES 1,A", res_n_r),    // 0x8F
    op("RES 2,B", res_n_r),    // 0x90
    op("RES 2,C", res_n_r),    // 0x91
    op("RES 2,D", res_n_r),    // 0x92
    op("RES 2,E", res_n_r),    // 0x93
    op("RES 2,H", res_n_r),    // 0x94
    op("RES 2,L", res_n_r),    // 0x95
    op("RES 2,(HL)", res_n_r), // 0x96
    op("RES 2,A", res_n_r),    // 0x97
    op("RES 3,B", res_n_r),    // 0x98
    op("RES 3,C", res_n_r),    // 0x99
    op("RES 3,D", res_n_r),    // 0x9A
    op("RES 3,E", res_n_r),    // 0x9B
    op("RES 3,H", res_n_r),    // 0x9C
    op("RES 3,L", res_n_r),    // 0x9D
    op("RES 3,(HL)", res_n_r), // 0x9E
    op("RES 3,A", res_n_r),    // 0x9F
    op("RES 4,B", res_n_r),    // 0xA0
    op("RES 4,C", res_n_r),    // 0xA1
    op("RES 4,D", res_n_r),    // 0xA2
    op("RES 4,E", res_n_r),    // 0xA3
    op("RES 4,H", res_n_r),    // 0xA4
    op("RES 4,L", res_n_r),    // 0xA5
    op("RES 4,(HL)", res_n_r), // 0xA6
    op("RES 4,A", res_n_r),    // 0xA7
    op("RES 5,B", res_n_r),    // 0xA8
    op("RES 5,C", res_n_r),    // 0xA9
    op("RES 5,D", res_n_r),    // 0xAA
    op("RES 5,E", res_n_r),    // 0xAB
    op("RES 5,H", res_n_r),    // 0xAC
    op("RES 5,L", res_n_r),    // 0xAD
    op("RES 5,(HL)", res_n_r), // 0xAE
    op("RES 5,A", res_n_r),    // 0xAF
    op("RES 6,B", res_n_r),    // 0xB0
    op("RES 6,C", res_n_r),    // 0xB1
    op("RES 6,D", res_n_r),    // 0xB2
    op("RES 6,E", res_n_r),    // 0xB3
    op("RES 6,H", res_n_r),    // 0xB4
    op("RES 6,L", res_n_r),    // 0xB5
    op("RES 6,(HL)", res_n_r), // 0xB6
    op("RES 6,A", res_n_r),    // 0xB7
    op("RES 7,B", res_n_r),    // 0xB8
    op("RES 7,C", res_n_r),    // 0xB9
    op("RES 7,D", res_n_r),    // 0xBA
    op("RES 7,E", res_n_r),    // 0xBB
    op("RES 7,H", res_n_r),    // 0xBC
    op("RES 7,L", res_n_r),    // 0xBD
    op("RES 7,(HL)", res_n_r), // 0xBE
    op("RES 7,A", res_n_r),    // 0xBF
    op("SET 0,B", set_n_r),    // 0xC0
    op("SET 0,C", set_n_r),    // 0xC1
    op("SET 0,D", set_n_r),    // 0xC2
    op("SET 0,E", set_n_r),    // 0xC3
    op("SET 0,H", set_n_r),    // 0xC4
    op("SET 0,L", set_n_r),    // 0xC5
    op("SET 0,(HL)", set_n_r), // 0xC6
    op("SET 0,A", set_n_r),    // 0xC7
    op("SET 1,B", set_n_r),    // 0xC8
    op("SET 1,C", set_n_r),    // 0xC9
    op("SET 1,D", set_n_r),    // 0xCA
    op("SET 1,E", set_n_r),    // 0xCB
    op("SET 1,H", set_n_r),    // 0xCC
    op("SET 1,L", set_n_r),    // 0xCD
    op("SET 1,(HL)", set_n_r), // 0xCE
    op("SET 1,A", set_n_r),    // 0xCF
    op("SET 2,B", set_n_r),    // 0xD0
    op("SET 2,C", set_n_r),    // 0xD1
    op("SET 2,D", set_n_r),    // 0xD2
    op("SET 2,E", set_n_r),    // 0xD3
    op("SET 2,H", set_n_r),    // 0xD4
    op("SET 2,L", set_n_r),    // 0xD5
    op("SET 2,(HL)", set_n_r), // 0xD6
    op("SET 2,A", set_n_r),    // 0xD7
    op("SET 3,B", set_n_r),    // 0xD8
    op("SET 3,C", set_n_r),    // 0xD9
    op("SET 3,D", set_n_r),    // 0xDA
    op("SET 3,E", set_n_r),    // 0xDB
    op("SET 3,H", set_n_r),    // 0xDC
    op("SET 3,L", set_n_r),    // 0xDD
    op("SET 3,(HL)", set_n_r), // 0xDE
    op("SET 3,A", set_n_r),    // 0xDF
    op("SET 4,B", set_n_r),    // 0xE0
    op("SET 4,C", set_n_r),    // 0xE1
    op("SET 4,D", set_n_r),    // 0xE2
    op("SET 4,E", set_n_r),    // 0xE3
    op("SET 4,H", set_n_r),    // 0xE4
    op("SET 4,L", set_n_r),    // 0xE5
    op("SET 4,(HL)", set_n_r), // 0xE6
    op("SET 4,A", set_n_r),    // 0xE7
    op("SET 5,B", set_n_r),    // 0xE8
    op("SET 5,C", set_n_r),    // 0xE9
    op("SET 5,D", set_n_r),    // 0xEA
    op("SET 5,E", set_n_r),    // 0xEB
    op("SET 5,H", set_n_r),    // 0xEC
    op("SET 5,L", set_n_r),    // 0xED
    op("SET 5,(HL)", set_n_r), // 0xEE
    op("SET 5,A", set_n_r),    // 0xEF
    op("SET 6,B", set_n_r),    // 0xF0
    op("SET 6,C", set_n_r),    // 0xF1
    op("SET 6,D", set_n_r),    // 0xF2
    op("SET 6,E", set_n_r),    // 0xF3
    op("SET 6,H", set_n_r),    // 0xF4
    op("SET 6,L", set_n_r),    // 0xF5
    op("SET 6,(HL)", set_n_r), // 0xF6
    op("SET 6,A", set_n_r),    // 0xF7
    op("SET 7,B", set_n_r),    // 0xF8
    op("SET 7,C", set_n_r),    // 0xF9
    op("SET 7,D", set_n_r),    // 0xFA
    op("SET 7,E", set_n_r),    // 0xFB
    op("SET 7,H", set_n_r),    // 0xFC
    op("SET 7,L", set_n_r),    // 0xFD
    op("SET 7,(HL)", set_n_r), // 0xFE
    op("SET 7,A", set_n_r),    // 0xFF
];
